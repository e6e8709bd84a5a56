/// The state of an asynchronous resource fetch.
///
/// A fetch produces exactly one `Loading(true)` followed by exactly one
/// terminal state, either `Success` or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResult<T> {
    /// The fetch has started and no terminal state has been produced yet.
    Loading(bool),

    /// The fetch completed and produced a value.
    Success(T),

    /// The fetch failed with a descriptive message.
    Failure(String),
}

impl<T> NetworkResult<T> {
    /// Whether this state is a loading state.
    pub fn is_loading(&self) -> bool {
        matches!(self, NetworkResult::Loading(_))
    }

    /// Whether this state is terminal, i.e. a success or a failure.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_not_terminal() {
        let state: NetworkResult<Vec<u32>> = NetworkResult::Loading(true);

        assert!(state.is_loading());
        assert!(!state.is_terminal());
    }

    #[test]
    fn success_is_terminal() {
        let state = NetworkResult::Success(vec![1, 2, 3]);

        assert!(!state.is_loading());
        assert!(state.is_terminal());
    }

    #[test]
    fn failure_is_terminal() {
        let state: NetworkResult<Vec<u32>> = NetworkResult::Failure("timeout".to_string());

        assert!(!state.is_loading());
        assert!(state.is_terminal());
    }
}
