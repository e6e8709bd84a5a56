/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;
