mod fetcher;
mod repository;

pub use fetcher::*;
pub use repository::*;
