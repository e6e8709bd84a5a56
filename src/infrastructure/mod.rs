mod fetcher_rest;
mod repository_remote;

pub use fetcher_rest::*;
pub use repository_remote::*;
