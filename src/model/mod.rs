mod entities;
mod error;
mod network_result;
mod response;

pub use entities::*;
pub use error::*;
pub use network_result::*;
pub use response::*;
