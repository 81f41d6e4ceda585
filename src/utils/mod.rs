pub mod data;
pub mod error;
pub mod logging;

pub use error::ParseError;
