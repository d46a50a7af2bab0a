pub mod error;
pub mod growth;
pub mod parser;
pub mod repair;

pub use error::ParseError;
pub use growth::classify;
pub use parser::parse;
pub use repair::{ensure_lhs, insert_missing_plus};
