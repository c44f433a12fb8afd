mod json;
mod memory;

pub use self::json::*;
pub use self::memory::*;

use std::io;

use crate::domain::DataAccessError;

impl From<io::Error> for DataAccessError {
    fn from(value: io::Error) -> Self {
        DataAccessError::ReadError(Box::new(value))
    }
}

impl From<serde_json::Error> for DataAccessError {
    fn from(value: serde_json::Error) -> Self {
        match value.classify() {
            serde_json::error::Category::Io => DataAccessError::ReadError(Box::new(value)),
            serde_json::error::Category::Syntax
            | serde_json::error::Category::Data
            | serde_json::error::Category::Eof => DataAccessError::ParseError(Box::new(value)),
        }
    }
}
