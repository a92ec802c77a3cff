mod catalog;
mod decode;
mod describe;
mod parse_enum;
mod types;

use std::io;
use std::path::PathBuf;

use serialization::SerializationError;
use thiserror::Error;

pub use decode::decode;
pub use describe::describe;
pub use parse_enum::parse_enum;
pub use types::types;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown type '{0}'; run `betasdk types` for the list")]
    UnknownType(String),
    #[error("Unknown enum '{0}'; run `betasdk types` for the list")]
    UnknownEnum(String),
    #[error("Failed to read {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read standard input")]
    ReadStdin(#[source] io::Error),
    #[error("Input is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Failed to decode payload as '{type_name}'")]
    Decode {
        type_name: String,
        #[source]
        source: SerializationError,
    },
}
