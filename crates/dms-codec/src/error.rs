use thiserror::Error;

/// Errors raised while generating the structured representation.
///
/// Decoding never errors; undecodable input degrades to empty content.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("write xml event: {0}")]
    Write(#[from] std::io::Error),
    #[error("encoded document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
