use thiserror::Error;

use super::codec::HexError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::ser::Error),

    #[error("{0}")]
    Hex(#[from] HexError),

    #[error("nothing to convert")]
    EmptyInput,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_hex_error_conversion() {
        let app_err: AppError = HexError::OddLength.into();
        assert_eq!(app_err.to_string(), "hex string has odd length");
    }

    #[test]
    fn test_empty_input_display() {
        assert_eq!(AppError::EmptyInput.to_string(), "nothing to convert");
    }
}
