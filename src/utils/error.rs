use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for conversion operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for conversion operations
#[derive(Debug)]
pub enum ConversioError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Template loading or filling error
    Template(String),
    /// Markdown rendering or highlighting error
    Markdown(String),
    /// File handling error
    File(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for ConversioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversioError::Io(err) => write!(f, "IO error: {}", err),
            ConversioError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ConversioError::Template(msg) => write!(f, "Template error: {}", msg),
            ConversioError::Markdown(msg) => write!(f, "Markdown error: {}", msg),
            ConversioError::File(msg) => write!(f, "File error: {}", msg),
            ConversioError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for ConversioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConversioError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConversioError {
    fn from(err: io::Error) -> Self {
        ConversioError::Io(err)
    }
}

impl From<String> for ConversioError {
    fn from(msg: String) -> Self {
        ConversioError::Generic(msg)
    }
}

impl From<&str> for ConversioError {
    fn from(msg: &str) -> Self {
        ConversioError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConversioError::Config("bad style".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad style");

        let err: ConversioError = "plain".into();
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_io_source() {
        let err = ConversioError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error"));
    }
}
