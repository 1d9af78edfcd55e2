use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The device reference or one of its channel paths does not exist.
    NotFound { path: String, source: io::Error },
    /// The device reference does not end in `@global` or `:global`.
    InvalidFormat(String),
    UnsupportedPalette(String),
    /// The palette generator had fewer valid samples than colors requested.
    SamplingFailure { requested: usize, available: usize },
    WriteFailure { path: String, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { path, .. } => write!(f, "{}: not found", path),
            Error::InvalidFormat(path) => write!(
                f,
                "{}: device must end with @global or :global",
                path
            ),
            Error::UnsupportedPalette(name) => write!(f, "Unknown color palette {}", name),
            Error::SamplingFailure {
                requested,
                available,
            } => write!(
                f,
                "more colors requested ({}) than samples available ({}), the palette constraint leaves too small a color space",
                requested, available
            ),
            Error::WriteFailure { path, .. } => write!(f, "failed to write {}", path),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { source, .. } | Error::WriteFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        let err = Error::UnsupportedPalette("neon".to_string());
        assert_eq!(err.to_string(), "Unknown color palette neon");

        let err = Error::InvalidFormat("/sys/class/leds/ctrl1@red".to_string());
        assert!(err.to_string().contains("@global"));
    }

    #[test]
    fn test_source_chain() {
        let err = Error::WriteFailure {
            path: "x/brightness".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(Error::InvalidFormat(String::new()).source().is_none());
    }
}
