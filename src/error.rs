use std::fmt;

#[derive(Debug)]
pub enum ShibliError {
    ConfigError(String),
    InvalidImageFormat(String),
    ImageTooLarge(String),
    DescriptionError(String),
    GenerationError(String),
    RequestError(String),
    ResponseError(String),
    InternalError(String),
}

impl ShibliError {
    /// True for failures the caller can fix by changing the upload.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ShibliError::InvalidImageFormat(_) | ShibliError::ImageTooLarge(_)
        )
    }
}

impl fmt::Display for ShibliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShibliError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ShibliError::InvalidImageFormat(msg) => write!(f, "Invalid image format: {}", msg),
            ShibliError::ImageTooLarge(msg) => write!(f, "Image too large: {}", msg),
            ShibliError::DescriptionError(msg) => write!(f, "Description service error: {}", msg),
            ShibliError::GenerationError(msg) => write!(f, "Generation service error: {}", msg),
            ShibliError::RequestError(msg) => write!(f, "Request error: {}", msg),
            ShibliError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            ShibliError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ShibliError {}

pub type Result<T> = std::result::Result<T, ShibliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ShibliError::InvalidImageFormat("bad header".into()).is_client_error());
        assert!(ShibliError::ImageTooLarge("5 MiB".into()).is_client_error());

        assert!(!ShibliError::DescriptionError("timeout".into()).is_client_error());
        assert!(!ShibliError::GenerationError("no images".into()).is_client_error());
        assert!(!ShibliError::ConfigError("no key".into()).is_client_error());
        assert!(!ShibliError::InternalError("boom".into()).is_client_error());
    }

    #[test]
    fn test_display() {
        let err = ShibliError::ImageTooLarge("still 5242880 bytes after resize".into());
        assert_eq!(
            err.to_string(),
            "Image too large: still 5242880 bytes after resize"
        );

        let err = ShibliError::DescriptionError("OpenAI API error 401: bad key".into());
        assert_eq!(
            err.to_string(),
            "Description service error: OpenAI API error 401: bad key"
        );
    }
}
