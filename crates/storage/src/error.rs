use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

/// Failure reported by an object storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage service rejected the request (e.g. `BucketAlreadyExists`,
    /// `NoSuchBucket`). Safe to show to the caller.
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// The request was malformed before it reached the service.
    #[error("Invalid storage request: {0}")]
    InvalidRequest(String),

    /// The service could not be reached or returned an unparseable response.
    #[error("Storage transport error: {0}")]
    Transport(String),
}

impl StorageError {
    pub(crate) fn service(code: &str, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Classify an SDK failure by whether the service returned error metadata.
    pub(crate) fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        match err.code() {
            Some(code) => Self::service(code, err.message().unwrap_or(code)),
            None => Self::Transport(DisplayErrorContext(&err).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_code_and_message() {
        let err = StorageError::service("NoSuchBucket", "The specified bucket does not exist");
        assert_eq!(
            err.to_string(),
            "NoSuchBucket: The specified bucket does not exist"
        );
    }
}
