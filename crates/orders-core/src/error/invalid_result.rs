use super::Error;

/// Error when a driver response has an unexpected shape.
///
/// This occurs when an operation expecting items receives a row count (or the
/// other way around). The store answered, but not with what the operation asked for.
#[derive(Debug, Clone)]
pub(super) struct InvalidResult {
    message: Box<str>,
}

impl std::error::Error for InvalidResult {}

impl core::fmt::Display for InvalidResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResult {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or one of its causes, is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidResult(_)))
    }
}
