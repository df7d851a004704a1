use super::Error;
use std::sync::Arc;

/// Error when a call into the table store fails.
///
/// This wraps errors from the underlying client libraries:
/// - Connection and credential errors
/// - Service errors returned by the store (missing table, throttling, ...)
/// - Request builder errors for malformed requests
#[derive(Debug, Clone)]
pub(super) struct DriverOperationFailed {
    pub(super) inner: Arc<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver operation failure.
    ///
    /// This is the preferred way to convert client-specific errors (AWS SDK errors, builder
    /// errors, etc.) into order store errors.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(
            DriverOperationFailed {
                inner: Arc::new(err),
            },
        ))
    }

    /// Returns `true` if this error, or one of its causes, is a driver operation failure.
    pub fn is_driver_operation_failed(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::DriverOperationFailed(_)))
    }
}
