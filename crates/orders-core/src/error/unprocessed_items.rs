use super::Error;

/// Error when a batch write returns items the store did not apply.
///
/// The store may accept a batch request while leaving some of its writes
/// unprocessed (throttling, size limits). Those writes are not retried.
#[derive(Debug, Clone)]
pub(super) struct UnprocessedItems {
    table: Box<str>,
    count: usize,
}

impl std::error::Error for UnprocessedItems {}

impl core::fmt::Display for UnprocessedItems {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "batch write left {} unprocessed items in table `{}`",
            self.count, self.table
        )
    }
}

impl Error {
    /// Creates an unprocessed items error for `count` writes left behind in `table`.
    pub fn unprocessed_items(table: impl Into<String>, count: usize) -> Error {
        Error::from(super::ErrorKind::UnprocessedItems(UnprocessedItems {
            table: table.into().into(),
            count,
        }))
    }

    /// Returns `true` if this error, or one of its causes, is an unprocessed items error.
    pub fn is_unprocessed_items(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnprocessedItems(_)))
    }
}
