use super::domain::{Receipt, ReceiptId};

/// Storage abstraction so the service and router can be exercised in
/// isolation. Implementations must tolerate concurrent readers and writers;
/// each operation is a single atomic step with no cross-call critical section.
pub trait ReceiptRepository: Send + Sync {
    /// Insert a receipt under a freshly issued identifier. Receipts are
    /// immutable once stored; there is no update or delete.
    fn insert(&self, id: ReceiptId, receipt: Receipt) -> Result<(), RepositoryError>;

    /// Fetch a stored receipt. `Ok(None)` means the identifier was never
    /// issued (or belongs to another process lifetime).
    fn fetch(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("identifier already in use")]
    Conflict,
    #[error("receipt not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
