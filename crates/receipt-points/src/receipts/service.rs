use std::sync::Arc;

use uuid::Uuid;

use super::domain::{Receipt, ReceiptId};
use super::points::compute_points;
use super::repository::{ReceiptRepository, RepositoryError};

/// Service facade composing identifier generation, the storage seam, and the
/// scoring engine.
pub struct ReceiptService<R> {
    repository: Arc<R>,
}

fn next_receipt_id() -> ReceiptId {
    ReceiptId(Uuid::new_v4().to_string())
}

impl<R> ReceiptService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Store a receipt under a fresh identifier and return the identifier.
    /// Resubmitting an identical receipt stores a new copy under a new id.
    pub fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        let id = next_receipt_id();
        self.repository.insert(id.clone(), receipt)?;
        Ok(id)
    }

    /// Score a previously stored receipt. An identifier the store has never
    /// issued surfaces as [`RepositoryError::NotFound`].
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let receipt = self
            .repository
            .fetch(id)?
            .ok_or(ReceiptServiceError::Repository(RepositoryError::NotFound))?;
        Ok(compute_points(&receipt))
    }
}

/// Failures surfaced by the service facade.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
