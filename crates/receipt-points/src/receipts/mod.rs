//! Receipt ingestion, storage seam, and reward-points scoring.

pub mod domain;
pub mod points;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Item, Receipt, ReceiptId};
pub use points::compute_points;
pub use repository::{ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use service::{ReceiptService, ReceiptServiceError};
