use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{Receipt, ReceiptId, ReceiptRepository, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-memory receipt store. Writes take the lock exclusively, lookups
/// share it; entries live for the process lifetime and are never removed.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
}

impl ReceiptRepository for InMemoryReceiptStore {
    fn insert(&self, id: ReceiptId, receipt: Receipt) -> Result<(), RepositoryError> {
        let mut guard = self.receipts.write().expect("receipt store lock poisoned");
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(id, receipt);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<Receipt>, RepositoryError> {
        let guard = self.receipts.read().expect("receipt store lock poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points::receipts::Item;

    fn receipt() -> Receipt {
        Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![Item {
                short_description: "Pepsi - 12-oz".to_string(),
                price: "1.25".to_string(),
            }],
            total: "2.65".to_string(),
        }
    }

    #[test]
    fn insert_then_fetch_returns_the_stored_receipt() {
        let store = InMemoryReceiptStore::default();
        let id = ReceiptId("r-1".to_string());

        store.insert(id.clone(), receipt()).expect("insert succeeds");
        let fetched = store.fetch(&id).expect("fetch succeeds");
        assert_eq!(fetched, Some(receipt()));
    }

    #[test]
    fn duplicate_identifier_is_a_conflict() {
        let store = InMemoryReceiptStore::default();
        let id = ReceiptId("r-1".to_string());

        store.insert(id.clone(), receipt()).expect("insert succeeds");
        let err = store
            .insert(id, receipt())
            .expect_err("second insert should conflict");
        assert!(matches!(err, RepositoryError::Conflict));
    }

    #[test]
    fn fetch_of_unknown_identifier_is_none() {
        let store = InMemoryReceiptStore::default();
        let fetched = store
            .fetch(&ReceiptId("missing".to_string()))
            .expect("fetch succeeds");
        assert!(fetched.is_none());
    }

    #[test]
    fn concurrent_inserts_do_not_lose_entries() {
        let store = InMemoryReceiptStore::default();
        let mut handles = Vec::new();

        for worker in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                for n in 0..100 {
                    let id = ReceiptId(format!("r-{worker}-{n}"));
                    store.insert(id, receipt()).expect("insert succeeds");
                }
            }));
        }
        for handle in handles {
            handle.join().expect("worker finishes");
        }

        let guard = store.receipts.read().expect("receipt store lock poisoned");
        assert_eq!(guard.len(), 800);
    }
}
