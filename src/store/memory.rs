use super::KvBackend;
use crate::error::{Result, StockpadError};
use std::collections::HashMap;

/// In-memory key-value storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write fail, for exercising the persist-failure path.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl KvBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StockpadError::Store("writes are disabled".to_string()));
        }
        self.slots.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ProductFields;
    use crate::store::ProductStore;

    pub struct StoreFixture {
        pub store: ProductStore<MemoryBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: ProductStore::open(MemoryBackend::new()),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.create(ProductFields {
                    name: format!("Test Product {}", i + 1),
                    category: "Test".to_string(),
                    price: 1.0 + i as f64,
                    quantity: i as u32,
                    description: format!("Description for product {}", i + 1),
                });
            }
            self
        }

        pub fn with_product(mut self, name: &str, category: &str, price: f64, quantity: u32) -> Self {
            self.store.create(ProductFields {
                name: name.to_string(),
                category: category.to_string(),
                price,
                quantity,
                description: format!("{} description", name),
            });
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::STORE_KEY;

    #[test]
    fn reads_back_what_was_written() {
        let mut backend = MemoryBackend::new();
        assert!(backend.read(STORE_KEY).unwrap().is_none());
        backend.write(STORE_KEY, "[]").unwrap();
        assert_eq!(backend.read(STORE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn failing_backend_rejects_writes_but_still_reads() {
        let mut backend = MemoryBackend::new().fail_writes();
        assert!(matches!(
            backend.write(STORE_KEY, "[]"),
            Err(StockpadError::Store(_))
        ));
        assert!(backend.read(STORE_KEY).unwrap().is_none());
    }
}
