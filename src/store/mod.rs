//! # Storage Layer
//!
//! Persistence is a single-key key-value store: one fixed key holds the whole
//! product list as a JSON blob, rewritten wholesale on every mutation. The
//! [`KvBackend`] trait abstracts where that blob lives:
//!
//! - [`fs::FileBackend`]: production, one `<key>.json` file under the data dir
//! - [`memory::MemoryBackend`]: in-memory, for tests
//!
//! [`ProductStore`] owns the canonical in-memory list on top of a backend.
//! The in-memory list stays authoritative when a write fails: mutations never
//! roll back, the failure is parked for the caller to surface, and the next
//! mutation rewrites the whole list, which is the retry.

use crate::error::{Result, StockpadError};
use crate::model::{Product, ProductFields};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// The one key the product list lives under.
pub const STORE_KEY: &str = "products";

/// Single-key blob storage. `read` of an absent key is `Ok(None)`, not an
/// error.
pub trait KvBackend {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, payload: &str) -> Result<()>;
}

pub struct ProductStore<B: KvBackend> {
    products: Vec<Product>,
    backend: B,
    pending_warning: Option<StockpadError>,
}

impl<B: KvBackend> ProductStore<B> {
    /// Hydrate from the backend. A missing key yields an empty list; an
    /// unreadable or unparseable payload also yields an empty list, with the
    /// cause parked as a warning rather than a crash.
    pub fn open(backend: B) -> Self {
        let (products, pending_warning) = match backend.read(STORE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(products) => (products, None),
                Err(e) => (Vec::new(), Some(StockpadError::Serialization(e))),
            },
            Ok(None) => (Vec::new(), None),
            Err(e) => (Vec::new(), Some(e)),
        };
        Self {
            products,
            backend,
            pending_warning,
        }
    }

    /// All products in insertion order. Ordering for display comes from
    /// `query::derive`, not from here.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Append a new product built from already-validated fields.
    pub fn create(&mut self, fields: ProductFields) -> Product {
        let product = Product::new(fields);
        self.products.push(product.clone());
        self.persist();
        product
    }

    /// Full-field replace; the id is the only thing that survives.
    pub fn update(&mut self, id: &Uuid, fields: ProductFields) -> Result<Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(StockpadError::ProductNotFound(*id))?;
        *slot = Product {
            id: *id,
            name: fields.name,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
            description: fields.description,
        };
        let updated = slot.clone();
        self.persist();
        Ok(updated)
    }

    pub fn delete(&mut self, id: &Uuid) -> Result<()> {
        let position = self
            .products
            .iter()
            .position(|p| p.id == *id)
            .ok_or(StockpadError::ProductNotFound(*id))?;
        self.products.remove(position);
        self.persist();
        Ok(())
    }

    /// The most recent hydration or write failure, if any. Draining it is the
    /// caller's chance to tell the user their data is memory-only right now.
    pub fn take_warning(&mut self) -> Option<StockpadError> {
        self.pending_warning.take()
    }

    fn persist(&mut self) {
        let outcome = serde_json::to_string_pretty(&self.products)
            .map_err(StockpadError::Serialization)
            .and_then(|payload| self.backend.write(STORE_KEY, &payload));
        self.pending_warning = outcome.err();
    }
}
