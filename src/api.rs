//! # API Facade
//!
//! [`InventoryApi`] is the single entry point for all stockpad operations:
//! it owns the store, the dialog state machine, and the ephemeral view state,
//! and exposes one method per user command. It returns structured
//! [`CmdResult`] values and never touches stdout, stderr, or the terminal;
//! turning messages into toasts, colors, or log lines is the client's job.
//!
//! Generic over [`KvBackend`]:
//! - Production: `InventoryApi<FileBackend>`
//! - Testing: `InventoryApi<MemoryBackend>`

use crate::config::StockpadConfig;
use crate::error::{Result, StockpadError};
use crate::form::{FormController, FormState, Submission};
use crate::model::{Product, ProductDraft, SortField, SortOrder};
use crate::query::{self, ViewState};
use crate::stats::{self, Summary, STOCK_CHART_LIMIT};
use crate::store::{KvBackend, ProductStore};
use crate::validate::FieldError;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A leveled, user-facing message: the core's side of a toast notification.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Product>,
    pub field_errors: Vec<FieldError>,
    pub draft: Option<ProductDraft>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, products: Vec<Product>) -> Self {
        self.affected = products;
        self
    }

    pub fn with_draft(mut self, draft: ProductDraft) -> Self {
        self.draft = Some(draft);
        self
    }
}

pub struct InventoryApi<B: KvBackend> {
    store: ProductStore<B>,
    form: FormController,
    view: ViewState,
    config: StockpadConfig,
}

impl<B: KvBackend> InventoryApi<B> {
    pub fn new(backend: B, config: StockpadConfig) -> Self {
        Self {
            store: ProductStore::open(backend),
            form: FormController::new(),
            view: ViewState::default(),
            config,
        }
    }

    // --- read side ---

    /// The canonical list, insertion order.
    pub fn products(&self) -> &[Product] {
        self.store.list()
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<&Product> {
        self.store.find_by_id(id)
    }

    pub fn form_state(&self) -> FormState {
        self.form.state()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The filtered, sorted view under the current view state.
    pub fn derived(&self) -> Vec<Product> {
        query::derive(
            self.store.list(),
            &self.view.search_term,
            self.view.sort_field,
            self.view.sort_order,
        )
    }

    pub fn summary(&self) -> Summary {
        stats::summary(self.store.list(), self.config.low_stock_threshold)
    }

    pub fn stock_chart(&self) -> Vec<Product> {
        stats::top_by_quantity(self.store.list(), STOCK_CHART_LIMIT)
    }

    pub fn category_chart(&self) -> Vec<(String, usize)> {
        stats::category_distribution(self.store.list())
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.config.low_stock_threshold
    }

    /// Pending persistence trouble (failed write or corrupt file at startup),
    /// drained into a printable warning.
    pub fn pending_warning(&mut self) -> Option<CmdMessage> {
        self.store.take_warning().map(|e| {
            CmdMessage::warning(format!("Changes kept in memory but not saved: {}", e))
        })
    }

    // --- view state commands ---

    pub fn set_search_term(&mut self, term: &str) {
        self.view.set_search_term(term);
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.view.set_sort(field);
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.view.set_sort_field(field);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.view.set_sort_order(order);
    }

    // --- dialog commands ---

    pub fn open_create(&mut self) -> Result<()> {
        self.form.open_create()
    }

    pub fn open_edit(&mut self, id: &Uuid) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self.form.open_edit(&self.store, id)? {
            Some(draft) => result.draft = Some(draft),
            None => result.add_message(CmdMessage::warning(format!(
                "No product with id {}; nothing to edit",
                id
            ))),
        }
        Ok(result)
    }

    pub fn submit(&mut self, draft: &ProductDraft) -> Result<CmdResult> {
        let opened_as = self.form.state();
        let mut result = CmdResult::default();

        match self.form.submit(&mut self.store, draft) {
            Ok(Submission::Accepted(product)) => {
                let message = match opened_as {
                    FormState::Editing(_) => {
                        format!("Product updated: {}", product.name)
                    }
                    _ => format!("Product added: {}", product.name),
                };
                result.add_message(CmdMessage::success(message));
                result.affected.push(product);
            }
            Ok(Submission::Rejected(errors)) => {
                result.field_errors = errors;
                result.add_message(CmdMessage::error(
                    "Product not saved; fix the fields below",
                ));
            }
            Err(e @ StockpadError::ProductNotFound(_)) => {
                // The edited row vanished underneath the dialog. Close it and
                // surface the sync problem instead of crashing.
                self.form.cancel();
                result.add_message(CmdMessage::warning(e.to_string()));
            }
            Err(e) => return Err(e),
        }

        self.collect_store_warning(&mut result);
        Ok(result)
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn request_delete(&mut self, id: &Uuid) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self.form.request_delete(&self.store, id)? {
            Some(product) => {
                result.add_message(CmdMessage::info(format!(
                    "About to delete \"{}\". This cannot be undone.",
                    product.name
                )));
                result.affected.push(product);
            }
            None => result.add_message(CmdMessage::warning(format!(
                "No product with id {}; nothing to delete",
                id
            ))),
        }
        Ok(result)
    }

    pub fn confirm_delete(&mut self) -> Result<CmdResult> {
        let target = match self.form.state() {
            FormState::ConfirmingDelete(id) => self.store.find_by_id(&id).cloned(),
            _ => None,
        };
        let mut result = CmdResult::default();

        match self.form.confirm_delete(&mut self.store) {
            Ok(_) => {
                let name = target.as_ref().map(|p| p.name.as_str()).unwrap_or("?");
                result.add_message(CmdMessage::success(format!("Product deleted: {}", name)));
                if let Some(product) = target {
                    result.affected.push(product);
                }
            }
            Err(e @ StockpadError::ProductNotFound(_)) => {
                result.add_message(CmdMessage::warning(e.to_string()));
            }
            Err(e) => return Err(e),
        }

        self.collect_store_warning(&mut result);
        Ok(result)
    }

    pub fn cancel_delete(&mut self) {
        self.form.cancel_delete();
    }

    fn collect_store_warning(&mut self, result: &mut CmdResult) {
        if let Some(warning) = self.pending_warning() {
            result.add_message(warning);
        }
    }
}
