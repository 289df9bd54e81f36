//! The dialog state machine behind the create/edit/delete workflow.
//!
//! At most one dialog is open at any time: the create/edit form and the
//! delete confirmation exclude each other, and a second open is rejected with
//! [`StockpadError::DialogOpen`] rather than silently replacing the first.

use crate::error::{Result, StockpadError};
use crate::model::{Product, ProductDraft};
use crate::store::{KvBackend, ProductStore};
use crate::validate::{validate, FieldError, Validation};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Creating,
    Editing(Uuid),
    ConfirmingDelete(Uuid),
}

/// What a submit attempt produced. A rejection keeps the dialog open with the
/// offending fields; nothing was written.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Accepted(Product),
    Rejected(Vec<FieldError>),
}

#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Closed
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn open_create(&mut self) -> Result<()> {
        self.ensure_closed()?;
        self.state = FormState::Creating;
        Ok(())
    }

    /// Open the edit dialog prefilled from the stored product. An unknown id
    /// is a view-out-of-sync symptom: the state stays `Closed` and `None`
    /// comes back for the caller to surface.
    pub fn open_edit<B: KvBackend>(
        &mut self,
        store: &ProductStore<B>,
        id: &Uuid,
    ) -> Result<Option<ProductDraft>> {
        self.ensure_closed()?;
        match store.find_by_id(id) {
            Some(product) => {
                self.state = FormState::Editing(*id);
                Ok(Some(ProductDraft::from(product)))
            }
            None => Ok(None),
        }
    }

    /// Validate the draft and, if it passes, apply it to the store: append
    /// while `Creating`, full-field replace while `Editing`. The dialog
    /// closes only on acceptance.
    pub fn submit<B: KvBackend>(
        &mut self,
        store: &mut ProductStore<B>,
        draft: &ProductDraft,
    ) -> Result<Submission> {
        match self.state {
            FormState::Creating => match validate(draft) {
                Validation::Valid(fields) => {
                    let product = store.create(fields);
                    self.state = FormState::Closed;
                    Ok(Submission::Accepted(product))
                }
                Validation::Invalid(errors) => Ok(Submission::Rejected(errors)),
            },
            FormState::Editing(id) => match validate(draft) {
                Validation::Valid(fields) => {
                    // A vanished id leaves the dialog open; the caller
                    // decides whether to cancel or retry.
                    let product = store.update(&id, fields)?;
                    self.state = FormState::Closed;
                    Ok(Submission::Accepted(product))
                }
                Validation::Invalid(errors) => Ok(Submission::Rejected(errors)),
            },
            FormState::Closed | FormState::ConfirmingDelete(_) => {
                Err(StockpadError::Api("no form is open".to_string()))
            }
        }
    }

    /// Discard the in-progress form, if any.
    pub fn cancel(&mut self) {
        if matches!(self.state, FormState::Creating | FormState::Editing(_)) {
            self.state = FormState::Closed;
        }
    }

    /// Open the delete confirmation for a stored product. Unknown ids stay
    /// `Closed`, same as [`Self::open_edit`].
    pub fn request_delete<B: KvBackend>(
        &mut self,
        store: &ProductStore<B>,
        id: &Uuid,
    ) -> Result<Option<Product>> {
        self.ensure_closed()?;
        match store.find_by_id(id) {
            Some(product) => {
                let product = product.clone();
                self.state = FormState::ConfirmingDelete(*id);
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    /// Delete the pending target. The dialog closes whether or not the row is
    /// still there; a vanished id surfaces as `ProductNotFound`.
    pub fn confirm_delete<B: KvBackend>(&mut self, store: &mut ProductStore<B>) -> Result<Uuid> {
        match self.state {
            FormState::ConfirmingDelete(id) => {
                self.state = FormState::Closed;
                store.delete(&id)?;
                Ok(id)
            }
            _ => Err(StockpadError::Api(
                "no delete confirmation is pending".to_string(),
            )),
        }
    }

    /// Dismiss the delete confirmation without touching the store.
    pub fn cancel_delete(&mut self) {
        if matches!(self.state, FormState::ConfirmingDelete(_)) {
            self.state = FormState::Closed;
        }
    }

    fn ensure_closed(&self) -> Result<()> {
        match self.state {
            FormState::Closed => Ok(()),
            _ => Err(StockpadError::DialogOpen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductDraft;
    use crate::store::memory::MemoryBackend;
    use crate::validate::Field;

    fn store() -> ProductStore<MemoryBackend> {
        ProductStore::open(MemoryBackend::new())
    }

    fn good_draft() -> ProductDraft {
        ProductDraft {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: "9.99".to_string(),
            quantity: "3".to_string(),
            description: "A widget".to_string(),
        }
    }

    #[test]
    fn create_flow_closes_on_accept() {
        let mut store = store();
        let mut form = FormController::new();
        form.open_create().unwrap();
        assert_eq!(form.state(), FormState::Creating);

        let submission = form.submit(&mut store, &good_draft()).unwrap();
        assert!(matches!(submission, Submission::Accepted(_)));
        assert_eq!(form.state(), FormState::Closed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejected_submit_keeps_the_form_open_and_store_untouched() {
        let mut store = store();
        let mut form = FormController::new();
        form.open_create().unwrap();

        let mut draft = good_draft();
        draft.name.clear();
        let submission = form.submit(&mut store, &draft).unwrap();
        match submission {
            Submission::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::Name);
            }
            Submission::Accepted(_) => panic!("expected rejection"),
        }
        assert_eq!(form.state(), FormState::Creating);
        assert!(store.is_empty());
    }

    #[test]
    fn edit_flow_replaces_and_closes() {
        let mut store = store();
        let mut form = FormController::new();
        form.open_create().unwrap();
        let created = match form.submit(&mut store, &good_draft()).unwrap() {
            Submission::Accepted(p) => p,
            other => panic!("expected acceptance, got {:?}", other),
        };

        let prefill = form.open_edit(&store, &created.id).unwrap().expect("prefill");
        assert_eq!(prefill.name, "Widget");
        assert_eq!(form.state(), FormState::Editing(created.id));

        let mut draft = good_draft();
        draft.quantity = "0".to_string();
        form.submit(&mut store, &draft).unwrap();
        assert_eq!(form.state(), FormState::Closed);
        assert_eq!(store.find_by_id(&created.id).unwrap().quantity, 0);
    }

    #[test]
    fn open_edit_of_unknown_id_stays_closed() {
        let store = store();
        let mut form = FormController::new();
        let prefill = form.open_edit(&store, &Uuid::new_v4()).unwrap();
        assert!(prefill.is_none());
        assert_eq!(form.state(), FormState::Closed);
    }

    #[test]
    fn cancel_discards_the_form() {
        let mut form = FormController::new();
        form.open_create().unwrap();
        form.cancel();
        assert_eq!(form.state(), FormState::Closed);
        form.open_create().unwrap();
    }

    #[test]
    fn delete_flow_confirm_removes_the_product() {
        let mut store = store();
        let mut form = FormController::new();
        form.open_create().unwrap();
        let created = match form.submit(&mut store, &good_draft()).unwrap() {
            Submission::Accepted(p) => p,
            other => panic!("expected acceptance, got {:?}", other),
        };

        let target = form.request_delete(&store, &created.id).unwrap().expect("target");
        assert_eq!(target.name, "Widget");
        assert_eq!(form.state(), FormState::ConfirmingDelete(created.id));

        let deleted = form.confirm_delete(&mut store).unwrap();
        assert_eq!(deleted, created.id);
        assert_eq!(form.state(), FormState::Closed);
        assert!(store.is_empty());
    }

    #[test]
    fn delete_flow_cancel_leaves_the_store_alone() {
        let mut store = store();
        let mut form = FormController::new();
        form.open_create().unwrap();
        let created = match form.submit(&mut store, &good_draft()).unwrap() {
            Submission::Accepted(p) => p,
            other => panic!("expected acceptance, got {:?}", other),
        };

        form.request_delete(&store, &created.id).unwrap();
        form.cancel_delete();
        assert_eq!(form.state(), FormState::Closed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn only_one_dialog_may_be_open() {
        let mut store = store();
        let mut form = FormController::new();
        form.open_create().unwrap();
        let created = store.create(crate::model::ProductFields {
            name: "X".to_string(),
            category: "Y".to_string(),
            price: 1.0,
            quantity: 1,
            description: "Z".to_string(),
        });

        assert!(matches!(
            form.request_delete(&store, &created.id),
            Err(StockpadError::DialogOpen)
        ));
        assert!(matches!(form.open_create(), Err(StockpadError::DialogOpen)));
        assert!(matches!(
            form.open_edit(&store, &created.id),
            Err(StockpadError::DialogOpen)
        ));
        // The original form is still the one open.
        assert_eq!(form.state(), FormState::Creating);
    }

    #[test]
    fn submit_without_an_open_form_is_misuse() {
        let mut store = store();
        let mut form = FormController::new();
        assert!(matches!(
            form.submit(&mut store, &good_draft()),
            Err(StockpadError::Api(_))
        ));
        assert!(matches!(
            form.confirm_delete(&mut store),
            Err(StockpadError::Api(_))
        ));
    }
}
