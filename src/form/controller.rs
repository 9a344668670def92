//! Order form controller: touched-state gating and the submission state
//! machine.
//!
//! Status lifecycle: `Idle -> Submitting -> (Success | Error)`, back to
//! `Idle` on the next edit. A submit attempt on an invalid form does not
//! leave `Idle`; it only flips the attempted flag so inline errors become
//! visible. Success resets the form, touched flags, and attempted flag.

use std::collections::BTreeSet;
use tracing::warn;

use crate::form::validator::{self, FieldErrors, FormField, OrderForm};
use crate::i18n::Locale;
use crate::order::OrderRequest;
use crate::transport::OrderTransport;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Stateful wrapper around one visitor's order form.
#[derive(Debug)]
pub struct OrderFormController {
    form: OrderForm,
    touched: BTreeSet<FormField>,
    attempted: bool,
    status: SubmissionStatus,
}

impl Default for OrderFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFormController {
    pub fn new() -> Self {
        Self {
            form: OrderForm::default(),
            touched: BTreeSet::new(),
            attempted: false,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    // ==================== Field Edits ====================

    pub fn set_product(&mut self, id: impl Into<String>) {
        self.edit(|form| form.product_id = id.into());
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.edit(|form| form.quantity = quantity);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.edit(|form| form.name = name.into());
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.edit(|form| form.email = email.into());
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.edit(|form| form.notes = notes.into());
    }

    /// Apply an edit; any edit returns a settled status to `Idle`.
    fn edit(&mut self, apply: impl FnOnce(&mut OrderForm)) {
        apply(&mut self.form);
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Record that a field lost focus. Errors for a field are only shown
    /// once it has been touched (or a submit was attempted).
    pub fn blur(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    // ==================== Validation Views ====================

    /// All current validation errors, regardless of display gating.
    pub fn errors(&self) -> FieldErrors {
        validator::validate(&self.form)
    }

    /// The errors a visitor should currently see: only for fields that were
    /// blurred at least once, or all of them after a submit attempt.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors()
            .into_iter()
            .filter(|(field, _)| self.attempted || self.touched.contains(field))
            .collect()
    }

    /// Whether a submission may start: no validation errors and no
    /// submission already in flight.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting && self.errors().is_empty()
    }

    // ==================== Submission ====================

    /// Attempt a submission through `transport`.
    ///
    /// - If a submission is already in flight, this is a no-op.
    /// - If the form is invalid, the attempted flag is set (making all
    ///   errors visible) and the status stays `Idle`.
    /// - Otherwise the order is resolved under `locale` and handed to the
    ///   transport; success resets the form and all interaction state.
    ///
    /// # Returns
    /// The status after the attempt.
    pub async fn submit<T: OrderTransport>(
        &mut self,
        transport: &T,
        locale: Locale,
    ) -> SubmissionStatus {
        if self.status == SubmissionStatus::Submitting {
            return self.status;
        }

        self.attempted = true;
        if !self.errors().is_empty() {
            return self.status;
        }

        self.status = SubmissionStatus::Submitting;

        // An unresolvable product reference at this point means the form
        // referenced an id the catalog no longer has; that is the rare
        // error path rather than a validation failure.
        let Some(order) = OrderRequest::from_form(&self.form, locale) else {
            warn!("Order referenced unknown product '{}'", self.form.product_id);
            self.status = SubmissionStatus::Error;
            return self.status;
        };

        match transport.submit(&order).await {
            Ok(()) => {
                self.reset();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                warn!("Order submission failed: {:#}", e);
                self.status = SubmissionStatus::Error;
            }
        }

        self.status
    }

    /// Return the form to its initial state, clearing touched and attempted
    /// flags.
    fn reset(&mut self) {
        self.form = OrderForm::default();
        self.touched.clear();
        self.attempted = false;
    }

    #[cfg(test)]
    fn force_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}
