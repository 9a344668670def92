//! Order form state and field validation.
//!
//! Validation is a pure function from field values to a map of field ->
//! error code; all fields are validated independently, so rule order does
//! not affect the result. Error codes map onto `form.error.*` catalog keys
//! for rendering.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::products;

/// The fields of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Product,
    Quantity,
    Name,
    Email,
    Notes,
}

/// Field-level validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    Required,
    QuantityRange,
    NameShort,
    EmailInvalid,
}

impl ErrorCode {
    /// The catalog message key for this error's inline text.
    pub fn message_key(&self) -> &'static str {
        match self {
            ErrorCode::Required => "form.error.required",
            ErrorCode::QuantityRange => "form.error.quantityRange",
            ErrorCode::NameShort => "form.error.nameShort",
            ErrorCode::EmailInvalid => "form.error.emailInvalid",
        }
    }
}

/// Validation result: one error code per invalid field, no entry when valid.
pub type FieldErrors = BTreeMap<FormField, ErrorCode>;

/// Current values of the order form.
///
/// Quantity is kept as a float so out-of-band input (a fractional value
/// from a number field) is representable and rejected by validation rather
/// than silently truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub product_id: String,
    pub quantity: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

impl Default for OrderForm {
    /// Initial form state: first catalog product selected, quantity 1,
    /// text fields empty.
    fn default() -> Self {
        Self {
            product_id: products::all()
                .first()
                .map(|p| p.id.to_string())
                .unwrap_or_default(),
            quantity: 1.0,
            name: String::new(),
            email: String::new(),
            notes: String::new(),
        }
    }
}

/// Email shape check: local-part@domain.tld-like, not full RFC 5322.
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Validate the form.
///
/// Rules:
/// - product: `Required` if empty/unselected
/// - quantity: `QuantityRange` unless an integer in 1..=99
/// - name: `NameShort` if trimmed length < 2
/// - email: `EmailInvalid` unless it matches the simple shape above
/// - notes: never validated
pub fn validate(form: &OrderForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.product_id.is_empty() {
        errors.insert(FormField::Product, ErrorCode::Required);
    }

    if !is_valid_quantity(form.quantity) {
        errors.insert(FormField::Quantity, ErrorCode::QuantityRange);
    }

    if form.name.trim().chars().count() < 2 {
        errors.insert(FormField::Name, ErrorCode::NameShort);
    }

    if !email_regex().is_match(&form.email) {
        errors.insert(FormField::Email, ErrorCode::EmailInvalid);
    }

    errors
}

fn is_valid_quantity(quantity: f64) -> bool {
    quantity.fract() == 0.0 && (1.0..=99.0).contains(&quantity)
}
