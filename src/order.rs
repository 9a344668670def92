//! Order payload construction.
//!
//! An [`OrderRequest`] is the snapshot handed to the submission transport:
//! the product as resolved under the locale active at submission time,
//! locale-invariant pricing, and the requester's details.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::form::OrderForm;
use crate::i18n::Locale;
use crate::products;

/// A fully resolved order, ready for a transport.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_id: String,
    /// Product name under the order's locale
    pub product_name: String,
    pub locale: Locale,
    pub quantity: u32,
    /// Unit price in USD, locale-invariant
    pub unit_price: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scent: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Reply address for the requester, when provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl OrderRequest {
    /// Build an order from validated form values.
    ///
    /// The caller is expected to have run validation first; this only fails
    /// when the referenced product id does not exist in the catalog, which
    /// maps to the submission state machine's error path.
    pub fn from_form(form: &OrderForm, locale: Locale) -> Option<OrderRequest> {
        let product = products::find(&form.product_id)?;
        let translation = product.translation(locale);
        let quantity = form.quantity as u32;

        Some(OrderRequest {
            product_id: product.id.to_string(),
            product_name: translation.name.to_string(),
            locale,
            quantity,
            unit_price: product.price,
            total: product.price * quantity as f64,
            scent: translation.scent,
            size: translation.size,
            notes: non_empty(&form.notes),
            reply_to: non_empty(&form.email),
            submitted_at: Utc::now(),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
