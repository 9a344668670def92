//! HTTP surface for the localized site content and the order endpoint.
//!
//! The handlers are a thin layer: locale resolution, catalog lookups, and
//! form validation all live in the library modules; this module only maps
//! them onto routes and status codes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::form::{self, OrderForm};
use crate::i18n::{catalog, Locale, LocaleStore};
use crate::mailto;
use crate::order::OrderRequest;
use crate::products;
use crate::site;
use crate::transport::{AnyTransport, OrderTransport};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocaleStore>,
    pub transport: Arc<AnyTransport>,
    pub google_maps_key: Option<String>,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/site", get(get_site))
        .route("/api/locale", get(get_locale).put(put_locale))
        .route("/api/messages/:locale", get(get_messages))
        .route("/api/products", get(get_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/products/:id/order-draft", get(get_order_draft))
        .route("/api/location", get(get_location))
        .route("/api/orders", post(post_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

impl LocaleQuery {
    /// The locale to render under: an explicit valid query value, otherwise
    /// the store's active locale.
    fn resolve(&self, store: &LocaleStore) -> Locale {
        self.locale
            .as_deref()
            .and_then(|code| Locale::from_code(code).ok())
            .unwrap_or_else(|| store.current())
    }
}

// ==================== Site & Locale ====================

async fn get_site(State(state): State<AppState>, Query(q): Query<LocaleQuery>) -> Json<serde_json::Value> {
    let locale = q.resolve(&state.store);

    Json(json!({
        "brand": site::SITE.brand,
        "heroImage": site::SITE.hero_image,
        "tagline": site::SITE.tagline.get(locale),
        "email": site::SITE.email,
        "social": {
            "instagram": site::SITE.instagram,
            "facebook": site::SITE.facebook,
            "tiktok": site::SITE.tiktok,
        },
        "creator": {
            "name": site::CREATOR.name,
            "photo": site::CREATOR.photo,
            "role": site::CREATOR.role.get(locale),
            "bio": site::CREATOR.bio.get(locale),
        },
    }))
}

async fn get_locale(State(state): State<AppState>) -> Json<serde_json::Value> {
    let available: Vec<_> = Locale::all()
        .iter()
        .map(|l| json!({ "code": l.code(), "nativeName": l.native_name() }))
        .collect();

    Json(json!({
        "locale": state.store.current(),
        "languageTag": state.store.language_tag(),
        "available": available,
    }))
}

#[derive(Debug, Deserialize)]
struct SetLocaleBody {
    locale: String,
}

async fn put_locale(State(state): State<AppState>, Json(body): Json<SetLocaleBody>) -> Response {
    if state.store.set_locale_code(&body.locale) {
        Json(json!({ "locale": state.store.current() })).into_response()
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": format!("Unsupported locale '{}'", body.locale) })),
        )
            .into_response()
    }
}

async fn get_messages(Path(locale): Path<String>) -> Response {
    let Ok(locale) = Locale::from_code(&locale) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Unsupported locale '{}'", locale) })),
        )
            .into_response();
    };

    // Fallback-resolved view: every default key, under the requested locale
    let messages: BTreeMap<&str, &str> = catalog::keys()
        .map(|key| (key, catalog::translate(locale, key)))
        .collect();

    Json(messages).into_response()
}

// ==================== Products ====================

async fn get_products(State(state): State<AppState>, Query(q): Query<LocaleQuery>) -> Json<serde_json::Value> {
    let locale = q.resolve(&state.store);
    Json(json!({ "locale": locale, "products": products::localized(locale) }))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<LocaleQuery>,
) -> Response {
    let locale = q.resolve(&state.store);

    match products::localized(locale).into_iter().find(|p| p.id == id) {
        Some(product) => Json(product).into_response(),
        None => product_not_found(locale).into_response(),
    }
}

/// A deep link to a nonexistent id renders as a localized not-found view,
/// never a crash.
fn product_not_found(locale: Locale) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": catalog::translate(locale, "product.notFound") })),
    )
}

#[derive(Debug, Deserialize)]
struct OrderDraftQuery {
    locale: Option<String>,
    quantity: Option<u32>,
    notes: Option<String>,
    email: Option<String>,
}

/// Pre-filled mailto draft for ordering a single product.
async fn get_order_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<OrderDraftQuery>,
) -> Response {
    let locale = LocaleQuery {
        locale: q.locale.clone(),
    }
    .resolve(&state.store);

    let form = OrderForm {
        product_id: id,
        quantity: f64::from(q.quantity.unwrap_or(1)),
        name: String::new(),
        email: q.email.unwrap_or_default(),
        notes: q.notes.unwrap_or_default(),
    };

    let Some(order) = OrderRequest::from_form(&form, locale) else {
        return product_not_found(locale).into_response();
    };

    Json(json!({
        "mailto": mailto::order_mailto(&order),
        "label": catalog::translate(locale, "product.order.submit"),
    }))
    .into_response()
}

// ==================== Location ====================

async fn get_location(State(state): State<AppState>, Query(q): Query<LocaleQuery>) -> Json<serde_json::Value> {
    let locale = q.resolve(&state.store);
    let embed = site::map_embed(state.google_maps_key.as_deref());
    let hint = embed.hint_key.map(|key| catalog::translate(locale, key));

    Json(json!({
        "label": site::LOCATION.label.get(locale),
        "addressLines": site::LOCATION.address_lines.get(locale),
        "latitude": site::LOCATION.latitude,
        "longitude": site::LOCATION.longitude,
        "embedUrl": embed.url,
        "hint": hint,
    }))
}

// ==================== Orders ====================

#[derive(Debug, Deserialize)]
struct OrderBody {
    locale: Option<String>,
    #[serde(flatten)]
    form: OrderForm,
}

async fn post_order(State(state): State<AppState>, Json(body): Json<OrderBody>) -> Response {
    let locale = LocaleQuery {
        locale: body.locale.clone(),
    }
    .resolve(&state.store);

    let errors = form::validate(&body.form);
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": catalog::translate(locale, "form.error.fix"),
                "errors": errors,
            })),
        )
            .into_response();
    }

    let Some(order) = OrderRequest::from_form(&body.form, locale) else {
        return product_not_found(locale).into_response();
    };

    match state.transport.submit(&order).await {
        Ok(()) => {
            info!("Accepted order for '{}' x{}", order.product_id, order.quantity);
            Json(json!({
                "status": "success",
                "message": catalog::translate(locale, "contact.sent"),
            }))
            .into_response()
        }
        Err(e) => {
            tracing::warn!("Order delivery failed: {:#}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "status": "error",
                    "message": catalog::translate(locale, "contact.error"),
                })),
            )
                .into_response()
        }
    }
}
