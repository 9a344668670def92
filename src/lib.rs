//! Lumos Candles site core: localized content, order-form validation, and
//! a swappable order submission transport, with a thin HTTP API on top.

pub mod config;
pub mod form;
pub mod i18n;
pub mod mailto;
pub mod order;
pub mod products;
pub mod server;
pub mod site;
pub mod transport;
