//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for the
//! site's three render languages. All locale-related logic, localized
//! strings, and formatting infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale type validated against the registry
//! - `catalog`: Localized UI strings with a total three-tier fallback lookup
//! - `currency`: Per-locale price formatting with a fixed currency unit
//! - `store`: Process-wide active locale with persistence and change notifications
//! - `storage`: Persistence port for the visitor's locale choice

mod locale;
mod registry;
mod store;

pub mod catalog;
pub mod currency;
pub mod storage;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use store::LocaleStore;
