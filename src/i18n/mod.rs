// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module provides the localized text layer: two embedded translation
//! documents (French and English), dotted-key resolution with an echo
//! fallback for missing keys, and runtime language toggling.
//!
//! # Features
//!
//! - Typed recursive translation documents parsed once at startup
//! - `resolve("navbar.gallery")`-style dotted lookup
//! - Binary FR/EN language toggle with immediate effect
//! - Missing keys echo back verbatim as a visible diagnostic

pub mod store;

pub use store::{Language, LocalizationStore, TranslationDocument, TranslationNode};
