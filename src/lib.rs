// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is the text and data layer of a bilingual (French/English)
//! photo-portfolio site.
//!
//! It owns the active-language state, resolves dotted lookup keys against
//! embedded translation documents, and exposes the static gallery catalog
//! and site chrome data. Rendering is the host's concern; everything here is
//! plain in-memory state with a synchronous API.

pub mod error;
pub mod gallery;
pub mod i18n;
pub mod site;

pub use error::{Error, Result};
pub use i18n::{Language, LocalizationStore};
