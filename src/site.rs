// SPDX-License-Identifier: MPL-2.0
//! Data behind the site chrome: the navigation menu, the language-toggle
//! label, and the owner identity shown in the about/contact block.

use crate::i18n::LocalizationStore;

pub const OWNER_NAME: &str = "Kevin RAMAROHETRA";
pub const OWNER_EMAIL: &str = "kevin.ramarohetra@gmail.com";

/// One entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    label_key: &'static str,
    anchor: &'static str,
}

impl MenuItem {
    /// Page anchor the entry scrolls to.
    #[must_use]
    pub fn anchor(&self) -> &'static str {
        self.anchor
    }

    /// Menu label in the store's active language.
    #[must_use]
    pub fn label(&self, store: &LocalizationStore) -> String {
        store.resolve(&format!("navbar.{}", self.label_key))
    }
}

const MENU: [MenuItem; 2] = [
    MenuItem {
        label_key: "gallery",
        anchor: "gallery",
    },
    MenuItem {
        label_key: "contact",
        anchor: "about-contact",
    },
];

/// Navigation menu entries in display order.
#[must_use]
pub fn menu_items() -> &'static [MenuItem] {
    &MENU
}

/// Label for the language-toggle control. The documents store the tag of the
/// language a toggle would switch to, so no conditional logic is needed here.
#[must_use]
pub fn toggle_language_label(store: &LocalizationStore) -> String {
    store.resolve("navbar.toggle_lang_to")
}
