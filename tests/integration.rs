// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks against the embedded translation documents.

use folio_lens::gallery;
use folio_lens::i18n::{Language, LocalizationStore};
use folio_lens::site;

fn store() -> LocalizationStore {
    LocalizationStore::load().expect("embedded documents should load")
}

#[test]
fn embedded_store_starts_in_french() {
    let store = store();
    assert_eq!(store.current_language(), Language::Fr);
    assert_eq!(store.resolve("navbar.gallery"), "Galerie");
}

#[test]
fn toggle_switches_to_english_and_back() {
    let mut store = store();

    store.toggle_language();
    assert_eq!(store.current_language(), Language::En);
    assert_eq!(store.resolve("navbar.gallery"), "Gallery");

    store.toggle_language();
    assert_eq!(store.current_language(), Language::Fr);
    assert_eq!(store.resolve("navbar.gallery"), "Galerie");
}

#[test]
fn missing_and_malformed_keys_echo_back() {
    let store = store();
    assert_eq!(store.resolve("navbar.missing"), "navbar.missing");
    assert_eq!(store.resolve("navbar"), "navbar");
    assert_eq!(store.resolve(""), "");
    assert_eq!(store.resolve("navbar..gallery"), "navbar..gallery");
}

#[test]
fn every_catalog_caption_exists_in_both_languages() {
    let mut store = store();

    for image in gallery::catalog() {
        let key = format!("descriptions.{}", image.description_key());
        assert_ne!(store.resolve(&key), key, "missing FR caption for {key}");
    }

    store.toggle_language();
    for image in gallery::catalog() {
        let key = format!("descriptions.{}", image.description_key());
        assert_ne!(store.resolve(&key), key, "missing EN caption for {key}");
    }
}

#[test]
fn menu_labels_exist_in_both_languages() {
    let mut store = store();

    for item in site::menu_items() {
        let label = item.label(&store);
        assert!(!label.starts_with("navbar."), "missing FR label: {label}");
    }

    store.toggle_language();
    for item in site::menu_items() {
        let label = item.label(&store);
        assert!(!label.starts_with("navbar."), "missing EN label: {label}");
    }
}

#[test]
fn toggle_label_matches_the_inactive_language_tag() {
    let mut store = store();
    assert_eq!(
        site::toggle_language_label(&store),
        store.current_language().toggled().tag()
    );

    store.toggle_language();
    assert_eq!(
        site::toggle_language_label(&store),
        store.current_language().toggled().tag()
    );
}

#[test]
fn see_more_key_resolves_at_top_level() {
    let mut store = store();
    assert_eq!(store.resolve("voir_plus"), "Voir plus");
    store.toggle_language();
    assert_eq!(store.resolve("voir_plus"), "See more");
}
