// SPDX-License-Identifier: MPL-2.0
//! Static image catalog for the portfolio gallery.
//!
//! The catalog is fixed at compile time. Captions are stored as description
//! keys rather than per-image strings so several images can share one
//! localized caption.

use crate::i18n::LocalizationStore;

/// A single catalog entry: an image file plus the key of its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    id: u32,
    src: &'static str,
    description_key: &'static str,
}

impl GalleryImage {
    const fn new(id: u32, src: &'static str, description_key: &'static str) -> Self {
        Self {
            id,
            src,
            description_key,
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Site-relative path of the image file.
    #[must_use]
    pub fn src(&self) -> &'static str {
        self.src
    }

    /// Bare caption key, without the `descriptions.` prefix.
    #[must_use]
    pub fn description_key(&self) -> &'static str {
        self.description_key
    }

    /// Caption in the store's active language.
    #[must_use]
    pub fn localized_description(&self, store: &LocalizationStore) -> String {
        store.resolve(&format!("descriptions.{}", self.description_key))
    }
}

// Several images reuse a caption key on purpose.
const CATALOG: [GalleryImage; 19] = [
    GalleryImage::new(1, "/gallery/1.jpg", "desc_1"),
    GalleryImage::new(2, "/gallery/2.jpg", "desc_2"),
    GalleryImage::new(3, "/gallery/3.jpg", "desc_3"),
    GalleryImage::new(4, "/gallery/4.jpg", "desc_4"),
    GalleryImage::new(5, "/gallery/5.jpg", "desc_5"),
    GalleryImage::new(6, "/gallery/21.jpg", "desc_6"),
    GalleryImage::new(7, "/gallery/7.jpg", "desc_7"),
    GalleryImage::new(8, "/gallery/8.jpg", "desc_8"),
    GalleryImage::new(9, "/gallery/9.jpg", "desc_1"),
    GalleryImage::new(10, "/gallery/10.jpg", "desc_2"),
    GalleryImage::new(11, "/gallery/11.jpg", "desc_3"),
    GalleryImage::new(12, "/gallery/12.jpg", "desc_4"),
    GalleryImage::new(13, "/gallery/13.jpg", "desc_5"),
    GalleryImage::new(14, "/gallery/14.jpeg", "desc_6"),
    GalleryImage::new(15, "/gallery/15.jpeg", "desc_6"),
    GalleryImage::new(16, "/gallery/16.jpg", "desc_5"),
    GalleryImage::new(17, "/gallery/17.jpg", "desc_6"),
    GalleryImage::new(18, "/gallery/18.jpg", "desc_6"),
    GalleryImage::new(19, "/gallery/20.jpeg", "desc_6"),
];

/// The full catalog in display order.
#[must_use]
pub fn catalog() -> &'static [GalleryImage] {
    &CATALOG
}

/// Looks up a catalog entry by id.
#[must_use]
pub fn find(id: u32) -> Option<&'static GalleryImage> {
    CATALOG.iter().find(|image| image.id == id)
}
