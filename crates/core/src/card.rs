use serde::Serialize;

use crate::catalog::NamedResource;
use crate::listing::{artwork_url, derive_identifier};

/// Everything needed to render one entry of the listing grid
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Zero-padded display identifier, e.g. "025"
    pub id: String,
    pub name: String,
    /// Capitalized name shown on the card
    pub label: String,
    pub image_url: String,
    /// Link to the detail page
    pub href: String,
}

impl CardView {
    pub fn from_summary(record: &NamedResource) -> Self {
        let id = derive_identifier(&record.url);
        let image_url = artwork_url(&id);

        Self {
            label: capitalize(&record.name),
            href: detail_href(&record.name),
            name: record.name.clone(),
            image_url,
            id,
        }
    }
}

/// Uppercase the first character and leave the rest untouched
///
/// "pikachu" becomes "Pikachu", "MEW" stays "MEW", "mr-mime" becomes
/// "Mr-mime". An empty string stays empty.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Path of the detail page for a record name
pub fn detail_href(name: &str) -> String {
    format!("/pokemon/{name}")
}
