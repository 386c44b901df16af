//! Listing page transformation
//!
//! Filters and orders the summary records returned by the catalog list
//! endpoint and turns them into [`CardView`]s.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;

use crate::card::CardView;
use crate::catalog::NamedResource;

const ARTWORK_URL_BASE: &str = "https://assets.pokemon.com/assets/cms2/img/pokedex/detail";

/// Sort direction of the listing
///
/// Starts out [`SortOrder::Unset`] (upstream order). Once a direction has
/// been picked, [`SortOrder::toggled`] only alternates between ascending
/// and descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Unset,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Lenient parse of the `sort` query parameter; unknown values are `Unset`
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Direction the sort toggle switches to
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Unset | SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Query parameter value, `None` for `Unset`
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortOrder::Unset => None,
            SortOrder::Ascending => Some("asc"),
            SortOrder::Descending => Some("desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(format!(
                "Invalid sort order: {other}. Valid values: asc, desc"
            )),
        }
    }
}

/// Rendered listing: cards in display order plus the state that produced them
#[derive(Debug, Serialize, Clone)]
pub struct ListingPage {
    pub query: String,
    pub order: SortOrder,
    /// Order the sort toggle should request next
    pub next_order: SortOrder,
    /// Number of records fetched before filtering
    pub total: usize,
    pub cards: Vec<CardView>,
}

/// Keep records whose name contains `query`, ignoring case
///
/// An empty query keeps everything. Upstream order is preserved.
pub fn filter_by_name(records: &[NamedResource], query: &str) -> Vec<NamedResource> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Order records by name without touching the input
pub fn sort_by_name(records: &[NamedResource], order: SortOrder) -> Vec<NamedResource> {
    let mut sorted = records.to_vec();
    match order {
        SortOrder::Unset => {}
        SortOrder::Ascending => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOrder::Descending => sorted.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
    sorted
}

/// Locale-style name comparison: case-insensitive first, lowercase before
/// uppercase on ties
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Last non-empty path segment of `url`, left-padded with zeros to width 3
///
/// Longer identifiers are never truncated. A URL with no segments yields
/// an empty string.
pub fn derive_identifier(url: &str) -> String {
    last_path_segment(url)
        .map(|id| format!("{id:0>3}"))
        .unwrap_or_default()
}

/// Last non-empty `/`-separated segment of `url`
pub fn last_path_segment(url: &str) -> Option<&str> {
    url.split('/').filter(|segment| !segment.is_empty()).next_back()
}

/// Official artwork URL for a padded identifier. No existence check is made.
pub fn artwork_url(id: &str) -> String {
    format!("{ARTWORK_URL_BASE}/{id}.png")
}

/// Filter, sort and convert the fetched records into listing cards
pub fn build_listing(records: &[NamedResource], query: &str, order: SortOrder) -> ListingPage {
    let filtered = filter_by_name(records, query);
    let cards = sort_by_name(&filtered, order)
        .iter()
        .map(CardView::from_summary)
        .collect();

    ListingPage {
        query: query.to_string(),
        order,
        next_order: order.toggled(),
        total: records.len(),
        cards,
    }
}
