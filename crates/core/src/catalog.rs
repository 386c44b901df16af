use serde::{Deserialize, Serialize};

/// Species color used when the catalog does not report one.
pub const DEFAULT_COLOR: &str = "white";

/// A `{ name, url }` reference as returned by the catalog API
///
/// List endpoints return these as summary records; the trailing numeric
/// segment of `url` is the record identifier.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Paged list response (`GET /pokemon?limit=N`)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResourceList {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Full record (`GET /pokemon/{name}`)
///
/// Only the fields the views need are modelled; everything else in the
/// response is ignored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    pub species: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// Species record (`GET {species.url}`); only the color is read
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Species {
    #[serde(default)]
    pub color: Option<SpeciesColor>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpeciesColor {
    #[serde(default)]
    pub name: Option<String>,
}

/// Resolve the theme color of a species, falling back to [`DEFAULT_COLOR`]
///
/// A missing `color`, a missing `color.name` and an empty name all count
/// as absent.
pub fn resolve_color(species: &Species) -> String {
    species
        .color
        .as_ref()
        .and_then(|color| color.name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_COLOR)
        .to_string()
}
