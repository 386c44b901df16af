//! Detail page derivations
//!
//! Pure functions turning a [`Pokemon`] record and its species color into
//! display values: converted physical metrics, stat bars, stat labels,
//! type badge colors and theme contrast.

use serde::Serialize;

use crate::card::capitalize;
use crate::catalog::Pokemon;
use crate::listing::last_path_segment;

const DREAM_WORLD_URL_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world";
const TYPE_ICON_URL_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/types/generation-ix/scarlet-violet";

/// Badge color for type names missing from the palette
pub const DEFAULT_TYPE_COLOR: &str = "#A8A8A8";

const LIGHT_COLORS: [&str; 3] = ["white", "yellow", "pink"];

/// Rendered detail page
#[derive(Debug, Serialize, Clone)]
pub struct DetailPage {
    pub id: u32,
    /// Zero-padded number, e.g. "025"
    pub number: String,
    pub name: String,
    pub label: String,
    /// Species color used as page background
    pub color: String,
    /// Foreground color that stays readable on `color`
    pub text_color: &'static str,
    /// Section heading color
    pub heading_color: String,
    pub artwork_url: String,
    pub height: String,
    pub weight: String,
    pub types: Vec<TypeBadge>,
    pub stats: Vec<StatBar>,
    /// Carried through for JSON output; the page itself does not show them
    pub abilities: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TypeBadge {
    pub name: String,
    pub color: &'static str,
    pub icon_url: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatBar {
    pub name: String,
    pub label: String,
    pub base: u32,
    pub max: f64,
    /// Bar width in percent
    pub width: f64,
}

/// Level-100 maximum of a stat with a neutral nature
///
/// HP: `base * 2 + 204`. Everything else: `(base * 2 + 99) * 1.1`.
pub fn max_stat(base: u32, stat_name: &str) -> f64 {
    let base = f64::from(base);
    if stat_name == "hp" {
        base * 2.0 + 204.0
    } else {
        (base * 2.0 + 99.0) * 1.1
    }
}

/// Width in percent of the stat bar for `base` relative to [`max_stat`]
pub fn stat_bar_width(base: u32, stat_name: &str) -> f64 {
    f64::from(base) / max_stat(base, stat_name) * 100.0
}

/// Short display label for a stat key; unknown keys pass through
pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "ATK",
        "defense" => "DEF",
        "special-attack" => "SP-ATK",
        "special-defense" => "SP-DEF",
        "speed" => "SPEED",
        "accuracy" => "ACCURACY",
        "evasion" => "EVASION",
        other => other,
    }
}

/// Badge color of a type name
pub fn type_color(name: &str) -> &'static str {
    match name {
        "normal" => "#A8A77A",
        "fighting" => "#C22E28",
        "flying" => "#A98FF3",
        "poison" => "#A33EA1",
        "ground" => "#E2BF65",
        "rock" => "#B6A136",
        "bug" => "#A6B91A",
        "ghost" => "#735797",
        "steel" => "#B7B7CE",
        "fire" => "#EE8130",
        "water" => "#6390F0",
        "grass" => "#7AC74C",
        "electric" => "#F7D02C",
        "psychic" => "#F95587",
        "ice" => "#96D9D6",
        "dragon" => "#6F35FC",
        "dark" => "#705746",
        "fairy" => "#D685AD",
        "stellar" => "#40B5A5",
        "unknown" => "#68A090",
        _ => DEFAULT_TYPE_COLOR,
    }
}

/// Whether a species color is light enough to need dark text
pub fn is_color_light(color: &str) -> bool {
    LIGHT_COLORS.contains(&color)
}

/// Foreground text color for a background color
pub fn text_color(color: &str) -> &'static str {
    if is_color_light(color) {
        "black"
    } else {
        "white"
    }
}

/// Section heading color: black on light backgrounds, the color itself otherwise
pub fn heading_color(color: &str) -> String {
    if is_color_light(color) {
        "black".to_string()
    } else {
        color.to_string()
    }
}

/// Height in decimetres as metres with one decimal, e.g. "0.4 m"
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", f64::from(decimetres) / 10.0)
}

/// Weight in hectograms as kilograms with one decimal, e.g. "6.0 kg"
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

/// Dream-world artwork for a record id
pub fn dream_world_url(id: u32) -> String {
    format!("{DREAM_WORLD_URL_BASE}/{id}.svg")
}

/// Type icon for a type reference URL, keyed by its unpadded identifier
pub fn type_icon_url(type_url: &str) -> String {
    let id = last_path_segment(type_url).unwrap_or_default();
    format!("{TYPE_ICON_URL_BASE}/{id}.png")
}

/// Derive every display value of the detail page
pub fn build_detail(pokemon: &Pokemon, color: &str) -> DetailPage {
    let types = pokemon
        .types
        .iter()
        .map(|slot| TypeBadge {
            name: slot.kind.name.clone(),
            color: type_color(&slot.kind.name),
            icon_url: type_icon_url(&slot.kind.url),
        })
        .collect();

    let stats = pokemon
        .stats
        .iter()
        .map(|entry| StatBar {
            name: entry.stat.name.clone(),
            label: stat_label(&entry.stat.name).to_string(),
            base: entry.base_stat,
            max: max_stat(entry.base_stat, &entry.stat.name),
            width: stat_bar_width(entry.base_stat, &entry.stat.name),
        })
        .collect();

    DetailPage {
        id: pokemon.id,
        number: format!("{:0>3}", pokemon.id),
        name: pokemon.name.clone(),
        label: capitalize(&pokemon.name),
        color: color.to_string(),
        text_color: text_color(color),
        heading_color: heading_color(color),
        artwork_url: dream_world_url(pokemon.id),
        height: format_height(pokemon.height),
        weight: format_weight(pokemon.weight),
        types,
        stats,
        abilities: pokemon
            .abilities
            .iter()
            .map(|slot| slot.ability.name.clone())
            .collect(),
    }
}
