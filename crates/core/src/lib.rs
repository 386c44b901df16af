//! Core library for pokedex
//!
//! This crate implements the **Functional Core** of the pokedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`pokedex_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokedex`**: Catalog HTTP client, web server and CLI (the Imperative Shell)
//!
//! Every function here is deterministic and side-effect free, so it can be
//! tested with fixture data and no mocking. The shell fetches catalog
//! responses, hands them to these functions and renders whatever comes back.
//!
//! # Module Organization
//!
//! - [`catalog`]: Wire models of the catalog API and species color resolution
//! - [`listing`]: Search, sort and identifier derivation for the list page
//! - [`card`]: Record card view model and name capitalization
//! - [`detail`]: Derived metrics for the detail page (stat bars, labels, theming)
//!
//! # Example Usage
//!
//! ```rust
//! use pokedex_core::catalog::NamedResource;
//! use pokedex_core::listing::{build_listing, SortOrder};
//!
//! let records = vec![
//!     NamedResource {
//!         name: "bulbasaur".to_string(),
//!         url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
//!     },
//!     NamedResource {
//!         name: "ivysaur".to_string(),
//!         url: "https://pokeapi.co/api/v2/pokemon/2/".to_string(),
//!     },
//! ];
//!
//! let page = build_listing(&records, "ivy", SortOrder::Unset);
//!
//! assert_eq!(page.cards.len(), 1);
//! assert_eq!(page.cards[0].id, "002");
//! ```

pub mod card;
pub mod catalog;
pub mod detail;
pub mod listing;
