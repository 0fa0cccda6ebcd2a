//! Extract per-map Valorant match results from vlr.gg pages.
//!
//! The extraction core ([`extract_match`]) is pure: it consumes an
//! already parsed [`Html`] document plus its source URL and produces
//! validated [`model::MapRecord`]s, falling through layered selector and
//! text-scan heuristics as the page's structure permits. Fetching lives
//! in [`VlrClient`]; cross-match aggregation lives in [`aggregate`].
//!
//! vlr.gg's markup is versioned and loosely structured, so the
//! heuristics are best-effort by design: anything that fails to resolve
//! degrades to fewer records rather than an error.

pub use client::VlrClient;
pub use error::{Result, VlrError};
pub use extract::match_maps::extract_match;
pub use extract::series::classify_series;
pub use scraper::Html;

pub mod aggregate;
mod client;
mod error;
pub mod extract;
pub mod model;
