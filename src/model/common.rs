use serde::Serialize;

/// The fixed pool of Valorant maps this crate knows about.
///
/// Every resolver consumes this one enumeration; text scans check the
/// names in declaration order and the first hit wins. A fragment that
/// resolves to no known map is represented as the absence of a value,
/// so a constructed record always carries a real map.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum MapName {
    Ascent,
    Bind,
    Haven,
    Split,
    Icebox,
    Breeze,
    Fracture,
    Pearl,
    Lotus,
    Sunset,
    Abyss,
}

/// Best-of-N format of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum SeriesFormat {
    Bo1,
    Bo3,
    Bo5,
}
