//! Region → season label
//!
//! Descriptive context only; the season never changes a risk rating.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Dry,
    Wet,
    Transition,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Dry => "Dry",
            Season::Wet => "Wet",
            Season::Transition => "Transition",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label shown when no region was supplied
pub const SEASON_NOT_APPLICABLE: &str = "N/A";

/// Map a region to its season label.
///
/// Region names are lowercased before matching. Unrecognized regions fall
/// back to `Dry`; an absent or empty region yields `None` (not applicable).
pub fn season_for_region(region: Option<&str>) -> Option<Season> {
    let region = region.filter(|r| !r.is_empty())?;
    let season = match region.to_lowercase().as_str() {
        "north" => Season::Dry,
        "south" => Season::Wet,
        "middle-belt" => Season::Transition,
        _ => Season::Dry,
    };
    Some(season)
}
