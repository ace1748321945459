use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic identity of a scoresheet column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Jersey,
    Name,
    Starter,
    PlayTime,
    Points,
    ShotsMade,
    Threes,
    TwoInt,
    TwoExt,
    FtMade,
    FoulsCommitted,
}

impl FieldKey {
    /// Printed column order of the standard scoresheet template.
    pub const CANONICAL_ORDER: [FieldKey; 11] = [
        FieldKey::Jersey,
        FieldKey::Name,
        FieldKey::Starter,
        FieldKey::PlayTime,
        FieldKey::Points,
        FieldKey::ShotsMade,
        FieldKey::Threes,
        FieldKey::TwoInt,
        FieldKey::TwoExt,
        FieldKey::FtMade,
        FieldKey::FoulsCommitted,
    ];

    /// Count-valued statistics carried by every player row.
    pub const STATS: [FieldKey; 7] = [
        FieldKey::Points,
        FieldKey::ShotsMade,
        FieldKey::Threes,
        FieldKey::TwoInt,
        FieldKey::TwoExt,
        FieldKey::FtMade,
        FieldKey::FoulsCommitted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Jersey => "jersey",
            FieldKey::Name => "name",
            FieldKey::Starter => "starter",
            FieldKey::PlayTime => "play_time",
            FieldKey::Points => "points",
            FieldKey::ShotsMade => "shots_made",
            FieldKey::Threes => "threes",
            FieldKey::TwoInt => "two_int",
            FieldKey::TwoExt => "two_ext",
            FieldKey::FtMade => "ft_made",
            FieldKey::FoulsCommitted => "fouls_committed",
        }
    }

    pub fn is_stat(self) -> bool {
        Self::STATS.contains(&self)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which table of the page a row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageHalf {
    Top,
    Bottom,
}

impl PageHalf {
    pub fn as_str(self) -> &'static str {
        match self {
            PageHalf::Top => "top",
            PageHalf::Bottom => "bottom",
        }
    }

    /// Team label printed on the scoresheet for this table.
    pub fn team_name(self) -> &'static str {
        match self {
            PageHalf::Top => "Locaux",
            PageHalf::Bottom => "Visiteurs",
        }
    }
}
