//! Player records, team rosters and the final clean-up pass.
pub mod filter;

pub use self::filter::{clean_players, FilterPolicy, MergePolicy, TeamTotalRule};

use crate::stats::{clamp_stat, reconcile, Reconciled, ShotReads};
use crate::types::{FieldKey, PageHalf};
use serde::Serialize;

/// One player line of a team table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlayerRow {
    /// Shirt number in `1..=99`.
    pub jersey: Option<u8>,
    pub name: String,
    pub starter: bool,
    /// `MM:SS`, or empty when unreadable.
    pub play_time: String,
    pub points: u32,
    pub shots_made: u32,
    pub threes: u32,
    pub two_int: u32,
    pub two_ext: u32,
    pub ft_made: u32,
    pub fouls_committed: u32,
}

impl PlayerRow {
    /// Numeric value of a stat field; `None` for identity fields.
    pub fn stat(&self, key: FieldKey) -> Option<u32> {
        Some(match key {
            FieldKey::Points => self.points,
            FieldKey::ShotsMade => self.shots_made,
            FieldKey::Threes => self.threes,
            FieldKey::TwoInt => self.two_int,
            FieldKey::TwoExt => self.two_ext,
            FieldKey::FtMade => self.ft_made,
            FieldKey::FoulsCommitted => self.fouls_committed,
            FieldKey::Jersey | FieldKey::Name | FieldKey::Starter | FieldKey::PlayTime => {
                return None
            }
        })
    }

    /// Store `value` clamped to the field's range. Identity fields are ignored.
    pub fn set_stat(&mut self, key: FieldKey, value: u32) {
        let value = clamp_stat(key, i64::from(value));
        match key {
            FieldKey::Points => self.points = value,
            FieldKey::ShotsMade => self.shots_made = value,
            FieldKey::Threes => self.threes = value,
            FieldKey::TwoInt => self.two_int = value,
            FieldKey::TwoExt => self.two_ext = value,
            FieldKey::FtMade => self.ft_made = value,
            FieldKey::FoulsCommitted => self.fouls_committed = value,
            FieldKey::Jersey | FieldKey::Name | FieldKey::Starter | FieldKey::PlayTime => {}
        }
    }

    pub fn clamp_stats(&mut self) {
        for key in FieldKey::STATS {
            if let Some(v) = self.stat(key) {
                self.set_stat(key, v);
            }
        }
    }

    /// Replace the shot fields with their reconciled values.
    pub fn reconcile(&mut self) -> Reconciled {
        let r = reconcile(ShotReads {
            threes: self.threes,
            two_int: self.two_int,
            two_ext: self.two_ext,
            ft_made: self.ft_made,
            shots_made: self.shots_made,
            points: self.points,
        });
        self.threes = r.threes;
        self.two_int = r.two_int;
        self.two_ext = r.two_ext;
        self.ft_made = r.ft_made;
        self.shots_made = r.shots_made;
        self.points = r.points;
        r
    }

    /// `threes + two_int + two_ext`.
    pub fn shot_parts(&self) -> u32 {
        self.threes + self.two_int + self.two_ext
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamRoster {
    pub name: String,
    pub players: Vec<PlayerRow>,
}

impl TeamRoster {
    pub fn new(half: PageHalf, players: Vec<PlayerRow>) -> Self {
        Self {
            name: half.team_name().to_string(),
            players,
        }
    }

    pub fn empty(half: PageHalf) -> Self {
        Self::new(half, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_stat_clamps() {
        let mut row = PlayerRow::default();
        row.set_stat(FieldKey::FoulsCommitted, 8);
        row.set_stat(FieldKey::Points, 140);
        row.set_stat(FieldKey::Name, 3);
        assert_eq!(row.fouls_committed, 5);
        assert_eq!(row.points, 99);
        assert_eq!(row.stat(FieldKey::Name), None);
    }

    #[test]
    fn reconcile_rewrites_shot_fields() {
        let mut row = PlayerRow {
            threes: 2,
            two_int: 1,
            two_ext: 1,
            ft_made: 3,
            shots_made: 5,
            points: 13,
            ..PlayerRow::default()
        };
        assert!(row.reconcile().exact);
        assert_eq!((row.threes, row.two_int, row.two_ext, row.ft_made), (2, 1, 2, 1));
        assert_eq!(row.shot_parts(), row.shots_made);
    }

    #[test]
    fn roster_serializes_with_team_name() {
        let roster = TeamRoster::new(
            PageHalf::Bottom,
            vec![PlayerRow {
                jersey: Some(7),
                name: "Martin Léo".into(),
                ..PlayerRow::default()
            }],
        );
        let json = serde_json::to_value(&roster).unwrap();
        assert_eq!(json["name"], "Visiteurs");
        assert_eq!(json["players"][0]["jersey"], 7);
        assert_eq!(json["players"][0]["play_time"], "");
        assert_eq!(json["players"][0]["fouls_committed"], 0);
    }
}
