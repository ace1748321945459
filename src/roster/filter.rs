//! Second pass over a team's rows: drop non-player lines, then merge
//! repeated detections of the same player.
use super::PlayerRow;
use crate::text::{is_non_player_name, normalize_label};
use crate::types::FieldKey;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Heuristic for the "team totals" line that sometimes survives extraction:
/// no jersey, a large point total and shot parts that disagree with
/// `shots_made`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamTotalRule {
    pub min_points: u32,
    pub max_parts_gap: u32,
}

impl Default for TeamTotalRule {
    fn default() -> Self {
        Self {
            min_points: 25,
            max_parts_gap: 2,
        }
    }
}

impl TeamTotalRule {
    pub fn matches(&self, row: &PlayerRow) -> bool {
        row.jersey.is_none()
            && row.points >= self.min_points
            && row.shot_parts().abs_diff(row.shots_made) > self.max_parts_gap
    }
}

/// How a duplicate row is folded into the first occurrence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Field-wise maximum of every stat.
    #[default]
    Max,
    /// Later duplicates are discarded.
    KeepFirst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPolicy {
    /// `None` disables team-total rejection.
    pub team_total: Option<TeamTotalRule>,
    pub merge: MergePolicy,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            team_total: Some(TeamTotalRule::default()),
            merge: MergePolicy::Max,
        }
    }
}

/// Filter and deduplicate `players`, preserving first-occurrence order.
pub fn clean_players(players: Vec<PlayerRow>, policy: &FilterPolicy) -> Vec<PlayerRow> {
    let mut cleaned: Vec<PlayerRow> = Vec::with_capacity(players.len());
    let mut index: HashMap<(String, Option<u8>), usize> = HashMap::new();

    for mut row in players {
        let name = normalize_label(&row.name);
        if name.is_empty() && row.jersey.is_none() {
            continue;
        }
        if is_non_player_name(&name) {
            debug!("dropping non-player row '{}'", row.name);
            continue;
        }
        row.jersey = row.jersey.filter(|j| (1..=99).contains(j));
        row.clamp_stats();
        if let Some(rule) = &policy.team_total {
            if rule.matches(&row) {
                debug!("dropping team-total row '{}' ({} pts)", row.name, row.points);
                continue;
            }
        }

        match index.get(&(name.clone(), row.jersey)) {
            Some(&first) => {
                if policy.merge == MergePolicy::Max {
                    merge_max(&mut cleaned[first], &row);
                }
            }
            None => {
                index.insert((name, row.jersey), cleaned.len());
                cleaned.push(row);
            }
        }
    }
    cleaned
}

fn merge_max(into: &mut PlayerRow, other: &PlayerRow) {
    for key in FieldKey::STATS {
        if let (Some(a), Some(b)) = (into.stat(key), other.stat(key)) {
            into.set_stat(key, a.max(b));
        }
    }
}
