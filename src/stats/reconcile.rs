//! Bounded search that makes shot counts agree with the totals.
//!
//! Raw reads `(t0, i0, e0, f0)` for threes, inside twos, outside twos and
//! free throws are each perturbed within a small window. A tuple is *exact*
//! when it reproduces the read `shots_made` and `points`; the exact tuple
//! closest to the reads (L1, then lexicographically smallest) wins. Without
//! an exact tuple the weighted score `8·|Δpoints| + 6·|Δshots| + L1` is
//! minimised instead, keeping the first tuple seen on ties.
use super::clamp::clamp_stat;
use crate::types::FieldKey;
use serde::Serialize;

const WINDOW: u32 = 2;
const MAX_THREES: u32 = 10;
const MAX_TWOS: u32 = 12;
const MAX_FREE_THROWS: u32 = 12;
/// Free-throw totals that are always tried.
const COMMON_FREE_THROWS: [u32; 7] = [0, 2, 4, 6, 8, 10, 12];

const POINTS_WEIGHT: u32 = 8;
const SHOTS_WEIGHT: u32 = 6;

/// Raw reads fed to [`reconcile`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotReads {
    pub threes: u32,
    pub two_int: u32,
    pub two_ext: u32,
    pub ft_made: u32,
    pub shots_made: u32,
    pub points: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub threes: u32,
    pub two_int: u32,
    pub two_ext: u32,
    pub ft_made: u32,
    /// Always `threes + two_int + two_ext`.
    pub shots_made: u32,
    /// Always `3·threes + 2·(two_int + two_ext) + ft_made`.
    pub points: u32,
    /// Whether the read `shots_made` and `points` were reproduced.
    pub exact: bool,
}

type Tuple = (u32, u32, u32, u32);

/// `[v-2, v+2]` clipped to `[0, hi]`; a read beyond the cap collapses to `{hi}`.
fn window(v: u32, hi: u32) -> std::ops::RangeInclusive<u32> {
    let lo = v.saturating_sub(WINDOW).min(hi);
    lo..=(v + WINDOW).min(hi)
}

fn free_throw_candidates(f0: u32) -> Vec<u32> {
    let mut fs: Vec<u32> = window(f0, MAX_FREE_THROWS)
        .chain(COMMON_FREE_THROWS)
        .collect();
    fs.sort_unstable();
    fs.dedup();
    fs
}

fn shots((t, i, e, _): Tuple) -> u32 {
    t + i + e
}

fn points((t, i, e, f): Tuple) -> u32 {
    3 * t + 2 * (i + e) + f
}

pub fn reconcile(reads: ShotReads) -> Reconciled {
    let clamp = |key, v: u32| clamp_stat(key, i64::from(v));
    let t0 = clamp(FieldKey::Threes, reads.threes);
    let i0 = clamp(FieldKey::TwoInt, reads.two_int);
    let e0 = clamp(FieldKey::TwoExt, reads.two_ext);
    let f0 = clamp(FieldKey::FtMade, reads.ft_made);
    let s0 = clamp(FieldKey::ShotsMade, reads.shots_made);
    let p0 = clamp(FieldKey::Points, reads.points);

    let distance =
        |(t, i, e, f): Tuple| t.abs_diff(t0) + i.abs_diff(i0) + e.abs_diff(e0) + f.abs_diff(f0);

    let fs = free_throw_candidates(f0);
    let mut exact: Option<(u32, Tuple)> = None;
    let mut approx: (u32, Tuple) = (u32::MAX, (0, 0, 0, 0));

    for t in window(t0, MAX_THREES) {
        for i in window(i0, MAX_TWOS) {
            for e in window(e0, MAX_TWOS) {
                for &f in &fs {
                    let cand = (t, i, e, f);
                    let (s, p) = (shots(cand), points(cand));
                    if s == s0 && p == p0 {
                        let key = (distance(cand), cand);
                        if exact.map_or(true, |best| key < best) {
                            exact = Some(key);
                        }
                        continue;
                    }
                    let score = POINTS_WEIGHT * p.abs_diff(p0)
                        + SHOTS_WEIGHT * s.abs_diff(s0)
                        + distance(cand);
                    if score < approx.0 {
                        approx = (score, cand);
                    }
                }
            }
        }
    }

    let (best, is_exact) = match exact {
        Some((_, cand)) => (cand, true),
        None => (approx.1, false),
    };
    let (threes, two_int, two_ext, ft_made) = best;
    Reconciled {
        threes,
        two_int,
        two_ext,
        ft_made,
        shots_made: clamp(FieldKey::ShotsMade, shots(best)),
        points: clamp(FieldKey::Points, points(best)),
        exact: is_exact,
    }
}
