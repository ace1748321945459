//! Projection profiles of the lines mask and 1D peak grouping.
use crate::image::{GrayImageU8, ImageView};

/// Sum of mask intensity per column (`x`).
pub fn column_profile(mask: &GrayImageU8) -> Vec<u64> {
    let mut profile = vec![0u64; mask.width()];
    for row in mask.rows() {
        for (acc, &v) in profile.iter_mut().zip(row) {
            *acc += u64::from(v);
        }
    }
    profile
}

/// Sum of mask intensity per row (`y`).
pub fn row_profile(mask: &GrayImageU8) -> Vec<u64> {
    mask.rows()
        .map(|row| row.iter().map(|&v| u64::from(v)).sum())
        .collect()
}

/// Centres of the runs of profile entries strictly above `frac * max`.
///
/// Consecutive indices form one run and collapse to their (floored) midpoint.
/// An all-zero profile uses a threshold of 1 and therefore yields nothing.
pub fn peak_centers(profile: &[u64], frac: f32) -> Vec<usize> {
    let max = profile.iter().copied().max().unwrap_or(0);
    let thresh = if max > 0 {
        max as f64 * f64::from(frac)
    } else {
        1.0
    };

    let mut centers = Vec::new();
    let mut run: Option<(usize, usize)> = None;
    for (i, &v) in profile.iter().enumerate() {
        if (v as f64) <= thresh {
            continue;
        }
        run = match run {
            Some((start, end)) if i == end + 1 => Some((start, i)),
            Some((start, end)) => {
                centers.push((start + end) / 2);
                Some((i, i))
            }
            None => Some((i, i)),
        };
    }
    if let Some((start, end)) = run {
        centers.push((start + end) / 2);
    }
    centers
}
