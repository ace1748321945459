//! Global (Otsu) and local (adaptive Gaussian) thresholding.
//!
//! Binary outputs use `255` for foreground. The "inverse" variants follow the
//! usual convention: pixels darker than the threshold become foreground.
use crate::image::{GrayImageU8, ImageF32, ImageView};

/// Fixed 3-tap kernel used for small blurs.
const GAUSSIAN_3TAP: [f32; 3] = [0.25, 0.5, 0.25];

/// Normalised 1D Gaussian taps for an odd `ksize`, with sigma derived from the
/// kernel size (`0.3 * ((ksize - 1) / 2 - 1) + 0.8`).
pub fn gaussian_taps(ksize: usize) -> Vec<f32> {
    let ksize = ksize.max(1) | 1;
    if ksize == 3 {
        return GAUSSIAN_3TAP.to_vec();
    }
    let sigma = 0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let half = (ksize / 2) as f32;
    let scale = -0.5 / (sigma * sigma);
    let mut taps: Vec<f32> = (0..ksize)
        .map(|i| {
            let d = i as f32 - half;
            (d * d * scale).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    taps.iter_mut().for_each(|t| *t /= sum);
    taps
}

/// Separable Gaussian blur with replicated borders.
pub fn gaussian_blur<I: ImageView<Pixel = u8>>(src: &I, ksize: usize) -> ImageF32 {
    let (w, h) = (src.width(), src.height());
    let taps = gaussian_taps(ksize);
    let r = taps.len() / 2;
    let mut horiz = ImageF32::zeros(w, h);
    let mut out = ImageF32::zeros(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let row = src.row(y);
        let dst = horiz.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                let sx = (x + k).saturating_sub(r).min(w - 1);
                acc += t * row[sx] as f32;
            }
            *px = acc;
        }
    }

    for y in 0..h {
        let dst = out.row_mut(y);
        for (k, &t) in taps.iter().enumerate() {
            let sy = (y + k).saturating_sub(r).min(h - 1);
            let src_row = horiz.row(sy);
            for (d, &s) in dst.iter_mut().zip(src_row) {
                *d += t * s;
            }
        }
    }
    out
}

/// Small 3×3 Gaussian smoothing, rounded back to 8 bits.
pub fn blur_3x3(src: &GrayImageU8) -> GrayImageU8 {
    let blurred = gaussian_blur(src, 3);
    GrayImageU8::new(src.width(), src.height(), blurred.to_u8_rounded())
}

/// Inverted adaptive threshold against a Gaussian-weighted local mean.
///
/// A pixel becomes foreground (`255`) when it is at least `c` grey levels
/// darker than the rounded mean of its `block_size` neighbourhood.
pub fn adaptive_threshold_inv<I: ImageView<Pixel = u8>>(
    src: &I,
    block_size: usize,
    c: f32,
) -> GrayImageU8 {
    let (w, h) = (src.width(), src.height());
    let mean = gaussian_blur(src, block_size);
    let mut out = GrayImageU8::filled(w, h, 0);
    for y in 0..h {
        let row = src.row(y);
        let mean_row = mean.row(y);
        let dst = out.row_mut(y);
        for x in 0..w {
            let diff = row[x] as f32 - mean_row[x].round();
            if diff <= -c {
                dst[x] = 255;
            }
        }
    }
    out
}

/// Otsu threshold: the level `t` maximising between-class variance when the
/// histogram is split into `<= t` and `> t`. Uniform inputs yield `0`.
pub fn otsu_threshold<I: ImageView<Pixel = u8>>(src: &I) -> u8 {
    let mut hist = [0u64; 256];
    for row in src.rows() {
        for &v in row {
            hist[v as usize] += 1;
        }
    }
    let total: u64 = hist.iter().sum();
    if total == 0 {
        return 0;
    }
    let scale = 1.0 / total as f64;
    let mu: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &n)| i as f64 * n as f64 * scale)
        .sum();

    let (mut q1, mut mu1) = (0.0f64, 0.0f64);
    let mut best_sigma = 0.0f64;
    let mut best = 0u8;
    for (i, &n) in hist.iter().enumerate() {
        let p = n as f64 * scale;
        let q1_prev = q1;
        q1 += p;
        let q2 = 1.0 - q1;
        if q1.min(q2) < f64::from(f32::EPSILON) || q1.max(q2) > 1.0 - f64::from(f32::EPSILON) {
            continue;
        }
        mu1 = (mu1 * q1_prev + i as f64 * p) / q1;
        let mu2 = (mu - q1 * mu1) / q2;
        let sigma = q1 * q2 * (mu1 - mu2) * (mu1 - mu2);
        if sigma > best_sigma {
            best_sigma = sigma;
            best = i as u8;
        }
    }
    best
}

/// Otsu binarisation. `inverse == false` marks pixels above the threshold as
/// foreground; `inverse == true` marks pixels at or below it.
pub fn otsu_binarize(src: &GrayImageU8, inverse: bool) -> GrayImageU8 {
    let t = otsu_threshold(src);
    src.map(|v| if (v > t) != inverse { 255 } else { 0 })
}
