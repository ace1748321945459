//! Grid geometry of a page raster, without recognition.
//!
//! Usage: `grid_probe <page.png> [peak_frac] [out_dir]`
//!
//! Prints the detected bounds as JSON and, with `out_dir`, writes the lines
//! mask, the content mask and the overlay for tuning `peak_frac`.
use emarque_grid::binarize::{binarize_page, BinarizeOptions};
use emarque_grid::diagnostics::render_overlay;
use emarque_grid::grid::{GridLocator, GridOptions};
use emarque_grid::image::io::{load_rgb_image, save_gray_png, save_rgb_png};
use emarque_grid::image::GrayImageU8;
use emarque_grid::RosterError;
use serde_json::json;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let input = args
        .next()
        .ok_or_else(|| "usage: grid_probe <page.png> [peak_frac] [out_dir]".to_string())?;
    let mut options = GridOptions::default();
    if let Some(frac) = args.next() {
        options.peak_frac = frac
            .parse()
            .map_err(|e| format!("invalid peak_frac '{frac}': {e}"))?;
    }
    let out_dir = args.next().map(PathBuf::from);

    let rgb = load_rgb_image(Path::new(&input)).map_err(|e| e.to_string())?;
    let gray = GrayImageU8::from_gray_image(image::imageops::grayscale(&rgb));
    let page = binarize_page(gray.as_view(), &BinarizeOptions::default());
    let geometry = GridLocator::new(options.clone()).locate(&page.lines);

    let summary = json!({
        "input": input,
        "width": page.width(),
        "height": page.height(),
        "peak_frac": options.peak_frac,
        "found": geometry.is_found(),
        "columns": geometry.column_count(),
        "rows": geometry.row_count(),
        "geometry": &geometry,
    });
    let text = serde_json::to_string_pretty(&summary)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    println!("{text}");

    if let Some(dir) = out_dir {
        let write = || -> Result<(), RosterError> {
            save_gray_png(&page.lines, &dir.join("lines.png"))?;
            save_gray_png(&page.content, &dir.join("content.png"))?;
            save_rgb_png(&render_overlay(&page.content, &geometry), &dir.join("overlay.png"))
        };
        write().map_err(|e| e.to_string())?;
        eprintln!("Debug artifacts written to {}", dir.display());
    }
    Ok(())
}
