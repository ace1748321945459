//! Extract rosters from one or more scoresheet PDFs.
//!
//! Usage: `emarque <config.json>` or `emarque <sheet.pdf>...`
use emarque_grid::config::{load_config, RuntimeConfig};
use emarque_grid::diagnostics::{DebugSink, DirSink, NullSink};
use emarque_grid::image::io::{save_rgb_png, write_json_file};
use emarque_grid::response::parse_document;
use rayon::prelude::*;
use serde_json::{json, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.as_slice() {
        [] => return Err("usage: emarque <config.json> | emarque <sheet.pdf>...".to_string()),
        [single] if single.to_ascii_lowercase().ends_with(".json") => {
            load_config(Path::new(single)).map_err(|e| e.to_string())?
        }
        paths => RuntimeConfig::for_inputs(paths.iter().map(PathBuf::from).collect()),
    };
    config.params.validate().map_err(|e| e.to_string())?;
    if config.inputs.is_empty() {
        return Err("no input documents".to_string());
    }

    let documents: Vec<Value> = config
        .inputs
        .par_iter()
        .map(|path| process_document(path, &config))
        .collect();
    let failed = documents.iter().filter(|d| d["status"] != 200).count();

    let report = json!({ "documents": documents });
    match &config.output.json {
        Some(path) => {
            write_json_file(path, &report)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            eprintln!("JSON report written to {}", path.display());
        }
        None => {
            let text = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{text}");
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} documents failed", config.inputs.len());
    }
    Ok(())
}

/// One pipeline per document; debug artifacts go to `<debug_dir>/<stem>/`.
fn process_document(path: &Path, config: &RuntimeConfig) -> Value {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return json!({
                "file": path.display().to_string(),
                "status": 500,
                "response": { "ok": false, "error": format!("failed to read: {e}") },
            })
        }
    };

    let doc_dir = config.output.debug_dir.as_ref().map(|dir| {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        dir.join(stem)
    });
    let sink: Box<dyn DebugSink> = match &doc_dir {
        Some(dir) => Box::new(DirSink::new(dir.join("cells"))),
        None => Box::new(NullSink),
    };

    let mut reply = parse_document(
        &file_name,
        &bytes,
        &config.params,
        &config.pdftoppm,
        &config.tesseract,
        sink.as_ref(),
    );
    if let (Some(overlay), Some(dir)) = (&reply.overlay, &doc_dir) {
        let overlay_path = dir.join("overlay.png");
        match save_rgb_png(overlay, &overlay_path) {
            Ok(()) => {
                let location = overlay_path.display().to_string();
                reply.set_overlay_location(location);
            }
            Err(e) => eprintln!("Failed to write overlay {}: {e}", overlay_path.display()),
        }
    }

    json!({
        "file": path.display().to_string(),
        "status": reply.status,
        "response": reply.to_json(),
    })
}
