//! First-page rendering of uploaded documents.
use crate::error::{Result, RosterError};
use crate::image::io::decode_rgb;
use image::RgbImage;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

const PDF_MAGIC: &[u8] = b"%PDF-";
/// Resolution of a PDF page at scale 1.
pub const POINTS_PER_INCH: u32 = 72;

/// Renders page one of a document to RGB pixels.
pub trait PageRasterizer {
    fn render_first_page(&self, document: &[u8], scale: u32) -> Result<RgbImage>;
}

impl<P: PageRasterizer + ?Sized> PageRasterizer for &P {
    fn render_first_page(&self, document: &[u8], scale: u32) -> Result<RgbImage> {
        (**self).render_first_page(document, scale)
    }
}

/// Reject uploads that are empty or not PDF documents.
pub fn validate_document(file_name: &str, bytes: &[u8]) -> Result<()> {
    if !file_name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(RosterError::NotPdf(file_name.to_string()));
    }
    if bytes.is_empty() {
        return Err(RosterError::EmptyInput);
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(RosterError::NotPdf(format!("{file_name}: missing %PDF- header")));
    }
    Ok(())
}

/// `pdftoppm` from poppler-utils, fed through stdin and read from stdout.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Pdftoppm {
    pub binary: String,
}

impl Default for Pdftoppm {
    fn default() -> Self {
        Self {
            binary: "pdftoppm".to_string(),
        }
    }
}

impl Pdftoppm {
    pub fn args(scale: u32) -> Vec<String> {
        let dpi = (POINTS_PER_INCH * scale).to_string();
        ["-f", "1", "-l", "1", "-r", dpi.as_str(), "-png", "-singlefile", "-"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl PageRasterizer for Pdftoppm {
    fn render_first_page(&self, document: &[u8], scale: u32) -> Result<RgbImage> {
        let mut child = Command::new(&self.binary)
            .args(Self::args(scale))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RosterError::Rasterize(format!("failed to spawn {}: {e}", self.binary)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RosterError::Unexpected("pdftoppm stdin unavailable".into()))?;
        let document = document.to_vec();
        let writer = thread::spawn(move || stdin.write_all(&document));

        // Drains stdout and stderr together.
        let output = child.wait_with_output()?;
        if let Ok(Err(e)) = writer.join() {
            debug!("pdftoppm closed stdin early: {e}");
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("{} failed: {}", self.binary, stderr.trim());
            return Err(RosterError::Rasterize(stderr.trim().to_string()));
        }
        if output.stdout.is_empty() {
            return Err(RosterError::Rasterize("no page rendered".into()));
        }
        decode_rgb(&output.stdout)
    }
}
