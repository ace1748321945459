//! Request-level surface: upload in, JSON envelope out.
//!
//! Success: `{"ok": true, "teams": [...], "debug_overlay": null}`.
//! Failure: `{"ok": false, "error": "..."}` with status 400 for bad input
//! and 500 for everything else.
use crate::diagnostics::DebugSink;
use crate::error::{Result, RosterError};
use crate::extractor::{ExtractionReport, RosterExtractor, RosterParams};
use crate::ocr::Recognizer;
use crate::rasterize::{validate_document, PageRasterizer};
use crate::roster::TeamRoster;
use image::RgbImage;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Clone, Debug, Serialize)]
pub struct RosterResponse {
    pub ok: bool,
    pub teams: Vec<TeamRoster>,
    /// Where the overlay was stored, once the caller has written it.
    pub debug_overlay: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl From<&RosterError> for ErrorResponse {
    fn from(err: &RosterError) -> Self {
        let error = match err {
            RosterError::EmptyInput => "empty file".to_string(),
            RosterError::NotPdf(_) => "the 'file' field must be a PDF".to_string(),
            other => other.to_string(),
        };
        Self { ok: false, error }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Ok(RosterResponse),
    Err(ErrorResponse),
}

/// Status, body and the overlay image (when one was rendered).
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub body: ResponseBody,
    pub overlay: Option<RgbImage>,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Record where the caller stored the overlay.
    pub fn set_overlay_location(&mut self, location: impl Into<String>) {
        if let ResponseBody::Ok(body) = &mut self.body {
            body.debug_overlay = Some(location.into());
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.body)
            .unwrap_or_else(|e| json!({ "ok": false, "error": e.to_string() }))
    }
}

/// Validate, rasterize and extract one uploaded document.
pub fn extract_document<P, R>(
    file_name: &str,
    bytes: &[u8],
    params: &RosterParams,
    rasterizer: &P,
    recognizer: R,
    sink: &dyn DebugSink,
) -> Result<ExtractionReport>
where
    P: PageRasterizer + ?Sized,
    R: Recognizer,
{
    validate_document(file_name, bytes)?;
    let extractor = RosterExtractor::new(params.clone(), recognizer)?;
    let page = rasterizer.render_first_page(bytes, params.scale)?;
    debug!(
        "{file_name}: rendered {}x{} at scale {}",
        page.width(),
        page.height(),
        params.scale
    );
    Ok(extractor.process_rgb(&page, sink))
}

/// [`extract_document`] mapped onto the JSON envelope.
pub fn parse_document<P, R>(
    file_name: &str,
    bytes: &[u8],
    params: &RosterParams,
    rasterizer: &P,
    recognizer: R,
    sink: &dyn DebugSink,
) -> Reply
where
    P: PageRasterizer + ?Sized,
    R: Recognizer,
{
    match extract_document(file_name, bytes, params, rasterizer, recognizer, sink) {
        Ok(report) => {
            let overlay = report.overlay.clone();
            Reply {
                status: 200,
                body: ResponseBody::Ok(RosterResponse {
                    ok: true,
                    teams: report.into_teams().into(),
                    debug_overlay: None,
                }),
                overlay,
            }
        }
        Err(err) => {
            warn!("{file_name}: {err}");
            Reply {
                status: err.status(),
                body: ResponseBody::Err(ErrorResponse::from(&err)),
                overlay: None,
            }
        }
    }
}

/// Liveness payload.
pub fn health() -> Value {
    json!({ "ok": true })
}
