use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// @module: Timed text segments produced by transcription or translation

// @struct: Single timed unit of transcript text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    // @field: Start offset in seconds
    pub start: f64,

    // @field: End offset in seconds
    pub end: f64,

    // @field: Spoken or translated text
    pub text: String,
}

impl Segment {
    /// Creates a new segment
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Segment {
            start,
            end,
            text: text.into(),
        }
    }

    /// Length of the segment in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the segment satisfies `end > start >= 0`
    pub fn has_valid_timing(&self) -> bool {
        self.start >= 0.0 && self.end > self.start
    }

    /// Copy of this segment carrying different text, used for translations
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Segment {
            start: self.start,
            end: self.end,
            text: text.into(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:.3} -> {:.3}] {}", self.start, self.end, self.text)
    }
}

/// Shapes accepted for segment JSON: a bare list, or a transcription
/// response object with a `segments` field (extra fields are ignored).
#[derive(Deserialize)]
#[serde(untagged)]
enum SegmentsDocument {
    List(Vec<Segment>),
    Transcript { segments: Vec<Segment> },
}

/// Parse segments from JSON text
pub fn segments_from_json(content: &str) -> Result<Vec<Segment>> {
    let document: SegmentsDocument = serde_json::from_str(content)
        .context("Failed to parse segments JSON (expected a list or an object with `segments`)")?;

    Ok(match document {
        SegmentsDocument::List(segments) => segments,
        SegmentsDocument::Transcript { segments } => segments,
    })
}

/// Serialize segments to pretty JSON
pub fn segments_to_json(segments: &[Segment]) -> Result<String> {
    serde_json::to_string_pretty(segments).context("Failed to serialize segments to JSON")
}
