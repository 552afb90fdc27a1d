/*!
 * Session models.
 */

use chrono::{DateTime, Local};
use std::collections::BTreeMap;

use crate::segment::Segment;

/// Everything known about one processed video
#[derive(Debug, Clone)]
pub struct ProcessedVideo {
    /// Display name of the source (usually the uploaded file name)
    pub source_name: String,
    /// Language of `segments`, normalized ISO 639 code
    pub language: String,
    /// Segments in the source language
    pub segments: Vec<Segment>,
    /// Translated segments keyed by normalized language code
    pub translations: BTreeMap<String, Vec<Segment>>,
    /// When the session was created
    pub created_at: DateTime<Local>,
}

impl ProcessedVideo {
    /// Create a session payload without translations
    pub fn new(source_name: String, language: String, segments: Vec<Segment>) -> Self {
        Self {
            source_name,
            language,
            segments,
            translations: BTreeMap::new(),
            created_at: Local::now(),
        }
    }

    /// Segments for `language`: the originals or one of the translations
    pub fn segments_for(&self, language: &str) -> Option<&[Segment]> {
        if language == self.language {
            Some(&self.segments)
        } else {
            self.translations.get(language).map(Vec::as_slice)
        }
    }
}
