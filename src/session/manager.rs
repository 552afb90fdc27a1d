/*!
 * Session store for processed videos.
 *
 * This module handles:
 * - Creating sessions from transcribed segments
 * - Attaching translations and keeping them time-aligned with the originals
 * - Rendering any language of a session in any subtitle format
 */

use log::{debug, info};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::errors::{AppError, SessionError, TimingError};
use crate::language_utils;
use crate::segment::Segment;
use crate::subtitle_processor::SubtitleFormat;
use crate::translation::{self, Translator};

use super::models::ProcessedVideo;

/// Thread-safe in-memory store of processed videos keyed by session id
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, ProcessedVideo>>,
}

fn normalize_language(code: &str) -> Result<String, SessionError> {
    language_utils::normalize_to_part1_or_part2t(code)
        .map_err(|_| SessionError::UnknownLanguage(code.to_string()))
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session and return its id
    pub fn create(
        &self,
        source_name: impl Into<String>,
        language: &str,
        segments: Vec<Segment>,
    ) -> Result<String, SessionError> {
        let language = normalize_language(language)?;
        let session_id = Uuid::new_v4().to_string();
        let video = ProcessedVideo::new(source_name.into(), language, segments);

        info!(
            "Creating session {} for {} ({} segments)",
            &session_id[..8],
            video.source_name,
            video.segments.len()
        );

        self.sessions.write().insert(session_id.clone(), video);
        Ok(session_id)
    }

    /// Snapshot of a session
    pub fn get(&self, id: &str) -> Result<ProcessedVideo, SessionError> {
        self.sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Replace the original segments wholesale.
    ///
    /// Existing translations were derived from the old text and are dropped.
    pub fn replace_segments(&self, id: &str, segments: Vec<Segment>) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write();
        let video = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        if !video.translations.is_empty() {
            debug!("Dropping {} translation(s) of session {}", video.translations.len(), &id[..id.len().min(8)]);
        }
        video.segments = segments;
        video.translations.clear();
        Ok(())
    }

    /// Attach (or replace) the translation for `language`
    pub fn set_translation(
        &self,
        id: &str,
        language: &str,
        segments: Vec<Segment>,
    ) -> Result<(), SessionError> {
        self.insert_translation(id, language, segments, None)
    }

    /// Store a translation, optionally requiring the originals to still equal `source`
    fn insert_translation(
        &self,
        id: &str,
        language: &str,
        segments: Vec<Segment>,
        source: Option<&[Segment]>,
    ) -> Result<(), SessionError> {
        let language = normalize_language(language)?;
        let mut sessions = self.sessions.write();
        let video = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        if source.is_some_and(|source| source != video.segments.as_slice()) {
            return Err(SessionError::Stale(id.to_string()));
        }

        if segments.len() != video.segments.len() {
            return Err(SessionError::MismatchedTranslation {
                expected: video.segments.len(),
                actual: segments.len(),
            });
        }

        video.translations.insert(language, segments);
        Ok(())
    }

    /// Run one timing transform over the originals and every translation.
    ///
    /// Either all sequences are updated or, on error, none are.
    pub fn apply_timing<F>(&self, id: &str, transform: F) -> Result<(), SessionError>
    where
        F: Fn(&[Segment]) -> Result<Vec<Segment>, TimingError>,
    {
        let mut sessions = self.sessions.write();
        let video = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let segments = transform(&video.segments)?;
        let translations: BTreeMap<String, Vec<Segment>> = video
            .translations
            .iter()
            .map(|(language, translated)| transform(translated).map(|t| (language.clone(), t)))
            .collect::<Result<_, TimingError>>()?;

        video.segments = segments;
        video.translations = translations;
        Ok(())
    }

    /// Render the segments of `language` (the session's own language when `None`)
    pub fn render(
        &self,
        id: &str,
        language: Option<&str>,
        format: SubtitleFormat,
        fps: f64,
    ) -> Result<String, SessionError> {
        let sessions = self.sessions.read();
        let video = sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let language = match language {
            Some(code) => normalize_language(code)?,
            None => video.language.clone(),
        };
        let segments = video
            .segments_for(&language)
            .ok_or_else(|| SessionError::LanguageNotFound {
                id: id.to_string(),
                language: language.clone(),
            })?;

        Ok(format.render(segments, fps))
    }

    /// Translate the session's originals and store the result.
    ///
    /// Fails with `SessionError::Stale` if the originals were retimed or
    /// replaced while the translator was running; nothing is stored then.
    pub async fn translate<T>(
        &self,
        id: &str,
        translator: &T,
        target_language: &str,
        concurrency: usize,
    ) -> Result<(), AppError>
    where
        T: Translator + ?Sized,
    {
        // Snapshot so the lock is not held across the translator's awaits
        let segments = self.get(id)?.segments;
        let translated =
            translation::translate_segments(translator, &segments, target_language, concurrency).await?;
        self.insert_translation(id, target_language, translated, Some(&segments))?;
        Ok(())
    }

    /// Drop a session
    pub fn remove(&self, id: &str) -> Option<ProcessedVideo> {
        self.sessions.write().remove(id)
    }

    /// Number of sessions
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// All session ids, sorted
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}
