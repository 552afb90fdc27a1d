/*!
 * Translation of segment sequences through a pluggable translator.
 *
 * The actual translation backend is an external collaborator. This module
 * only defines the seam (`Translator`) and the ordering/timing guarantees
 * around it:
 * - translated segments keep the original start and end
 * - output order equals input order regardless of completion order
 * - the first backend error aborts the whole sequence
 */

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use std::fmt::Debug;

use crate::errors::{ProviderError, TranslationError};
use crate::language_utils;
use crate::segment::Segment;

pub mod mock;

/// Default number of in-flight translation requests
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Common trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` into the language named `target_language` (e.g. "Spanish")
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError>;
}

/// Translate every segment's text into `target_language_code`.
///
/// Blank segments are passed through without calling the translator.
pub async fn translate_segments<T>(
    translator: &T,
    segments: &[Segment],
    target_language_code: &str,
    concurrency: usize,
) -> Result<Vec<Segment>, TranslationError>
where
    T: Translator + ?Sized,
{
    let language_name = language_utils::get_language_name(target_language_code)
        .map_err(|_| TranslationError::UnsupportedLanguage(target_language_code.to_string()))?;

    info!("Translating {} segments to {}", segments.len(), language_name);

    let translated: Vec<Segment> = stream::iter(segments.iter().enumerate())
        .map(|(index, segment)| {
            let language_name = language_name.as_str();
            async move {
                if segment.text.trim().is_empty() {
                    return Ok::<_, TranslationError>(segment.clone());
                }
                let text = translator.translate(&segment.text, language_name).await?;
                debug!("Segment {} translated ({} -> {} chars)", index, segment.text.len(), text.len());
                Ok::<_, TranslationError>(segment.with_text(text.trim()))
            }
        })
        // buffered (not buffer_unordered) keeps results in input order
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(translated)
}
