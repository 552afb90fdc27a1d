/*!
 * # subtool - subtitle generation for transcribed video
 *
 * A Rust library that turns timed speech segments into subtitle files.
 *
 * ## Features
 *
 * - Render segments as SRT, WebVTT, ASS and MicroDVD SUB
 * - Parse SRT documents back into segments (best effort)
 * - Retime segments: global offset, duration scaling, single-segment edits
 * - Translate segments through a pluggable translator, keeping timing
 * - Keep processed videos and their translations in an in-memory session store
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `segment`: The timed text segment type and JSON loading
 * - `timing`: Pure timing transforms over segment sequences
 * - `subtitle_processor`: Subtitle rendering, format dispatch and SRT parsing
 * - `translation`: Translator trait and order-preserving segment translation
 * - `session`: In-memory store of processed videos
 * - `app_config`: Configuration management
 * - `app_controller`: File-level workflow used by the CLI
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod segment;
pub mod session;
pub mod subtitle_processor;
pub mod timing;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, SessionError, SubtitleError, TimingError, TranslationError};
pub use segment::Segment;
pub use session::SessionStore;
pub use subtitle_processor::{parse_srt_string, render_subtitles, SubtitleFormat};
pub use timing::{adjust_duration_scale, adjust_global_offset, adjust_segment_timing, TimingAdjustment};
pub use translation::Translator;
