/*!
 * In-memory session store for processed videos.
 *
 * A session holds the segments transcribed from one video together with any
 * translations of them. Sessions live only as long as the store; nothing is
 * persisted.
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::SessionStore;
pub use models::ProcessedVideo;
