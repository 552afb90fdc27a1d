/*!
 * Mock translator for testing.
 *
 * - `MockTranslator::working()` - prefixes text with the target language
 * - `MockTranslator::intermittent(n)` - fails every nth request
 * - `MockTranslator::failing()` - always fails with an error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use super::Translator;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails on every `fail_every`th request
    Intermittent { fail_every: usize },
    /// Always fails
    Failing,
}

/// Mock translator that records how often it was called
#[derive(Debug)]
pub struct MockTranslator {
    behavior: MockBehavior,
    request_count: AtomicUsize,
}

impl MockTranslator {
    /// Create a mock with a specific behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: AtomicUsize::new(0),
        }
    }

    /// Mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Mock that fails every nth request
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Mock that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of translate calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Working => Ok(format!("[{}] {}", target_language, text)),
            MockBehavior::Intermittent { fail_every } if fail_every > 0 && count % fail_every == 0 => {
                Err(ProviderError::RequestFailed(format!("Simulated failure on request {}", count)))
            }
            MockBehavior::Intermittent { .. } => Ok(format!("[{}] {}", target_language, text)),
            MockBehavior::Failing => {
                Err(ProviderError::ConnectionError("Simulated connection failure".to_string()))
            }
        }
    }
}
