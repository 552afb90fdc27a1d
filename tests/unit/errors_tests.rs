/*!
 * Tests for error types and conversions
 */

use subtool::errors::{
    AppError, ProviderError, SessionError, SubtitleError, TimingError, TranslationError,
};

#[test]
fn test_subtitleError_display_shouldEchoFormat() {
    let error = SubtitleError::UnsupportedFormat("xyz".to_string());
    assert_eq!(error.to_string(), "Unsupported subtitle format: xyz");
}

#[test]
fn test_timingError_display_shouldIncludeIndexAndLength() {
    let error = TimingError::InvalidIndex { index: 5, len: 2 };
    assert_eq!(error.to_string(), "Invalid segment index 5 (sequence has 2 segments)");
}

#[test]
fn test_providerError_intoTranslationError_shouldWrap() {
    let error: TranslationError = ProviderError::RateLimitExceeded("slow down".to_string()).into();

    assert!(matches!(error, TranslationError::Provider(ProviderError::RateLimitExceeded(_))));
    assert_eq!(error.to_string(), "Provider error: Rate limit exceeded: slow down");
}

#[test]
fn test_sessionError_fromTimingError_shouldKeepSource() {
    let error: SessionError = TimingError::InvalidIndex { index: 1, len: 0 }.into();
    assert_eq!(error, SessionError::Timing(TimingError::InvalidIndex { index: 1, len: 0 }));
}

#[test]
fn test_appError_conversions_shouldPickMatchingVariant() {
    let subtitle: AppError = SubtitleError::UnsupportedFormat("doc".to_string()).into();
    assert!(matches!(subtitle, AppError::Subtitle(_)));

    let session: AppError = SessionError::NotFound("abc".to_string()).into();
    assert_eq!(session.to_string(), "Session error: Session not found: abc");

    let io: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(io, AppError::File(_)));

    let other: AppError = anyhow::anyhow!("something odd").into();
    assert_eq!(other.to_string(), "Unknown error: something odd");
}

#[test]
fn test_sessionError_stale_shouldNameSession() {
    let error = SessionError::Stale("abc".to_string());
    assert_eq!(error.to_string(), "Segments of session abc changed during translation");
}
