/*!
 * Tests for app configuration functionality
 */

use std::fs;
use subtool::app_config::{Config, LogLevel};
use subtool::subtitle_processor::{SubtitleFormat, DEFAULT_FRAME_RATE};
use crate::common;

#[test]
fn test_config_default_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert_eq!(config.output_formats, vec![SubtitleFormat::Srt, SubtitleFormat::Vtt]);
    assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);
    assert!(config.timing.is_identity());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_withInvalidLanguage_shouldFail() {
    let config = Config { language: "invalid".to_string(), ..Config::default() };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withNoFormats_shouldFail() {
    let config = Config { output_formats: Vec::new(), ..Config::default() };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withBadFrameRate_shouldFail() {
    for frame_rate in [0.0, -24.0, f64::NAN] {
        let config = Config { frame_rate, ..Config::default() };
        assert!(config.validate().is_err(), "frame rate {} accepted", frame_rate);
    }
}

#[test]
fn test_config_validate_withScaleOutOfRange_shouldFail() {
    let mut config = Config::default();
    config.timing.duration_scale = 7.5;
    assert!(config.validate().is_err());

    config.timing.duration_scale = 0.1;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.language, "en");
    let saved = Config::load_or_create(&path).unwrap();
    assert_eq!(saved.output_formats, config.output_formats);
}

#[test]
fn test_config_loadOrCreate_withPartialFile_shouldFillDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"language": "fr", "output_formats": ["ass", "sub"], "timing": {"offset_seconds": -0.5}}"#,
    )
    .unwrap();

    let config = Config::load_or_create(&path).unwrap();

    assert_eq!(config.language, "fr");
    assert_eq!(config.output_formats, vec![SubtitleFormat::Ass, SubtitleFormat::Sub]);
    assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);
    assert_eq!(config.timing.offset_seconds, -0.5);
    assert_eq!(config.timing.duration_scale, 1.0);
}

#[test]
fn test_config_loadOrCreate_withUnknownFormat_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{"output_formats": ["xyz"]}"#).unwrap();

    assert!(Config::load_or_create(&path).is_err());
}

#[test]
fn test_config_save_shouldWriteLowercaseNames() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("saved.json");
    let config = Config { log_level: LogLevel::Debug, ..Config::default() };

    config.save(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert!(content.contains("\"debug\""));
    assert!(content.contains("\"srt\""));
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
