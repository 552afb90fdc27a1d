/*!
 * Tests for file utility functions
 */

use std::path::Path;
use subtool::file_utils::{FileManager, FileType};
use crate::common;

#[test]
fn test_generateOutputPath_shouldInsertLanguageBeforeExtension() {
    let path = FileManager::generate_output_path("videos/talk.json", "/out", "en", "vtt");
    assert_eq!(path, Path::new("/out/talk.en.vtt"));
}

#[test]
fn test_writeToFile_withMissingParent_shouldCreateDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("nested").join("deeper").join("out.srt");

    FileManager::write_to_file(&path, "content").unwrap();

    assert_eq!(FileManager::read_to_string(&path).unwrap(), "content");
}

#[test]
fn test_readToString_withMissingFile_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    assert!(FileManager::read_to_string(temp_dir.path().join("missing.srt")).is_err());
}

#[test]
fn test_findFiles_shouldRecurseAndMatchExtensionCaseInsensitively() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path();
    common::create_test_file(dir, "b.srt", "").unwrap();
    common::create_test_file(dir, "a.SRT", "").unwrap();
    common::create_test_file(dir, "notes.txt", "").unwrap();
    FileManager::ensure_dir(dir.join("sub")).unwrap();
    common::create_test_file(&dir.join("sub"), "c.srt", "").unwrap();

    let found = FileManager::find_files(dir, ".srt").unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names.len(), 3);
    assert!(names.contains(&"a.SRT".to_string()));
    assert!(names.contains(&"b.srt".to_string()));
    assert!(names.contains(&"c.srt".to_string()));
}

#[test]
fn test_detectFileType_shouldClassifyByExtension() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path();

    let srt = common::create_test_subtitle(dir, "a.srt").unwrap();
    let json = common::create_test_segments_json(dir, "a.json").unwrap();
    let video = common::create_test_file(dir, "a.MKV", "").unwrap();
    let other = common::create_test_file(dir, "a.txt", "").unwrap();

    assert_eq!(FileManager::detect_file_type(&srt).unwrap(), FileType::Subtitle);
    assert_eq!(FileManager::detect_file_type(&json).unwrap(), FileType::Segments);
    assert_eq!(FileManager::detect_file_type(&video).unwrap(), FileType::Video);
    assert_eq!(FileManager::detect_file_type(&other).unwrap(), FileType::Unknown);
    assert!(FileManager::detect_file_type(dir.join("missing.mp4")).is_err());
}
