/*!
 * Tests for language code utilities
 */

use subtool::language_utils::{
    get_language_name, language_codes_match, normalize_to_part1_or_part2t, normalize_to_part2t,
};

#[test]
fn test_normalizeToPart2t_shouldAcceptEveryCodeForm() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("eng").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fre").unwrap(), "fra");
    assert_eq!(normalize_to_part2t(" DE ").unwrap(), "deu");
}

#[test]
fn test_normalizeToPart1OrPart2t_shouldPreferTwoLetterCodes() {
    assert_eq!(normalize_to_part1_or_part2t("spa").unwrap(), "es");
    assert_eq!(normalize_to_part1_or_part2t("ger").unwrap(), "de");
    assert_eq!(normalize_to_part1_or_part2t("haw").unwrap(), "haw");
}

#[test]
fn test_normalize_withInvalidCode_shouldFail() {
    assert!(normalize_to_part2t("invalid").is_err());
    assert!(normalize_to_part1_or_part2t("").is_err());
}

#[test]
fn test_languageCodesMatch_shouldCompareLanguagesNotStrings() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("fr", "fre"));
    assert!(!language_codes_match("en", "es"));
    assert!(!language_codes_match("invalid", "invalid"));
}

#[test]
fn test_getLanguageName_shouldReturnEnglishName() {
    assert_eq!(get_language_name("es").unwrap(), "Spanish");
    assert_eq!(get_language_name("fra").unwrap(), "French");
    assert!(get_language_name("xx1").is_err());
}
