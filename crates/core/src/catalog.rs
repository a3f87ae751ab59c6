//! Course catalog constants and validation functions.
//!
//! Defines the closed value sets stored as `TEXT` columns (course level,
//! lesson type, video source) and helpers shared by the DB and API layers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

pub const LEVEL_BEGINNER: &str = "beginner";
pub const LEVEL_INTERMEDIATE: &str = "intermediate";
pub const LEVEL_ADVANCED: &str = "advanced";

/// All valid course levels.
pub const VALID_LEVELS: &[&str] = &[LEVEL_BEGINNER, LEVEL_INTERMEDIATE, LEVEL_ADVANCED];

pub const LESSON_TYPE_VIDEO: &str = "video";
pub const LESSON_TYPE_ARTICLE: &str = "article";
pub const LESSON_TYPE_QUIZ: &str = "quiz";

/// All valid lesson types.
pub const VALID_LESSON_TYPES: &[&str] = &[LESSON_TYPE_VIDEO, LESSON_TYPE_ARTICLE, LESSON_TYPE_QUIZ];

pub const VIDEO_SOURCE_YOUTUBE: &str = "youtube";
pub const VIDEO_SOURCE_VIMEO: &str = "vimeo";
pub const VIDEO_SOURCE_CLOUDFLARE: &str = "cloudflare";
pub const VIDEO_SOURCE_UPLOAD: &str = "upload";

/// All valid video sources.
pub const VALID_VIDEO_SOURCES: &[&str] = &[
    VIDEO_SOURCE_YOUTUBE,
    VIDEO_SOURCE_VIMEO,
    VIDEO_SOURCE_CLOUDFLARE,
    VIDEO_SOURCE_UPLOAD,
];

/// Review ratings are whole stars in this range.
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid"));

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"));

fn validate_one_of(kind: &str, value: &str, valid: &[&str]) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {kind} '{value}'. Must be one of: {}",
            valid.join(", ")
        )))
    }
}

pub fn validate_level(level: &str) -> Result<(), CoreError> {
    validate_one_of("level", level, VALID_LEVELS)
}

pub fn validate_lesson_type(lesson_type: &str) -> Result<(), CoreError> {
    validate_one_of("lesson type", lesson_type, VALID_LESSON_TYPES)
}

pub fn validate_video_source(source: &str) -> Result<(), CoreError> {
    validate_one_of("video source", source, VALID_VIDEO_SOURCES)
}

/// Validate a review rating (1 to 5 inclusive).
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Validate a price in cents. Free courses have price 0.
pub fn validate_price_cents(price_cents: i64) -> Result<(), CoreError> {
    if price_cents < 0 {
        return Err(CoreError::Validation(
            "Price must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a slug is lowercase ASCII words separated by single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid slug '{slug}'")))
    }
}

/// Derive a URL slug from a title.
///
/// Lowercases, drops accents on common Latin letters, and collapses every run
/// of other characters into a single hyphen. Returns an empty string when the
/// title has no usable characters.
pub fn slugify(title: &str) -> String {
    let folded: String = title
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect();
    NON_SLUG_CHARS
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ạ' | 'ả' | 'ă' | 'ắ' | 'ằ' | 'ẳ' | 'ẵ' | 'ặ'
        | 'ấ' | 'ầ' | 'ẩ' | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'ẹ' | 'ẻ' | 'ẽ' | 'ế' | 'ề' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ọ' | 'ỏ' | 'ơ' | 'ố' | 'ồ' | 'ổ' | 'ỗ' | 'ộ' | 'ớ'
        | 'ờ' | 'ở' | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ứ' | 'ừ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ý' | 'ÿ' | 'ỳ' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}
