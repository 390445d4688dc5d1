//! Display labels for documents.
//!
//! These are the strings a list row shows next to a document name. Units are
//! always the largest whole unit, singular when the count is exactly one.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;
use std::ops::Range;
use std::time::Duration;

pub const DEFAULT_EDITION_PATTERN: &str = "%Y-%m-%d %H:%M";

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

fn with_unit(count: u64, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

pub fn words_label(words: u32) -> String {
    with_unit(words as u64, "word", "words")
}

pub fn working_time_label(worked: Duration) -> String {
    let secs = worked.as_secs();
    let days = secs / SECS_PER_DAY;
    let hours = secs / SECS_PER_HOUR;
    let minutes = secs / SECS_PER_MINUTE;

    if days > 0 {
        with_unit(days, "day", "days")
    } else if hours > 0 {
        with_unit(hours, "hour", "hours")
    } else if minutes > 0 {
        with_unit(minutes, "minute", "minutes")
    } else {
        with_unit(secs, "second", "seconds")
    }
}

/// Returns true if `pattern` is a strftime pattern chrono can render.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats an edition timestamp in the local timezone.
pub fn edition_label(edited: DateTime<Utc>, pattern: &str) -> String {
    edition_label_in(edited, &Local, pattern)
}

pub fn edition_label_in<Tz>(edited: DateTime<Utc>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = if is_valid_pattern(pattern) {
        pattern
    } else {
        DEFAULT_EDITION_PATTERN
    };
    edited.with_timezone(tz).format(pattern).to_string()
}

/// Case folding used for name filters: per-char lowercase, with the Greek
/// final sigma folded to `σ`.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| if l == 'ς' { 'σ' } else { l })
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack`, measured in `haystack` itself.
///
/// `needle` must already be folded with [`fold_case`]. Matching is done on char boundaries of
/// the original text so the range is always sliceable, even when lowercasing
/// changes byte lengths.
pub fn highlight_range(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut lowered = String::new();
        for (offset, c) in haystack[start..].char_indices() {
            lowered.extend(fold_char(c));
            if lowered.len() >= needle.len() {
                if lowered == needle {
                    return Some(start..start + offset + c.len_utf8());
                }
                break;
            }
            if !needle.starts_with(lowered.as_str()) {
                break;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_labels() {
        assert_eq!(words_label(0), "0 words");
        assert_eq!(words_label(1), "1 word");
        assert_eq!(words_label(250), "250 words");
    }

    #[test]
    fn working_time_uses_largest_unit() {
        assert_eq!(working_time_label(Duration::from_millis(0)), "0 seconds");
        assert_eq!(working_time_label(Duration::from_millis(1_999)), "1 second");
        assert_eq!(working_time_label(Duration::from_secs(59)), "59 seconds");
        assert_eq!(working_time_label(Duration::from_secs(60)), "1 minute");
        assert_eq!(working_time_label(Duration::from_secs(3_599)), "59 minutes");
        assert_eq!(working_time_label(Duration::from_secs(7_200)), "2 hours");
        assert_eq!(working_time_label(Duration::from_secs(86_400)), "1 day");
        assert_eq!(
            working_time_label(Duration::from_secs(3 * 86_400 + 5 * 3_600)),
            "3 days"
        );
    }

    #[test]
    fn edition_label_formats_pattern() {
        let t = Utc.with_ymd_and_hms(2017, 6, 3, 9, 5, 0).unwrap();
        assert_eq!(
            edition_label_in(t, &Utc, DEFAULT_EDITION_PATTERN),
            "2017-06-03 09:05"
        );
        assert_eq!(edition_label_in(t, &Utc, "%d/%m/%Y"), "03/06/2017");
    }

    #[test]
    fn invalid_pattern_falls_back() {
        let t = Utc.with_ymd_and_hms(2017, 6, 3, 9, 5, 0).unwrap();
        assert!(!is_valid_pattern("%Q"));
        assert_eq!(edition_label_in(t, &Utc, "%Q"), "2017-06-03 09:05");
    }

    #[test]
    fn highlight_is_case_insensitive() {
        assert_eq!(highlight_range("My Novel", "nov"), Some(3..6));
        assert_eq!(highlight_range("NOVEL novel", "novel"), Some(0..5));
        assert_eq!(highlight_range("Essay", "xyz"), None);
        assert_eq!(highlight_range("Essay", ""), None);
    }

    #[test]
    fn final_sigma_folds_like_medial_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("οδος"), "οδοσ");
        assert_eq!(highlight_range("ΟΔΟΣ", &fold_case("οδος")), Some(0.."ΟΔΟΣ".len()));
    }

    #[test]
    fn highlight_respects_char_boundaries() {
        let name = "Ça va, ÉCOLE";
        let range = highlight_range(name, "école").unwrap();
        assert_eq!(&name[range], "ÉCOLE");
    }
}
