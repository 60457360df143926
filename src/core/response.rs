//! Response chunking and Telegram message utilities
//!
//! - **Version**: 2.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.1.0: UTF-16 re-split so segments fit Telegram's limit whatever their script
//! - 2.0.0: Lossless character-count chunking; segments concatenate back to the input
//! - 1.0.0: Initial release

/// Telegram `sendMessage` text limit, in UTF-16 code units
///
/// Chunk sizes are counted in `char`s, and a `char` outside the BMP (most emoji)
/// takes two units, so a segment within a `char` budget can still be too long.
/// The transport passes every segment through [`fit_telegram_limit`].
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;
/// Default reply segment size, leaves headroom under the Telegram limit
pub const DEFAULT_CHUNK_SIZE: usize = 3200;
/// How much of an inbound prompt is echoed into the request log
pub const LOG_PREVIEW_CHARS: usize = 160;

/// Split text into contiguous segments of at most `limit` characters.
///
/// - Empty input yields a single empty segment, so a reply is always sent
/// - Segments are in order and concatenate back to `text` exactly
/// - Lengths are counted in `char`s and splits never land mid-character
/// - A `limit` of zero is treated as one
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == limit {
            chunks.push(text[start..idx].to_string());
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(text[start..].to_string());

    chunks
}

/// Re-split one segment so no part exceeds [`TELEGRAM_MESSAGE_LIMIT`] UTF-16 units.
///
/// Parts concatenate back to `segment`. A segment that already fits is returned as is.
pub fn fit_telegram_limit(segment: &str) -> Vec<String> {
    split_utf16_units(segment, TELEGRAM_MESSAGE_LIMIT)
}

fn split_utf16_units(text: &str, max_units: usize) -> Vec<String> {
    let max_units = max_units.max(2);
    let mut parts = Vec::new();
    let mut start = 0;
    let mut units = 0;

    for (idx, c) in text.char_indices() {
        if units + c.len_utf16() > max_units {
            parts.push(text[start..idx].to_string());
            start = idx;
            units = 0;
        }
        units += c.len_utf16();
    }
    parts.push(text[start..].to_string());

    parts
}

/// Single-line preview of user input for logs
pub fn preview_for_log(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let result = split_message("", 100);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_short_text_no_chunk() {
        let result = split_message("hello", 100);
        assert_eq!(result, vec!["hello"]);
    }

    #[test]
    fn test_exactly_at_limit() {
        let text = "a".repeat(100);
        let result = split_message(&text, 100);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 100);
    }

    #[test]
    fn test_one_over_limit() {
        let text = "a".repeat(101);
        let result = split_message(&text, 100);
        assert_eq!(result.len(), 2);
        assert_eq!(result[1], "a");
    }

    #[test]
    fn test_ten_thousand_chars_into_four() {
        let text: String = (0..10_000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = split_message(&text, 3200);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].chars().count(), 3200);
        assert_eq!(chunks[3].chars().count(), 400);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // Cyrillic is two bytes per char in UTF-8
        let text = "привет".repeat(10);
        let chunks = split_message(&text, 6);
        assert_eq!(chunks.len(), 10);
        for chunk in &chunks {
            assert_eq!(chunk, "привет");
        }
    }

    #[test]
    fn test_newlines_preserved() {
        let text = "line1\nline2\n\nline3\n";
        let chunks = split_message(text, 4);
        assert_eq!(chunks.concat(), text);
        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
    }

    #[test]
    fn test_emoji_and_mixed_scripts_lossless() {
        let text = "📊 Анализ / ✅ Выводы / 💡 Рекомендации. 世界! ".repeat(37);
        for limit in [1, 2, 7, 64, 3200] {
            let chunks = split_message(&text, limit);
            assert_eq!(chunks.concat(), text, "limit {limit}");
            assert!(chunks.iter().all(|c| c.chars().count() <= limit));
        }
    }

    #[test]
    fn test_resplitting_a_segment_is_identity() {
        let text = "Ответ: спасибо за отзыв! ".repeat(300);
        for chunk in split_message(&text, 500) {
            assert_eq!(split_message(&chunk, 500), vec![chunk.clone()]);
        }
    }

    #[test]
    fn test_zero_limit_treated_as_one() {
        assert_eq!(split_message("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_emoji_segment_fits_telegram_limit() {
        let segment = "📊💡".repeat(1500);
        assert_eq!(segment.chars().count(), 3000);
        assert_eq!(segment.encode_utf16().count(), 6000);

        let parts = fit_telegram_limit(&segment);
        assert_eq!(parts.len(), 2);
        assert!(parts
            .iter()
            .all(|p| p.encode_utf16().count() <= TELEGRAM_MESSAGE_LIMIT));
        assert_eq!(parts[0].encode_utf16().count(), TELEGRAM_MESSAGE_LIMIT);
        assert_eq!(parts.concat(), segment);
    }

    #[test]
    fn test_default_chunk_of_plain_text_is_untouched() {
        let segment = "ы".repeat(DEFAULT_CHUNK_SIZE);
        assert_eq!(fit_telegram_limit(&segment), vec![segment.clone()]);
        assert_eq!(fit_telegram_limit(""), vec![String::new()]);
    }

    #[test]
    fn test_preview_flattens_newlines_and_truncates() {
        let text = format!("Отзыв:\n{}", "x".repeat(500));
        let preview = preview_for_log(&text, LOG_PREVIEW_CHARS);
        assert_eq!(preview.chars().count(), LOG_PREVIEW_CHARS);
        assert!(preview.starts_with("Отзыв: x"));
        assert!(!preview.contains('\n'));
    }
}
