use crate::error::BingoError;

/// Highest collision suffix tried before the batch is rejected.
const MAX_SUFFIX: u32 = 99;

/// Post-process a batch of AI-suggested short labels into a collision-free,
/// non-empty, capitalized set. Output order matches input order; any
/// violation fails the whole batch so the caller keeps its original topics.
pub fn normalize_short_labels(
    labels: &[String],
    expected_count: usize,
) -> Result<Vec<String>, BingoError> {
    if labels.len() != expected_count {
        return Err(BingoError::MalformedResponse(format!(
            "expected {expected_count} labels, got {}",
            labels.len()
        )));
    }

    let mut results: Vec<String> = Vec::with_capacity(expected_count);

    for label in labels {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(BingoError::MalformedResponse(
                "provider returned an empty label".to_string(),
            ));
        }

        let normalized = capitalize_first_character(trimmed);

        if !results.contains(&normalized) {
            results.push(normalized);
            continue;
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{normalized} {suffix}");
            if !results.contains(&candidate) {
                results.push(candidate);
                break;
            }
            suffix += 1;
            if suffix > MAX_SUFFIX {
                return Err(BingoError::MalformedResponse(format!(
                    "could not disambiguate label '{normalized}'"
                )));
            }
        }
    }

    Ok(results)
}

/// Uppercase the first letter or digit, scanning left to right. Everything
/// else is left untouched; a string with no such character passes through.
fn capitalize_first_character(text: &str) -> String {
    let Some((index, first)) = text.char_indices().find(|(_, c)| c.is_alphanumeric()) else {
        return text.to_string();
    };

    let mut result = String::with_capacity(text.len());
    result.push_str(&text[..index]);
    result.extend(first.to_uppercase());
    result.push_str(&text[index + first.len_utf8()..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn capitalizes_and_suffixes_collisions() {
        let result = normalize_short_labels(&labels(&["run", "Run", "walk"]), 3).unwrap();
        assert_eq!(result, ["Run", "Run 2", "Walk"]);
    }

    #[test]
    fn suffix_counter_keeps_climbing() {
        let result = normalize_short_labels(&labels(&["nap", "nap", "Nap", "Nap 2"]), 4).unwrap();
        assert_eq!(result, ["Nap", "Nap 2", "Nap 3", "Nap 2 2"]);
    }

    #[test]
    fn trims_whitespace() {
        let result = normalize_short_labels(&labels(&["  board games  "]), 1).unwrap();
        assert_eq!(result, ["Board games"]);
    }

    #[test]
    fn capitalizes_first_alphanumeric_not_first_char() {
        let result = normalize_short_labels(&labels(&["\"quoted phrase\"", "3 dances"]), 2).unwrap();
        assert_eq!(result, ["\"Quoted phrase\"", "3 dances"]);
    }

    #[test]
    fn label_without_letters_or_digits_passes_through() {
        let result = normalize_short_labels(&labels(&["!!!"]), 1).unwrap();
        assert_eq!(result, ["!!!"]);
    }

    #[test]
    fn wrong_cardinality_fails_the_batch() {
        let err = normalize_short_labels(&labels(&["one", "two"]), 3).unwrap_err();
        assert!(matches!(err, BingoError::MalformedResponse(_)));
    }

    #[test]
    fn empty_label_fails_the_batch() {
        let err = normalize_short_labels(&labels(&["fine", "   "]), 2).unwrap_err();
        assert!(matches!(err, BingoError::MalformedResponse(_)));
    }

    #[test]
    fn preserves_unicode_tails() {
        let result = normalize_short_labels(&labels(&["äta glass"]), 1).unwrap();
        assert_eq!(result, ["Äta glass"]);
    }
}
