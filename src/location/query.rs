//! Query cleanup and fallback derivation.
//!
//! Browsers and copy-pasted addresses deliver text with HTML entities and
//! typographic quotes that Nominatim matches poorly. Everything here is pure
//! string work so it can be tested without a network.

const LEFT_SINGLE_QUOTE: char = '\u{2018}';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Decode HTML entities, fold smart single quotes to `'`, and drop every `"`.
///
/// Entities are decoded first so `&rsquo;` and `&quot;` go through the
/// same folding as their literal forms.
pub fn normalize_query(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    decoded
        .chars()
        .filter(|&c| c != '"')
        .map(|c| match c {
            LEFT_SINGLE_QUOTE | RIGHT_SINGLE_QUOTE => '\'',
            other => other,
        })
        .collect()
}

/// Derive the broader query tried when the primary lookup comes back thin.
///
/// "Paris, France" → "Paris" (text before the first comma).
/// "123 Main Street Springfield" → "Street Springfield" (last two words).
/// One- or two-word queries have no fallback.
pub fn fallback_query(normalized: &str) -> Option<String> {
    if let Some((head, _)) = normalized.split_once(',') {
        return (!head.is_empty()).then(|| head.to_string());
    }

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() > 2 {
        return Some(tokens[tokens.len() - 2..].join(" "));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_passthrough() {
        assert_eq!(normalize_query("Stockholm"), "Stockholm");
    }

    #[test]
    fn test_normalize_smart_quotes() {
        assert_eq!(normalize_query("O\u{2019}Brien\u{2018}s Pub"), "O'Brien's Pub");
    }

    #[test]
    fn test_normalize_quote_entities() {
        assert_eq!(normalize_query("O&#8217;Brien&#x2019;s Pub"), "O'Brien's Pub");
        assert_eq!(normalize_query("&#8216;Abbey Road&#8217;"), "'Abbey Road'");
    }

    #[test]
    fn test_normalize_strips_double_quotes() {
        assert_eq!(normalize_query("\"Eiffel Tower\""), "Eiffel Tower");
        assert_eq!(normalize_query("&quot;Eiffel Tower&quot;"), "Eiffel Tower");
    }

    #[test]
    fn test_normalize_decodes_other_entities() {
        assert_eq!(normalize_query("Marks &amp; Spencer"), "Marks & Spencer");
        assert_eq!(normalize_query("Caf&#233; de Flore"), "Café de Flore");
    }

    #[test]
    fn test_fallback_comma() {
        assert_eq!(fallback_query("Paris, France"), Some("Paris".to_string()));
        assert_eq!(
            fallback_query("10 Downing Street, London, UK"),
            Some("10 Downing Street".to_string())
        );
    }

    #[test]
    fn test_fallback_comma_wins_over_tokens() {
        assert_eq!(
            fallback_query("Main Street Springfield, IL"),
            Some("Main Street Springfield".to_string())
        );
    }

    #[test]
    fn test_fallback_leading_comma_is_none() {
        assert_eq!(fallback_query(", France"), None);
    }

    #[test]
    fn test_fallback_last_two_tokens() {
        assert_eq!(
            fallback_query("123 Main Street Springfield"),
            Some("Street Springfield".to_string())
        );
        assert_eq!(
            fallback_query("Golden  Gate   Bridge"),
            Some("Gate Bridge".to_string())
        );
    }

    #[test]
    fn test_fallback_short_queries() {
        assert_eq!(fallback_query("Tokyo"), None);
        assert_eq!(fallback_query("New York"), None);
        assert_eq!(fallback_query(""), None);
    }
}
