//! The summary source abstraction

use async_trait::async_trait;
use volcano_core::{LookupError, LookupRequest};

/// Anything that can produce a short plain-text summary of a topic
///
/// Implementations must be shareable across the UI's async tasks; the
/// dashboard holds one behind an `Arc<dyn SummarySource>`.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Summary of `request.topic`, at most `request.sentences` sentences
    async fn summary(&self, request: &LookupRequest) -> Result<String, LookupError>;
}

/// Keep the first `n` sentences of `text`
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end
/// of the text.
pub fn first_sentences(text: &str, n: u8) -> &str {
    let text = text.trim();
    if n == 0 {
        return "";
    }

    let mut seen = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
            if at_boundary {
                seen += 1;
                if seen == n {
                    return &text[..i + c.len_utf8()];
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentences() {
        let text = "A volcano is a rupture. Lava flows out! Is it hot? Yes.";
        assert_eq!(first_sentences(text, 1), "A volcano is a rupture.");
        assert_eq!(first_sentences(text, 3), "A volcano is a rupture. Lava flows out! Is it hot?");
        assert_eq!(first_sentences(text, 9), text);
        assert_eq!(first_sentences(text, 0), "");
    }

    #[test]
    fn test_decimal_points_do_not_split() {
        let text = "It rises 3.7 km above sea level. It last erupted in 1707.";
        assert_eq!(first_sentences(text, 1), "It rises 3.7 km above sea level.");
    }
}
