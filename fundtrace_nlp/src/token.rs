//! Whitespace tokenizer with punctuation-aware span boundaries.

const TRAILING_PUNCT: &[char] = &[',', ';', ':', '!', '?', ')', ']', '"', '\''];
const LEADING_PUNCT: &[char] = &['(', '[', '"', '\''];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// Surface text with boundary punctuation removed.
    pub text: &'a str,
    /// Punctuation before the token separates it from the previous one.
    pub opens: bool,
    /// Punctuation after the token separates it from the next one.
    pub closes: bool,
}

impl Token<'_> {
    /// First character is an uppercase letter.
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// A single capital followed by a period, e.g. `J.`.
    pub fn is_initial(&self) -> bool {
        let mut chars = self.text.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(c), Some('.'), None) if c.is_uppercase()
        )
    }

    /// Upper-case letters only, at least two of them.
    pub fn is_acronym(&self) -> bool {
        let letters = self.text.chars().filter(|c| *c != '.').count();
        letters >= 2
            && letters <= 6
            && self
                .text
                .chars()
                .all(|c| c == '.' || (c.is_alphabetic() && c.is_uppercase()))
    }

    /// Lower-cased text without a trailing period, for lexicon lookups.
    pub fn key(&self) -> String {
        self.text.trim_end_matches('.').to_lowercase()
    }
}

/// How a trailing period on a bare word is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Period {
    /// Sentence punctuation: dropped, and the token ends its span.
    Sentence,
    /// Honorific ("Dr."): kept, the span continues into the name.
    Title,
    /// Name suffix ("Inc."): kept, and the token ends its span.
    Suffix,
}

/// Split a line into tokens.
///
/// A trailing period is sentence punctuation unless `period` classifies the
/// bare word otherwise. Dotted acronyms ("U.S.") and initials ("J.") always
/// keep theirs.
pub(crate) fn tokenize<'a>(line: &'a str, period: impl Fn(&str) -> Period) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();

    for raw in line.split_whitespace() {
        let stripped = raw.trim_start_matches(LEADING_PUNCT);
        let opens = stripped.len() != raw.len();

        let mut text = stripped.trim_end_matches(TRAILING_PUNCT);
        let mut closes = text.len() != stripped.len();

        if let Some(possessive) = text
            .strip_suffix("'s")
            .or_else(|| text.strip_suffix("\u{2019}s"))
        {
            text = possessive;
            closes = true;
        }

        if let Some(bare) = text.strip_suffix('.') {
            if !(bare.contains('.') || is_single_capital(bare)) {
                match period(bare) {
                    Period::Title => {}
                    Period::Suffix => closes = true,
                    Period::Sentence => {
                        text = bare;
                        closes = true;
                    }
                }
            }
        }

        if text.is_empty() {
            continue;
        }
        tokens.push(Token {
            text,
            opens,
            closes,
        });
    }

    tokens
}

fn is_single_capital(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles_only(bare: &str) -> Period {
        if bare.eq_ignore_ascii_case("dr") {
            Period::Title
        } else {
            Period::Sentence
        }
    }

    fn texts(line: &str) -> Vec<&str> {
        tokenize(line, titles_only).iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_sentence_period_is_split() {
        assert_eq!(texts("approved by J. Epstein."), vec!["approved", "by", "J.", "Epstein"]);
    }

    #[test]
    fn test_titles_keep_period() {
        let tokens = tokenize("Dr. Smith", titles_only);
        assert_eq!(tokens[0].text, "Dr.");
        assert!(!tokens[0].closes);
    }

    #[test]
    fn test_acronym_with_dots_kept() {
        assert_eq!(texts("the U.S. Treasury"), vec!["the", "U.S.", "Treasury"]);
    }

    #[test]
    fn test_trailing_comma_closes() {
        let tokens = tokenize("Harvard, Yale", |_| Period::Sentence);
        assert!(tokens[0].closes);
        assert_eq!(tokens[0].text, "Harvard");
    }

    #[test]
    fn test_possessive_stripped() {
        assert_eq!(texts("Harvard's endowment"), vec!["Harvard", "endowment"]);
    }

    #[test]
    fn test_initial_and_acronym() {
        let tokens = tokenize("J. FBI Ok", |_| Period::Sentence);
        assert!(tokens[0].is_initial());
        assert!(tokens[1].is_acronym());
        assert!(!tokens[2].is_acronym());
    }

    #[test]
    fn test_key_lowercases_and_drops_period() {
        let tokens = tokenize("Inc.", |_| Period::Suffix);
        assert_eq!(tokens[0].text, "Inc.");
        assert_eq!(tokens[0].key(), "inc");
    }

    #[test]
    fn test_suffix_keeps_period_and_closes() {
        let tokens = tokenize("Acme Inc. Smith", |w| {
            if w == "Inc" { Period::Suffix } else { Period::Sentence }
        });
        assert_eq!(tokens[1].text, "Inc.");
        assert!(tokens[1].closes);
    }

    #[test]
    fn test_sentence_final_word_loses_period() {
        let tokens = tokenize("to Harvard University.", titles_only);
        assert_eq!(tokens[2].text, "University");
        assert!(tokens[2].closes);
    }
}
