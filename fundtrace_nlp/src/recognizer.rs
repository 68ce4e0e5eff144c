//! Gazetteer and capitalization based recognizer.
//!
//! Spans are runs of capitalized tokens, optionally bridged by lower-case
//! connectors ("Bank of America"). A span is labelled by, in order: an exact
//! gazetteer hit, an organization keyword, then person cues (a leading title,
//! an initial, or a known first name). Spans with no evidence are dropped.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use fundtrace_core::{EntityLabel, EntityMentions, EntityRecognizer, Result};

use crate::model::EntityModel;
use crate::token::{Period, Token, tokenize};

const CONNECTORS: &[&str] = &["of", "and", "&", "for", "the", "de", "von", "van"];

fn lowercase_set(items: &[String]) -> HashSet<String> {
    items.iter().map(|s| s.trim().to_lowercase()).collect()
}

/// Compiled form of an [`EntityModel`].
#[derive(Debug, Clone)]
pub struct RuleRecognizer {
    gazetteer: HashMap<String, EntityLabel>,
    org_keywords: HashSet<String>,
    person_titles: HashSet<String>,
    abbreviations: HashSet<String>,
    given_names: HashSet<String>,
    stopwords: HashSet<String>,
    acronyms_as_organizations: bool,
}

impl RuleRecognizer {
    /// Load and compile the model at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_model(&EntityModel::load(path)?))
    }

    #[must_use]
    pub fn from_model(model: &EntityModel) -> Self {
        let mut gazetteer = HashMap::new();
        for org in &model.organizations {
            gazetteer.insert(org.trim().to_string(), EntityLabel::Organization);
        }
        for person in &model.persons {
            gazetteer.insert(person.trim().to_string(), EntityLabel::Person);
        }

        Self {
            gazetteer,
            org_keywords: lowercase_set(&model.org_keywords),
            person_titles: lowercase_set(&model.person_titles),
            abbreviations: lowercase_set(&model.abbreviations),
            given_names: lowercase_set(&model.given_names),
            stopwords: lowercase_set(&model.stopwords),
            acronyms_as_organizations: model.acronyms_as_organizations,
        }
    }

    fn period(&self, bare: &str) -> Period {
        let key = bare.to_lowercase();
        if self.person_titles.contains(&key) {
            Period::Title
        } else if self.abbreviations.contains(&key) {
            Period::Suffix
        } else {
            Period::Sentence
        }
    }

    fn is_title(&self, token: &Token<'_>) -> bool {
        self.person_titles.contains(&token.key())
    }

    /// Group tokens into candidate spans.
    fn spans<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<&'t [Token<'a>]> {
        let mut spans = Vec::new();
        let mut start: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            if token.opens {
                if let Some(s) = start.take() {
                    spans.push(&tokens[s..i]);
                }
            }

            let bridges = start.is_some()
                && !token.closes
                && CONNECTORS.iter().any(|c| *c == token.text)
                && tokens.get(i + 1).is_some_and(|next| next.is_capitalized() && !next.opens);

            if token.is_capitalized() || bridges {
                let s = *start.get_or_insert(i);
                if token.closes {
                    spans.push(&tokens[s..=i]);
                    start = None;
                }
            } else if let Some(s) = start.take() {
                spans.push(&tokens[s..i]);
            }
        }

        if let Some(s) = start {
            spans.push(&tokens[s..]);
        }

        spans
    }

    /// Strip titles and stopwords off the front of a span and label it.
    fn classify(&self, span: &[Token<'_>]) -> Option<(EntityLabel, String)> {
        let mut span = span;
        let mut titled = false;

        while let Some((first, rest)) = span.split_first() {
            if self.is_title(first) {
                titled = true;
            } else if !self.stopwords.contains(&first.key()) {
                break;
            }
            span = rest;
        }

        let (first, _) = span.split_first()?;
        let text = span.iter().map(|t| t.text).collect::<Vec<_>>().join(" ");

        if let Some(label) = self.gazetteer.get(&text) {
            return Some((*label, text));
        }

        if span.iter().any(|t| self.org_keywords.contains(&t.key())) {
            return Some((EntityLabel::Organization, text));
        }

        let initial = span.iter().any(Token::is_initial);
        let given = span.len() >= 2 && self.given_names.contains(&first.key());
        if titled || initial || given {
            return Some((EntityLabel::Person, text));
        }

        if self.acronyms_as_organizations && span.len() == 1 && first.is_acronym() {
            return Some((EntityLabel::Organization, text));
        }

        None
    }
}

impl EntityRecognizer for RuleRecognizer {
    fn recognize(&self, line: &str) -> EntityMentions {
        let tokens = tokenize(line, |bare| self.period(bare));
        let mut mentions = EntityMentions::default();

        for span in Self::spans(&tokens) {
            if let Some((label, text)) = self.classify(span) {
                mentions.push(label, text);
            }
        }

        mentions
    }
}
