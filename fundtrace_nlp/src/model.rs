//! Recognizer model file.
//!
//! The model is plain JSON so it can be tuned per corpus without a rebuild.
//! Missing fields fall back to the built-in lists.

use std::path::Path;

use fundtrace_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Gazetteers and lexical cues used by [`crate::RuleRecognizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityModel {
    /// Exact organization surface forms.
    #[serde(default = "default_organizations")]
    pub organizations: Vec<String>,

    /// Exact person surface forms.
    #[serde(default)]
    pub persons: Vec<String>,

    /// Words that make a capitalized span an organization ("university", "llc").
    #[serde(default = "default_org_keywords")]
    pub org_keywords: Vec<String>,

    /// Honorifics that mark the following span as a person.
    #[serde(default = "default_person_titles")]
    pub person_titles: Vec<String>,

    /// Name suffixes written with a period ("Inc.", "Jr."). The period stays
    /// on the token and ends the span.
    #[serde(default = "default_abbreviations")]
    pub abbreviations: Vec<String>,

    /// First names that mark a multi-word span as a person.
    #[serde(default = "default_given_names")]
    pub given_names: Vec<String>,

    /// Capitalized words that never start an entity.
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,

    /// Treat short all-caps words ("FBI", "MIT") as organizations.
    #[serde(default = "default_true")]
    pub acronyms_as_organizations: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for EntityModel {
    fn default() -> Self {
        Self {
            organizations: default_organizations(),
            persons: Vec::new(),
            org_keywords: default_org_keywords(),
            person_titles: default_person_titles(),
            abbreviations: default_abbreviations(),
            given_names: default_given_names(),
            stopwords: default_stopwords(),
            acronyms_as_organizations: true,
        }
    }
}

impl EntityModel {
    /// Load a model file.
    ///
    /// Every failure maps to [`Error::ModelUnavailable`]: the pipeline cannot
    /// run without a recognizer.
    pub fn load(path: &Path) -> Result<Self> {
        let unavailable = |reason: String| Error::ModelUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        if !path.exists() {
            return Err(unavailable("file not found".to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| unavailable(format!("cannot read file: {e}")))?;
        let model: Self = serde_json::from_str(&content)
            .map_err(|e| unavailable(format!("malformed model: {e}")))?;

        info!(
            "Loaded entity model from {} ({} orgs, {} persons, {} org keywords, {} given names)",
            path.display(),
            model.organizations.len(),
            model.persons.len(),
            model.org_keywords.len(),
            model.given_names.len()
        );

        Ok(model)
    }

    /// Write the model as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("cannot serialize model: {e}")))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn default_organizations() -> Vec<String> {
    strings(&[
        "JPMorgan",
        "JPMorgan Chase",
        "Citibank",
        "HSBC",
        "Goldman Sachs",
        "Morgan Stanley",
        "Barclays",
        "Deutsche Bank",
        "Bear Stearns",
    ])
}

fn default_org_keywords() -> Vec<String> {
    strings(&[
        "university",
        "college",
        "institute",
        "school",
        "academy",
        "foundation",
        "fund",
        "trust",
        "bank",
        "capital",
        "partners",
        "holdings",
        "group",
        "company",
        "co",
        "corp",
        "corporation",
        "inc",
        "llc",
        "llp",
        "ltd",
        "plc",
        "associates",
        "association",
        "society",
        "council",
        "committee",
        "museum",
        "hospital",
        "center",
        "centre",
        "church",
        "department",
        "agency",
        "bureau",
        "office",
        "services",
        "management",
        "investments",
        "enterprises",
        "international",
    ])
}

fn default_person_titles() -> Vec<String> {
    strings(&[
        "mr", "mrs", "ms", "miss", "dr", "prof", "professor", "sir", "dame", "lord", "lady",
        "sen", "senator", "rep", "gov", "governor", "judge", "justice", "rev", "prince",
        "princess", "president",
    ])
}

fn default_abbreviations() -> Vec<String> {
    strings(&["inc", "co", "corp", "ltd", "llc", "llp", "plc", "bros", "jr", "sr"])
}

fn default_given_names() -> Vec<String> {
    strings(&[
        "adam", "alan", "alexander", "andrew", "ann", "anna", "bill", "bob", "charles", "chris",
        "daniel", "david", "donald", "edward", "elizabeth", "emily", "eric", "george",
        "ghislaine", "glenn", "henry", "jack", "james", "jane", "jean", "jeffrey", "jeff",
        "jennifer", "john", "jonathan", "joseph", "kevin", "larry", "leon", "les",
        "lawrence", "mark", "martin", "mary", "michael", "nadia", "nicole", "patrick", "paul",
        "peter", "richard", "robert", "sarah", "stephen", "steven", "susan", "thomas", "virginia",
        "william",
    ])
}

fn default_stopwords() -> Vec<String> {
    strings(&[
        "the", "a", "an", "this", "that", "these", "those", "i", "we", "he", "she", "they", "it",
        "re", "fw", "fwd", "cc", "bcc", "subject", "from", "to", "sent", "date", "dear", "hi",
        "hello", "thanks", "thank", "please", "regards", "ok", "ps", "am", "pm", "usd", "wire",
        "transfer", "grant", "donation", "payment", "fee", "retainer", "monday", "tuesday",
        "wednesday", "thursday", "friday", "saturday", "sunday", "january", "february", "march",
        "april", "may", "june", "july", "august", "september", "october", "november",
        "december",
    ])
}
