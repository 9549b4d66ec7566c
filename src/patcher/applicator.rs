use regex::{Captures, Regex};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRetention {
    #[default]
    None,
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    First,
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchResult {
    Modified(String),
    NoMatch,
}

impl PatchResult {
    pub fn is_modified(&self) -> bool {
        matches!(self, PatchResult::Modified(_))
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            PatchResult::Modified(text) => Some(text),
            PatchResult::NoMatch => None,
        }
    }

    pub fn unwrap_or(self, source: &str) -> String {
        self.into_option().unwrap_or_else(|| source.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct PatchRule {
    pub pattern: Regex,
    pub replacement: String,
    pub retention: MatchRetention,
    pub occurrence: Occurrence,
}

impl PatchRule {
    pub fn new(pattern: &Regex, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.clone(),
            replacement: replacement.into(),
            retention: MatchRetention::None,
            occurrence: Occurrence::All,
        }
    }

    pub fn compile(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self::new(&Regex::new(pattern)?, replacement))
    }

    pub fn retain(mut self, retention: MatchRetention) -> Self {
        self.retention = retention;
        self
    }

    pub fn first_only(mut self) -> Self {
        self.occurrence = Occurrence::First;
        self
    }

    pub fn occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }

    fn splice(&self, matched: &str) -> String {
        match self.retention {
            MatchRetention::None => self.replacement.clone(),
            MatchRetention::Prefix => format!("{}{}", matched, self.replacement),
            MatchRetention::Suffix => format!("{}{}", self.replacement, matched),
        }
    }
}

/// Replacement is literal, `$` included.
pub fn apply_rule(source: &str, rule: &PatchRule) -> PatchResult {
    if !rule.pattern.is_match(source) {
        return PatchResult::NoMatch;
    }

    let limit = match rule.occurrence {
        Occurrence::First => 1,
        Occurrence::All => 0,
    };
    let patched = rule
        .pattern
        .replacen(source, limit, |caps: &Captures| rule.splice(&caps[0]));
    PatchResult::Modified(patched.into_owned())
}

pub fn replace_in_source(
    source: &str,
    pattern: &Regex,
    replacement: &str,
    retention: MatchRetention,
) -> PatchResult {
    apply_rule(source, &PatchRule::new(pattern, replacement).retain(retention))
}

/// Any rule without a match voids the whole set.
pub fn apply_all(source: &str, rules: &[PatchRule]) -> PatchResult {
    let mut current: Option<String> = None;
    for rule in rules {
        let text = current.as_deref().unwrap_or(source);
        match apply_rule(text, rule) {
            PatchResult::Modified(next) => current = Some(next),
            PatchResult::NoMatch => return PatchResult::NoMatch,
        }
    }
    current.map_or(PatchResult::NoMatch, PatchResult::Modified)
}
