//! Rules and rulesets.
//!
//! A [`Rule`] is a literal pattern paired with its replacement. A [`Ruleset`]
//! is an ordered, validated sequence of rules applied one after another to a
//! single text buffer: each rule sees the output of the rules before it.
//!
//! ```text
//! "A"  --[A => B]-->  "B"  --[B => C]-->  "C"
//! ```
//!
//! Matching is literal and case-sensitive. Every non-overlapping occurrence is
//! replaced, scanning left to right.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{InternalResult, RewriteError};

/// Separator used by the inline `PATTERN=>REPLACEMENT` form.
pub const RULE_SEPARATOR: &str = "=>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Replace every occurrence of the pattern in `input`.
    ///
    /// Returns the new buffer and the number of replacements made. An empty
    /// pattern never reaches this point; [`Ruleset::new`] rejects it.
    pub fn apply(&self, input: &str) -> (String, usize) {
        let mut output = String::with_capacity(input.len());
        let mut last = 0;
        let mut count = 0;
        for (start, matched) in input.match_indices(self.pattern.as_str()) {
            output.push_str(&input[last..start]);
            output.push_str(&self.replacement);
            last = start + matched.len();
            count += 1;
        }
        if count == 0 {
            return (input.to_string(), 0);
        }
        output.push_str(&input[last..]);
        (output, count)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pattern, RULE_SEPARATOR, self.replacement)
    }
}

impl FromStr for Rule {
    type Err = RewriteError;

    /// Parse `PATTERN=>REPLACEMENT`, splitting at the first separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pattern, replacement) = s.split_once(RULE_SEPARATOR).ok_or_else(|| {
            RewriteError::config(format!(
                "rule '{}' is missing the '{}' separator",
                s, RULE_SEPARATOR
            ))
        })?;
        Ok(Rule::new(pattern, replacement))
    }
}

/// Replacement count for one rule after a ruleset ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub replacements: usize,
}

/// An ordered, non-empty sequence of rules with non-empty patterns.
///
/// The ruleset cannot be modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    pub fn new(rules: Vec<Rule>) -> InternalResult<Self> {
        if rules.is_empty() {
            return Err(RewriteError::invalid_ruleset("ruleset has no rules"));
        }
        if let Some(index) = rules.iter().position(|rule| rule.pattern.is_empty()) {
            return Err(RewriteError::invalid_ruleset(format!(
                "rule {} has an empty pattern",
                index + 1
            )));
        }
        Ok(Self { rules })
    }

    /// Build a ruleset from `(pattern, replacement)` pairs.
    pub fn from_pairs<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> InternalResult<Self>
    where
        P: Into<String>,
        R: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(pattern, replacement)| Rule::new(pattern, replacement))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order over `document`.
    pub fn apply(&self, document: &str) -> (String, Vec<RuleOutcome>) {
        let mut buffer = document.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let (next, replacements) = rule.apply(&buffer);
            buffer = next;
            outcomes.push(RuleOutcome {
                rule: rule.clone(),
                replacements,
            });
        }
        (buffer, outcomes)
    }
}

impl<'a> IntoIterator for &'a Ruleset {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
