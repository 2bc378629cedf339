//! Static checks over a ruleset.
//!
//! Rewriting never consults these findings. Overlapping rules are legal and
//! resolved purely by order; the lint only reports where that order makes a
//! later rule behave differently from how it reads in isolation.

use serde::Serialize;
use std::fmt;

use crate::rule::Ruleset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Both rules have the same pattern; the later one never matches.
    Duplicate,
    /// The earlier pattern is a substring of the later one and rewrites it first.
    Shadowed,
    /// The earlier replacement contains the later pattern and is rewritten again.
    Chained,
}

/// A relationship between two rules, by zero-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub earlier: usize,
    pub later: usize,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub fn lint(ruleset: &Ruleset) -> Vec<Finding> {
    let rules = ruleset.rules();
    let mut findings = Vec::new();

    for (i, earlier) in rules.iter().enumerate() {
        for (j, later) in rules.iter().enumerate().skip(i + 1) {
            let kind = if earlier.pattern == later.pattern {
                Some(FindingKind::Duplicate)
            } else if later.pattern.contains(earlier.pattern.as_str()) {
                Some(FindingKind::Shadowed)
            } else {
                None
            };
            if let Some(kind) = kind {
                let message = match kind {
                    FindingKind::Duplicate => format!(
                        "rule {} repeats the pattern '{}' of rule {} and never matches",
                        j + 1,
                        later.pattern,
                        i + 1
                    ),
                    _ => format!(
                        "rule {} ('{}') is shadowed by rule {} ('{}'), which rewrites part of it first",
                        j + 1,
                        later.pattern,
                        i + 1,
                        earlier.pattern
                    ),
                };
                findings.push(Finding {
                    kind,
                    earlier: i,
                    later: j,
                    message,
                });
            }

            if earlier.replacement.contains(later.pattern.as_str()) {
                findings.push(Finding {
                    kind: FindingKind::Chained,
                    earlier: i,
                    later: j,
                    message: format!(
                        "rule {} ('{}') rewrites text produced by rule {} ('{}')",
                        j + 1,
                        later.pattern,
                        i + 1,
                        earlier.replacement
                    ),
                });
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset;
    use pretty_assertions::assert_eq;

    fn kinds(findings: &[Finding]) -> Vec<(FindingKind, usize, usize)> {
        findings
            .iter()
            .map(|f| (f.kind, f.earlier, f.later))
            .collect()
    }

    #[test]
    fn test_specific_before_general_is_clean() {
        let ruleset = Ruleset::from_pairs([
            ("bg-blue-900/70", "bg-slate-900/80"),
            ("bg-blue-900", "bg-slate-900"),
        ])
        .unwrap();
        assert!(lint(&ruleset).is_empty());
    }

    #[test]
    fn test_general_before_specific_is_shadowed() {
        let ruleset = Ruleset::from_pairs([
            ("bg-blue-900", "bg-slate-900"),
            ("bg-blue-900/70", "bg-slate-900/80"),
        ])
        .unwrap();
        assert_eq!(kinds(&lint(&ruleset)), vec![(FindingKind::Shadowed, 0, 1)]);
    }

    #[test]
    fn test_duplicate_and_chained() {
        let ruleset = Ruleset::from_pairs([("A", "B"), ("B", "C"), ("A", "D")]).unwrap();
        assert_eq!(
            kinds(&lint(&ruleset)),
            vec![(FindingKind::Chained, 0, 1), (FindingKind::Duplicate, 0, 2)]
        );
    }

    #[test]
    fn test_emerald_preset_findings() {
        let ruleset = preset::ruleset("emerald").unwrap();
        let findings = lint(&ruleset);
        assert_eq!(
            kinds(&findings),
            vec![
                (FindingKind::Shadowed, 2, 3),
                (FindingKind::Shadowed, 4, 8),
                (FindingKind::Shadowed, 6, 15),
            ]
        );
        assert!(findings[0].message.contains("selection:bg-blue-900"));
    }
}
