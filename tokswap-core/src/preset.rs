//! Built-in rulesets.
//!
//! `emerald` moves a Tailwind page from the blue palette to slate and
//! emerald. Its order is kept exactly as authored, including the rules that
//! an earlier, broader rule shadows; run [`crate::lint`] to see them.

use crate::{
    error::{InternalResult, RewriteError},
    rule::Ruleset,
};

pub const DEFAULT_PRESET: &str = "emerald";

pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub rules: &'static [(&'static str, &'static str)],
}

const EMERALD_RULES: &[(&str, &str)] = &[
    ("text-blue-900", "text-slate-900"),
    ("bg-blue-900/70", "bg-slate-900/80"),
    ("bg-blue-900", "bg-slate-900"),
    ("selection:bg-blue-900", "selection:bg-emerald-500"),
    ("text-blue-500", "text-emerald-500"),
    ("text-blue-600", "text-emerald-600"),
    ("bg-blue-600", "bg-emerald-600"),
    ("hover:bg-blue-700", "hover:bg-emerald-700"),
    ("hover:text-blue-500", "hover:text-emerald-500"),
    ("hover:text-blue-800", "hover:text-emerald-800"),
    ("bg-blue-50", "bg-emerald-50"),
    ("text-blue-400", "text-emerald-400"),
    ("text-blue-300", "text-emerald-300"),
    ("bg-blue-100", "bg-emerald-100"),
    ("ring-blue-600", "ring-emerald-600"),
    ("hover:bg-blue-600", "hover:bg-emerald-600"),
];

pub const PRESETS: &[Preset] = &[Preset {
    name: "emerald",
    description: "Blue palette to slate headings and emerald accents",
    rules: EMERALD_RULES,
}];

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

pub fn ruleset(name: &str) -> InternalResult<Ruleset> {
    let preset = find(name).ok_or_else(|| {
        let known: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
        RewriteError::config(format!(
            "unknown preset '{}' (available: {})",
            name,
            known.join(", ")
        ))
    })?;
    Ruleset::from_pairs(preset.rules.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emerald_preserves_authored_order() {
        let ruleset = ruleset("emerald").unwrap();
        assert_eq!(ruleset.len(), 16);
        assert_eq!(ruleset.rules()[0].pattern, "text-blue-900");
        assert_eq!(ruleset.rules()[1].pattern, "bg-blue-900/70");
        assert_eq!(ruleset.rules()[2].pattern, "bg-blue-900");
        assert_eq!(ruleset.rules()[15].pattern, "hover:bg-blue-600");
    }

    #[test]
    fn test_emerald_on_landing_page_markup() {
        let ruleset = ruleset(DEFAULT_PRESET).unwrap();
        let source = r#"<nav className="bg-blue-900/70 text-blue-50">
  <a className="text-blue-600 hover:text-blue-800">Services</a>
  <button className="bg-blue-600 hover:bg-blue-700 ring-blue-600">Contact</button>
</nav>"#;
        let (output, _) = ruleset.apply(source);
        assert_eq!(
            output,
            r#"<nav className="bg-slate-900/80 text-blue-50">
  <a className="text-emerald-600 hover:text-emerald-800">Services</a>
  <button className="bg-emerald-600 hover:bg-emerald-700 ring-emerald-600">Contact</button>
</nav>"#
        );
    }

    #[test]
    fn test_selection_rule_is_shadowed_by_base_rule() {
        // bg-blue-900 runs first, so the selection variant ends up slate.
        let ruleset = ruleset("emerald").unwrap();
        let (output, outcomes) = ruleset.apply("selection:bg-blue-900");
        assert_eq!(output, "selection:bg-slate-900");
        assert_eq!(outcomes[3].replacements, 0);
    }

    #[test]
    fn test_unknown_preset() {
        match ruleset("magenta") {
            Err(RewriteError::Config(msg)) => assert!(msg.contains("emerald")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
