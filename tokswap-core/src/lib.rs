//! # tokswap
//!
//! Ordered literal token rewriting for a single text document.
//!
//! A [`Ruleset`] is an ordered list of `pattern => replacement` rules. The
//! document is read into one buffer, each rule replaces every occurrence of
//! its pattern in turn, and the result is written back once:
//!
//! ```text
//! read(source) → rule 1 → rule 2 → … → rule n → write(destination)
//! ```
//!
//! - Rules and rulesets ([`rule`])
//! - File rewriting with atomic persistence ([`rewriter`])
//! - JSON configuration ([`config`])
//! - Built-in rulesets ([`preset`])
//! - Overlap detection between rules ([`lint`])
//! - Error taxonomy ([`error`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokswap_core::{Ruleset, rewrite};
//!
//! let ruleset = Ruleset::from_pairs([
//!     ("text-blue-900", "text-slate-900"),
//!     ("bg-blue-900/70", "bg-slate-900/80"),
//!     ("bg-blue-900", "bg-slate-900"),
//! ])?;
//! let result = rewrite("src/App.tsx", &ruleset)?;
//! println!("{} replacements", result.total_replacements());
//! # Ok::<(), tokswap_core::RewriteError>(())
//! ```

pub mod config;
pub mod error;
pub mod lint;
pub mod preset;
pub mod rewriter;
pub mod rule;

// Re-exports
pub use config::RewriteConfig;
pub use error::*;
pub use lint::{Finding, FindingKind, lint};
pub use rewriter::{RewriteResult, preview, rewrite, rewrite_to, run};
pub use rule::{Rule, RuleOutcome, Ruleset};
