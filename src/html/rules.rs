//! Declarative rewrite rules.
//!
//! A rule is a pattern, a replacement and a scope. Documents are rewritten by
//! applying an ordered list of rules with [`apply_rules`]; each rule sees the
//! output of the previous one.

use regex::{NoExpand, Regex};

/// How many matches a rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the first match
    First,
    /// Every match
    All,
}

/// What a match is replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Inserted verbatim (`$` has no special meaning)
    Literal(String),
    /// Expanded with capture groups (`${1}`)
    Template(String),
}

/// One named `(pattern, replacement, scope)` rewrite.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: Replacement,
    scope: Scope,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: &Regex, replacement: Replacement, scope: Scope) -> Self {
        Self {
            name,
            pattern: pattern.clone(),
            replacement,
            scope,
        }
    }

    /// Replace the first match with literal text.
    pub fn first(name: &'static str, pattern: &Regex, literal: impl Into<String>) -> Self {
        Self::new(name, pattern, Replacement::Literal(literal.into()), Scope::First)
    }

    /// Replace every match using a capture-group template.
    pub fn all(name: &'static str, pattern: &Regex, template: impl Into<String>) -> Self {
        Self::new(name, pattern, Replacement::Template(template.into()), Scope::All)
    }

    /// Apply this rule. Returns `None` when the pattern does not match.
    pub fn apply(&self, html: &str) -> Option<String> {
        if !self.pattern.is_match(html) {
            return None;
        }

        let limit = match self.scope {
            Scope::First => 1,
            Scope::All => 0,
        };

        let rewritten = match &self.replacement {
            Replacement::Literal(text) => self.pattern.replacen(html, limit, NoExpand(text)),
            Replacement::Template(template) => {
                self.pattern.replacen(html, limit, template.as_str())
            }
        };
        Some(rewritten.into_owned())
    }
}

/// Result of applying a rule list to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub html: String,
    /// Names of rules that matched, in application order
    pub applied: Vec<&'static str>,
    /// Names of rules whose pattern was absent
    pub skipped: Vec<&'static str>,
}

/// Apply every rule in order to `html`. Rules that don't match are skipped.
pub fn apply_rules(html: &str, rules: &[RewriteRule]) -> RewriteOutcome {
    let mut current = html.to_string();
    let mut applied = Vec::new();
    let mut skipped = Vec::new();

    for rule in rules {
        match rule.apply(&current) {
            Some(rewritten) => {
                current = rewritten;
                applied.push(rule.name);
            }
            None => skipped.push(rule.name),
        }
    }

    RewriteOutcome {
        html: current,
        applied,
        skipped,
    }
}
