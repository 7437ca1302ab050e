//! Naming-convention variants of the template token and their substitution.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Naming convention a placeholder is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `add_example`
    Snake,
    /// `AddExample`
    Pascal,
    /// `ADD_EXAMPLE`
    Upper,
    /// `ADD_EXAMPLE_H`
    HeaderGuard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub find: String,
    pub replace: String,
}

/// The four token variants together with their replacements.
///
/// Substitution runs in a single left-to-right pass. At every position the
/// longest matching `find` string wins, so `ADD_EXAMPLE_H` is never consumed
/// as `ADD_EXAMPLE` followed by a stray `_H`, and replaced text is never
/// scanned again.
#[derive(Debug)]
pub struct PlaceholderSet {
    placeholders: Vec<Placeholder>,
    pattern: Regex,
}

impl PlaceholderSet {
    pub fn new(token: &str, name: &str, header_guard_suffix: &str) -> Result<Self> {
        let mut placeholders = vec![
            Placeholder {
                kind: PlaceholderKind::Snake,
                find: token.to_string(),
                replace: name.to_string(),
            },
            Placeholder {
                kind: PlaceholderKind::Pascal,
                find: to_pascal_case(token),
                replace: to_pascal_case(name),
            },
            Placeholder {
                kind: PlaceholderKind::Upper,
                find: to_upper_case(token),
                replace: to_upper_case(name),
            },
            Placeholder {
                kind: PlaceholderKind::HeaderGuard,
                find: format!("{}{header_guard_suffix}", to_upper_case(token)),
                replace: format!("{}{header_guard_suffix}", to_upper_case(name)),
            },
        ];

        // Variants sharing a find string (letterless tokens) keep the last
        // declared replacement.
        let mut seen = HashSet::new();
        placeholders.reverse();
        placeholders.retain(|p| !p.find.is_empty() && seen.insert(p.find.clone()));
        placeholders.reverse();
        // Stable sort: ties keep declaration order.
        placeholders.sort_by(|a, b| b.find.len().cmp(&a.find.len()));

        let alternation = placeholders
            .iter()
            .map(|p| regex::escape(&p.find))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation).map_err(|e| Error::Other(e.into()))?;

        Ok(Self { placeholders, pattern })
    }

    /// Placeholders in the order they are tried, longest `find` first.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Replaces every placeholder occurrence in `text`.
    ///
    /// # Returns
    /// * The rewritten text, borrowed when nothing matched
    /// * The number of replacements made
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut replacements = 0;
        let rewritten = self.pattern.replace_all(text, |caps: &Captures| {
            replacements += 1;
            let found = &caps[0];
            self.placeholders
                .iter()
                .find(|p| p.find == found)
                .map_or_else(|| found.to_string(), |p| p.replace.clone())
        });
        (rewritten, replacements)
    }
}

/// Converts `snake_case` (or `kebab-case`) to `PascalCase`.
///
/// Only the first character of every segment is upper-cased, the rest is kept
/// as written: `log1p_v2` becomes `Log1pV2`, `mixedCase` becomes `MixedCase`.
pub fn to_pascal_case(s: &str) -> String {
    s.replace('-', "_")
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts `snake_case` to `UPPER_CASE`.
pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}
