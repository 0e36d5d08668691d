// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test identifier normalization.
//!
//! Identifiers arrive as `Class.method` or `Class/method`. Plans always use
//! the slash form, so the first `.` is rewritten to `/` before matching.
//! Identifiers are at most two levels deep (class, class/method); anything
//! after the first separator is left untouched.

use std::fmt;

/// Hierarchy separator used by test plans.
pub const SEPARATOR: char = '/';

/// Alternate separator accepted on input.
const DOT_SEPARATOR: char = '.';

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;

/// A test identifier in canonical slash-separated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestIdentifier {
    normalized: String,
    class_end: usize,
}

impl TestIdentifier {
    /// Normalize a raw identifier. Never fails; empty segments stay empty.
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize(raw);
        let class_end = normalized.find(SEPARATOR).unwrap_or(normalized.len());
        Self {
            normalized,
            class_end,
        }
    }

    /// Canonical form, e.g. `ClassA/testX`.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Top-level class component (the whole identifier if there is no `/`).
    pub fn class_name(&self) -> &str {
        &self.normalized[..self.class_end]
    }

    /// Method component, if the identifier names a single test.
    pub fn method_name(&self) -> Option<&str> {
        if self.class_end < self.normalized.len() {
            Some(&self.normalized[self.class_end + SEPARATOR.len_utf8()..])
        } else {
            None
        }
    }

    /// True when `entry` names this test, its class, or is equal to it.
    ///
    /// Matching rules:
    /// 1. Exact: `ClassA/testX` matches `ClassA/testX`
    /// 2. Prefix: `ClassA` matches `ClassA/testX`
    /// 3. Class: `ClassA` matches when the class component is `ClassA`
    pub fn matches(&self, entry: &str) -> bool {
        if self.normalized == entry {
            return true;
        }
        let covers_method = self
            .normalized
            .strip_prefix(entry)
            .is_some_and(|rest| rest.starts_with(SEPARATOR));
        covers_method || self.class_name() == entry
    }
}

impl fmt::Display for TestIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl From<&str> for TestIdentifier {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Rewrite the first `.` to `/`. Later dots are left as-is.
pub fn normalize(raw: &str) -> String {
    raw.replacen(DOT_SEPARATOR, "/", 1)
}

/// Class component of an already-normalized identifier.
pub fn class_name(normalized: &str) -> &str {
    match normalized.split_once(SEPARATOR) {
        Some((class, _)) => class,
        None => normalized,
    }
}
