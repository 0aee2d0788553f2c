//! npm package names.
//!
//! A name is valid when it matches
//! `^(?:@[a-z0-9-*~][a-z0-9-*._~]*/)?[a-z0-9-~][a-z0-9-._~]*$` and is at most
//! [`MAX_LEN`] characters long.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Registry limit on package name length.
pub const MAX_LEN: usize = 214;

/// A package name that passed [`PackageName::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Validate `name` and wrap it.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        match rejection_reason(&name) {
            None => Ok(Self(name)),
            Some(reason) => Err(DomainError::InvalidPackageName {
                name,
                reason: reason.into(),
            }),
        }
    }

    pub fn is_valid(name: &str) -> bool {
        rejection_reason(name).is_none()
    }

    /// Best-effort rewrite of `name` into a valid package name.
    ///
    /// Lowercases, turns whitespace runs into `-`, drops one leading `.` or
    /// `_`, and replaces every run of other illegal characters with `-`.
    /// Scopes are not preserved. Idempotent.
    pub fn sanitize(name: &str) -> String {
        let lowered = name.trim().to_lowercase();
        let stripped = lowered
            .strip_prefix(['.', '_'])
            .unwrap_or(lowered.as_str());

        let mut out = String::with_capacity(stripped.len());
        let mut in_space_run = false;
        let mut in_illegal_run = false;
        for c in stripped.chars() {
            if c.is_whitespace() {
                if !in_space_run {
                    out.push('-');
                }
                in_space_run = true;
                in_illegal_run = false;
            } else if is_body_start_char(c) {
                out.push(c);
                in_space_run = false;
                in_illegal_run = false;
            } else {
                if !in_illegal_run {
                    out.push('-');
                }
                in_illegal_run = true;
                in_space_run = false;
            }
        }

        if out.is_empty() {
            out.push('a');
        }
        out.chars().take(MAX_LEN).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PackageName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

// ── character classes ────────────────────────────────────────────────────────

fn is_body_start_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '~'
}

fn is_body_char(c: char) -> bool {
    is_body_start_char(c) || c == '.' || c == '_'
}

fn is_scope_start_char(c: char) -> bool {
    is_body_start_char(c) || c == '*'
}

fn is_scope_char(c: char) -> bool {
    is_body_char(c) || c == '*'
}

fn check_segment(
    segment: &str,
    start: fn(char) -> bool,
    rest: fn(char) -> bool,
) -> Option<&'static str> {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return Some("name segment is empty");
    };
    if first == '.' || first == '_' {
        return Some("cannot start with '.' or '_'");
    }
    if !start(first) || !chars.all(rest) {
        if segment.chars().any(|c| c.is_ascii_uppercase()) {
            return Some("cannot contain uppercase letters");
        }
        if segment.chars().any(char::is_whitespace) {
            return Some("cannot contain whitespace");
        }
        return Some("contains characters that are not URL-safe");
    }
    None
}

fn rejection_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.chars().count() > MAX_LEN {
        return Some("name is longer than 214 characters");
    }

    match name.strip_prefix('@') {
        Some(scoped) => {
            let Some((scope, body)) = scoped.split_once('/') else {
                return Some("scoped names must look like @scope/name");
            };
            check_segment(scope, is_scope_start_char, is_scope_char)
                .or_else(|| check_segment(body, is_body_start_char, is_body_char))
        }
        None => check_segment(name, is_body_start_char, is_body_char),
    }
}
