//! Naming rule for demo image paths.
//!
//! A path is accepted when it starts with [`DEMO_PREFIX`] and ends with
//! [`IMAGE_EXTENSION`]. Comparison is exact and case-sensitive; no trimming
//! or separator normalization is applied.

/// Directory every image path must start with.
pub const DEMO_PREFIX: &str = "demo/";

/// Extension every image path must end with.
pub const IMAGE_EXTENSION: &str = "png";

/// Prefix/extension pair a candidate path is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageNameRule {
    prefix: &'static str,
    extension: &'static str,
}

impl Default for ImageNameRule {
    fn default() -> Self {
        Self { prefix: DEMO_PREFIX, extension: IMAGE_EXTENSION }
    }
}

impl ImageNameRule {
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn extension(&self) -> &'static str {
        self.extension
    }

    /// Check a candidate path against the rule.
    #[tracing::instrument(
        level = "trace",
        skip(self, candidate),
        fields(candidate_len = candidate.len() as u64)
    )]
    pub fn matches(&self, candidate: &str) -> bool {
        let head = leading_chars(candidate, self.prefix.chars().count());
        let tail = trailing_chars(candidate, self.extension.chars().count());
        tracing::trace!(head, tail, "inspecting candidate");

        if head != self.prefix {
            return false;
        }
        tail == self.extension
    }
}

/// Check a candidate against the default `demo/` + `png` rule.
pub fn is_valid(candidate: &str) -> bool {
    ImageNameRule::default().matches(candidate)
}

/// First `n` characters of `s`, or all of `s` when it is shorter.
fn leading_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Last `n` characters of `s`, or all of `s` when it is shorter.
fn trailing_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}
