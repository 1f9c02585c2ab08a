//! Which request paths need authentication.
//!
//! Paths are compared in their trailing-slash form, so `/x` and `/x/` are the
//! same route. A rule ending in `*` is a plain prefix test against that form,
//! not a glob.

/// One exclusion rule, parsed from its configuration string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Exact path, stored normalized (always ends with `/`).
    Exact(String),
    /// `*`-suffixed pattern with the `*` stripped, compared as a raw prefix.
    Prefix(String),
}

impl ExclusionRule {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix('*') {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(normalize(pattern).into_owned()),
        }
    }

    /// `path` must already be normalized.
    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(rule) => rule == path,
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

/// The full set of paths that skip authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedPaths {
    rules: Vec<ExclusionRule>,
}

impl ExcludedPaths {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: patterns
                .into_iter()
                .map(|p| ExclusionRule::parse(p.as_ref()))
                .collect(),
        }
    }

    pub fn rules(&self) -> &[ExclusionRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// `true` when `path` must be authenticated.
///
/// An absent or empty path always requires auth, and so does an empty rule set.
pub fn require_auth(path: Option<&str>, excluded: &ExcludedPaths) -> bool {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return true;
    };
    if excluded.is_empty() {
        return true;
    }

    let path = normalize(path);
    !excluded.rules().iter().any(|rule| rule.matches(&path))
}

fn normalize(path: &str) -> std::borrow::Cow<'_, str> {
    if path.ends_with('/') {
        path.into()
    } else {
        format!("{path}/").into()
    }
}
