use std::collections::BTreeSet;

/// One changed file and its unified diff against the last commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub file: String,
    pub diff: String,
}

impl ChangeRecord {
    pub fn new(file: impl Into<String>, diff: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            diff: diff.into(),
        }
    }
}

pub const DEFAULT_EXCLUSIONS: [&str; 4] = ["dist", "bun.lock", "target", "Cargo.lock"];

/// Paths that never reach the prompt. Matching is exact, not by prefix or glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    paths: BTreeSet<String>,
}

impl ExclusionList {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_paths_only() {
        let list = ExclusionList::default();
        assert!(list.contains("dist"));
        assert!(list.contains("bun.lock"));
        assert!(!list.contains("dist/index.js"));
        assert!(!list.contains("src/bun.lock"));
    }

    #[test]
    fn extends_defaults() {
        let list = ExclusionList::default().with_extra(["package-lock.json"]);
        assert!(list.contains("package-lock.json"));
        assert!(list.contains("Cargo.lock"));
        assert_eq!(list.iter().count(), 5);
    }
}
