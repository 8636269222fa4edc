//! File selection predicates for snapshot runs.
//!
//! A selector is a closed, two-variant choice: match by file-name suffix, or
//! match by an explicit ordered list of workspace-relative patterns. Pattern
//! resolution (directory expansion, hidden-name skipping) happens in the
//! builder; the selector only carries the configuration.

use std::collections::BTreeSet;

/// How files are chosen for a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelector {
    /// Match a file if its name ends with one of the allowed suffixes
    Extensions { allowed: BTreeSet<String> },
    /// Workspace-relative patterns, evaluated in declaration order.
    /// A pattern naming a directory expands to every non-hidden file
    /// beneath it; a pattern naming a file includes exactly that file.
    Patterns { patterns: Vec<String> },
}

impl FileSelector {
    /// Build an extension selector from any collection of suffix strings.
    pub fn extensions<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Extensions {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a pattern selector preserving declaration order.
    pub fn patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Patterns {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive suffix match against the allowed extensions.
    /// `.yamlx` does not match `.yaml`. Always false for pattern selectors,
    /// which resolve by path rather than by name.
    pub fn matches_file_name(&self, name: &str) -> bool {
        match self {
            FileSelector::Extensions { allowed } => {
                allowed.iter().any(|ext| name.ends_with(ext.as_str()))
            }
            FileSelector::Patterns { .. } => false,
        }
    }
}
