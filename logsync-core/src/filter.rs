//! Candidate selection: which scanned files get shipped, and under which rules.
//!
//! A file is a candidate when its relative path contains today's date
//! (`YYYY-MM-DD`, literal substring) and, for some rule, starts with the
//! rule's prefix and ends with `.csv`. Each matching rule produces its own
//! candidate, so a file matching two rules is shipped under two keys.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

use crate::config::LogTypeRule;

pub const LOG_SUFFIX: &str = ".csv";

/// A file eligible for upload under one matched rule. Lives for one run only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path relative to the log directory, `/`-separated.
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub rule_name: String,
    pub rule: LogTypeRule,
}

/// Renders a relative path with `/` separators regardless of platform.
///
/// Returns `None` for paths that are not valid UTF-8: a lossy conversion
/// would map distinct files onto the same key.
pub fn relative_path_string(path: &Path) -> Option<String> {
    let mut segments = Vec::new();
    for component in path.components() {
        if let Component::Normal(segment) = component {
            segments.push(segment.to_str()?);
        }
    }
    Some(segments.join("/"))
}

pub fn matches_rule(relative_path: &str, rule: &LogTypeRule) -> bool {
    relative_path.starts_with(&rule.log_prefix) && relative_path.ends_with(LOG_SUFFIX)
}

pub fn select_candidates(
    root: &Path,
    paths: &[PathBuf],
    today: &str,
    rules: &BTreeMap<String, LogTypeRule>,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for path in paths {
        let Some(relative_path) = relative_path_string(path) else {
            warn!(path = ?path, "Skipping file with non UTF-8 name");
            continue;
        };
        if !relative_path.contains(today) {
            continue;
        }

        for (rule_name, rule) in rules {
            if !matches_rule(&relative_path, rule) {
                continue;
            }
            debug!(path = %relative_path, rule = %rule_name, "File matched log type");
            candidates.push(Candidate {
                relative_path: relative_path.clone(),
                absolute_path: root.join(path),
                rule_name: rule_name.clone(),
                rule: rule.clone(),
            });
        }
    }

    candidates
}
