use std::collections::BTreeSet;

use crate::board::TargetItem;
use crate::config::CONTENT_ROOT;

/// Feature areas touched by a pull request: the second path segment of every
/// changed file under the documentation content root, deduplicated and
/// joined with ", ". Paths outside the content root (assets, data files) are
/// ignored. Issues have no file data and yield the empty string.
///
/// The board field is informational, so the ordering only needs to be
/// deterministic; a sorted set provides that.
pub fn feature_string(item: &TargetItem) -> String {
    let TargetItem::PullRequest(pr) = item else {
        return String::new();
    };

    let features: BTreeSet<&str> = pr
        .changed_files()
        .into_iter()
        .filter_map(|file| feature_of(&file.path))
        .collect();

    features.into_iter().collect::<Vec<_>>().join(", ")
}

fn feature_of(path: &str) -> Option<&str> {
    let mut segments = path.split('/');
    if segments.next() != Some(CONTENT_ROOT) {
        return None;
    }
    segments.next()
}
