use crate::board::TargetItem;

/// Review-size bucket for a board item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    Xs,
    S,
    M,
    L,
}

impl SizeCategory {
    /// Label of the matching single-select option on the board.
    pub fn option_label(&self) -> &'static str {
        match self {
            SizeCategory::Xs => "XS",
            SizeCategory::S => "S",
            SizeCategory::M => "M",
            SizeCategory::L => "L",
        }
    }

    /// Classify by changed-file count and total changed lines (additions
    /// plus deletions). Buckets are evaluated in order; first match wins, so
    /// anything with 10 or more files is L regardless of line count.
    pub fn classify(num_files: usize, num_changes: u64) -> Self {
        if num_files < 5 && num_changes < 10 {
            SizeCategory::Xs
        } else if num_files < 10 && num_changes < 50 {
            SizeCategory::S
        } else if num_files < 10 && num_changes < 250 {
            SizeCategory::M
        } else {
            SizeCategory::L
        }
    }

    /// Size for a board item. Issues carry no file data and default to S.
    pub fn for_item(item: &TargetItem) -> Self {
        match item {
            TargetItem::PullRequest(pr) => {
                let files = pr.changed_files();
                let num_changes = files
                    .iter()
                    .map(|file| file.additions + file.deletions)
                    .sum();
                Self::classify(files.len(), num_changes)
            }
            TargetItem::Issue(_) => SizeCategory::S,
        }
    }
}
