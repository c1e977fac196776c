use similar::{ChangeTag, TextDiff};

/// Line-level changes a sync would make to the stylesheet
#[derive(Debug, Clone, Default)]
pub struct StylesheetDiff {
    pub changes: Vec<LineChange>,
}

/// One added or removed line
#[derive(Debug, Clone, PartialEq)]
pub struct LineChange {
    /// Line number in the old text for removals, in the new text for additions
    pub line: usize,
    pub kind: ChangeKind,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
}

impl StylesheetDiff {
    pub fn between(old_text: &str, new_text: &str) -> Self {
        let diff = TextDiff::from_lines(old_text, new_text);
        let mut changes = Vec::new();

        for change in diff.iter_all_changes() {
            let (kind, line) = match change.tag() {
                ChangeTag::Equal => continue,
                ChangeTag::Insert => (ChangeKind::Added, change.new_index()),
                ChangeTag::Delete => (ChangeKind::Removed, change.old_index()),
            };

            changes.push(LineChange {
                line: line.map(|i| i + 1).unwrap_or(0),
                kind,
                content: change.value().trim_end_matches(['\n', '\r']).to_string(),
            });
        }

        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// e.g. "+5, -3"
    pub fn summary(&self) -> String {
        let added = self
            .changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Added)
            .count();
        format!("+{}, -{}", added, self.changes.len() - added)
    }
}
