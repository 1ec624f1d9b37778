use super::ShortcutSpec;
use shortkey_engine::engine::KeyCombo;

/// Built-in sample shortcuts: (group, name, keys, description).
const DEFAULT_SHORTCUTS: &[(Option<&str>, &str, &str, &str)] = &[
    (None, "Select All", "Ctrl+A", "This shortcut selects all text."),
    (None, "Bold", "Ctrl+B", "This shortcut makes the text bold."),
    (Some("Group 1"), "Copy", "Ctrl+C", "This shortcut copies the selected text."),
    (Some("Group 1"), "Bookmark", "Ctrl+D", "This shortcut adds a bookmark."),
    (Some("Group 2"), "Center Align", "Ctrl+E", "This shortcut centers the text."),
    (Some("Group 2"), "Find", "Ctrl+F", "This shortcut opens the find dialog."),
    (Some("Group 3"), "Find Next", "Ctrl+G", "This shortcut finds the next occurrence."),
    (Some("Group 3"), "Replace", "Ctrl+H", "This shortcut opens the replace dialog."),
    (Some("Group 4"), "Italic", "Ctrl+I", "This shortcut italicizes the text."),
    (Some("Group 4"), "Justify", "Ctrl+J", "This shortcut justifies the text."),
    (Some("Group 5"), "Delete Line", "Ctrl+K", "This shortcut deletes the current line."),
    (Some("Group 5"), "Duplicate Line", "Ctrl+L", "This shortcut duplicates the current line."),
];

pub(super) fn default_specs() -> Vec<ShortcutSpec> {
    DEFAULT_SHORTCUTS
        .iter()
        .filter_map(|(group, name, keys, description)| {
            let combo = keys.parse::<KeyCombo>().ok()?;
            Some(ShortcutSpec {
                name: name.to_string(),
                combo,
                description: Some(description.to_string()),
                context: None,
                prevent_default: true,
                group: group.map(str::to_string),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_parses() {
        assert_eq!(default_specs().len(), DEFAULT_SHORTCUTS.len());
    }
}
