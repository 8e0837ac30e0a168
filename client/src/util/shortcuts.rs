//! Global keyboard shortcuts.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Ctrl+D or Cmd+D toggles the theme. The key is matched case-insensitively
/// so Shift or Caps Lock do not defeat it.
#[must_use]
pub fn is_theme_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("d")
}
