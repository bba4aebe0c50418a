//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts. The help dialog is
//! built from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside forms
    Global,
    /// Active in the friend list
    FriendList,
    /// Active in the add and split forms
    Form,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::FriendList => "Friend List",
            Self::Form => "Forms",
            Self::Dialog => "Dialogs",
        }
    }
}

const fn bind(key: KeyCode, description: &'static str, context: KeyContext) -> Keybinding {
    Keybinding {
        key,
        modifiers: KeyModifiers::NONE,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('q'), "Quit", KeyContext::Global),
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    bind(KeyCode::Char('?'), "Help", KeyContext::Global),
    bind(KeyCode::Tab, "Focus open panel", KeyContext::Global),
    // Friend list
    bind(KeyCode::Char('j'), "Move down", KeyContext::FriendList),
    bind(KeyCode::Char('k'), "Move up", KeyContext::FriendList),
    bind(KeyCode::Char('g'), "Go to top", KeyContext::FriendList),
    bind(KeyCode::Char('G'), "Go to bottom", KeyContext::FriendList),
    bind(KeyCode::Enter, "Select / close friend", KeyContext::FriendList),
    bind(KeyCode::Char('e'), "Edit last split", KeyContext::FriendList),
    bind(KeyCode::Char('a'), "Add new / close", KeyContext::FriendList),
    bind(KeyCode::Char('d'), "Delete friend", KeyContext::FriendList),
    // Forms
    bind(KeyCode::Tab, "Next field", KeyContext::Form),
    bind(KeyCode::BackTab, "Previous field", KeyContext::Form),
    bind(KeyCode::Enter, "Submit", KeyContext::Form),
    bind(KeyCode::Left, "Change payer", KeyContext::Form),
    bind(KeyCode::Esc, "Back to list", KeyContext::Form),
    // Dialog
    bind(KeyCode::Char('y'), "Confirm", KeyContext::Dialog),
    bind(KeyCode::Char('n'), "Cancel", KeyContext::Dialog),
    bind(KeyCode::Esc, "Close dialog", KeyContext::Dialog),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←/→".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}
