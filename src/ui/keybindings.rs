//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for the terminal UI's shortcuts. The key handler
//! in `App` and the help dialog both read from it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    NextStep,
    PreviousStep,
    /// Jump to the step at this 1-based position
    GoToStep(usize),
    SelectNext,
    SelectPrevious,
    ToggleExpand,
    ToggleEdit,
    SaveEdit,
    CancelEdit,
}

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g., vim-style or arrow key)
    pub alt_key: Option<KeyCode>,
    /// Required modifiers for the primary key
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub category: ShortcutCategory,
    pub context: ShortcutContext,
    pub action: Action,
}

/// Categories for organizing shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Navigation,
    Proposal,
}

/// Contexts where shortcuts are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Browsing wizard steps
    Wizard,
    /// Editing a proposal section
    Editor,
}

impl ShortcutCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Proposal => "Proposal",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::General,
            ShortcutCategory::Navigation,
            ShortcutCategory::Proposal,
        ]
    }
}

impl ShortcutContext {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutContext::Wizard => "Wizard",
            ShortcutContext::Editor => "Section Editor",
        }
    }

    pub fn all() -> &'static [ShortcutContext] {
        &[ShortcutContext::Wizard, ShortcutContext::Editor]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "q", "Ctrl+s", "l/→")
    pub fn key_display(&self) -> String {
        let mut primary = format_keycode(&self.key);
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            primary = format!("Ctrl+{primary}");
        }
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }

    /// Format key for help dialog (left-padded to 9 chars)
    pub fn key_display_padded(&self) -> String {
        format!("{:<9}", self.key_display())
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let primary = key.code == self.key
            && (self.modifiers.is_empty() || key.modifiers.contains(self.modifiers));
        primary || self.alt_key == Some(key.code)
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{key:?}"),
    }
}

const fn shortcut(
    key: KeyCode,
    alt_key: Option<KeyCode>,
    description: &'static str,
    category: ShortcutCategory,
    context: ShortcutContext,
    action: Action,
) -> Shortcut {
    Shortcut {
        key,
        alt_key,
        modifiers: KeyModifiers::NONE,
        description,
        category,
        context,
        action,
    }
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    // === Wizard ===
    shortcut(
        KeyCode::Char('q'),
        None,
        "Quit",
        ShortcutCategory::General,
        ShortcutContext::Wizard,
        Action::Quit,
    ),
    shortcut(
        KeyCode::Char('?'),
        None,
        "Toggle help",
        ShortcutCategory::General,
        ShortcutContext::Wizard,
        Action::ToggleHelp,
    ),
    shortcut(
        KeyCode::Char('l'),
        Some(KeyCode::Right),
        "Next step",
        ShortcutCategory::Navigation,
        ShortcutContext::Wizard,
        Action::NextStep,
    ),
    shortcut(
        KeyCode::Char('h'),
        Some(KeyCode::Left),
        "Previous step",
        ShortcutCategory::Navigation,
        ShortcutContext::Wizard,
        Action::PreviousStep,
    ),
    shortcut(
        KeyCode::Char('j'),
        Some(KeyCode::Down),
        "Select next section",
        ShortcutCategory::Proposal,
        ShortcutContext::Wizard,
        Action::SelectNext,
    ),
    shortcut(
        KeyCode::Char('k'),
        Some(KeyCode::Up),
        "Select previous section",
        ShortcutCategory::Proposal,
        ShortcutContext::Wizard,
        Action::SelectPrevious,
    ),
    shortcut(
        KeyCode::Enter,
        Some(KeyCode::Char(' ')),
        "Expand / collapse section",
        ShortcutCategory::Proposal,
        ShortcutContext::Wizard,
        Action::ToggleExpand,
    ),
    shortcut(
        KeyCode::Char('e'),
        None,
        "Edit section",
        ShortcutCategory::Proposal,
        ShortcutContext::Wizard,
        Action::ToggleEdit,
    ),
    // === Editor ===
    Shortcut {
        key: KeyCode::Char('s'),
        alt_key: None,
        modifiers: KeyModifiers::CONTROL,
        description: "Save section",
        category: ShortcutCategory::Proposal,
        context: ShortcutContext::Editor,
        action: Action::SaveEdit,
    },
    shortcut(
        KeyCode::Esc,
        None,
        "Discard edit",
        ShortcutCategory::Proposal,
        ShortcutContext::Editor,
        Action::CancelEdit,
    ),
];

/// Resolve a key press to an action in the given context.
///
/// Number keys 1-9 jump straight to a wizard step.
pub fn action_for(key: &KeyEvent, context: ShortcutContext) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if let Some(shortcut) = shortcuts_for_context(context).find(|s| s.matches(key)) {
        return Some(shortcut.action);
    }

    match (context, key.code) {
        (ShortcutContext::Wizard, KeyCode::Char(c)) if c.is_ascii_digit() && c != '0' => {
            c.to_digit(10).map(|d| Action::GoToStep(d as usize))
        }
        _ => None,
    }
}

/// Get all shortcuts for a given context
pub fn shortcuts_for_context(context: ShortcutContext) -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(move |s| s.context == context)
}

/// Get shortcuts grouped by category for a given context
pub fn shortcuts_by_category_for_context(
    context: ShortcutContext,
) -> Vec<(ShortcutCategory, Vec<&'static Shortcut>)> {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = SHORTCUTS
            .iter()
            .filter(|s| s.context == context && s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}
