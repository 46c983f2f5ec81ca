//! Key bindings for menu navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// Whether this binding is currently active. Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code.
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for multiple key combinations.
    pub fn with_keys(keys: Vec<KeyCombination>) -> Self {
        Self {
            keys,
            enabled: true,
        }
    }

    /// Whether `event` matches any of this binding's combinations.
    /// Always `false` when the binding is disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Set whether this binding is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// A key with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key with Shift held.
    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

/// The keys a [`DropdownMenu`](crate::dropdown_menu::DropdownMenu) reacts to
/// while it holds focus.
#[derive(Debug, Clone)]
pub struct MenuKeys {
    /// Toggle the menu from its trigger.
    pub activate: Binding,
    /// Follow the focused link.
    pub follow: Binding,
    /// Move to the next tab stop.
    pub next: Binding,
    /// Move to the previous tab stop.
    pub prev: Binding,
}

impl Default for MenuKeys {
    fn default() -> Self {
        Self {
            activate: Binding::with_keys(vec![
                KeyCombination::new(KeyCode::Enter),
                KeyCombination::new(KeyCode::Char(' ')),
            ]),
            follow: Binding::with_keys(vec![KeyCombination::new(KeyCode::Enter)]),
            next: Binding::with_keys(vec![KeyCombination::new(KeyCode::Tab)]),
            // Terminals report Shift+Tab as BackTab, usually with SHIFT set.
            prev: Binding::with_keys(vec![
                KeyCombination::new(KeyCode::BackTab),
                KeyCombination::shift(KeyCode::Tab),
            ]),
        }
    }
}
