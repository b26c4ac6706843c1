//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also works
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Add row shortcut display
#[cfg(target_os = "macos")]
pub const ADD_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const ADD_SHORTCUT: &str = "^N";

/// Remove row shortcut display
#[cfg(target_os = "macos")]
pub const REMOVE_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_SHORTCUT: &str = "^D";

/// Whether `modifiers` hold the shortcut modifier (Ctrl is accepted everywhere)
pub fn is_action_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(ACTION_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
