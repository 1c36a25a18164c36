// Seqkeys Input Layer - Terminal Adapter
// Converts crossterm key events into raw key events

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use super::event::RawKeyEvent;
use crate::action::Action;
use crate::key::symbol_code;

/// Convert a crossterm key event. Returns None for keys with no physical
/// code equivalent (media keys, lock keys, ISO level shifts).
///
/// Terminals report characters, not keys, so shifted symbols map back to
/// their unshifted key with the shift flag set: `'!'` becomes `Digit1`
/// with shift.
pub fn raw_event_from_crossterm(event: &KeyEvent) -> Option<RawKeyEvent> {
    let (code, implied_shift) = code_from_crossterm(event.code)?;
    let action = match event.kind {
        KeyEventKind::Press => Action::Press,
        KeyEventKind::Repeat => Action::Repeat,
        KeyEventKind::Release => Action::Release,
    };
    let mods = event.modifiers;

    Some(
        RawKeyEvent::new(action, code)
            .with_meta(mods.intersects(KeyModifiers::SUPER | KeyModifiers::META))
            .with_ctrl(mods.contains(KeyModifiers::CONTROL))
            .with_alt(mods.contains(KeyModifiers::ALT))
            .with_shift(implied_shift || mods.contains(KeyModifiers::SHIFT)),
    )
}

/// Physical code for a crossterm key, plus whether the key implies shift
pub fn code_from_crossterm(code: KeyCode) -> Option<(String, bool)> {
    let named = |name: &str| Some((name.to_string(), false));
    match code {
        KeyCode::Char(c) => char_code(c),
        KeyCode::Enter => named("Enter"),
        KeyCode::Esc => named("Escape"),
        KeyCode::Tab => named("Tab"),
        KeyCode::BackTab => Some(("Tab".to_string(), true)),
        KeyCode::Backspace => named("Backspace"),
        KeyCode::Delete => named("Delete"),
        KeyCode::Insert => named("Insert"),
        KeyCode::Home => named("Home"),
        KeyCode::End => named("End"),
        KeyCode::PageUp => named("PageUp"),
        KeyCode::PageDown => named("PageDown"),
        KeyCode::Up => named("ArrowUp"),
        KeyCode::Down => named("ArrowDown"),
        KeyCode::Left => named("ArrowLeft"),
        KeyCode::Right => named("ArrowRight"),
        KeyCode::F(n) => Some((format!("F{}", n), false)),
        KeyCode::Modifier(m) => modifier_code(m).map(|name| (name.to_string(), false)),
        _ => None,
    }
}

fn modifier_code(code: ModifierKeyCode) -> Option<&'static str> {
    use ModifierKeyCode::*;
    match code {
        LeftShift => Some("ShiftLeft"),
        RightShift => Some("ShiftRight"),
        LeftControl => Some("ControlLeft"),
        RightControl => Some("ControlRight"),
        LeftAlt => Some("AltLeft"),
        RightAlt => Some("AltRight"),
        LeftSuper | LeftMeta | LeftHyper => Some("MetaLeft"),
        RightSuper | RightMeta | RightHyper => Some("MetaRight"),
        IsoLevel3Shift | IsoLevel5Shift => None,
    }
}

fn char_code(c: char) -> Option<(String, bool)> {
    if c.is_ascii_alphabetic() {
        return Some((format!("Key{}", c.to_ascii_uppercase()), c.is_ascii_uppercase()));
    }
    if c.is_ascii_digit() {
        return Some((format!("Digit{}", c), false));
    }

    symbol_code(c).map(|(code, shifted)| (code.to_string(), shifted))
}
