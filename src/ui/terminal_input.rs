//! Translation of crossterm events into game input.

use crate::managers::{Key, RawInput};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// What the driver should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    Game(RawInput),
    Quit,
    Resize(u16, u16),
    None,
}

fn key_of(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Up => Key::Up,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

fn translate_key(key: &KeyEvent) -> TerminalCommand {
    let is_quit = matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));

    match key.kind {
        KeyEventKind::Press if is_quit => TerminalCommand::Quit,
        KeyEventKind::Press => TerminalCommand::Game(RawInput::KeyDown(key_of(key.code))),
        KeyEventKind::Release => TerminalCommand::Game(RawInput::KeyUp(key_of(key.code))),
        // Auto-repeat must not re-trigger a flap
        KeyEventKind::Repeat => TerminalCommand::None,
    }
}

/// Map one crossterm event to a driver command.
pub fn translate(event: &Event) -> TerminalCommand {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => TerminalCommand::Game(RawInput::PointerDown),
            _ => TerminalCommand::None,
        },
        Event::Resize(cols, rows) => TerminalCommand::Resize(*cols, *rows),
        _ => TerminalCommand::None,
    }
}
