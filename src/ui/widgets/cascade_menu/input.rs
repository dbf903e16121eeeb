//! Keyboard input handling and interactive loop.
//!
//! The picker draws on stderr so the chosen value can be captured from
//! stdout.

use crossterm::event::KeyEvent;

use crate::ui::theme::Icons;

use super::menu::{CascadeMenu, MenuAction, MenuStatus};

/// Convert a keyboard event to a MenuAction
pub fn key_to_action(key: KeyEvent) -> Option<MenuAction> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Raw mode delivers Ctrl+C as a key instead of SIGINT
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(MenuAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Down),
        KeyCode::Right | KeyCode::Char('l') => Some(MenuAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(MenuAction::Collapse),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Pick),
        KeyCode::Tab => Some(MenuAction::Confirm),
        KeyCode::Char('c') => Some(MenuAction::Clear),
        KeyCode::Char('q') | KeyCode::Esc => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Restores the terminal when the interactive loop exits, including on error.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(std::io::stderr(), crossterm::cursor::Show);
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Run the cascade menu interactively.
///
/// Returns the committed value if the menu closed with a selection, None if
/// the user quit.
pub fn run_interactive(
    menu: &mut CascadeMenu,
    supports_unicode: bool,
) -> std::io::Result<Option<Vec<String>>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stderr, Write};

    let icons = Icons::for_terminal(supports_unicode);
    let _guard = RawModeGuard::enable()?;
    let mut out = stderr();

    let render_ui = |out: &mut std::io::Stderr, menu: &CascadeMenu| -> std::io::Result<()> {
        execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        for line in menu.render(supports_unicode).lines() {
            write!(out, "{}\r\n", line)?;
        }
        write!(out, "{}\r\n", icons.rule.repeat(48))?;
        for line in menu.render_status_bar().lines() {
            write!(out, "{}\r\n", line)?;
        }
        write!(out, "\r\n")?;
        for line in menu.render_help_bar().lines() {
            write!(out, "{}\r\n", line)?;
        }

        out.flush()
    };

    execute!(out, cursor::Hide)?;
    render_ui(&mut out, menu)?;

    let result = loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(action) = key_to_action(key) else {
                continue;
            };
            if action == MenuAction::Clear && !menu.engine().config().clearable {
                continue;
            }

            match menu.handle_action(action) {
                MenuStatus::Open => render_ui(&mut out, menu)?,
                MenuStatus::Done => break Some(menu.engine().display_value().to_vec()),
                MenuStatus::Cancelled => break None,
            }
        }
    };

    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    Ok(result)
}
