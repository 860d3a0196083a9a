use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
            app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('?') => app.handle_input(InputAction::ToggleHelp),
        KeyCode::Char(' ') => app.handle_input(InputAction::Deal),
        KeyCode::Enter => app.handle_input(InputAction::Reveal),
        KeyCode::Char('n') | KeyCode::Char('N') => app.handle_input(InputAction::NewSession),
        KeyCode::Backspace => app.handle_input(InputAction::BetBackspace),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.handle_input(InputAction::BetDigit(c as u8 - b'0'));
        }
        _ => {}
    }
    false
}
