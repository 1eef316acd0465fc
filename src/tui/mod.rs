pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick for flash expiry

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_field(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_field(),

            // Adjust selected field
            KeyCode::Char('h') | KeyCode::Left => app.adjust(-1),
            KeyCode::Char('l') | KeyCode::Right => app.adjust(1),
            KeyCode::PageUp => app.adjust(5),
            KeyCode::PageDown => app.adjust(-5),

            // Reset to startup defaults
            KeyCode::Char('r') => app.reset(),

            // Score breakdown
            KeyCode::Char('b') => app.toggle_breakdown(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        app::InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.toggle_breakdown(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputRecord;
    use crate::tui::app::{FormField, InputMode};
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(InputRecord::default());
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(InputRecord::default());
        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        handle_key_event(&mut app, ctrl_c);
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_and_adjust_keys() {
        let mut app = App::new(InputRecord::default());
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_field(), FormField::Weight);
        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.input.weight, 71);
        handle_key_event(&mut app, key(KeyCode::PageDown));
        assert_eq!(app.input.weight, 66);
    }

    #[test]
    fn test_breakdown_mode_swallows_adjust_keys() {
        let mut app = App::new(InputRecord::default());
        handle_key_event(&mut app, key(KeyCode::Char('b')));
        assert_eq!(app.input_mode, InputMode::Breakdown);
        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.input, InputRecord::default());
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        let mut app = App::new(InputRecord::default());
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.input_mode, InputMode::Help);
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
