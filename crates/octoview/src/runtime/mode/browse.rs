use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// Handles key input while browsing the remote directory tree.
///
/// Going back at the repository root is a no-op; only `q` leaves the app.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => {
            return EventResult::Quit;
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.go_back();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.browser.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.browser.previous();
        }
        KeyCode::Char('g') => {
            app.browser.select_first();
        }
        KeyCode::Char('G') => {
            app.browser.select_last();
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.open_selected();
        }
        KeyCode::Char('r') => {
            app.refresh_listing();
        }
        KeyCode::Char('y') => {
            app.copy_selected_url();
        }
        KeyCode::Char('s') => {
            app.open_setup();
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help {
                context: HelpContext::Browse,
                scroll_offset: 0,
            };
        }
        _ => {}
    }

    EventResult::Continue
}
