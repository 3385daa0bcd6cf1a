use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// Handles key input on the GitHub configuration form.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if app.setup.is_editing() {
        return handle_field_input(app, key);
    }

    match key.code {
        KeyCode::Char('q') => {
            return EventResult::Quit;
        }
        KeyCode::Esc => {
            app.leave_setup();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.setup.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.setup.previous();
        }
        KeyCode::Enter => {
            app.setup.toggle_editing();
        }
        KeyCode::Char('s') => {
            app.save_setup();
        }
        KeyCode::Char('c') => {
            app.clear_setup();
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help {
                context: HelpContext::Setup,
                scroll_offset: 0,
            };
        }
        _ => {}
    }

    EventResult::Continue
}

/// Handles text input while a credential field editor is active.
fn handle_field_input(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.setup.stop_editing();
        }
        KeyCode::Backspace => {
            app.setup.remove_character();
        }
        KeyCode::Char(character) if is_text_key(key) => {
            app.setup.append_character(character);
        }
        _ => {}
    }

    EventResult::Continue
}

/// Returns whether a key event should insert text into a credential field.
fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::infra::credentials::MockCredentialStore;
    use crate::infra::transport::MockTransport;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup_app() -> App {
        let mut credentials = MockCredentialStore::new();
        credentials.expect_token().return_const(None);
        credentials.expect_owner().return_const(None);
        credentials.expect_repo().return_const(None);
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        App::new(Arc::new(credentials), Arc::new(transport))
    }

    #[test]
    fn test_typing_fills_the_selected_field() {
        // Arrange
        let mut app = setup_app();

        // Act
        handle(&mut app, key(KeyCode::Enter));
        handle(&mut app, key(KeyCode::Char('g')));
        handle(&mut app, key(KeyCode::Char('h')));
        handle(&mut app, key(KeyCode::Enter));

        // Assert
        assert_eq!(app.setup.token, "gh");
        assert!(!app.setup.is_editing());
    }

    #[test]
    fn test_ctrl_modified_characters_are_ignored_while_editing() {
        // Arrange
        let mut app = setup_app();
        handle(&mut app, key(KeyCode::Enter));

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );

        // Assert
        assert_eq!(app.setup.token, "");
    }

    #[test]
    fn test_q_quits_when_not_editing() {
        // Arrange
        let mut app = setup_app();

        // Act
        let result = handle(&mut app, key(KeyCode::Char('q')));

        // Assert
        assert!(matches!(result, EventResult::Quit));
    }

    #[test]
    fn test_q_is_text_while_editing() {
        // Arrange
        let mut app = setup_app();
        handle(&mut app, key(KeyCode::Enter));

        // Act
        let result = handle(&mut app, key(KeyCode::Char('q')));

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert_eq!(app.setup.token, "q");
    }

    #[test]
    fn test_esc_without_configuration_stays_in_setup() {
        // Arrange
        let mut app = setup_app();

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert!(matches!(app.mode, AppMode::Setup));
    }
}
