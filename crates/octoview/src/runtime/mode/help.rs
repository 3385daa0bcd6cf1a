use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the help overlay is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::Help {
        context,
        scroll_offset,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => {
            app.mode = context.restore_mode();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            *scroll_offset = scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;

    use crate::infra::credentials::MockCredentialStore;
    use crate::infra::transport::MockTransport;
    use crate::ui::state::app_mode::HelpContext;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn help_app(context: HelpContext) -> App {
        let mut credentials = MockCredentialStore::new();
        credentials.expect_token().return_const(None);
        credentials.expect_owner().return_const(None);
        credentials.expect_repo().return_const(None);
        let mut transport = MockTransport::new();
        transport.expect_execute().times(0);

        let mut app = App::new(Arc::new(credentials), Arc::new(transport));
        app.mode = AppMode::Help {
            context,
            scroll_offset: 0,
        };

        app
    }

    #[test]
    fn test_close_restores_the_originating_page() {
        // Arrange
        let mut app = help_app(HelpContext::Setup);

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert!(matches!(app.mode, AppMode::Setup));
    }

    #[test]
    fn test_j_scrolls_the_overlay_down() {
        // Arrange
        let mut app = help_app(HelpContext::Browse);

        // Act
        handle(&mut app, key(KeyCode::Char('j')));
        handle(&mut app, key(KeyCode::Char('j')));

        // Assert
        let AppMode::Help { scroll_offset, .. } = app.mode else {
            unreachable!("help mode should persist while scrolling");
        };
        assert_eq!(scroll_offset, 2);
    }

    #[test]
    fn test_k_does_not_scroll_past_the_top() {
        // Arrange
        let mut app = help_app(HelpContext::Browse);

        // Act
        handle(&mut app, key(KeyCode::Char('k')));

        // Assert
        let AppMode::Help { scroll_offset, .. } = app.mode else {
            unreachable!("help mode should persist while scrolling");
        };
        assert_eq!(scroll_offset, 0);
    }
}
