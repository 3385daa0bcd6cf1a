use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// Handles key input while a JSON document is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.close_viewer();

            return EventResult::Continue;
        }
        KeyCode::Char('r') => {
            app.reload_document();

            return EventResult::Continue;
        }
        KeyCode::Char('?') => {
            app.mode = AppMode::Help {
                context: HelpContext::Viewer,
                scroll_offset: 0,
            };

            return EventResult::Continue;
        }
        _ => {}
    }

    let Some(viewer) = &mut app.viewer else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            viewer.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            viewer.previous();
        }
        KeyCode::Char('g') => {
            viewer.select_first();
        }
        KeyCode::Char('G') => {
            viewer.select_last();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            viewer.toggle_selected();
            viewer.clamp_selection();
        }
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::KeyModifiers;

    use crate::infra::credentials::MockCredentialStore;
    use crate::infra::transport::{MockTransport, Response};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn viewer_app() -> App {
        let mut credentials = MockCredentialStore::new();
        credentials
            .expect_token()
            .return_const(Some("t".to_string()));
        credentials
            .expect_owner()
            .return_const(Some("o".to_string()));
        credentials
            .expect_repo()
            .return_const(Some("r".to_string()));
        let mut transport = MockTransport::new();
        transport.expect_execute().returning(|_| {
            Box::pin(async {
                Ok(Response {
                    status: 200,
                    body: "{\"a\":{\"b\":1}}".to_string(),
                })
            })
        });

        let mut app = App::new(Arc::new(credentials), Arc::new(transport));
        app.browser.entries = vec![crate::domain::entry::RepositoryEntry {
            name: "en.json".to_string(),
            kind: crate::domain::entry::EntryKind::File,
            path: "en.json".to_string(),
            download_url: Some("https://raw.example/en.json".to_string()),
        }];
        app.browser.table_state.select(Some(0));
        app.open_selected();
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.process_pending_app_events();

        app
    }

    #[tokio::test]
    async fn test_esc_returns_to_browse_mode() {
        // Arrange
        let mut app = viewer_app().await;

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        assert!(app.viewer.is_none());
    }

    #[tokio::test]
    async fn test_enter_expands_the_selected_container() {
        // Arrange
        let mut app = viewer_app().await;
        let viewer = app.viewer.as_mut().expect("viewer should be open");
        viewer.list_state.select(Some(1));
        assert_eq!(viewer.rows().len(), 2);

        // Act
        handle(&mut app, key(KeyCode::Enter));

        // Assert
        let viewer = app.viewer.as_ref().expect("viewer should be open");
        assert_eq!(viewer.rows().len(), 3);
    }

    #[tokio::test]
    async fn test_question_mark_opens_viewer_help() {
        // Arrange
        let mut app = viewer_app().await;

        // Act
        handle(&mut app, key(KeyCode::Char('?')));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::Help {
                context: HelpContext::Viewer,
                ..
            }
        ));
    }
}
