pub mod components;
pub mod icon;
pub mod pages;
pub mod state;
pub mod style;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::{BrowserManager, SetupManager, ViewerManager};
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

pub struct RenderContext<'a> {
    pub mode: &'a AppMode,
    pub browser: &'a mut BrowserManager,
    pub viewer: Option<&'a mut ViewerManager>,
    pub setup: &'a mut SetupManager,
    pub repo_label: Option<String>,
    pub status_message: Option<String>,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        mode,
        browser,
        viewer,
        setup,
        repo_label,
        status_message,
    } = context;

    let area = f.area();

    // Three-section layout: top status bar, content area, footer bar
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Top status bar
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(repo_label).render(f, status_bar_area);

    let footer_hint = footer_hint_for(mode, setup);
    components::footer_bar::FooterBar::new(status_message, footer_hint).render(f, footer_bar_area);

    match mode {
        AppMode::Browse => {
            pages::browser::BrowserPage::new(browser).render(f, content_area);
        }
        AppMode::Viewer => {
            render_viewer(f, content_area, browser, viewer);
        }
        AppMode::Setup => {
            pages::setup::SetupPage::new(setup).render(f, content_area);
        }
        AppMode::Help {
            context: help_context,
            scroll_offset,
        } => {
            // Render the originating page as background, then the overlay.
            match help_context {
                HelpContext::Browse => {
                    pages::browser::BrowserPage::new(browser).render(f, content_area);
                }
                HelpContext::Viewer => {
                    render_viewer(f, content_area, browser, viewer);
                }
                HelpContext::Setup => {
                    pages::setup::SetupPage::new(setup).render(f, content_area);
                }
            }

            components::help_overlay::HelpOverlay::new(*help_context, *scroll_offset)
                .render(f, content_area);
        }
    }
}

/// Key hints shown in the footer when no status message is pending.
fn footer_hint_for(mode: &AppMode, setup: &SetupManager) -> &'static str {
    match mode {
        AppMode::Browse => "q quit | Enter open | Esc back | r refresh | y copy URL | ? help",
        AppMode::Viewer => "q back | Enter expand/collapse | r reload | ? help",
        AppMode::Setup => setup.footer_hint(),
        AppMode::Help { .. } => "? / q / Esc close help",
    }
}

fn render_viewer(
    f: &mut Frame,
    content_area: Rect,
    browser: &mut BrowserManager,
    viewer: Option<&mut ViewerManager>,
) {
    // A closed viewer in viewer mode falls back to the browser listing.
    match viewer {
        Some(viewer) => pages::viewer::ViewerPage::new(viewer).render(f, content_area),
        None => pages::browser::BrowserPage::new(browser).render(f, content_area),
    }
}
