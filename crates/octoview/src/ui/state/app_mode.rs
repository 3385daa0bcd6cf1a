/// Top-level input mode of the application.
pub enum AppMode {
    Browse,
    Viewer,
    Setup,
    Help {
        context: HelpContext,
        scroll_offset: u16,
    },
}

/// Captures which page opened the help overlay so it can be restored on close.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HelpContext {
    Browse,
    Viewer,
    Setup,
}

impl HelpContext {
    /// Returns the keybinding pairs `(key, description)` for the originating
    /// page.
    pub fn keybindings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            HelpContext::Browse => &[
                ("q", "Quit"),
                ("j / k", "Move selection"),
                ("Enter / l", "Open entry"),
                ("Esc / h", "Parent directory"),
                ("g / G", "First / last entry"),
                ("r", "Refresh listing"),
                ("y", "Copy download URL"),
                ("s", "Setup"),
                ("?", "Help"),
            ],
            HelpContext::Viewer => &[
                ("q / Esc", "Back to browser"),
                ("j / k", "Move selection"),
                ("Enter / Space", "Expand / collapse node"),
                ("g / G", "First / last row"),
                ("r", "Reload document"),
                ("?", "Help"),
            ],
            HelpContext::Setup => &[
                ("j / k", "Move selection"),
                ("Enter", "Edit field"),
                ("s", "Save configuration"),
                ("c", "Clear configuration"),
                ("Esc", "Back to browser"),
                ("q", "Quit"),
                ("?", "Help"),
            ],
        }
    }

    /// Reconstructs the `AppMode` that was active before help was opened.
    pub fn restore_mode(self) -> AppMode {
        match self {
            HelpContext::Browse => AppMode::Browse,
            HelpContext::Viewer => AppMode::Viewer,
            HelpContext::Setup => AppMode::Setup,
        }
    }

    /// Display title for the help overlay header.
    pub fn title(self) -> &'static str {
        "Keybindings"
    }
}
