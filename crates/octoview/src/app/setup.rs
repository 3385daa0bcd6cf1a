use std::io;

use ratatui::widgets::TableState;

use crate::app::AppServices;

/// Backing table rows for the setup page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SetupRow {
    Token,
    Owner,
    Repo,
}

impl SetupRow {
    const ALL: [Self; 3] = [Self::Token, Self::Owner, Self::Repo];
    const ROW_COUNT: usize = Self::ALL.len();

    /// Builds a row selector from the table row index.
    fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Token)
    }

    /// Returns the display label for the row.
    fn label(self) -> &'static str {
        match self {
            Self::Token => "Access Token",
            Self::Owner => "Repository Owner",
            Self::Repo => "Repository Name",
        }
    }
}

/// Manages the three-field GitHub configuration form.
///
/// Edits accumulate in memory and hit the credential store only on an
/// explicit save, so half-typed tokens are never persisted.
pub struct SetupManager {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub table_state: TableState,
    editing_row: Option<SetupRow>,
}

impl SetupManager {
    /// Creates the form pre-filled with any stored configuration.
    pub fn new(services: &AppServices) -> Self {
        let credentials = services.credentials();
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            token: credentials.token().unwrap_or_default(),
            owner: credentials.owner().unwrap_or_default(),
            repo: credentials.repo().unwrap_or_default(),
            table_state,
            editing_row: None,
        }
    }

    /// Moves the selection to the next field.
    pub fn next(&mut self) {
        if !self.is_editing() {
            let next_index = (self.selected_row_index() + 1) % SetupRow::ROW_COUNT;
            self.table_state.select(Some(next_index));
        }
    }

    /// Moves the selection to the previous field.
    pub fn previous(&mut self) {
        if !self.is_editing() {
            let current_index = self.selected_row_index();
            let previous_index = if current_index == 0 {
                SetupRow::ROW_COUNT - 1
            } else {
                current_index - 1
            };
            self.table_state.select(Some(previous_index));
        }
    }

    /// Toggles text editing for the selected field.
    pub fn toggle_editing(&mut self) {
        let selected_row = self.selected_row();
        if self.editing_row == Some(selected_row) {
            self.editing_row = None;

            return;
        }

        self.editing_row = Some(selected_row);
    }

    /// Returns whether a field editor is active.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing_row.is_some()
    }

    /// Exits field editing mode.
    pub fn stop_editing(&mut self) {
        self.editing_row = None;
    }

    /// Appends one character to the field being edited.
    pub fn append_character(&mut self, character: char) {
        if let Some(editing_row) = self.editing_row {
            self.field_mut(editing_row).push(character);
        }
    }

    /// Removes the last character from the field being edited.
    pub fn remove_character(&mut self) {
        if let Some(editing_row) = self.editing_row {
            self.field_mut(editing_row).pop();
        }
    }

    /// Returns whether every field holds a non-blank value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.token.trim().is_empty()
            && !self.owner.trim().is_empty()
            && !self.repo.trim().is_empty()
    }

    /// Persists the form to the credential store.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be written.
    pub fn save(&mut self, services: &AppServices) -> io::Result<()> {
        self.stop_editing();
        services
            .credentials()
            .save_config(&self.token, &self.owner, &self.repo)
    }

    /// Clears the stored configuration and blanks the form.
    ///
    /// # Errors
    /// Returns an error when the backing storage cannot be modified.
    pub fn clear(&mut self, services: &AppServices) -> io::Result<()> {
        services.credentials().clear_config()?;
        self.token.clear();
        self.owner.clear();
        self.repo.clear();
        self.stop_editing();

        Ok(())
    }

    /// Returns form rows as `(label, display value)` pairs.
    ///
    /// The token renders masked unless it is being edited.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        SetupRow::ALL
            .iter()
            .map(|row| (row.label(), self.display_value(*row)))
            .collect()
    }

    /// Returns the footer hint text for the setup page.
    #[must_use]
    pub fn footer_hint(&self) -> &'static str {
        if self.is_editing() {
            "Editing: type value, Enter to finish, Esc to cancel"
        } else {
            "Enter edit field | s save | c clear | Esc back"
        }
    }

    fn selected_row_index(&self) -> usize {
        self.table_state
            .selected()
            .unwrap_or(0)
            .min(SetupRow::ROW_COUNT - 1)
    }

    fn selected_row(&self) -> SetupRow {
        SetupRow::from_index(self.selected_row_index())
    }

    fn field_mut(&mut self, row: SetupRow) -> &mut String {
        match row {
            SetupRow::Token => &mut self.token,
            SetupRow::Owner => &mut self.owner,
            SetupRow::Repo => &mut self.repo,
        }
    }

    fn display_value(&self, row: SetupRow) -> String {
        let is_editing_row = self.editing_row == Some(row);
        let value = match row {
            SetupRow::Token if !is_editing_row => "\u{2022}".repeat(self.token.chars().count()),
            SetupRow::Token => self.token.clone(),
            SetupRow::Owner => self.owner.clone(),
            SetupRow::Repo => self.repo.clone(),
        };

        if is_editing_row {
            format!("{value}|")
        } else if value.is_empty() {
            "<not set>".to_string()
        } else {
            value
        }
    }
}
