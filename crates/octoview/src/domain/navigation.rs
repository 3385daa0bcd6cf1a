/// Current browsing position plus the ancestor path stack for back traversal.
///
/// The history never contains the current path itself; descending pushes the
/// old current path, going back pops one entry, and popping an empty stack is
/// a no-op so the enclosing navigation (quit handling) can take over.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NavigationState {
    current_path: String,
    history: Vec<String>,
}

impl NavigationState {
    /// Returns the remote path currently being browsed; empty at repo root.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Returns whether the navigator has no ancestor to go back to.
    pub fn at_root(&self) -> bool {
        self.history.is_empty()
    }

    /// Pushes the current path onto history and moves into `path`.
    pub fn descend(&mut self, path: String) {
        let previous = std::mem::replace(&mut self.current_path, path);
        self.history.push(previous);
    }

    /// Pops one history entry into the current path.
    ///
    /// Returns `false` without changing anything when already at the root.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(parent) => {
                self.current_path = parent;
                true
            }
            None => false,
        }
    }
}
