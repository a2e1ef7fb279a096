//! File I/O operations (save, load, new) for designer state.

use std::path::Path;

use anyhow::Context;

use super::DesignerState;
use crate::serialization;

impl DesignerState {
    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        serialization::save(self.storage.figures(), path)
            .with_context(|| format!("failed to save design to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load design from file, replacing the canvas and forgetting the history.
    ///
    /// Returns the number of figures loaded. On error the canvas is untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let storage = &mut self.storage;
        let figures = serialization::load(path, &mut || storage.generate_id())
            .with_context(|| format!("failed to load design from {}", path.display()))?;

        self.storage.clear_all();
        let count = figures.len();
        for figure in figures {
            self.storage.add(figure);
        }
        self.history.clear();
        self.drag = None;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(count)
    }

    /// Start a new, empty design.
    pub fn new_design(&mut self) {
        self.storage.clear_all();
        self.history.clear();
        self.drag = None;
        self.current_file_path = None;
        self.is_modified = false;
    }
}
