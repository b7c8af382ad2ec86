//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action resulting from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Open the path prompt.
    NewData,
    /// Train again on the current dataset.
    Retrain,
    /// Write the current frame to the snapshot path.
    SavePng,
    /// Append a character to the prompt.
    PromptInput(char),
    /// Delete the last prompt character.
    PromptBackspace,
    /// Accept the prompt.
    PromptSubmit,
    /// Close the prompt without loading.
    PromptCancel,
    /// No action.
    None,
}

/// Whether keys drive commands or edit the path prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Single-key commands.
    #[default]
    Normal,
    /// Line editing.
    Prompt,
}

/// Maps key events to actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Handles a key event and returns the corresponding action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent, mode: InputMode) -> Action {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match mode {
            InputMode::Normal => match event.code {
                KeyCode::Esc | KeyCode::Char('q' | 'Q') => Action::Quit,
                KeyCode::Char('n' | 'N') => Action::NewData,
                KeyCode::Char('r' | 'R') => Action::Retrain,
                KeyCode::Char('s' | 'S') => Action::SavePng,
                _ => Action::None,
            },
            InputMode::Prompt => match event.code {
                KeyCode::Esc => Action::PromptCancel,
                KeyCode::Enter => Action::PromptSubmit,
                KeyCode::Backspace => Action::PromptBackspace,
                KeyCode::Char(c) => Action::PromptInput(c),
                _ => Action::None,
            },
        }
    }
}
