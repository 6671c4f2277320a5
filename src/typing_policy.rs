use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to a typing test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Fresh words, like the reset button
    Reset,
    /// Same words again
    Retry,
    Submit,
    Backspace,
    Type(char),
    Ignore,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return KeyAction::Ignore;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if ctrl => KeyAction::Quit,
            KeyCode::Char('r') if ctrl => KeyAction::Retry,
            KeyCode::Tab => KeyAction::Reset,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(' ') => KeyAction::Submit,
            KeyCode::Char(_) if ctrl => KeyAction::Ignore,
            KeyCode::Char(c) => KeyAction::Type(c),
            _ => KeyAction::Ignore,
        }
    }
}

/// Text typed for the current word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    buffer: String,
    disabled: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns false when the field is disabled.
    pub fn push(&mut self, c: char) -> bool {
        if self.disabled {
            return false;
        }
        self.buffer.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        if self.disabled {
            return None;
        }
        self.buffer.pop()
    }

    /// Hand over the typed text and clear the field.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn disable(&mut self) {
        self.disabled = true;
        self.buffer.clear();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.disabled = false;
    }
}
