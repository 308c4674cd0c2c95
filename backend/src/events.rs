/// SDL key code. Printable keys use their lowercase character value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const ESCAPE: KeyCode = KeyCode(0x1b);
    pub const RETURN: KeyCode = KeyCode(0x0d);
    pub const SPACE: KeyCode = KeyCode(0x20);

    /// Key code of a printable key, `'A'` and `'a'` map to the same key.
    pub fn from_char(c: char) -> KeyCode {
        KeyCode(c.to_ascii_lowercase() as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonId {
    // x, y
    Left(i32, i32),
    Right(i32, i32),
    Middle(i32, i32),
    Other(i32, i32),
}

/// One input notification taken from the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    /// Window close or any other request to end the program.
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    // x, y, xrel, yrel
    MouseMotion(i32, i32, i32, i32),
    MouseButtonUp(MouseButtonId),
    MouseButtonDown(MouseButtonId),
    // dx, dy (usually -1 or 1 based on direction)
    MouseWheel(i32, i32),
    /// Anything the demo has no use for (window, controller, text input...).
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_keys_are_case_insensitive() {
        assert_eq!(KeyCode::from_char('A'), KeyCode::from_char('a'));
        assert_eq!(KeyCode::from_char('a'), KeyCode(97));
    }

    #[test]
    fn escape_is_not_a_letter() {
        assert_ne!(KeyCode::from_char('A'), KeyCode::ESCAPE);
        assert_eq!(KeyCode::ESCAPE, KeyCode(27));
    }
}
