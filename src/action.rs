//! Terminal Actions
//!
//! Decoded actions as values. The interpreter can call [`TerminalApi`]
//! directly, or produce `Action`s to be queued, logged, serialized and later
//! applied with [`dispatch`].

use serde::{Deserialize, Serialize};

use crate::api::TerminalApi;
use crate::core::Color;
use crate::error::Result;

/// One decoded terminal action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Literal text run
    PrintString { text: String },
    /// Single printable or control character
    ExecuteChar { ch: char },
    /// SGR 39 / 49 / 0 color reset
    SetTextToDefaults { foreground: bool, background: bool },
    SetForegroundIndex { index: u8 },
    SetBackgroundIndex { index: u8 },
    SetRgbColor { color: Color, foreground: bool },
    /// SGR 1 / 22
    BoldText { on: bool },
    /// SGR 4 / 24
    UnderlineText { on: bool },
    /// SGR 7 / 27
    ReverseText { on: bool },
    /// CUP with zero-based, viewport-relative coordinates
    SetCursorPosition { x: i32, y: i32 },
    /// ECH
    EraseCharacters { count: u32 },
    /// OSC 0 / OSC 2
    SetWindowTitle { title: String },
}

impl Action {
    /// Name of the adapter method this action maps to
    pub fn name(&self) -> &'static str {
        match self {
            Action::PrintString { .. } => "print_string",
            Action::ExecuteChar { .. } => "execute_char",
            Action::SetTextToDefaults { .. } => "set_text_to_defaults",
            Action::SetForegroundIndex { .. } => "set_text_foreground_index",
            Action::SetBackgroundIndex { .. } => "set_text_background_index",
            Action::SetRgbColor { .. } => "set_text_rgb_color",
            Action::BoldText { .. } => "bold_text",
            Action::UnderlineText { .. } => "underline_text",
            Action::ReverseText { .. } => "reverse_text",
            Action::SetCursorPosition { .. } => "set_cursor_position",
            Action::EraseCharacters { .. } => "erase_characters",
            Action::SetWindowTitle { .. } => "set_window_title",
        }
    }
}

/// Apply a single action to the adapter
pub fn dispatch<T: TerminalApi + ?Sized>(api: &mut T, action: &Action) -> Result<()> {
    tracing::trace!(action = action.name(), "dispatch");
    match action {
        Action::PrintString { text } => api.print_string(text),
        Action::ExecuteChar { ch } => api.execute_char(*ch),
        Action::SetTextToDefaults {
            foreground,
            background,
        } => api.set_text_to_defaults(*foreground, *background),
        Action::SetForegroundIndex { index } => api.set_text_foreground_index(*index),
        Action::SetBackgroundIndex { index } => api.set_text_background_index(*index),
        Action::SetRgbColor { color, foreground } => api.set_text_rgb_color(*color, *foreground),
        Action::BoldText { on } => api.bold_text(*on),
        Action::UnderlineText { on } => api.underline_text(*on),
        Action::ReverseText { on } => api.reverse_text(*on),
        Action::SetCursorPosition { x, y } => api.set_cursor_position(*x, *y),
        Action::EraseCharacters { count } => api.erase_characters(*count),
        Action::SetWindowTitle { title } => api.set_window_title(title),
    }
}

/// Apply actions in order, stopping at the first failure.
/// Returns how many actions were applied.
pub fn dispatch_all<'a, T, I>(api: &mut T, actions: I) -> Result<usize>
where
    T: TerminalApi + ?Sized,
    I: IntoIterator<Item = &'a Action>,
{
    let mut applied = 0;
    for action in actions {
        dispatch(api, action)?;
        applied += 1;
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, ScreenBuffer, TextBuffer, Viewport};
    use crate::terminal::Terminal;

    #[test]
    fn test_action_json_shape() {
        let action = Action::SetCursorPosition { x: 4, y: 2 };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"action":"set_cursor_position","x":4,"y":2}"#);
    }

    #[test]
    fn test_parse_script() {
        let script = r#"[
            {"action": "set_rgb_color", "color": {"type": "rgb", "r": 1, "g": 2, "b": 3}, "foreground": false},
            {"action": "print_string", "text": "ok"}
        ]"#;
        let actions: Vec<Action> = serde_json::from_str(script).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].name(), "print_string");
    }

    #[test]
    fn test_dispatch_all_applies_in_order() {
        let mut term = Terminal::new(ScreenBuffer::new(10, 2), Viewport::new(Point::ORIGIN, 10, 2));
        let actions = vec![
            Action::PrintString { text: "abcd".into() },
            Action::SetCursorPosition { x: 1, y: 0 },
            Action::EraseCharacters { count: 2 },
            Action::ExecuteChar { ch: 'Z' },
            Action::SetWindowTitle { title: "t".into() },
        ];
        assert_eq!(dispatch_all(&mut term, &actions).unwrap(), 5);
        assert_eq!(term.buffer().row_text(0), "aZ d");
        assert_eq!(term.title(), "t");
    }

    #[test]
    fn test_dispatch_all_stops_at_failure() {
        // Viewport wider than the buffer lets a clamped position miss storage
        let mut term = Terminal::new(ScreenBuffer::new(4, 1), Viewport::new(Point::ORIGIN, 8, 1));
        let actions = vec![
            Action::SetCursorPosition { x: 6, y: 0 },
            Action::PrintString { text: "never".into() },
        ];
        let err = dispatch_all(&mut term, &actions).unwrap_err();
        assert_eq!(err.action(), "set_cursor_position");
        assert_eq!(term.buffer().row_text(0), "");
        assert_eq!(term.buffer().cursor_position(), Point::ORIGIN);
    }
}
