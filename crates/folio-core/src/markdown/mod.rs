//! Markdown formatting commands applied at a caret or selection.
//!
//! Pure text transformation: the caller passes the text and the selection
//! range explicitly and gets back new text plus the caret to restore.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WorkspaceError};
use crate::text_offset::CharMap;

mod preview;

pub use preview::note_preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownCommand {
    Heading1,
    Heading2,
    Bold,
    Italic,
    BulletList,
    NumberedList,
}

enum Edit {
    /// Insert the marker at the selection start
    Prefix(&'static str),
    /// Put the marker on both sides of the selection
    Wrap(&'static str),
}

impl MarkdownCommand {
    pub const ALL: [MarkdownCommand; 6] = [
        MarkdownCommand::Heading1,
        MarkdownCommand::Heading2,
        MarkdownCommand::Bold,
        MarkdownCommand::Italic,
        MarkdownCommand::BulletList,
        MarkdownCommand::NumberedList,
    ];

    /// Token used on the wire
    pub fn token(self) -> &'static str {
        match self {
            MarkdownCommand::Heading1 => "heading1",
            MarkdownCommand::Heading2 => "heading2",
            MarkdownCommand::Bold => "bold",
            MarkdownCommand::Italic => "italic",
            MarkdownCommand::BulletList => "bulletList",
            MarkdownCommand::NumberedList => "numberedList",
        }
    }

    fn edit(self) -> Edit {
        match self {
            MarkdownCommand::Heading1 => Edit::Prefix("# "),
            MarkdownCommand::Heading2 => Edit::Prefix("## "),
            MarkdownCommand::Bold => Edit::Wrap("**"),
            MarkdownCommand::Italic => Edit::Wrap("*"),
            MarkdownCommand::BulletList => Edit::Prefix("- "),
            MarkdownCommand::NumberedList => Edit::Prefix("1. "),
        }
    }
}

impl FromStr for MarkdownCommand {
    type Err = WorkspaceError;

    fn from_str(token: &str) -> Result<Self> {
        MarkdownCommand::ALL
            .into_iter()
            .find(|command| command.token() == token)
            .ok_or_else(|| WorkspaceError::UnknownCommand(token.to_string()))
    }
}

impl fmt::Display for MarkdownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Result of a formatting command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Caret position in chars
    pub cursor: usize,
}

/// Apply `command` to `text` over the char range `[start, end)`.
///
/// Fails with `InvalidSelection` unless `start <= end <= chars(text)`.
pub fn apply_command(command: MarkdownCommand, text: &str, start: usize, end: usize) -> Result<Formatted> {
    let map = CharMap::new(text);
    let invalid = || WorkspaceError::InvalidSelection {
        start,
        end,
        len: map.len_chars(),
    };
    if start > end {
        return Err(invalid());
    }
    let start_byte = map.byte_offset(start).ok_or_else(invalid)?;
    let end_byte = map.byte_offset(end).ok_or_else(invalid)?;

    // Markers are ASCII, so byte length == char count
    let formatted = match command.edit() {
        Edit::Prefix(marker) => {
            let mut out = String::with_capacity(text.len() + marker.len());
            out.push_str(&text[..start_byte]);
            out.push_str(marker);
            out.push_str(&text[start_byte..]);
            Formatted {
                text: out,
                cursor: start + marker.len(),
            }
        }
        Edit::Wrap(marker) => {
            let mut out = String::with_capacity(text.len() + 2 * marker.len());
            out.push_str(&text[..start_byte]);
            out.push_str(marker);
            out.push_str(&text[start_byte..end_byte]);
            out.push_str(marker);
            out.push_str(&text[end_byte..]);
            Formatted {
                text: out,
                cursor: end + 2 * marker.len(),
            }
        }
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: MarkdownCommand, text: &str, start: usize, end: usize) -> (String, usize) {
        let formatted = apply_command(command, text, start, end).unwrap();
        (formatted.text, formatted.cursor)
    }

    #[test]
    fn test_bold_wraps_selection() {
        assert_eq!(
            run(MarkdownCommand::Bold, "# Welcome", 2, 9),
            ("# **Welcome**".to_string(), 13)
        );
    }

    #[test]
    fn test_italic_wraps_selection() {
        assert_eq!(
            run(MarkdownCommand::Italic, "say hi now", 4, 6),
            ("say *hi* now".to_string(), 8)
        );
    }

    #[test]
    fn test_wrap_empty_selection_leaves_marker_pair() {
        assert_eq!(run(MarkdownCommand::Bold, "ab", 1, 1), ("a****b".to_string(), 5));
    }

    #[test]
    fn test_prefix_commands_insert_at_start() {
        let text = "line";
        assert_eq!(run(MarkdownCommand::Heading1, text, 0, 4), ("# line".to_string(), 2));
        assert_eq!(run(MarkdownCommand::Heading2, text, 0, 0), ("## line".to_string(), 3));
        assert_eq!(run(MarkdownCommand::BulletList, text, 0, 2), ("- line".to_string(), 2));
        assert_eq!(run(MarkdownCommand::NumberedList, text, 0, 0), ("1. line".to_string(), 3));
    }

    #[test]
    fn test_prefix_mid_text_uses_current_text() {
        assert_eq!(
            run(MarkdownCommand::BulletList, "a\nb", 2, 2),
            ("a\n- b".to_string(), 4)
        );
    }

    #[test]
    fn test_positions_count_chars_not_bytes() {
        assert_eq!(
            run(MarkdownCommand::Bold, "héllo wörld", 6, 11),
            ("héllo **wörld**".to_string(), 15)
        );
    }

    #[test]
    fn test_invalid_selection_rejected() {
        assert_eq!(
            apply_command(MarkdownCommand::Bold, "abc", 2, 1),
            Err(WorkspaceError::InvalidSelection { start: 2, end: 1, len: 3 })
        );
        assert_eq!(
            apply_command(MarkdownCommand::Heading1, "abc", 0, 4),
            Err(WorkspaceError::InvalidSelection { start: 0, end: 4, len: 3 })
        );
    }

    #[test]
    fn test_tokens_parse() {
        for command in MarkdownCommand::ALL {
            assert_eq!(command.token().parse::<MarkdownCommand>(), Ok(command));
        }
    }

    #[test]
    fn test_unknown_token_rejected() {
        assert_eq!(
            "strikethrough".parse::<MarkdownCommand>(),
            Err(WorkspaceError::UnknownCommand("strikethrough".to_string()))
        );
    }
}
