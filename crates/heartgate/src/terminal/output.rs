use serde::Serialize;

/// Style category of a terminal line. Serialized as the host's CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineStyle {
    #[serde(rename = "system-message")]
    System,
    #[serde(rename = "challenge-text")]
    Challenge,
    #[serde(rename = "success-message")]
    Success,
    #[serde(rename = "error-message")]
    Error,
    #[serde(rename = "loading-message")]
    Loading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerminalLine {
    pub style: LineStyle,
    pub text: String,
}

/// A line that changed since the host last looked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineUpdate {
    pub index: usize,
    pub style: LineStyle,
    pub text: String,
}

/// Append-only list of styled lines.
///
/// Only the newest line is ever written to after creation, so change tracking
/// is a single watermark: everything from `first_dirty` onwards needs redrawing.
#[derive(Debug, Default)]
pub struct Terminal {
    lines: Vec<TerminalLine>,
    first_dirty: Option<usize>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty line and return its index.
    pub fn open_line(&mut self, style: LineStyle) -> usize {
        self.push_line(String::new(), style)
    }

    /// Append a complete line and return its index.
    pub fn push_line(&mut self, text: impl Into<String>, style: LineStyle) -> usize {
        let index = self.lines.len();
        self.lines.push(TerminalLine {
            style,
            text: text.into(),
        });
        self.mark_dirty(index);
        index
    }

    /// Append one character to an existing line.
    pub fn push_char(&mut self, index: usize, ch: char) {
        if let Some(line) = self.lines.get_mut(index) {
            line.text.push(ch);
            self.mark_dirty(index);
        }
    }

    fn mark_dirty(&mut self, index: usize) {
        self.first_dirty = Some(self.first_dirty.map_or(index, |d| d.min(index)));
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&TerminalLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line texts in order, handy for assertions and debugging.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Whether anything changed since the last `take_updates`.
    pub fn has_updates(&self) -> bool {
        self.first_dirty.is_some()
    }

    /// Every line from the first changed one to the end. Resets the watermark.
    pub fn take_updates(&mut self) -> Vec<LineUpdate> {
        let Some(from) = self.first_dirty.take() else {
            return Vec::new();
        };
        self.lines[from..]
            .iter()
            .enumerate()
            .map(|(offset, line)| LineUpdate {
                index: from + offset,
                style: line.style,
                text: line.text.clone(),
            })
            .collect()
    }
}
