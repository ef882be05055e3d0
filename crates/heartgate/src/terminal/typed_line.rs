use crate::api::types::SoundEvent;

use super::output::{LineStyle, Terminal};
use super::script::Cue;

/// One typed-line render: wait `delay`, open a new line, then append one
/// character every `interval` seconds. Completes on the tick that appends the
/// last character; an empty text completes as soon as its line is opened.
///
/// A render never cancels. Callers sequence renders by waiting for completion
/// before starting the next one, which is what keeps line order intact.
#[derive(Debug, Clone)]
pub struct TypedLine {
    chars: Vec<char>,
    style: LineStyle,
    delay_left: f32,
    interval: f32,
    since_last: f32,
    typed: usize,
    line: Option<usize>,
}

impl TypedLine {
    pub fn new(text: &str, style: LineStyle, delay: f32, interval: f32) -> Self {
        Self {
            chars: text.chars().collect(),
            style,
            delay_left: delay.max(0.0),
            interval: interval.max(0.0),
            since_last: 0.0,
            typed: 0,
            line: None,
        }
    }

    /// Consume up to `dt` seconds. Returns the unused time once complete.
    pub fn advance(&mut self, dt: f32, terminal: &mut Terminal, fired: &mut Vec<Cue>) -> Option<f32> {
        let mut left = dt;

        let line = match self.line {
            Some(line) => line,
            None => {
                if left < self.delay_left {
                    self.delay_left -= left;
                    return None;
                }
                left -= self.delay_left;
                self.delay_left = 0.0;
                let line = terminal.open_line(self.style);
                self.line = Some(line);
                line
            }
        };

        while self.typed < self.chars.len() {
            let needed = self.interval - self.since_last;
            if left < needed {
                self.since_last += left;
                return None;
            }
            left -= needed;
            self.since_last = 0.0;
            terminal.push_char(line, self.chars[self.typed]);
            self.typed += 1;
            fired.push(Cue::Sound(SoundEvent::TYPING));
        }

        Some(left)
    }

    pub fn is_complete(&self) -> bool {
        self.line.is_some() && self.typed == self.chars.len()
    }

    /// Index of the line this render writes to, once opened.
    pub fn line_index(&self) -> Option<usize> {
        self.line
    }
}
