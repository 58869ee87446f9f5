//! # Message Log
//!
//! Bounded, word-wrapped, colored log shown in the bottom panel.

use crate::config::{MSG_HEIGHT, MSG_WIDTH};
use crate::Rgb;
use std::collections::VecDeque;

/// One wrapped line of the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub color: Rgb,
}

/// FIFO log holding at most `capacity` lines of at most `width` characters.
#[derive(Debug, Clone)]
pub struct MessageLog {
    lines: VecDeque<Message>,
    capacity: usize,
    width: usize,
}

impl MessageLog {
    /// Creates an empty log. Both limits are raised to at least one.
    pub fn new(capacity: usize, width: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            width: width.max(1),
        }
    }

    /// Posts a message in the default color.
    pub fn post(&mut self, text: &str) {
        self.post_colored(text, Rgb::WHITE);
    }

    /// Wraps a message and appends its lines, dropping the oldest line
    /// whenever the log is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use tombs::{MessageLog, Rgb};
    ///
    /// let mut log = MessageLog::new(2, 10);
    /// log.post_colored("one two three", Rgb::RED);
    /// let lines: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
    /// assert_eq!(lines, vec!["one two", "three"]);
    /// ```
    pub fn post_colored(&mut self, text: &str, color: Rgb) {
        for line in wrap_text(text, self.width) {
            if self.lines.len() == self.capacity {
                self.lines.pop_front();
            }
            self.lines.push_back(Message { text: line, color });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent line, if any.
    pub fn last(&self) -> Option<&Message> {
        self.lines.back()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(MSG_HEIGHT, MSG_WIDTH)
    }
}

/// Greedy word wrap. Words longer than the width are split into chunks.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        if line_len > 0 && line_len + 1 + chars.len() <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + chars.len();
            continue;
        }
        if line_len > 0 {
            out.push(std::mem::take(&mut line));
            line_len = 0;
        }
        let mut chunks = chars.chunks(width).peekable();
        while let Some(chunk) = chunks.next() {
            if chunks.peek().is_some() {
                out.push(chunk.iter().collect());
            } else {
                line = chunk.iter().collect();
                line_len = chunk.len();
            }
        }
    }
    if line_len > 0 {
        out.push(line);
    }
    out
}
