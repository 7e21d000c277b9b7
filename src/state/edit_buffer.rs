//! Fixed-capacity edit buffer with a codepoint-aligned byte cursor.
//!
//! All operations are pure state transitions, testable without a terminal.
//! The buffer knows nothing about matching; the key handler re-runs the
//! match pipeline after any mutation that changed the contents.

/// Maximum buffer size in bytes. Insertions beyond this are silently dropped.
pub const CAPACITY: usize = 4096;

/// The pattern/input buffer.
///
/// Invariant: `cursor` is a byte offset that always lands on a UTF-8 leading
/// byte or at the end of the text, never inside a multi-byte codepoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    /// Empty buffer with the cursor at offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset into [`EditBuffer::text`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert text at the cursor, advancing the cursor past it.
    ///
    /// Control characters are filtered out at this boundary; whatever would
    /// not fit within [`CAPACITY`] is silently dropped, truncating on a
    /// codepoint boundary. Returns `true` if the contents changed.
    pub fn insert(&mut self, input: &str) -> bool {
        let mut room = CAPACITY.saturating_sub(self.text.len());
        let mut inserted = 0;
        for ch in input.chars().filter(|c| !c.is_control()) {
            let len = ch.len_utf8();
            if len > room {
                break;
            }
            self.text.insert(self.cursor + inserted, ch);
            inserted += len;
            room -= len;
        }
        self.cursor += inserted;
        inserted > 0
    }

    /// Remove the codepoint ending at the cursor, if any.
    ///
    /// Scans backward over continuation bytes to find the leading byte, then
    /// removes that span; the cursor moves to the span start. Returns `true`
    /// if anything was removed.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.prev_boundary(self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Remove the codepoint starting at the cursor, if any.
    ///
    /// The cursor does not move. Returns `true` if anything was removed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let end = self.next_boundary(self.cursor);
        self.text.drain(self.cursor..end);
        true
    }

    /// Remove everything from the buffer start to the cursor.
    ///
    /// The cursor moves to offset 0. Returns `true` if anything was removed.
    pub fn kill_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.text.drain(..self.cursor);
        self.cursor = 0;
        true
    }

    /// Remove the word before the cursor.
    ///
    /// From the cursor, skips backward over trailing spaces, then over
    /// non-space bytes, and removes the whole span; the cursor moves to the
    /// span start. Returns `true` if anything was removed.
    pub fn kill_word_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let bytes = self.text.as_bytes();
        let mut start = self.cursor;
        while start > 0 && bytes[start - 1] == b' ' {
            start -= 1;
        }
        while start > 0 && bytes[start - 1] != b' ' {
            start -= 1;
        }
        // A space byte never occurs inside a multi-byte codepoint, so start
        // is codepoint-aligned.
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Move the cursor one codepoint left; no-op at the buffer start.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    /// Move the cursor one codepoint right; no-op at the buffer end.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    /// Move the cursor to offset 0.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor past the last byte.
    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Replace the entire contents; the cursor moves to the end.
    ///
    /// Truncates at [`CAPACITY`] on a codepoint boundary. Used by Tab
    /// completion, which copies an item's text verbatim.
    pub fn set_text(&mut self, text: &str) {
        let mut end = text.len().min(CAPACITY);
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        self.text.clear();
        self.text.push_str(&text[..end]);
        self.cursor = self.text.len();
    }

    /// Byte offset of the leading byte at or before `pos - 1`.
    ///
    /// Bounded by the buffer start, so a truncated sequence can never move
    /// the cursor past the edge.
    fn prev_boundary(&self, pos: usize) -> usize {
        let bytes = self.text.as_bytes();
        let mut p = pos;
        while p > 0 {
            p -= 1;
            if bytes[p] & 0xc0 != 0x80 {
                break;
            }
        }
        p
    }

    /// Byte offset just past the codepoint starting at `pos`.
    ///
    /// Bounded by the buffer end.
    fn next_boundary(&self, pos: usize) -> usize {
        let bytes = self.text.as_bytes();
        let mut p = pos + 1;
        while p < bytes.len() && bytes[p] & 0xc0 == 0x80 {
            p += 1;
        }
        p.min(bytes.len())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "edit_buffer_tests.rs"]
mod tests;
