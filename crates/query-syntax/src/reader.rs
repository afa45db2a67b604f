//! Character cursor the compiler drives directly, without a token stream.

use std::collections::VecDeque;

/// How far past the current character the compiler ever looks.
pub const MAX_LOOKAHEAD: usize = 3;

/// A forward-only character reader with a small lookahead window.
///
/// End of input is reported as `None` by [`current`](Self::current) and
/// [`next`](Self::next); consuming past the end is a no-op.
pub struct LookaheadReader<I: Iterator<Item = char>> {
    input: I,
    buffer: VecDeque<char>,
    position: usize,
}

impl<I: Iterator<Item = char>> LookaheadReader<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            buffer: VecDeque::with_capacity(MAX_LOOKAHEAD + 1),
            position: 0,
        }
    }

    fn fill(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.input.next() {
                Some(ch) => self.buffer.push_back(ch),
                None => break,
            }
        }
    }

    /// The character at the cursor, or `None` at end of input.
    pub fn current(&mut self) -> Option<char> {
        self.next(0)
    }

    /// Previews the character `offset` positions past the cursor.
    pub fn next(&mut self, offset: usize) -> Option<char> {
        debug_assert!(offset <= MAX_LOOKAHEAD, "lookahead {offset} exceeds window");
        self.fill(offset + 1);
        self.buffer.get(offset).copied()
    }

    /// Returns the current character and advances past it.
    pub fn consume(&mut self) -> Option<char> {
        self.fill(1);
        let ch = self.buffer.pop_front();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    /// Advances `count` characters, stopping early at end of input.
    pub fn consume_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.consume().is_none() {
                break;
            }
        }
    }

    pub fn is_end_of_input(&mut self) -> bool {
        self.current().is_none()
    }

    pub fn current_is(&mut self, candidates: &[char]) -> bool {
        self.next_is(0, candidates)
    }

    pub fn next_is(&mut self, offset: usize, candidates: &[char]) -> bool {
        self.next(offset).is_some_and(|ch| candidates.contains(&ch))
    }

    /// Zero-based character offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }
}
