//! Request frame reader
//!
//! Accumulates bytes until the `\r` terminator and hands out one frame at a
//! time. The buffer is bounded: a line longer than [`MAX_FRAME_LEN`] is
//! dropped as a whole, up to and including its terminator.

use heapless::Vec;

/// Request terminator
pub const REQUEST_TERMINATOR: u8 = b'\r';

/// Longest accepted request line, terminator excluded
pub const MAX_FRAME_LEN: usize = 16;

/// One complete request line without its terminator
pub type Frame = Vec<u8, MAX_FRAME_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Collecting bytes of the current frame
    Collecting,
    /// Dropping the rest of an overlong line until the next terminator
    Discarding,
}

/// Incremental frame reader
pub struct FrameReader {
    buffer: Frame,
    state: State,
}

impl FrameReader {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            state: State::Collecting,
        }
    }

    /// Process a single incoming byte. Returns `Some(Frame)` when a terminator
    /// completes a non-empty frame.
    pub fn push(&mut self, byte: u8) -> Option<Frame> {
        if byte == REQUEST_TERMINATOR {
            return match self.state {
                State::Discarding => {
                    self.state = State::Collecting;
                    None
                }
                State::Collecting if self.buffer.is_empty() => None,
                State::Collecting => Some(core::mem::take(&mut self.buffer)),
            };
        }

        match self.state {
            State::Discarding => None,
            // LF left over from a CRLF-terminated previous request
            State::Collecting if byte == b'\n' && self.buffer.is_empty() => None,
            State::Collecting => {
                if self.buffer.push(byte).is_err() {
                    log::warn!(
                        "frame: line exceeds {} bytes, discarding until terminator",
                        MAX_FRAME_LEN
                    );
                    self.buffer.clear();
                    self.state = State::Discarding;
                }
                None
            }
        }
    }

    /// Drop any partial frame, e.g. after the transport went away
    pub fn reset(&mut self) {
        if !self.buffer.is_empty() || self.state == State::Discarding {
            log::debug!("frame: discarding {} buffered bytes", self.buffer.len());
        }
        self.buffer.clear();
        self.state = State::Collecting;
    }

    /// Number of bytes of the frame in progress
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_idle(&self) -> bool {
        self.buffer.is_empty() && self.state == State::Collecting
    }
}

impl Default for FrameReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(reader: &mut FrameReader, bytes: &[u8]) -> Option<Frame> {
        let mut last = None;
        for &byte in bytes {
            if let Some(frame) = reader.push(byte) {
                last = Some(frame);
            }
        }
        last
    }

    #[test]
    fn yields_frame_on_carriage_return() {
        let mut reader = FrameReader::new();
        let frame = feed(&mut reader, b">P000\r").unwrap();
        assert_eq!(frame.as_slice(), b">P000");
        assert!(reader.is_idle());
    }

    #[test]
    fn empty_line_yields_nothing() {
        let mut reader = FrameReader::new();
        assert!(reader.push(b'\r').is_none());
        assert!(reader.is_idle());
    }

    #[test]
    fn line_feed_is_not_a_terminator() {
        let mut reader = FrameReader::new();
        assert!(feed(&mut reader, b">P000\n").is_none());
        assert_eq!(reader.pending(), 6);
    }

    #[test]
    fn skips_leading_line_feed_of_crlf() {
        let mut reader = FrameReader::new();
        assert!(feed(&mut reader, b">P000\r\n").is_some());
        let frame = feed(&mut reader, b">J000\r").unwrap();
        assert_eq!(frame.as_slice(), b">J000");
    }

    #[test]
    fn overlong_line_is_dropped_entirely() {
        let mut reader = FrameReader::new();
        let mut long = [b'x'; MAX_FRAME_LEN + 4];
        long[0] = b'>';
        assert!(feed(&mut reader, &long).is_none());
        assert!(reader.push(b'\r').is_none());
        let frame = feed(&mut reader, b">V000\r").unwrap();
        assert_eq!(frame.as_slice(), b">V000");
    }

    #[test]
    fn frame_of_exactly_max_len_is_accepted() {
        let mut reader = FrameReader::new();
        let line = [b'>'; MAX_FRAME_LEN];
        let frame = feed(&mut reader, &line);
        assert!(frame.is_none());
        let frame = reader.push(b'\r').unwrap();
        assert_eq!(frame.len(), MAX_FRAME_LEN);
    }

    #[test]
    fn reset_discards_partial_frame() {
        let mut reader = FrameReader::new();
        feed(&mut reader, b">B12");
        reader.reset();
        assert!(reader.is_idle());
        let frame = feed(&mut reader, b"5\r");
        assert_eq!(frame.unwrap().as_slice(), b"5");
    }
}
