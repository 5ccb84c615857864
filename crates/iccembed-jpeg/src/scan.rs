use crate::{APP2, ICC_IDENTIFIER};

/// Byte-granular search for an APP2 segment carrying an ICC profile.
///
/// The scanner does not follow segment lengths. It stops at every occurrence of the second byte
/// of the APP2 marker and checks whether the ICC identifier follows the (skipped) length field.
/// On mismatch scanning resumes right after the candidate byte, so a candidate overlapping the
/// previous one is still considered.
#[derive(Debug)]
pub(crate) struct IccSegmentScanner<'buf> {
    buf: &'buf [u8],
    cursor: usize,
    state: ScanState,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ScanState {
    Scanning,
    ValidatingCandidate { at: usize },
    Found { at: usize },
    Eof,
}

/// Location of a matched segment, relative to the scanned buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct SegmentMatch {
    /// Offset of the segment length field.
    pub length_offset: usize,
    /// Offset of the first profile byte.
    pub payload_offset: usize,
}

impl<'buf> IccSegmentScanner<'buf> {
    pub fn new(buf: &'buf [u8]) -> Self {
        Self {
            buf,
            cursor: 0,
            state: ScanState::Scanning,
        }
    }

    /// Advances to the next segment whose identifier matches.
    pub fn next_match(&mut self) -> Option<SegmentMatch> {
        loop {
            match self.state {
                ScanState::Scanning => {
                    let rest = &self.buf[self.cursor..];
                    match rest.iter().position(|&b| b == APP2[1]) {
                        Some(idx) => {
                            let at = self.cursor + idx;
                            self.cursor = at + 1;
                            self.state = ScanState::ValidatingCandidate { at };
                        }
                        None => {
                            self.cursor = self.buf.len();
                            self.state = ScanState::Eof;
                        }
                    }
                }
                ScanState::ValidatingCandidate { at } => {
                    let id_start = at + 1 + 2;
                    let id_end = id_start + ICC_IDENTIFIER.len();
                    if self.buf.get(id_start..id_end) == Some(&ICC_IDENTIFIER[..]) {
                        self.state = ScanState::Found { at };
                    } else {
                        tracing::trace!(at, "APP2 candidate without ICC identifier");
                        self.state = ScanState::Scanning;
                    }
                }
                ScanState::Found { at } => {
                    self.state = ScanState::Scanning;
                    return Some(SegmentMatch {
                        length_offset: at + 1,
                        payload_offset: at + 1 + 2 + ICC_IDENTIFIER.len(),
                    });
                }
                ScanState::Eof => return None,
            }
        }
    }
}
