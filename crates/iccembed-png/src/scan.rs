use crate::ChunkType;

const IDAT: [u8; 4] = *b"IDAT";
const TYPE_SIZE: usize = 4;
const LENGTH_SIZE: usize = 4;

/// Byte-granular search for a chunk type tag.
///
/// Chunk lengths are not followed; every byte equal to the first byte of the wanted tag (or of
/// `IDAT`) is treated as a candidate. A mismatching candidate resumes the scan at the next byte, so
/// overlapping candidates are still considered. Tag bytes that happen to occur inside the data of
/// an earlier chunk will match as well.
#[derive(Debug)]
pub(crate) struct ChunkScanner<'buf> {
    buf: &'buf [u8],
    target: ChunkType,
    cursor: usize,
    state: ScanState,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ScanState {
    Scanning,
    ValidatingCandidate { at: usize },
    Found { at: usize },
    ImageData { at: usize },
    Eof,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ScanOutcome {
    /// Wanted tag found at `type_offset`, preceded by a length field.
    Found { type_offset: usize },
    /// `IDAT` found before a chunk that must precede it.
    ImageDataReached { type_offset: usize },
    Eof,
}

impl<'buf> ChunkScanner<'buf> {
    pub fn new(buf: &'buf [u8], target: ChunkType) -> Self {
        Self {
            buf,
            target,
            cursor: 0,
            state: ScanState::Scanning,
        }
    }

    pub fn run(&mut self) -> ScanOutcome {
        let tag = self.target.fourcc();
        loop {
            match self.state {
                ScanState::Scanning => {
                    let rest = &self.buf[self.cursor..];
                    match rest.iter().position(|&b| b == tag[0] || b == IDAT[0]) {
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
                    let window = self.buf.get(at..at + TYPE_SIZE);
                    self.state = if window == Some(&tag[..]) && at >= LENGTH_SIZE {
                        ScanState::Found { at }
                    } else if window == Some(&IDAT[..]) {
                        ScanState::ImageData { at }
                    } else {
                        ScanState::Scanning
                    };
                }
                ScanState::ImageData { at } => {
                    if self.target.must_precede_image_data() {
                        tracing::debug!(at, target = %self.target, "IDAT reached");
                        self.state = ScanState::Eof;
                        return ScanOutcome::ImageDataReached { type_offset: at };
                    }
                    tracing::trace!(at, "Skipping IDAT tag");
                    self.cursor = at + TYPE_SIZE;
                    self.state = ScanState::Scanning;
                }
                ScanState::Found { at } => {
                    self.state = ScanState::Scanning;
                    return ScanOutcome::Found { type_offset: at };
                }
                ScanState::Eof => return ScanOutcome::Eof,
            }
        }
    }
}
