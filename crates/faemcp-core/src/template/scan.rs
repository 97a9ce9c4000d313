//! Placeholder scanning
//!
//! The one grammar shared by the loader and the substitutor. Matching follows
//! leftmost-first semantics: at every `{{` the scanner tries to read
//! `name ':' description '}}'`, and on failure moves on to the next candidate.

/// A single `{{name:description}}` occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Placeholder<'a> {
    /// Variable name, whitespace-trimmed
    pub name: &'a str,
    /// Description text, whitespace-trimmed; may contain newlines
    pub description: &'a str,
    /// Absolute byte position of `{{`
    pub start: usize,
    /// Total length in bytes including `{{` and `}}`
    pub length: usize,
    /// Line number where the placeholder starts
    pub line: usize,
}

impl Placeholder<'_> {
    /// Byte position just past the closing `}}`
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Result of trying to read a placeholder at one `{{`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchAttempt {
    /// A complete placeholder: `:` at `colon`, closing `}}` ends before `end`
    Matched { colon: usize, end: usize },

    /// No placeholder starts here
    ///
    /// Every candidate `{{` before `resume` would stop at the same delimiter
    /// and fail the same way, so scanning continues from `resume`.
    Rejected { resume: usize },
}

/// Try to match a placeholder whose `{{` sits at `start`
pub(crate) fn match_at(bytes: &[u8], start: usize) -> MatchAttempt {
    let name_start = start + 2;
    let name_end = scan_until(bytes, name_start, |b| b == b':' || b == b'}');

    if name_end == name_start || bytes.get(name_end) != Some(&b':') {
        return MatchAttempt::Rejected {
            resume: name_end.saturating_sub(1).max(start + 1),
        };
    }

    let desc_start = name_end + 1;
    let desc_end = scan_until(bytes, desc_start, |b| b == b'}');

    // An empty description still forms a placeholder
    if bytes.get(desc_end + 1) != Some(&b'}') {
        return MatchAttempt::Rejected {
            resume: name_end.saturating_sub(1).max(start + 1),
        };
    }

    MatchAttempt::Matched {
        colon: name_end,
        end: desc_end + 2,
    }
}

/// Advance from `from` until `stop` accepts a byte or input ends
fn scan_until(bytes: &[u8], from: usize, stop: impl Fn(u8) -> bool) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|&b| stop(b))
        .map_or(bytes.len(), |offset| from + offset)
}

/// Iterator over placeholders in template text, left to right
///
/// Position only moves forward; line numbers are counted incrementally.
pub(crate) struct PlaceholderScan<'a> {
    text: &'a str,
    bytes: &'a [u8],
    /// Current byte position
    pos: usize,
    /// Line number at `pos`
    line: usize,
}

impl<'a> PlaceholderScan<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    /// Move forward to `target`, counting newlines on the way
    fn advance_to(&mut self, target: usize) {
        let target = target.min(self.bytes.len());
        if target > self.pos {
            self.line += self.bytes[self.pos..target]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.pos = target;
        }
    }

    fn next_open_braces(&self) -> Option<usize> {
        self.bytes
            .get(self.pos..)?
            .windows(2)
            .position(|w| w == b"{{")
            .map(|offset| self.pos + offset)
    }
}

impl<'a> Iterator for PlaceholderScan<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Placeholder<'a>> {
        loop {
            let start = self.next_open_braces()?;
            self.advance_to(start);

            match match_at(self.bytes, start) {
                MatchAttempt::Matched { colon, end } => {
                    // Delimiters are ASCII, so every slice bound is a char boundary
                    let placeholder = Placeholder {
                        name: self.text[start + 2..colon].trim(),
                        description: self.text[colon + 1..end - 2].trim(),
                        start,
                        length: end - start,
                        line: self.line,
                    };
                    self.advance_to(end);
                    return Some(placeholder);
                }
                MatchAttempt::Rejected { resume } => self.advance_to(resume),
            }
        }
    }
}
