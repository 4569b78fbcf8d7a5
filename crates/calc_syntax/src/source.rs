//! Source positions: absolute offsets, per-file line tables, and human-readable row/column positions.
//!
//! Every token and AST node carries a [`Pos`], an absolute 1-based offset into the logical buffer formed by all
//! files of one [`FileSet`]. A [`SourceMap`] owns one file's text and the newline offsets the lexer reported while
//! scanning it, and turns a `Pos` back into a [`Position`] (`file:row:col`) for diagnostics.
//!
//! ## Notes
//! - Files in one set never overlap: each file's base is one past the previous file's end-of-input position.
//! - Handing a `SourceMap` an offset or position it does not own is a programming error and panics; it is never a
//!   diagnostic.

use std::fmt;
use std::sync::Arc;

/// Absolute offset into the buffer of a [`FileSet`].
///
/// `Pos::NONE` (zero) means "no position". Every real position is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos(pub usize);

impl Pos {
    /// The "no position" sentinel.
    pub const NONE: Pos = Pos(0);

    /// Return `true` unless this is [`Pos::NONE`].
    pub const fn is_valid(self) -> bool {
        self.0 != Pos::NONE.0
    }

    /// Return the position `n` bytes further on.
    pub const fn offset(self, n: usize) -> Pos {
        Pos(self.0 + n)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved, human-readable source location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
    pub filename: String,
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filename.is_empty() {
            write!(f, "{}:{}", self.row, self.col)
        } else {
            write!(f, "{}:{}:{}", self.filename, self.row, self.col)
        }
    }
}

// ============================================================================
// SourceMap
// ============================================================================

/// Line table and text of a single source file.
#[derive(Debug, Clone)]
pub struct SourceMap {
    name: String,
    base: usize,
    source: Arc<str>,
    lines: Vec<usize>,
}

impl SourceMap {
    /// Create a map for `source`, whose first byte lives at absolute position `base`.
    ///
    /// ## Panics
    /// - If `base` is zero (that value is reserved for [`Pos::NONE`]).
    pub fn new(name: impl Into<String>, base: usize, source: &str) -> Self {
        assert!(base > 0, "file base must be at least 1");
        Self {
            name: name.into(),
            base,
            source: Arc::from(source),
            lines: Vec::with_capacity(16),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute position of the first byte.
    pub fn base(&self) -> Pos {
        Pos(self.base)
    }

    /// Length of the source text in bytes.
    pub fn size(&self) -> usize {
        self.source.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of newlines recorded so far.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Return `true` if `p` falls inside this file, counting its end-of-input position.
    pub fn contains(&self, p: Pos) -> bool {
        p.0 >= self.base && p.0 <= self.base + self.size()
    }

    /// Record the offset of a newline.
    ///
    /// Offsets outside the buffer are ignored. Calls must arrive in non-decreasing order, which the lexer guarantees
    /// by scanning left to right; a repeated offset is recorded once.
    pub fn add_line(&mut self, offset: usize) {
        if offset >= self.size() {
            return;
        }
        if let Some(&last) = self.lines.last() {
            debug_assert!(last <= offset, "newline offsets out of order: {offset} after {last}");
            if last >= offset {
                return;
            }
        }
        self.lines.push(offset);
    }

    /// Convert a file-relative byte offset to an absolute position.
    ///
    /// ## Panics
    /// - If `offset` is beyond the end of the buffer. The end itself (`offset == size`) is the end-of-input position.
    pub fn pos(&self, offset: usize) -> Pos {
        assert!(
            offset <= self.size(),
            "illegal file offset {offset} for '{}' (size {})",
            self.name,
            self.size()
        );
        Pos(self.base + offset)
    }

    /// Convert an absolute position back to a file-relative byte offset.
    ///
    /// ## Panics
    /// - If `p` does not belong to this file.
    pub fn offset(&self, p: Pos) -> usize {
        assert!(self.contains(p), "position {p} is outside '{}'", self.name);
        p.0 - self.base
    }

    /// Resolve `p` to a row and column.
    ///
    /// Rows start at 1 and advance once per recorded newline at or before `p`. A newline's own position is column 0
    /// of the row it opens; every other column is 1-based.
    ///
    /// ## Panics
    /// - If `p` does not belong to this file.
    pub fn position(&self, p: Pos) -> Position {
        assert!(self.contains(p), "position {p} is outside '{}'", self.name);

        let passed = self.lines.partition_point(|&nl| self.base + nl <= p.0);
        let col = match passed {
            0 => p.0 - self.base + 1,
            n => p.0 - (self.base + self.lines[n - 1]),
        };

        Position {
            filename: self.name.clone(),
            row: passed + 1,
            col,
        }
    }
}

// ============================================================================
// FileSet
// ============================================================================

/// The files of one parse batch, laid out back to back in a single absolute position space.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<SourceMap>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base for the next file: one past the end-of-input position of the last file.
    pub fn next_base(&self) -> usize {
        self.files.last().map_or(1, |f| f.base + f.size() + 1)
    }

    /// Create an (unregistered) map for the next file of the set.
    ///
    /// The lexer fills in the map's line table while scanning; hand it back with [`FileSet::insert`] afterwards.
    pub fn new_map(&self, name: &str, source: &str) -> SourceMap {
        SourceMap::new(name, self.next_base(), source)
    }

    /// Register a finished map.
    ///
    /// ## Panics
    /// - If the map's base overlaps a file already in the set.
    pub fn insert(&mut self, map: SourceMap) {
        assert!(
            map.base >= self.next_base(),
            "source map for '{}' overlaps an existing file",
            map.name
        );
        self.files.push(map);
    }

    /// Find the file owning `p`.
    pub fn file(&self, p: Pos) -> Option<&SourceMap> {
        if !p.is_valid() {
            return None;
        }
        let idx = self.files.partition_point(|f| f.base <= p.0);
        idx.checked_sub(1)
            .map(|i| &self.files[i])
            .filter(|f| f.contains(p))
    }

    /// Resolve `p` through whichever file owns it.
    pub fn position(&self, p: Pos) -> Option<Position> {
        self.file(p).map(|f| f.position(p))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
