//! Syntax diagnostics for Calc
//!
//! A [`Diagnostic`] is a non-fatal `(position, message)` record. The parser appends them to a [`Diagnostics`]
//! collection it is handed explicitly and keeps going; a parse failed iff the collection is non-empty afterwards.
//!
//! [`render`] turns a collection into human-readable reports with source context, via `miette`.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};

use crate::source::{FileSet, Pos, Position};

/// One syntax or semantic issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub pos: Pos,
    /// `pos`, resolved when the diagnostic was recorded.
    pub position: Position,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

/// Ordered, append-only list of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pos: Pos, position: Position, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            pos,
            position,
            message: message.into(),
        };
        tracing::debug!(%diagnostic, "syntax diagnostic");
        self.items.push(diagnostic);
    }

    /// Append every diagnostic of `other`, keeping their order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.items.as_slice() {
            [] => f.write_str("no errors"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more errors)", rest.len()),
        }
    }
}

impl std::error::Error for Diagnostics {}

// ============================================================================
// Rendering
// ============================================================================

/// A diagnostic paired with the source it points into, for `miette` rendering.
#[derive(Debug, MietteDiagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(calc::syntax))]
pub struct SyntaxReport {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl SyntaxReport {
    /// Attach the source text of whichever file of `files` owns the diagnostic.
    ///
    /// Diagnostics whose position is unknown to `files` get an empty source and no label.
    pub fn new(diagnostic: &Diagnostic, files: &FileSet) -> Self {
        match files.file(diagnostic.pos) {
            Some(map) => {
                let offset = map.offset(diagnostic.pos);
                let len = usize::from(offset < map.size());
                Self {
                    message: diagnostic.message.clone(),
                    src: NamedSource::new(map.name(), map.source().to_string()),
                    span: Some((offset, len).into()),
                }
            }
            None => Self {
                message: diagnostic.message.clone(),
                src: NamedSource::new(diagnostic.position.filename.clone(), String::new()),
                span: None,
            },
        }
    }
}

/// Render every diagnostic as a graphical report with source context, one after the other.
pub fn render(diagnostics: &Diagnostics, files: &FileSet) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for diagnostic in diagnostics {
        let report = SyntaxReport::new(diagnostic, files);
        if handler.render_report(&mut out, &report).is_err() {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
    }
    out
}
