//! Errors raised while loading Calc sources from disk.
//!
//! These are the fail-fast class: a file that cannot be read or has the wrong extension, or a directory with
//! nothing to parse, stops that unit immediately. Malformed source is reported through
//! [`Diagnostics`](crate::diagnostics::Diagnostics) and only becomes a [`LoadError::Syntax`] once parsing is complete.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostics::Diagnostics;

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", .path.display())]
    #[diagnostic(code(calc::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown file extension for '{}', must be .calc", .path.display())]
    #[diagnostic(code(calc::extension), help("rename the file or pass a directory of .calc files"))]
    Extension { path: PathBuf },

    #[error("no files to parse in '{}'; stop", .path.display())]
    #[diagnostic(code(calc::no_files))]
    NoFiles { path: PathBuf },

    #[error("{0}")]
    #[diagnostic(code(calc::syntax))]
    Syntax(Diagnostics),
}

impl LoadError {
    /// The collected diagnostics, if this is a syntax failure.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            LoadError::Syntax(diags) => Some(diags),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Pos, Position};

    #[test]
    fn test_messages() {
        let err = LoadError::Extension {
            path: PathBuf::from("dir/main.txt"),
        };
        assert_eq!(err.to_string(), "unknown file extension for 'dir/main.txt', must be .calc");

        let err = LoadError::NoFiles {
            path: PathBuf::from("empty"),
        };
        assert_eq!(err.to_string(), "no files to parse in 'empty'; stop");
        assert!(err.diagnostics().is_none());
    }

    #[test]
    fn test_syntax_error_wraps_diagnostics() {
        let mut diags = Diagnostics::new();
        let position = Position {
            filename: "a.calc".to_string(),
            row: 1,
            col: 5,
        };
        diags.add(Pos(5), position, "binary expression must have at least two operands");

        let err = LoadError::Syntax(diags);
        assert_eq!(
            err.to_string(),
            "a.calc:1:5: binary expression must have at least two operands"
        );
        assert_eq!(err.diagnostics().map(|d| d.count()), Some(1));
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("calc::syntax"));
    }
}
