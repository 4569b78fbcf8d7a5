/// Parser core types and entrypoints.
///
/// This chunk defines the [`Parser`] type, its constructor and the two top-level productions (`parse_file` and
/// `parse_expr`).
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyMode {
    /// The position holds exactly one expression; a parenthesized form must be a special form.
    Single,
    /// The position is a body: `((a) (b))` is read as a sequence of sibling expressions.
    Sequence,
}

/// Deepest nesting of parenthesized forms and prefix operators the parser descends into.
///
/// Anything nested deeper is reported once and skipped, so hostile input cannot exhaust the stack.
pub const MAX_NESTING: usize = 256;

/// Parser state.
///
/// ## Notes
/// - The parser never stops at the first problem: malformed input produces a diagnostic and a best-effort (possibly
///   absent) node, and parsing carries on with the next token.
/// - Scopes opened while parsing stay in the [`ScopeTree`]; the nodes that introduced them keep their ids.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Files parsed earlier in the same batch, for resolving positions of symbols declared there.
    files: &'a FileSet,
    scopes: &'a mut ScopeTree,
    diags: &'a mut Diagnostics,
    top_scope: ScopeId,
    cur_scope: ScopeId,
    /// Enclosing forms and prefix operators of the expression being parsed.
    depth: usize,

    tok: TokenKind,
    lit: &'a str,
    pos: Pos,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source` and prime it with the first token.
    ///
    /// ## Parameters
    /// - `source`: Text of the file.
    /// - `map`: The file's source map (usually from [`FileSet::new_map`]); take it back with
    ///   [`Parser::into_source_map`] and register it in the set once parsing is done.
    /// - `files`: Files already parsed in this batch.
    /// - `scopes` / `top`: Scope tree and the top scope declarations are inserted into.
    /// - `diags`: Sink for diagnostics.
    pub fn new(
        source: &'a str,
        map: SourceMap,
        files: &'a FileSet,
        scopes: &'a mut ScopeTree,
        top: ScopeId,
        diags: &'a mut Diagnostics,
    ) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source, map),
            files,
            scopes,
            diags,
            top_scope: top,
            cur_scope: top,
            depth: 0,
            tok: TokenKind::Eof,
            lit: "",
            pos: Pos::NONE,
        };
        parser.next();
        parser
    }

    /// Parse generic expressions until end-of-input.
    ///
    /// The top scope must hold at least one declaration afterwards; a diagnostic is recorded otherwise.
    pub fn parse_file(&mut self, name: &str) -> File {
        let mut root = Vec::new();
        while self.tok != TokenKind::Eof {
            if let Some(expr) = self.gen_expr(BodyMode::Single) {
                root.push(expr);
            }
        }

        if self.scopes.scope(self.top_scope).is_empty() {
            self.error("reached end of file without any declarations");
        }

        File {
            name: name.to_string(),
            scope: self.top_scope,
            root,
        }
    }

    /// Parse a single generic expression.
    pub fn parse_expr(&mut self) -> Option<Expr> {
        self.gen_expr(BodyMode::Single)
    }

    /// Give back the file's source map, with every newline of the parsed text recorded.
    pub fn into_source_map(self) -> SourceMap {
        self.lexer.into_source_map()
    }
}
