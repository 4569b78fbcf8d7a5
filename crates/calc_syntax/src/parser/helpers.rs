/// Token-stream and bookkeeping helpers.
///
/// This chunk contains the low-level cursor operations (advance/expect), diagnostic recording, and scope
/// open/close/declare helpers used by every production.
impl<'a> Parser<'a> {
    // ========================================================================
    // Token helpers
    // ========================================================================

    fn next(&mut self) {
        let tok = self.lexer.scan();
        self.tok = tok.kind;
        self.lit = tok.lit;
        self.pos = tok.pos;
    }

    /// Consume the current token, recording a diagnostic if it is not `kind`.
    ///
    /// Always advances, so a caller can never loop on the offending token.
    fn expect(&mut self, kind: TokenKind) -> Pos {
        let pos = self.pos;
        if self.tok != kind {
            self.error(format!("Expected '{}' got '{}'", kind, self.lit));
        }
        self.next();
        pos
    }

    /// `true` at a closing paren or end-of-input: the end of any run of sibling expressions.
    fn at_close(&self) -> bool {
        matches!(self.tok, TokenKind::RPAREN | TokenKind::Eof)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Resolve `p` in the file being parsed, or in an earlier file of the batch.
    ///
    /// ## Panics
    /// - In debug builds, if no file of the batch owns `p` (a symbol declared through a different [`FileSet`]).
    ///   Release builds fall back to the empty [`Position`].
    fn position(&self, p: Pos) -> Position {
        let map = self.lexer.source_map();
        if map.contains(p) {
            return map.position(p);
        }
        let position = self.files.position(p);
        debug_assert!(position.is_some(), "position {p:?} is outside every file of the batch");
        position.unwrap_or_default()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.error_at(self.pos, message);
    }

    fn error_at(&mut self, pos: Pos, message: impl Into<String>) {
        let position = self.position(pos);
        self.diags.add(pos, position, message);
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    fn open_scope(&mut self) -> ScopeId {
        self.cur_scope = self.scopes.open(Some(self.cur_scope));
        self.cur_scope
    }

    fn close_scope(&mut self) {
        tracing::trace!(scope = self.cur_scope.0, "close scope");
        self.cur_scope = self.scopes.parent(self.cur_scope).unwrap_or(self.top_scope);
    }

    /// Declare `name` in the current scope and point it at the new symbol.
    ///
    /// A name already bound in this exact scope is a redeclaration: the diagnostic quotes where the original was
    /// declared, and the original binding is kept.
    fn declare(&mut self, name: &mut Ident, kind: ObjKind, ty: Option<Ident>, definition: Span) -> SymbolId {
        let symbol = self.scopes.add_object(Object {
            name_pos: name.pos,
            name: name.name.clone(),
            kind,
            ty,
            definition,
        });

        if let Some(previous) = self.scopes.insert(self.cur_scope, symbol) {
            let original = self.position(self.scopes.object(previous).name_pos);
            let message = match kind {
                ObjKind::Decl => format!("redeclaration of function not allowed, originally declared at: {original}"),
                ObjKind::Var => format!("redeclaration of variable not allowed; original declaration at: {original}"),
            };
            self.error_at(name.pos, message);
        }

        name.symbol = Some(symbol);
        symbol
    }
}
