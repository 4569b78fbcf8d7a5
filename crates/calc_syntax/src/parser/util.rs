/// Miscellaneous parser utilities.
///
/// This chunk contains small shared helpers that don't cleanly fit into "decl" or "expr": leaf parsing,
/// the expression-validity check and form-level error recovery.
impl<'a> Parser<'a> {
    // ========================================================================
    // Leaves
    // ========================================================================

    /// Parse an identifier in a binding or type position (no name resolution).
    fn ident(&mut self) -> Ident {
        let name = self.lit;
        let pos = self.expect(TokenKind::Ident);
        Ident::new(pos, name)
    }

    /// Parse an identifier that refers to something, resolving it through the current scope chain.
    ///
    /// Unresolved names are fine here (forward and cross-file references); they just carry no symbol.
    fn ident_ref(&mut self) -> Ident {
        let mut ident = self.ident();
        ident.symbol = self.scopes.lookup(self.cur_scope, &ident.name);
        ident
    }

    fn basic_lit(&mut self) -> BasicLit {
        let kind = match self.tok {
            TokenKind::Float => LitKind::Float,
            _ => LitKind::Integer,
        };
        let lit = BasicLit {
            pos: self.pos,
            kind,
            lit: self.lit.to_string(),
        };
        self.next();
        lit
    }

    // ========================================================================
    // Validity
    // ========================================================================

    /// Check an expression sitting where a value is required (bodies, assignment values, unary operands).
    fn check_expr(&mut self, expr: Option<Expr>) -> Option<Expr> {
        if let Some(expr) = &expr {
            self.check_value(expr);
        }
        expr
    }

    fn check_value(&mut self, expr: &Expr) {
        match expr {
            Expr::Lit(_) | Expr::Binary(_) | Expr::Call(_) | Expr::Ident(_) | Expr::If(_) | Expr::Unary(_) => {}
            // only the last expression of a sequence produces the value
            Expr::List(list) => {
                if let Some(last) = list.list.last() {
                    self.check_value(last);
                }
            }
            Expr::Assign(_) | Expr::Decl(_) | Expr::Var(_) => {
                self.error_at(expr.pos(), "expression has no side-effects");
            }
        }
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Skip one whole expression starting at the current token: any run of prefix operators, then either a
    /// parenthesized form or a single token.
    fn skip_nested(&mut self) {
        while matches!(self.tok, TokenKind::Operator(op) if operators::is_prefix(op)) {
            self.next();
        }
        if self.tok == TokenKind::LPAREN {
            self.next();
            self.skip_form();
        } else if !self.at_close() {
            self.next();
        }
    }

    /// Skip the rest of a parenthesized form whose `(` was already consumed, through its balancing `)`.
    fn skip_form(&mut self) {
        let mut depth = 1usize;
        loop {
            match self.tok {
                TokenKind::Eof => return,
                TokenKind::LPAREN => depth += 1,
                TokenKind::RPAREN => {
                    depth -= 1;
                    if depth == 0 {
                        self.next();
                        return;
                    }
                }
                _ => {}
            }
            self.next();
        }
    }
}
