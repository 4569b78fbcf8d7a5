/// Expression parsing.
///
/// This chunk contains the generic-expression dispatch, the parenthesized-form dispatch and the forms that carry
/// no scope of their own (binary, unary, assignment, call, body-sequence).
impl<'a> Parser<'a> {
    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Parse one expression, choosing the production from the current token alone.
    ///
    /// Tokens that cannot start an expression are reported and skipped. Forms and prefix operators count towards
    /// [`MAX_NESTING`]; past it the whole expression is reported once and skipped.
    fn gen_expr(&mut self, mode: BodyMode) -> Option<Expr> {
        let nests = matches!(self.tok, TokenKind::LPAREN)
            || matches!(self.tok, TokenKind::Operator(op) if operators::is_prefix(op));
        if nests && self.depth >= MAX_NESTING {
            self.error("expression nested too deeply");
            self.skip_nested();
            return None;
        }

        match self.tok {
            TokenKind::LPAREN => self.nested(|p| p.paren_expr(mode)),
            TokenKind::Ident => Some(Expr::Ident(self.ident_ref())),
            TokenKind::Integer | TokenKind::Float => Some(Expr::Lit(self.basic_lit())),
            TokenKind::Operator(op) if operators::is_prefix(op) => {
                Some(Expr::Unary(self.nested(|p| p.unary_expr(op))))
            }
            TokenKind::Illegal => {
                self.error(format!("illegal token '{}'", self.lit));
                self.next();
                None
            }
            _ => {
                self.error(format!("Expected expression, got '{}'", self.lit));
                self.next();
                None
            }
        }
    }

    /// Parse a parenthesized form, starting at its `(`.
    fn paren_expr(&mut self, mode: BodyMode) -> Option<Expr> {
        let open = self.expect(TokenKind::LPAREN);
        if mode == BodyMode::Sequence && self.tok == TokenKind::LPAREN {
            return Some(Expr::List(self.expr_list(open)));
        }

        match self.tok {
            TokenKind::Operator(op) if operators::is_binary(op) => Some(Expr::Binary(self.binary_expr(open, op))),
            TokenKind::Operator(OperatorId::Assign) => Some(Expr::Assign(self.assign_expr(open))),
            TokenKind::Keyword(KeywordId::Decl) => self.decl_expr(open).map(Expr::Decl),
            TokenKind::Keyword(KeywordId::If) => Some(Expr::If(self.if_expr(open))),
            TokenKind::Keyword(KeywordId::Var) => self.var_expr(open).map(Expr::Var),
            TokenKind::Ident => Some(Expr::Call(self.call_expr(open))),
            _ => {
                let message = match mode {
                    BodyMode::Sequence => format!("Expected expression but got '{}'", self.lit),
                    BodyMode::Single => format!("Expected operator, keyword or identifier but got '{}'", self.lit),
                };
                self.error(message);
                self.skip_form();
                None
            }
        }
    }

    /// Parse sibling expressions up to (not including) the closing paren or end-of-input.
    fn siblings(&mut self) -> Vec<Expr> {
        let mut list = Vec::new();
        while !self.at_close() {
            if let Some(expr) = self.gen_expr(BodyMode::Single) {
                list.push(expr);
            }
        }
        list
    }

    // ========================================================================
    // Forms
    // ========================================================================

    /// `(op a b ...)` with at least two operands.
    fn binary_expr(&mut self, open: Pos, op: OperatorId) -> BinaryExpr {
        let op_pos = self.pos;
        self.next();

        let list = self.siblings();
        if list.len() < 2 {
            self.error("binary expression must have at least two operands");
        }
        let close = self.expect(TokenKind::RPAREN);

        BinaryExpr {
            span: Span::parens(open, close),
            op,
            op_pos,
            list,
        }
    }

    /// `-x`
    fn unary_expr(&mut self, op: OperatorId) -> UnaryExpr {
        let op_pos = self.pos;
        self.next();
        let value = self.gen_expr(BodyMode::Single);
        UnaryExpr {
            op_pos,
            op,
            value: self.check_expr(value).map(Box::new),
        }
    }

    /// `(= name value)`
    fn assign_expr(&mut self, open: Pos) -> AssignExpr {
        let equal = self.expect(TokenKind::Operator(OperatorId::Assign));
        let name = self.ident_ref();
        let value = self.gen_expr(BodyMode::Single);
        let value = self.check_expr(value).map(Box::new);
        let close = self.expect(TokenKind::RPAREN);

        AssignExpr {
            span: Span::parens(open, close),
            equal,
            name,
            value,
        }
    }

    /// `(name args...)`
    fn call_expr(&mut self, open: Pos) -> CallExpr {
        let name = self.ident_ref();
        let args = self.siblings();
        let close = self.expect(TokenKind::RPAREN);

        CallExpr {
            span: Span::parens(open, close),
            name,
            args,
        }
    }

    /// `((a) (b) c)`: a body-sequence. Its own `(` is already consumed.
    fn expr_list(&mut self, open: Pos) -> ExprList {
        let list = self.siblings();
        if list.is_empty() {
            self.error("empty expression list not allowed");
        }
        let close = self.expect(TokenKind::RPAREN);

        ExprList {
            span: Span::parens(open, close),
            list,
        }
    }

    /// Parse the expression in a body position (function body, `if` branch).
    ///
    /// A missing body is reported without consuming the closing paren, so the enclosing form still closes.
    fn body_expr(&mut self) -> Option<Expr> {
        if self.at_close() {
            self.error(format!("Expected expression, got '{}'", self.lit));
            return None;
        }
        self.gen_expr(BodyMode::Sequence)
    }
}
