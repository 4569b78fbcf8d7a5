/// Scope-introducing and declaring forms.
///
/// This chunk contains `decl` (function declarations and their parameter lists), `if` (one scope shared by both
/// branches) and `var` (variable bindings).
impl<'a> Parser<'a> {
    // ========================================================================
    // Function declarations
    // ========================================================================

    /// `(decl name [(params)] Type body...)`
    ///
    /// Only legal in the top scope; anywhere else the whole form is reported and skipped.
    fn decl_expr(&mut self, open: Pos) -> Option<DeclExpr> {
        if self.cur_scope != self.top_scope {
            self.error("function declarations may only be used in top-level scope");
            self.skip_form();
            return None;
        }

        let decl = self.expect(TokenKind::Keyword(KeywordId::Decl));
        let mut name = self.ident();

        let scope = self.open_scope();
        let params = if self.tok == TokenKind::LPAREN {
            self.next();
            self.param_list()
        } else {
            Vec::new()
        };
        let ty = self.ident();
        let body = self.decl_body();
        let body = self.check_expr(body).map(Box::new);
        let close = self.expect(TokenKind::RPAREN);
        self.close_scope();

        let span = Span::parens(open, close);
        self.declare(&mut name, ObjKind::Decl, Some(ty.clone()), span);

        Some(DeclExpr {
            span,
            decl,
            name,
            ty,
            params,
            body,
            scope,
        })
    }

    /// Parse a function body: the first expression in body mode, then any further siblings.
    ///
    /// Several body expressions are wrapped in one [`ExprList`] spanning them.
    fn decl_body(&mut self) -> Option<Expr> {
        let first = self.body_expr();
        let rest = self.siblings();
        if rest.is_empty() {
            return first;
        }

        let list: Vec<Expr> = first.into_iter().chain(rest).collect();
        let span = match (list.first(), list.last()) {
            (Some(first), Some(last)) => Span::new(first.pos(), last.end()),
            _ => Span::default(),
        };
        Some(Expr::List(ExprList { span, list }))
    }

    /// Parse the parameter groups of a declaration, after the opening `(`.
    ///
    /// Groups are separated by `,`. Within a group, the last identifier is the type of every identifier before it:
    /// `(x y Int, z Float)`. Each parameter is declared in the (already open) function scope.
    fn param_list(&mut self) -> Vec<Ident> {
        let mut params = Vec::new();
        let mut group = Vec::new();
        let mut groups = 0usize;

        while !self.at_close() {
            match self.tok {
                TokenKind::COMMA => {
                    let comma = self.pos;
                    self.next();
                    self.close_param_group(&mut group, &mut params, comma);
                    groups += 1;
                }
                TokenKind::Ident => group.push(self.ident()),
                _ => {
                    self.expect(TokenKind::Ident);
                }
            }
        }

        let close = self.pos;
        if groups > 0 || !group.is_empty() {
            self.close_param_group(&mut group, &mut params, close);
        }
        self.expect(TokenKind::RPAREN);
        params
    }

    /// Stamp the pending group with its type and declare its names. `end` is where the group stopped.
    fn close_param_group(&mut self, group: &mut Vec<Ident>, params: &mut Vec<Ident>, end: Pos) {
        let Some(ty) = group.pop() else {
            self.error_at(end, "empty parameter group not allowed");
            return;
        };
        if group.is_empty() {
            self.error_at(ty.pos, format!("parameter group has type '{}' but no names", ty.name));
            return;
        }

        for mut param in group.drain(..) {
            let definition = param.span();
            self.declare(&mut param, ObjKind::Var, Some(ty.clone()), definition);
            params.push(param);
        }
    }

    // ========================================================================
    // Conditionals
    // ========================================================================

    /// `(if cond [Type] then [else])`
    fn if_expr(&mut self, open: Pos) -> IfExpr {
        let if_pos = self.expect(TokenKind::Keyword(KeywordId::If));
        let cond = self.gen_expr(BodyMode::Single).map(Box::new);
        let ty = (self.tok == TokenKind::Ident).then(|| self.ident());

        let scope = self.open_scope();
        let then = self.body_expr().map(Box::new);
        let els = if self.at_close() {
            None
        } else {
            self.gen_expr(BodyMode::Sequence).map(Box::new)
        };
        self.close_scope();
        let close = self.expect(TokenKind::RPAREN);

        IfExpr {
            span: Span::parens(open, close),
            if_pos,
            ty,
            cond,
            then,
            els,
            scope,
        }
    }

    // ========================================================================
    // Variables
    // ========================================================================

    /// `(var name Type)`, `(var name value)`, `(var name Type value)` or `(var (= name value) [Type])`.
    fn var_expr(&mut self, open: Pos) -> Option<VarExpr> {
        let var = self.expect(TokenKind::Keyword(KeywordId::Var));

        let (mut name, mut ty, value) = match self.tok {
            TokenKind::Ident => {
                let name = self.ident();
                let ty = (self.tok == TokenKind::Ident).then(|| self.ident());
                let value = if self.at_close() {
                    None
                } else {
                    let value = self.gen_expr(BodyMode::Single);
                    self.check_expr(value)
                };
                if ty.is_none() && value.is_none() {
                    self.error_at(name.pos, format!("variable '{}' needs a type or a value", name.name));
                }
                (name, ty, value.map(Box::new))
            }
            TokenKind::LPAREN => {
                let inner = self.pos;
                self.next();
                let assign = self.assign_expr(inner);
                (assign.name, None, assign.value)
            }
            _ => {
                self.error("expected identifier or assignment");
                self.skip_form();
                return None;
            }
        };
        if ty.is_none() && self.tok == TokenKind::Ident {
            ty = Some(self.ident());
        }
        let close = self.expect(TokenKind::RPAREN);

        let span = Span::parens(open, close);
        let object = self.declare(&mut name, ObjKind::Var, ty.clone(), span);

        Some(VarExpr {
            span,
            var,
            name,
            ty,
            value,
            object,
        })
    }
}
