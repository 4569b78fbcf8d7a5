//! Abstract Syntax Tree definitions for Calc
//!
//! Every node knows where it starts ([`Node::pos`], its first character) and where it ends ([`Node::end`], one past
//! its last character). Parenthesized forms span from their `(` through their `)`.
//!
//! Sub-expressions the parser could not produce are `None`, never a placeholder node, so "nothing was parsed here"
//! cannot be confused with a real expression.

use calc_core::lang::operators::{self, OperatorId};

use crate::scope::{ScopeId, ScopeTree, SymbolId};
use crate::source::Pos;

/// Source span: `start` is the first character, `end` is one past the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Span of a parenthesized form, given the positions of its `(` and `)`.
    pub fn parens(open: Pos, close: Pos) -> Self {
        Self {
            start: open,
            end: close.offset(1),
        }
    }
}

/// The "has a start and an end" capability shared by all nodes.
pub trait Node {
    fn pos(&self) -> Pos;
    fn end(&self) -> Pos;

    fn span(&self) -> Span {
        Span::new(self.pos(), self.end())
    }
}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Integer,
    Float,
}

/// A numeric literal, kept as its raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub pos: Pos,
    pub kind: LitKind,
    pub lit: String,
}

impl Node for BasicLit {
    fn pos(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.pos.offset(self.lit.len())
    }
}

/// A name, with the symbol it resolved to when the parser saw it (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub pos: Pos,
    pub name: String,
    pub symbol: Option<SymbolId>,
}

impl Ident {
    pub fn new(pos: Pos, name: impl Into<String>) -> Self {
        Self {
            pos,
            name: name.into(),
            symbol: None,
        }
    }
}

impl Node for Ident {
    fn pos(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.pos.offset(self.name.len())
    }
}

// ============================================================================
// Forms
// ============================================================================

/// `(op a b ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub span: Span,
    pub op: OperatorId,
    pub op_pos: Pos,
    pub list: Vec<Expr>,
}

/// `-x`
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op_pos: Pos,
    pub op: OperatorId,
    pub value: Option<Box<Expr>>,
}

impl Node for UnaryExpr {
    fn pos(&self) -> Pos {
        self.op_pos
    }
    fn end(&self) -> Pos {
        match &self.value {
            Some(value) => value.end(),
            None => self.op_pos.offset(operators::as_str(self.op).len()),
        }
    }
}

/// `(= name value)`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub span: Span,
    pub equal: Pos,
    pub name: Ident,
    pub value: Option<Box<Expr>>,
}

/// `(name args...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub span: Span,
    pub name: Ident,
    pub args: Vec<Expr>,
}

/// `(decl name [(params)] Type body...)`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclExpr {
    pub span: Span,
    pub decl: Pos,
    pub name: Ident,
    /// Return type.
    pub ty: Ident,
    pub params: Vec<Ident>,
    pub body: Option<Box<Expr>>,
    /// Scope holding the parameters and everything declared in the body.
    pub scope: ScopeId,
}

/// `(var name [Type] [value])` or `(var (= name value) [Type])`
#[derive(Debug, Clone, PartialEq)]
pub struct VarExpr {
    pub span: Span,
    pub var: Pos,
    pub name: Ident,
    pub ty: Option<Ident>,
    pub value: Option<Box<Expr>>,
    /// The symbol this form declared.
    pub object: SymbolId,
}

/// `(if cond [Type] then [else])`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub span: Span,
    pub if_pos: Pos,
    pub ty: Option<Ident>,
    pub cond: Option<Box<Expr>>,
    pub then: Option<Box<Expr>>,
    pub els: Option<Box<Expr>>,
    /// Single scope shared by both branches.
    pub scope: ScopeId,
}

/// A body-sequence: `((a) (b) c)`, or several body expressions of one form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprList {
    pub span: Span,
    pub list: Vec<Expr>,
}

macro_rules! spanned_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Node for $ty {
                fn pos(&self) -> Pos {
                    self.span.start
                }
                fn end(&self) -> Pos {
                    self.span.end
                }
            }
        )*
    };
}

spanned_node!(BinaryExpr, AssignExpr, CallExpr, DeclExpr, VarExpr, IfExpr, ExprList);

// ============================================================================
// Expressions
// ============================================================================

/// Closed set of expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Lit(BasicLit),
    Ident(Ident),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Assign(AssignExpr),
    Call(CallExpr),
    Decl(DeclExpr),
    Var(VarExpr),
    If(IfExpr),
    List(ExprList),
}

impl Node for Expr {
    fn pos(&self) -> Pos {
        match self {
            Expr::Lit(e) => e.pos(),
            Expr::Ident(e) => e.pos(),
            Expr::Binary(e) => e.pos(),
            Expr::Unary(e) => e.pos(),
            Expr::Assign(e) => e.pos(),
            Expr::Call(e) => e.pos(),
            Expr::Decl(e) => e.pos(),
            Expr::Var(e) => e.pos(),
            Expr::If(e) => e.pos(),
            Expr::List(e) => e.pos(),
        }
    }

    fn end(&self) -> Pos {
        match self {
            Expr::Lit(e) => e.end(),
            Expr::Ident(e) => e.end(),
            Expr::Binary(e) => e.end(),
            Expr::Unary(e) => e.end(),
            Expr::Assign(e) => e.end(),
            Expr::Call(e) => e.end(),
            Expr::Decl(e) => e.end(),
            Expr::Var(e) => e.end(),
            Expr::If(e) => e.end(),
            Expr::List(e) => e.end(),
        }
    }
}

impl Expr {
    /// Visit this expression and every sub-expression, parents before children, in source order.
    ///
    /// Identifiers that are part of a form's syntax (names, types, parameters) are not visited; only expression
    /// positions are.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Expr)) {
        f(self);
        let children: Vec<&Expr> = match self {
            Expr::Lit(_) | Expr::Ident(_) => Vec::new(),
            Expr::Binary(e) => e.list.iter().collect(),
            Expr::Call(e) => e.args.iter().collect(),
            Expr::List(e) => e.list.iter().collect(),
            Expr::Unary(e) => e.value.as_deref().into_iter().collect(),
            Expr::Assign(e) => e.value.as_deref().into_iter().collect(),
            Expr::Decl(e) => e.body.as_deref().into_iter().collect(),
            Expr::Var(e) => e.value.as_deref().into_iter().collect(),
            Expr::If(e) => [&e.cond, &e.then, &e.els]
                .into_iter()
                .filter_map(|b| b.as_deref())
                .collect(),
        };
        for child in children {
            child.walk(f);
        }
    }
}

// ============================================================================
// Files and packages
// ============================================================================

/// One parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub name: String,
    /// Top scope the file's declarations were inserted into (shared by every file of a package).
    pub scope: ScopeId,
    /// Top-level expressions, in source order.
    pub root: Vec<Expr>,
}

impl File {
    /// Top-level function declarations of this file.
    pub fn decls(&self) -> impl Iterator<Item = &DeclExpr> {
        self.root.iter().filter_map(|e| match e {
            Expr::Decl(d) => Some(d),
            _ => None,
        })
    }
}

/// The files of one directory, parsed against a single shared top scope.
#[derive(Debug, Clone)]
pub struct Package {
    pub scopes: ScopeTree,
    pub scope: ScopeId,
    pub files: Vec<File>,
}
