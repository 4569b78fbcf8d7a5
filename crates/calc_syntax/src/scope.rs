//! Lexical scopes and the symbols declared in them.
//!
//! Scopes live in an arena ([`ScopeTree`]) and refer to their parent by index, so a scope can outlive the parser
//! call that opened it: `DeclExpr` and `IfExpr` keep the [`ScopeId`] of the scope they introduced, and a
//! [`Package`](crate::ast::Package) keeps the whole tree.
//!
//! ## Notes
//! - Symbols are inserted once, at declaration-parse time, and never removed or changed afterward.
//! - Name collisions are only checked within one scope level; a child scope may shadow any name of its parents.

use std::collections::HashMap;

use crate::ast::{Ident, Span};
use crate::source::Pos;

/// Index of a scope in its [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub usize);

/// Index of a symbol in its [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub usize);

/// What a symbol names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjKind {
    /// A function declared with `decl`.
    Decl,
    /// A variable (a `var` binding or a function parameter).
    Var,
}

/// A declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// Position of the declared name.
    pub name_pos: Pos,
    pub name: String,
    pub kind: ObjKind,
    /// Declared type, when the declaration spells one out.
    pub ty: Option<Ident>,
    /// Span of the defining node.
    pub definition: Span,
}

/// One level of lexical nesting.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    parent: Option<ScopeId>,
    symbols: HashMap<String, SymbolId>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Number of symbols declared at this level.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Arena of scopes and the symbols they own.
#[derive(Debug, Clone, Default)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    objects: Vec<Object>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new scope chained to `parent` (`None` for a root scope).
    pub fn open(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent,
            symbols: HashMap::new(),
        });
        tracing::trace!(scope = id.0, parent = ?parent.map(|p| p.0), "open scope");
        id
    }

    /// Parent of `id`; `None` for a root scope.
    ///
    /// Parsers "close" a scope by moving their cursor here. The child itself stays in the tree.
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes[id.0].parent
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    /// Store `object` in the arena without binding it to a name. Bind it with [`ScopeTree::insert`].
    pub fn add_object(&mut self, object: Object) -> SymbolId {
        let id = SymbolId(self.objects.len());
        self.objects.push(object);
        id
    }

    pub fn object(&self, id: SymbolId) -> &Object {
        &self.objects[id.0]
    }

    /// Bind `symbol` under its name in `scope`.
    ///
    /// ## Returns
    /// - `None` if the name was free at this level and `symbol` is now bound.
    /// - `Some(previous)` if this exact scope already binds the name; nothing is inserted and `previous` is unchanged.
    pub fn insert(&mut self, scope: ScopeId, symbol: SymbolId) -> Option<SymbolId> {
        let name = self.objects[symbol.0].name.clone();
        let symbols = &mut self.scopes[scope.0].symbols;
        if let Some(&previous) = symbols.get(&name) {
            return Some(previous);
        }
        symbols.insert(name, symbol);
        None
    }

    /// Look `name` up in `scope` only.
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        self.scopes[scope.0].symbols.get(name).copied()
    }

    /// Look `name` up in `scope` and then in each enclosing scope.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(symbol) = self.lookup_local(id, name) {
                return Some(symbol);
            }
            current = self.scopes[id.0].parent;
        }
        None
    }

    /// Number of scopes in the tree.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
