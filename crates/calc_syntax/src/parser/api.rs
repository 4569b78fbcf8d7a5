/// Parse a single expression from a fresh, self-contained file set and scope tree.
///
/// Mostly useful for tests and tooling; files are parsed with [`parse_source`].
///
/// ## Parameters
/// - `name`: Display name used in diagnostic positions (may be empty).
/// - `source`: The expression text.
///
/// ## Errors
/// Returns every collected diagnostic if there is at least one.
#[tracing::instrument(skip_all, fields(name = name, source_len = source.len()))]
pub fn parse_expression(name: &str, source: &str) -> Result<Expr, Diagnostics> {
    let files = FileSet::new();
    let mut scopes = ScopeTree::new();
    let top = scopes.open(None);
    let mut diags = Diagnostics::new();

    let map = files.new_map(name, source);
    let expr = Parser::new(source, map, &files, &mut scopes, top, &mut diags).parse_expr();

    match expr {
        Some(expr) if diags.is_empty() => Ok(expr),
        _ => Err(diags),
    }
}

/// Parse one source buffer as a file of a batch.
///
/// Declarations go into `top`, which every file of the batch shares. The buffer gets the next free range of
/// positions in `files` and is registered there once parsed, so later files (and [`crate::diagnostics::render`])
/// can resolve its positions.
///
/// ## Returns
/// The [`File`] node, always. The parse failed iff `diags` gained entries.
#[tracing::instrument(skip_all, fields(file = name, source_len = source.len()))]
pub fn parse_source(
    files: &mut FileSet,
    scopes: &mut ScopeTree,
    top: ScopeId,
    name: &str,
    source: &str,
    diags: &mut Diagnostics,
) -> File {
    let before = diags.count();
    let map = files.new_map(name, source);

    let mut parser = Parser::new(source, map, files, scopes, top, diags);
    let file = parser.parse_file(name);
    let map = parser.into_source_map();
    files.insert(map);

    tracing::debug!(
        file = name,
        exprs = file.root.len(),
        diagnostics = diags.count() - before,
        "parsed file"
    );
    file
}
