//! Loading `.calc` files and directories from disk
//!
//! Thin file-system layer over [`calc_syntax::parse_source`]: it checks extensions, reads files and decides which
//! files of a directory belong to a package. All files of one call share the caller's [`FileSet`], so diagnostics can
//! be rendered afterwards with [`crate::diagnostics::render`].

use std::fs;
use std::path::Path;

use calc_syntax::parse_source;

use super::error::LoadError;
use crate::ast::{File, Package};
use crate::diagnostics::Diagnostics;
use crate::scope::{ScopeId, ScopeTree};
use crate::source::FileSet;

/// Extension every Calc source file must carry.
pub const SOURCE_EXTENSION: &str = "calc";

/// Parse one `.calc` file against the given top scope.
///
/// ## Parameters
/// - `files`: File set of the batch; the file is registered there.
/// - `path`: Path of the file. Only its file name appears in diagnostic positions.
/// - `scopes` / `top`: Scope tree and shared top scope to declare into.
///
/// ## Errors
/// - [`LoadError::Io`] if the file cannot be read.
/// - [`LoadError::Extension`] if it does not end in `.calc`.
/// - [`LoadError::Syntax`] with every diagnostic of the file, if there are any.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn parse_file(files: &mut FileSet, path: &Path, scopes: &mut ScopeTree, top: ScopeId) -> Result<File, LoadError> {
    let mut diags = Diagnostics::new();
    let file = load_file(files, path, scopes, top, &mut diags)?;
    if diags.is_empty() {
        Ok(file)
    } else {
        Err(LoadError::Syntax(diags))
    }
}

/// Parse every `.calc` file of a directory as one package.
///
/// Files are parsed in name order, one after the other, against a single new top scope. Every file is parsed even
/// after an earlier one produced diagnostics, so all of them are reported together.
///
/// ## Errors
/// - [`LoadError::Io`] if the directory or one of its files cannot be read.
/// - [`LoadError::NoFiles`] if the directory holds no `.calc` file.
/// - [`LoadError::Syntax`] with the diagnostics of all files, if there are any.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn parse_dir(files: &mut FileSet, path: &Path) -> Result<Package, LoadError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(io_error(path))? {
        let entry = entry.map_err(io_error(path))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    let mut names = filter_by_ext(names);
    if names.is_empty() {
        return Err(LoadError::NoFiles {
            path: path.to_path_buf(),
        });
    }
    names.sort();
    tracing::debug!(count = names.len(), "parsing package");

    let mut scopes = ScopeTree::new();
    let top = scopes.open(None);
    let mut diags = Diagnostics::new();
    let mut parsed = Vec::with_capacity(names.len());
    for name in &names {
        parsed.push(load_file(files, &path.join(name), &mut scopes, top, &mut diags)?);
    }

    if !diags.is_empty() {
        return Err(LoadError::Syntax(diags));
    }
    Ok(Package {
        scopes,
        scope: top,
        files: parsed,
    })
}

fn load_file(
    files: &mut FileSet,
    path: &Path,
    scopes: &mut ScopeTree,
    top: ScopeId,
    diags: &mut Diagnostics,
) -> Result<File, LoadError> {
    fs::metadata(path).map_err(io_error(path))?;
    if !has_source_extension(path) {
        return Err(LoadError::Extension {
            path: path.to_path_buf(),
        });
    }
    let source = fs::read_to_string(path).map_err(io_error(path))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(parse_source(files, scopes, top, &name, &source, diags))
}

fn io_error(path: &Path) -> impl Fn(std::io::Error) -> LoadError + '_ {
    move |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Keep only the names carrying the `.calc` extension.
fn filter_by_ext(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| has_source_extension(Path::new(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_ext() {
        let names = ["a.calc", "b.txt", "calc", ".calc", "c.calc.bak", "d.calc"]
            .map(String::from)
            .to_vec();
        assert_eq!(filter_by_ext(names), ["a.calc", "d.calc"]);
    }
}
