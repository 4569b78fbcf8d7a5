#![no_main]

use calc::diagnostics::{self, Diagnostics};
use calc::lexer;
use calc::scope::ScopeTree;
use calc::source::FileSet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the lexer
        let _ = lexer::lex(s);

        // Fuzz both parser entry points
        let _ = calc::parse_expression("fuzz.calc", s);

        let mut files = FileSet::new();
        let mut scopes = ScopeTree::new();
        let top = scopes.open(None);
        let mut diags = Diagnostics::new();
        let _ = calc::parse_source(&mut files, &mut scopes, top, "fuzz.calc", s, &mut diags);
        let _ = diagnostics::render(&diags, &files);
    }
});
