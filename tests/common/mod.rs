#![allow(dead_code)]

use basic2c::{TokenKind, scan, translate};

/// Scan and translate, panicking with the source on failure.
pub fn translate_ok(input: &str) -> String {
    let tokens = scan(input).unwrap_or_else(|e| panic!("scan failed: {e}\n--- input ---\n{input}"));
    translate(&tokens).unwrap_or_else(|e| panic!("translate failed: {e}\n--- input ---\n{input}"))
}

/// Kinds of the scanned tokens, `Eof` included.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    scan(input)
        .expect("scan failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// The statements of `main`, without the prelude and epilogue.
pub fn body(program: &str) -> String {
    let start = program
        .find("{\n")
        .unwrap_or_else(|| panic!("no main body in:\n{program}"))
        + 2;
    let end = program
        .rfind("\treturn 0;\n")
        .unwrap_or_else(|| panic!("no return in:\n{program}"));
    program[start..end].to_string()
}
