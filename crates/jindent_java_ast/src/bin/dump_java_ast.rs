//! Dumps the indentation syntax tree for a Java file.
//!
//! Usage:
//!   cat MyClass.java | cargo run --bin dump_java_ast
//!
//! Each line shows the token type, the grammar kind, the start position
//! (1-based line, 0-based column) and the grammar field, if any.

use std::io::{self, Read};

use jindent_java_ast::{Ast, WalkEvent};

fn main() {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    }

    if source.trim().is_empty() {
        eprintln!("Error: No input provided. Pipe a Java file to stdin.");
        eprintln!("Usage: cat MyClass.java | dump_java_ast");
        std::process::exit(1);
    }

    let Some(ast) = Ast::parse(&source) else {
        eprintln!("Error: Failed to parse Java source");
        std::process::exit(1);
    };

    let mut depth = 0usize;
    for event in ast.root().events() {
        match event {
            WalkEvent::Enter(node) => {
                let field = node
                    .field_name()
                    .map(|f| format!(" ({f})"))
                    .unwrap_or_default();
                println!(
                    "{}{:?} {} [{}:{}]{}",
                    "  ".repeat(depth),
                    node.kind(),
                    node.grammar_kind(),
                    node.line_no(),
                    node.column_no(),
                    field
                );
                depth += 1;
            }
            WalkEvent::Leave(_) => depth -= 1,
        }
    }
}
