//! Dumps the tree-sitter AST for a Java file, marking the nodes whose names
//! the style checker reads.
//!
//! Usage:
//!   dump_java_ast MyClass.java
//!   cat MyClass.java | dump_java_ast

use std::io::{self, Read};
use std::process::ExitCode;

use stylecheck_java_parser::JavaParser;
use stylecheck_java_parser::tree_sitter::Node;

fn main() -> ExitCode {
    let source = match read_input() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut parser = JavaParser::new();
    match parser.parse(&source) {
        Ok(result) => {
            print_tree(result.root_node(), &source, 0);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_input() -> io::Result<String> {
    if let Some(path) = std::env::args_os().nth(1) {
        return std::fs::read_to_string(path);
    }
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

fn print_tree(node: Node, source: &str, depth: usize) {
    let start = node.start_position();
    let name = node
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok());

    // kind [line:col] name=...
    match name {
        Some(name) => println!(
            "{}{} [{}:{}] name={name}",
            "  ".repeat(depth),
            node.kind(),
            start.row + 1,
            start.column + 1
        ),
        None => println!(
            "{}{} [{}:{}]",
            "  ".repeat(depth),
            node.kind(),
            start.row + 1,
            start.column + 1
        ),
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        print_tree(child, source, depth + 1);
    }
}
