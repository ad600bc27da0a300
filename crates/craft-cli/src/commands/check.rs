use std::fmt::Write;

use craft_syntax::{SyntaxTree, compile_grammar, line_col};

use super::input::Input;

pub struct CheckArgs {
    pub input: Input,
}

pub fn run(args: CheckArgs) {
    let source = args.input.load_or_exit();
    let tree = compile_grammar().parse(&source);

    if tree.has_errors() || !tree.diagnostics().is_empty() {
        eprint!("{}", render_diagnostics(&args.input.label(), &tree));
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// One `label:line:col: message` line per diagnostic, in source order.
pub fn render_diagnostics(label: &str, tree: &SyntaxTree) -> String {
    let source = tree.source();
    let mut out = String::new();
    for diagnostic in tree.diagnostics().sorted() {
        let (line, col) = diagnostic.line_col(source);
        writeln!(out, "{label}:{line}:{col}: {}", diagnostic.message)
            .expect("String write never fails");
        for related in &diagnostic.related {
            let (line, col) = line_col(source, related.range.start());
            writeln!(out, "{label}:{line}:{col}: note: {}", related.message)
                .expect("String write never fails");
        }
    }
    out
}
