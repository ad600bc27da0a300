//! Show the syntax tree of a Craft file.

use craft_syntax::{TreePrinter, compile_grammar};

use super::check::render_diagnostics;
use super::input::Input;

pub struct AstArgs {
    pub input: Input,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
}

pub fn run(args: AstArgs) {
    let source = args.input.load_or_exit();
    let tree = compile_grammar().parse(&source);

    // Errors still produce a complete tree; report them alongside it.
    if !tree.diagnostics().is_empty() {
        eprint!("{}", render_diagnostics(&args.input.label(), &tree));
    }

    let output = TreePrinter::new(&tree)
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();
    print!("{}", output);
}
