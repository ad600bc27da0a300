mod grammar;
mod recovery;

use crate::printer::TreePrinter;
use crate::tree::SyntaxTree;

fn parse(input: &str) -> SyntaxTree {
    crate::compile_grammar().parse(input)
}

fn dump(input: &str) -> String {
    TreePrinter::new(&parse(input)).dump()
}
