use craft_syntax::compile_grammar;

/// Prints the rule set in tree-sitter `grammar.json` shape.
pub fn run() {
    println!("{}", compile_grammar().grammar().to_json());
}
