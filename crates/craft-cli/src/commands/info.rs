use craft_syntax::compile_grammar;

pub fn run() {
    let metadata = compile_grammar().metadata();
    let json = serde_json::to_string_pretty(metadata).expect("metadata serialization never fails");
    println!("{}", json);
}
