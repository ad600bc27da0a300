use craft_core::node_types;
use craft_syntax::compile_grammar;

pub struct NodeTypesArgs {
    pub compact: bool,
}

pub fn run(args: NodeTypesArgs) {
    let schema = compile_grammar().schema();
    if args.compact {
        println!("{}", node_types::to_json_compact(schema));
    } else {
        println!("{}", node_types::to_json(schema));
    }
}
