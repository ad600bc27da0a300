//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("craft")
        .about("Parser for the Craft architecture DSL")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(tokens_command())
        .subcommand(node_types_command())
        .subcommand(grammar_command())
        .subcommand(info_command())
}

pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a Craft file")
        .override_usage(
            "\
  craft ast <FILE>
  craft ast -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  craft ast shop.craft                 # named nodes with fields
  craft ast shop.craft --raw           # concrete tree, every token
  craft ast shop.craft --raw --trivia  # ... plus whitespace and comments
  craft ast -s 'actor user Customer'   # inline source
  cat shop.craft | craft ast -         # stdin"#,
        )
        .arg(input_path_arg())
        .arg(source_text_arg())
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
}

pub fn check_command() -> Command {
    Command::new("check")
        .about("Report syntax errors in a Craft file")
        .override_usage(
            "\
  craft check <FILE>
  craft check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  craft check shop.craft               # silent when valid, exit 1 on errors
  craft check -s 'domain {}'           # inline source"#,
        )
        .arg(input_path_arg())
        .arg(source_text_arg())
}

pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the token stream of a Craft file")
        .override_usage(
            "\
  craft tokens <FILE>
  craft tokens -s <TEXT>",
        )
        .arg(input_path_arg())
        .arg(source_text_arg())
        .arg(all_tokens_arg())
}

pub fn node_types_command() -> Command {
    Command::new("node-types")
        .about("Print the node-type manifest (node-types.json)")
        .arg(compact_arg())
}

pub fn grammar_command() -> Command {
    Command::new("grammar").about("Print the rule set (grammar.json)")
}

pub fn info_command() -> Command {
    Command::new("info").about("Print grammar metadata")
}
