//! Show the token stream of a Craft file.

use std::fmt::Write;

use craft_syntax::parser::{Token, lex};
use craft_syntax::tokenize;

use super::input::Input;

pub struct TokensArgs {
    pub input: Input,
    pub all: bool,
}

pub fn run(args: TokensArgs) {
    let source = args.input.load_or_exit();
    let tokens: Vec<Token> = if args.all {
        lex(&source)
    } else {
        tokenize(&source).collect()
    };
    print!("{}", render_tokens(&source, &tokens));
}

/// One `start..end Kind "text"` line per token.
pub fn render_tokens(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let range = token.span;
        writeln!(
            out,
            "{}..{} {:?} {:?}",
            u32::from(range.start()),
            u32::from(range.end()),
            token.kind,
            token.text(source)
        )
        .expect("String write never fails");
    }
    out
}
