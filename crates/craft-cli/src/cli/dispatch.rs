//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::input::Input;
use crate::commands::node_types::NodeTypesArgs;
use crate::commands::tokens::TokensArgs;

pub struct AstParams {
    pub input_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: Input::new(p.input_path, p.source_text),
            raw: p.raw,
            trivia: p.trivia,
            spans: p.spans,
        }
    }
}

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub source_text: Option<String>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: Input::new(p.input_path, p.source_text),
        }
    }
}

pub struct TokensParams {
    pub input_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub all: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            all: m.get_flag("all"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: Input::new(p.input_path, p.source_text),
            all: p.all,
        }
    }
}

pub struct NodeTypesParams {
    pub compact: bool,
}

impl NodeTypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            compact: m.get_flag("compact"),
        }
    }
}

impl From<NodeTypesParams> for NodeTypesArgs {
    fn from(p: NodeTypesParams) -> Self {
        Self { compact: p.compact }
    }
}
