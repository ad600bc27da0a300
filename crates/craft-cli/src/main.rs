mod cli;
mod commands;

use cli::{AstParams, CheckParams, NodeTypesParams, TokensParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("node-types", m)) => {
            let params = NodeTypesParams::from_matches(m);
            commands::node_types::run(params.into());
        }
        Some(("grammar", _)) => commands::grammar::run(),
        Some(("info", _)) => commands::info::run(),
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr, filtered by `CRAFT_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CRAFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
