//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{ast_command, check_command, node_types_command, tokens_command};
use crate::commands::input::Input;

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

#[test]
fn ast_extracts_flags() {
    let m = ast_command()
        .try_get_matches_from(["ast", "shop.craft", "--raw", "--trivia", "--spans"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.input_path, Some(PathBuf::from("shop.craft")));
    assert_eq!(params.source_text, None);
    assert!(params.raw);
    assert!(params.trivia);
    assert!(params.spans);
}

#[test]
fn ast_defaults() {
    let m = ast_command()
        .try_get_matches_from(["ast", "shop.craft"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert!(!params.raw);
    assert!(!params.trivia);
    assert!(!params.spans);
}

#[test]
fn trivia_requires_raw() {
    let result = ast_command().try_get_matches_from(["ast", "shop.craft", "--trivia"]);
    assert!(result.is_err());
}

#[test]
fn inline_source_replaces_path() {
    let m = check_command()
        .try_get_matches_from(["check", "-s", "actor user Customer"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.input_path, None);
    assert_eq!(params.source_text.as_deref(), Some("actor user Customer"));
}

#[test]
fn input_is_required() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn path_and_inline_source_conflict() {
    let result = tokens_command().try_get_matches_from(["tokens", "shop.craft", "-s", "x"]);
    assert!(result.is_err());
}

#[test]
fn stdin_dash_is_a_path() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "-", "--all"])
        .unwrap();
    let params = TokensParams::from_matches(&m);
    assert_eq!(params.input_path, Some(PathBuf::from("-")));
    assert!(params.all);
}

#[test]
fn node_types_compact() {
    let m = node_types_command()
        .try_get_matches_from(["node-types", "--compact"])
        .unwrap();
    assert!(NodeTypesParams::from_matches(&m).compact);
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(build_cli().try_get_matches_from(["craft", "exec"]).is_err());
}

#[test]
fn params_convert_to_args() {
    let params = CheckParams {
        input_path: None,
        source_text: Some("domain Sales {}".to_string()),
    };
    let args: crate::commands::check::CheckArgs = params.into();
    assert_eq!(args.input, Input::Text("domain Sales {}".to_string()));
}
