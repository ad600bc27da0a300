use std::path::PathBuf;

use super::input::{Input, InputError};

#[test]
fn inline_text_wins() {
    let input = Input::new(Some(PathBuf::from("a.craft")), Some("actor user A".into()));
    assert_eq!(input, Input::Text("actor user A".into()));
    assert_eq!(input.label(), "<source>");
    assert_eq!(input.load().unwrap(), "actor user A");
}

#[test]
fn dash_means_stdin() {
    assert_eq!(Input::new(Some(PathBuf::from("-")), None), Input::Stdin);
    assert_eq!(Input::new(None, None), Input::Stdin);
    assert_eq!(Input::Stdin.label(), "<stdin>");
}

#[test]
fn path_label_is_the_path() {
    let input = Input::new(Some(PathBuf::from("arch/shop.craft")), None);
    assert_eq!(input.label(), "arch/shop.craft");
}

#[test]
fn missing_file_is_an_error() {
    let input = Input::Path(PathBuf::from("/nonexistent/craft/shop.craft"));
    let err = input.load().unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to read /nonexistent/craft/shop.craft: ")
    );
}
