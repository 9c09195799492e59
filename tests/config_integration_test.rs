use book_dispatch::config::{default_commands, Overrides};
use book_dispatch::core::ConfigProvider;
use book_dispatch::utils::validation::Validate;
use book_dispatch::{Book, Command, Dispatcher, RunConfig, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_driven_run() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[book]
title = "Config Book"
content = "abc"

[[commands]]
action = "print"
variant = "reverse"

[[commands]]
action = "shout"
variant = "loudly"

[[commands]]
action = "serialize"
variant = "JSON"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let file = TomlConfig::from_file(temp_file.path()).unwrap();
    let config = RunConfig::resolve(Overrides::default(), Some(file));
    config.validate().unwrap();

    let mut dispatcher = Dispatcher::new(Vec::new());
    let result = dispatcher
        .dispatch(&config.book(), config.commands())
        .unwrap();
    let output = String::from_utf8(dispatcher.into_inner()).unwrap();

    assert_eq!(output, "Printing the book in reverse: Config Book...\ncba\n");
    assert_eq!(
        result.as_deref(),
        Some(r#"{"title":"Config Book","content":"abc"}"#)
    );
}

#[test]
fn test_default_run_matches_demo() {
    let config = RunConfig::resolve(Overrides::default(), None);
    assert_eq!(
        config.book(),
        Book::new("Sample Book", "This is some sample content.")
    );
    assert_eq!(config.commands(), default_commands().as_slice());
    assert_eq!(
        config.commands(),
        &[
            Command::new("display", "reverse"),
            Command::new("serialize", "xml")
        ]
    );
}

#[test]
fn test_empty_action_and_title_run_without_error() {
    let overrides = Overrides {
        title: Some(String::new()),
        commands: vec![Command::new("", "json")],
        ..Overrides::default()
    };
    let config = RunConfig::resolve(overrides, None);
    config.validate().unwrap();

    let mut dispatcher = Dispatcher::new(Vec::new());
    let result = dispatcher.dispatch(&config.book(), config.commands());
    let output = dispatcher.into_inner();

    assert!(result.unwrap().is_none());
    assert!(output.is_empty());
}
