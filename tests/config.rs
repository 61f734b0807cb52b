use std::path::PathBuf;
use std::time::Duration;

use vocabquiz::cli::Cli;
use vocabquiz::config::Config;

#[test]
fn test_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.max_questions, 10);
    assert_eq!(config.advance_delay(), Duration::from_millis(1500));
    assert_eq!(config.finish_delay(), Duration::from_millis(1000));
    assert_eq!(config.login_delay(), Duration::from_millis(1000));
    assert_eq!(config.signup_delay(), Duration::from_millis(1500));
    assert_eq!(config.deck, None);
}

#[test]
fn test_partial_file() {
    let config = Config::parse("max_questions: 5\nspeech_command: espeak -v en\n").unwrap();
    assert_eq!(config.max_questions, 5);
    assert_eq!(config.speech_command.as_deref(), Some("espeak -v en"));
    assert_eq!(config.advance_delay_ms, 1500);
}

#[test]
fn test_bad_file() {
    assert!(Config::parse("max_questions: many\n").is_err());
}

#[test]
fn test_missing_file_is_default() {
    let path = std::env::temp_dir().join("vocabquiz_test_no_such_config.yaml");
    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_command_line_wins() {
    let cli = Cli {
        deck: Some("decks/default.yaml".to_string()),
        questions: Some(3),
        fast: true,
        ..Cli::default()
    };
    let config = Config::parse("max_questions: 5\n").unwrap().apply_cli(&cli);
    assert_eq!(config.max_questions, 3);
    assert_eq!(config.deck, Some(PathBuf::from("decks/default.yaml")));
    assert_eq!(config.advance_delay(), Duration::ZERO);
    assert_eq!(config.finish_delay(), Duration::ZERO);
    assert_eq!(config.login_delay(), Duration::ZERO);
    assert_eq!(config.signup_delay(), Duration::ZERO);
}
