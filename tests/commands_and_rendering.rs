// tests/commands_and_rendering.rs

use std::error::Error;

use outmux::command::Command;
use outmux::errors::OutmuxError;
use outmux::exec::reader::strip_colors;
use outmux::message::{Destination, Message};
use outmux::mux;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn command_parse_splits_on_whitespace() -> TestResult {
    let cmd = Command::parse("cargo  test --workspace", 0)?;
    assert_eq!(cmd.program, "cargo");
    assert_eq!(cmd.args, vec!["test", "--workspace"]);
    Ok(())
}

#[test]
fn blank_command_is_a_configuration_error() {
    let err = Command::parse("   ", 1).unwrap_err();
    assert!(matches!(err, OutmuxError::EmptyCommand(1)));
}

#[test]
fn identifier_joins_program_and_args() -> TestResult {
    let cmd = Command::parse("echo hello world", 0)?;
    assert_eq!(cmd.identifier(), "echo hello world");
    Ok(())
}

#[test]
fn identifier_truncates_past_sixty_chars() -> TestResult {
    let long = format!("echo {}", "x".repeat(80));
    let cmd = Command::parse(&long, 0)?;
    let id = cmd.identifier();
    assert_eq!(id.chars().count(), 63);
    assert!(id.ends_with("..."));
    assert!(id.starts_with("echo xxxx"));
    Ok(())
}

#[test]
fn fewer_than_two_commands_is_rejected_before_spawning() {
    let none: Vec<String> = vec![];
    assert!(matches!(
        mux::parse_commands(&none),
        Err(OutmuxError::TooFewCommands)
    ));

    let one = vec!["echo lonely".to_string()];
    assert!(matches!(
        mux::parse_commands(&one),
        Err(OutmuxError::TooFewCommands)
    ));
}

#[test]
fn colorized_render_rotates_through_six_colors() {
    let msg = |sender| Message::new("hello", sender, Destination::Stdout);

    assert_eq!(msg(0).render(true), "\x1b[31mhello\x1b[0m");
    assert_eq!(msg(5).render(true), "\x1b[36mhello\x1b[0m");
    // Ids past the palette wrap around.
    assert_eq!(msg(6).render(true), "\x1b[31mhello\x1b[0m");
    assert_eq!(msg(7).render(true), "\x1b[32mhello\x1b[0m");
}

#[test]
fn plain_render_is_the_bare_content() {
    let msg = Message::new("hello", 3, Destination::Stderr);
    assert_eq!(msg.render(false), "hello");
}

#[test]
fn strip_colors_removes_embedded_escapes() {
    assert_eq!(strip_colors("\x1b[31mred\x1b[0m plain"), "red plain");
    assert_eq!(strip_colors("\x1b[1;32mbold green\x1b[0m"), "bold green");
    assert_eq!(strip_colors("no escapes here"), "no escapes here");
}
