//! Integration tests for the interactive menu.

mod common;

use common::{TestEnv, FUTURE_DATE};
use predicates::prelude::*;

#[test]
fn test_menu_is_default() {
    let env = TestEnv::new();
    env.command()
        .write_stdin("e\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to our restaurant!"))
        .stdout(predicate::str::ends_with("Thanks and see you soon!\n"));
}

#[test]
fn test_menu_create_reprompts() {
    let env = TestEnv::new();
    let input = format!("a\nana\nana lopez\n{FUTURE_DATE}\n12h\n12:00\n0\n3\n");

    env.command()
        .arg("menu")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid name. Please, re-enter your name"))
        .stdout(predicate::str::contains("Invalid time."))
        .stdout(predicate::str::contains("between 1 and 16"))
        .stdout(predicate::str::contains("Reservation confirmed!"));

    assert_eq!(env.store_json()["1"]["people"], 3);
}

#[test]
fn test_menu_cancel() {
    let env = TestEnv::new();
    env.create("Ana Lopez", FUTURE_DATE, "12:00", 2);

    env.command()
        .write_stdin("d\nAna Lopez\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your reservation has been cancelled."));
    assert_eq!(env.store_json(), serde_json::json!({}));
}

#[test]
fn test_menu_wrong_option() {
    let env = TestEnv::new();
    env.command()
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The option entered is not correct"));
}

#[test]
fn test_menu_retry_limit() {
    let env = TestEnv::new();
    env.command()
        .env("TABLEBOOK_MAX_ATTEMPTS", "2")
        .write_stdin("a\nana\nlopez\nana lopez\n")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("gave up on name after 2"));
}
