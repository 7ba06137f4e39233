use assert_cmd::cargo_bin;
use predicates::prelude::*;
use assert_cmd::Command;

#[test]
fn test_one_shot_minting() {
    let mut cmd = Command::new(cargo_bin!("cashmint"));
    cmd.args(["--country", "TH", "20", "0.25", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("20 Baht (banknote)"))
        .stdout(predicate::str::contains("0.25 Baht (coin)"))
        .stdout(predicate::str::contains(
            "Error: 3 is not a valid denomination for Baht",
        ));
}

#[test]
fn test_one_shot_json_output() {
    let mut cmd = Command::new(cargo_bin!("cashmint"));
    cmd.args(["--country", "MY", "--json", "100", "0.5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"value":"100","currency":"Ringgit","kind":"banknote"}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"value":"0.5","currency":"Ringgit","kind":"coin"}"#,
        ));
}

#[test]
fn test_country_code_is_normalized() {
    let mut cmd = Command::new(cargo_bin!("cashmint"));
    cmd.args(["--country", "my", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 Ringgit (banknote)"));
}

#[test]
fn test_unknown_country_is_fatal() {
    let mut cmd = Command::new(cargo_bin!("cashmint"));
    cmd.args(["--country", "ZZ", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown country code ZZ"));
}

#[test]
fn test_interactive_session() {
    let mut cmd = Command::new(cargo_bin!("cashmint"));
    cmd.write_stdin("TH\n20 0.5\n\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Please input 2-character country code:",
        ))
        .stdout(predicate::str::contains("The currency is 'Baht'"))
        .stdout(predicate::str::contains("20 Baht (banknote)"))
        .stdout(predicate::str::contains("0.5 Baht (coin)"));
}

#[test]
fn test_interactive_session_reprompts_short_code() {
    let mut cmd = Command::new(cargo_bin!("cashmint"));
    cmd.write_stdin("T\nTH\n\n");

    cmd.assert().success().stdout(
        predicate::str::contains("Please input 2-character country code:")
            .count(2)
            .and(predicate::str::contains("The currency is 'Baht'")),
    );
}
