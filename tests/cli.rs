use std::{env, fs};

use assert_cmd::Command;
use predicates::prelude::*;

fn avrhex() -> Command {
    Command::cargo_bin("avrhex").unwrap()
}

#[test]
fn empty_input_still_produces_a_complete_image() {
    avrhex()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(":020000000000FE\n"))
        .stdout(predicate::str::ends_with(":00000001FF\n"));
}

#[test]
fn data_records_follow_the_preamble() {
    avrhex()
        .write_stdin("!0010 AAAA BBBB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(":02001000AAAA9A\n:02001200BBBB76\n"))
        .stdout(predicate::str::ends_with(":00000001FF\n"));
}

#[test]
fn writing_over_the_transmit_routine_warns_on_stderr() {
    avrhex()
        .write_stdin("!0400 ABCD\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(":02040000CDAB82\n"))
        .stderr(predicate::str::contains("overwriting"));
}

#[test]
fn malformed_data_fails_without_an_end_record() {
    avrhex()
        .write_stdin("1234\nzzzz\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(":020000003412B8\n"))
        .stdout(predicate::str::contains(":00000001FF").not())
        .stderr(predicate::str::contains("Invalid data"));
}

#[test]
fn malformed_address_fails() {
    avrhex()
        .write_stdin("!zzzz\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid address"));
}

#[test]
fn output_flag_writes_the_image_to_a_file() {
    let path = env::temp_dir().join(format!("avrhex-cli-{}.hex", std::process::id()));

    avrhex()
        .arg("-o")
        .arg(&path)
        .write_stdin("1234\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let image = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert!(image.contains(":020000003412B8\n"));
    assert!(image.ends_with(":00000001FF\n"));
}
