mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_init_creates_config_and_empty_datasets() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(fixture.path("folio.toml").exists());
    assert_eq!(fixture.read("data/my-jobs.json").trim(), "[]");
    assert_eq!(fixture.read("data/my-skills.json").trim(), "[]");

    // The starter config is immediately usable
    fixture.command().arg("check").assert().success();
}

#[test]
fn test_init_refuses_to_overwrite() {
    let fixture = TestFixture::populated();

    fixture
        .command()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    assert!(fixture.read("folio.toml").contains("Joshua Prettyman"));
}

#[test]
fn test_no_command_prints_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("folio init"));
}
