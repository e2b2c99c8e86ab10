mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_check_passes_on_valid_data() {
    let fixture = TestFixture::populated();

    fixture
        .command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("config and datasets are valid"));
}

#[test]
fn test_check_reports_unknown_icon() {
    let fixture = TestFixture::populated();
    fixture.write(
        "data/my-skills.json",
        r#"[{ "name": "Mystery", "iconName": "rocket", "skills": [] }]"#,
    );

    fixture
        .command()
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("skills[0]"))
        .stdout(predicate::str::contains("unrecognized icon key"));
}

#[test]
fn test_check_reports_malformed_dataset() {
    let fixture = TestFixture::populated();
    fixture.write(
        "data/my-jobs.json",
        r#"[{ "role": "X", "company": "Y", "startDate": "2021-6", "endDate": "2022-01" }]"#,
    );

    fixture
        .command()
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("my-jobs.json"))
        .stderr(predicate::str::contains("check failed"));
}
