mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_show_plain_marks_selected_entry() {
    let fixture = TestFixture::populated();

    fixture
        .command()
        .args(["show", "employment", "--select", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> Lead Engineer @ Widgets <Ltd>"))
        .stdout(predicate::str::contains("1 year, 10 months"));
}

#[test]
fn test_show_plain_prints_publication_abstract() {
    let fixture = TestFixture::populated();

    fixture
        .command()
        .args(["show", "education", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  * Bayesian inference for epidemics"))
        .stdout(predicate::str::contains("    Journal of Statistics · May 2019"))
        .stdout(predicate::str::contains(
            "    We present a method for fitting stochastic epidemic models",
        ))
        .stdout(predicate::str::contains("reversible jump Markov chain Monte Carlo"))
        .stdout(predicate::str::contains("Read abstract").not());
}

#[test]
fn test_show_json_is_raw_view_model() {
    let fixture = TestFixture::populated();

    let output = fixture
        .command()
        .args(["show", "skills", "--format", "json"])
        .output()
        .expect("Failed to run show");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("show --format json should emit JSON");
    assert_eq!(json["section"], "skills");
    assert_eq!(json["content"]["selected"], 0);
    assert_eq!(json["content"]["areas"][0]["icon"], "code");
    assert_eq!(json["content"]["areas"][0]["selected"], true);
    assert_eq!(json["content"]["areas"][1]["selected"], false);
    assert_eq!(
        json["content"]["areas"][0]["details"][1][1]["kind"],
        "link"
    );
}

#[test]
fn test_show_education_json_keeps_segments_in_bounds() {
    let fixture = TestFixture::populated();

    let output = fixture
        .command()
        .args(["show", "education", "--format", "json"])
        .output()
        .expect("Failed to run show");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let periods = json["content"]["periods"].as_array().unwrap();
    for period in periods {
        let position = period["segment"]["position"].as_f64().unwrap();
        let width = period["segment"]["width"].as_f64().unwrap();
        assert!(position >= 0.0);
        assert!(position + width <= 100.0 + 1e-9);
    }
    assert_eq!(json["content"]["selected"], 1);
}

#[test]
fn test_show_select_out_of_range_fails() {
    let fixture = TestFixture::populated();

    fixture
        .command()
        .args(["show", "jobs-that-do-not-exist"])
        .assert()
        .failure();

    fixture
        .command()
        .args(["show", "employment", "--select", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
