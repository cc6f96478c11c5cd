use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn weekz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("weekz").unwrap();
    cmd.env("WEEKZ_HOME", home);
    cmd
}

#[test]
fn naked_invocation_prompts_for_a_day() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Select a day to begin recording your learnings",
        ));
}

#[test]
fn selecting_a_day_shows_its_heading() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .arg("day")
        .arg("2026-03-04")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wed, Mar 4"));
}

#[test]
fn invalid_dates_are_rejected() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .arg("day")
        .arg("03/04/2026")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn adding_a_topic_updates_both_views() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();

    weekz(home.path())
        .args(["add", "Rust", "borrow", "checker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic created: Rust borrow checker"))
        .stdout(predicate::str::contains("·1"));
}

#[test]
fn adding_without_a_selected_day_fails() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .args(["add", "Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No day selected"));
}

#[test]
fn blank_titles_are_silently_ignored() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();

    weekz(home.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic created").not());

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet. Run"));
}

#[test]
fn topics_survive_a_restart() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Lifetimes"]).assert().success();

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Lifetimes"));
}

#[test]
fn linking_a_resource_shows_its_details() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Lifetimes"]).assert().success();

    weekz(home.path())
        .args([
            "link",
            "1",
            "--url",
            "https://doc.rust-lang.org/nomicon/",
            "--desc",
            "Deep dive",
            "--hours",
            "1",
            "--minutes",
            "30",
            "The",
            "Rustonomicon",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resource added: The Rustonomicon"));

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) The Rustonomicon"))
        .stdout(predicate::str::contains(
            "Link: https://doc.rust-lang.org/nomicon/",
        ))
        .stdout(predicate::str::contains("Deep dive"))
        .stdout(predicate::str::contains("1 hour 30 mins"));
}

#[test]
fn editing_a_resource_marks_it_edited() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Lifetimes"]).assert().success();
    weekz(home.path())
        .args(["link", "1", "Notes"])
        .assert()
        .success();

    weekz(home.path())
        .args(["edit", "1", "1", "--desc", "Better notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resource updated: Notes"));

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Better notes"))
        .stdout(predicate::str::contains("(edited)"));
}

#[test]
fn rm_with_yes_deletes_the_topic() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Lifetimes"]).assert().success();

    weekz(home.path())
        .args(["rm", "1", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic deleted: Lifetimes"));

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet. Run"));
}

#[test]
fn declining_the_prompt_keeps_the_topic() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Lifetimes"]).assert().success();

    weekz(home.path())
        .args(["rm", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Lifetimes"));
}

#[test]
fn unlink_removes_only_the_resource() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Lifetimes"]).assert().success();
    weekz(home.path())
        .args(["link", "1", "Notes"])
        .assert()
        .success();

    weekz(home.path())
        .args(["unlink", "1", "1", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resource deleted: Notes"));

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Lifetimes"))
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn next_and_prev_move_the_week_strip() {
    let home = tempfile::tempdir().unwrap();

    let before = weekz(home.path()).arg("show").output().unwrap();
    let heading = |out: &[u8]| String::from_utf8_lossy(out).lines().next().unwrap_or_default().to_string();
    let original = heading(&before.stdout);

    let shifted = weekz(home.path()).arg("next").output().unwrap();
    assert_ne!(heading(&shifted.stdout), original);

    let back = weekz(home.path()).arg("prev").output().unwrap();
    assert_eq!(heading(&back.stdout), original);
}

#[test]
fn config_lists_gets_and_sets_keys() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("button-text = Link"))
        .stdout(predicate::str::contains("confirm = true"));

    weekz(home.path())
        .args(["config", "button-text", "Watch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("button-text set to Watch"));

    weekz(home.path())
        .args(["config", "button-text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("button-text = Watch"));
}

#[test]
fn configured_button_text_applies_to_new_links() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .args(["config", "button-text", "Watch"])
        .assert()
        .success();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Ownership"]).assert().success();
    weekz(home.path())
        .args(["link", "1", "--url", "https://youtu.be/abc", "Intro", "video"])
        .assert()
        .success();

    weekz(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Watch: https://youtu.be/abc"));
}

#[test]
fn disabling_confirmation_skips_the_prompt() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .args(["config", "confirm", "false"])
        .assert()
        .success();

    weekz(home.path()).args(["day", "today"]).assert().success();
    weekz(home.path()).args(["add", "Lifetimes"]).assert().success();

    weekz(home.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic deleted: Lifetimes"));
}

#[test]
fn a_corrupt_journal_refuses_to_start() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("journal.json"), "{ not json").unwrap();

    weekz(home.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn version_carries_the_package_version() {
    let home = tempfile::tempdir().unwrap();

    weekz(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
