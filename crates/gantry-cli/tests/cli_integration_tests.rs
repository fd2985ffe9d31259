/// CLI integration tests for gantry
///
/// These tests run the binary as a black box against temporary task files,
/// with the clock pinned through `--now`.
use predicates::prelude::*;

mod helpers;
use helpers::{assertions, CliTestHarness, TestFixtures};

/// Test basic CLI help and version commands
#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("Gantt"))
        .stdout(predicate::str::contains("Override the current time"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("gantry"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_show_filters_by_window_and_completion() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks(
        "events.json",
        r#"[
            {"id": "past", "name": "Finished Event", "start": "2024-05-30", "end": "2024-06-01"},
            {"id": "near", "name": "Soon Event", "start": "2024-06-15", "end": "2024-06-16"},
            {"id": "far", "name": "Distant Event", "start": "2024-06-30", "end": "2024-07-01"}
        ]"#,
    );
    let source = path.to_str().unwrap();

    harness
        .run_success(&["show", "--source", source, "--now", "2024-06-10"])
        .stdout(assertions::has_chart_headers())
        .stdout(predicate::str::contains("Soon Event"))
        .stdout(predicate::str::contains("Finished Event").not())
        .stdout(predicate::str::contains("Distant Event").not());

    harness
        .run_success(&["show", "--all", "--source", source, "--now", "2024-06-10"])
        .stdout(predicate::str::contains("Finished Event"))
        .stdout(predicate::str::contains("Soon Event"));
}

#[test]
fn test_show_window_option() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks(
        "events.json",
        r#"[
            {"id": "near", "name": "Soon Event", "start": "2024-06-12", "end": "2024-06-13"},
            {"id": "far", "name": "Distant Event", "start": "2024-06-30", "end": "2024-07-01"},
            {"id": "rare", "name": "Rare Event", "start": "2024-06-11", "end": "2024-06-12",
             "repeat": {"interval": 100000000, "end_date": "2024-12-31"}}
        ]"#,
    );
    let source = path.to_str().unwrap();

    harness
        .run_success(&["show", "--source", source, "--now", "2024-06-10", "--window", "3"])
        .stdout(predicate::str::contains("Soon Event"))
        .stdout(predicate::str::contains("Rare Event"))
        .stdout(predicate::str::contains("Distant Event").not())
        .stdout(predicate::str::contains("06-10 → 06-13 (1 day/col)"));

    harness
        .run_success(&["show", "--source", source, "--now", "2024-06-10", "--window", "3650"])
        .stdout(predicate::str::contains("Distant Event"))
        .stdout(predicate::str::contains("(61 days/col)"));

    harness
        .run_failure(&["show", "--source", source, "--now", "2024-06-10", "--window", "100000000"])
        .stderr(assertions::has_notice())
        .stderr(predicate::str::contains("Cannot show 100000000 days ahead"))
        .stdout(predicate::str::is_empty());

    std::fs::write(harness.dir().join("gantry.toml"), "window_days = -1\n").unwrap();
    harness
        .run_failure(&["show", "--source", source, "--now", "2024-06-10"])
        .stderr(predicate::str::contains("Cannot show -1 days ahead"));
}

#[test]
fn test_show_name_filter_is_case_insensitive() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks("day.json", TestFixtures::day_events());

    harness
        .run_success(&[
            "show",
            "--source",
            path.to_str().unwrap(),
            "--now",
            "2024-06-10T00:00:00Z",
            "--name",
            "TASK a",
        ])
        .stdout(predicate::str::contains("Task A"))
        .stdout(predicate::str::contains("Task C").not());

    harness
        .run_success(&[
            "show",
            "--source",
            path.to_str().unwrap(),
            "--now",
            "2024-06-10T00:00:00Z",
            "--name",
            "nothing like this",
        ])
        .stdout(predicate::str::contains("No tasks to show."));
}

#[test]
fn test_copy_print_formats_day() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks("day.json", TestFixtures::day_events());

    harness
        .run_success(&[
            "copy",
            "2024-06-10",
            "--print",
            "--source",
            path.to_str().unwrap(),
        ])
        .stdout(predicate::str::diff(
            "Events for 2024-06-10:\n23:00~ Task B\n08:00~ Task A\n",
        ));
}

#[test]
fn test_copy_relative_date() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks("day.json", TestFixtures::day_events());

    harness
        .run_success(&[
            "copy",
            "tomorrow",
            "--print",
            "--now",
            "2024-06-10T12:00:00Z",
            "--source",
            path.to_str().unwrap(),
        ])
        .stdout(predicate::str::contains("Events for 2024-06-11:"))
        .stdout(predicate::str::contains("00:00~ Task C"));
}

#[test]
fn test_copy_without_date_or_events_is_a_notice() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks("day.json", TestFixtures::day_events());
    let source = path.to_str().unwrap();

    harness
        .run_failure(&["copy", "--print", "--source", source])
        .stderr(assertions::has_notice())
        .stderr(predicate::str::contains("choose a date"));

    harness
        .run_failure(&["copy", "2024-07-01", "--print", "--source", source])
        .stderr(assertions::has_notice())
        .stderr(predicate::str::contains("no events on 2024-07-01"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_expand_prints_generated_instances() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks("recurring.json", TestFixtures::recurring_events());

    harness
        .run_success(&["expand", "--source", path.to_str().unwrap()])
        .stdout(predicate::str::contains("\"id\": \"bear\""))
        .stdout(predicate::str::contains("bear_repeat_2024-01-08T00:00:00.000Z"))
        .stdout(predicate::str::contains("bear_repeat_2024-01-15T00:00:00.000Z"))
        .stdout(predicate::str::contains("bear_repeat_2024-01-22").not());
}

#[test]
fn test_dir_option_loads_every_json_file() {
    let harness = CliTestHarness::new();
    harness.write_tasks("a.json", TestFixtures::day_events());
    harness.write_tasks("b.json", TestFixtures::recurring_events());

    harness
        .run_success(&[
            "copy",
            "2024-01-08",
            "--print",
            "--dir",
            harness.dir().to_str().unwrap(),
        ])
        .stdout(predicate::str::contains("00:00~ Bear Trap"));
}

#[test]
fn test_config_file_supplies_sources() {
    let harness = CliTestHarness::new();
    harness.write_tasks("day.json", TestFixtures::day_events());
    std::fs::write(
        harness.dir().join("gantry.toml"),
        "sources = [\"day.json\"]\nwindow_days = 3\n",
    )
    .unwrap();

    harness
        .run_success(&["copy", "2024-06-11", "--print"])
        .stdout(predicate::str::contains("00:00~ Task C"));
}

#[test]
fn test_load_failures() {
    let harness = CliTestHarness::new();

    // nothing configured
    harness
        .run_failure(&["show"])
        .stderr(predicate::str::contains("No task sources configured"));

    // one of two files missing aborts the whole load
    let good = harness.write_tasks("good.json", TestFixtures::day_events());
    harness
        .run_failure(&[
            "show",
            "--source",
            good.to_str().unwrap(),
            "--source",
            "missing.json",
        ])
        .stderr(assertions::has_error())
        .stderr(predicate::str::contains("missing.json"))
        .stdout(predicate::str::is_empty());

    // zero interval is rejected instead of looping
    let looping = harness.write_tasks(
        "loop.json",
        r#"[{"id":"x","name":"Loop","start":"2024-06-01","end":"2024-06-02",
             "repeat":{"interval":0,"end_date":"2024-07-01"}}]"#,
    );
    harness
        .run_failure(&["show", "--source", looping.to_str().unwrap()])
        .stderr(predicate::str::contains("interval must be at least 1"));
}

#[test]
fn test_invalid_timezone() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks("day.json", TestFixtures::day_events());

    harness
        .run_failure(&[
            "show",
            "--timezone",
            "Mars/Olympus",
            "--source",
            path.to_str().unwrap(),
        ])
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_timezone_changes_local_times() {
    let harness = CliTestHarness::new();
    let path = harness.write_tasks("day.json", TestFixtures::day_events());

    // 08:00Z is 17:00 in Tokyo; 23:00Z on the 9th is 08:00 on the 10th there.
    harness
        .run_success(&[
            "copy",
            "2024-06-10",
            "--print",
            "--timezone",
            "Asia/Tokyo",
            "--source",
            path.to_str().unwrap(),
        ])
        .stdout(predicate::str::diff(
            "Events for 2024-06-10:\n08:00~ Task B\n17:00~ Task A\n",
        ));
}
