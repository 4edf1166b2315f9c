use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{no_config, rti, write_temp};

#[test]
fn test_owner_of_epoch_and_next_day() {
    let cfg = no_config("owner");

    rti()
        .args(["--config-file", &cfg, "owner", "2024-06-17"])
        .assert()
        .success()
        .stdout(contains("Bosca"));

    rti()
        .args(["--config-file", &cfg, "owner", "2024-06-18"])
        .assert()
        .success()
        .stdout(contains("Mraco").and(contains("Bosca").not()));
}

#[test]
fn test_owner_rejects_bad_date() {
    rti()
        .args(["--config-file", &no_config("bad_date"), "owner", "17/06/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_today_with_date() {
    rti()
        .args(["--config-file", &no_config("today"), "today", "--date", "2024-06-19"])
        .assert()
        .success()
        .stdout(contains("2024-06-19").and(contains("Bosca")));
}

#[test]
fn test_today_without_date_runs() {
    rti()
        .args(["--config-file", &no_config("today_now"), "today"])
        .assert()
        .success()
        .stdout(contains("flashlight belongs to"));
}

#[test]
fn test_calendar_table() {
    rti()
        .args([
            "--config-file",
            &no_config("calendar"),
            "calendar",
            "--date",
            "2024-06-20",
        ])
        .assert()
        .success()
        .stdout(
            contains("13/06/2024")
                .and(contains("26/06/2024"))
                .and(contains("Giovedì"))
                .and(contains("TODAY")),
        );
}

#[test]
fn test_calendar_json() {
    let out = rti()
        .args([
            "--config-file",
            &no_config("calendar_json"),
            "calendar",
            "--date",
            "2024-06-20",
            "--json",
        ])
        .output()
        .expect("run calendar --json");
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 14);
    assert_eq!(rows[7]["date"], "2024-06-20");
    assert_eq!(rows[7]["is_today"], true);
    assert_eq!(rows[7]["owner"], "Mraco");
    assert_eq!(
        rows.iter().filter(|r| r["is_today"] == true).count(),
        1
    );
}

#[test]
fn test_calendar_custom_window_and_owners() {
    let cfg = write_temp(
        "cli_custom_owners",
        "conf",
        "owners: [Anna, Luca]\nshow_weekday: en\n",
    );

    rti()
        .args([
            "--config-file",
            &cfg,
            "calendar",
            "--date",
            "2024-06-17",
            "--before",
            "1",
            "--days",
            "3",
        ])
        .assert()
        .success()
        .stdout(
            contains("16/06/2024")
                .and(contains("18/06/2024"))
                .and(contains("Monday"))
                .and(contains("Anna"))
                .and(contains("15/06/2024").not()),
        );
}

#[test]
fn test_compass_timeout_then_manual() {
    let script = write_temp(
        "cli_compass_timeout",
        "yaml",
        "steps:\n  - after_ms: 5000\n",
    );

    rti()
        .args([
            "--config-file",
            &no_config("compass_timeout"),
            "compass",
            "--script",
            &script,
            "--rotate",
            "right,right,right",
        ])
        .assert()
        .success()
        .stdout(
            contains("calibrating")
                .and(contains("error"))
                .and(contains("manual"))
                .and(contains("45.0° NE")),
        );
}

#[test]
fn test_compass_live_heading() {
    let script = write_temp(
        "cli_compass_live",
        "yaml",
        "steps:\n  - after_ms: 100\n    sample: { alpha: -10 }\n",
    );

    rti()
        .args([
            "--config-file",
            &no_config("compass_live"),
            "compass",
            "--script",
            &script,
        ])
        .assert()
        .success()
        .stdout(contains("live").and(contains("Final heading: 10.0° NNE").not()))
        .stdout(contains("Final heading: 10.0° N"));
}

#[test]
fn test_compass_unsupported_override() {
    let script = write_temp("cli_compass_unsupported", "yaml", "steps: []\n");

    rti()
        .args([
            "--config-file",
            &no_config("compass_unsupported"),
            "compass",
            "--script",
            &script,
            "--capability",
            "unsupported",
        ])
        .assert()
        .success()
        .stdout(contains("not supported"));
}

#[test]
fn test_compass_bad_rotation() {
    let script = write_temp("cli_compass_badrot", "yaml", "steps: []\n");

    rti()
        .args([
            "--config-file",
            &no_config("compass_badrot"),
            "compass",
            "--script",
            &script,
            "--rotate",
            "up",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid rotation direction"));
}

#[test]
fn test_bread() {
    rti()
        .args(["--config-file", &no_config("bread_yes"), "bread", "Sì"])
        .assert()
        .success()
        .stdout(contains("available"));

    rti()
        .args(["--config-file", &no_config("bread_no"), "bread", "no"])
        .assert()
        .success()
        .stdout(contains("unavailable"));
}

#[test]
fn test_config_print_and_check() {
    let cfg = write_temp("cli_config_check", "conf", "owners: [Anna, Luca]\n");

    rti()
        .args(["--config-file", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Anna").and(contains("days_total: 14")));

    rti()
        .args(["--config-file", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("epoch")));

    rti()
        .args(["--config-file", &cfg, "config", "--migrate"])
        .assert()
        .success();

    rti()
        .args(["--config-file", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete and valid"));
}

#[test]
fn test_init_in_test_mode() {
    let cfg = no_config("init_test");

    rti()
        .args(["--config-file", &cfg, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_invalid_log_level() {
    rti()
        .args([
            "--config-file",
            &no_config("log_level"),
            "--log-level",
            "chatty",
            "owner",
            "2024-06-17",
        ])
        .assert()
        .failure()
        .stderr(contains("unsupported log level"));
}
