use predicates::str::contains;
use std::fs;

mod common;
use common::{no_config, rti, temp_path};

#[test]
fn test_export_csv() {
    let out = temp_path("export_csv", "csv");

    rti()
        .args([
            "--config-file",
            &no_config("export_csv"),
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--date",
            "2024-06-20",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "date,weekday,owner,is_today");
    assert_eq!(lines.len(), 15);
    assert!(content.contains("2024-06-20,Giovedì,Mraco,true"));
    assert!(content.contains("2024-06-17,Lunedì,Bosca,false"));
}

#[test]
fn test_export_json() {
    let out = temp_path("export_json", "json");

    rti()
        .args([
            "--config-file",
            &no_config("export_json"),
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--date",
            "2024-06-17",
        ])
        .assert()
        .success();

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("json written")).unwrap();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 14);
    assert_eq!(rows[7]["date"], "2024-06-17");
    assert_eq!(rows[7]["owner"], "Bosca");
    assert_eq!(rows[6]["owner"], "Mraco");
}

#[test]
fn test_export_existing_file_needs_force() {
    let out = temp_path("export_force", "csv");
    fs::write(&out, "old").unwrap();

    // answering "n" keeps the old file
    rti()
        .args([
            "--config-file",
            &no_config("export_force"),
            "export",
            "--file",
            &out,
            "--date",
            "2024-06-20",
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rti()
        .args([
            "--config-file",
            &no_config("export_force"),
            "export",
            "--file",
            &out,
            "--date",
            "2024-06-20",
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}
