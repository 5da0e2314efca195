use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "scorecast-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn write_lineup_fixture(label: &str, team: &str) -> std::path::PathBuf {
    let batters: Vec<String> = (0..9)
        .map(|idx| {
            format!(
                r#"{{"name": "{team}{idx}", "ab": 300, "h": 90, "doubles": 20,
                    "triples": 5, "hr": 5, "bb": 30, "so": 50, "sf": 5,
                    "sh": 5, "gdp": 5, "sb": 10, "cs": 5}}"#
            )
        })
        .collect();
    let json = format!(
        r#"{{"team": "{team}", "batters": [{}]}}"#,
        batters.join(",")
    );
    let path = temp_path(label);
    std::fs::write(&path, json).expect("write fixture");
    path
}

#[test]
fn cli_writes_a_json_report() {
    let exe = env!("CARGO_BIN_EXE_scorecast");
    let away = write_lineup_fixture("away-json", "Visitors");
    let home = write_lineup_fixture("home-json", "Hosts");
    let output_path = temp_path("report-json");

    let status = Command::new(exe)
        .args(["--iterations", "50", "--seed", "7", "--report", "json", "--away"])
        .arg(&away)
        .arg("--home")
        .arg(&home)
        .arg("--output")
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(output_path).expect("read output");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(parsed["iterations_run"], 50);
    assert_eq!(parsed["away"]["name"], "Visitors");
    assert_eq!(parsed["home"]["name"], "Hosts");
}

#[test]
fn cli_console_report_names_both_teams() {
    let exe = env!("CARGO_BIN_EXE_scorecast");
    let away = write_lineup_fixture("away-console", "Visitors");
    let home = write_lineup_fixture("home-console", "Hosts");

    let output = Command::new(exe)
        .args(["--iterations", "25", "--box-score", "--away"])
        .arg(&away)
        .arg("--home")
        .arg(&home)
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scorecast"));
    assert!(stdout.contains("Visitors"));
    assert!(stdout.contains("Hosts"));
    assert!(stdout.contains("Final:"));
}

#[test]
fn cli_rejects_a_degenerate_lineup() {
    let exe = env!("CARGO_BIN_EXE_scorecast");
    let away = write_lineup_fixture("away-bad", "Visitors");
    let bad_json = r#"{"team": "Ghosts", "batters": [
        {"name": "NoAtBats", "ab": 0, "h": 0, "doubles": 0, "triples": 0,
         "hr": 0, "bb": 0, "so": 0, "sf": 0, "sh": 0, "gdp": 0, "sb": 0, "cs": 0}
    ]}"#;
    let home = temp_path("home-bad");
    std::fs::write(&home, bad_json).expect("write fixture");

    let output = Command::new(exe)
        .args(["--iterations", "5", "--away"])
        .arg(&away)
        .arg("--home")
        .arg(&home)
        .output()
        .expect("run cli");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at-bat total is zero"));
}
