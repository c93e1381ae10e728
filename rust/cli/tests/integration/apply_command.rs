use std::fs;

use serial_test::{parallel, serial};

use crate::helpers::cli_runner::{CliRunner, clear_railbuild_env};
use crate::helpers::fixtures::*;
use crate::helpers::temp_files::TempFileManager;

struct Inputs {
    tfm: TempFileManager,
    map: String,
    snapshot: String,
    action: String,
}

fn inputs(action: &str) -> Inputs {
    let tfm = TempFileManager::new().expect("temp dir");
    let map = tfm.create_file("board.toml", TWO_CITIES_TOML).expect("board");
    let snapshot = tfm.create_file("snap.json", EMPTY_SNAPSHOT).expect("snapshot");
    let action = tfm.create_file("action.json", action).expect("action");
    Inputs {
        map: TempFileManager::arg(&map).to_string(),
        snapshot: TempFileManager::arg(&snapshot).to_string(),
        action: TempFileManager::arg(&action).to_string(),
        tfm,
    }
}

#[test]
#[parallel]
fn prints_report_and_snapshot_to_stdout() {
    let i = inputs(STRAIGHT_ACTION);
    let res = CliRunner::new().run(&[
        "apply", "--map", &i.map, "--snapshot", &i.snapshot, "--action", &i.action,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let json = res.json();
    assert_eq!(json["report"]["cost"], 2);
    assert_eq!(json["report"]["placements"], 1);
    assert_eq!(json["report"]["completed"], 1);
    assert_eq!(json["report"]["released"], 0);
    assert_eq!(json["snapshot"]["cash"]["0"], 8);
    let links = json["snapshot"]["links"].as_array().expect("links");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["owner"], 0);
    assert_eq!(links[0]["complete"], true);
}

#[test]
#[parallel]
fn writes_the_snapshot_to_the_output_file() {
    let i = inputs(STRAIGHT_ACTION);
    let out_path = i.tfm.path("next/snap.json");
    let res = CliRunner::new().run(&[
        "apply",
        "--map",
        &i.map,
        "--snapshot",
        &i.snapshot,
        "--action",
        &i.action,
        "--output",
        TempFileManager::arg(&out_path),
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.json()["cost"], 2);

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).expect("output")).expect("json");
    assert_eq!(saved["game_id"], "g-1");
    assert_eq!(saved["links"].as_array().map(Vec::len), Some(1));
}

#[test]
#[parallel]
fn rejected_builds_print_the_rule_message() {
    let i = inputs(TOWN_ON_CITY_ACTION);
    let out_path = i.tfm.path("never.json");
    let res = CliRunner::new().run(&[
        "apply",
        "--map",
        &i.map,
        "--snapshot",
        &i.snapshot,
        "--action",
        &i.action,
        "--output",
        TempFileManager::arg(&out_path),
    ]);
    assert_eq!(res.exit_code, 2);
    assert_eq!(res.stderr.trim(), "Error: (0,0) is not a town");
    assert!(res.stdout.is_empty());
    assert!(!out_path.exists());
}

#[test]
#[parallel]
fn reads_compressed_snapshots() {
    let i = inputs(STRAIGHT_ACTION);
    let packed = i
        .tfm
        .create_compressed("snap.json.zst", EMPTY_SNAPSHOT)
        .expect("compressed snapshot");
    let res = CliRunner::new().run(&[
        "apply",
        "--map",
        &i.map,
        "--snapshot",
        TempFileManager::arg(&packed),
        "--action",
        &i.action,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.json()["report"]["cost"], 2);
}

#[test]
#[parallel]
fn unreadable_inputs_name_the_file() {
    let i = inputs(STRAIGHT_ACTION);
    let broken = i.tfm.create_file("broken.json", "{ \"steps\": [").expect("write");
    let broken = TempFileManager::arg(&broken).to_string();
    let res = CliRunner::new().run(&[
        "apply", "--map", &i.map, "--snapshot", &i.snapshot, "--action", &broken,
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: Invalid input: "), "stderr={}", res.stderr);
    assert!(res.stderr.contains("broken.json"));
}

#[test]
#[parallel]
fn unknown_variants_are_reported() {
    let i = inputs(STRAIGHT_ACTION);
    let board = format!("variant = \"moon_base\"\n{}", TWO_CITIES_TOML);
    let map = i.tfm.create_file("moon.toml", &board).expect("board");
    let res = CliRunner::new().run(&[
        "apply",
        "--map",
        TempFileManager::arg(&map),
        "--snapshot",
        &i.snapshot,
        "--action",
        &i.action,
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("unknown map variant 'moon_base'"), "stderr={}", res.stderr);
}

#[test]
#[serial]
fn journal_records_every_attempt() {
    clear_railbuild_env();
    let ok = inputs(STRAIGHT_ACTION);
    let journal = ok.tfm.path("logs/builds.jsonl");
    let env = [("RAILBUILD_JOURNAL", TempFileManager::arg(&journal))];

    let res = CliRunner::new().run_with_env(
        &["apply", "--map", &ok.map, "--snapshot", &ok.snapshot, "--action", &ok.action],
        &env,
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let bad = inputs(TOWN_ON_CITY_ACTION);
    let res = CliRunner::new().run_with_env(
        &["apply", "--map", &bad.map, "--snapshot", &bad.snapshot, "--action", &bad.action],
        &env,
    );
    assert_eq!(res.exit_code, 2);

    let text = fs::read_to_string(&journal).expect("journal");
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("record"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["game_id"], "g-1");
    assert_eq!(records[0]["player"], 0);
    assert_eq!(records[0]["outcome"]["status"], "applied");
    assert_eq!(records[0]["outcome"]["cost"], 2);
    assert!(records[0]["ts"].is_string());
    assert_eq!(records[1]["outcome"]["status"], "rejected");
    assert_eq!(records[1]["outcome"]["client_fault"], true);
}

#[test]
#[serial]
fn unwritable_journal_only_warns() {
    clear_railbuild_env();
    let i = inputs(STRAIGHT_ACTION);
    // a directory cannot be opened for appending
    let env = [("RAILBUILD_JOURNAL", TempFileManager::arg(i.tfm.base()))];
    let res = CliRunner::new().run_with_env(
        &["apply", "--map", &i.map, "--snapshot", &i.snapshot, "--action", &i.action],
        &env,
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.starts_with("WARNING: journal"), "stderr={}", res.stderr);
    assert_eq!(res.json()["report"]["cost"], 2);
}
