use serial_test::parallel;

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::fixtures::*;
use crate::helpers::temp_files::TempFileManager;

#[test]
#[parallel]
fn connected_track_passes() {
    let tfm = TempFileManager::new().expect("temp dir");
    let map = tfm.create_file("board.toml", TWO_CITIES_TOML).expect("board");
    let snap = tfm.create_file("snap.json", CONNECTED_SNAPSHOT).expect("snapshot");

    let res = CliRunner::new().run(&[
        "check",
        "--map",
        TempFileManager::arg(&map),
        "--snapshot",
        TempFileManager::arg(&snap),
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout.trim(), "OK: 1 links, 1 players with track");
}

#[test]
#[parallel]
fn stranded_track_is_reported_per_player() {
    let tfm = TempFileManager::new().expect("temp dir");
    let map = tfm.create_file("board.json", CITY_AND_TOWN_JSON).expect("board");
    let snap = tfm.create_file("snap.json", STRANDED_SNAPSHOT).expect("snapshot");

    let res = CliRunner::new().run(&[
        "check",
        "--map",
        TempFileManager::arg(&map),
        "--snapshot",
        TempFileManager::arg(&snap),
    ]);
    assert_eq!(res.exit_code, 2);
    let lines: Vec<&str> = res.stderr.lines().collect();
    assert_eq!(
        lines,
        vec![
            "player 1: all of a player's links must trace back over a player's track to a city",
            "Error: Invalid input: 1 check(s) failed",
        ]
    );
    assert!(res.stdout.is_empty());
}

#[test]
#[parallel]
fn track_off_the_board_is_an_internal_fault() {
    let tfm = TempFileManager::new().expect("temp dir");
    let map = tfm.create_file("board.toml", TWO_CITIES_TOML).expect("board");
    let snap = tfm
        .create_file(
            "snap.json",
            r#"{
                "players": [0],
                "cash": { "0": 0 },
                "links": [
                    { "source": { "x": 0, "y": 0 }, "steps": ["EAST", "EAST", "EAST"], "owner": 0, "complete": true }
                ]
            }"#,
        )
        .expect("snapshot");

    let res = CliRunner::new().run(&[
        "check",
        "--map",
        TempFileManager::arg(&map),
        "--snapshot",
        TempFileManager::arg(&snap),
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("internal error: link #0 leaves the board"), "stderr={}", res.stderr);
}
