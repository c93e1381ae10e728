use serial_test::parallel;

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::fixtures::*;
use crate::helpers::temp_files::TempFileManager;

fn run_deliveries(board_name: &str, board: &str, snapshot: &str) -> serde_json::Value {
    let tfm = TempFileManager::new().expect("temp dir");
    let map = tfm.create_file(board_name, board).expect("board");
    let snap = tfm.create_file("snap.json", snapshot).expect("snapshot");
    let res = CliRunner::new().run(&[
        "deliveries",
        "--map",
        TempFileManager::arg(&map),
        "--snapshot",
        TempFileManager::arg(&snap),
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    res.json()
}

#[test]
#[parallel]
fn complete_links_are_listed_both_ways() {
    let json = run_deliveries("board.toml", TWO_CITIES_TOML, CONNECTED_SNAPSHOT);
    assert_eq!(
        json,
        serde_json::json!([
            {
                "from": { "x": 0, "y": 0 },
                "direction": "EAST",
                "to": { "x": 2, "y": 0 },
                "owner": 0
            },
            {
                "from": { "x": 2, "y": 0 },
                "direction": "WEST",
                "to": { "x": 0, "y": 0 },
                "owner": 0
            }
        ])
    );
}

#[test]
#[parallel]
fn incomplete_track_delivers_nothing() {
    let json = run_deliveries("board.json", CITY_AND_TOWN_JSON, STRANDED_SNAPSHOT);
    assert_eq!(json, serde_json::json!([]));
}
