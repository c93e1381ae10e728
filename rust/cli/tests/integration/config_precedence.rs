use serde_json::Value;
use serial_test::serial;

use crate::helpers::cli_runner::{CliRunner, clear_railbuild_env};
use crate::helpers::temp_files::TempFileManager;

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_railbuild_env();
    let res = CliRunner::new().run(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert_eq!(json["legacy_games"]["value"], serde_json::json!([]));
    assert_eq!(json["legacy_games"]["source"], "default");
    assert_eq!(json["log_filter"]["value"], "warn");
    assert_eq!(json["log_filter"]["source"], "default");
    assert!(json["journal"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_railbuild_env();
    let tfm = TempFileManager::new().unwrap();
    let cfg_path = tfm
        .create_file(
            "railbuild.toml",
            "legacy_games = [\"g-100\"]\nlog_filter = \"info\"\njournal = \"builds.jsonl\"\n",
        )
        .unwrap();
    let cfg_arg = TempFileManager::arg(&cfg_path);
    let cli = CliRunner::new();

    let from_file: Value =
        serde_json::from_str(&cli.run_with_env(&["cfg"], &[("RAILBUILD_CONFIG", cfg_arg)]).stdout)
            .unwrap();
    assert_eq!(from_file["legacy_games"]["value"], serde_json::json!(["g-100"]));
    assert_eq!(from_file["legacy_games"]["source"], "file");
    assert_eq!(from_file["log_filter"]["value"], "info");
    assert_eq!(from_file["journal"]["source"], "file");

    let res = cli.run_with_env(
        &["cfg"],
        &[
            ("RAILBUILD_CONFIG", cfg_arg),
            ("RAILBUILD_LEGACY_GAMES", "g-1, g-2"),
            ("RAILBUILD_LOG", "railbuild_engine=debug"),
        ],
    );
    let from_env: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(from_env["legacy_games"]["value"], serde_json::json!(["g-1", "g-2"]));
    assert_eq!(from_env["legacy_games"]["source"], "env");
    assert_eq!(from_env["log_filter"]["value"], "railbuild_engine=debug");
    assert_eq!(from_env["log_filter"]["source"], "env");
    assert_eq!(from_env["journal"]["value"], "builds.jsonl");
    assert_eq!(from_env["journal"]["source"], "file");
}

#[test]
#[serial]
fn broken_config_files_fail_every_command() {
    clear_railbuild_env();
    let tfm = TempFileManager::new().unwrap();
    let cfg_path = tfm.create_file("railbuild.toml", "legacy_games = 7\n").unwrap();
    let env = [("RAILBUILD_CONFIG", TempFileManager::arg(&cfg_path))];
    let cli = CliRunner::new();

    let res = cli.run_with_env(&["cfg"], &env);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: Configuration error: Invalid configuration"));

    let res = cli.run_with_env(
        &["check", "--map", "unused.toml", "--snapshot", "unused.json"],
        &env,
    );
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"), "stderr={}", res.stderr);
}

#[test]
#[serial]
fn config_errors_come_before_file_errors() {
    clear_railbuild_env();
    let env = [("RAILBUILD_LOG", "railbuild=loud")];
    let cli = CliRunner::new();

    for args in [
        &["apply", "--map", "m.toml", "--snapshot", "s.json", "--action", "a.json"][..],
        &["deliveries", "--map", "m.toml", "--snapshot", "s.json"][..],
        &["cfg"][..],
    ] {
        let res = cli.run_with_env(args, &env);
        assert_eq!(res.exit_code, 2, "args={:?}", args);
        assert!(
            res.stderr.starts_with("Error: Configuration error: Invalid configuration"),
            "args={:?} stderr={}",
            args,
            res.stderr
        );
        assert!(res.stderr.contains("log_filter"), "stderr={}", res.stderr);
    }
}

#[test]
#[serial]
fn legacy_games_skip_the_post_build_checks() {
    clear_railbuild_env();
    let tfm = TempFileManager::new().unwrap();
    let map = tfm
        .create_file(
            "frontier.toml",
            "name = \"frontier\"\nvariant = \"frontier_limit\"\nwidth = 5\nheight = 3\n\n\
             [[hexes]]\nx = 2\ny = 1\nkind = \"city\"\n",
        )
        .unwrap();
    let snap = tfm
        .create_file(
            "snap.json",
            r#"{ "game_id": "g-old", "players": [0], "cash": { "0": 20 }, "active_player": 0 }"#,
        )
        .unwrap();
    // two straights leaving the city east and west, both left open
    let action = tfm
        .create_file(
            "action.json",
            r#"{ "steps": [
                { "hex": { "x": 1, "y": 1 }, "type": "tile", "shape": "straight", "rotation": 1 },
                { "hex": { "x": 3, "y": 1 }, "type": "tile", "shape": "straight", "rotation": 1 }
            ] }"#,
        )
        .unwrap();
    let args = [
        "apply",
        "--map",
        TempFileManager::arg(&map),
        "--snapshot",
        TempFileManager::arg(&snap),
        "--action",
        TempFileManager::arg(&action),
    ];
    let cli = CliRunner::new();

    let strict = cli.run(&args);
    assert_eq!(strict.exit_code, 2);
    assert!(
        strict.stderr.contains("at most one link incomplete on this map, found 2"),
        "stderr={}",
        strict.stderr
    );

    let legacy = cli.run_with_env(&args, &[("RAILBUILD_LEGACY_GAMES", "g-old")]);
    assert_eq!(legacy.exit_code, 0, "stderr={}", legacy.stderr);
    assert_eq!(legacy.json()["report"]["cost"], 4);
}
