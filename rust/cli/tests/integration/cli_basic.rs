use crate::helpers::cli_runner::CliRunner;

#[test]
fn help_lists_all_commands() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["apply", "check", "deliveries", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn version_prints_and_exits_zero() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("railbuild"));
}

#[test]
fn unknown_subcommand_shows_command_list_on_stderr() {
    let res = CliRunner::new().run(&["survey"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Commands:"), "stderr={}", res.stderr);
    assert!(res.stderr.contains("  deliveries"));
}

#[test]
fn missing_arguments_are_a_usage_error() {
    let res = CliRunner::new().run(&["apply", "--map", "board.toml"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("--snapshot"), "stderr={}", res.stderr);
}
