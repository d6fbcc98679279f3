use crate::helpers::cli_runner::CliRunner;

#[test]
fn help_lists_all_commands() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in ["play", "sim", "stats", "deal", "rng", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn version_prints_and_exits_zero() {
    let cli = CliRunner::new();
    let res = cli.run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("mindshift"));
}

#[test]
fn unknown_subcommand_shows_command_list_on_stderr() {
    let cli = CliRunner::new();
    let res = cli.run(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Commands:"),
        "---stderr---\n{}\n------------",
        res.stderr
    );
    assert!(res.stderr.contains("play"));
}

#[test]
fn sim_rejects_zero_games() {
    let cli = CliRunner::new();
    let res = cli.run(&["sim", "--games", "0"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn deal_is_stable_for_a_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["deal", "--seed", "table-7"]);
    let b = cli.run(&["deal", "--seed", "table-7"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.contains("Deck: 29 cards"));
}

#[test]
fn rng_without_seed_picks_one() {
    let cli = CliRunner::new();
    let res = cli.run(&["rng"]);
    assert_eq!(res.exit_code, 0);
    let seed_line = res
        .stdout
        .lines()
        .find(|l| l.starts_with("Seed: "))
        .expect("seed line");
    assert_eq!(seed_line.trim_start_matches("Seed: ").len(), 16);
}
