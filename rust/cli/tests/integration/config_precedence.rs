use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;

#[test]
fn cfg_shows_defaults() {
    let cli = CliRunner::new();
    let res = cli.run(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["difficulty"]["value"], "medium");
    assert_eq!(json["difficulty"]["source"], "default");
    assert_eq!(json["bot_delay_ms"]["value"], 900);
    assert!(json["seed"]["value"].is_null());
}

#[test]
fn env_overrides_file() {
    let cli = CliRunner::new();
    let cfg_path = cli.dir().join("mindshift.toml");
    std::fs::write(
        &cfg_path,
        "difficulty = \"hard\"\nseed = \"from-file\"\nbot_delay_ms = 0\n",
    )
    .unwrap();
    let cfg = cfg_path.to_string_lossy().into_owned();

    let res = cli.run_with_env(
        &["cfg"],
        &[("MINDSHIFT_CONFIG", &cfg), ("MINDSHIFT_SEED", "from-env")],
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["difficulty"]["value"], "hard");
    assert_eq!(json["difficulty"]["source"], "file");
    assert_eq!(json["seed"]["value"], "from-env");
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["bot_delay_ms"]["source"], "file");
}

#[test]
fn flag_overrides_env_seed() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["deal", "--seed", "flag"], &[("MINDSHIFT_SEED", "env")]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Seed: flag"));

    let res = cli.run_with_env(&["deal"], &[("MINDSHIFT_SEED", "env")]);
    assert!(res.stdout.contains("Seed: env"));
}

#[test]
fn invalid_env_difficulty_fails() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[("MINDSHIFT_DIFFICULTY", "nightmare")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("nightmare"));
}
