use crate::helpers::cli_runner::CliRunner;
use crate::helpers::records::{record, to_jsonl};
use mindshift_engine::state::{Difficulty, Side};
use serde_json::Value;
use std::fs;

#[test]
fn sim_output_feeds_stats() {
    let cli = CliRunner::new();
    let sim = cli.run(&[
        "sim",
        "--games",
        "6",
        "--difficulty",
        "easy",
        "--seed",
        "wf",
        "--player",
        "impulsive",
        "--output",
        "out/sim.jsonl",
    ]);
    assert_eq!(sim.exit_code, 0, "{}", sim.stderr);
    let summary: Value = serde_json::from_str(&sim.stdout).unwrap();
    assert_eq!(summary["games"], 6);
    assert_eq!(summary["bot"], "impulsive");

    let stats = cli.run(&["stats", "--input", "out/sim.jsonl"]);
    assert_eq!(stats.exit_code, 0, "{}", stats.stderr);
    let v: Value = serde_json::from_str(&stats.stdout).unwrap();
    assert_eq!(v["total"], 6);
    assert_eq!(v["by_difficulty"]["easy"], 6);
    assert_eq!(v["player_wins"], summary["player_wins"]);
    assert_eq!(v["bot_wins"], summary["bot_wins"]);
    assert_eq!(v["recent"][0]["seed"], "wf-5");
}

#[test]
fn stats_reads_compressed_directory() {
    let cli = CliRunner::new();
    let dir = cli.dir().join("history");
    fs::create_dir_all(dir.join("older")).unwrap();
    fs::write(
        dir.join("a.jsonl"),
        to_jsonl(&[record(1, Difficulty::Medium, Some(Side::Player))]),
    )
    .unwrap();
    let packed = zstd::bulk::compress(
        to_jsonl(&[record(2, Difficulty::Hard, None)]).as_bytes(),
        3,
    )
    .unwrap();
    fs::write(dir.join("older").join("b.jsonl.zst"), packed).unwrap();

    let res = cli.run(&["stats", "--input", "history"]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    let v: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["total"], 2);
    assert_eq!(v["blocked"], 1);
    assert_eq!(v["achievements"][0]["title"], "First Win");
}

#[test]
fn stats_on_garbage_file_fails() {
    let cli = CliRunner::new();
    fs::write(cli.dir().join("bad.jsonl"), "not a record\n").unwrap();
    let res = cli.run(&["stats", "--input", "bad.jsonl"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid record"));
}
