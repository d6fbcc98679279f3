use crate::helpers::cli_runner::CliRunner;
use mindshift_ai::{Personality, create_bot};
use mindshift_engine::engine::Game;
use mindshift_engine::logger::GameRecord;
use mindshift_engine::state::{Difficulty, Side};

/// Input a player would type to finish the game `seed` deals: first legal
/// card, otherwise draw, otherwise pass.
fn script_for(difficulty: Difficulty, seed: &str) -> (String, Game) {
    let bot = create_bot(Personality::for_difficulty(difficulty));
    let mut game = Game::new(difficulty, seed);
    let mut input = String::new();
    while !game.is_over() {
        if game.state().phase.to_act() == Some(Side::Bot) {
            game.bot_turn(bot.as_ref()).unwrap();
            continue;
        }
        if let Some(&i) = game.playable(Side::Player).first() {
            input.push_str(&format!("{}\n", i + 1));
            game.player_play(i).unwrap();
        } else if !game.state().deck.is_empty() {
            input.push_str("d\n");
            game.player_draw().unwrap();
        } else {
            input.push_str("p\n");
            game.player_pass().unwrap();
        }
    }
    (input, game)
}

#[test]
fn quit_exits_zero() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "door", "--delay-ms", "0"], "q\n");
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Your hand:"));
    assert!(res.stdout.contains("seed=door"));
}

#[test]
fn closed_input_is_interrupted() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "eof", "--delay-ms", "0"], "");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("Interrupted"));
}

#[test]
fn excessive_delay_is_rejected() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--delay-ms", "60000"], "q\n");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("delay-ms"));
}

#[test]
fn finished_game_is_recorded_and_counted() {
    let cli = CliRunner::new();
    let (mut input, expected) = script_for(Difficulty::Hard, "recorded");
    input.push_str("q\n");

    let res = cli.run_with_input(
        &[
            "play",
            "--difficulty",
            "hard",
            "--seed",
            "recorded",
            "--delay-ms",
            "0",
            "--records",
            "records/games.jsonl",
        ],
        &input,
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Game over."));

    let text = std::fs::read_to_string(cli.dir().join("records").join("games.jsonl")).unwrap();
    let rec: GameRecord = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert_eq!(rec.winner, expected.winner());
    assert_eq!(rec.difficulty, Difficulty::Hard);

    let stats = cli.run(&["stats", "--input", "records"]);
    assert_eq!(stats.exit_code, 0, "{}", stats.stderr);
    let v: serde_json::Value = serde_json::from_str(&stats.stdout).unwrap();
    assert_eq!(v["total"], 1);
    assert_eq!(v["by_difficulty"]["hard"], 1);
}
