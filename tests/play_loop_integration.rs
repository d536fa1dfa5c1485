//! Integration tests for the async play loop
//!
//! Commands come from in-memory readers or channels and output is collected
//! in a `Vec<u8>`. Tick tests run on a paused tokio clock.

use std::time::Duration;

use tokio::sync::mpsc;
use whack_a_mole::command::{PROMPT, WELCOME_BANNER};
use whack_a_mole::core::config::GameConfig;
use whack_a_mole::core::error::ArenaError;
use whack_a_mole::core::types::{MoleBucket, RunState};
use whack_a_mole::game::Game;

/// Ticks never fire during these tests
fn quiet_config() -> GameConfig {
    GameConfig {
        tick_ms: 3_600_000,
        entropy: 0,
        ..GameConfig::default()
    }
}

async fn play_script(game: &mut Game, script: &'static [u8]) -> String {
    let mut output = Vec::new();
    game.run(script, &mut output, &quiet_config()).await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_scripted_session() {
    let mut game = Game::with_seed(11);
    game.init(3, 3).unwrap();

    let output = play_script(&mut game, b"moles\nholes\nhelp\nwhack 2\nquit\n").await;

    assert!(output.starts_with(WELCOME_BANNER));
    assert!(output.contains("Alive: 3\nDead: 0"));
    assert!(output.contains("hole: 1\nhole: 2\nhole: 3"));
    assert!(output.contains("HELP HELP"));
    assert!(output.contains("SHLONK!"));
    assert!(output.contains("GOODBYE QUITTER!"));
    assert_eq!(game.state(), RunState::Ended);
}

#[tokio::test]
async fn test_prompt_after_each_command() {
    let mut game = Game::with_seed(11);
    game.init(3, 3).unwrap();

    let output = play_script(&mut game, b"moles\n\nholes\nquit\n").await;

    // One after the banner, one per non-blank command
    assert_eq!(output.matches(PROMPT).count(), 4);
    assert!(output.ends_with(PROMPT));
}

#[tokio::test]
async fn test_end_of_input_ends_game() {
    let mut game = Game::with_seed(11);
    game.init(2, 2).unwrap();

    let output = play_script(&mut game, b"holes\n").await;

    assert!(output.contains("hole: 2"));
    assert!(!output.contains("GOODBYE"));
    assert_eq!(game.state(), RunState::Ended);
}

#[tokio::test]
async fn test_win_stops_the_loop() {
    let mut game = Game::with_seed(11);
    game.init(2, 2).unwrap();
    for id in game.moles().ids_in(MoleBucket::Housed) {
        game.toggle_mole(id);
    }

    let output = play_script(&mut game, b"whack 1\nwhack 2\nmoles\n").await;

    assert!(output.contains("bonked out of existence!"));
    assert!(output.contains("Moles eliminated, YOU WIN!!!!"));
    assert!(!output.contains("Alive:"));
    assert_eq!(game.state(), RunState::Ended);
    assert!(game.check_win(2));
}

#[tokio::test]
async fn test_bad_commands_keep_playing() {
    let mut game = Game::with_seed(11);
    game.init(3, 3).unwrap();

    let output = play_script(&mut game, b"whack\nwhack 99\nfly\nquit\n").await;

    assert!(output.contains("Hole ID not specified"));
    assert!(output.contains("Hole ID not recognized"));
    assert!(output.contains("unknown command: fly"));
    assert_eq!(game.moles().dead_count(), 0);
}

#[tokio::test]
async fn test_unvalidated_config_is_rejected() {
    let mut game = Game::with_seed(11);
    game.init(2, 2).unwrap();

    let config = GameConfig {
        tick_ms: 0,
        ..GameConfig::default()
    };
    let mut output = Vec::new();
    let result = game.run(&b"quit\n"[..], &mut output, &config).await;

    assert!(matches!(result, Err(ArenaError::InvalidConfig(_))));
    assert!(output.is_empty());
    assert_eq!(game.state(), RunState::Initializing);
}

#[tokio::test(start_paused = true)]
async fn test_ticks_move_moles_between_commands() {
    let mut game = Game::with_seed(5);
    game.init(4, 2).unwrap();
    game.attach_player();

    let (sender, receiver) = mpsc::channel(1);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        let _ = sender.send("quit".to_string()).await;
    });

    let mut output = Vec::new();
    game.run_play_loop(receiver, &mut output, Duration::from_secs(1), 100)
        .await
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    // Three ticks, each moving both moles
    assert_eq!(output.matches("vanished!").count(), 6);
    assert!(!output.contains("dug into"));
    assert!(output.ends_with(&format!("GOODBYE QUITTER!\n{PROMPT}")));
    game.check_invariants().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_no_tick_before_first_period() {
    let mut game = Game::with_seed(5);
    game.init(4, 2).unwrap();
    game.attach_player();

    let (sender, receiver) = mpsc::channel(1);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(900)).await;
        let _ = sender.send("quit".to_string()).await;
    });

    let mut output = Vec::new();
    game.run_play_loop(receiver, &mut output, Duration::from_secs(1), 100)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, format!("GOODBYE QUITTER!\n{PROMPT}"));
}
