//! Async play loop
//!
//! Two producers feed one consumer: a ticker and a line reader. Only the
//! loop touches the [`Game`], so every mutation happens on one task.

use std::fmt;
use std::thread;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::command::PROMPT;
use crate::core::config::GameConfig;
use crate::core::error::{ArenaError, Result};
use crate::core::types::RunState;
use crate::game::Game;

/// A line waits here until the loop takes it
pub const COMMAND_CHANNEL_CAPACITY: usize = 1;

/// Forward lines from an async reader until it closes
///
/// The channel closes when the input hits EOF or a read fails.
pub fn spawn_command_reader<R>(input: R) -> mpsc::Receiver<String>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    tokio::spawn(read_commands(input, sender));
    receiver
}

async fn read_commands<R>(input: R, commands: mpsc::Sender<String>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if commands.send(line).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Failed to read command input: {}", e);
                break;
            }
        }
    }
    tracing::debug!("Command input closed");
}

/// Read stdin on its own thread
///
/// Blocking stdin reads must not hold up runtime shutdown, so this stays off
/// the tokio blocking pool.
pub fn spawn_console_reader() -> mpsc::Receiver<String> {
    use std::io::BufRead;

    let (sender, receiver) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if sender.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

impl Game {
    /// Play a whole game over `input`, writing everything the player sees to `output`
    pub async fn run<R, W>(&mut self, input: R, output: &mut W, config: &GameConfig) -> Result<()>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin,
    {
        config.validate()?;
        let commands = spawn_command_reader(input);
        self.play(commands, output, config.tick_period(), config.entropy)
            .await
    }

    /// Attach the player, greet them, then run the loop
    pub async fn play<W>(
        &mut self,
        commands: mpsc::Receiver<String>,
        output: &mut W,
        tick_period: Duration,
        entropy: u8,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        check_tick_period(tick_period)?;
        let welcome = self.attach_player();
        emit(output, &welcome).await?;
        write_prompt(output).await?;
        self.run_play_loop(commands, output, tick_period, entropy)
            .await
    }

    /// Multiplex ticks and commands until the game ends
    ///
    /// The first tick fires one full period after the loop starts. A closed
    /// command channel ends the game. A zero `tick_period` is rejected.
    pub async fn run_play_loop<W>(
        &mut self,
        mut commands: mpsc::Receiver<String>,
        output: &mut W,
        tick_period: Duration,
        entropy: u8,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        check_tick_period(tick_period)?;
        let mut ticker = time::interval_at(Instant::now() + tick_period, tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.state() != RunState::Ended {
            tokio::select! {
                _ = ticker.tick() => {
                    for event in self.process_mole_moves(entropy)? {
                        if event.is_visible() {
                            emit(output, &event).await?;
                        }
                    }
                }

                line = commands.recv() => {
                    let Some(line) = line else {
                        tracing::info!("Player input closed");
                        self.end();
                        break;
                    };
                    let reports = self.process_player_input(&line)?;
                    if !reports.is_empty() {
                        for report in &reports {
                            emit(output, report).await?;
                        }
                        write_prompt(output).await?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// `interval_at` panics on a zero period
fn check_tick_period(tick_period: Duration) -> Result<()> {
    if tick_period.is_zero() {
        return Err(ArenaError::InvalidConfig(
            "tick period must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

async fn emit<W>(output: &mut W, message: &impl fmt::Display) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{message}\n").as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

async fn write_prompt<W>(output: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reader_forwards_lines_then_closes() {
        let mut lines = spawn_command_reader(&b"moles\n\nquit"[..]);
        assert_eq!(lines.recv().await.as_deref(), Some("moles"));
        assert_eq!(lines.recv().await.as_deref(), Some(""));
        assert_eq!(lines.recv().await.as_deref(), Some("quit"));
        assert_eq!(lines.recv().await, None);
    }

    #[tokio::test]
    async fn test_blank_line_gets_no_prompt() {
        let mut game = Game::with_seed(3);
        game.init(2, 2).unwrap();

        let (sender, receiver) = mpsc::channel(4);
        sender.send(String::new()).await.unwrap();
        drop(sender);

        let mut output = Vec::new();
        game.run_play_loop(receiver, &mut output, Duration::from_secs(3600), 0)
            .await
            .unwrap();
        assert!(output.is_empty());
        assert_eq!(game.state(), RunState::Ended);
    }

    #[tokio::test]
    async fn test_zero_tick_period_is_an_error() {
        let mut game = Game::with_seed(3);
        game.init(2, 2).unwrap();

        let (_sender, receiver) = mpsc::channel(1);
        let mut output = Vec::new();
        let result = game
            .run_play_loop(receiver, &mut output, Duration::ZERO, 30)
            .await;
        assert!(matches!(result, Err(ArenaError::InvalidConfig(_))));
        assert!(output.is_empty());
    }
}
