//! Play the dice game in a terminal.
//!
//! Usage: dice-roller --winning-score 50 --scripted
//!
//! Reads one command per line from stdin and redraws the board after every
//! change. Logs go to stderr; set `--log-level debug` to follow the engine.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dice_roller::audio::TerminalBell;
use dice_roller::core::{GameConfig, GameError};
use dice_roller::session::{Command, Session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dice-roller")]
#[command(about = "Two-player dice game with an optional scripted opponent")]
struct Args {
    /// YAML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Score to hit exactly to win a round (minimum 2)
    #[arg(short, long, allow_negative_numbers = true)]
    winning_score: Option<i64>,

    /// Seat the scripted opponent in the second seat
    #[arg(long)]
    scripted: bool,

    /// Seed for dice and scripted decisions
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between scripted-opponent moves
    #[arg(long)]
    bot_tick_ms: Option<u64>,

    /// Log filter (e.g. "info", "dice_roller=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_yaml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(score) = self.winning_score {
            config = config.with_winning_score(score);
        }
        if self.scripted {
            config = config.with_scripted(true);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.bot_tick_ms {
            config = config.with_bot_tick_ms(ms);
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level).context("invalid log level")?)
        .with_writer(std::io::stderr)
        .init();

    let config = args.game_config()?;
    info!(
        winning_score = config.winning_score,
        scripted = config.scripted,
        seed = ?config.seed,
        "starting dice-roller"
    );

    let (session, mailbox, mut snapshots) =
        Session::new(&config, Box::new(TerminalBell::new(std::io::stdout())));
    let session = tokio::spawn(session.run());

    let board = tokio::spawn(async move {
        loop {
            let frame = snapshots.borrow_and_update().to_string();
            println!("\n{frame}");
            if snapshots.changed().await.is_err() {
                break;
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        match mailbox.send(command).await {
            Ok(()) => {}
            Err(err @ (GameError::NotStarted | GameError::ScriptedTurn)) => eprintln!("{err}"),
            Err(err) => {
                warn!(%err, "session ended");
                break;
            }
        }
    }

    drop(mailbox);
    session.await.context("session task panicked")?;
    board.await.context("board task panicked")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_into_config() {
        let args = Args::parse_from([
            "dice-roller",
            "--winning-score",
            "1",
            "--scripted",
            "--seed",
            "9",
            "--bot-tick-ms",
            "250",
        ]);
        let config = args.game_config().unwrap();

        assert_eq!(config.winning_score, 2);
        assert!(config.scripted);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.timings.bot_tick_ms, 250);
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["dice-roller"]);
        let config = args.game_config().unwrap();

        assert_eq!(config, GameConfig::default());
        assert_eq!(args.log_level, "warn");
    }
}
