use crate::*;
use anyhow::Context;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::io::Lines;
use tokio::process::Child;
use tokio::process::ChildStdin;
use tokio::process::ChildStdout;
use tokio::process::Command;

/// Agent backed by an external engine process speaking UCI over stdio.
///
/// The process is spawned on the first reset and reused across games.
/// It is killed when the agent is dropped.
pub struct Uci {
    program: PathBuf,
    engine: Option<Engine>,
}

struct Engine {
    program: String,
    _process: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

impl Uci {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            engine: None,
        }
    }

    fn spawn(&self) -> anyhow::Result<Engine> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("spawn engine {}", self.program.display()))?;
        let stdin = child.stdin.take().context("engine stdin")?;
        let stdout = child.stdout.take().context("engine stdout")?;
        Ok(Engine {
            program: self.program.display().to_string(),
            _process: child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
        })
    }
    fn engine(&mut self) -> anyhow::Result<&mut Engine> {
        self.engine
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("engine {} not started", self.program.display()))
    }
}

impl Engine {
    async fn send(&mut self, command: &str) -> anyhow::Result<()> {
        log::trace!("[uci {}] > {}", self.program, command);
        self.stdin.write_all(command.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;
        Ok(())
    }
    async fn recv(&mut self) -> anyhow::Result<String> {
        let line = self
            .stdout
            .next_line()
            .await?
            .ok_or_else(|| anyhow::anyhow!("engine closed its output"))?;
        log::trace!("[uci {}] < {}", self.program, line);
        Ok(line)
    }
    /// Discards output up to and including the line starting with `token`.
    async fn expect(&mut self, token: &str) -> anyhow::Result<()> {
        while !self.recv().await?.trim().starts_with(token) {}
        Ok(())
    }
}

#[async_trait::async_trait]
impl Agent for Uci {
    /// Starts the engine if needed, then readies it for a new game.
    /// Output left over from an abandoned search is discarded.
    async fn reset(&mut self) -> anyhow::Result<()> {
        if self.engine.is_none() {
            let mut engine = self.spawn()?;
            engine.send("uci").await?;
            engine.expect("uciok").await?;
            log::info!("[uci {}] engine started", engine.program);
            self.engine = Some(engine);
        }
        let engine = self.engine()?;
        engine.send("stop").await?;
        engine.send("ucinewgame").await?;
        engine.send("isready").await?;
        engine.expect("readyok").await?;
        Ok(())
    }
    async fn propose(&mut self, history: &MoveHistory, budget: Duration) -> anyhow::Result<String> {
        let engine = self.engine()?;
        engine.send(&position(history)).await?;
        engine.send(&format!("go movetime {}", budget.as_millis())).await?;
        loop {
            let line = engine.recv().await?;
            if let Some(mv) = bestmove(&line) {
                log::debug!("[uci {}] bestmove {}", engine.program, mv);
                return match mv {
                    "(none)" | "0000" => Err(anyhow::anyhow!("engine has no move")),
                    mv => Ok(mv.to_string()),
                };
            }
        }
    }
}

/// Position command for the game so far.
fn position(history: &MoveHistory) -> String {
    match history.is_empty() {
        true => "position startpos".to_string(),
        false => format!("position startpos moves {}", history),
    }
}

/// Move named by a `bestmove` line, ignoring any ponder suffix.
fn bestmove(line: &str) -> Option<&str> {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("bestmove") => words.next(),
        _ => None,
    }
}
