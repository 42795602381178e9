//! Keeps one MCP server subprocess running and wired to the relay

use anyhow::Context;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;
use tracing::{error, info};

use crate::relay::McpRelay;

/// Delay before a crashed or exited server is started again
pub const RESTART_DELAY: Duration = Duration::from_secs(2);

/// How to start the MCP server
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    pub command: String,
    pub args: Vec<String>,
    pub restart_delay: Duration,
}

impl SupervisorConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: vec!["serve".to_string(), "--stdio".to_string()],
            restart_delay: RESTART_DELAY,
        }
    }
}

/// Spawns the server, pumps its output into the relay, and respawns it on exit.
///
/// Respawn is unconditional: every exit, clean or not, is followed by the
/// restart delay and a new process.
pub struct Supervisor {
    config: SupervisorConfig,
    relay: Arc<McpRelay>,
}

impl Supervisor {
    pub fn new(config: SupervisorConfig, relay: Arc<McpRelay>) -> Self {
        Self { config, relay }
    }

    /// Run forever. Dropping the future kills the current child.
    pub async fn run(self) {
        loop {
            match self.run_once().await {
                Ok(code) => info!("MCP server exited with code {:?}", code),
                Err(e) => error!("MCP server error: {:#}", e),
            }
            self.relay.detach().await;

            tokio::time::sleep(self.config.restart_delay).await;
            info!("Restarting MCP server...");
        }
    }

    /// Start one server process and wait for it to exit
    pub async fn run_once(&self) -> anyhow::Result<Option<i32>> {
        info!(
            "Starting MCP server: {} {}",
            self.config.command,
            self.config.args.join(" ")
        );

        let mut child = Command::new(&self.config.command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to spawn MCP server: {}", self.config.command))?;

        let stdin = child.stdin.take().context("MCP server stdin unavailable")?;
        let stdout = child.stdout.take().context("MCP server stdout unavailable")?;
        let stderr = child.stderr.take().context("MCP server stderr unavailable")?;

        self.relay.attach(stdin).await;
        info!("MCP server started (pid {:?})", child.id());

        let relay = self.relay.clone();
        let stdout_task = tokio::spawn(async move {
            let mut lines = LinesStream::new(BufReader::new(stdout).lines());
            while let Some(Ok(line)) = lines.next().await {
                relay.handle_output_line(&line).await;
            }
        });

        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                info!("MCP Server: {}", line);
            }
        });

        let status = child.wait().await.context("Failed to wait for MCP server")?;
        self.relay.detach().await;
        let _ = stdout_task.await;

        Ok(status.code())
    }
}
