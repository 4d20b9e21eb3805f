use std::future::Future;
use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tokio::sync::oneshot;

const RULE_WIDTH: usize = 72;

/// Read text from `file` if given, otherwise from stdin.
///
/// On an interactive terminal the user is prompted and input is read until
/// EOF; Ctrl+C ends the read with empty input. Invalid UTF-8 is replaced.
pub async fn read_text(file: Option<&Path>, prompt: &str) -> Result<String> {
    if let Some(path) = file {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    if !std::io::stdin().is_terminal() {
        return read_until(std::io::stdin(), std::future::pending::<()>()).await;
    }

    eprintln!("{prompt} When finished, press Ctrl+D (macOS/Linux) or Ctrl+Z then Enter (Windows).");
    eprintln!("{}", "-".repeat(RULE_WIDTH));

    let text = read_until(std::io::stdin(), tokio::signal::ctrl_c()).await?;

    eprintln!("{}", "-".repeat(RULE_WIDTH));
    Ok(text)
}

/// Read `reader` to EOF, or give up with empty text once `interrupt` resolves.
///
/// The read runs on a detached OS thread rather than tokio's blocking pool,
/// so an abandoned read never holds up runtime shutdown.
async fn read_until<R, F>(reader: R, interrupt: F) -> Result<String>
where
    R: Read + Send + 'static,
    F: Future,
{
    let pending = spawn_read(reader);

    tokio::select! {
        read = pending => {
            let bytes = read
                .context("Input reader stopped unexpectedly")?
                .context("Failed to read stdin")?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ = interrupt => Ok(String::new()),
    }
}

fn spawn_read<R>(mut reader: R) -> oneshot::Receiver<std::io::Result<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let result = reader.read_to_end(&mut buf).map(|_| buf);
        // The receiver is gone when the read was interrupted
        let _ = tx.send(result);
    });

    rx
}
