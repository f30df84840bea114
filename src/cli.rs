//! Terminal front end: line-based REPL over an `IntakeController`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::intake::{IntakeController, prompts};

/// Drive one intake conversation over a line reader and writer.
///
/// Prints the welcome, then answers each non-empty, trimmed line until the
/// conversation completes or input ends. The prompt marker goes to stderr so
/// `writer` only carries the transcript.
pub async fn run<R, W>(
    controller: &mut IntakeController,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(format!("{}\n\n", prompts::WELCOME).as_bytes())
        .await?;
    writer.flush().await?;

    let mut lines = reader.lines();
    eprint!("> ");

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    eprint!("> ");
                    continue;
                }

                let reply = controller.handle_input(line).await;
                writer.write_all(format!("\n{reply}\n\n").as_bytes()).await?;
                writer.flush().await?;

                if controller.is_completed() {
                    break;
                }
                eprint!("> ");
            }
            Ok(None) => break, // EOF
            Err(e) => {
                tracing::error!("Error reading input: {}", e);
                return Err(e);
            }
        }
    }

    if !controller.is_completed() {
        tracing::info!(stage = %controller.stage(), "Input closed before intake completed");
    }
    Ok(())
}
