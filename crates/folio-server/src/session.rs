use folio_core::FolioConfig;
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::collaborators::Services;
use crate::error::ServerError;
use crate::handlers::{apply_completion, dispatch, spawn_call, Completion, Effect};
use crate::protocol::{Intent, Output};
use crate::state::GlobalState;

/// One client connection: reads intents line by line, runs collaborator
/// calls in the background and writes a snapshot after every change.
pub struct Session {
    state: GlobalState,
    services: Services,
}

impl Session {
    pub fn new(config: FolioConfig, services: Services) -> Self {
        Self {
            state: GlobalState::new(config),
            services,
        }
    }

    pub fn state(&self) -> &GlobalState {
        &self.state
    }

    /// Serve until the input is exhausted and every call in flight has
    /// resolved.
    pub async fn serve<R, W>(&self, input: R, mut output: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Completion>();
        let mut lines = input.lines();
        let mut input_open = true;
        let mut in_flight = 0usize;

        let initial = self.state.workspace.read().await.snapshot();
        write_output(&mut output, &Output::Snapshot(initial)).await?;

        loop {
            if !input_open && in_flight == 0 {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line? {
                        Some(line) if line.trim().is_empty() => {}
                        Some(line) => {
                            if self.handle_line(&line, &sender, &mut output).await? {
                                in_flight += 1;
                            }
                        }
                        None => {
                            debug!("input closed with {} call(s) in flight", in_flight);
                            input_open = false;
                        }
                    }
                }
                Some(completion) = receiver.recv(), if in_flight > 0 => {
                    in_flight -= 1;
                    let snapshot = {
                        let mut workspace = self.state.workspace.write().await;
                        apply_completion(&mut workspace, completion);
                        workspace.snapshot()
                    };
                    write_output(&mut output, &Output::Snapshot(snapshot)).await?;
                }
                else => break,
            }
        }

        Ok(())
    }

    /// Apply one input line. Returns `true` when a collaborator call was
    /// started.
    async fn handle_line<W>(
        &self,
        line: &str,
        sender: &UnboundedSender<Completion>,
        output: &mut W,
    ) -> Result<bool, ServerError>
    where
        W: AsyncWrite + Unpin,
    {
        let intent: Intent = match serde_json::from_str(line) {
            Ok(intent) => intent,
            Err(e) => {
                warn!("rejected input line: {}", e);
                let snapshot = self.state.workspace.read().await.snapshot();
                write_output(output, &Output::Error { message: format!("Invalid intent: {}", e) })
                    .await?;
                write_output(output, &Output::Snapshot(snapshot)).await?;
                return Ok(false);
            }
        };
        debug!("intent {:?}", intent);

        let (result, snapshot) = {
            let mut workspace = self.state.workspace.write().await;
            let result = dispatch(&mut workspace, intent);
            (result, workspace.snapshot())
        };

        let mut started = false;
        match result {
            Ok(None) => {}
            Ok(Some(Effect::Caret(position))) => {
                write_output(output, &Output::Caret { position }).await?;
            }
            Ok(Some(Effect::Call(call))) => {
                spawn_call(&self.services, call, sender.clone());
                started = true;
            }
            Err(e) => {
                warn!("intent rejected: {}", e);
                write_output(output, &Output::Error { message: e.to_string() }).await?;
            }
        }

        write_output(output, &Output::Snapshot(snapshot)).await?;
        Ok(started)
    }
}

async fn write_output<W>(output: &mut W, message: &Output) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    output.write_all(line.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
