//! Request execution.
//!
//! [`process`] is the submit pipeline for one input: build the prompt, call the
//! generator, map failures to [`SessionError`]. [`spawn_request`] runs it on a
//! background task and reports back to the UI through a channel.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use super::client::TextGenerator;
use super::errors::SessionError;
use super::prompts::{PromptBuilder, SubmitInput};
use super::session::RequestTicket;

/// Event sent from request tasks to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A request finished.
    Settled {
        /// Ticket of the request.
        ticket: RequestTicket,
        /// Output text or the failure to show.
        result: Result<String, SessionError>,
    },
}

/// Runs one submit against `generator`.
///
/// An input whose decisive field is blank never reaches the generator and
/// yields an empty output.
///
/// # Errors
///
/// Returns the classified [`SessionError`] when the generator fails.
pub async fn process(
    generator: &dyn TextGenerator,
    builder: &PromptBuilder,
    input: &SubmitInput,
) -> Result<String, SessionError> {
    let Some(request) = builder.build(input) else {
        debug!(mode = ?input.mode(), "blank input, skipping model call");
        return Ok(String::new());
    };

    match generator.generate(&request).await {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            let error = SessionError::from(&e);
            info!(
                backend = generator.name(),
                kind = ?error.kind,
                error = %e,
                "request failed"
            );
            Err(error)
        }
    }
}

/// Spawns [`process`] for `input` and sends the result tagged with `ticket`.
///
/// Nothing is sent when shutdown is signalled before the request completes.
pub fn spawn_request(
    generator: Arc<dyn TextGenerator>,
    builder: PromptBuilder,
    input: SubmitInput,
    ticket: RequestTicket,
    tx: mpsc::Sender<SessionEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let result = tokio::select! {
            result = process(generator.as_ref(), &builder, &input) => result,
            () = wait_for_shutdown(&mut shutdown_rx) => {
                debug!(generation = ticket.generation, "request abandoned on shutdown");
                return;
            }
        };
        let _ = tx.send(SessionEvent::Settled { ticket, result }).await;
    });
}

/// Resolves once the shutdown flag is set or the sender is gone.
async fn wait_for_shutdown(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow() {
            return;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}
