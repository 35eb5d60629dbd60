use crate::assembler::stream_fragment;
use crate::utils::ChatResponse;
use axum::response::sse::Event;
use futures::Stream;
use std::time::Duration;
use tokio_util::sync::{CancellationToken, DropGuard};

enum Phase {
    Head(Box<ChatResponse>),
    Fragment(usize),
    End,
    Closed,
}

struct Emitter {
    phase: Phase,
    chunks: usize,
    interval: Duration,
    cancel: CancellationToken,
    // Fires `cancel` when the body is dropped, e.g. on client disconnect.
    _guard: DropGuard,
}

impl Emitter {
    fn next_phase(&self, part: usize) -> Phase {
        if part < self.chunks {
            Phase::Fragment(part)
        } else {
            Phase::End
        }
    }

    /// Waits one interval; `false` means the stream was cancelled meanwhile.
    async fn pause(&self) -> bool {
        tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::debug!("[Stream] Cancelled before next fragment");
                false
            }
            _ = tokio::time::sleep(self.interval) => true,
        }
    }
}

/// Head frame, `chunks` fragments spaced by `interval`, then `event: end`.
///
/// Dropping the stream (client went away) or cancelling `cancel` stops it
/// before the next fragment; a cancelled stream never sends `event: end`.
/// Dropping the stream also cancels `cancel`.
pub fn get_event_stream(
    head: ChatResponse,
    chunks: usize,
    interval: Duration,
    cancel: CancellationToken,
) -> impl Stream<Item = Result<Event, axum::Error>> {
    let emitter = Emitter {
        phase: Phase::Head(Box::new(head)),
        chunks,
        interval,
        _guard: cancel.clone().drop_guard(),
        cancel,
    };

    futures::stream::unfold(emitter, |mut emitter| async move {
        let event = match std::mem::replace(&mut emitter.phase, Phase::Closed) {
            Phase::Head(head) => {
                emitter.phase = emitter.next_phase(0);
                Event::default().json_data(&*head)
            }
            Phase::Fragment(part) => {
                if part > 0 && !emitter.pause().await {
                    return None;
                }
                emitter.phase = emitter.next_phase(part + 1);
                Event::default().json_data(stream_fragment(part))
            }
            Phase::End => {
                if emitter.chunks > 0 && !emitter.pause().await {
                    return None;
                }
                Ok(Event::default().event("end"))
            }
            Phase::Closed => return None,
        };

        if let Err(err) = &event {
            tracing::error!("[Stream] Failed to encode fragment: {}", err);
        }
        Some((event, emitter))
    })
}
