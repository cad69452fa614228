//! Streaming completions.
//!
//! Streaming responses arrive as server-sent events carrying OpenAI-style
//! chunks, terminated by a `[DONE]` sentinel. Cancellation is caller-driven:
//! dropping the stream stops reading the body; no server-side cancel call is
//! issued.

use std::pin::Pin;

use eventsource_stream::Eventsource;
use futures::Stream;
use futures_util::StreamExt;

use crate::error::HubError;
use crate::types::ChatCompletionChunk;

/// Stream of incremental completion chunks.
pub struct ChatStream {
    inner: Pin<Box<dyn Stream<Item = Result<ChatCompletionChunk, HubError>> + Send>>,
}

impl std::fmt::Debug for ChatStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatStream").finish_non_exhaustive()
    }
}

impl Stream for ChatStream {
    type Item = Result<ChatCompletionChunk, HubError>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

/// Turn an SSE response body into a [`ChatStream`].
pub(crate) fn chat_stream_from_response(response: reqwest::Response) -> ChatStream {
    let mut events = response.bytes_stream().eventsource();

    let inner: Pin<Box<dyn Stream<Item = Result<ChatCompletionChunk, HubError>> + Send>> =
        Box::pin(async_stream::try_stream! {
        while let Some(event) = events.next().await {
            let event = event
                .map_err(|e| HubError::StreamError(format!("SSE transport error: {e}")))?;
            if event.data.trim() == "[DONE]" {
                break;
            }
            let chunk: ChatCompletionChunk = serde_json::from_str(&event.data)
                .map_err(|e| HubError::StreamError(format!("Malformed stream chunk: {e}")))?;
            yield chunk;
        }
    });
    ChatStream { inner }
}

/// Collect the content deltas of a stream into a single string.
///
/// Convenience for callers that want streaming transport but an aggregated
/// result.
pub async fn collect_text(mut stream: ChatStream) -> Result<String, HubError> {
    let mut text = String::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if let Some(delta) = chunk.text() {
            text.push_str(delta);
        }
    }
    Ok(text)
}
