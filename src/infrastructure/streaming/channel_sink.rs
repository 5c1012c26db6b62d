use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::application::ports::{ByteSink, SinkError, SinkStatus};

/// Frames travelling from a generation task to the HTTP body
type Frame = Result<Bytes, io::Error>;

/// [`ByteSink`] backed by a bounded channel.
///
/// The channel capacity is the consumer buffer: a full channel is reported
/// as [`SinkStatus::Full`], and [`ByteSink::drained`] resolves once the body
/// stream has taken a frame back out. Each generation owns one sink; nothing
/// is shared across connections.
pub struct ChannelSink {
    tx: Option<mpsc::Sender<Frame>>,
}

impl ChannelSink {
    /// Create a sink with room for `capacity` in-flight chunks, paired with
    /// the stream that yields them to the HTTP response body.
    pub fn bounded(capacity: usize) -> (Self, BodyDataStream) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx: Some(tx) }, BodyDataStream { rx })
    }

    /// Propagate a generation failure to the transport so the body errors
    /// out instead of ending cleanly. Best effort: when the consumer is
    /// already gone there is nobody left to notify.
    pub fn abort(&mut self, error: io::Error) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.try_send(Err(error));
        }
    }

    fn sender(&self) -> Result<&mpsc::Sender<Frame>, SinkError> {
        self.tx.as_ref().ok_or(SinkError::Finished)
    }
}

#[async_trait]
impl ByteSink for ChannelSink {
    async fn offer(&mut self, chunk: Bytes) -> Result<SinkStatus, SinkError> {
        let tx = self.sender()?;

        match tx.try_send(Ok(chunk)) {
            Ok(()) => {}
            // The caller skipped `drained`; block here rather than drop the
            // frame, so the exact-length guarantee holds either way.
            Err(TrySendError::Full(frame)) => {
                tx.send(frame).await.map_err(|_| SinkError::Disconnected)?;
            }
            Err(TrySendError::Closed(_)) => return Err(SinkError::Disconnected),
        }

        Ok(if tx.capacity() == 0 {
            SinkStatus::Full
        } else {
            SinkStatus::Ready
        })
    }

    async fn drained(&mut self) -> Result<(), SinkError> {
        // Reserving a slot waits until the consumer has taken a frame out;
        // dropping the permit keeps the slot free for the next offer.
        let permit = self
            .sender()?
            .reserve()
            .await
            .map_err(|_| SinkError::Disconnected)?;
        drop(permit);
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        // Dropping the sender ends the stream; frames already queued are
        // still delivered before the body completes.
        self.tx.take();
        Ok(())
    }
}

/// Receiver half of a [`ChannelSink`], exposed as the HTTP body stream
pub struct BodyDataStream {
    rx: mpsc::Receiver<Frame>,
}

impl Stream for BodyDataStream {
    type Item = Frame;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
