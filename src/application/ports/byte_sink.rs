use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Consumer disconnected")]
    Disconnected,

    #[error("Sink already finished")]
    Finished,

    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Flow-control signal returned by [`ByteSink::offer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStatus {
    /// The consumer can take more data immediately
    Ready,
    /// The consumer's buffer is full; await [`ByteSink::drained`] before
    /// the next offer
    Full,
}

/// Port for the write destination of a single generation (here, an HTTP
/// response body).
///
/// `offer` always accepts the chunk it is given and only reports whether the
/// producer should pause, so a chunk is never re-sent or dropped. One write
/// is outstanding at a time per generation; suspension happens between
/// chunks, never inside one.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ByteSink: Send {
    /// Hand one chunk to the consumer
    async fn offer(&mut self, chunk: Bytes) -> Result<SinkStatus, SinkError>;

    /// Suspend until the consumer has drained its buffer
    async fn drained(&mut self) -> Result<(), SinkError>;

    /// Signal that the stream is complete
    async fn finish(&mut self) -> Result<(), SinkError>;
}
