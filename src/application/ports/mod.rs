mod byte_sink;

pub use byte_sink::{ByteSink, SinkError, SinkStatus};

#[cfg(test)]
pub use byte_sink::MockByteSink;
