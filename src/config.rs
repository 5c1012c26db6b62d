#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Hard cap on the requested file size
    pub max_file_size_bytes: u64,
    /// Per-response channel capacity, in 64 KiB chunks
    pub stream_buffer_chunks: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            // Generous by default: the point of the service is very large
            // files, the cap only stops accidental multi-terabyte requests
            max_file_size_bytes: std::env::var("MAX_FILE_SIZE_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100 * 1024 * 1024 * 1024),
            stream_buffer_chunks: std::env::var("STREAM_BUFFER_CHUNKS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.max_file_size_bytes == 0 {
            return Err("MAX_FILE_SIZE_BYTES must be at least 1".to_string());
        }

        if self.stream_buffer_chunks < 1 || self.stream_buffer_chunks > 1024 {
            return Err("STREAM_BUFFER_CHUNKS must be between 1 and 1024".to_string());
        }

        Ok(())
    }
}
