use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;

use crate::application::dto::GenerationRequest;
use crate::application::ports::{ByteSink, SinkError, SinkStatus};
use crate::domain::profiles::{FileProfile, ProfileCatalog};
use crate::domain::value_objects::{FileKind, FileName, FileSize};

/// Size of one filler chunk taken from the shared zero buffer
pub const FILLER_CHUNK_SIZE: usize = 64 * 1024;

/// Process-wide zero buffer. Never written after initialization, so all
/// concurrent generations slice it without synchronization or copies.
static FILLER: [u8; FILLER_CHUNK_SIZE] = [0u8; FILLER_CHUNK_SIZE];

fn filler_chunk(len: usize) -> Bytes {
    Bytes::from_static(&FILLER[..len])
}

/// Logical output region a generation is in, carried in stream errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    Filler,
    Footer,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Header => write!(f, "header"),
            Region::Filler => write!(f, "filler"),
            Region::Footer => write!(f, "footer"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Size must be a positive number of bytes, got {given}")]
    InvalidSize { given: i64 },

    #[error("Requested size {size} exceeds the maximum of {max} bytes")]
    SizeExceedsMaximum { size: u64, max: u64 },
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Refusing to stream zero bytes")]
    EmptyRequest,

    #[error("Consumer disconnected in {region} region after {offset} bytes")]
    Cancelled { region: Region, offset: u64 },

    #[error("Sink write failed in {region} region after {offset} bytes")]
    Sink {
        region: Region,
        offset: u64,
        #[source]
        source: SinkError,
    },
}

impl StreamError {
    fn from_sink(source: SinkError, region: Region, offset: u64) -> Self {
        match source {
            SinkError::Disconnected => StreamError::Cancelled { region, offset },
            source => StreamError::Sink {
                region,
                offset,
                source,
            },
        }
    }
}

/// Use case: stream a synthetic file of an exact byte length
///
/// The payload is framed in three regions: the profile's magic header, a
/// zero-filled middle, and the profile's footer. Exactly `size` bytes reach
/// the sink, however the region lengths compare to the total.
pub struct GenerateFileUseCase {
    catalog: Arc<ProfileCatalog>,
    max_size_bytes: u64,
}

impl GenerateFileUseCase {
    pub fn new(catalog: Arc<ProfileCatalog>, max_size_bytes: u64) -> Self {
        Self {
            catalog,
            max_size_bytes,
        }
    }

    /// Validate raw request parameters and resolve profile and filename.
    ///
    /// Unknown kinds are not an error; they resolve to an empty profile and
    /// the output is pure filler.
    pub fn prepare(
        &self,
        size: i64,
        kind: &str,
        name: Option<&str>,
    ) -> Result<GenerationRequest, RequestError> {
        let size = FileSize::new(size).map_err(|_| RequestError::InvalidSize { given: size })?;

        if size.get() > self.max_size_bytes {
            return Err(RequestError::SizeExceedsMaximum {
                size: size.get(),
                max: self.max_size_bytes,
            });
        }

        let kind = FileKind::new(kind);
        let profile = self.catalog.resolve(&kind);
        let filename = FileName::resolve(name, size, &kind);

        Ok(GenerationRequest {
            size,
            profile,
            filename,
        })
    }

    /// Stream the requested file into the sink and return the byte count
    /// written, which equals the requested size on success.
    ///
    /// The first sink failure aborts the generation: no retry, no further
    /// writes, error tagged with the region and byte offset reached.
    pub async fn stream<S>(
        &self,
        request: &GenerationRequest,
        sink: &mut S,
    ) -> Result<u64, StreamError>
    where
        S: ByteSink + ?Sized,
    {
        stream_regions(request.size.get(), &request.profile, sink).await
    }
}

async fn stream_regions<S>(
    total: u64,
    profile: &FileProfile,
    sink: &mut S,
) -> Result<u64, StreamError>
where
    S: ByteSink + ?Sized,
{
    if total == 0 {
        return Err(StreamError::EmptyRequest);
    }

    let header = profile.header();
    let footer = profile.footer();
    let mut written = 0u64;

    // The requested size fits inside the header alone: emit a header prefix
    // and nothing else. Output at these sizes is not a well-formed file.
    if total <= header.len() as u64 {
        write_chunk(sink, header.slice(..total as usize), Region::Header, &mut written).await?;
        finish(sink, Region::Header, written).await?;
        return Ok(written);
    }

    write_chunk(sink, header.clone(), Region::Header, &mut written).await?;

    // When header + footer overshoot the total, the footer keeps only its
    // leading bytes and the filler region collapses to nothing.
    let body_budget = total - header.len() as u64;
    let footer_len = (footer.len() as u64).min(body_budget) as usize;
    let mut remaining = body_budget - footer_len as u64;

    while remaining > 0 {
        let take = remaining.min(FILLER_CHUNK_SIZE as u64) as usize;
        write_chunk(sink, filler_chunk(take), Region::Filler, &mut written).await?;
        remaining -= take as u64;
    }

    if footer_len > 0 {
        write_chunk(sink, footer.slice(..footer_len), Region::Footer, &mut written).await?;
    }

    finish(sink, Region::Footer, written).await?;
    Ok(written)
}

async fn write_chunk<S>(
    sink: &mut S,
    chunk: Bytes,
    region: Region,
    written: &mut u64,
) -> Result<(), StreamError>
where
    S: ByteSink + ?Sized,
{
    if chunk.is_empty() {
        return Ok(());
    }

    let len = chunk.len() as u64;
    let status = sink
        .offer(chunk)
        .await
        .map_err(|e| StreamError::from_sink(e, region, *written))?;
    *written += len;

    if status == SinkStatus::Full {
        sink.drained()
            .await
            .map_err(|e| StreamError::from_sink(e, region, *written))?;
    }

    Ok(())
}

async fn finish<S>(sink: &mut S, region: Region, written: u64) -> Result<(), StreamError>
where
    S: ByteSink + ?Sized,
{
    sink.finish()
        .await
        .map_err(|e| StreamError::from_sink(e, region, written))
}
