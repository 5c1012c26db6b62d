mod generate_file;

pub use generate_file::{
    GenerateFileUseCase, Region, RequestError, StreamError, FILLER_CHUNK_SIZE,
};
