mod file_kind;
mod file_name;
mod file_size;

pub use file_kind::FileKind;
pub use file_name::FileName;
pub use file_size::FileSize;
