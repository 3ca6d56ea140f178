//! Input handling module

pub mod archive;
pub mod file_reader;
pub mod glob_resolver;
pub mod walker;

pub use archive::{ArchiveEntry, PdfArchive};
pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use walker::{collect_documents, is_candidate};
