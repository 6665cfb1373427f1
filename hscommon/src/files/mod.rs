//! File access and classification for project assets.

mod filetype;
mod source;

pub use filetype::{classify, FileKind};
pub use source::{FileSource, FsFileSource, MemoryFileSource};
