//! Collaborators of the generator: template lookup, output paths and file writing.

mod paths;
mod templates;
mod writer;

pub use paths::{PathResolver, PsrPathResolver};
pub use templates::{template_name, BuiltinTemplates, DirectoryTemplates, TemplateLoader, METHODS_MARKER};
pub use writer::{FileWriter, FsWriter, MemoryWriter};
