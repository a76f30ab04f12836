//! # fpgen
//!
//! This crate generates PHP value objects, enums and message classes from
//! declarative algebraic type definitions. Definitions are loaded through a
//! pluggable front end, validated as one collection, and rendered through
//! templates whose placeholders are computed from each definition's derivings.
//!
//! ## Architecture
//!
//! ```text
//! Definition files (JSON)
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Frontend   │  Format-specific parsing
//! │ (file → IR)  │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │      IR      │  Definitions, constructors, derivings
//! │ (collection) │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Structure & reference checks
//! │     (IR)     │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Shapes, placeholders, templates
//! │  (IR → PHP)  │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Output    │  PSR paths, atomic writes
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fpgen::{Generator, GeneratorConfig};
//!
//! let mut config = GeneratorConfig::default();
//! config.psr4.insert("App\\".to_string(), "src".into());
//!
//! let result = Generator::new(config).generate()?;
//! println!("{} files", result.files.len());
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod frontend;
pub mod ir;
pub mod output;
pub mod validate;

use std::path::PathBuf;

pub use codegen::{expand, generate, ClassKeyword, GeneratedCode, GeneratedFile};
pub use config::{GeneratorConfig, CONFIG_FILE};
pub use diagnostic::GeneratorError;
pub use ir::{Argument, Condition, Constructor, Definition, DefinitionCollection, Deriving};

use output::{BuiltinTemplates, DirectoryTemplates, FileWriter, FsWriter, MemoryWriter, PsrPathResolver, TemplateLoader};

/// The main generator struct that drives the pipeline.
pub struct Generator {
    config: GeneratorConfig,
}

/// Result of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Number of definitions loaded.
    pub definitions: usize,
    /// Paths of generated files, in generation order.
    pub files: Vec<PathBuf>,
    /// Whether files were written to disk.
    pub written: bool,
}

impl Generator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Loads every definition file from the configured directory.
    pub fn load_definitions(&self) -> Result<DefinitionCollection, GeneratorError> {
        let frontend = frontend::create_frontend(&self.config.format)?;
        frontend.parse_directory(&self.config.definitions_dir)
    }

    /// Validates definitions without generating code.
    pub fn check(&self) -> Result<usize, GeneratorError> {
        let collection = self.load_definitions()?;
        validate::validate_collection(&collection)?;
        Ok(collection.len())
    }

    /// Generates code for the configured definitions.
    ///
    /// This runs the full pipeline:
    /// 1. Load definitions through the configured front end
    /// 2. Validate the collection
    /// 3. Generate every file in memory
    /// 4. Write files, unless this is a dry run
    pub fn generate(&self) -> Result<GenerateResult, GeneratorError> {
        let collection = self.load_definitions()?;

        if self.config.dry_run {
            let mut writer = MemoryWriter::new();
            let mut result = self.generate_collection(&collection, &mut writer)?;
            result.written = false;
            return Ok(result);
        }

        self.generate_collection(&collection, &mut FsWriter)
    }

    /// Generates code for `collection` and hands every file to `writer`.
    ///
    /// Nothing is written unless every file generated successfully.
    pub fn generate_collection(
        &self,
        collection: &DefinitionCollection,
        writer: &mut dyn FileWriter,
    ) -> Result<GenerateResult, GeneratorError> {
        let templates = self.templates();
        let paths = self.paths();

        let generated = codegen::generate(collection, &*templates, &paths)?;

        let mut files = Vec::with_capacity(generated.files.len());
        for file in &generated.files {
            writer.write(&file.path, &file.content)?;
            files.push(file.path.clone());
        }

        tracing::info!(
            definitions = collection.len(),
            files = files.len(),
            dry_run = self.config.dry_run,
            "Generation complete"
        );

        Ok(GenerateResult {
            definitions: collection.len(),
            files,
            written: true,
        })
    }

    fn templates(&self) -> Box<dyn TemplateLoader> {
        match &self.config.template_dir {
            Some(dir) => Box::new(DirectoryTemplates::new(dir)),
            None => Box::new(BuiltinTemplates),
        }
    }

    fn paths(&self) -> PsrPathResolver {
        let resolver = self
            .config
            .psr4
            .iter()
            .fold(PsrPathResolver::new(), |resolver, (prefix, dir)| resolver.with_psr4(prefix, dir));
        self.config
            .psr0
            .iter()
            .fold(resolver, |resolver, (prefix, dir)| resolver.with_psr0(prefix, dir))
    }
}
