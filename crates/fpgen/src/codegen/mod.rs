//! PHP class generation from definitions.
//!
//! Every generated class comes from one template. The template's placeholders are
//! filled from two sources, merged in order:
//! - universal members (namespace, class name, fields, constructor, accessors)
//! - one strategy per deriving, in the definition's declaration order
//!
//! Nothing here touches the filesystem. [`generate`] returns file contents and the
//! caller decides where and whether to write them.

mod context;
mod derivings;
mod format;
mod members;
mod placeholders;
mod shape;
mod template;

use std::collections::HashMap;
use std::path::PathBuf;

pub use context::GenerationContext;
pub use derivings::{wrapped_field, FieldCodec, MessageKind};
pub use format::tidy;
pub use members::applicable_conditions;
pub use placeholders::{Placeholder, Placeholders};
pub use shape::{resolve_targets, ClassKeyword, GenerationTarget};
pub use template::substitute;

use crate::diagnostic::GeneratorError;
use crate::ir::{Constructor, Definition, DefinitionCollection};
use crate::output::{PathResolver, TemplateLoader};
use crate::validate::validate_collection;

/// One generated source file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    /// Fully-qualified name of the generated class.
    pub class: String,
    pub content: String,
}

/// Generated PHP code.
#[derive(Debug, Default)]
pub struct GeneratedCode {
    /// Files in collection order.
    pub files: Vec<GeneratedFile>,
}

/// Expands `template` for one (definition, constructor) pair.
///
/// The result always ends with one newline appended to the substituted template.
pub fn expand(
    definition: &Definition,
    constructor: Option<&Constructor>,
    template: &str,
    collection: &DefinitionCollection,
    keyword: ClassKeyword,
) -> Result<String, GeneratorError> {
    let ctx = GenerationContext::new(definition, constructor, collection, keyword);

    let mut placeholders = members::universal(&ctx);
    for deriving in &definition.derivings {
        placeholders.merge(derivings::derive(*deriving, &ctx)?);
    }

    let mut output = template::substitute(template, &placeholders, &definition.qualified_name())?;
    output.push('\n');
    Ok(output)
}

/// Generates every class of `collection`.
///
/// The collection is validated first; an invalid collection generates nothing.
pub fn generate(
    collection: &DefinitionCollection,
    templates: &dyn TemplateLoader,
    paths: &dyn PathResolver,
) -> Result<GeneratedCode, GeneratorError> {
    validate_collection(collection)?;

    let mut files = Vec::new();
    let mut owners: HashMap<PathBuf, String> = HashMap::new();

    for definition in collection {
        for target in resolve_targets(definition, collection)? {
            let class = target.class();
            let path = paths.resolve(target.definition, target.constructor)?;

            if let Some(first) = owners.get(&path) {
                return Err(GeneratorError::DuplicateOutput {
                    path,
                    first: first.clone(),
                    second: class,
                });
            }

            let template = templates.load(target.definition, target.constructor)?;
            let text = expand(
                target.definition,
                target.constructor,
                &template,
                collection,
                target.keyword,
            )?;

            tracing::debug!(class = %class, path = %path.display(), keyword = ?target.keyword, "Generated class");

            owners.insert(path.clone(), class.clone());
            files.push(GeneratedFile {
                path,
                class,
                content: tidy(&text),
            });
        }
    }

    Ok(GeneratedCode { files })
}
