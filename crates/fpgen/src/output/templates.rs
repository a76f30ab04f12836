//! Template lookup.
//!
//! A definition is rendered from one template chosen by its structural deriving.
//! Plain classes use the `class` template, into which one method snippet per
//! method-producing deriving is inserted at [`METHODS_MARKER`].

use std::path::PathBuf;

use crate::diagnostic::GeneratorError;
use crate::ir::{Constructor, ConstructorKind, Definition, Deriving};

/// Line of the `class` template replaced by the derived methods.
pub const METHODS_MARKER: &str = "// @derived-methods";

const CLASS_TEMPLATE: &str = "class";

const BUILTIN: &[(&str, &str)] = &[
    ("class", include_str!("../../templates/class.php")),
    ("enum", include_str!("../../templates/enum.php")),
    ("enum_value", include_str!("../../templates/enum_value.php")),
    ("uuid", include_str!("../../templates/uuid.php")),
    ("command", include_str!("../../templates/command.php")),
    ("query", include_str!("../../templates/query.php")),
    ("domain_event", include_str!("../../templates/domain_event.php")),
    ("aggregate_changed", include_str!("../../templates/aggregate_changed.php")),
    ("method_equals", include_str!("../../templates/method_equals.php")),
    ("method_from_string", include_str!("../../templates/method_from_string.php")),
    ("method_to_string", include_str!("../../templates/method_to_string.php")),
    ("method_from_scalar", include_str!("../../templates/method_from_scalar.php")),
    ("method_to_scalar", include_str!("../../templates/method_to_scalar.php")),
    ("method_from_array", include_str!("../../templates/method_from_array.php")),
    ("method_to_array", include_str!("../../templates/method_to_array.php")),
];

/// Name of the template rendering `definition`, narrowed to `constructor`.
pub fn template_name(definition: &Definition, constructor: Option<&Constructor>) -> &'static str {
    let structural = definition.derivings.iter().copied().find(|d| d.is_structural());
    match structural {
        Some(Deriving::Enum) => {
            let is_option = constructor
                .is_some_and(|c| definition.constructor_kind(c) == ConstructorKind::Variant);
            if is_option {
                "enum_value"
            } else {
                "enum"
            }
        }
        Some(Deriving::Uuid) => "uuid",
        Some(Deriving::Command) => "command",
        Some(Deriving::Query) => "query",
        Some(Deriving::DomainEvent) => "domain_event",
        Some(Deriving::AggregateChanged) => "aggregate_changed",
        _ => CLASS_TEMPLATE,
    }
}

/// Method snippet contributed to the `class` template by `deriving`.
fn method_template(deriving: Deriving) -> Option<&'static str> {
    match deriving {
        Deriving::Equals => Some("method_equals"),
        Deriving::FromString => Some("method_from_string"),
        Deriving::ToString => Some("method_to_string"),
        Deriving::FromScalar => Some("method_from_scalar"),
        Deriving::ToScalar => Some("method_to_scalar"),
        Deriving::FromArray => Some("method_from_array"),
        Deriving::ToArray => Some("method_to_array"),
        Deriving::Uuid
        | Deriving::Enum
        | Deriving::Command
        | Deriving::Query
        | Deriving::DomainEvent
        | Deriving::AggregateChanged => None,
    }
}

/// Supplies template text for a (definition, constructor) pair.
pub trait TemplateLoader {
    /// Raw text of one named template.
    fn source(&self, name: &str) -> Result<String, GeneratorError>;

    /// The complete template for `definition`, without its trailing newline.
    fn load(&self, definition: &Definition, constructor: Option<&Constructor>) -> Result<String, GeneratorError> {
        let name = template_name(definition, constructor);
        let mut text = self.source(name)?;

        if name == CLASS_TEMPLATE {
            let methods = definition
                .derivings
                .iter()
                .filter_map(|d| method_template(*d))
                .map(|method| self.source(method))
                .collect::<Result<Vec<_>, _>>()?;
            text = insert_methods(&text, &methods)?;
        }

        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }
}

/// Replaces the marker line with the method snippets, separated by blank lines.
fn insert_methods(template: &str, methods: &[String]) -> Result<String, GeneratorError> {
    let mut output = String::with_capacity(template.len());
    let mut inserted = false;

    for line in template.split_inclusive('\n') {
        if !inserted && line.trim() == METHODS_MARKER {
            let snippets: Vec<String> = methods
                .iter()
                .map(|m| if m.ends_with('\n') { m.clone() } else { format!("{}\n", m) })
                .collect();
            output.push_str(&snippets.join("\n"));
            inserted = true;
        } else {
            output.push_str(line);
        }
    }

    if !inserted && !methods.is_empty() {
        return Err(GeneratorError::MissingMethodsMarker {
            template: CLASS_TEMPLATE.to_string(),
        });
    }
    Ok(output)
}

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTemplates;

impl TemplateLoader for BuiltinTemplates {
    fn source(&self, name: &str) -> Result<String, GeneratorError> {
        BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| GeneratorError::TemplateNotFound { name: name.to_string() })
    }
}

/// Templates read from `<dir>/<name>.php`, falling back to the builtin ones.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateLoader for DirectoryTemplates {
    fn source(&self, name: &str) -> Result<String, GeneratorError> {
        let path = self.dir.join(format!("{}.php", name));
        if path.is_file() {
            tracing::debug!(template = name, path = %path.display(), "Using template override");
            return std::fs::read_to_string(&path).map_err(|e| GeneratorError::io(&path, e.to_string()));
        }
        BuiltinTemplates.source(name)
    }
}
