//! Generator error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during generation.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum GeneratorError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to access '{}': {message}", path.display())]
    #[diagnostic(code(fpgen::io::access_failed))]
    IoError {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Front End Errors
    // =========================================================================
    #[error("Failed to parse definitions in '{}': {message}", path.display())]
    #[diagnostic(
        code(fpgen::frontend::parse_failed),
        help("Definition files are JSON documents with a top-level \"definitions\" array")
    )]
    ParseFailed {
        path: PathBuf,
        message: String,
    },

    #[error("Unsupported definition format: {format}")]
    #[diagnostic(code(fpgen::frontend::unsupported_format))]
    UnsupportedFormat {
        format: String,
    },

    #[error("Failed to parse configuration '{}': {message}", path.display())]
    #[diagnostic(code(fpgen::config::parse_failed))]
    ConfigParseFailed {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Definition Errors
    // =========================================================================
    #[error("{} invalid definition(s)", errors.len())]
    #[diagnostic(
        code(fpgen::definition::invalid),
        help("Nothing was generated. Fix the related errors and run again.")
    )]
    InvalidDefinitions {
        #[related]
        errors: Vec<GeneratorError>,
    },

    #[error("Duplicate definition: {name}")]
    #[diagnostic(code(fpgen::definition::duplicate))]
    DuplicateDefinition {
        name: String,
    },

    #[error("Definition '{definition}' has no constructors")]
    #[diagnostic(code(fpgen::definition::no_constructors))]
    NoConstructors {
        definition: String,
    },

    #[error("Definition '{definition}' declares constructor '{constructor}' more than once")]
    #[diagnostic(code(fpgen::definition::duplicate_constructor))]
    DuplicateConstructor {
        definition: String,
        constructor: String,
    },

    #[error("Constructor '{constructor}' of '{definition}' declares argument '{argument}' more than once")]
    #[diagnostic(code(fpgen::definition::duplicate_argument))]
    DuplicateArgument {
        definition: String,
        constructor: String,
        argument: String,
    },

    #[error("Definition '{definition}' mixes variant constructors with value constructors")]
    #[diagnostic(
        code(fpgen::definition::mixed_constructors),
        help("A definition is either a sum type (all constructors name other classes) or a single value constructor")
    )]
    MixedConstructors {
        definition: String,
    },

    #[error("Definition '{definition}' has more than one value constructor")]
    #[diagnostic(
        code(fpgen::definition::multiple_value_constructors),
        help("Model alternatives as a sum type whose constructors name other classes")
    )]
    MultipleValueConstructors {
        definition: String,
    },

    #[error("Definition '{definition}' derives '{deriving}' more than once")]
    #[diagnostic(code(fpgen::definition::duplicate_deriving))]
    DuplicateDeriving {
        definition: String,
        deriving: String,
    },

    #[error("Definition '{definition}' cannot derive both '{first}' and '{second}'")]
    #[diagnostic(
        code(fpgen::definition::conflicting_derivings),
        help("Enum, Uuid, Command, Query, DomainEvent and AggregateChanged each define the whole class and stand alone")
    )]
    ConflictingDerivings {
        definition: String,
        first: String,
        second: String,
    },

    #[error("Deriving '{deriving}' on '{definition}' is invalid: {reason}")]
    #[diagnostic(code(fpgen::definition::invalid_deriving))]
    InvalidDeriving {
        definition: String,
        deriving: String,
        reason: String,
    },

    #[error("Condition on '{definition}' targets unknown constructor '{target}'")]
    #[diagnostic(
        code(fpgen::definition::unmatched_condition),
        help("A condition targets `_`, the definition name, or one of its constructors")
    )]
    UnmatchedCondition {
        definition: String,
        target: String,
    },

    // =========================================================================
    // Reference Errors
    // =========================================================================
    #[error("Unknown type reference '{name}' in '{definition}'")]
    #[diagnostic(
        code(fpgen::reference::unknown_type),
        help("Argument types are int, string, bool, float, or the fully-qualified name of another definition")
    )]
    UnknownTypeReference {
        definition: String,
        name: String,
    },

    #[error("Constructor '{constructor}' of '{definition}' names neither a definition nor a class in namespace '{namespace}'")]
    #[diagnostic(code(fpgen::reference::unknown_constructor))]
    UnknownConstructorReference {
        definition: String,
        constructor: String,
        namespace: String,
    },

    #[error("Definition '{child}' is a variant of both '{first}' and '{second}'")]
    #[diagnostic(code(fpgen::reference::multiple_parents))]
    MultipleParents {
        child: String,
        first: String,
        second: String,
    },

    // =========================================================================
    // Template Errors
    // =========================================================================
    #[error("Template uses unknown placeholder '{{{{{name}}}}}'")]
    #[diagnostic(code(fpgen::template::unknown_placeholder))]
    UnknownPlaceholder {
        name: String,
    },

    #[error("Placeholder '{{{{{name}}}}}' is not computed for '{definition}'")]
    #[diagnostic(
        code(fpgen::template::uncomputed_placeholder),
        help("The placeholder belongs to a deriving this definition does not declare")
    )]
    UncomputedPlaceholder {
        definition: String,
        name: String,
    },

    #[error("Template '{name}' not found")]
    #[diagnostic(code(fpgen::template::not_found))]
    TemplateNotFound {
        name: String,
    },

    #[error("Template '{template}' has no '// @derived-methods' line")]
    #[diagnostic(
        code(fpgen::template::missing_methods_marker),
        help("Derived methods are inserted in place of a line containing only '// @derived-methods'")
    )]
    MissingMethodsMarker {
        template: String,
    },

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("No path prefix matches class '{class}'")]
    #[diagnostic(
        code(fpgen::output::unresolvable_path),
        help("Add a psr4 or psr0 prefix covering this namespace to the configuration")
    )]
    UnresolvablePath {
        class: String,
    },

    #[error("Classes '{first}' and '{second}' both generate '{}'", path.display())]
    #[diagnostic(code(fpgen::output::duplicate_output))]
    DuplicateOutput {
        path: PathBuf,
        first: String,
        second: String,
    },
}

impl GeneratorError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }
}
