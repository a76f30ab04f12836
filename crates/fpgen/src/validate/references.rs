//! Cross-definition reference checks.

use crate::diagnostic::GeneratorError;
use crate::ir::{ConstructorKind, Definition, DefinitionCollection};

/// Validates that every reference made by `definition` resolves, appending failures to `errors`.
pub fn validate_references(
    definition: &Definition,
    collection: &DefinitionCollection,
    errors: &mut Vec<GeneratorError>,
) {
    let name = definition.qualified_name();

    for constructor in &definition.constructors {
        for argument in &constructor.arguments {
            if let Some(reference) = argument.typ.as_definition() {
                if !collection.contains(reference) {
                    errors.push(GeneratorError::UnknownTypeReference {
                        definition: name.clone(),
                        name: reference.to_string(),
                    });
                }
            }
        }

        // Variants outside the collection are generated from the owner and must share its namespace.
        if definition.constructor_kind(constructor) == ConstructorKind::Variant
            && !collection.contains(&constructor.name)
            && constructor.namespace() != definition.namespace
        {
            errors.push(GeneratorError::UnknownConstructorReference {
                definition: name.clone(),
                constructor: constructor.name.clone(),
                namespace: definition.namespace.clone(),
            });
        }
    }

    if let [first, second, ..] = collection.parents_of(&name).as_slice() {
        errors.push(GeneratorError::MultipleParents {
            child: name.clone(),
            first: first.qualified_name(),
            second: second.qualified_name(),
        });
    }
}
