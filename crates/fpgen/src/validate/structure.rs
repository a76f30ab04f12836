//! Structure validation for single definitions.
//!
//! Checks constructors, derivings and conditions of one definition. Cross-definition
//! references are checked in `references`.

use std::collections::HashSet;

use crate::codegen::{resolve_targets, wrapped_field};
use crate::diagnostic::GeneratorError;
use crate::ir::{Argument, Condition, ConstructorKind, Definition, DefinitionCollection, Deriving, Primitive, TypeRef};

/// Validates the structure of one definition, appending failures to `errors`.
pub fn validate_structure(
    definition: &Definition,
    collection: &DefinitionCollection,
    errors: &mut Vec<GeneratorError>,
) {
    let name = definition.qualified_name();

    if definition.constructors.is_empty() {
        errors.push(GeneratorError::NoConstructors { definition: name.clone() });
    } else if let Err(error) = resolve_targets(definition, collection) {
        errors.push(error);
    }

    validate_constructors(definition, &name, errors);
    validate_derivings(definition, collection, &name, errors);
    validate_conditions(definition, &name, errors);
}

fn validate_constructors(definition: &Definition, name: &str, errors: &mut Vec<GeneratorError>) {
    let mut constructors = HashSet::new();
    for constructor in &definition.constructors {
        if !constructors.insert(constructor.name.as_str()) {
            errors.push(GeneratorError::DuplicateConstructor {
                definition: name.to_string(),
                constructor: constructor.name.clone(),
            });
        }

        let mut arguments = HashSet::new();
        for argument in &constructor.arguments {
            if !arguments.insert(argument.name.as_str()) {
                errors.push(GeneratorError::DuplicateArgument {
                    definition: name.to_string(),
                    constructor: constructor.name.clone(),
                    argument: argument.name.clone(),
                });
            }
        }
    }
}

fn validate_derivings(
    definition: &Definition,
    collection: &DefinitionCollection,
    name: &str,
    errors: &mut Vec<GeneratorError>,
) {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(definition.derivings.len());
    for deriving in &definition.derivings {
        if seen.insert(*deriving) {
            unique.push(*deriving);
        } else {
            errors.push(GeneratorError::DuplicateDeriving {
                definition: name.to_string(),
                deriving: deriving.to_string(),
            });
        }
    }

    if let Some(structural) = definition.derivings.iter().find(|d| d.is_structural()) {
        if let Some(other) = definition.derivings.iter().find(|d| *d != structural) {
            errors.push(GeneratorError::ConflictingDerivings {
                definition: name.to_string(),
                first: structural.to_string(),
                second: other.to_string(),
            });
        }
    }

    let invalid = |deriving: Deriving, reason: &str| GeneratorError::InvalidDeriving {
        definition: name.to_string(),
        deriving: deriving.to_string(),
        reason: reason.to_string(),
    };

    let sole_wrapped = match definition.constructors.as_slice() {
        [single] => wrapped_field(single),
        _ => None,
    };

    for deriving in unique {
        match deriving {
            Deriving::FromString if !matches!(sole_wrapped, Some((_, Primitive::String))) => {
                errors.push(invalid(deriving, "requires a single string field"));
            }
            _ if deriving.requires_wrapper() && sole_wrapped.is_none() => {
                errors.push(invalid(deriving, "requires a single primitive field"));
            }
            Deriving::Enum => {
                let options_valid = definition.constructors.iter().all(|c| {
                    definition.constructor_kind(c) == ConstructorKind::Variant
                        && c.arguments.is_empty()
                        && !collection.contains(&c.name)
                });
                if !options_valid {
                    errors.push(invalid(
                        deriving,
                        "every constructor must be an argument-less variant that is not itself a definition",
                    ));
                }
            }
            Deriving::AggregateChanged => {
                match definition.constructors.first().and_then(|c| c.arguments.first()) {
                    Some(id) if !id.nullable => {
                        if !converts_through_string(id, collection) {
                            errors.push(invalid(
                                deriving,
                                "the aggregate id must be a string or a type deriving Uuid, or FromString and ToString",
                            ));
                        }
                    }
                    _ => {
                        errors.push(invalid(deriving, "the first argument is the aggregate id and must be required"));
                    }
                }
            }
            _ => {}
        }
    }
}

/// Whether `argument` round-trips through the string aggregate id of a message.
///
/// Unknown references are reported by reference validation and pass here.
fn converts_through_string(argument: &Argument, collection: &DefinitionCollection) -> bool {
    match &argument.typ {
        TypeRef::Primitive(primitive) => *primitive == Primitive::String,
        TypeRef::Definition(name) => collection.get(name).map_or(true, |target| {
            target.derives(Deriving::Uuid)
                || (target.derives(Deriving::FromString) && target.derives(Deriving::ToString))
        }),
    }
}

fn validate_conditions(definition: &Definition, name: &str, errors: &mut Vec<GeneratorError>) {
    for condition in &definition.conditions {
        let matched = condition.target == Condition::WILDCARD
            || condition.target == definition.name
            || definition.constructors.iter().any(|c| c.short_name() == condition.target);
        if !matched {
            errors.push(GeneratorError::UnmatchedCondition {
                definition: name.to_string(),
                target: condition.target.clone(),
            });
        }
    }
}
