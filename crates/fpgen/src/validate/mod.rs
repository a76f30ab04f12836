//! Validation and linking of a definition collection.
//!
//! Every check runs before generation starts. Failures are collected rather than
//! returned one at a time so a single run reports all of them.

mod references;
mod structure;

use crate::diagnostic::GeneratorError;
use crate::ir::DefinitionCollection;

/// Validates the entire collection.
pub fn validate_collection(collection: &DefinitionCollection) -> Result<(), GeneratorError> {
    let mut errors = Vec::new();

    for definition in collection {
        structure::validate_structure(definition, collection, &mut errors);
        references::validate_references(definition, collection, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(GeneratorError::InvalidDefinitions { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Argument, Condition, Constructor, Definition, Deriving};

    fn validate(definitions: Vec<Definition>) -> Vec<GeneratorError> {
        let collection = DefinitionCollection::from_definitions(definitions).unwrap();
        match validate_collection(&collection) {
            Ok(()) => Vec::new(),
            Err(GeneratorError::InvalidDefinitions { errors }) => errors,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_collection() {
        let errors = validate(vec![
            Definition::new("My", "UserId", vec![Constructor::new("My\\UserId")]).with_derivings(vec![Deriving::Uuid]),
            Definition::new(
                "My",
                "RegisterUser",
                vec![Constructor::with_arguments("My\\RegisterUser", vec![Argument::new("id", "My\\UserId")])],
            )
            .with_derivings(vec![Deriving::Command]),
            Definition::new("My", "Color", vec![Constructor::new("My\\Red"), Constructor::new("My\\Blue")])
                .with_derivings(vec![Deriving::Enum]),
        ]);
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_collects_every_error() {
        let errors = validate(vec![
            Definition::new(
                "My",
                "Person",
                vec![Constructor::with_arguments("My\\Person", vec![Argument::new("id", "My\\Missing")])],
            )
            .with_conditions(vec![Condition::new("Nobody", "true", "never")]),
            Definition::new("My", "Empty", vec![]),
        ]);

        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| matches!(e, GeneratorError::UnknownTypeReference { name, .. } if name == "My\\Missing")));
        assert!(errors.iter().any(|e| matches!(e, GeneratorError::UnmatchedCondition { target, .. } if target == "Nobody")));
        assert!(errors.iter().any(|e| matches!(e, GeneratorError::NoConstructors { .. })));
    }

    #[test]
    fn test_structural_derivings_stand_alone() {
        let errors = validate(vec![Definition::new("My", "Color", vec![Constructor::new("My\\Red")])
            .with_derivings(vec![Deriving::Enum, Deriving::Command])]);
        assert!(matches!(
            errors.as_slice(),
            [GeneratorError::ConflictingDerivings { first, second, .. }] if first == "Enum" && second == "Command"
        ));
    }

    #[test]
    fn test_wrapper_derivings_need_a_primitive_field() {
        let errors = validate(vec![Definition::new(
            "My",
            "Pair",
            vec![Constructor::with_arguments(
                "My\\Pair",
                vec![Argument::new("a", "int"), Argument::new("b", "int")],
            )],
        )
        .with_derivings(vec![Deriving::ToScalar])]);
        assert!(matches!(errors.as_slice(), [GeneratorError::InvalidDeriving { deriving, .. }] if deriving == "ToScalar"));
    }

    #[test]
    fn test_aggregate_changed_needs_identifier() {
        let errors = validate(vec![Definition::new(
            "My",
            "Happened",
            vec![Constructor::with_arguments("My\\Happened", vec![Argument::new("id", "string").nullable()])],
        )
        .with_derivings(vec![Deriving::AggregateChanged])]);
        assert!(matches!(errors.as_slice(), [GeneratorError::InvalidDeriving { .. }]));
    }

    #[test]
    fn test_aggregate_id_converts_through_string() {
        let changed = |id_type: &str| {
            Definition::new(
                "My",
                "Counted",
                vec![Constructor::with_arguments(
                    "My\\Counted",
                    vec![Argument::new("id", id_type), Argument::new("n", "int")],
                )],
            )
            .with_derivings(vec![Deriving::AggregateChanged])
        };
        let plain = Definition::new("My", "Plain", vec![Constructor::new("String")]);
        let wrapped = Definition::new("My", "Code", vec![Constructor::new("String")])
            .with_derivings(vec![Deriving::FromString, Deriving::ToString]);
        let encode_only = Definition::new("My", "Label", vec![Constructor::new("String")])
            .with_derivings(vec![Deriving::ToString]);

        for id_type in ["int", "float", "bool", "My\\Plain", "My\\Label"] {
            let errors = validate(vec![plain.clone(), wrapped.clone(), encode_only.clone(), changed(id_type)]);
            assert!(
                matches!(errors.as_slice(), [GeneratorError::InvalidDeriving { deriving, .. }] if deriving == "AggregateChanged"),
                "{id_type}: {errors:?}"
            );
        }

        for id_type in ["string", "My\\Code"] {
            let errors = validate(vec![plain.clone(), wrapped.clone(), encode_only.clone(), changed(id_type)]);
            assert!(errors.is_empty(), "{id_type}: {errors:?}");
        }
    }

    #[test]
    fn test_duplicate_constructor() {
        let errors = validate(vec![Definition::new(
            "My",
            "Shape",
            vec![Constructor::new("My\\Circle"), Constructor::new("My\\Circle")],
        )]);
        assert!(matches!(
            errors.as_slice(),
            [GeneratorError::DuplicateConstructor { constructor, .. }] if constructor == "My\\Circle"
        ));
    }

    #[test]
    fn test_variant_outside_owner_namespace_must_exist() {
        let errors = validate(vec![Definition::new(
            "My",
            "Shape",
            vec![Constructor::new("My\\Circle"), Constructor::new("Other\\Square")],
        )]);
        assert!(matches!(
            errors.as_slice(),
            [GeneratorError::UnknownConstructorReference { constructor, .. }] if constructor == "Other\\Square"
        ));
    }

    #[test]
    fn test_child_with_two_parents() {
        let errors = validate(vec![
            Definition::new("Geo", "Circle", vec![Constructor::new("Geo\\Circle")]),
            Definition::new("Geo", "Shape", vec![Constructor::new("Geo\\Circle")]),
            Definition::new("Geo", "Round", vec![Constructor::new("Geo\\Circle")]),
        ]);
        assert!(matches!(errors.as_slice(), [GeneratorError::MultipleParents { child, .. }] if child == "Geo\\Circle"));
    }

    #[test]
    fn test_duplicates() {
        let errors = validate(vec![Definition::new(
            "My",
            "Point",
            vec![Constructor::with_arguments(
                "My\\Point",
                vec![Argument::new("x", "int"), Argument::new("x", "int")],
            )],
        )
        .with_derivings(vec![Deriving::Equals, Deriving::Equals])]);

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| matches!(e, GeneratorError::DuplicateArgument { .. })));
        assert!(errors.iter().any(|e| matches!(e, GeneratorError::DuplicateDeriving { .. })));
    }
}
