//! Class-shape resolution: which classes a definition produces and with which keyword.

use crate::diagnostic::GeneratorError;
use crate::ir::{Constructor, ConstructorKind, Definition, DefinitionCollection, Deriving};

/// Keyword placed before `class` in a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKeyword {
    #[default]
    None,
    Abstract,
    Final,
}

impl ClassKeyword {
    /// Keyword text including its trailing space.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Abstract => "abstract ",
            Self::Final => "final ",
        }
    }
}

/// One class to generate: a definition, optionally narrowed to one constructor.
#[derive(Debug, Clone, Copy)]
pub struct GenerationTarget<'a> {
    pub definition: &'a Definition,
    pub constructor: Option<&'a Constructor>,
    pub keyword: ClassKeyword,
}

impl<'a> GenerationTarget<'a> {
    /// Fully-qualified name of the generated class.
    pub fn class(&self) -> String {
        self.definition.target_class(self.constructor)
    }
}

/// Resolves the classes generated for `definition`.
///
/// A sum type produces its base class (no keyword, `abstract` for enums) followed by
/// one final class per variant that is not itself a definition of the collection.
/// Variants that are definitions are produced when that definition is visited.
/// Anything else must have exactly one constructor and produces one final class.
pub fn resolve_targets<'a>(
    definition: &'a Definition,
    collection: &DefinitionCollection,
) -> Result<Vec<GenerationTarget<'a>>, GeneratorError> {
    let qualified_name = definition.qualified_name();

    if definition.constructors.is_empty() {
        return Err(GeneratorError::NoConstructors {
            definition: qualified_name,
        });
    }

    let (variants, own): (Vec<&Constructor>, Vec<&Constructor>) = definition
        .constructors
        .iter()
        .partition(|c| definition.constructor_kind(c) == ConstructorKind::Variant);

    if variants.is_empty() {
        return match own.as_slice() {
            [single] => Ok(vec![GenerationTarget {
                definition,
                constructor: Some(single),
                keyword: ClassKeyword::Final,
            }]),
            _ => Err(GeneratorError::MultipleValueConstructors {
                definition: qualified_name,
            }),
        };
    }

    // Only the definition's own self-named constructor may accompany variants.
    if own.len() > 1 || own.iter().any(|c| c.name != qualified_name) {
        return Err(GeneratorError::MixedConstructors {
            definition: qualified_name,
        });
    }

    let base_keyword = if definition.derives(Deriving::Enum) {
        ClassKeyword::Abstract
    } else {
        ClassKeyword::None
    };

    let mut targets = vec![GenerationTarget {
        definition,
        constructor: own.first().copied(),
        keyword: base_keyword,
    }];

    targets.extend(
        variants
            .into_iter()
            .filter(|variant| !collection.contains(&variant.name))
            .map(|variant| GenerationTarget {
                definition,
                constructor: Some(variant),
                keyword: ClassKeyword::Final,
            }),
    );

    Ok(targets)
}
