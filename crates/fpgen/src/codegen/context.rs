//! The (definition, constructor) pair a single expansion works on.

use std::borrow::Cow;

use crate::diagnostic::GeneratorError;
use crate::ir::{
    split_qualified, Argument, Constructor, ConstructorKind, Definition, DefinitionCollection, TypeRef,
};
use super::shape::ClassKeyword;

/// Everything a placeholder computation may consult.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub definition: &'a Definition,
    pub constructor: Option<&'a Constructor>,
    pub collection: &'a DefinitionCollection,
    pub keyword: ClassKeyword,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        definition: &'a Definition,
        constructor: Option<&'a Constructor>,
        collection: &'a DefinitionCollection,
        keyword: ClassKeyword,
    ) -> Self {
        Self {
            definition,
            constructor,
            collection,
            keyword,
        }
    }

    /// Fully-qualified name of the class being generated.
    pub fn target_class(&self) -> String {
        self.definition.target_class(self.constructor)
    }

    pub fn namespace(&self) -> String {
        split_qualified(&self.target_class()).0.to_string()
    }

    pub fn class_name(&self) -> String {
        split_qualified(&self.target_class()).1.to_string()
    }

    pub fn variable_name(&self) -> String {
        self.class_name().to_lowercase()
    }

    /// True when generating a child class from one of the definition's variant constructors.
    pub fn is_variant(&self) -> bool {
        self.constructor
            .is_some_and(|c| self.definition.constructor_kind(c) == ConstructorKind::Variant)
    }

    /// The active constructor, or the definition's only constructor when none is active.
    pub fn value_constructor(&self) -> Option<&'a Constructor> {
        match (self.constructor, self.definition.constructors.as_slice()) {
            (Some(constructor), _) => Some(constructor),
            (None, [single]) if self.definition.constructor_kind(single) != ConstructorKind::Variant => Some(single),
            _ => None,
        }
    }

    /// Fields of the class being generated, in declaration order.
    pub fn fields(&self) -> Cow<'a, [Argument]> {
        match self.value_constructor() {
            Some(constructor) => constructor.fields(),
            None => Cow::Borrowed(&[]),
        }
    }

    /// Short name used to match conditions against the active constructor.
    pub fn constructor_short_name(&self) -> Option<&'a str> {
        self.constructor.map(Constructor::short_name)
    }

    /// Looks up a referenced definition.
    pub fn resolve(&self, qualified_name: &str) -> Result<&'a Definition, GeneratorError> {
        self.collection
            .get(qualified_name)
            .ok_or_else(|| GeneratorError::UnknownTypeReference {
                definition: self.definition.qualified_name(),
                name: qualified_name.to_string(),
            })
    }

    /// How the generated class refers to another class: by short name inside its own
    /// namespace, fully qualified otherwise.
    pub fn class_reference(&self, qualified_name: &str) -> String {
        let qualified_name = qualified_name.trim_start_matches('\\');
        let (namespace, short_name) = split_qualified(qualified_name);
        if namespace == self.namespace() {
            short_name.to_string()
        } else {
            format!("\\{}", qualified_name)
        }
    }

    /// Declared type of `argument` as written in a signature.
    pub fn type_hint(&self, argument: &Argument) -> String {
        let rendered = match &argument.typ {
            TypeRef::Primitive(primitive) => primitive.keyword().to_string(),
            TypeRef::Definition(name) => self.class_reference(name),
        };
        if argument.nullable {
            format!("?{}", rendered)
        } else {
            rendered
        }
    }

    /// Fully-qualified name of the class the generated class extends, if any.
    pub fn parent_class(&self) -> Option<String> {
        if self.is_variant() {
            return Some(self.definition.qualified_name());
        }
        self.collection
            .parent_of(self.definition)
            .map(Definition::qualified_name)
    }
}
