//! Primitive types, type references and qualified names.

use std::fmt;
use serde::{Deserialize, Serialize};

/// Separator between namespace segments in a qualified name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Splits a qualified name into `(namespace, short_name)`.
///
/// A name without separator has an empty namespace.
pub fn split_qualified(name: &str) -> (&str, &str) {
    match name.rfind(NAMESPACE_SEPARATOR) {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}

/// Joins a namespace and a short name.
pub fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, name)
    }
}

/// Primitive types a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    String,
    Bool,
    Float,
}

impl Primitive {
    /// Parses a primitive type keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(Self::Int),
            "string" => Some(Self::String),
            "bool" => Some(Self::Bool),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    /// Type keyword used in generated signatures.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Float => "float",
        }
    }

    /// Runtime check function for values of this type.
    pub fn check_function(self) -> &'static str {
        match self {
            Self::Int => "is_int",
            Self::String => "is_string",
            Self::Bool => "is_bool",
            Self::Float => "is_float",
        }
    }

    /// Type name with article, as used in error messages.
    pub fn described(self) -> &'static str {
        match self {
            Self::Int => "an int",
            Self::String => "a string",
            Self::Bool => "a bool",
            Self::Float => "a float",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The declared type of an argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeRef {
    Primitive(Primitive),
    /// Fully-qualified name of another definition.
    Definition(String),
}

impl TypeRef {
    /// Parses a type: a primitive keyword, otherwise a qualified name.
    pub fn parse(text: &str) -> Self {
        match Primitive::from_keyword(text) {
            Some(primitive) => Self::Primitive(primitive),
            None => Self::Definition(text.trim_start_matches(NAMESPACE_SEPARATOR).to_string()),
        }
    }

    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Self::Primitive(primitive) => Some(*primitive),
            Self::Definition(_) => None,
        }
    }

    pub fn as_definition(&self) -> Option<&str> {
        match self {
            Self::Definition(name) => Some(name),
            Self::Primitive(_) => None,
        }
    }
}

impl From<String> for TypeRef {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<TypeRef> for String {
    fn from(typ: TypeRef) -> Self {
        typ.to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => write!(f, "{}", primitive),
            Self::Definition(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_qualified() {
        assert_eq!(split_qualified("Foo\\Bar\\Person"), ("Foo\\Bar", "Person"));
        assert_eq!(split_qualified("Person"), ("", "Person"));
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("My", "UserId"), "My\\UserId");
        assert_eq!(qualify("", "UserId"), "UserId");
    }

    #[test]
    fn test_parse_type_ref() {
        assert_eq!(TypeRef::parse("string"), TypeRef::Primitive(Primitive::String));
        assert_eq!(TypeRef::parse("float"), TypeRef::Primitive(Primitive::Float));
        assert_eq!(
            TypeRef::parse("\\Some\\Email"),
            TypeRef::Definition("Some\\Email".to_string())
        );
    }

    #[test]
    fn test_primitive_checks() {
        assert_eq!(Primitive::Int.check_function(), "is_int");
        assert_eq!(Primitive::Int.described(), "an int");
        assert_eq!(Primitive::Bool.keyword(), "bool");
    }
}
