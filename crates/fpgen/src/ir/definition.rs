//! Definitions, constructors, arguments and conditions.

use std::borrow::Cow;
use serde::{Deserialize, Serialize};

use super::types::{qualify, split_qualified, Primitive, TypeRef, NAMESPACE_SEPARATOR};
use super::Deriving;

/// Name of the implicit field carried by scalar marker constructors.
pub const SCALAR_FIELD: &str = "value";

/// A named, typed field of a constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: TypeRef,
    #[serde(default)]
    pub nullable: bool,
}

impl Argument {
    /// Creates a required argument; `typ` is a primitive keyword or a qualified name.
    pub fn new(name: impl Into<String>, typ: &str) -> Self {
        Self {
            name: name.into(),
            typ: TypeRef::parse(typ),
            nullable: false,
        }
    }

    pub fn primitive(name: impl Into<String>, primitive: Primitive) -> Self {
        Self {
            name: name.into(),
            typ: TypeRef::Primitive(primitive),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// How a constructor relates to the definition that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// Built-in marker wrapping a single primitive `value` field.
    Scalar(Primitive),
    /// Carries the owner's own fields.
    Value,
    /// Names another class, making the owner a sum type.
    Variant,
}

/// A named variant of a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl Constructor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// The primitive wrapped by a scalar marker constructor, if this is one.
    pub fn scalar_marker(&self) -> Option<Primitive> {
        match self.name.as_str() {
            "String" | "scalar:string" => Some(Primitive::String),
            "Int" | "scalar:int" => Some(Primitive::Int),
            "Float" | "scalar:float" => Some(Primitive::Float),
            "Bool" | "scalar:bool" => Some(Primitive::Bool),
            _ => None,
        }
    }

    pub fn short_name(&self) -> &str {
        split_qualified(&self.name).1
    }

    pub fn namespace(&self) -> &str {
        split_qualified(&self.name).0
    }

    /// Fields carried by this constructor. Scalar markers expose one implicit `value` field.
    pub fn fields(&self) -> Cow<'_, [Argument]> {
        match self.scalar_marker() {
            Some(primitive) => Cow::Owned(vec![Argument::primitive(SCALAR_FIELD, primitive)]),
            None => Cow::Borrowed(&self.arguments),
        }
    }
}

/// A validation rule guarding one constructor, or all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub target: String,
    pub expression: String,
    pub message: String,
}

impl Condition {
    /// Target matching every constructor.
    pub const WILDCARD: &'static str = "_";

    pub fn new(target: impl Into<String>, expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            expression: expression.into(),
            message: message.into(),
        }
    }

    pub fn applies_to(&self, constructor_short_name: &str) -> bool {
        self.target == Self::WILDCARD || self.target == constructor_short_name
    }
}

/// One named algebraic type to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub namespace: String,
    pub name: String,
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub derivings: Vec<Deriving>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Overrides the message name used by message derivings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_name: Option<String>,
}

impl Definition {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, constructors: Vec<Constructor>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            constructors,
            derivings: Vec::new(),
            conditions: Vec::new(),
            message_name: None,
        }
    }

    pub fn with_derivings(mut self, derivings: Vec<Deriving>) -> Self {
        self.derivings = derivings;
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_message_name(mut self, message_name: impl Into<String>) -> Self {
        self.message_name = Some(message_name.into());
        self
    }

    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    pub fn derives(&self, deriving: Deriving) -> bool {
        self.derivings.contains(&deriving)
    }

    /// Name carried by generated messages.
    pub fn message_name(&self) -> String {
        self.message_name
            .clone()
            .unwrap_or_else(|| self.qualified_name())
    }

    pub fn constructor_kind(&self, constructor: &Constructor) -> ConstructorKind {
        if let Some(primitive) = constructor.scalar_marker() {
            return ConstructorKind::Scalar(primitive);
        }
        if !constructor.name.contains(NAMESPACE_SEPARATOR) || constructor.name == self.qualified_name() {
            ConstructorKind::Value
        } else {
            ConstructorKind::Variant
        }
    }

    /// Fully-qualified name of the class generated for `constructor`.
    ///
    /// Variant constructors generate their own class; everything else generates the definition.
    pub fn target_class(&self, constructor: Option<&Constructor>) -> String {
        match constructor {
            Some(constructor) if self.constructor_kind(constructor) == ConstructorKind::Variant => {
                constructor.name.clone()
            }
            _ => self.qualified_name(),
        }
    }

    /// Constructors naming other classes.
    pub fn variants(&self) -> impl Iterator<Item = &Constructor> {
        self.constructors
            .iter()
            .filter(|c| self.constructor_kind(c) == ConstructorKind::Variant)
    }
}
