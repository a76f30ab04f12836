//! Placeholder names and the values computed for one expansion.

use std::collections::BTreeMap;

/// Every placeholder a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    NamespaceName,
    ClassName,
    VariableName,
    AbstractFinal,
    ClassExtends,
    Arguments,
    Properties,
    Constructor,
    Accessors,
    EnumOptions,
    EnumValue,
    EqualsBody,
    Type,
    ToScalarBody,
    ToStringBody,
    FromArrayBody,
    ToArrayBody,
    MessageName,
    StaticConstructorBody,
    PayloadValidation,
    AggregateId,
}

impl Placeholder {
    pub const ALL: [Placeholder; 21] = [
        Self::NamespaceName,
        Self::ClassName,
        Self::VariableName,
        Self::AbstractFinal,
        Self::ClassExtends,
        Self::Arguments,
        Self::Properties,
        Self::Constructor,
        Self::Accessors,
        Self::EnumOptions,
        Self::EnumValue,
        Self::EqualsBody,
        Self::Type,
        Self::ToScalarBody,
        Self::ToStringBody,
        Self::FromArrayBody,
        Self::ToArrayBody,
        Self::MessageName,
        Self::StaticConstructorBody,
        Self::PayloadValidation,
        Self::AggregateId,
    ];

    /// Name as written between `{{` and `}}` in templates.
    pub fn name(self) -> &'static str {
        match self {
            Self::NamespaceName => "namespace_name",
            Self::ClassName => "class_name",
            Self::VariableName => "variable_name",
            Self::AbstractFinal => "abstract_final",
            Self::ClassExtends => "class_extends",
            Self::Arguments => "arguments",
            Self::Properties => "properties",
            Self::Constructor => "constructor",
            Self::Accessors => "accessors",
            Self::EnumOptions => "enum_options",
            Self::EnumValue => "enum_value",
            Self::EqualsBody => "equals_body",
            Self::Type => "type",
            Self::ToScalarBody => "to_scalar_body",
            Self::ToStringBody => "to_string_body",
            Self::FromArrayBody => "from_array_body",
            Self::ToArrayBody => "to_array_body",
            Self::MessageName => "message_name",
            Self::StaticConstructorBody => "static_constructor_body",
            Self::PayloadValidation => "payload_validation",
            Self::AggregateId => "aggregate_id",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Placeholder values for one (definition, constructor) expansion.
///
/// Values are merged in a fixed order: universal values first, then one
/// set per deriving in declaration order. When two sets define the same
/// placeholder, the later one wins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Placeholders {
    values: BTreeMap<Placeholder, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.values.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Applies `later` on top of `self`; values in `later` replace existing ones.
    pub fn merge(&mut self, later: Placeholders) {
        self.values.extend(later.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
