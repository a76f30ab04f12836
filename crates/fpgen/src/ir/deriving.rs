//! Deriving capabilities attached to a definition.

use std::fmt;
use serde::{Deserialize, Serialize};

/// A generation capability. The set is closed; every match over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deriving {
    Uuid,
    FromString,
    ToString,
    FromScalar,
    ToScalar,
    FromArray,
    ToArray,
    Equals,
    Enum,
    Command,
    Query,
    DomainEvent,
    AggregateChanged,
}

impl Deriving {
    pub const ALL: [Deriving; 13] = [
        Self::Uuid,
        Self::FromString,
        Self::ToString,
        Self::FromScalar,
        Self::ToScalar,
        Self::FromArray,
        Self::ToArray,
        Self::Equals,
        Self::Enum,
        Self::Command,
        Self::Query,
        Self::DomainEvent,
        Self::AggregateChanged,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Uuid => "Uuid",
            Self::FromString => "FromString",
            Self::ToString => "ToString",
            Self::FromScalar => "FromScalar",
            Self::ToScalar => "ToScalar",
            Self::FromArray => "FromArray",
            Self::ToArray => "ToArray",
            Self::Equals => "Equals",
            Self::Enum => "Enum",
            Self::Command => "Command",
            Self::Query => "Query",
            Self::DomainEvent => "DomainEvent",
            Self::AggregateChanged => "AggregateChanged",
        }
    }

    /// Structural derivings define the whole class and stand alone.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Self::Enum
                | Self::Uuid
                | Self::Command
                | Self::Query
                | Self::DomainEvent
                | Self::AggregateChanged
        )
    }

    /// Derivings that require a single-field primitive wrapper.
    pub fn requires_wrapper(self) -> bool {
        matches!(
            self,
            Self::FromString | Self::ToString | Self::FromScalar | Self::ToScalar
        )
    }
}

impl fmt::Display for Deriving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
