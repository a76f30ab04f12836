//! Per-deriving placeholder strategies.

mod array;
mod conversion;
mod enumeration;
mod equals;
mod message;
mod scalar;

pub use conversion::FieldCodec;
pub use message::MessageKind;
pub use scalar::wrapped_field;

use crate::diagnostic::GeneratorError;
use crate::ir::Deriving;
use super::context::GenerationContext;
use super::placeholders::Placeholders;

/// Placeholders contributed by one deriving.
pub fn derive(deriving: Deriving, ctx: &GenerationContext<'_>) -> Result<Placeholders, GeneratorError> {
    match deriving {
        // Uuid only changes how other definitions convert values of this type.
        Deriving::Uuid => Ok(Placeholders::new()),
        Deriving::FromString | Deriving::ToString => Ok(scalar::string(ctx)),
        Deriving::FromScalar | Deriving::ToScalar => Ok(scalar::scalar(ctx)),
        Deriving::FromArray => array::from_array(ctx),
        Deriving::ToArray => array::to_array(ctx),
        Deriving::Equals => Ok(equals::equals(ctx)),
        Deriving::Enum => Ok(enumeration::enumeration(ctx)),
        Deriving::Command => message::message(ctx, MessageKind::Command),
        Deriving::Query => message::message(ctx, MessageKind::Query),
        Deriving::DomainEvent => message::message(ctx, MessageKind::DomainEvent),
        Deriving::AggregateChanged => message::message(ctx, MessageKind::AggregateChanged),
    }
}
