//! How a field travels between its declared type and its serialized form.

use crate::diagnostic::GeneratorError;
use crate::ir::{Argument, Definition, Deriving, Primitive, TypeRef};
use super::super::context::GenerationContext;
use super::scalar::wrapped_field;

/// Serialized form of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wire {
    Primitive(Primitive),
    Array,
    /// No runtime check is known.
    Unchecked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoder {
    Direct,
    FromString,
    FromScalar,
    FromArray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoder {
    Direct,
    ToString,
    ToScalar,
    ToArray,
}

/// Conversion rules for one field, resolved against the collection.
#[derive(Debug, Clone)]
pub struct FieldCodec {
    class: String,
    wire: Wire,
    decoder: Decoder,
    encoder: Encoder,
}

impl FieldCodec {
    pub fn for_argument(ctx: &GenerationContext<'_>, argument: &Argument) -> Result<Self, GeneratorError> {
        match &argument.typ {
            TypeRef::Primitive(primitive) => Ok(Self {
                class: String::new(),
                wire: Wire::Primitive(*primitive),
                decoder: Decoder::Direct,
                encoder: Encoder::Direct,
            }),
            TypeRef::Definition(name) => {
                let target = ctx.resolve(name)?;
                let (decoder, wire) = decoding(target);
                Ok(Self {
                    class: ctx.class_reference(name),
                    wire,
                    decoder,
                    encoder: encoding(target),
                })
            }
        }
    }

    /// Runtime check function for the serialized value, if one applies.
    pub fn check(&self) -> Option<&'static str> {
        match self.wire {
            Wire::Primitive(primitive) => Some(primitive.check_function()),
            Wire::Array => Some("is_array"),
            Wire::Unchecked => None,
        }
    }

    /// The serialized type with article, for error messages.
    pub fn described(&self) -> &'static str {
        match self.wire {
            Wire::Primitive(primitive) => primitive.described(),
            Wire::Array => "an array",
            Wire::Unchecked => "a value",
        }
    }

    /// Expression turning the serialized `expr` into the field type.
    pub fn decode(&self, expr: &str) -> String {
        match self.decoder {
            Decoder::Direct => expr.to_string(),
            Decoder::FromString => format!("{}::fromString({})", self.class, expr),
            Decoder::FromScalar => format!("{}::fromScalar({})", self.class, expr),
            Decoder::FromArray => format!("{}::fromArray({})", self.class, expr),
        }
    }

    /// Expression serializing the field value `expr`.
    pub fn encode(&self, expr: &str) -> String {
        match self.encoder {
            Encoder::Direct => expr.to_string(),
            Encoder::ToString => format!("{}->toString()", expr),
            Encoder::ToScalar => format!("{}->toScalar()", expr),
            Encoder::ToArray => format!("{}->toArray()", expr),
        }
    }

    /// `expr` encoded, guarded against null for nullable fields.
    pub fn encode_field(&self, expr: &str, nullable: bool) -> String {
        let encoded = self.encode(expr);
        if nullable && encoded != expr {
            format!("null === {} ? null : {}", expr, encoded)
        } else {
            encoded
        }
    }
}

fn decoding(target: &Definition) -> (Decoder, Wire) {
    if target.derives(Deriving::Uuid) || target.derives(Deriving::FromString) {
        (Decoder::FromString, Wire::Primitive(Primitive::String))
    } else if target.derives(Deriving::FromScalar) {
        let wire = target
            .constructors
            .first()
            .and_then(wrapped_field)
            .map_or(Wire::Unchecked, |(_, primitive)| Wire::Primitive(primitive));
        (Decoder::FromScalar, wire)
    } else if target.derives(Deriving::FromArray) {
        (Decoder::FromArray, Wire::Array)
    } else {
        (Decoder::Direct, Wire::Unchecked)
    }
}

fn encoding(target: &Definition) -> Encoder {
    if target.derives(Deriving::Uuid) || target.derives(Deriving::ToString) {
        Encoder::ToString
    } else if target.derives(Deriving::ToScalar) {
        Encoder::ToScalar
    } else if target.derives(Deriving::ToArray) {
        Encoder::ToArray
    } else {
        Encoder::Direct
    }
}
