//! FromScalar, ToScalar, FromString and ToString.

use crate::ir::{Constructor, Primitive};
use super::super::context::GenerationContext;
use super::super::placeholders::{Placeholder, Placeholders};

/// The single primitive field wrapped by `constructor`: the implicit `value` of a
/// scalar marker or the sole declared primitive argument.
pub fn wrapped_field(constructor: &Constructor) -> Option<(String, Primitive)> {
    match constructor.fields().as_ref() {
        [field] => field.typ.as_primitive().map(|p| (field.name.clone(), p)),
        _ => None,
    }
}

fn active_wrapped_field(ctx: &GenerationContext<'_>) -> Option<(String, Primitive)> {
    ctx.value_constructor().and_then(wrapped_field)
}

/// `type` and `to_scalar_body`.
pub fn scalar(ctx: &GenerationContext<'_>) -> Placeholders {
    let mut placeholders = Placeholders::new();
    if let Some((field, primitive)) = active_wrapped_field(ctx) {
        placeholders.set(Placeholder::Type, primitive.keyword());
        placeholders.set(Placeholder::ToScalarBody, format!("return $this->{};\n", field));
    }
    placeholders
}

/// `to_string_body`; non-string wrappers are cast.
pub fn string(ctx: &GenerationContext<'_>) -> Placeholders {
    let mut placeholders = Placeholders::new();
    if let Some((field, primitive)) = active_wrapped_field(ctx) {
        let body = match primitive {
            Primitive::String => format!("return $this->{};\n", field),
            _ => format!("return (string) $this->{};\n", field),
        };
        placeholders.set(Placeholder::ToStringBody, body);
    }
    placeholders
}
