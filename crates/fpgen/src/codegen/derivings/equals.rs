//! Equals: field-wise strict comparison.

use super::super::context::GenerationContext;
use super::super::placeholders::{Placeholder, Placeholders};

pub fn equals(ctx: &GenerationContext<'_>) -> Placeholders {
    let other = format!("${}", ctx.variable_name());
    let fields = ctx.fields();

    let body = if fields.is_empty() {
        format!("return get_class($this) === get_class({});", other)
    } else {
        let comparisons: Vec<String> = fields
            .iter()
            .map(|field| format!("$this->{name} === {other}->{name}", name = field.name, other = other))
            .collect();
        format!("return {};", comparisons.join(" &&\n            "))
    };

    let mut placeholders = Placeholders::new();
    placeholders.set(Placeholder::EqualsBody, body);
    placeholders
}
