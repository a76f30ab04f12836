//! Enum: a base class listing its options and one class per option.

use super::super::context::GenerationContext;
use super::super::placeholders::{Placeholder, Placeholders};

pub fn enumeration(ctx: &GenerationContext<'_>) -> Placeholders {
    let definition = ctx.definition;
    let mut placeholders = Placeholders::new();

    // Option classes refer back to the base by its own name.
    placeholders.set(Placeholder::ClassName, definition.name.as_str());

    let options: Vec<String> = definition
        .constructors
        .iter()
        .map(|constructor| {
            let option = ctx.class_reference(&constructor.name);
            format!("{}::VALUE => {}::class,", option, option)
        })
        .collect();
    placeholders.set(Placeholder::EnumOptions, options.join("\n            "));

    if let Some(constructor) = ctx.constructor {
        placeholders.set(Placeholder::EnumValue, constructor.short_name());
    }

    placeholders
}
