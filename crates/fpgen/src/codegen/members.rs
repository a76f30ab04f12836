//! Placeholders computed for every expansion, and the condition composer.

use crate::ir::{Condition, Definition};
use super::context::GenerationContext;
use super::placeholders::{Placeholder, Placeholders};

pub fn universal(ctx: &GenerationContext<'_>) -> Placeholders {
    let fields = ctx.fields();
    let mut placeholders = Placeholders::new();

    placeholders.set(Placeholder::NamespaceName, ctx.namespace());
    placeholders.set(Placeholder::ClassName, ctx.class_name());
    placeholders.set(Placeholder::VariableName, ctx.variable_name());
    placeholders.set(Placeholder::AbstractFinal, ctx.keyword.as_str());
    placeholders.set(
        Placeholder::ClassExtends,
        ctx.parent_class()
            .map(|parent| format!(" extends {}", ctx.class_reference(&parent)))
            .unwrap_or_default(),
    );

    let arguments: Vec<String> = fields
        .iter()
        .map(|f| format!("{} ${}", ctx.type_hint(f), f.name))
        .collect();
    let arguments = arguments.join(", ");

    let properties: Vec<String> = fields.iter().map(|f| format!("private ${};", f.name)).collect();
    placeholders.set(
        Placeholder::Properties,
        if properties.is_empty() {
            String::new()
        } else {
            format!("{}\n", properties.join("\n        "))
        },
    );

    let guards: String = applicable_conditions(ctx).into_iter().map(guard).collect();
    let assignments: String = fields
        .iter()
        .map(|f| format!("            $this->{name} = ${name};\n", name = f.name))
        .collect();
    placeholders.set(
        Placeholder::Constructor,
        if guards.is_empty() && assignments.is_empty() {
            String::new()
        } else {
            format!(
                "public function __construct({})\n        {{\n{}{}        }}\n\n",
                arguments, guards, assignments
            )
        },
    );

    let accessors: Vec<String> = fields
        .iter()
        .map(|f| {
            format!(
                "public function {name}(): {typ}\n        {{\n            return $this->{name};\n        }}",
                name = f.name,
                typ = ctx.type_hint(f),
            )
        })
        .collect();
    placeholders.set(
        Placeholder::Accessors,
        if accessors.is_empty() {
            String::new()
        } else {
            format!("{}\n", accessors.join("\n\n        "))
        },
    );

    placeholders.set(Placeholder::Arguments, arguments);
    placeholders
}

/// Conditions guarding the active constructor, in declaration order.
///
/// A condition applies when it targets the wildcard or the active constructor's short
/// name. Outside variant generation the definition's own name also matches.
pub fn applicable_conditions<'a>(ctx: &GenerationContext<'a>) -> Vec<&'a Condition> {
    let definition: &'a Definition = ctx.definition;
    let short_name = ctx.constructor_short_name();
    let owner_matches = !ctx.is_variant();

    definition
        .conditions
        .iter()
        .filter(|condition| {
            short_name.is_some_and(|name| condition.applies_to(name))
                || condition.target == Condition::WILDCARD
                || (owner_matches && condition.target == definition.name)
        })
        .collect()
}

fn guard(condition: &Condition) -> String {
    format!(
        "            if ({}) {{\n                throw new \\InvalidArgumentException('{}');\n            }}\n\n",
        condition.expression,
        condition.message.replace('\\', "\\\\").replace('\'', "\\'")
    )
}
