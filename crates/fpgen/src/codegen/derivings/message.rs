//! Payload-backed message classes: Command, Query, DomainEvent and AggregateChanged.

use crate::diagnostic::GeneratorError;
use crate::ir::Argument;
use super::super::context::GenerationContext;
use super::super::placeholders::{Placeholder, Placeholders};
use super::conversion::FieldCodec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Command,
    Query,
    DomainEvent,
    AggregateChanged,
}

impl MessageKind {
    fn base_class(self) -> &'static str {
        match self {
            Self::Command => "\\Prooph\\Common\\Messaging\\Command",
            Self::Query => "\\Prooph\\Common\\Messaging\\Query",
            Self::DomainEvent | Self::AggregateChanged => "\\Prooph\\Common\\Messaging\\DomainEvent",
        }
    }

    /// Events keep resolved payload values in instance fields.
    fn caches_accessors(self) -> bool {
        matches!(self, Self::DomainEvent | Self::AggregateChanged)
    }
}

struct Field<'f> {
    argument: &'f Argument,
    codec: FieldCodec,
}

pub fn message(ctx: &GenerationContext<'_>, kind: MessageKind) -> Result<Placeholders, GeneratorError> {
    let arguments = ctx.fields();
    let mut fields = Vec::with_capacity(arguments.len());
    for argument in arguments.iter() {
        fields.push(Field {
            codec: FieldCodec::for_argument(ctx, argument)?,
            argument,
        });
    }

    // The aggregate identifier travels outside the payload map.
    let (aggregate_id, payload_fields) = match (kind, fields.split_first()) {
        (MessageKind::AggregateChanged, Some((first, rest))) => (Some(first), rest),
        _ => (None, fields.as_slice()),
    };

    let mut placeholders = Placeholders::new();
    placeholders.set(Placeholder::MessageName, ctx.definition.message_name());
    placeholders.set(Placeholder::ClassExtends, format!(" extends {}", kind.base_class()));
    placeholders.set(
        Placeholder::Arguments,
        arguments
            .iter()
            .map(|a| format!("{} ${}", ctx.type_hint(a), a.name))
            .collect::<Vec<_>>()
            .join(", "),
    );
    placeholders.set(
        Placeholder::StaticConstructorBody,
        static_constructor_body(aggregate_id, payload_fields),
    );
    placeholders.set(
        Placeholder::PayloadValidation,
        payload_fields
            .iter()
            .filter_map(payload_check)
            .collect::<Vec<_>>()
            .join("\n            "),
    );

    let properties = if kind.caches_accessors() {
        fields
            .iter()
            .map(|f| format!("private ${};", f.argument.name))
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };
    placeholders.set(Placeholder::Properties, terminated(&properties, "\n        "));

    let accessors: Vec<String> = fields
        .iter()
        .map(|f| accessor(ctx, f, kind.caches_accessors()))
        .collect();
    placeholders.set(Placeholder::Accessors, terminated(&accessors, "\n\n        "));

    if let Some(id) = aggregate_id {
        placeholders.set(Placeholder::AggregateId, id.argument.name.as_str());
    }

    Ok(placeholders)
}

/// Joins lines and terminates a non-empty result with a newline.
fn terminated(lines: &[String], separator: &str) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join(separator))
    }
}

fn static_constructor_body(aggregate_id: Option<&Field<'_>>, payload: &[Field<'_>]) -> String {
    let leading = aggregate_id
        .map(|id| format!("{}, ", id.codec.encode(&format!("${}", id.argument.name))))
        .unwrap_or_default();

    if payload.is_empty() {
        return format!("return new self({}[]);", leading);
    }

    let entries: String = payload
        .iter()
        .map(|f| {
            let local = format!("${}", f.argument.name);
            format!(
                "                '{}' => {},\n",
                f.argument.name,
                f.codec.encode_field(&local, f.argument.nullable)
            )
        })
        .collect();

    format!("return new self({}[\n{}            ]);", leading, entries)
}

fn payload_check(field: &Field<'_>) -> Option<String> {
    let name = &field.argument.name;
    let value = format!("$payload['{}']", name);

    match (field.argument.nullable, field.codec.check()) {
        (false, Some(check)) => Some(format!(
            "if (! isset({value}) || ! {check}({value})) {{\n                throw new \\InvalidArgumentException(\"Key '{name}' is missing in payload or is not {described}\");\n            }}\n",
            value = value,
            check = check,
            name = name,
            described = field.codec.described(),
        )),
        (false, None) => Some(format!(
            "if (! isset({value})) {{\n                throw new \\InvalidArgumentException(\"Key '{name}' is missing in payload\");\n            }}\n",
            value = value,
            name = name,
        )),
        (true, Some(check)) => Some(format!(
            "if (isset({value}) && ! {check}({value})) {{\n                throw new \\InvalidArgumentException(\"Value for '{name}' is not {described} in payload\");\n            }}\n",
            value = value,
            check = check,
            name = name,
            described = field.codec.described(),
        )),
        (true, None) => None,
    }
}

fn accessor(ctx: &GenerationContext<'_>, field: &Field<'_>, cached: bool) -> String {
    let name = &field.argument.name;
    let value = format!("$this->payload['{}']", name);
    let decoded = field.codec.decode(&value);

    let body = match (cached, field.argument.nullable) {
        (false, false) => format!("return {};", decoded),
        (false, true) => format!("return isset({}) ? {} : null;", value, decoded),
        (true, nullable) => {
            let guard = if nullable {
                format!("! isset($this->{}) && isset({})", name, value)
            } else {
                format!("! isset($this->{})", name)
            };
            format!(
                "if ({guard}) {{\n                $this->{name} = {decoded};\n            }}\n\n            return $this->{name};",
                guard = guard,
                name = name,
                decoded = decoded,
            )
        }
    };

    format!(
        "public function {}(): {}\n        {{\n            {}\n        }}",
        name,
        ctx.type_hint(field.argument),
        body
    )
}
