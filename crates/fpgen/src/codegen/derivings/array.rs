//! FromArray and ToArray.

use crate::diagnostic::GeneratorError;
use crate::ir::Argument;
use super::super::context::GenerationContext;
use super::super::placeholders::{Placeholder, Placeholders};
use super::conversion::FieldCodec;

pub fn from_array(ctx: &GenerationContext<'_>) -> Result<Placeholders, GeneratorError> {
    let fields = ctx.fields();

    let mut blocks = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let codec = FieldCodec::for_argument(ctx, field)?;
        blocks.push(from_array_block(field, &codec));
    }

    let locals: Vec<String> = fields.iter().map(|f| format!("${}", f.name)).collect();
    let construction = format!("return new self({});\n", locals.join(", "));

    let body = if blocks.is_empty() {
        construction
    } else {
        format!("{}\n            {}", blocks.join("\n            "), construction)
    };

    let mut placeholders = Placeholders::new();
    placeholders.set(Placeholder::FromArrayBody, body);
    Ok(placeholders)
}

fn from_array_block(field: &Argument, codec: &FieldCodec) -> String {
    let name = &field.name;
    let value = format!("$data['{}']", name);

    match (field.nullable, codec.check()) {
        (false, Some(check)) => format!(
            "if (! isset({value}) || ! {check}({value})) {{\n                throw new \\InvalidArgumentException(\"Key '{name}' is missing in data array or is not {described}\");\n            }}\n\n            ${name} = {decoded};\n",
            value = value,
            check = check,
            name = name,
            described = codec.described(),
            decoded = codec.decode(&value),
        ),
        (false, None) => format!(
            "if (! isset({value})) {{\n                throw new \\InvalidArgumentException(\"Key '{name}' is missing in data array\");\n            }}\n\n            ${name} = {decoded};\n",
            value = value,
            name = name,
            decoded = codec.decode(&value),
        ),
        (true, Some(check)) => format!(
            "if (isset({value})) {{\n                if (! {check}({value})) {{\n                    throw new \\InvalidArgumentException(\"Value for '{name}' is not {described} in data array\");\n                }}\n\n                ${name} = {decoded};\n            }} else {{\n                ${name} = null;\n            }}\n",
            value = value,
            check = check,
            name = name,
            described = codec.described(),
            decoded = codec.decode(&value),
        ),
        (true, None) => format!("${} = {} ?? null;\n", name, value),
    }
}

pub fn to_array(ctx: &GenerationContext<'_>) -> Result<Placeholders, GeneratorError> {
    let fields = ctx.fields();

    let mut entries = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let codec = FieldCodec::for_argument(ctx, field)?;
        let property = format!("$this->{}", field.name);
        let encoded = codec.encode(&property);
        let value = if field.nullable {
            format!("null === {} ? null : {}", property, encoded)
        } else {
            encoded
        };
        entries.push(format!("                '{}' => {},\n", field.name, value));
    }

    let body = if entries.is_empty() {
        "return [];\n".to_string()
    } else {
        format!("return [\n{}            ];\n", entries.concat())
    };

    let mut placeholders = Placeholders::new();
    placeholders.set(Placeholder::ToArrayBody, body);
    Ok(placeholders)
}
