//! Literal placeholder substitution.
//!
//! Tokens are written `{{name}}`. Substitution is a single left-to-right pass:
//! replacement text is never rescanned, so generated code may itself contain
//! brace pairs. Text between braces that is not a well-formed name is copied
//! through unchanged.

use crate::diagnostic::GeneratorError;
use super::placeholders::{Placeholder, Placeholders};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitutes every token in `template`.
///
/// A line holding nothing but indentation and a single token whose value is
/// empty is dropped together with its line break. Unknown or uncomputed
/// placeholders fail the whole substitution.
pub fn substitute(
    template: &str,
    placeholders: &Placeholders,
    definition: &str,
) -> Result<String, GeneratorError> {
    let mut output = String::with_capacity(template.len());

    for line in template.split_inclusive('\n') {
        if let Some(name) = standalone_token(line) {
            if lookup(name, placeholders, definition)?.is_empty() {
                continue;
            }
        }
        substitute_line(line, placeholders, definition, &mut output)?;
    }

    Ok(output)
}

fn substitute_line(
    line: &str,
    placeholders: &Placeholders,
    definition: &str,
    output: &mut String,
) -> Result<(), GeneratorError> {
    let mut rest = line;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];

        match after.find(CLOSE) {
            Some(end) if is_token_name(&after[..end]) => {
                output.push_str(lookup(&after[..end], placeholders, definition)?);
                rest = &after[end + CLOSE.len()..];
            }
            _ => {
                output.push_str(OPEN);
                rest = after;
            }
        }
    }

    output.push_str(rest);
    Ok(())
}

fn lookup<'p>(
    name: &str,
    placeholders: &'p Placeholders,
    definition: &str,
) -> Result<&'p str, GeneratorError> {
    let placeholder = Placeholder::from_name(name).ok_or_else(|| GeneratorError::UnknownPlaceholder {
        name: name.to_string(),
    })?;

    placeholders
        .get(placeholder)
        .ok_or_else(|| GeneratorError::UncomputedPlaceholder {
            definition: definition.to_string(),
            name: name.to_string(),
        })
}

/// The token name if `line` consists of one token and whitespace only.
fn standalone_token(line: &str) -> Option<&str> {
    let inner = line.trim().strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
    is_token_name(inner).then_some(inner)
}

fn is_token_name(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
