//! Whitespace normalization for emitted files.

/// Tidies generated file text.
///
/// Trailing whitespace is stripped, runs of blank lines collapse to one, blank lines
/// directly after an opening brace or directly before a closing brace are dropped,
/// and the text ends with exactly one newline.
pub fn tidy(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        if line.is_empty() {
            let after_open = kept.last().map_or(true, |prev| prev.is_empty() || prev.ends_with('{'));
            let before_close = lines[idx + 1..]
                .iter()
                .find(|next| !next.is_empty())
                .map_or(true, |next| next.trim_start().starts_with('}'));
            if after_open || before_close {
                continue;
            }
        }
        kept.push(line);
    }

    let mut output = kept.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_blank_runs() {
        assert_eq!(tidy("a;\n\n\n\nb;\n"), "a;\n\nb;\n");
    }

    #[test]
    fn test_drops_blank_lines_inside_braces() {
        let input = "class A\n{\n\n    private $a;\n\n\n}\n";
        assert_eq!(tidy(input), "class A\n{\n    private $a;\n}\n");
    }

    #[test]
    fn test_strips_trailing_whitespace_and_newlines() {
        assert_eq!(tidy("final \nclass A   \n\n\n"), "final\nclass A\n");
    }

    #[test]
    fn test_leading_blank_lines_are_dropped() {
        assert_eq!(tidy("\n\n<?php\n"), "<?php\n");
    }
}
