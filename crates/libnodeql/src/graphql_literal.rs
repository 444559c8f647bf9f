use std::fmt::Write;

/// Render `value` as a quoted GraphQL `StringValue`.
///
/// https://spec.graphql.org/October2021/#sec-String-Value
pub(crate) fn string_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0008}' => quoted.push_str("\\b"),
            '\u{000C}' => quoted.push_str("\\f"),
            ch if ch.is_control() => {
                // Writing to a String cannot fail.
                let _ = write!(quoted, "\\u{:04X}", ch as u32);
            },
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Space-join child fragments into a selection set: `{ a b c }`, or `{}`
/// when there are no children.
pub(crate) fn selection_set<'a>(
    fragments: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut selection_set = String::from("{");
    for fragment in fragments {
        selection_set.push(' ');
        selection_set.push_str(fragment);
    }
    if selection_set.len() == 1 {
        selection_set.push('}');
    } else {
        selection_set.push_str(" }");
    }
    selection_set
}
