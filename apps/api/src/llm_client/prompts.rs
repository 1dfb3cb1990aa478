// Shared prompt-building utilities.
// Each service defines its own prompt templates alongside it; this file holds
// the cross-cutting helpers they render with.

/// Placeholder text for absent values and empty blocks.
pub const NONE: &str = "None";

/// Fills `{name}` placeholders in `template` in a single pass.
///
/// Substituted values are never rescanned, so user text containing `{...}`
/// is inserted verbatim. Unknown placeholders are left as written.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let capacity = template.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Renders an optional value, using `None` when absent.
pub fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or(NONE)
}

/// Renders a block of text, using `None` when it is empty.
pub fn block_or_none(block: &str) -> &str {
    if block.is_empty() {
        NONE
    } else {
        block
    }
}
