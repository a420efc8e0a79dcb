use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::XmlElement;

/// Prefix of a `cref` that points at a heading in the same page
pub const ANCHOR_PREFIX: &str = "!:#";

static MEMBER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[TMPFE]:").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Drop the `T:`, `M:`, `P:`, `F:` or `E:` member-kind prefix
pub fn strip_member_prefix(name: &str) -> &str {
    match MEMBER_PREFIX.find(name) {
        Some(prefix) => &name[prefix.end()..],
        None => name,
    }
}

/// Collapse newlines and whitespace runs of a text node into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// Reduce every run of three or more newlines to one blank line
pub fn collapse_blank_lines(markdown: &str) -> String {
    BLANK_LINES.replace_all(markdown, "\n\n").into_owned()
}

/// Heading anchor for `text`, following the GitHub slug rules
pub fn anchor_slug(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c.to_lowercase().collect::<String>())
            } else if c.is_whitespace() {
                Some("-".to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Make `content` safe to place inside one table cell
pub fn table_cell(content: &str) -> String {
    WHITESPACE
        .replace_all(content.trim(), " ")
        .replace('|', "\\|")
}

/// Indent every line after the first by `width` spaces so a list item's
/// nested blocks stay inside the item. Blank lines stay empty.
pub fn indent_continuation(content: &str, width: usize) -> String {
    let indent = " ".repeat(width);
    let mut lines = content.lines();
    let mut output = lines.next().unwrap_or("").trim_end().to_string();
    for line in lines {
        output.push('\n');
        let line = line.trim_end();
        if !line.is_empty() {
            output.push_str(&indent);
            output.push_str(line);
        }
    }
    output
}

/// True for the `T:<namespace>.NamespaceDoc` member that documents the namespace itself
pub fn is_namespace_doc(element: &XmlElement) -> bool {
    if element.name != "member" {
        return false;
    }
    element
        .attribute("name")
        .is_some_and(|name| name.starts_with("T:") && name.ends_with(".NamespaceDoc"))
}

/// Turn the raw text of an `<example>` or `<code>` block into a code block body.
///
/// Leading and trailing blank lines are dropped. The indentation of the first
/// line, less `indent_offset`, is the amount removed from every line; lines
/// indented less than that lose only their own leading spaces.
pub fn to_code_block(content: &str, indent_offset: usize) -> String {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();

    let Some(start) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(start);
    let body = &lines[start..=end];

    let indent = leading_spaces(body[0]).saturating_sub(indent_offset);
    body.iter()
        .map(|line| &line[leading_spaces(line).min(indent)..])
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}
