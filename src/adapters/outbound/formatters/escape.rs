//! Escaping helpers for embedding report data in generated output.
//!
//! Component names, versions and vulnerability ids come from external
//! documents and may contain markup. Everything inserted into HTML, SVG or a
//! Markdown table goes through one of these functions first.

/// Escapes text for HTML and SVG element content
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escapes text for an attribute value; also encodes line breaks and tabs
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push_str(&escape_html(c.encode_utf8(&mut [0; 4]))),
        }
    }
    result
}

/// Escapes pipe characters and newlines for a Markdown table cell
pub fn escape_markdown_table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
