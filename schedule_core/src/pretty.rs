//! Minimal HTML pretty-printer for generated fragments.
//!
//! Puts every tag and every text run on its own line, indented one space per
//! level of nesting. Input is assumed to be well-formed generated markup.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Open(&'a str),
    Close(&'a str),
    Standalone(&'a str),
    Text(&'a str),
}

fn element_name(tag: &str) -> String {
    tag.trim_start_matches(['<', '/'])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn classify_tag(tag: &str) -> Token<'_> {
    if tag.starts_with("</") {
        Token::Close(tag)
    } else if tag.starts_with("<!")
        || tag.starts_with("<?")
        || tag.ends_with("/>")
        || VOID_ELEMENTS.contains(&element_name(tag).as_str())
    {
        Token::Standalone(tag)
    } else {
        Token::Open(tag)
    }
}

fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in TAG.find_iter(html) {
        let text = html[last..m.start()].trim();
        if !text.is_empty() {
            tokens.push(Token::Text(text));
        }
        tokens.push(classify_tag(m.as_str()));
        last = m.end();
    }

    let text = html[last..].trim();
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    tokens
}

/// One tag or text run per line, one space of indentation per nesting level
pub fn prettify(html: &str) -> String {
    let mut out = String::with_capacity(html.len() * 2);
    let mut depth = 0usize;

    for token in tokenize(html) {
        let (line, next_depth) = match token {
            Token::Open(tag) => (tag, depth + 1),
            Token::Close(tag) => {
                depth = depth.saturating_sub(1);
                (tag, depth)
            }
            Token::Standalone(tag) => (tag, depth),
            Token::Text(text) => (text, depth),
        };
        out.push_str(&" ".repeat(depth));
        out.push_str(line);
        out.push('\n');
        depth = next_depth;
    }
    out
}

/// Double the leading spaces of every line
pub fn double_indent(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let indent = line.len() - line.trim_start_matches(' ').len();
            format!("{}{}", " ".repeat(indent), line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
