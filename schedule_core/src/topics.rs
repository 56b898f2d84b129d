//! Topics list rendering.
//!
//! The Markdown topics of a session become a styled, collapsible list:
//! - list classes mark test and sprint sessions
//! - parenthetical remarks are wrapped in styled spans
//! - every `Test N.` is followed by the test-day instructions
//! - the result is pretty-printed and indented to sit inside the table cell

use crate::pretty::{double_indent, prettify};
use crate::render::markdown;
use crate::SessionKind;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TEST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Test [0-9]\.").expect("test pattern regex"));

static SPRINT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Sprint [0-9]").expect("sprint pattern regex"));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

// Placeholders for literal `((` and `))`; private-use code points never
// appear in authored text.
const DOUBLE_OPEN: &str = "\u{E000}";
const DOUBLE_CLOSE: &str = "\u{E001}";

/// Kind of session suggested by its topics text
pub fn classify(topics: &str) -> SessionKind {
    if TEST_PATTERN.is_match(topics) {
        SessionKind::InClassExam
    } else if SPRINT_PATTERN.is_match(topics) {
        SessionKind::Project
    } else {
        SessionKind::Regular
    }
}

/// Render a session's Markdown topics as indented list markup.
///
/// `day` is the weekday name of the session, used in test instructions.
pub fn render_topics(topics: &str, day: &str) -> String {
    let html = markdown(topics);
    let html = add_list_classes(&html);
    let html = mark_parentheticals(&html);
    let html = add_exam_details(&html, day);
    double_indent(&prettify(&html))
}

/// Class the first list and every list item as topics, with an `exam` or
/// `sprint` modifier when the topics mention a test or a sprint.
fn add_list_classes(html: &str) -> String {
    let modifier = match classify(html) {
        SessionKind::InClassExam => " exam",
        SessionKind::Project => " sprint",
        _ => "",
    };

    let ul = format!(r#"<ul class="topics collapsibleList{modifier}">"#);
    let li = format!(r#"<li class="topic{modifier}">"#);

    html.replacen("<ul>", &ul, 1).replace("<li>", &li)
}

/// Wrap `(...)` in parenthetical spans, keeping a trailing period inside the
/// span. `((...))` is an escape and renders as a plain `(...)`.
///
/// Only text between tags is rewritten; attribute values such as link
/// targets keep their parentheses.
pub fn mark_parentheticals(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for tag in TAG.find_iter(html) {
        out.push_str(&mark_text(&html[last..tag.start()]));
        out.push_str(tag.as_str());
        last = tag.end();
    }
    out.push_str(&mark_text(&html[last..]));
    out
}

fn mark_text(text: &str) -> String {
    text.replace("((", DOUBLE_OPEN)
        .replace("))", DOUBLE_CLOSE)
        .replace('(', "<span class=parenthetical>(")
        .replace(')', ")</span>")
        .replace("</span>.", ".</span>")
        .replace(DOUBLE_OPEN, "(")
        .replace(DOUBLE_CLOSE, ")")
}

fn add_exam_details(html: &str, day: &str) -> String {
    let details = exam_details(day, day);
    TEST_PATTERN
        .replace_all(html, |caps: &Captures| format!("{}{}", &caps[0], details))
        .into_owned()
}

/// Instructions listed under a test in the topics
pub fn exam_details(regular_day: &str, exam_day: &str) -> String {
    format!(
        r#"
<ul class="topic evening_exam">
  <li class="topic evening_exam">
    The regular in-class session on {regular_day}
    is an OPTIONAL review session.
  </li>
  <li class="topic exam_day_time_rooms">
    The test itself is
    <span class=exam_date_time>
      {exam_day} evening from 7:30 p.m. to 9:30 p.m.
      <span class=parenthetical>(with an additional 30-minute grace period)</span>
    </span>
    <span class=exam_rooms>
    in rooms TBA.
    </span>
    <ul>
      <li>
        So NOT {regular_day}, NOT daytime.
      </li>
    </ul>
  </li>
  <li class="topic exam_requirement">
    You MUST have completed this test's PRACTICE project
    <span class=parenthetical>(including its paper-and-pencil exercise)</span>
    BEFORE you take this test.
    <ul>
      <li>
        It is your ADMISSION TICKET to the test.
      </li>
      <li>
        Talk to your instructor if that poses a problem for you.
      </li>
    </ul>
  </li>
</ul>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("- Test 2. Loops"), SessionKind::InClassExam);
        assert_eq!(classify("- Sprint 1 planning"), SessionKind::Project);
        assert_eq!(classify("- Test 2 without period"), SessionKind::Regular);
        assert_eq!(classify("- Testing 1."), SessionKind::Regular);
    }

    #[test]
    fn test_single_parentheses_styled() {
        assert_eq!(
            mark_parentheticals("loops (for and while)"),
            "loops <span class=parenthetical>(for and while)</span>"
        );
    }

    #[test]
    fn test_double_parentheses_literal() {
        assert_eq!(mark_parentheticals("call f((x))"), "call f(x)");
    }

    #[test]
    fn test_attributes_keep_parentheses() {
        assert_eq!(
            mark_parentheticals(r#"<p><a href="http://x/y_(z)">doc</a> (ref)</p>"#),
            r#"<p><a href="http://x/y_(z)">doc</a> <span class=parenthetical>(ref)</span></p>"#
        );
    }

    #[test]
    fn test_span_around_inline_markup() {
        assert_eq!(
            mark_parentheticals("(see <em>notes</em>)"),
            "<span class=parenthetical>(see <em>notes</em>)</span>"
        );
    }

    #[test]
    fn test_link_with_parentheses_in_topics() {
        let html = render_topics("- [doc](http://x/y_(z)) (ref)\n", "Monday");
        assert!(!html.contains("href=\"http://x/y_<span"));
        assert!(html.contains("    doc\n"));
        assert!(html.contains("<span class=parenthetical>\n"));
    }

    #[test]
    fn test_period_moves_inside_span() {
        assert_eq!(
            mark_parentheticals("(see notes)."),
            "<span class=parenthetical>(see notes).</span>"
        );
    }

    #[test]
    fn test_list_classes_plain() {
        let html = add_list_classes("<ul>\n<li>a<ul>\n<li>b</li>\n</ul></li>\n</ul>\n");
        assert_eq!(
            html,
            "<ul class=\"topics collapsibleList\">\n<li class=\"topic\">a<ul>\n<li class=\"topic\">b</li>\n</ul></li>\n</ul>\n"
        );
    }

    #[test]
    fn test_list_classes_sprint() {
        let html = add_list_classes("<ul>\n<li>Sprint 1 demo</li>\n</ul>\n");
        assert!(html.contains(r#"<ul class="topics collapsibleList sprint">"#));
        assert!(html.contains(r#"<li class="topic sprint">"#));
    }

    #[test]
    fn test_render_topics_exam() {
        let html = render_topics("- Test 1. Covers sessions 1 to 8\n", "Thursday");

        assert!(html.contains(r#"<ul class="topics collapsibleList exam">"#));
        assert!(html.contains("The regular in-class session on Thursday"));
        assert!(html.contains("So NOT Thursday, NOT daytime."));
        assert_eq!(html.matches("<span class=parenthetical>").count(), 2);
    }

    #[test]
    fn test_render_topics_indented() {
        let html = render_topics("- one\n- two (2)\n", "Monday");
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(lines[0], r#"<ul class="topics collapsibleList">"#);
        assert_eq!(lines[1], r#"  <li class="topic">"#);
        assert_eq!(lines[2], "    one");
        assert!(html.contains("      (2)\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let topics = "- a (b)\n  - c ((d))\n- Test 3. e\n";
        assert_eq!(render_topics(topics, "Monday"), render_topics(topics, "Monday"));
    }
}
