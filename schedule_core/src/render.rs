//! HTML fragments for individual sessions.
//!
//! Each builder takes exactly the fields its fragment shows and returns the
//! fragment as a string.

use crate::calendar::weekday_name;
use crate::{Error, NoClassSession, RegularSession, Result, Session, SessionKind};
use chrono::{Datelike, NaiveDate};
use pulldown_cmark::{html, Options, Parser};

/// Month name and day of month, e.g. `August 28`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// Link to the preparation page of a session
pub fn preparation_link(number: u32) -> String {
    format!(r#"<a href="Sessions/Session{:02}/index.html">Preparation</a>"#, number)
}

/// Convert GitHub-flavored Markdown to HTML
pub fn markdown(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, Parser::new_ext(text, options));
    out
}

/// Session title as HTML; each `/` starts a new line
pub fn session_title(title: &str) -> String {
    markdown(&title.replace('/', "<br>\n")).trim_end().to_string()
}

/// Notice shown on a session whose test is held in the evening
pub fn evening_exam_notice(regular_day: &str, exam_day: &str) -> String {
    format!(
        r#"
      <div class=evening_exam>
        <p>
          The regular in-class session on {regular_day}
          is an OPTIONAL review session.
          The test itself is
            <span class=exam_date_time>
              {exam_day}
              evening from 7:30 p.m. to 9:30 p.m.
              (with an additional 30-minute grace period)
            </span>
            <span class=exam_rooms> in rooms TBA.</span>
        </p>
      </div>
      "#
    )
}

/// Identifier and title block of a dated session
pub fn session_header(number: u32, date: NaiveDate, title: &str) -> String {
    format!(
        r#"
        <div class=session_identifier>
          <span class="session_preparation">{link}</span>
          <span class="for_session">for session</span>
          <span class="session_number">{number}</span>
          <span class="session_date">({date})</span>
        </div>
        <div class="session_title"> {title} </div>
        "#,
        link = preparation_link(number),
        date = format_date(date),
        title = session_title(title),
    )
}

/// Wrapper around a session's rendered topics list
pub fn session_topics(topics_html: &str) -> String {
    format!(
        r#"
        <div class=session_topics>{topics_html}
        </div>"#
    )
}

/// Placeholder block for a day without class
pub fn no_class_session(title: &str, date: NaiveDate) -> String {
    format!(
        r#"
        <div class="no_class_title">{title}</div>
        <div class="session_date">{date}</div>"#,
        date = format_date(date),
    )
}

/// Render a dated regular session.
///
/// Evening exams get their notice appended; topics are included only when
/// `show_topics` is set and the session has any.
pub fn regular_session(session: &RegularSession, show_topics: bool) -> Result<String> {
    let (Some(date), Some(number)) = (session.date, session.number) else {
        return Err(Error::Render(format!(
            "session {:?} has no date or number",
            session.title
        )));
    };

    let mut html = session_header(number, date, &session.title);

    if session.kind == SessionKind::EveningExam {
        if let Some(ref message) = session.exam_message {
            html.push_str(message);
        }
    }

    if show_topics && !session.topics.trim().is_empty() {
        let day = weekday_name(date.weekday());
        let topics_html = crate::topics::render_topics(&session.topics, day);
        html.push_str(&session_topics(&topics_html));
    }

    Ok(html)
}

/// Render any session
pub fn render_session(session: &Session, show_topics: bool) -> Result<String> {
    match session {
        Session::Regular(regular) => regular_session(regular, show_topics),
        Session::NoClass(NoClassSession { date, title }) => Ok(no_class_session(title, *date)),
    }
}
