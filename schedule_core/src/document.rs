//! The complete schedule page.
//!
//! Sessions are laid out row-major, one table row per week of meeting days,
//! between a fixed page header and trailer.

use crate::calendar::weekday_name;
use crate::config::CourseConfig;
use crate::render::render_session;
use crate::{Result, Session, TermConfig};
use chrono::Weekday;

const ROW_START: &str = "\n    <tr>";
const ROW_END: &str = "\n    </tr>";
const ITEM_START: &str = "\n\n      <td>";
const ITEM_END: &str = "\n      </td>";

const GOOGLE_FONT: &str = "http://fonts.googleapis.com/css?family=Open+Sans";

/// Dated sessions of a term, ready to be rendered as one page
#[derive(Debug)]
pub struct ScheduleDocument<'a> {
    sessions: Vec<Session>,
    term: &'a TermConfig,
}

impl<'a> ScheduleDocument<'a> {
    pub fn new(sessions: Vec<Session>, term: &'a TermConfig) -> Self {
        Self { sessions, term }
    }

    /// Render the full HTML page
    pub fn render(&self) -> Result<String> {
        let mut html = header(&self.term.course, &self.term.meeting_days);
        html.push_str(&self.rows()?);
        html.push_str(&trailer(&self.term.course, self.term.days_per_week()));
        Ok(html)
    }

    /// Table rows, `days_per_week` cells per row.
    ///
    /// A final partial week is closed like a full one.
    fn rows(&self) -> Result<String> {
        let width = self.term.days_per_week().max(1);
        let mut html = String::new();

        for (k, session) in self.sessions.iter().enumerate() {
            if k % width == 0 {
                html.push_str(ROW_START);
            }

            html.push_str(ITEM_START);
            html.push_str(&render_session(session, self.term.show_topics)?);
            html.push_str(ITEM_END);

            if k % width == width - 1 {
                html.push_str(ROW_END);
            }
        }

        if self.sessions.len() % width != 0 {
            html.push_str(ROW_END);
        }
        Ok(html)
    }
}

/// One column heading per meeting day
fn day_headings(days: &[Weekday]) -> String {
    days.iter()
        .map(|day| {
            format!(
                "\n      <th class=schedule_caption> {} </th>",
                weekday_name(*day)
            )
        })
        .collect()
}

/// Page head, navigation bar and table header
pub fn header(course: &CourseConfig, days: &[Weekday]) -> String {
    format!(
        r#"<!DOCTYPE HTML>
<html>
<head>
    <meta charset="UTF-8">
    <link rel="stylesheet" type="text/css" href="{GOOGLE_FONT}">
    <link rel="stylesheet" type="text/css" href="styles/style.css">
    <link rel="stylesheet" type="text/css" href="styles/navigation_bar.css">
    <link rel="stylesheet" type="text/css" href="styles/home_page.css">
    <link rel="stylesheet" type="text/css" href="styles/schedule_page.css">

    <title> {number} Home Page </title>
</head>

<body>

<nav>
  <img src="../Images/girls_who_code2_90x60.png" alt="Girls coding together"/>
  <div>
    <p>
      <span class="course_number"> {number}</span>
      <br>
      <span class="course_title">{title}</span>
      <br>
      <span class="course_term">{term_label}</span>
    </p>
  </div>
  <a href="Syllabus_CourseInformation/syllabus.html">SYLLABUS</a>
  <a href="Resources/CSSE120_Setup">SETUP</a>
  <a href="../Resources/Piazza">PIAZZA (Q&A)</a>
  <a href="../Resources/Python">PYTHON</a>
  <a href="../Resources/Graphics">GRAPHICS</a>
  <a href="../Resources/Robotics">ROBOTICS</a>
</nav>

<section class="course_schedule">
<table>
  <caption>What to do, When</caption>
  <thead>
    <tr>{headings}
    </tr>
  </thead>
  <tbody>"#,
        number = course.number,
        title = course.title,
        term_label = course.term_label,
        headings = day_headings(days),
    )
}

/// Final exam footer and closing tags
pub fn trailer(course: &CourseConfig, columns: usize) -> String {
    format!(
        r#"
  </tbody>
  <tfoot>
    <tr>
      <th colspan={columns}>
    {notice}
     </th>
     </tr>
  </tfoot>
</table>
</section>
</body>
</html>"#,
        notice = course.final_exam_notice,
    )
}
