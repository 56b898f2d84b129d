//! End-to-end schedule generation.
//!
//! read → strip comments → split into sessions → walk the calendar →
//! render → write

use crate::calendar::assign_dates;
use crate::comments::strip_comments;
use crate::document::ScheduleDocument;
use crate::files::{read_input, write_output};
use crate::splitter::split_into_sessions;
use crate::{Result, Session, TermConfig};
use std::path::Path;

/// Builds the schedule page of one term
#[derive(Clone, Copy, Debug)]
pub struct ScheduleMaker<'a> {
    term: &'a TermConfig,
}

impl<'a> ScheduleMaker<'a> {
    pub fn new(term: &'a TermConfig) -> Self {
        Self { term }
    }

    /// Dated sessions (and no-class days) for the given learning objectives text
    pub fn plan(&self, raw: &str) -> Result<Vec<Session>> {
        self.term.validate()?;
        let cleaned = strip_comments(raw);
        let sessions = split_into_sessions(&cleaned, self.term.number_of_sessions)?;
        assign_dates(sessions, self.term)
    }

    /// Full HTML page for the given learning objectives text
    pub fn render(&self, raw: &str) -> Result<String> {
        let sessions = self.plan(raw)?;
        ScheduleDocument::new(sessions, self.term).render()
    }

    /// Read the learning objectives file and plan its sessions
    pub fn plan_file(&self, input: &Path) -> Result<Vec<Session>> {
        self.plan(&read_input(input)?)
    }

    /// Read `input`, render the schedule and write it to `output`.
    ///
    /// Nothing is written if any step fails.
    pub fn make_schedule(&self, input: &Path, output: &Path) -> Result<()> {
        tracing::info!("Making schedule for term {} from {:?}", self.term.term, input);
        let html = self.render(&read_input(input)?)?;
        write_output(output, &html)
    }
}
