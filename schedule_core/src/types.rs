//! Core domain types for the schedule maker.
//!
//! This module defines the fundamental types used throughout the pipeline:
//! - Dated configuration entries (skipped days, evening exams)
//! - Session kinds
//! - Regular and no-class sessions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration Entries
// ============================================================================

/// A calendar date paired with a message.
///
/// Used both for skipped days (the message replaces the session title) and
/// for evening exams (the message is the exam notice markup).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleDate {
    pub date: NaiveDate,
    #[serde(default)]
    pub message: String,
}

impl ScheduleDate {
    pub fn new(date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            date,
            message: message.into(),
        }
    }
}

// ============================================================================
// Session Types
// ============================================================================

/// What kind of meeting a session is
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Regular,
    NoClass,
    EveningExam,
    InClassExam,
    Project,
}

/// A class meeting built from one learning objective chunk.
///
/// `date` and `number` stay `None` until the calendar walker assigns them.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RegularSession {
    pub date: Option<NaiveDate>,
    pub number: Option<u32>,
    pub title: String,
    pub topics: String,
    pub kind: SessionKind,
    pub exam_message: Option<String>,
}

impl RegularSession {
    /// Create an undated session, classifying it from its topics
    pub fn new(title: impl Into<String>, topics: impl Into<String>) -> Self {
        let topics = topics.into();
        let kind = crate::topics::classify(&topics);
        Self {
            date: None,
            number: None,
            title: title.into(),
            topics,
            kind,
            exam_message: None,
        }
    }
}

/// A meeting date on which class does not meet (holiday, break)
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NoClassSession {
    pub date: NaiveDate,
    pub title: String,
}

impl From<&ScheduleDate> for NoClassSession {
    fn from(skip: &ScheduleDate) -> Self {
        Self {
            date: skip.date,
            title: skip.message.clone(),
        }
    }
}

/// One slot in the schedule table
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Session {
    Regular(RegularSession),
    NoClass(NoClassSession),
}

impl Session {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Session::Regular(session) => session.date,
            Session::NoClass(session) => Some(session.date),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Session::Regular(session) => &session.title,
            Session::NoClass(session) => &session.title,
        }
    }

    pub fn kind(&self) -> SessionKind {
        match self {
            Session::Regular(session) => session.kind,
            Session::NoClass(_) => SessionKind::NoClass,
        }
    }

    /// Session number, absent for no-class days
    pub fn number(&self) -> Option<u32> {
        match self {
            Session::Regular(session) => session.number,
            Session::NoClass(_) => None,
        }
    }

    /// Check if this is a regular session (returns None for NoClass)
    pub fn as_regular(&self) -> Option<&RegularSession> {
        match self {
            Session::Regular(session) => Some(session),
            Session::NoClass(_) => None,
        }
    }
}
