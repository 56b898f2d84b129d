//! Calendar walk that dates and numbers sessions.
//!
//! Every date of the term is visited in order. Meeting dates either become
//! a no-class placeholder (skipped dates) or are handed to the next pending
//! session together with the next session number.

use crate::{Error, NoClassSession, RegularSession, Result, Session, SessionKind, TermConfig};
use chrono::{NaiveDate, Weekday};

/// Full English name of a weekday, as used in column headings and notices
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// All dates in the term that fall on a meeting weekday, in order
pub fn meeting_dates(term: &TermConfig) -> Vec<NaiveDate> {
    term.start_date
        .iter_days()
        .take_while(|date| *date <= term.end_date)
        .filter(|date| term.is_meeting_day(*date))
        .collect()
}

/// Assign dates and numbers to `sessions`, splicing in no-class days.
///
/// The result holds exactly one session per meeting date. Fails if a meeting
/// date finds no pending session, or if sessions remain undated once the
/// term is over.
pub fn assign_dates(sessions: Vec<RegularSession>, term: &TermConfig) -> Result<Vec<Session>> {
    let mut pending = sessions.into_iter();
    let mut schedule = Vec::with_capacity(pending.len() + term.dates_to_skip.len());
    let mut next_number = Some(term.starting_session_number);
    let mut no_class_days = 0usize;

    for date in meeting_dates(term) {
        if let Some(skip) = term.skip_entry(date) {
            tracing::debug!("{}: {}", date, skip.message);
            schedule.push(Session::NoClass(NoClassSession::from(skip)));
            no_class_days += 1;
            continue;
        }

        let mut session = pending.next().ok_or(Error::NoSessionForDate { date })?;
        let number = next_number.ok_or_else(|| {
            Error::Config(format!("session numbers run past {} on {}", u32::MAX, date))
        })?;
        session.date = Some(date);
        session.number = Some(number);
        next_number = number.checked_add(1);

        if let Some(exam) = term.evening_exam_entry(date) {
            tracing::debug!("Session {:?} on {} is an evening exam", session.number, date);
            session.kind = SessionKind::EveningExam;
            session.exam_message = Some(exam.message.clone());
        }

        schedule.push(Session::Regular(session));
    }

    let unscheduled = pending.len();
    if unscheduled > 0 {
        return Err(Error::UnscheduledSessions {
            unscheduled,
            last_date: term.end_date,
        });
    }

    tracing::info!(
        "Scheduled {} sessions and {} no-class days",
        schedule.len() - no_class_days,
        no_class_days
    );
    Ok(schedule)
}
