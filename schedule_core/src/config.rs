//! Term configuration for the schedule maker.
//!
//! The compiled-in default describes the 201930 term. A TOML file at
//! `$XDG_CONFIG_HOME/schedule-maker/config.toml` (or one given explicitly)
//! overrides any subset of the fields.

use crate::calendar::weekday_name;
use crate::render::evening_exam_notice;
use crate::{Error, Result, ScheduleDate};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything the schedule maker needs to know about a term,
/// except for the learning objectives themselves.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// Term identifier, e.g. `201930`
    pub term: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Days of the week the class meets, in calendar order
    pub meeting_days: Vec<Weekday>,
    pub starting_session_number: u32,
    /// Number of `Session N:` chunks the learning objectives must contain
    pub number_of_sessions: usize,
    /// Render each session's topics list under its title
    pub show_topics: bool,
    /// Meeting dates with no class; the message replaces the session title
    pub dates_to_skip: Vec<ScheduleDate>,
    /// Meeting dates whose test runs in the evening; the message is the notice markup
    pub evening_exams: Vec<ScheduleDate>,
    pub paths: PathsConfig,
    pub course: CourseConfig,
}

/// Input and output locations
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    /// Learning objectives Markdown; derived from the term when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<PathBuf>,

    /// Generated schedule page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_table: Option<PathBuf>,
}

/// Course branding shown in the page header and footer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CourseConfig {
    #[serde(default = "default_course_number")]
    pub number: String,

    #[serde(default = "default_course_title")]
    pub title: String,

    #[serde(default = "default_term_label")]
    pub term_label: String,

    #[serde(default = "default_final_exam_notice")]
    pub final_exam_notice: String,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            number: default_course_number(),
            title: default_course_title(),
            term_label: default_term_label(),
            final_exam_notice: default_final_exam_notice(),
        }
    }
}

// Default value functions
fn default_course_number() -> String {
    "CSSE 120".into()
}

fn default_course_title() -> String {
    "Introduction to Software Development".into()
}

fn default_term_label() -> String {
    "Fall term, 2017-18 (aka 201810)".into()
}

fn default_final_exam_notice() -> String {
    "PROJECT DEMOs and FINAL EXAM during exam week, times TBD.".into()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for TermConfig {
    fn default() -> Self {
        let exam_notice = evening_exam_notice("Thursday", "Thursday");
        Self {
            term: "201930".into(),
            start_date: ymd(2017, 8, 28),
            end_date: ymd(2017, 11, 9),
            meeting_days: vec![Weekday::Mon, Weekday::Wed, Weekday::Thu],
            starting_session_number: 1,
            number_of_sessions: 30,
            show_topics: false,
            dates_to_skip: vec![
                ScheduleDate::new(ymd(2017, 8, 28), "No class"),
                ScheduleDate::new(ymd(2017, 8, 30), "No class"),
                ScheduleDate::new(ymd(2017, 10, 12), "Fall break"),
            ],
            evening_exams: vec![
                ScheduleDate::new(ymd(2017, 9, 14), exam_notice.clone()),
                ScheduleDate::new(ymd(2017, 10, 5), exam_notice),
            ],
            paths: PathsConfig::default(),
            course: CourseConfig::default(),
        }
    }
}

impl TermConfig {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!(
                    "No config file found at {:?}, using built-in term",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::info!("Loaded term {} config from {:?}", config.term, path);
        Ok(config)
    }

    /// Parse a TOML document, filling in defaults and resolving derived fields
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: TermConfig = toml::from_str(contents)?;
        Ok(config.resolved())
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("schedule-maker").join("config.toml"))
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Sort meeting days into calendar order and give message-less
    /// evening exams the standard notice for their weekday.
    fn resolved(mut self) -> Self {
        self.meeting_days.sort_by_key(|day| day.num_days_from_monday());
        self.meeting_days.dedup();

        for exam in &mut self.evening_exams {
            if exam.message.trim().is_empty() {
                let day = weekday_name(exam.date.weekday());
                exam.message = evening_exam_notice(day, day);
            }
        }
        self
    }

    /// Path of the learning objectives file
    pub fn input_path(&self) -> PathBuf {
        self.paths.learning_objectives.clone().unwrap_or_else(|| {
            PathBuf::from("LearningObjectives")
                .join(format!("{}-LearningObjectives.md", self.term))
        })
    }

    /// Path of the generated schedule page
    pub fn output_path(&self) -> PathBuf {
        self.paths
            .schedule_table
            .clone()
            .unwrap_or_else(|| PathBuf::from("index.html"))
    }

    /// Number of meeting days per week, i.e. the width of a table row
    pub fn days_per_week(&self) -> usize {
        self.meeting_days.len()
    }

    pub fn is_meeting_day(&self, date: NaiveDate) -> bool {
        self.meeting_days.contains(&date.weekday())
    }

    pub fn skip_entry(&self, date: NaiveDate) -> Option<&ScheduleDate> {
        self.dates_to_skip.iter().find(|skip| skip.date == date)
    }

    pub fn evening_exam_entry(&self, date: NaiveDate) -> Option<&ScheduleDate> {
        self.evening_exams.iter().find(|exam| exam.date == date)
    }

    /// Reject configurations the pipeline cannot work with.
    ///
    /// Entries that can never take effect are logged as warnings only.
    pub fn validate(&self) -> Result<()> {
        if self.meeting_days.is_empty() {
            return Err(Error::Config("no meeting days configured".into()));
        }

        if self.start_date > self.end_date {
            return Err(Error::Config(format!(
                "term starts ({}) after it ends ({})",
                self.start_date, self.end_date
            )));
        }

        if self.number_of_sessions == 0 {
            return Err(Error::Config("number_of_sessions must be positive".into()));
        }

        let last_number =
            u64::from(self.starting_session_number) + self.number_of_sessions as u64 - 1;
        if last_number > u64::from(u32::MAX) {
            return Err(Error::Config(format!(
                "{} sessions starting at {} run past session number {}",
                self.number_of_sessions,
                self.starting_session_number,
                u32::MAX
            )));
        }

        if self.start_date.weekday() != self.meeting_days[0] {
            tracing::warn!(
                "Term starts on {}, not on {}; table columns will not line up with weekdays",
                weekday_name(self.start_date.weekday()),
                weekday_name(self.meeting_days[0])
            );
        }

        let in_term = |date: NaiveDate| {
            date >= self.start_date && date <= self.end_date && self.is_meeting_day(date)
        };

        for skip in self.dates_to_skip.iter().filter(|s| !in_term(s.date)) {
            tracing::warn!(
                "Skipped date {} ({}) is not a meeting date of the term",
                skip.date,
                skip.message
            );
        }

        for exam in self.evening_exams.iter().filter(|e| !in_term(e.date)) {
            tracing::warn!("Evening exam date {} is not a meeting date of the term", exam.date);
        }

        for exam in &self.evening_exams {
            if self.skip_entry(exam.date).is_some() {
                tracing::warn!(
                    "Evening exam date {} is also a skipped date; the exam is ignored",
                    exam.date
                );
            }
        }

        Ok(())
    }
}
