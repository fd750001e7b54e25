//! Court time and clocks
//!
//! Case data records every lifecycle timestamp as a court-local date-time
//! (no offset). Anything that compares those timestamps against "now" must
//! obtain "now" through a [`Clock`] so that evaluation stays reproducible:
//! production code uses [`SystemClock`], tests use [`FixedClock`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for court jurisdictions
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Courts of England and Wales
    pub fn court() -> Self {
        Self(chrono_tz::Europe::London)
    }

    /// Converts a UTC instant to a court-local date-time
    pub fn to_local(&self, utc: DateTime<Utc>) -> NaiveDateTime {
        utc.with_timezone(&self.0).naive_local()
    }

    /// Calendar date of a UTC instant in this timezone
    pub fn local_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_local(utc).date()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::court()
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date-time '{0}', expected ISO-8601 (YYYY-MM-DDTHH:MM:SS)")]
    InvalidDateTime(String),
}

/// Source of "now" for time-sensitive case rules
///
/// Implementations must be cheap and side-effect free; an evaluation reads
/// the clock once and uses that instant for every rule.
pub trait Clock: Send + Sync {
    /// Current court-local date-time
    fn now(&self) -> NaiveDateTime;

    /// Current court-local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Real clock, reading system time in the court timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        self.timezone.to_local(Utc::now())
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Parses an ISO-8601 local date-time such as `2024-03-01T10:00:00`
    pub fn parse(value: &str) -> Result<Self, TemporalError> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .map(Self)
            .map_err(|_| TemporalError::InvalidDateTime(value.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
