//! Render-time context

use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

/// Context handed to accessors and templates while a table is rendered.
///
/// Computed properties read the current time from here instead of the
/// system clock, so a render is reproducible for a fixed context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    now: NaiveDateTime,
}

impl RenderContext {
    /// Creates a context pinned to the given instant.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Creates a context pinned to midnight of the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            now: date.and_time(chrono::NaiveTime::MIN),
        }
    }

    /// Samples the local wall clock once.
    pub fn now() -> Self {
        Self {
            now: Local::now().naive_local(),
        }
    }

    /// The instant this render is happening at.
    pub fn time(&self) -> NaiveDateTime {
        self.now
    }

    /// The date part of [`time`](Self::time).
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}
