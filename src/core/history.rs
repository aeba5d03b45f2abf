use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::BrowsingEvent;

/// Default trailing window for "recent" history
pub const DEFAULT_HISTORY_WINDOW_DAYS: u32 = 7;

/// Browsing history events that fall inside the window, indexed by college id
///
/// Built once per call so per-college lookups do not rescan the whole
/// history. Events older than `now - window` and events without a college
/// id are dropped at construction.
#[derive(Debug, Default)]
pub struct RecentActivity<'a> {
    by_college: HashMap<&'a str, Vec<&'a BrowsingEvent>>,
    has_history: bool,
}

impl<'a> RecentActivity<'a> {
    pub fn collect(
        history: Option<&'a [BrowsingEvent]>,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Self {
        let history = match history {
            Some(events) if !events.is_empty() => events,
            _ => return Self::default(),
        };

        let cutoff_ms = now.timestamp_millis() - window.num_milliseconds();
        let mut by_college: HashMap<&'a str, Vec<&'a BrowsingEvent>> = HashMap::new();

        for event in history {
            if event.timestamp < cutoff_ms {
                continue;
            }

            match event.college_id.as_deref() {
                Some(college_id) if !college_id.is_empty() => {
                    by_college.entry(college_id).or_default().push(event);
                }
                _ => {}
            }
        }

        Self {
            by_college,
            has_history: true,
        }
    }

    /// False when no history was supplied at all (absent or empty)
    pub fn has_history(&self) -> bool {
        self.has_history
    }

    /// Recent events for a college, in input order
    pub fn events_for(&self, college_id: &str) -> &[&'a BrowsingEvent] {
        self.by_college
            .get(college_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of recent interactions of any kind with a college
    pub fn interactions(&self, college_id: &str) -> usize {
        self.events_for(college_id).len()
    }

    /// Number of colleges with at least one recent interaction
    pub fn active_colleges(&self) -> usize {
        self.by_college.len()
    }
}
