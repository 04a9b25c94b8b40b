//! List filters and their resolution into store queries
//!
//! [`PolicyFilter`] is what callers supply: an optional raw status string and
//! optional date-range bounds. [`PolicyQuery`] is what the store consumes:
//! a typed status and a well-formed half-open timestamp range. Resolution is
//! deliberately lenient; for valid optional inputs it never fails.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::policy::Policy;
use crate::status::PolicyStatus;

/// Caller-supplied list filter; every field is optional and independent
#[derive(Debug, Clone, Default)]
pub struct PolicyFilter {
    /// Raw status tag; unrecognized values are ignored, not rejected
    pub status: Option<String>,
    /// Lower issue-date bound (inclusive day)
    pub from: Option<NaiveDate>,
    /// Upper issue-date bound (inclusive day)
    pub to: Option<NaiveDate>,
}

impl PolicyFilter {
    /// Filter by status tag only
    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    /// Filter by an issue-date window only
    pub fn issued_between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Default::default()
        }
    }

    /// Resolves the raw filter into a typed store query.
    ///
    /// - A status that is not one of the three lifecycle tags (compared
    ///   case-insensitively) is dropped, as if no status filter were given.
    /// - The date filter applies only when both bounds are present; a lone
    ///   `from` or `to` applies no date filter at all (partial ranges are
    ///   intentionally unsupported, not an open-ended range).
    /// - Inverted bounds are swapped, so the range is always well-formed.
    pub fn resolve(&self) -> PolicyQuery {
        let status = self
            .status
            .as_deref()
            .and_then(PolicyStatus::parse_filter_tag);

        let issued = match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateRange::spanning_days(from, to)),
            _ => None,
        };

        PolicyQuery { status, issued }
    }
}

/// Half-open UTC timestamp range covering whole days
///
/// Built from inclusive date bounds: `start` is midnight on the first day
/// and `end` is midnight after the last day, so a policy issued at any time
/// on either endpoint day matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Builds the range covering `[a, b]` as whole days, swapping the bounds
    /// when they arrive inverted.
    pub fn spanning_days(a: NaiveDate, b: NaiveDate) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let start = lo.and_time(NaiveTime::MIN).and_utc();
        let end = hi
            .checked_add_days(Days::new(1))
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { start, end }
    }

    /// Whether the instant falls inside the range
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Typed query consumed by the store; results are always ordered by
/// `issue_date` descending regardless of which filters are set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyQuery {
    pub status: Option<PolicyStatus>,
    pub issued: Option<DateRange>,
}

impl PolicyQuery {
    /// Predicate form of the query, used by in-memory evaluation
    pub fn matches(&self, policy: &Policy) -> bool {
        if let Some(status) = self.status {
            if policy.status != status {
                return false;
            }
        }
        if let Some(range) = self.issued {
            if !range.contains(policy.issue_date) {
                return false;
            }
        }
        true
    }
}
