//! Derived recurring-payment series and cadence arithmetic.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cadence inferred from the spacing of a counterparty's postings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
    Irregular,
}

impl Frequency {
    /// Advances a date by one cadence step. Month and year steps clamp the
    /// day to the end of a shorter target month (Jan 31 -> Feb 28). Series
    /// kept despite irregular spacing fall back to a 30-day step.
    pub fn advance(self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Weekly => from + Duration::days(7),
            Frequency::Monthly => shift_month(from, 1),
            Frequency::Yearly => shift_year(from, 1),
            Frequency::Irregular => from + Duration::days(30),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
            Frequency::Irregular => "Irregular",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Classifies what a recurring series represents for the account holder.
pub enum RecurringKind {
    Income,
    Bill,
    Subscription,
}

impl fmt::Display for RecurringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecurringKind::Income => "Income",
            RecurringKind::Bill => "Bill",
            RecurringKind::Subscription => "Subscription",
        };
        f.write_str(label)
    }
}

/// A recurring payment series derived from posting history.
///
/// Ephemeral: recomputed on every analysis call, never persisted. The
/// amount is the signed average over the observed postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub merchant_name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub next_expected_date: NaiveDate,
    pub confidence: f64,
    pub kind: RecurringKind,
}

impl RecurringTransaction {
    pub fn is_income(&self) -> bool {
        self.kind == RecurringKind::Income
    }
}

pub(crate) fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

pub(crate) fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}
