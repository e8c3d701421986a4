//! bucket.rs — calendar bucket mapping for daily bars
//!
//! - One stable epoch: 1970-01-01.
//! - Day: one bucket per calendar date.
//! - Week: Monday-aligned using a week anchor of 1969-12-29. A Sunday belongs
//!   to the week that started the Monday before it (weekday index 6).
//! - Month: linear (year, month) indexing relative to 1970-01.
//!
//! Ids are signed so dates before the epoch bucket the same way as later ones.

use chrono::{Datelike, NaiveDate};

use crate::models::period::Period;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Number of days in a week.
pub const DAYS_PER_WEEK: i64 = 7;

/// shift so Monday 1969-12-29 becomes week index 0
const WEEK_MONDAY_ANCHOR_OFFSET_DAYS: i64 = 3; // 1970-01-01 was a Thursday

/// Compute the bucket id for a date.
pub fn bucket_id(date: NaiveDate, period: Period) -> i64 {
    match period {
        Period::Daily => days_since_epoch(date),
        Period::Weekly => id_week(date),
        Period::Monthly => id_month(date),
    }
}

/// First date of the bucket with this id.
///
/// `None` when the date falls outside chrono's representable range.
pub fn bucket_start(id: i64, period: Period) -> Option<NaiveDate> {
    match period {
        Period::Daily => date_from_epoch_days(id),
        Period::Weekly => start_week(id),
        Period::Monthly => start_month(id),
    }
}

/// Exclusive end of the bucket, i.e. the start of the next one.
pub fn bucket_end_exclusive(id: i64, period: Period) -> Option<NaiveDate> {
    bucket_start(id.checked_add(1)?, period)
}

/// Canonical key of the bucket containing `date`: the date itself, the
/// Monday of its week, or the first of its month.
pub fn bucket_key(date: NaiveDate, period: Period) -> Option<NaiveDate> {
    bucket_start(bucket_id(date, period), period)
}

// ----- day internals -----

fn days_since_epoch(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - EPOCH_DAYS_FROM_CE
}

fn date_from_epoch_days(days: i64) -> Option<NaiveDate> {
    let from_ce = i32::try_from(days.checked_add(EPOCH_DAYS_FROM_CE)?).ok()?;
    NaiveDate::from_num_days_from_ce_opt(from_ce)
}

// ----- week internals (Monday-aligned) -----

fn id_week(date: NaiveDate) -> i64 {
    (days_since_epoch(date) + WEEK_MONDAY_ANCHOR_OFFSET_DAYS).div_euclid(DAYS_PER_WEEK)
}

fn start_week(id: i64) -> Option<NaiveDate> {
    // days since the Monday anchor, then back to epoch days
    let since_anchor = id.checked_mul(DAYS_PER_WEEK)?;
    date_from_epoch_days(since_anchor.checked_sub(WEEK_MONDAY_ANCHOR_OFFSET_DAYS)?)
}

// ----- month internals (calendar-aware) -----

fn id_month(date: NaiveDate) -> i64 {
    let y = date.year() as i64;
    let m = date.month() as i64; // 1..=12
    (y - 1970) * 12 + (m - 1)
}

fn start_month(id: i64) -> Option<NaiveDate> {
    let y = i32::try_from(1970 + id.div_euclid(12)).ok()?;
    let month = (id.rem_euclid(12) + 1) as u32; // 1..=12
    NaiveDate::from_ymd_opt(y, month, 1)
}
