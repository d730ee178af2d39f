//! The small arithmetic these documents actually do: column totals and
//! elapsed time between two clock fields.

use chrono::NaiveTime;

use crate::error::FormError;
use crate::record::FormRecord;

/// Sum the numerically-parseable cells of one fixed column. Blank and
/// non-numeric cells contribute nothing; validation reports them separately.
pub fn column_sum(record: &FormRecord, table_key: &str, column: &str) -> Result<f64, FormError> {
    let rows = record.rows(table_key)?;
    Ok(rows
        .iter()
        .filter_map(|row| row.cell(column).trim().parse::<f64>().ok())
        .sum())
}

/// Fractional hours between two HH:MM clock values, wrapping past midnight
/// (22:00 to 06:00 is eight hours). `None` when either value fails to parse.
pub fn elapsed_hours(start: &str, end: &str) -> Option<f64> {
    let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?;
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    Some(minutes as f64 / 60.0)
}
