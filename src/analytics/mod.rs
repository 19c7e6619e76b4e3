//! Client-side analytics over fetched expense records
//!
//! Everything here is a pure function of the expense slice and an evaluation
//! instant: summaries hold no state of their own and are recomputed from
//! scratch whenever the source records are refetched.

pub mod amount;

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::expenses::Expense;

/// Category label for records without a category
pub const UNCATEGORIZED: &str = "uncategorized";

/// Number of trailing records in the dashboard trend series
pub const TREND_WINDOW: usize = 10;

/// Number of trailing records in the dashboard recent list
pub const RECENT_LIMIT: usize = 5;

/// Summary statistics derived from a sequence of expenses
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseSummary {
    /// Sum of all normalized amounts
    pub total: f64,

    /// Sum restricted to the evaluation instant's calendar month
    pub month_total: f64,

    /// Record count restricted to the evaluation instant's calendar month
    pub month_count: usize,

    /// Summed amount per category label
    pub category_totals: HashMap<String, f64>,

    /// Trailing-window series for time-series display, arrival order
    pub trend: Vec<TrendPoint>,
}

/// One point of the dashboard trend series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Formatted calendar date of the record
    pub label: String,

    /// Normalized amount
    pub value: f64,
}

impl ExpenseSummary {
    /// Chart segments from the category totals.
    ///
    /// Categories whose total is exactly zero are omitted so charts never
    /// render empty segments. Labels are sorted, with the uncategorized
    /// sentinel last.
    pub fn category_series(&self) -> Vec<(String, f64)> {
        let mut series: Vec<(String, f64)> = self
            .category_totals
            .iter()
            .filter(|(_, total)| **total != 0.0)
            .map(|(label, total)| (label.clone(), *total))
            .collect();

        series.sort_by(|a, b| {
            let a_sentinel = a.0 == UNCATEGORIZED;
            let b_sentinel = b.0 == UNCATEGORIZED;
            a_sentinel.cmp(&b_sentinel).then_with(|| a.0.cmp(&b.0))
        });

        series
    }
}

/// Summarize expenses against the current instant
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    summarize_at(expenses, Utc::now())
}

/// Summarize expenses against an explicit evaluation instant.
///
/// Records with a missing or unparsable date are excluded from the
/// calendar-month figures but still count toward the all-time total.
pub fn summarize_at(expenses: &[Expense], now: DateTime<Utc>) -> ExpenseSummary {
    let mut summary = ExpenseSummary::default();

    for expense in expenses {
        let value = amount::finite_or_zero(expense.amount);
        summary.total += value;

        let label = match expense.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category.to_string(),
            _ => UNCATEGORIZED.to_string(),
        };
        *summary.category_totals.entry(label).or_insert(0.0) += value;

        if let Some(date) = expense.date.as_deref().and_then(parse_calendar_date) {
            if date.year() == now.year() && date.month() == now.month() {
                summary.month_total += value;
                summary.month_count += 1;
            }
        }
    }

    summary.trend = trailing(expenses, TREND_WINDOW)
        .iter()
        .map(|expense| TrendPoint {
            label: trend_label(expense),
            value: amount::finite_or_zero(expense.amount),
        })
        .collect();

    summary
}

/// The last `window` records in arrival order; all of them when fewer exist
pub fn trailing(expenses: &[Expense], window: usize) -> &[Expense] {
    let start = expenses.len().saturating_sub(window);
    &expenses[start..]
}

/// Parse an ISO-8601 date string into a calendar date.
///
/// Accepts full RFC 3339 timestamps and plain `YYYY-MM-DD` dates, the two
/// shapes the backend's seed data actually contains.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn trend_label(expense: &Expense) -> String {
    expense
        .date
        .as_deref()
        .and_then(parse_calendar_date)
        .or_else(|| parse_calendar_date(&expense.created_at))
        .map(|date| date.format("%b %d").to_string())
        .unwrap_or_else(|| "n/a".to_string())
}
