//! Points Calculator
//!
//! Every rule is scored on its own and added to a running total.
//!
//! Malformed fields never fail the calculation. They fall back to zero
//! values instead:
//! - `total` / item `price`: 0.0
//! - `purchaseDate`: 0001-01-01 (day 1, which is odd)
//! - `purchaseTime`: 00:00
//!
//! Rules 2 and 3 compare floats for exact equality with no tolerance.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use receipt_db::entity::Receipt;

/// Day of month of the zero date used when `purchaseDate` does not parse
const ZERO_DATE_DAY: u32 = 1;

/// Hour of the zero time used when `purchaseTime` does not parse
const ZERO_TIME_HOUR: u32 = 0;

/// Result of a points calculation
#[derive(Debug, Clone)]
pub struct PointsResult {
    /// Sum of all rule points
    pub total: i64,
    /// One entry per rule, in rule order
    pub breakdown: Vec<RuleBreakdown>,
}

/// Points awarded by a single rule
#[derive(Debug, Clone)]
pub struct RuleBreakdown {
    pub name: String,
    pub points: i64,
    pub reason: String,
}

/// Points calculator
pub struct PointsCalculator;

impl PointsCalculator {
    /// Calculate points for a receipt, with a per-rule breakdown
    pub fn calculate(receipt: &Receipt) -> PointsResult {
        let total = parse_amount(&receipt.total);

        let rules = [
            ("Retailer", Self::retailer_points(&receipt.retailer)),
            ("Round Total", Self::round_total_points(total, &receipt.total)),
            ("Quarter Total", Self::quarter_total_points(total, &receipt.total)),
            ("Item Pairs", Self::item_pair_points(receipt.items.len())),
            ("Descriptions", Self::description_points(receipt)),
            ("Purchase Day", Self::purchase_day_points(&receipt.purchase_date)),
            ("Purchase Time", Self::purchase_time_points(&receipt.purchase_time)),
        ];

        let breakdown: Vec<RuleBreakdown> = rules
            .into_iter()
            .map(|(name, (points, reason))| RuleBreakdown {
                name: name.to_string(),
                points,
                reason,
            })
            .collect();

        PointsResult {
            total: breakdown.iter().map(|rule| rule.points).sum(),
            breakdown,
        }
    }

    /// Rule 1: one point per ASCII letter or digit in the retailer name
    fn retailer_points(retailer: &str) -> (i64, String) {
        let count = retailer.chars().filter(char::is_ascii_alphanumeric).count() as i64;
        (count, format!("{} alphanumeric characters in retailer name", count))
    }

    /// Rule 2: 50 points if the total has no fractional part
    fn round_total_points(total: Option<f64>, raw: &str) -> (i64, String) {
        let value = total.unwrap_or(0.0);
        if value == value.trunc() {
            (50, describe_amount(total, raw, "is a round dollar amount"))
        } else {
            (0, describe_amount(total, raw, "has cents"))
        }
    }

    /// Rule 3: 25 points if the total is a multiple of 0.25
    fn quarter_total_points(total: Option<f64>, raw: &str) -> (i64, String) {
        let value = total.unwrap_or(0.0);
        if value % 0.25 == 0.0 {
            (25, describe_amount(total, raw, "is a multiple of 0.25"))
        } else {
            (0, describe_amount(total, raw, "is not a multiple of 0.25"))
        }
    }

    /// Rule 4: 5 points for every two items
    fn item_pair_points(item_count: usize) -> (i64, String) {
        let pairs = (item_count / 2) as i64;
        (pairs * 5, format!("{} item pairs", pairs))
    }

    /// Rule 5: price bonus for items whose trimmed description length is a multiple of 3
    fn description_points(receipt: &Receipt) -> (i64, String) {
        let mut points = 0;
        let mut matched = 0;

        for item in &receipt.items {
            // Character count, so multi-byte descriptions are measured as written
            if item.short_description.trim().chars().count() % 3 == 0 {
                let price = parse_amount(&item.price).unwrap_or(0.0);
                points += (price * 0.2).ceil() as i64;
                matched += 1;
            }
        }

        (
            points,
            format!("{} of {} item descriptions have a length divisible by 3", matched, receipt.items.len()),
        )
    }

    /// Rule 6: 6 points if the purchase day is odd
    fn purchase_day_points(purchase_date: &str) -> (i64, String) {
        let (day, note) = match parse_purchase_date(purchase_date) {
            Some(date) => (date.day(), ""),
            None => (ZERO_DATE_DAY, " (unparseable date)"),
        };

        if day % 2 != 0 {
            (6, format!("Purchase day {} is odd{}", day, note))
        } else {
            (0, format!("Purchase day {} is even{}", day, note))
        }
    }

    /// Rule 7: 10 points for purchases from 2:00pm up to, not including, 4:00pm
    fn purchase_time_points(purchase_time: &str) -> (i64, String) {
        let (hour, note) = match parse_purchase_time(purchase_time) {
            Some(time) => (time.hour(), ""),
            None => (ZERO_TIME_HOUR, " (unparseable time)"),
        };

        match hour {
            14..=15 => (10, format!("Purchased in the 2pm-4pm window at hour {}{}", hour, note)),
            _ => (0, format!("Purchased outside the 2pm-4pm window at hour {}{}", hour, note)),
        }
    }
}

/// Compute the points total for a receipt
pub fn compute_points(receipt: &Receipt) -> i64 {
    PointsCalculator::calculate(receipt).total
}

/// Parse a decimal string, `None` when it is not a number.
///
/// Out-of-range values parse to +/- infinity.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone would also take single-digit fields, short years and
/// leading whitespace, so the shape is checked first.
fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    if !matches_shape(raw, "dddd-dd-dd") {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse `H:MM` or `HH:MM`; the minute always has two digits.
fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    if !matches_shape(raw, "d:dd") && !matches_shape(raw, "dd:dd") {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

/// `d` in `shape` stands for one ASCII digit, any other byte must match exactly
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'd' => v.is_ascii_digit(),
            _ => v == s,
        })
}

fn describe_amount(parsed: Option<f64>, raw: &str, outcome: &str) -> String {
    match parsed {
        Some(_) => format!("Total {} {}", raw, outcome),
        None => format!("Total {:?} is not a number, scored as 0.00 which {}", raw, outcome),
    }
}
