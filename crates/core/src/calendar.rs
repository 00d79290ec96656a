//! Month-grid construction and navigation for the task calendar.
//!
//! The grid is a list of weeks, Monday first. Every cell carries a weekday
//! index (0 = Monday) and a day-of-month, where day 0 marks a padding cell
//! belonging to the adjacent month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;

/// One cell of the month grid. `day == 0` is padding outside the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDay {
    pub day: u32,
    /// 0 = Monday .. 6 = Sunday.
    pub weekday: u32,
}

/// A resolved calendar position with its navigation neighbours.
///
/// Navigation values deliberately run over the 1..=12 range: December's
/// `next_month` is 13 and January's `previous_month` is 0, and feeding either
/// back into [`resolve_month`] rolls the year over. This keeps prev/next
/// links a plain `month +/- 1` on the client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    pub previous_year: i32,
    pub previous_month: i32,
    pub next_year: i32,
    pub next_month: i32,
}

/// Normalize a `(year, month)` pair where month may be 0 or 13.
pub fn resolve_month(year: i32, month: i32) -> Result<MonthWindow, CoreError> {
    let (year, month, previous_year, next_year) = match month {
        13 => (year + 1, 1u32, year, year + 1),
        0 => (year - 1, 12u32, year - 1, year),
        1..=12 => (year, month as u32, year, year),
        other => {
            return Err(CoreError::Validation(format!(
                "month must be between 0 and 13, got {other}"
            )))
        }
    };

    Ok(MonthWindow {
        year,
        month,
        previous_year,
        previous_month: month as i32 - 1,
        next_year,
        next_month: month as i32 + 1,
    })
}

/// Build the month grid: full weeks of seven [`GridDay`] cells.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<Vec<GridDay>>, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CoreError::Validation(format!("invalid calendar month {year}-{month}"))
    })?;
    let days = days_in_month(year, month);
    let leading = first.weekday().num_days_from_monday();

    let mut cells: Vec<GridDay> = (0..leading).map(|w| GridDay { day: 0, weekday: w }).collect();
    for day in 1..=days {
        cells.push(GridDay {
            day,
            weekday: (leading + day - 1) % 7,
        });
    }
    while cells.len() % 7 != 0 {
        let weekday = (cells.len() % 7) as u32;
        cells.push(GridDay { day: 0, weekday });
    }

    Ok(cells.chunks(7).map(<[GridDay]>::to_vec).collect())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    // Both dates are valid whenever (year, month) was.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// English month name, 1-based; empty for out-of-range input.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    match month {
        1..=12 => NAMES[month as usize - 1],
        _ => "",
    }
}

/// English month abbreviation, 1-based; empty for out-of-range input.
pub fn month_abbr(month: u32) -> &'static str {
    const ABBRS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    match month {
        1..=12 => ABBRS[month as usize - 1],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_for_february_2024() {
        let weeks = month_grid(2024, 2).expect("valid month");
        assert_eq!(weeks.len(), 5);

        // Feb 1st 2024 is a Thursday: three leading padding cells.
        assert_eq!(
            weeks[0],
            vec![
                GridDay { day: 0, weekday: 0 },
                GridDay { day: 0, weekday: 1 },
                GridDay { day: 0, weekday: 2 },
                GridDay { day: 1, weekday: 3 },
                GridDay { day: 2, weekday: 4 },
                GridDay { day: 3, weekday: 5 },
                GridDay { day: 4, weekday: 6 },
            ]
        );

        // Leap year: the 29th lands on the last week's Thursday.
        let last = weeks.last().unwrap();
        assert_eq!(last[3], GridDay { day: 29, weekday: 3 });
        assert_eq!(last[4], GridDay { day: 0, weekday: 4 });
    }

    #[test]
    fn every_week_has_seven_cells() {
        for month in 1..=12 {
            let weeks = month_grid(2025, month).expect("valid month");
            assert!(weeks.iter().all(|w| w.len() == 7), "month {month}");
            let day_count: u32 = weeks.iter().flatten().filter(|c| c.day > 0).count() as u32;
            assert_eq!(day_count, days_in_month(2025, month), "month {month}");
        }
    }

    #[test]
    fn resolve_month_rolls_december_forward() {
        let w = resolve_month(2024, 13).expect("valid");
        assert_eq!((w.year, w.month), (2025, 1));
        assert_eq!((w.previous_year, w.previous_month), (2024, 0));
        assert_eq!((w.next_year, w.next_month), (2025, 2));
    }

    #[test]
    fn resolve_month_rolls_january_backward() {
        let w = resolve_month(2024, 0).expect("valid");
        assert_eq!((w.year, w.month), (2023, 12));
        assert_eq!((w.previous_year, w.previous_month), (2023, 11));
        assert_eq!((w.next_year, w.next_month), (2024, 13));
    }

    #[test]
    fn resolve_month_keeps_interior_months() {
        let w = resolve_month(2024, 5).expect("valid");
        assert_eq!((w.year, w.month), (2024, 5));
        assert_eq!((w.previous_year, w.previous_month), (2024, 4));
        assert_eq!((w.next_year, w.next_month), (2024, 6));
    }

    #[test]
    fn resolve_month_rejects_out_of_range() {
        assert!(resolve_month(2024, 14).is_err());
        assert!(resolve_month(2024, -1).is_err());
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_abbr(12), "Dec");
    }
}
