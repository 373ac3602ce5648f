//! Rental cost calculation.
//!
//! Rentals are charged per calendar day, inclusive of both endpoints: a booking
//! from Monday to Monday is one day. Weekly and monthly tiers round the day
//! count up to whole weeks (7 days) and months (30 days).

use jiff::civil::Date;

use crate::model::{DurationType, PriceTable};

const DAYS_PER_WEEK: u64 = 7;
const DAYS_PER_MONTH: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    #[error("start date {start} is after end date {end}")]
    ReversedRange { start: Date, end: Date },

    #[error("cost of {days} day(s) overflows")]
    Overflow { days: u64 },
}

pub type Result<T> = core::result::Result<T, CostError>;

/// Number of days charged for a rental from `start` to `end`, both inclusive.
pub fn rental_days(start: Date, end: Date) -> Result<u64> {
    if start > end {
        return Err(CostError::ReversedRange { start, end });
    }
    let days = start.until(end).map_or(0, |span| span.get_days());
    // `until` on two ordered dates yields a non-negative day count.
    Ok(u64::try_from(days).unwrap_or(0) + 1)
}

/// Total for renting equipment over a date range at the chosen tier.
///
/// A missing date yields zero rather than an error: the booking form shows a
/// running total before both dates are picked.
pub fn calculate_equipment_cost(
    start: Option<Date>,
    end: Option<Date>,
    duration: DurationType,
    prices: &PriceTable,
) -> Result<u64> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(0);
    };
    let days = rental_days(start, end)?;
    let (units, unit_price) = match duration {
        DurationType::Daily => (days, prices.daily_price),
        DurationType::Weekly => (days.div_ceil(DAYS_PER_WEEK), prices.weekly_price),
        DurationType::Monthly => (days.div_ceil(DAYS_PER_MONTH), prices.monthly_price),
    };
    units
        .checked_mul(unit_price)
        .ok_or(CostError::Overflow { days })
}

/// Total for hiring a labourer over a date range.
pub fn calculate_labour_cost(
    start: Option<Date>,
    end: Option<Date>,
    daily_charge: u64,
) -> Result<u64> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(0);
    };
    let days = rental_days(start, end)?;
    days.checked_mul(daily_charge)
        .ok_or(CostError::Overflow { days })
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    const PRICES: PriceTable = PriceTable {
        daily_price: 500,
        weekly_price: 3000,
        monthly_price: 11000,
    };

    fn cost(start: Date, end: Date, duration: DurationType) -> u64 {
        calculate_equipment_cost(Some(start), Some(end), duration, &PRICES).unwrap()
    }

    #[test]
    fn same_day_is_one_day() {
        let d = date(2025, 1, 1);
        assert_eq!(rental_days(d, d).unwrap(), 1);
        assert_eq!(cost(d, d, DurationType::Daily), 500);
    }

    #[test]
    fn daily_counts_both_endpoints() {
        assert_eq!(cost(date(2025, 1, 1), date(2025, 1, 3), DurationType::Daily), 1500);
    }

    #[test]
    fn weekly_rounds_up_to_whole_weeks() {
        let start = date(2025, 1, 1);
        assert_eq!(cost(start, date(2025, 1, 7), DurationType::Weekly), 3000);
        assert_eq!(cost(start, date(2025, 1, 8), DurationType::Weekly), 6000);
        assert_eq!(cost(start, start, DurationType::Weekly), 3000);
    }

    #[test]
    fn monthly_rounds_up_to_thirty_day_blocks() {
        let start = date(2025, 1, 1);
        assert_eq!(cost(start, date(2025, 1, 30), DurationType::Monthly), 11000);
        assert_eq!(cost(start, date(2025, 1, 31), DurationType::Monthly), 22000);
    }

    #[test]
    fn range_spanning_month_and_leap_day() {
        assert_eq!(rental_days(date(2024, 2, 28), date(2024, 3, 1)).unwrap(), 3);
        assert_eq!(rental_days(date(2024, 12, 31), date(2025, 1, 1)).unwrap(), 2);
    }

    #[test]
    fn missing_date_costs_nothing() {
        let d = date(2025, 1, 1);
        assert_eq!(
            calculate_equipment_cost(None, Some(d), DurationType::Daily, &PRICES).unwrap(),
            0
        );
        assert_eq!(
            calculate_equipment_cost(Some(d), None, DurationType::Monthly, &PRICES).unwrap(),
            0
        );
        assert_eq!(calculate_labour_cost(None, None, 600).unwrap(), 0);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = calculate_equipment_cost(
            Some(date(2025, 1, 3)),
            Some(date(2025, 1, 1)),
            DurationType::Daily,
            &PRICES,
        )
        .unwrap_err();
        assert!(matches!(err, CostError::ReversedRange { .. }));

        let err =
            calculate_labour_cost(Some(date(2025, 1, 3)), Some(date(2025, 1, 1)), 600).unwrap_err();
        assert!(matches!(err, CostError::ReversedRange { .. }));
    }

    #[test]
    fn cost_never_decreases_as_range_widens() {
        let start = date(2025, 1, 1);
        for duration in [DurationType::Daily, DurationType::Weekly, DurationType::Monthly] {
            let mut previous = 0;
            let mut end = start;
            for _ in 0..120 {
                let current = cost(start, end, duration);
                assert!(current >= previous, "{duration:?} dropped at {end}");
                previous = current;
                end = end.tomorrow().unwrap();
            }
        }
    }

    #[test]
    fn labour_cost_is_days_times_charge() {
        let total =
            calculate_labour_cost(Some(date(2025, 3, 10)), Some(date(2025, 3, 12)), 600).unwrap();
        assert_eq!(total, 1800);
    }

    #[test]
    fn overflow_is_reported() {
        let err =
            calculate_labour_cost(Some(date(2025, 1, 1)), Some(date(2025, 1, 2)), u64::MAX)
                .unwrap_err();
        assert_eq!(err, CostError::Overflow { days: 2 });
    }
}
