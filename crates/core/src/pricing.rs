//! Money arithmetic for tasks, estimate items, and project totals.
//!
//! All money values are [`Decimal`] and rounded to two places, matching the
//! `NUMERIC(10,2)` columns they are persisted into. Rounding is half-away-
//! from-zero, the same behaviour PostgreSQL applies when a value is stored.

use rust_decimal::{Decimal, RoundingStrategy};

/// Scale of every money column (`NUMERIC(10,2)`).
pub const MONEY_SCALE: u32 = 2;

/// Round a raw decimal to money scale.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Total for a task: `job price * quantity * coefficient`.
///
/// Recomputed on every save. The task's fixed-price flag and price override
/// column do not participate; they are carried in the schema only.
pub fn task_total(job_price: Decimal, quantity: i32, coefficient: Decimal) -> Decimal {
    round_money(job_price * Decimal::from(quantity) * coefficient)
}

/// Total for an estimate line item: `quantity * price`.
pub fn item_total(quantity: i32, price: Decimal) -> Decimal {
    round_money(Decimal::from(quantity) * price)
}

/// Grand total for a project: its own price plus the item and task sums.
///
/// A project with no items or no tasks has no aggregate for that component;
/// missing sums count as zero.
pub fn project_total(
    price: Decimal,
    items_total: Option<Decimal>,
    tasks_total: Option<Decimal>,
) -> Decimal {
    round_money(price + items_total.unwrap_or_default() + tasks_total.unwrap_or_default())
}
