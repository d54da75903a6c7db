//! Aggregate statistics over the order collection.

use std::fmt;

use crate::domain::{Order, OrderStatus};

/// Snapshot statistics over a non-empty set of orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport {
    pub order_count: usize,
    pub total_sales: f64,
    pub average_total: f64,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub max_total: f64,
    pub min_total: f64,
}

impl OrderReport {
    /// Returns `None` for an empty slice; no arithmetic is attempted in that case.
    ///
    /// Orders whose status is not one of the three known states count toward
    /// the totals but toward none of the status buckets.
    pub fn from_orders(orders: &[Order]) -> Option<Self> {
        if orders.is_empty() {
            return None;
        }

        let mut report = Self {
            order_count: orders.len(),
            total_sales: 0.0,
            average_total: 0.0,
            pending: 0,
            confirmed: 0,
            cancelled: 0,
            max_total: f64::NEG_INFINITY,
            min_total: f64::INFINITY,
        };

        for order in orders {
            let total = order.total();
            report.total_sales += total;
            report.max_total = report.max_total.max(total);
            report.min_total = report.min_total.min(total);
            match order.status() {
                OrderStatus::Pending => report.pending += 1,
                OrderStatus::Confirmed => report.confirmed += 1,
                OrderStatus::Cancelled => report.cancelled += 1,
                OrderStatus::Other(_) => {}
            }
        }
        report.average_total = report.total_sales / report.order_count as f64;

        Some(report)
    }
}

impl fmt::Display for OrderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ORDER REPORT ===")?;
        writeln!(f)?;
        writeln!(f, "General statistics:")?;
        writeln!(f, "- Total orders: {}", self.order_count)?;
        writeln!(f, "- Total sales: ${:.2}", self.total_sales)?;
        writeln!(f, "- Average per order: ${:.2}", self.average_total)?;
        writeln!(f)?;
        writeln!(f, "Order status:")?;
        writeln!(f, "- Pending: {}", self.pending)?;
        writeln!(f, "- Confirmed: {}", self.confirmed)?;
        writeln!(f, "- Cancelled: {}", self.cancelled)?;
        writeln!(f)?;
        writeln!(f, "Highest order value: ${:.2}", self.max_total)?;
        write!(f, "Lowest order value: ${:.2}", self.min_total)
    }
}
