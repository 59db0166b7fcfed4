//! Reports module for Outlay
//!
//! The two aggregates every query carries: spending per category and the
//! month-by-month trend.

pub mod category;
pub mod monthly;

pub use category::{CategoryBreakdown, CategoryTotal};
pub use monthly::{MonthlyTotal, MonthlyTrend};
