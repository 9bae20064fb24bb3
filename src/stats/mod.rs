//! Reusable statistics: grouping, means, trend lines, strength scores and
//! ranking. Everything here is pure and knows nothing about charts.

pub mod aggregate;
pub mod rank;
pub mod regression;
pub mod score;
