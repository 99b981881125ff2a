use itertools::Itertools;
use std::fmt;

use crate::modules::auth::store::User;

/// Median of an integer sample. An odd-sized sample has an exact middle element; an
/// even-sized one reports the mean of the two middle elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Median {
    Exact(i64),
    Midpoint(f64),
}

impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Median::Exact(value) => write!(f, "{}", value),
            Median::Midpoint(value) => write!(f, "{:.1}", value),
        }
    }
}

/// Mean, mode and median of one integer field
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub mode: i64,
    pub median: Median,
}

impl Summary {
    /// Summarize `values`, or `None` for an empty sample
    pub fn of(values: &[i64]) -> Option<Self> {
        Some(Self {
            mean: mean(values)?,
            mode: mode(values)?,
            median: median(values)?,
        })
    }

    /// Mean rounded for display
    pub fn mean_display(&self) -> String {
        format!("{:.2}", self.mean)
    }
}

/// Statistics over ages and daily usage times of all users
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    pub age: Summary,
    pub usage_minutes: Summary,
}

impl UsageReport {
    pub fn from_users(users: &[User]) -> Option<Self> {
        let ages: Vec<i64> = users.iter().map(|u| u.age).collect();
        let usage: Vec<i64> = users.iter().map(|u| u.usage_minutes).collect();
        Some(Self {
            age: Summary::of(&ages)?,
            usage_minutes: Summary::of(&usage)?,
        })
    }
}

pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Most frequent value. Ties go to the value that occurs first in `values`.
pub fn mode(values: &[i64]) -> Option<i64> {
    let counts = values.iter().copied().counts();
    let highest = counts.values().copied().max()?;
    values.iter().copied().find(|v| counts[v] == highest)
}

pub fn median(values: &[i64]) -> Option<Median> {
    if values.is_empty() {
        return None;
    }
    let sorted: Vec<i64> = values.iter().copied().sorted().collect();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(Median::Exact(sorted[mid]))
    } else {
        let total = sorted[mid - 1] as i128 + sorted[mid] as i128;
        Some(Median::Midpoint(total as f64 / 2.0))
    }
}
