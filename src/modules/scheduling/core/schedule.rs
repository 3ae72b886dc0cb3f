use crate::modules::scheduling::core::shift::Shift;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One schedule document per business and calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub business_code: String,
    pub year: i32,
    pub month: u32,
    pub shifts: Vec<Shift>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPeriod {
    #[error("month must be between 1 and 12, got {0}")]
    Month(u32),

    #[error("year must be between 1970 and 9999, got {0}")]
    Year(i32),
}

impl Schedule {
    pub fn new(
        id: impl Into<String>,
        business_code: impl Into<String>,
        year: i32,
        month: u32,
        created_by: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, InvalidPeriod> {
        validate_period(year, month)?;
        Ok(Self {
            id: id.into(),
            business_code: business_code.into(),
            year,
            month,
            shifts: Vec::new(),
            created_at,
            created_by: created_by.into(),
        })
    }

    pub fn is_period(&self, business_code: &str, year: i32, month: u32) -> bool {
        self.business_code == business_code && self.year == year && self.month == month
    }

    pub fn shift(&self, shift_id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|shift| shift.id == shift_id)
    }

    pub fn shift_mut(&mut self, shift_id: &str) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|shift| shift.id == shift_id)
    }
}

pub fn validate_period(year: i32, month: u32) -> Result<(), InvalidPeriod> {
    if !(1..=12).contains(&month) {
        return Err(InvalidPeriod::Month(month));
    }
    if !(1970..=9999).contains(&year) {
        return Err(InvalidPeriod::Year(year));
    }
    Ok(())
}
