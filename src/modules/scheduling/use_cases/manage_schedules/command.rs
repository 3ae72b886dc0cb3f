#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSchedule {
    pub business_code: String,
    pub year: i32,
    pub month: u32,
    pub created_by: String,
}
