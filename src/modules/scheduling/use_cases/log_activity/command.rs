/// A clock event reported by an employee. `clock_in == false` means clock-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogActivity {
    pub business_code: String,
    pub employee_id: String,
    pub shift_id: String,
    pub clock_in: bool,
}
