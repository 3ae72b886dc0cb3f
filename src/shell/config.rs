use std::net::SocketAddr;
use std::str::FromStr;

use crate::modules::scheduling::core::clock_window::DEFAULT_TOLERANCE_MINUTES;

pub const BIND_ADDR_VAR: &str = "SCHEDULING_BIND_ADDR";
pub const CLOCK_WINDOW_VAR: &str = "SCHEDULING_CLOCK_WINDOW_MINUTES";
pub const EMPLOYEES_VAR: &str = "SCHEDULING_EMPLOYEES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid value: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("SCHEDULING_EMPLOYEES entry must look like id=Name: {0}")]
    EmployeeEntry(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub clock_window_minutes: i64,
    pub employees: Vec<(String, String)>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = parse(BIND_ADDR_VAR, &bind_addr)?;

        let clock_window_minutes = match lookup(CLOCK_WINDOW_VAR) {
            Some(raw) => parse::<u32>(CLOCK_WINDOW_VAR, &raw)?.into(),
            None => DEFAULT_TOLERANCE_MINUTES,
        };

        let employees = match lookup(EMPLOYEES_VAR) {
            Some(raw) => parse_employees(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            bind_addr,
            clock_window_minutes,
            employees,
        })
    }
}

fn parse<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}

fn parse_employees(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (id, name) = entry
                .split_once('=')
                .map(|(id, name)| (id.trim(), name.trim()))
                .filter(|(id, name)| !id.is_empty() && !name.is_empty())
                .ok_or_else(|| ConfigError::EmployeeEntry(entry.to_string()))?;
            Ok((id.to_string(), name.to_string()))
        })
        .collect()
}
