use crate::modules::scheduling::adapters::outbound::employee_directory::{
    DirectoryError, EmployeeDirectory,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEmployeeDirectory {
    names: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryEmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees<I, K, V>(employees: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: RwLock::new(
                employees
                    .into_iter()
                    .map(|(id, name)| (id.into(), name.into()))
                    .collect(),
            ),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert(&self, employee_id: impl Into<String>, name: impl Into<String>) {
        self.names
            .write()
            .await
            .insert(employee_id.into(), name.into());
    }
}

#[async_trait::async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn find_employee_name(
        &self,
        employee_id: &str,
    ) -> Result<Option<String>, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Employee directory offline".into()));
        }
        Ok(self.names.read().await.get(employee_id).cloned())
    }
}

#[cfg(test)]
mod in_memory_employee_directory_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_known_employees_only() {
        let directory = InMemoryEmployeeDirectory::with_employees([("E1", "Alice")]);
        directory.insert("E2", "Bob").await;

        assert_eq!(
            directory.find_employee_name("E1").await,
            Ok(Some("Alice".to_string()))
        );
        assert_eq!(
            directory.find_employee_name("E2").await,
            Ok(Some("Bob".to_string()))
        );
        assert_eq!(directory.find_employee_name("E9").await, Ok(None));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_directory_is_offline() {
        let mut directory = InMemoryEmployeeDirectory::new();
        directory.toggle_offline();
        assert!(directory.find_employee_name("E1").await.is_err());
    }
}
