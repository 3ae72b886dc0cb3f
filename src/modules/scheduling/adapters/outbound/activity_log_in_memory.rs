// In memory implementation of the ActivityLog port.

use crate::modules::scheduling::adapters::outbound::activity_log::{
    ActivityLog, ActivityLogError,
};
use crate::modules::scheduling::core::activity::ActivityRecord;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityLog {
    records: RwLock<Vec<ActivityRecord>>,
    is_offline: bool,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn count_for_shift(&self, shift_id: &str) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.shift_id == shift_id)
            .count()
    }
}

#[async_trait::async_trait]
impl ActivityLog for InMemoryActivityLog {
    async fn record(&self, record: ActivityRecord) -> Result<(), ActivityLogError> {
        if self.is_offline {
            return Err(ActivityLogError::Backend("Activity log offline".into()));
        }
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_by_business(
        &self,
        business_code: &str,
    ) -> Result<Vec<ActivityRecord>, ActivityLogError> {
        if self.is_offline {
            return Err(ActivityLogError::Backend("Activity log offline".into()));
        }
        let mut records: Vec<ActivityRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|record| record.business_code == business_code)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.timestamp);
        Ok(records)
    }
}

#[cfg(test)]
mod in_memory_activity_log_tests {
    use super::*;
    use crate::tests::fixtures::shift::{ShiftBuilder, june_10_at};
    use rstest::{fixture, rstest};

    #[fixture]
    fn clock_out() -> ActivityRecord {
        let shift = ShiftBuilder::new().id("sh-1").build();
        ActivityRecord::for_transition("a-2", &shift, "ACME1", "E1", false, june_10_at(17, 10))
    }

    #[fixture]
    fn clock_in() -> ActivityRecord {
        let shift = ShiftBuilder::new().id("sh-1").build();
        ActivityRecord::for_transition("a-1", &shift, "ACME1", "E1", true, june_10_at(8, 35))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_records_of_one_business_in_time_order(
        clock_in: ActivityRecord,
        clock_out: ActivityRecord,
    ) {
        let log = InMemoryActivityLog::new();
        log.record(clock_out.clone()).await.unwrap();
        log.record(clock_in.clone()).await.unwrap();
        let other = ActivityRecord {
            business_code: "OTHER".into(),
            ..clock_in.clone()
        };
        log.record(other).await.unwrap();

        let records = log.list_by_business("ACME1").await.unwrap();
        assert_eq!(records, vec![clock_in, clock_out]);
        assert_eq!(log.count_for_shift("sh-1").await, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_log_is_offline(clock_in: ActivityRecord) {
        let mut log = InMemoryActivityLog::new();
        log.toggle_offline();
        let result = log.record(clock_in).await;
        assert_eq!(
            result,
            Err(ActivityLogError::Backend("Activity log offline".into()))
        );
        assert!(log.list_by_business("ACME1").await.is_err());
    }
}
