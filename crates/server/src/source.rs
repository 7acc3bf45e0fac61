//! Record retrieval behind the insights endpoints.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Datelike;
use insights::{InsightsError, TransactionRecord};

/// Storage seam of the server.
///
/// Implementations hold the transaction records of each group. A failed
/// retrieval surfaces as [`InsightsError::DataSourceUnavailable`], which the
/// caller may retry; the aggregation itself never fails.
pub trait TransactionStore: Send + Sync {
    /// Records of one group within one calendar year.
    fn transactions_for(
        &self,
        group_id: &str,
        year: i32,
    ) -> Result<Vec<TransactionRecord>, InsightsError>;

    /// Appends a record to its group.
    fn record(&self, record: TransactionRecord) -> Result<(), InsightsError>;
}

/// In-process store keyed by group id.
#[derive(Default)]
pub struct MemoryStore {
    groups: RwLock<HashMap<String, Vec<TransactionRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a batch of records, e.g. from a data file at
    /// startup.
    pub fn load(&self, records: Vec<TransactionRecord>) {
        let Ok(mut groups) = self.groups.write() else {
            return;
        };
        for record in records {
            groups
                .entry(record.group_id.clone())
                .or_default()
                .push(record);
        }
    }
}

impl TransactionStore for MemoryStore {
    fn transactions_for(
        &self,
        group_id: &str,
        year: i32,
    ) -> Result<Vec<TransactionRecord>, InsightsError> {
        let groups = self.groups.read().map_err(|_| {
            InsightsError::DataSourceUnavailable("transaction store lock poisoned".to_string())
        })?;

        Ok(groups
            .get(group_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.occurred_on.year() == year)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn record(&self, record: TransactionRecord) -> Result<(), InsightsError> {
        let mut groups = self.groups.write().map_err(|_| {
            InsightsError::DataSourceUnavailable("transaction store lock poisoned".to_string())
        })?;

        groups
            .entry(record.group_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use insights::TransactionKind;

    fn record(group_id: &str, year: i32) -> TransactionRecord {
        TransactionRecord::new(
            group_id,
            TransactionKind::Debit,
            10.0,
            None,
            NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        )
    }

    #[test]
    fn retrieval_is_scoped_by_group_and_year() {
        let store = MemoryStore::new();
        store.load(vec![
            record("g1", 2024),
            record("g1", 2023),
            record("g2", 2024),
        ]);

        let records = store.transactions_for("g1", 2024).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].group_id, "g1");
    }

    #[test]
    fn unknown_group_yields_an_empty_collection() {
        let store = MemoryStore::new();
        assert!(store.transactions_for("nobody", 2024).unwrap().is_empty());
    }

    #[test]
    fn appended_records_are_retrievable() {
        let store = MemoryStore::new();
        store.record(record("g1", 2024)).unwrap();
        store.record(record("g1", 2024)).unwrap();

        assert_eq!(store.transactions_for("g1", 2024).unwrap().len(), 2);
    }
}
