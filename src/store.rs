use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::chart::SeatingChart;
use crate::model::group::Group;
use crate::model::student::StudentRecord;

/// Flat key-value contract the surrounding application owns. The engine
/// never touches it; only `Classroom` and callers at the edges do.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn delete(&mut self, key: &str);
    /// Keys starting with `prefix`, in stable (sorted) order.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// Ordered in-memory store for tests and single-shot CLI runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect()
    }
}

pub const STUDENT_KEY_PREFIX: &str = "student_";
pub const GROUPS_KEY: &str = "classroom_groups";
pub const CHART_KEY: &str = "seating_chart";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed record at key {key}: {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to encode record for key {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// Record operations over the store: one `student_<name>` entry per
/// student, one entry for the group batch, one for the last seating
/// chart.
#[derive(Debug)]
pub struct Classroom<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Classroom<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn students(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let mut records = Vec::new();
        for key in self.store.keys_with_prefix(STUDENT_KEY_PREFIX) {
            if let Some(raw) = self.store.get(&key) {
                let record = serde_json::from_str(&raw)
                    .map_err(|source| StoreError::Malformed { key: key.clone(), source })?;
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Insert or retake-replace: the record overwrites any previous entry
    /// for the same name.
    pub fn save_student(&mut self, record: &StudentRecord) -> Result<(), StoreError> {
        let key = format!("{STUDENT_KEY_PREFIX}{}", record.student_name);
        let raw = serde_json::to_string(record)
            .map_err(|source| StoreError::Encode { key: key.clone(), source })?;
        self.store.set(&key, raw);
        Ok(())
    }

    /// Deletes the record and strips the name from every stored group's
    /// member list. Group summaries keep their creation-time counts.
    pub fn remove_student(&mut self, student_name: &str) -> Result<(), StoreError> {
        self.store
            .delete(&format!("{STUDENT_KEY_PREFIX}{student_name}"));
        let mut groups = self.groups()?;
        if !groups.is_empty() {
            for group in &mut groups {
                group.remove_member(student_name);
            }
            self.save_groups(&groups)?;
        }
        Ok(())
    }

    pub fn groups(&self) -> Result<Vec<Group>, StoreError> {
        match self.store.get(GROUPS_KEY) {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: GROUPS_KEY.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_groups(&mut self, groups: &[Group]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(groups).map_err(|source| StoreError::Encode {
            key: GROUPS_KEY.to_string(),
            source,
        })?;
        self.store.set(GROUPS_KEY, raw);
        Ok(())
    }

    pub fn remove_group(&mut self, group_id: &str) -> Result<(), StoreError> {
        let mut groups = self.groups()?;
        groups.retain(|g| g.id != group_id);
        self.save_groups(&groups)
    }

    pub fn rename_group(&mut self, group_id: &str, name: &str) -> Result<(), StoreError> {
        let mut groups = self.groups()?;
        for group in &mut groups {
            if group.id == group_id {
                group.rename(name);
            }
        }
        self.save_groups(&groups)
    }

    /// Membership-only removal, mirroring `Group::remove_member`.
    pub fn remove_student_from_group(
        &mut self,
        group_id: &str,
        student_name: &str,
    ) -> Result<(), StoreError> {
        let mut groups = self.groups()?;
        for group in &mut groups {
            if group.id == group_id {
                group.remove_member(student_name);
            }
        }
        self.save_groups(&groups)
    }

    pub fn chart(&self) -> Result<Option<SeatingChart>, StoreError> {
        match self.store.get(CHART_KEY) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Malformed {
                    key: CHART_KEY.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub fn save_chart(&mut self, chart: &SeatingChart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(chart).map_err(|source| StoreError::Encode {
            key: CHART_KEY.to_string(),
            source,
        })?;
        self.store.set(CHART_KEY, raw);
        Ok(())
    }
}
