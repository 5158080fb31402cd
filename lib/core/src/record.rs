// Phone book records, kept apart from the road graph
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type RecordId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
}

#[derive(Debug)]
pub struct RecordBook {
    records: BTreeMap<RecordId, Record>,
    next_id: RecordId,
}

impl Default for RecordBook {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

fn validate(name: &str, phone: &str) -> Result<()> {
    if name.is_empty() || phone.is_empty() {
        return Err(Error::Validation("empty name or phone".to_string()));
    }
    Ok(())
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, phone: &str) -> Result<Record> {
        validate(name, phone)?;
        let id = self.next_id;
        self.next_id += 1;

        let record = Record {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
        };
        self.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn update(&mut self, id: RecordId, name: &str, phone: &str) -> Result<Record> {
        validate(name, phone)?;
        let record = self.records.get_mut(&id).ok_or(Error::RecordNotFound(id))?;
        record.name = name.to_string();
        record.phone = phone.to_string();
        Ok(record.clone())
    }

    pub fn remove(&mut self, id: RecordId) -> Result<Record> {
        self.records.remove(&id).ok_or(Error::RecordNotFound(id))
    }

    pub fn get(&self, id: RecordId) -> Result<Record> {
        self.records.get(&id).cloned().ok_or(Error::RecordNotFound(id))
    }

    /// All records ordered by id, optionally only those whose name contains `pattern`.
    #[must_use]
    pub fn list(&self, pattern: Option<&str>) -> Vec<Record> {
        self.records
            .values()
            .filter(|r| pattern.map_or(true, |p| r.name.contains(p)))
            .cloned()
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
