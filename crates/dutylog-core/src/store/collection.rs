//! The duty collection and the profile, persisted as two JSON blobs.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use super::traits::KeyValueStore;
use crate::error::{DutyLogError, Result};
use crate::model::{DutyRecord, UserProfile};

/// Key of the profile blob.
pub const PROFILE_KEY: &str = "alp_profile";
/// Key of the newest-first duty list blob.
pub const DUTIES_KEY: &str = "alp_duties";

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    /// New id, prepended.
    Inserted,
    /// Existing id, replaced in place.
    Replaced,
}

/// Ordered, newest-first collection of duty records.
///
/// Every mutation persists the new list first and then swaps it in, so a
/// snapshot taken with [`DutyStore::records`] is never modified underneath
/// its holder and a failed write leaves the in-memory list untouched.
pub struct DutyStore<K: KeyValueStore> {
    kv: K,
    records: Arc<Vec<DutyRecord>>,
}

impl<K: KeyValueStore> DutyStore<K> {
    /// Open the store and load the collection.
    pub fn open(kv: K) -> Result<Self> {
        let mut store = Self {
            kv,
            records: Arc::new(Vec::new()),
        };
        store.load_all()?;
        Ok(store)
    }

    /// Reload the collection from the key-value store.
    ///
    /// An absent blob is an empty collection; an unreadable one is an error.
    pub fn load_all(&mut self) -> Result<Arc<Vec<DutyRecord>>> {
        let records: Vec<DutyRecord> = read_blob(&self.kv, DUTIES_KEY)?.unwrap_or_default();
        debug!(count = records.len(), "loaded duty records");
        self.records = Arc::new(records);
        Ok(self.records())
    }

    /// Snapshot of the current collection.
    pub fn records(&self) -> Arc<Vec<DutyRecord>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&DutyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Insert a new record at the front, or replace the record with the same id.
    pub fn upsert(&mut self, record: DutyRecord) -> Result<Upserted> {
        let id = record.id;
        let mut next: Vec<DutyRecord> = self.records.as_ref().clone();
        let outcome = match next.iter().position(|r| r.id == record.id) {
            Some(index) => {
                next[index] = record;
                Upserted::Replaced
            }
            None => {
                next.insert(0, record);
                Upserted::Inserted
            }
        };
        self.commit(next)?;
        info!(?outcome, %id, count = self.len(), "upserted duty record");
        Ok(outcome)
    }

    /// Remove the record with `id`. Returns it, or `None` when it was absent.
    pub fn remove(&mut self, id: Uuid) -> Result<Option<DutyRecord>> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let mut next: Vec<DutyRecord> = self.records.as_ref().clone();
        let removed = next.remove(index);
        self.commit(next)?;
        info!(%id, count = self.len(), "removed duty record");
        Ok(Some(removed))
    }

    /// Replace the whole collection.
    pub fn replace_all(&mut self, records: Vec<DutyRecord>) -> Result<()> {
        self.commit(records)?;
        info!(count = self.len(), "replaced duty collection");
        Ok(())
    }

    /// Read the profile, if one was saved.
    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        read_blob(&self.kv, PROFILE_KEY)
    }

    /// Save the profile, replacing any previous one.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let blob = serde_json::to_string(profile)?;
        self.kv.set(PROFILE_KEY, &blob)?;
        info!("saved profile");
        Ok(())
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    fn commit(&mut self, records: Vec<DutyRecord>) -> Result<()> {
        let blob = serde_json::to_string(&records)?;
        self.kv.set(DUTIES_KEY, &blob)?;
        debug!(count = records.len(), bytes = blob.len(), "persisted duty records");
        self.records = Arc::new(records);
        Ok(())
    }
}

fn read_blob<K: KeyValueStore, T: DeserializeOwned>(kv: &K, key: &str) -> Result<Option<T>> {
    let Some(raw) = kv.get(key)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() || raw.trim() == "null" {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| DutyLogError::corrupted(key, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Designation, DutyDetails, DutyType};
    use crate::store::MemoryKeyValueStore;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn spare(train: &str) -> DutyRecord {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        let mut record =
            DutyRecord::draft(DutyType::Spare, now, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        if let DutyDetails::Spare(s) = &mut record.details {
            s.train_number = Some(train.to_string());
        }
        record
    }

    fn trains(store: &DutyStore<MemoryKeyValueStore>) -> Vec<String> {
        store
            .records()
            .iter()
            .map(|r| r.train_number().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_absent_blob_is_empty() {
        let store = DutyStore::open(MemoryKeyValueStore::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.load_profile().unwrap(), None);
    }

    #[test]
    fn test_corrupted_blob_is_reported() {
        let kv = MemoryKeyValueStore::new().with_blob(DUTIES_KEY, "[{\"id\": 12");
        match DutyStore::open(kv) {
            Err(DutyLogError::CorruptedData { key, .. }) => assert_eq!(key, DUTIES_KEY),
            other => panic!("expected corrupted data, got {:?}", other.map(|s| s.len())),
        }
    }

    #[test]
    fn test_corrupted_profile_is_reported() {
        let kv = MemoryKeyValueStore::new().with_blob(PROFILE_KEY, "{\"name\": true}");
        let store = DutyStore::open(kv).unwrap();
        let err = store.load_profile().unwrap_err();
        assert!(err.to_string().contains(PROFILE_KEY));
    }

    #[test]
    fn test_upsert_new_id_prepends() {
        let mut store = DutyStore::open(MemoryKeyValueStore::new()).unwrap();
        assert_eq!(store.upsert(spare("1")).unwrap(), Upserted::Inserted);
        assert_eq!(store.upsert(spare("2")).unwrap(), Upserted::Inserted);
        assert_eq!(trains(&store), vec!["2", "1"]);
    }

    #[test]
    fn test_upsert_same_id_replaces_in_place() {
        let mut store = DutyStore::open(MemoryKeyValueStore::new()).unwrap();
        let first = spare("1");
        store.upsert(first.clone()).unwrap();
        store.upsert(spare("2")).unwrap();

        let mut edited = first.clone();
        if let DutyDetails::Spare(s) = &mut edited.details {
            s.train_number = Some("1A".to_string());
        }
        assert_eq!(store.upsert(edited.clone()).unwrap(), Upserted::Replaced);
        assert_eq!(store.upsert(edited).unwrap(), Upserted::Replaced);
        assert_eq!(trains(&store), vec!["2", "1A"]);
    }

    #[test]
    fn test_remove() {
        let mut store = DutyStore::open(MemoryKeyValueStore::new()).unwrap();
        let a = spare("1");
        let b = spare("2");
        store.upsert(a.clone()).unwrap();
        store.upsert(b.clone()).unwrap();

        assert_eq!(store.remove(Uuid::new_v4()).unwrap(), None);
        assert_eq!(store.len(), 2);

        let removed = store.remove(a.id).unwrap().unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(trains(&store), vec!["2"]);
        assert!(store.get(b.id).is_some());
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let mut store = DutyStore::open(MemoryKeyValueStore::new()).unwrap();
        store.upsert(spare("1")).unwrap();
        let before = store.records();
        store.upsert(spare("2")).unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let kv = MemoryKeyValueStore::new();
        {
            let mut store = DutyStore::open(&kv).unwrap();
            store.upsert(spare("1")).unwrap();
            store.upsert(spare("2")).unwrap();
        }
        let mut store = DutyStore::open(&kv).unwrap();
        assert_eq!(store.len(), 2);

        store.replace_all(Vec::new()).unwrap();
        assert_eq!(kv.get(DUTIES_KEY).unwrap().as_deref(), Some("[]"));
        assert!(store.load_all().unwrap().is_empty());
    }

    const LEGACY_WORKING: &str = r#"[{
        "id": "0d4f3c1a-8b2e-4f6a-9c3d-1e2f3a4b5c6d",
        "type": "Working",
        "timestamp": 1718443800000,
        "date": "2024-06-15",
        "hood": "",
        "fromStation": "HWH",
        "engineOilOk": false,
        "engineOilRemark": "low level",
        "headLightOk": false,
        "headLightRemark": "dim",
        "GuageLightOk": true,
        "vcdWorking": true,
        "fireExtinguisherCount": "2",
        "fireExpiryDate": "2025-01-31"
    }]"#;

    #[test]
    fn test_legacy_inspection_fields_survive_rewrite() {
        let kv = MemoryKeyValueStore::new().with_blob(DUTIES_KEY, LEGACY_WORKING);
        let mut store = DutyStore::open(&kv).unwrap();
        store.upsert(spare("12001")).unwrap();

        let blob = kv.get(DUTIES_KEY).unwrap().unwrap();
        let saved: serde_json::Value = serde_json::from_str(&blob).unwrap();
        let working = &saved[1];
        assert_eq!(working["type"], "Working");
        assert_eq!(working["fromStation"], "HWH");
        assert_eq!(working["engineOilOk"], false);
        assert_eq!(working["engineOilRemark"], "low level");
        assert_eq!(working["headLightRemark"], "dim");
        assert_eq!(working["GuageLightOk"], true);
        assert_eq!(working["vcdWorking"], true);
        assert_eq!(working["fireExtinguisherCount"], "2");
        assert_eq!(working["fireExpiryDate"], "2025-01-31");
        assert!(working["hood"].is_null());
    }

    #[test]
    fn test_empty_hood_does_not_block_open() {
        let kv = MemoryKeyValueStore::new().with_blob(DUTIES_KEY, LEGACY_WORKING);
        let store = DutyStore::open(kv).unwrap();
        match &store.records()[0].details {
            DutyDetails::Working(w) => {
                assert_eq!(w.hood, None);
                assert_eq!(w.inspection.head_light_ok, Some(false));
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_profile_round_trip() {
        let store = DutyStore::open(MemoryKeyValueStore::new()).unwrap();
        let profile = UserProfile {
            name: "Asha Verma".into(),
            crew_id: "NDLS1234".into(),
            designation: Designation::AssistantLocoPilot,
            mobile: "9800000000".into(),
            email: "asha@example.com".into(),
            photo: None,
        };
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap(), Some(profile));
    }
}
