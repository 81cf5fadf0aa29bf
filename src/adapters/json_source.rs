use crate::domain::model::{records_from_value, JobRecord};
use crate::domain::ports::{RecordSource, Storage};
use crate::utils::error::Result;

/// 從 JSON 檔案讀取職缺記錄，頂層必須是物件陣列
pub struct JsonRecordSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> JsonRecordSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

impl<S: Storage> RecordSource for JsonRecordSource<S> {
    fn load(&self) -> Result<Vec<JobRecord>> {
        tracing::debug!("Reading JSON records from: {}", self.path);
        let data = self.storage.read_file(&self.path)?;
        let value: serde_json::Value = serde_json::from_slice(&data)?;
        let records = records_from_value(value)?;
        tracing::info!("📥 Loaded {} records from {}", records.len(), self.path);
        Ok(records)
    }
}
