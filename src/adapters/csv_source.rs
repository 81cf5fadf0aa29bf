use crate::domain::model::JobRecord;
use crate::domain::ports::{RecordSource, Storage};
use crate::utils::error::Result;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// 從 CSV 檔案讀取職缺記錄：第一列為欄位名稱，空白欄位視為 null
pub struct CsvRecordSource<S: Storage> {
    storage: S,
    path: String,
    skills_field: String,
    delimiter: u8,
}

impl<S: Storage> CsvRecordSource<S> {
    pub fn new(storage: S, path: impl Into<String>, skills_field: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
            skills_field: skills_field.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn parse(&self, data: &[u8]) -> Result<Vec<JobRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(data);

        let headers = reader.headers()?.clone();

        // 同名欄位以最後一欄為準
        let mut seen = HashSet::new();
        for header in headers.iter().map(str::trim) {
            if !seen.insert(header) {
                tracing::warn!(
                    "⚠️ Duplicate column '{}' in {}, the last one wins",
                    header,
                    self.path
                );
            }
        }

        if !seen.contains(self.skills_field.as_str()) {
            tracing::warn!(
                "⚠️ Column '{}' not found in {}, no skills will be counted",
                self.skills_field,
                self.path
            );
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut data = Map::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                let value = if cell.trim().is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                data.insert(header.trim().to_string(), value);
            }
            records.push(JobRecord::new(data));
        }

        Ok(records)
    }
}

impl<S: Storage> RecordSource for CsvRecordSource<S> {
    fn load(&self) -> Result<Vec<JobRecord>> {
        tracing::debug!("Reading CSV records from: {}", self.path);
        let data = self.storage.read_file(&self.path)?;
        let records = self.parse(&data)?;
        tracing::info!("📥 Loaded {} records from {}", records.len(), self.path);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SkillsField;
    use crate::utils::error::TrendsError;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                TrendsError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_csv_records() {
        let storage = MockStorage::with_file(
            "jobs.csv",
            "job_title,salary_range_usd,skills_required\n\
             ML Engineer,100000-140000,\"Python, PyTorch\"\n\
             Analyst,60000-80000,\n",
        );
        let source = CsvRecordSource::new(storage, "jobs.csv", "skills_required");

        let records = source.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].skills_field("skills_required").unwrap(),
            SkillsField::Delimited("Python, PyTorch")
        );
        assert_eq!(
            records[1].skills_field("skills_required").unwrap(),
            SkillsField::Absent
        );
        assert_eq!(records[0].get("job_title").unwrap(), "ML Engineer");
    }

    #[test]
    fn test_custom_delimiter() {
        let storage = MockStorage::with_file("jobs.tsv", "title\tskills\nDev\tRust, Go\n");
        let source = CsvRecordSource::new(storage, "jobs.tsv", "skills").with_delimiter(b'\t');

        let records = source.load().unwrap();
        assert_eq!(
            records[0].skills_field("skills").unwrap(),
            SkillsField::Delimited("Rust, Go")
        );
    }

    #[test]
    fn test_duplicate_headers_keep_last_column() {
        let storage = MockStorage::with_file(
            "jobs.csv",
            "title,skills, skills \nDev,,\"Rust, Go\"\nOps,Bash,\n",
        );
        let source = CsvRecordSource::new(storage, "jobs.csv", "skills");

        let records = source.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data.len(), 2);
        assert_eq!(
            records[0].skills_field("skills").unwrap(),
            SkillsField::Delimited("Rust, Go")
        );
        assert_eq!(
            records[1].skills_field("skills").unwrap(),
            SkillsField::Absent
        );
    }

    #[test]
    fn test_missing_file() {
        let storage = MockStorage::with_file("other.csv", "a\n1\n");
        let source = CsvRecordSource::new(storage, "jobs.csv", "skills");

        assert!(matches!(source.load(), Err(TrendsError::IoError(_))));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let storage = MockStorage::with_file("jobs.csv", "title,skills\nDev,Rust,extra\n");
        let source = CsvRecordSource::new(storage, "jobs.csv", "skills");

        assert!(matches!(source.load(), Err(TrendsError::CsvError(_))));
    }
}
