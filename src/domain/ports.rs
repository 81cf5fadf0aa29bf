use crate::domain::model::JobRecord;
use crate::core::analysis::AnalysisResult;
use crate::core::skills::CounterSettings;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// 上游資料來源：產生職缺記錄
pub trait RecordSource {
    fn load(&self) -> Result<Vec<JobRecord>>;
}

/// 管道執行時需要的配置值
pub trait ConfigProvider {
    fn source_path(&self) -> &str;
    fn skills_field(&self) -> &str;
    fn counter_settings(&self) -> CounterSettings;
    fn top_n(&self) -> usize;
    fn output_path(&self) -> &str;
    fn wants_format(&self, format: &str) -> bool;
    fn filename_for(&self, format: &str) -> String;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<JobRecord>>;
    fn transform(&self, records: Vec<JobRecord>) -> Result<AnalysisResult>;
    fn load(&self, result: AnalysisResult) -> Result<String>;
}
