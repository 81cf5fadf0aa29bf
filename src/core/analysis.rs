use crate::adapters::{CsvRecordSource, JsonRecordSource, LocalStorage};
use crate::config::AnalysisConfig;
use crate::core::report::{render_csv, render_text_report, ChartSeries, SkillSummary};
use crate::core::skills::{RankedSkills, SkillFrequencyCounter};
use crate::domain::model::JobRecord;
use crate::domain::ports::{ConfigProvider, Pipeline, RecordSource, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub record_count: usize,
    pub records_with_skills: usize,
    pub ranked: RankedSkills,
    pub top_n: usize,
}

pub struct SkillPipeline<S: Storage, C: ConfigProvider> {
    source: Box<dyn RecordSource>,
    storage: S,
    config: C,
    counter: SkillFrequencyCounter,
}

impl<S: Storage, C: ConfigProvider> SkillPipeline<S, C> {
    pub fn new(source: Box<dyn RecordSource>, storage: S, config: C) -> Self {
        let counter = SkillFrequencyCounter::new(config.counter_settings());
        Self {
            source,
            storage,
            config,
            counter,
        }
    }
}

impl SkillPipeline<LocalStorage, AnalysisConfig> {
    /// 依配置建立讀取來源與輸出目錄，路徑以目前工作目錄為基準
    pub fn from_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let source: Box<dyn RecordSource> = match config.source.r#type.as_str() {
            "json" => Box::new(JsonRecordSource::new(
                LocalStorage::new(""),
                config.source.path.clone(),
            )),
            _ => Box::new(
                CsvRecordSource::new(
                    LocalStorage::new(""),
                    config.source.path.clone(),
                    config.skills_field(),
                )
                .with_delimiter(config.csv_delimiter()),
            ),
        };
        let storage = LocalStorage::new(config.output_path());

        Ok(Self::new(source, storage, config))
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SkillPipeline<S, C> {
    fn extract(&self) -> Result<Vec<JobRecord>> {
        tracing::info!("🚀 Extracting job records from: {}", self.config.source_path());
        self.source.load()
    }

    fn transform(&self, records: Vec<JobRecord>) -> Result<AnalysisResult> {
        let tally = self.counter.tally(&records)?;
        let records_with_skills = tally.records_with_skills();

        tracing::debug!(
            "{} of {} records contributed to '{}'",
            records_with_skills,
            records.len(),
            self.config.skills_field()
        );

        Ok(AnalysisResult {
            record_count: records.len(),
            records_with_skills,
            ranked: tally.into_ranked(),
            top_n: self.config.top_n(),
        })
    }

    fn load(&self, result: AnalysisResult) -> Result<String> {
        if self.config.wants_format("csv") {
            let name = self.config.filename_for("csv");
            self.storage
                .write_file(&name, render_csv(&result.ranked)?.as_bytes())?;
            tracing::debug!("Wrote ranked skills to {}", name);
        }

        if self.config.wants_format("json") {
            let name = self.config.filename_for("json");
            let summary = SkillSummary {
                generated_at: chrono::Utc::now(),
                record_count: result.record_count,
                records_with_skills: result.records_with_skills,
                distinct_skills: result.ranked.len(),
                total_mentions: result.ranked.total(),
                chart: ChartSeries::top_skills(&result.ranked, result.top_n),
            };
            let json_data = serde_json::to_string_pretty(&summary)?;
            self.storage.write_file(&name, json_data.as_bytes())?;
            tracing::debug!("Wrote chart payload to {}", name);
        }

        if self.config.wants_format("report") {
            let name = self.config.filename_for("report");
            let report = render_text_report(&result.ranked, result.top_n)?;
            self.storage.write_file(&name, report.as_bytes())?;
            tracing::debug!("Wrote text report to {}", name);
        }

        Ok(self.config.output_path().to_string())
    }
}
