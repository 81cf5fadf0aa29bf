use crate::core::analysis::AnalysisResult;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub output_path: String,
    pub record_count: usize,
    pub distinct_skills: usize,
    pub total_mentions: u64,
}

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<AnalysisOutcome> {
        tracing::info!("Starting skill analysis...");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let result: AnalysisResult = self.pipeline.transform(records)?;
        tracing::info!(
            "Counted {} skill mentions across {} distinct skills",
            result.ranked.total(),
            result.ranked.len()
        );

        let record_count = result.record_count;
        let distinct_skills = result.ranked.len();
        let total_mentions = result.ranked.total();

        // Load
        let output_path = self.pipeline.load(result)?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(AnalysisOutcome {
            output_path,
            record_count,
            distinct_skills,
            total_mentions,
        })
    }
}
