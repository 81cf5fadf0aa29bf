pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvRecordSource, JsonRecordSource, LocalStorage};
pub use config::AnalysisConfig;
pub use self::core::{
    analysis::{AnalysisResult, SkillPipeline},
    engine::{AnalysisEngine, AnalysisOutcome},
    report::{render_csv, render_text_report, ChartSeries},
    skills::{
        count_skills, normalize_skill, technology_popularity, CounterSettings, RankedSkills,
        SkillFrequencyCounter, SkillTally,
    },
};
pub use domain::model::{records_from_value, JobRecord, RankedSkill, SkillsField};
pub use domain::ports::{ConfigProvider, Pipeline, RecordSource, Storage};
pub use utils::error::{Result, TrendsError};
