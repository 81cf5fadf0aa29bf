use crate::core::skills::{CounterSettings, DEFAULT_SKILLS_FIELD, DEFAULT_SKILL_SEPARATOR};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TrendsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SOURCE_TYPES: [&str; 2] = ["csv", "json"];
pub const OUTPUT_FORMATS: [&str; 3] = ["csv", "json", "report"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub report: ReportConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub path: String,
    pub skills_field: Option<String>,
    pub csv_delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterConfig {
    pub min_skill_len: Option<usize>,
    pub skill_separator: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub json: Option<String>,
    pub report: Option<String>,
}

impl AnalysisConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrendsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrendsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrendsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_one_of("source.type", &self.source.r#type, &SOURCE_TYPES)?;
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_non_empty_string("source.skills_field", self.skills_field())?;

        if let Some(delimiter) = &self.source.csv_delimiter {
            let c = validation::validate_single_char("source.csv_delimiter", delimiter)?;
            if !c.is_ascii() {
                return Err(TrendsError::InvalidConfigValueError {
                    field: "source.csv_delimiter".to_string(),
                    value: delimiter.clone(),
                    reason: "CSV delimiter must be an ASCII character".to_string(),
                });
            }
        }

        if let Some(separator) = &self.counter.skill_separator {
            validation::validate_single_char("counter.skill_separator", separator)?;
        }

        validation::validate_positive_number("report.top_n", self.report.top_n, 1)?;
        validation::validate_path("output.path", &self.output.path)?;

        if self.output.formats.is_empty() {
            return Err(TrendsError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }
        for format in &self.output.formats {
            validation::validate_one_of("output.formats", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }

    pub fn skills_field(&self) -> &str {
        self.source
            .skills_field
            .as_deref()
            .unwrap_or(DEFAULT_SKILLS_FIELD)
    }

    pub fn csv_delimiter(&self) -> u8 {
        self.source
            .csv_delimiter
            .as_deref()
            .and_then(|d| d.bytes().next())
            .unwrap_or(b',')
    }

    pub fn counter_settings(&self) -> CounterSettings {
        CounterSettings {
            skills_field: self.skills_field().to_string(),
            separator: self
                .counter
                .skill_separator
                .as_deref()
                .and_then(|s| s.chars().next())
                .unwrap_or(DEFAULT_SKILL_SEPARATOR),
            min_skill_len: self.counter.min_skill_len.unwrap_or(1),
        }
    }

    pub fn top_n(&self) -> usize {
        self.report.top_n
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn wants_format(&self, format: &str) -> bool {
        self.output.formats.iter().any(|f| f == format)
    }

    /// 各輸出格式的檔名
    pub fn filename_for(&self, format: &str) -> String {
        let custom = self.output.filenames.as_ref().and_then(|f| match format {
            "csv" => f.csv.clone(),
            "json" => f.json.clone(),
            "report" => f.report.clone(),
            _ => None,
        });

        custom.unwrap_or_else(|| match format {
            "report" => "report.txt".to_string(),
            other => format!("skills.{}", other),
        })
    }
}

impl ConfigProvider for AnalysisConfig {
    fn source_path(&self) -> &str {
        &self.source.path
    }

    fn skills_field(&self) -> &str {
        self.skills_field()
    }

    fn counter_settings(&self) -> CounterSettings {
        self.counter_settings()
    }

    fn top_n(&self) -> usize {
        self.top_n()
    }

    fn output_path(&self) -> &str {
        self.output_path()
    }

    fn wants_format(&self, format: &str) -> bool {
        self.wants_format(format)
    }

    fn filename_for(&self, format: &str) -> String {
        self.filename_for(format)
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
