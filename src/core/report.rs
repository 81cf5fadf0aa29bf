use crate::core::skills::RankedSkills;
use crate::domain::model::RankedSkill;
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_number;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 長條圖資料，交給外部繪圖程式使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<RankedSkill>,
}

impl ChartSeries {
    pub fn top_skills(ranked: &RankedSkills, top_n: usize) -> Self {
        Self {
            title: format!("Top {} Demanded AI Skills", top_n),
            x_label: "Skill".to_string(),
            y_label: "Job Count".to_string(),
            points: ranked.top(top_n).cloned().collect(),
        }
    }
}

/// skills.json 的內容
#[derive(Debug, Clone, Serialize)]
pub struct SkillSummary {
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub records_with_skills: usize,
    pub distinct_skills: usize,
    pub total_mentions: u64,
    pub chart: ChartSeries,
}

/// 首字大寫，其餘小寫
fn display_name(skill: &str) -> String {
    let mut chars = skill.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// 前 N 名技能的文字報告，top_n 必須大於 0
pub fn render_text_report(ranked: &RankedSkills, top_n: usize) -> Result<String> {
    validate_positive_number("top_n", top_n, 1)?;

    let mut report = format!("*** TOP {} DEMANDED AI SKILLS REPORT ***\n\n", top_n);

    if ranked.is_empty() {
        report.push_str("No skills data available for analysis.");
        return Ok(report);
    }

    for (rank, entry) in ranked.top(top_n).enumerate() {
        report.push_str(&format!(
            "{}. **{}**: {} vacancies.\n",
            rank + 1,
            display_name(&entry.skill),
            entry.count
        ));
    }

    Ok(report)
}

/// 完整排名輸出成 CSV：rank,skill,count
pub fn render_csv(ranked: &RankedSkills) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["rank", "skill", "count"])?;

    for (rank, entry) in ranked.iter().enumerate() {
        writer.write_record([
            (rank + 1).to_string(),
            entry.skill.clone(),
            entry.count.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
