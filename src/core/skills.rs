//! 技能頻率統計。
//!
//! 先完整掃過所有記錄建立計數表，再依次數遞減排序；次數相同時以第一次出現的順序為準。
//! 結果是已排序的序列，可以重複迭代，每次都從頭產生相同的結果。

use crate::domain::model::{value_kind, JobRecord, RankedSkill, SkillsField};
use crate::utils::error::{Result, TrendsError};
use crate::utils::validation::validate_positive_number;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_SKILLS_FIELD: &str = "skills";
pub const DEFAULT_SKILL_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSettings {
    /// 技能欄位名稱
    pub skills_field: String,
    /// 字串形式技能清單的分隔符號
    pub separator: char,
    /// 正規化後少於此字元數的技能會被忽略（空字串一律忽略）
    pub min_skill_len: usize,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            skills_field: DEFAULT_SKILLS_FIELD.to_string(),
            separator: DEFAULT_SKILL_SEPARATOR,
            min_skill_len: 1,
        }
    }
}

/// 去除前後空白並轉小寫
pub fn normalize_skill(token: &str, min_len: usize) -> Option<String> {
    let normalized = token.trim().to_lowercase();
    if normalized.is_empty() || normalized.chars().count() < min_len {
        return None;
    }
    Some(normalized)
}

/// 每個技能的出現次數，保留第一次出現的順序
#[derive(Debug, Clone, Default)]
pub struct SkillTally {
    positions: HashMap<String, usize>,
    entries: Vec<RankedSkill>,
    records_with_skills: usize,
}

impl SkillTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, skill: String) {
        match self.positions.get(&skill) {
            Some(&position) => self.entries[position].count += 1,
            None => {
                self.positions.insert(skill.clone(), self.entries.len());
                self.entries.push(RankedSkill::new(skill, 1));
            }
        }
    }

    pub fn count_of(&self, skill: &str) -> u64 {
        self.positions
            .get(skill)
            .map(|&position| self.entries[position].count)
            .unwrap_or(0)
    }

    /// 不同技能的數量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// 至少貢獻一個技能的記錄數
    pub fn records_with_skills(&self) -> usize {
        self.records_with_skills
    }

    pub fn into_ranked(self) -> RankedSkills {
        let mut entries = self.entries;
        // sort_by 是穩定排序，同分者維持第一次出現的順序
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        RankedSkills { entries }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedSkills {
    entries: Vec<RankedSkill>,
}

impl RankedSkills {
    pub fn iter(&self) -> std::slice::Iter<'_, RankedSkill> {
        self.entries.iter()
    }

    pub fn top(&self, n: usize) -> std::iter::Take<std::slice::Iter<'_, RankedSkill>> {
        self.entries.iter().take(n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn get(&self, skill: &str) -> Option<&RankedSkill> {
        self.entries.iter().find(|entry| entry.skill == skill)
    }

    pub fn into_vec(self) -> Vec<RankedSkill> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankedSkills {
    type Item = &'a RankedSkill;
    type IntoIter = std::slice::Iter<'a, RankedSkill>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for RankedSkills {
    type Item = RankedSkill;
    type IntoIter = std::vec::IntoIter<RankedSkill>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillFrequencyCounter {
    settings: CounterSettings,
}

impl SkillFrequencyCounter {
    pub fn new(settings: CounterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CounterSettings {
        &self.settings
    }

    /// 掃過全部記錄建立計數表；任何一筆記錄格式錯誤即整體失敗
    pub fn tally<'a, I>(&self, records: I) -> Result<SkillTally>
    where
        I: IntoIterator<Item = &'a JobRecord>,
    {
        let field = self.settings.skills_field.as_str();
        let mut tally = SkillTally::new();
        let mut record_count = 0usize;

        for record in records {
            record_count += 1;
            let mut contributed = false;
            match record.skills_field(field)? {
                SkillsField::Absent => {}
                SkillsField::List(items) => {
                    for (index, item) in items.iter().enumerate() {
                        let token = item.as_str().ok_or_else(|| TrendsError::InvalidSkillToken {
                            field: field.to_string(),
                            index,
                            found: value_kind(item).to_string(),
                        })?;
                        contributed |= self.record_token(&mut tally, token);
                    }
                }
                SkillsField::Delimited(text) => {
                    for token in text.split(self.settings.separator) {
                        contributed |= self.record_token(&mut tally, token);
                    }
                }
            }
            if contributed {
                tally.records_with_skills += 1;
            }
        }

        tracing::debug!(
            "Tallied {} skill mentions ({} distinct) from {} records",
            tally.total(),
            tally.len(),
            record_count
        );

        Ok(tally)
    }

    pub fn count<'a, I>(&self, records: I) -> Result<RankedSkills>
    where
        I: IntoIterator<Item = &'a JobRecord>,
    {
        Ok(self.tally(records)?.into_ranked())
    }

    /// 前 N 名最常出現的技能，top_n 必須大於 0
    pub fn popularity<'a, I>(&self, records: I, top_n: usize) -> Result<Vec<RankedSkill>>
    where
        I: IntoIterator<Item = &'a JobRecord>,
    {
        validate_positive_number("top_n", top_n, 1)?;
        let ranked = self.count(records)?;
        Ok(ranked.top(top_n).cloned().collect())
    }

    fn record_token(&self, tally: &mut SkillTally, token: &str) -> bool {
        match normalize_skill(token, self.settings.min_skill_len) {
            Some(skill) => {
                tally.record(skill);
                true
            }
            None => false,
        }
    }
}

/// 以預設設定（欄位 `skills`）統計技能頻率
pub fn count_skills<'a, I>(records: I) -> Result<RankedSkills>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    SkillFrequencyCounter::default().count(records)
}

pub fn technology_popularity<'a, I>(records: I, top_n: usize) -> Result<Vec<RankedSkill>>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    SkillFrequencyCounter::default().popularity(records, top_n)
}
