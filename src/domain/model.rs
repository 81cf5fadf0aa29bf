use crate::utils::error::{Result, TrendsError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 一筆職缺資料：欄位名稱對應到 JSON 值，只讀。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord {
    pub data: Map<String, Value>,
}

/// 技能欄位的分類結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillsField<'a> {
    /// 欄位不存在或為 null
    Absent,
    /// JSON 陣列，每個元素應為字串
    List(&'a [Value]),
    /// 以分隔符號串接的字串，例如 CSV 欄位 "Python, SQL"
    Delimited(&'a str),
}

impl JobRecord {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// 將動態 JSON 值轉成 JobRecord，非物件則回傳 InvalidInputKind
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(TrendsError::InvalidInputKind {
                message: format!("expected a record object, found {}", value_kind(&other)),
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    pub fn skills_field(&self, field: &str) -> Result<SkillsField<'_>> {
        match self.data.get(field) {
            None | Some(Value::Null) => Ok(SkillsField::Absent),
            Some(Value::Array(items)) => Ok(SkillsField::List(items)),
            Some(Value::String(text)) => Ok(SkillsField::Delimited(text)),
            Some(other) => Err(TrendsError::MissingFieldError {
                field: field.to_string(),
                found: value_kind(other).to_string(),
            }),
        }
    }
}

impl From<Map<String, Value>> for JobRecord {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

/// 將 JSON 文件轉成記錄序列：頂層必須是物件陣列
pub fn records_from_value(value: Value) -> Result<Vec<JobRecord>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                JobRecord::from_value(item).map_err(|_| TrendsError::InvalidInputKind {
                    message: format!("element {} of the record list is not an object", index),
                })
            })
            .collect(),
        other => Err(TrendsError::InvalidInputKind {
            message: format!("expected a list of records, found {}", value_kind(&other)),
        }),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 排名輸出：(技能, 次數)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSkill {
    pub skill: String,
    pub count: u64,
}

impl RankedSkill {
    pub fn new(skill: impl Into<String>, count: u64) -> Self {
        Self {
            skill: skill.into(),
            count,
        }
    }
}

impl From<(&str, u64)> for RankedSkill {
    fn from((skill, count): (&str, u64)) -> Self {
        Self::new(skill, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skills_field_classification() {
        let record = JobRecord::from_value(json!({
            "title": "ML Engineer",
            "list": ["Python", "SQL"],
            "text": "Python, SQL",
            "empty": null,
            "bad": 5
        }))
        .unwrap();

        assert!(matches!(record.skills_field("list").unwrap(), SkillsField::List(items) if items.len() == 2));
        assert_eq!(
            record.skills_field("text").unwrap(),
            SkillsField::Delimited("Python, SQL")
        );
        assert_eq!(record.skills_field("empty").unwrap(), SkillsField::Absent);
        assert_eq!(record.skills_field("missing").unwrap(), SkillsField::Absent);

        let err = record.skills_field("bad").unwrap_err();
        assert!(matches!(err, TrendsError::MissingFieldError { ref found, .. } if found == "number"));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = JobRecord::from_value(json!("not a record")).unwrap_err();
        assert!(matches!(err, TrendsError::InvalidInputKind { .. }));
    }

    #[test]
    fn test_records_from_value() {
        let records = records_from_value(json!([{"skills": ["A"]}, {"skills": "B"}])).unwrap();
        assert_eq!(records.len(), 2);

        assert!(matches!(
            records_from_value(json!({"skills": ["A"]})),
            Err(TrendsError::InvalidInputKind { .. })
        ));
        assert!(matches!(
            records_from_value(json!([{"skills": ["A"]}, 42])),
            Err(TrendsError::InvalidInputKind { .. })
        ));
    }

    #[test]
    fn test_record_deserializes_transparently() {
        let record: JobRecord = serde_json::from_str(r#"{"skills": ["Rust"]}"#).unwrap();
        assert!(record.get("skills").is_some());
    }
}
