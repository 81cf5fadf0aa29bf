pub mod analysis;
pub mod engine;
pub mod report;
pub mod skills;

pub use crate::domain::model::{JobRecord, RankedSkill};
pub use crate::domain::ports::{Pipeline, RecordSource, Storage};
pub use crate::utils::error::Result;
