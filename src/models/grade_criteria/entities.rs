use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{GradebookError, Result};
use crate::storage::Record;
use crate::utils::{require_id, require_text};

// 评分标准实体，隶属于某门课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeCriterion {
    pub id: Uuid,
    pub name: String,
    pub max_points: i32,
    pub subject_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GradeCriterion {
    pub fn new(name: impl Into<String>, max_points: i32, subject_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            max_points,
            subject_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.name, "gradeCriterion.name.required")?;
        if self.max_points <= 0 {
            return Err(GradebookError::validation("gradeCriterion.maxPoints.invalid"));
        }
        require_id(self.subject_id, "gradeCriterion.subject.required")?;
        Ok(())
    }
}

impl Record for GradeCriterion {
    const COLLECTION: &'static str = "grade_criteria";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self) -> Result<()> {
        GradeCriterion::validate(self)
    }
}
