use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::storage::Record;
use crate::utils::require_text;

// 学生组实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGroup {
    pub id: Uuid,
    // 组代码，如 "INF-2A"
    pub code: String,
    // 专业方向
    pub specialization: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentGroup {
    pub fn new(
        code: impl Into<String>,
        specialization: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            specialization: specialization.into(),
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.code, "studentGroup.code.required")?;
        require_text(&self.specialization, "studentGroup.specialization.required")?;
        Ok(())
    }
}

impl Record for StudentGroup {
    const COLLECTION: &'static str = "student_groups";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self) -> Result<()> {
        StudentGroup::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GradebookError;

    #[test]
    fn test_group_validation() {
        assert!(StudentGroup::new("INF-1", "Informatics", None).validate().is_ok());
        assert_eq!(
            StudentGroup::new(" ", "Informatics", None).validate(),
            Err(GradebookError::validation("studentGroup.code.required"))
        );
        assert_eq!(
            StudentGroup::new("INF-1", "", Some("evening".into())).validate(),
            Err(GradebookError::validation(
                "studentGroup.specialization.required"
            ))
        );
    }

    #[test]
    fn test_description_is_optional() {
        let g = StudentGroup::new("MAT-2", "Mathematics", None);
        assert!(g.description.is_none());
        assert!(g.validate().is_ok());
    }
}
