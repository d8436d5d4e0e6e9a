use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{GradebookError, Result};
use crate::storage::Record;
use crate::utils::require_id;

/// 实体层成绩上下限
///
/// 服务层另按评分标准的 `max_points` 校验上限，两个约束同时生效。
pub const GRADE_VALUE_MIN: f64 = 0.0;
pub const GRADE_VALUE_MAX: f64 = 100.0;

// 成绩实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub criterion_id: Uuid,
    pub student_id: Uuid,
    pub value: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Grade {
    pub fn new(subject_id: Uuid, criterion_id: Uuid, student_id: Uuid, value: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject_id,
            criterion_id,
            student_id,
            value,
            comment: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_id(self.subject_id, "grade.subject.required")?;
        require_id(self.criterion_id, "grade.criterion.required")?;
        require_id(self.student_id, "grade.student.required")?;
        if !(GRADE_VALUE_MIN..=GRADE_VALUE_MAX).contains(&self.value) {
            return Err(GradebookError::validation("grade.value.outOfRange"));
        }
        Ok(())
    }
}

impl Record for Grade {
    const COLLECTION: &'static str = "grades";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self) -> Result<()> {
        Grade::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(value: f64) -> Grade {
        Grade::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), value)
    }

    #[test]
    fn test_value_bounds() {
        assert!(grade(0.0).validate().is_ok());
        assert!(grade(100.0).validate().is_ok());
        assert!(grade(57.5).validate().is_ok());
        for bad in [-0.5, 100.01, f64::NAN, f64::INFINITY] {
            assert_eq!(
                grade(bad).validate(),
                Err(GradebookError::validation("grade.value.outOfRange"))
            );
        }
    }

    #[test]
    fn test_nil_foreign_keys_rejected() {
        let mut g = grade(10.0);
        g.subject_id = Uuid::nil();
        assert_eq!(
            g.validate(),
            Err(GradebookError::validation("grade.subject.required"))
        );

        let mut g = grade(10.0);
        g.criterion_id = Uuid::nil();
        assert_eq!(
            g.validate(),
            Err(GradebookError::validation("grade.criterion.required"))
        );

        let mut g = grade(10.0);
        g.student_id = Uuid::nil();
        assert_eq!(
            g.validate(),
            Err(GradebookError::validation("grade.student.required"))
        );
    }
}
