use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::storage::Record;
use crate::utils::require_id;

// 学生组与课程的关联
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGroupSubjectAssignment {
    pub id: Uuid,
    pub student_group_id: Uuid,
    pub subject_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentGroupSubjectAssignment {
    pub fn new(student_group_id: Uuid, subject_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            student_group_id,
            subject_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_id(self.student_group_id, "assignment.group.required")?;
        require_id(self.subject_id, "assignment.subject.required")?;
        Ok(())
    }
}

impl Record for StudentGroupSubjectAssignment {
    const COLLECTION: &'static str = "group_subject_assignments";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self) -> Result<()> {
        StudentGroupSubjectAssignment::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GradebookError;

    #[test]
    fn test_both_ids_required() {
        assert!(
            StudentGroupSubjectAssignment::new(Uuid::new_v4(), Uuid::new_v4())
                .validate()
                .is_ok()
        );
        assert_eq!(
            StudentGroupSubjectAssignment::new(Uuid::nil(), Uuid::new_v4()).validate(),
            Err(GradebookError::validation("assignment.group.required"))
        );
        assert_eq!(
            StudentGroupSubjectAssignment::new(Uuid::new_v4(), Uuid::nil()).validate(),
            Err(GradebookError::validation("assignment.subject.required"))
        );
    }
}
