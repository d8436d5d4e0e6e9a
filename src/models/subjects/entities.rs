use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::storage::Record;
use crate::utils::require_text;

// 课程实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.name, "subject.name.required")
    }
}

impl Record for Subject {
    const COLLECTION: &'static str = "subjects";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self) -> Result<()> {
        Subject::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_name_required() {
        assert!(Subject::new("Algebra").validate().is_ok());
        assert!(Subject::new("").validate().is_err());
        assert!(Subject::new("   ").validate().is_err());
    }
}
