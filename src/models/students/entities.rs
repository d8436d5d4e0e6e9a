use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::storage::Record;
use crate::utils::require_text;

// 学生实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    // 学号
    pub album: String,
    // 所属学生组，可为空
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        album: impl Into<String>,
        group_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            album: album.into(),
            group_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn validate(&self) -> Result<()> {
        require_text(&self.first_name, "student.firstName.required")?;
        require_text(&self.last_name, "student.lastName.required")?;
        require_text(&self.album, "student.album.required")?;
        Ok(())
    }
}

impl Record for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(&self) -> Result<()> {
        Student::validate(self)
    }
}
