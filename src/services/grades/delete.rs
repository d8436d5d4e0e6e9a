use tracing::info;
use uuid::Uuid;

use super::GradeService;
use crate::errors::{GradebookError, Result};

pub async fn delete_grade(service: &GradeService, grade_id: Uuid) -> Result<()> {
    if !service.storage().grades.delete(grade_id).await? {
        return Err(GradebookError::not_found("grade.notFound"));
    }
    info!("Deleted grade {}", grade_id);
    Ok(())
}
