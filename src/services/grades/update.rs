use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{GradeService, check_against_criterion, load_grade};
use crate::errors::{GradebookError, Result};
use crate::models::grades::{entities::Grade, requests::UpdateGradeRequest};
use crate::services::subjects::load_criterion;
use crate::utils::trimmed_option;

pub async fn update_grade(
    service: &GradeService,
    grade_id: Uuid,
    update: UpdateGradeRequest,
) -> Result<Grade> {
    let storage = service.storage();
    let mut grade = load_grade(storage, grade_id).await?;

    if let Some(value) = update.value {
        let criterion = load_criterion(storage, grade.criterion_id).await?;
        check_against_criterion(value, &criterion)?;
        grade.value = value;
    }
    if update.comment.is_some() {
        grade.comment = trimmed_option(update.comment);
    }

    grade.updated_at = Utc::now();
    if !storage.grades.update(grade.clone()).await? {
        return Err(GradebookError::not_found("grade.notFound"));
    }

    info!("Updated grade {} to {}", grade.id, grade.value);
    Ok(grade)
}
