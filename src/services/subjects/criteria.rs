//! 评分标准管理

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use super::{SubjectService, load_criterion, load_subject};
use crate::errors::{GradebookError, Result};
use crate::models::grade_criteria::{
    entities::GradeCriterion,
    requests::{CreateGradeCriterionRequest, UpdateGradeCriterionRequest},
    responses::GradeCriterionUsage,
};

pub async fn list_criteria(
    service: &SubjectService,
    subject_id: Uuid,
) -> Result<Vec<GradeCriterionUsage>> {
    let storage = service.storage();
    load_subject(storage, subject_id).await?;

    let criteria = storage
        .grade_criteria
        .find(|c| c.subject_id == subject_id)
        .await?;
    let grades = storage.grades.find(|g| g.subject_id == subject_id).await?;

    Ok(criteria
        .into_iter()
        .map(|criterion| {
            let grade_count = grades
                .iter()
                .filter(|g| g.criterion_id == criterion.id)
                .count();
            GradeCriterionUsage {
                criterion,
                grade_count,
            }
        })
        .collect())
}

pub async fn add_criterion(
    service: &SubjectService,
    subject_id: Uuid,
    req: CreateGradeCriterionRequest,
) -> Result<GradeCriterion> {
    let storage = service.storage();

    let criterion = GradeCriterion::new(req.name.trim(), req.max_points, subject_id);
    criterion.validate()?;
    let subject = load_subject(storage, subject_id).await?;

    if !storage.grade_criteria.save(criterion.clone()).await? {
        return Err(GradebookError::storage_operation(format!(
            "criterion id {} already exists",
            criterion.id
        )));
    }

    info!(
        "Added criterion {} ({} pts) to subject {}",
        criterion.name, criterion.max_points, subject.name
    );
    Ok(criterion)
}

pub async fn update_criterion(
    service: &SubjectService,
    criterion_id: Uuid,
    update: UpdateGradeCriterionRequest,
) -> Result<GradeCriterion> {
    let storage = service.storage();
    let mut criterion = load_criterion(storage, criterion_id).await?;

    if let Some(name) = update.name {
        criterion.name = name.trim().to_string();
    }
    if let Some(max_points) = update.max_points {
        criterion.max_points = max_points;
    }
    criterion.validate()?;

    // 已录入成绩不能超过新的满分
    if update.max_points.is_some() {
        let limit = f64::from(criterion.max_points);
        let exceeding = storage
            .grades
            .exists(|g| g.criterion_id == criterion_id && g.value > limit)
            .await?;
        if exceeding {
            return Err(GradebookError::validation(
                "gradeCriterion.maxPoints.belowExistingGrade",
            ));
        }
    }

    criterion.updated_at = Utc::now();
    if !storage.grade_criteria.update(criterion.clone()).await? {
        return Err(GradebookError::not_found("gradeCriterion.notFound"));
    }

    info!("Updated criterion {}", criterion.id);
    Ok(criterion)
}

pub async fn delete_criterion(service: &SubjectService, criterion_id: Uuid) -> Result<()> {
    let storage = service.storage();
    let criterion = load_criterion(storage, criterion_id).await?;

    let grades = storage
        .grades
        .count(|g| g.criterion_id == criterion_id)
        .await?;
    if grades > 0 {
        debug!(
            "Refusing to delete criterion {} referenced by {} grade(s)",
            criterion.name, grades
        );
        return Err(GradebookError::dependency_conflict(
            "gradeCriterion.delete.hasGrades",
        ));
    }

    if !storage.grade_criteria.delete(criterion_id).await? {
        return Err(GradebookError::not_found("gradeCriterion.notFound"));
    }

    info!("Deleted criterion {} ({})", criterion.id, criterion.name);
    Ok(())
}
