use tracing::{debug, info};
use uuid::Uuid;

use super::{SubjectService, load_subject};
use crate::errors::{GradebookError, Result};

pub async fn delete_subject(service: &SubjectService, subject_id: Uuid) -> Result<()> {
    let storage = service.storage();
    let subject = load_subject(storage, subject_id).await?;

    let criteria = storage
        .grade_criteria
        .count(|c| c.subject_id == subject_id)
        .await?;
    if criteria > 0 {
        debug!(
            "Refusing to delete subject {} with {} criterion(s)",
            subject.name, criteria
        );
        return Err(GradebookError::dependency_conflict(
            "subject.delete.hasCriteria",
        ));
    }

    // 先删指派关系，避免留下悬空引用
    let unassigned = storage
        .assignments
        .delete_where(|a| a.subject_id == subject_id)
        .await?;

    if !storage.subjects.delete(subject_id).await? {
        return Err(GradebookError::not_found("subject.notFound"));
    }

    info!(
        "Deleted subject {} ({}), removed {} group assignment(s)",
        subject.id, subject.name, unassigned
    );
    Ok(())
}
