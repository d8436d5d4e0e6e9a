use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{StudentService, load_student};
use crate::errors::{GradebookError, Result};
use crate::models::students::responses::StudentResponse;

pub async fn assign_group(
    service: &StudentService,
    student_id: Uuid,
    group_id: Uuid,
) -> Result<StudentResponse> {
    let storage = service.storage();
    let mut student = load_student(storage, student_id).await?;
    let group = storage
        .student_groups
        .get(group_id)
        .await?
        .ok_or_else(|| GradebookError::not_found("studentGroup.notFound"))?;

    student.group_id = Some(group.id);
    student.updated_at = Utc::now();
    if !storage.students.update(student.clone()).await? {
        return Err(GradebookError::not_found("student.notFound"));
    }

    info!("Student {} joined group {}", student.id, group.code);
    Ok(StudentResponse::from_entity(student, Some(&group)))
}

pub async fn remove_from_group(service: &StudentService, student_id: Uuid) -> Result<StudentResponse> {
    let storage = service.storage();
    let mut student = load_student(storage, student_id).await?;

    if let Some(previous) = student.group_id.take() {
        student.updated_at = Utc::now();
        if !storage.students.update(student.clone()).await? {
            return Err(GradebookError::not_found("student.notFound"));
        }
        info!("Student {} left group {}", student.id, previous);
    }

    Ok(StudentResponse::from_entity(student, None))
}
