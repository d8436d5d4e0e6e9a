use tracing::info;
use uuid::Uuid;

use super::StudentService;
use crate::errors::{GradebookError, Result};

pub async fn delete_student(service: &StudentService, student_id: Uuid) -> Result<()> {
    let storage = service.storage();

    if storage.students.get(student_id).await?.is_none() {
        return Err(GradebookError::not_found("student.notFound"));
    }

    // 先删成绩，避免留下悬空引用
    let removed = storage
        .grades
        .delete_where(|g| g.student_id == student_id)
        .await?;

    if !storage.students.delete(student_id).await? {
        return Err(GradebookError::not_found("student.notFound"));
    }

    info!("Deleted student {} and {} grade(s)", student_id, removed);
    Ok(())
}
