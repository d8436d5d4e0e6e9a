use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{StudentService, ensure_album_unique, load_student, to_response};
use crate::errors::{GradebookError, Result};
use crate::models::students::{requests::UpdateStudentRequest, responses::StudentResponse};

pub async fn update_student(
    service: &StudentService,
    student_id: Uuid,
    update: UpdateStudentRequest,
) -> Result<StudentResponse> {
    let storage = service.storage();
    let mut student = load_student(storage, student_id).await?;

    if let Some(first_name) = update.first_name {
        student.first_name = first_name.trim().to_string();
    }
    if let Some(last_name) = update.last_name {
        student.last_name = last_name.trim().to_string();
    }
    let album_changed = match update.album {
        Some(album) => {
            student.album = album.trim().to_string();
            true
        }
        None => false,
    };

    student.validate()?;
    if album_changed {
        ensure_album_unique(storage, &student.album, Some(student.id)).await?;
    }

    student.updated_at = Utc::now();
    if !storage.students.update(student.clone()).await? {
        return Err(GradebookError::not_found("student.notFound"));
    }

    info!("Updated student {}", student.id);
    to_response(storage, student).await
}
