use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{SubjectService, ensure_name_unique, load_subject};
use crate::errors::{GradebookError, Result};
use crate::models::subjects::{entities::Subject, requests::UpdateSubjectRequest};

pub async fn update_subject(
    service: &SubjectService,
    subject_id: Uuid,
    update: UpdateSubjectRequest,
) -> Result<Subject> {
    let storage = service.storage();
    let mut subject = load_subject(storage, subject_id).await?;

    let Some(name) = update.name else {
        return Ok(subject);
    };

    subject.name = name.trim().to_string();
    subject.validate()?;
    ensure_name_unique(storage, &subject.name, Some(subject.id)).await?;

    subject.updated_at = Utc::now();
    if !storage.subjects.update(subject.clone()).await? {
        return Err(GradebookError::not_found("subject.notFound"));
    }

    info!("Updated subject {}", subject.id);
    Ok(subject)
}
