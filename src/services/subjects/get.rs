use uuid::Uuid;

use super::{SubjectService, load_subject};
use crate::errors::Result;
use crate::models::subjects::{entities::Subject, responses::SubjectWithCriteria};

pub async fn list_subjects(service: &SubjectService) -> Result<Vec<Subject>> {
    let mut subjects = service.storage().subjects.get_all().await?;
    subjects.sort_by_cached_key(|s| s.name.to_lowercase());
    Ok(subjects)
}

pub async fn get_subject(service: &SubjectService, subject_id: Uuid) -> Result<Subject> {
    load_subject(service.storage(), subject_id).await
}

pub async fn get_subject_with_criteria(
    service: &SubjectService,
    subject_id: Uuid,
) -> Result<SubjectWithCriteria> {
    let storage = service.storage();
    let subject = load_subject(storage, subject_id).await?;
    let criteria = storage
        .grade_criteria
        .find(|c| c.subject_id == subject_id)
        .await?;
    Ok(SubjectWithCriteria::new(subject, criteria))
}
