use tracing::info;

use super::{SubjectService, ensure_name_unique};
use crate::errors::{GradebookError, Result};
use crate::models::subjects::{entities::Subject, requests::CreateSubjectRequest};

pub async fn create_subject(service: &SubjectService, req: CreateSubjectRequest) -> Result<Subject> {
    let storage = service.storage();

    let subject = Subject::new(req.name.trim());
    subject.validate()?;
    ensure_name_unique(storage, &subject.name, None).await?;

    if !storage.subjects.save(subject.clone()).await? {
        return Err(GradebookError::storage_operation(format!(
            "subject id {} already exists",
            subject.id
        )));
    }

    info!("Created subject {} ({})", subject.id, subject.name);
    Ok(subject)
}
