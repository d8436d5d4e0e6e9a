use uuid::Uuid;

use super::GradeService;
use crate::errors::Result;
use crate::models::grades::{entities::Grade, responses::GradeDetail};
use crate::services::students::load_student;
use crate::services::subjects::load_subject;

pub async fn list_for_student(service: &GradeService, student_id: Uuid) -> Result<Vec<GradeDetail>> {
    let storage = service.storage();
    load_student(storage, student_id).await?;

    let grades = storage.grades.find(|g| g.student_id == student_id).await?;
    let subjects = storage.subjects.get_all().await?;
    let criteria = storage.grade_criteria.get_all().await?;

    let mut details: Vec<GradeDetail> = grades
        .into_iter()
        .map(|grade| {
            let subject = subjects.iter().find(|s| s.id == grade.subject_id);
            let criterion = criteria.iter().find(|c| c.id == grade.criterion_id);
            GradeDetail::from_grade(
                grade,
                subject.map(|s| s.name.clone()),
                criterion.map(|c| c.name.clone()),
                criterion.map(|c| c.max_points),
            )
        })
        .collect();

    details.sort_by(|a, b| {
        (&a.subject_name, &a.criterion_name).cmp(&(&b.subject_name, &b.criterion_name))
    });
    Ok(details)
}

pub async fn list_for_subject(service: &GradeService, subject_id: Uuid) -> Result<Vec<Grade>> {
    let storage = service.storage();
    load_subject(storage, subject_id).await?;
    storage.grades.find(|g| g.subject_id == subject_id).await
}
