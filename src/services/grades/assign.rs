use tracing::{debug, info};

use super::{GradeService, check_against_criterion};
use crate::errors::{GradebookError, Result};
use crate::models::grades::{entities::Grade, requests::AssignGradeRequest};
use crate::services::students::load_student;
use crate::services::subjects::{load_criterion, load_subject};
use crate::utils::{require_id, trimmed_option};

pub async fn assign_grade(service: &GradeService, req: AssignGradeRequest) -> Result<Grade> {
    let storage = service.storage();

    require_id(req.subject_id, "grade.subject.required")?;
    require_id(req.criterion_id, "grade.criterion.required")?;
    require_id(req.student_id, "grade.student.required")?;

    // 引用的实体必须存在
    let subject = load_subject(storage, req.subject_id).await?;
    let criterion = load_criterion(storage, req.criterion_id).await?;
    let student = load_student(storage, req.student_id).await?;

    if criterion.subject_id != subject.id {
        return Err(GradebookError::validation("grade.criterion.subjectMismatch"));
    }
    check_against_criterion(req.value, &criterion)?;

    // 每名学生每个评分标准只保留一条成绩
    let duplicate = storage
        .grades
        .exists(|g| g.student_id == student.id && g.criterion_id == criterion.id)
        .await?;
    if duplicate {
        debug!(
            "Student {} already graded for criterion {}",
            student.album, criterion.name
        );
        return Err(GradebookError::validation("grade.duplicate"));
    }

    let mut grade = Grade::new(subject.id, criterion.id, student.id, req.value);
    grade.comment = trimmed_option(req.comment);

    if !storage.grades.save(grade.clone()).await? {
        return Err(GradebookError::storage_operation(format!(
            "grade id {} already exists",
            grade.id
        )));
    }

    info!(
        "Graded {} for {} / {}: {}",
        student.album, subject.name, criterion.name, grade.value
    );
    Ok(grade)
}
