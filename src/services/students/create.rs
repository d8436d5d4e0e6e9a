use tracing::{debug, info};

use super::{StudentService, ensure_album_unique};
use crate::errors::{GradebookError, Result};
use crate::models::students::{
    entities::Student, requests::CreateStudentRequest, responses::StudentResponse,
};

pub async fn create_student(
    service: &StudentService,
    req: CreateStudentRequest,
) -> Result<StudentResponse> {
    let storage = service.storage();

    let student = Student::new(
        req.first_name.trim(),
        req.last_name.trim(),
        req.album.trim(),
        req.group_id,
    );
    student.validate()?;
    ensure_album_unique(storage, &student.album, None).await?;

    // 初始学生组必须存在
    let group = match req.group_id {
        Some(group_id) => Some(
            storage
                .student_groups
                .get(group_id)
                .await?
                .ok_or_else(|| GradebookError::not_found("studentGroup.notFound"))?,
        ),
        None => None,
    };

    if !storage.students.save(student.clone()).await? {
        debug!("Generated student id {} already taken", student.id);
        return Err(GradebookError::storage_operation(format!(
            "student id {} already exists",
            student.id
        )));
    }

    info!("Created student {} (album {})", student.id, student.album);
    Ok(StudentResponse::from_entity(student, group.as_ref()))
}
