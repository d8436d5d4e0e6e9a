use uuid::Uuid;

use super::{StudentService, load_student, to_response};
use crate::errors::Result;
use crate::models::students::responses::StudentResponse;

pub async fn get_student(service: &StudentService, student_id: Uuid) -> Result<StudentResponse> {
    let storage = service.storage();
    let student = load_student(storage, student_id).await?;
    to_response(storage, student).await
}
