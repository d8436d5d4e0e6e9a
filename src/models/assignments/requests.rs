use serde::Deserialize;
use uuid::Uuid;

// 为学生组指派课程
#[derive(Debug, Clone, Deserialize)]
pub struct AssignSubjectRequest {
    pub student_group_id: Uuid,
    pub subject_id: Uuid,
}
