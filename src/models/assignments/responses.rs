use serde::Serialize;
use uuid::Uuid;

use crate::models::student_groups::entities::StudentGroup;
use crate::models::subjects::entities::Subject;

// 学生组已指派的课程
#[derive(Debug, Clone, Serialize)]
pub struct AssignedSubject {
    pub assignment_id: Uuid,
    pub subject: Subject,
}

// 课程已指派的学生组
#[derive(Debug, Clone, Serialize)]
pub struct AssignedGroup {
    pub assignment_id: Uuid,
    pub group: StudentGroup,
}
