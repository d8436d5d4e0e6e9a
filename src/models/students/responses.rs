use serde::Serialize;
use uuid::Uuid;

use super::entities::Student;
use crate::models::common::PaginationInfo;
use crate::models::student_groups::entities::StudentGroup;

// 学生及其所属组摘要
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub album: String,
    pub group: Option<GroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub id: Uuid,
    pub code: String,
}

impl StudentResponse {
    /// `group` 为已解析的所属组；组已不存在时为 None
    pub fn from_entity(student: Student, group: Option<&StudentGroup>) -> Self {
        Self {
            full_name: student.full_name(),
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            album: student.album,
            group: group.map(|g| GroupSummary {
                id: g.id,
                code: g.code.clone(),
            }),
        }
    }
}

// 学生列表响应
#[derive(Debug, Clone, Serialize)]
pub struct StudentListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<StudentResponse>,
}
