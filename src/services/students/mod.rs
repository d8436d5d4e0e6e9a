pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod membership;
pub mod update;

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{GradebookError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    responses::{StudentListResponse, StudentResponse},
};
use crate::storage::Storage;
use crate::utils::normalize;

pub struct StudentService {
    storage: Arc<Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    // 获取学生列表（过滤、搜索、分页）
    pub async fn list_students(&self, query: StudentListQuery) -> Result<StudentListResponse> {
        list::list_students(self, query).await
    }

    // 按姓名或学号模糊搜索
    pub async fn search_students(&self, text: &str) -> Result<Vec<StudentResponse>> {
        list::search_students(self, text).await
    }

    // 根据 ID 获取学生
    pub async fn get_student(&self, student_id: Uuid) -> Result<StudentResponse> {
        get::get_student(self, student_id).await
    }

    pub async fn create_student(&self, req: CreateStudentRequest) -> Result<StudentResponse> {
        create::create_student(self, req).await
    }

    // 部分更新学生信息
    pub async fn update_student(
        &self,
        student_id: Uuid,
        update: UpdateStudentRequest,
    ) -> Result<StudentResponse> {
        update::update_student(self, student_id, update).await
    }

    // 删除学生及其成绩
    pub async fn delete_student(&self, student_id: Uuid) -> Result<()> {
        delete::delete_student(self, student_id).await
    }

    // 将学生分入学生组
    pub async fn assign_group(&self, student_id: Uuid, group_id: Uuid) -> Result<StudentResponse> {
        membership::assign_group(self, student_id, group_id).await
    }

    // 将学生移出所在学生组
    pub async fn remove_from_group(&self, student_id: Uuid) -> Result<StudentResponse> {
        membership::remove_from_group(self, student_id).await
    }
}

/// 学号唯一性检查（大小写不敏感），`exclude` 为正在更新的学生
pub(crate) async fn ensure_album_unique(
    storage: &Storage,
    album: &str,
    exclude: Option<Uuid>,
) -> Result<()> {
    let wanted = normalize(album);
    let taken = storage
        .students
        .exists(|s| Some(s.id) != exclude && normalize(&s.album) == wanted)
        .await?;
    if taken {
        return Err(GradebookError::validation("student.album.duplicate"));
    }
    Ok(())
}

pub(crate) async fn load_student(storage: &Storage, student_id: Uuid) -> Result<Student> {
    storage
        .students
        .get(student_id)
        .await?
        .ok_or_else(|| GradebookError::not_found("student.notFound"))
}

/// 组装响应，解析所属学生组
pub(crate) async fn to_response(storage: &Storage, student: Student) -> Result<StudentResponse> {
    let group = match student.group_id {
        Some(group_id) => storage.student_groups.get(group_id).await?,
        None => None,
    };
    Ok(StudentResponse::from_entity(student, group.as_ref()))
}
