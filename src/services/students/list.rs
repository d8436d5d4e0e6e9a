use super::StudentService;
use crate::errors::Result;
use crate::models::{
    common::paginate,
    students::{
        entities::Student,
        requests::StudentListQuery,
        responses::{StudentListResponse, StudentResponse},
    },
};
use crate::utils::{contains_normalized, normalize};

pub async fn list_students(
    service: &StudentService,
    query: StudentListQuery,
) -> Result<StudentListResponse> {
    let storage = service.storage();

    let needle = query
        .search
        .as_deref()
        .map(normalize)
        .filter(|n| !n.is_empty());

    let mut students = storage
        .students
        .find(|s| {
            // 学生组筛选
            if query.ungrouped_only && s.group_id.is_some() {
                return false;
            }
            if let Some(group_id) = query.group_id
                && s.group_id != Some(group_id)
            {
                return false;
            }
            // 搜索条件
            needle.as_deref().is_none_or(|n| matches_search(s, n))
        })
        .await?;
    sort_students(&mut students);

    let groups = storage.student_groups.get_all().await?;
    let page = paginate(students, query.page, query.size);

    let items = page
        .items
        .into_iter()
        .map(|s| {
            let group = s
                .group_id
                .and_then(|gid| groups.iter().find(|g| g.id == gid));
            StudentResponse::from_entity(s, group)
        })
        .collect();

    Ok(StudentListResponse {
        pagination: page.pagination,
        items,
    })
}

pub async fn search_students(service: &StudentService, text: &str) -> Result<Vec<StudentResponse>> {
    let query = StudentListQuery {
        search: Some(text.to_string()),
        ..Default::default()
    };
    Ok(list_students(service, query).await?.items)
}

/// 全名、名、姓、学号任一包含关键字即匹配，`needle` 已 normalize
pub fn matches_search(student: &Student, needle: &str) -> bool {
    contains_normalized(&student.full_name(), needle)
        || contains_normalized(&student.first_name, needle)
        || contains_normalized(&student.last_name, needle)
        || contains_normalized(&student.album, needle)
}

/// 按姓、名、学号排序
pub fn sort_students(students: &mut [Student]) {
    students.sort_by_cached_key(|s| {
        (
            s.last_name.to_lowercase(),
            s.first_name.to_lowercase(),
            s.album.to_lowercase(),
        )
    });
}
