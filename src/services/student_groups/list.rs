use super::StudentGroupService;
use crate::errors::Result;
use crate::models::student_groups::responses::StudentGroupListItem;

pub async fn list_groups(service: &StudentGroupService) -> Result<Vec<StudentGroupListItem>> {
    let storage = service.storage();
    let students = storage.students.get_all().await?;

    let mut groups = storage.student_groups.get_all().await?;
    groups.sort_by_cached_key(|g| g.code.to_lowercase());

    Ok(groups
        .into_iter()
        .map(|group| {
            let member_count = students
                .iter()
                .filter(|s| s.group_id == Some(group.id))
                .count();
            StudentGroupListItem {
                group,
                member_count,
            }
        })
        .collect())
}
