use uuid::Uuid;

use super::{StudentGroupService, load_group};
use crate::errors::Result;
use crate::models::student_groups::{
    entities::StudentGroup, responses::StudentGroupWithMembers,
};
use crate::services::students::list::sort_students;

pub async fn get_group(service: &StudentGroupService, group_id: Uuid) -> Result<StudentGroup> {
    load_group(service.storage(), group_id).await
}

pub async fn get_group_with_members(
    service: &StudentGroupService,
    group_id: Uuid,
) -> Result<StudentGroupWithMembers> {
    let storage = service.storage();
    let group = load_group(storage, group_id).await?;

    let mut members = storage
        .students
        .find(|s| s.group_id == Some(group_id))
        .await?;
    sort_students(&mut members);

    Ok(StudentGroupWithMembers { group, members })
}
