use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, StorageBackend};
use crate::errors::Result;
use crate::services::{
    AssignmentService, GradeQueryService, GradeService, IntegrityService, StudentGroupService,
    StudentService, SubjectService,
};
use crate::storage::{Storage, create_storage};

/// 应用上下文
///
/// 存储和全部服务在启动时构建一次，之后以引用方式传递。
pub struct AppContext {
    pub config: AppConfig,
    pub storage: Arc<Storage>,
    pub students: StudentService,
    pub groups: StudentGroupService,
    pub subjects: SubjectService,
    pub grades: GradeService,
    pub grade_matrix: GradeQueryService,
    pub assignments: AssignmentService,
    pub integrity: IntegrityService,
}

impl AppContext {
    /// 在已有存储之上构建服务
    pub fn with_storage(config: AppConfig, storage: Arc<Storage>) -> Self {
        let integrity = IntegrityService::new(storage.clone(), config.app.system_name.clone());
        Self {
            students: StudentService::new(storage.clone()),
            groups: StudentGroupService::new(storage.clone()),
            subjects: SubjectService::new(storage.clone()),
            grades: GradeService::new(storage.clone()),
            grade_matrix: GradeQueryService::new(storage.clone()),
            assignments: AssignmentService::new(storage.clone()),
            integrity,
            storage,
            config,
        }
    }
}

/// 准备启动上下文
/// 包括存储后端和各业务服务
pub async fn prepare_startup(config: &AppConfig) -> Result<AppContext> {
    if config.is_production() && config.storage.backend == StorageBackend::Memory {
        warn!("In-memory storage selected in production, all data is lost on exit");
    }

    let storage = create_storage(&config.storage).await?;
    info!("Storage backend initialized ({:?})", config.storage.backend);

    let context = AppContext::with_storage(config.clone(), storage);
    debug!("Services ready for {}", context.config.app.system_name);
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student_groups::requests::CreateStudentGroupRequest;
    use crate::models::students::requests::CreateStudentRequest;

    #[tokio::test]
    async fn test_memory_context_shares_storage() {
        let ctx = prepare_startup(&AppConfig::for_memory()).await.unwrap();
        let group = ctx
            .groups
            .create_group(CreateStudentGroupRequest {
                code: "INF-1".into(),
                specialization: "Informatics".into(),
                description: None,
            })
            .await
            .unwrap();
        ctx.students
            .create_student(CreateStudentRequest {
                first_name: "Anna".into(),
                last_name: "Nowak".into(),
                album: "s1".into(),
                group_id: Some(group.id),
            })
            .await
            .unwrap();

        let detail = ctx.groups.get_group_with_members(group.id).await.unwrap();
        assert_eq!(detail.members.len(), 1);

        let report = ctx.integrity.check().await.unwrap();
        assert!(report.is_clean());
        assert_eq!(report.counts.students, 1);
        assert_eq!(report.counts.student_groups, 1);
    }

    #[tokio::test]
    async fn test_file_context_persists_between_startups() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::for_memory();
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = dir.path().to_string_lossy().into_owned();

        let ctx = prepare_startup(&config).await.unwrap();
        ctx.groups
            .create_group(CreateStudentGroupRequest {
                code: "INF-1".into(),
                specialization: "Informatics".into(),
                description: None,
            })
            .await
            .unwrap();
        drop(ctx);

        let reopened = prepare_startup(&config).await.unwrap();
        let groups = reopened.groups.list_groups().await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group.code, "INF-1");
    }
}
