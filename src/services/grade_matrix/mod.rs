//! 成绩矩阵查询
//!
//! 行为学生组内学生，列为课程评分标准，单元格为已录入成绩。

pub mod build;
pub mod export;

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::grade_matrix::responses::GradeMatrix;
use crate::storage::Storage;

pub struct GradeQueryService {
    storage: Arc<Storage>,
}

impl GradeQueryService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    pub async fn build_matrix(&self, subject_id: Uuid, group_id: Uuid) -> Result<GradeMatrix> {
        build::build_matrix(self, subject_id, group_id).await
    }

    // 导出为 CSV 文本
    pub async fn export_csv(&self, subject_id: Uuid, group_id: Uuid) -> Result<String> {
        let matrix = self.build_matrix(subject_id, group_id).await?;
        export::matrix_to_csv(&matrix)
    }
}
