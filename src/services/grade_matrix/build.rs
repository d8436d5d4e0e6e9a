use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::GradeQueryService;
use crate::errors::Result;
use crate::models::grade_matrix::responses::{GradeCell, GradeMatrix, GradeMatrixRow};
use crate::services::student_groups::load_group;
use crate::services::students::list::sort_students;
use crate::services::subjects::load_subject;

pub async fn build_matrix(
    service: &GradeQueryService,
    subject_id: Uuid,
    group_id: Uuid,
) -> Result<GradeMatrix> {
    let storage = service.storage();
    let subject = load_subject(storage, subject_id).await?;
    let group = load_group(storage, group_id).await?;

    // 列：该课程的评分标准，保持录入顺序
    let columns = storage
        .grade_criteria
        .find(|c| c.subject_id == subject_id)
        .await?;

    // 行：该组学生
    let mut students = storage
        .students
        .find(|s| s.group_id == Some(group_id))
        .await?;
    sort_students(&mut students);

    // (学生, 评分标准) → 成绩；重复记录取最先写入的一条
    let mut by_cell: HashMap<(Uuid, Uuid), GradeCell> = HashMap::new();
    for grade in storage.grades.find(|g| g.subject_id == subject_id).await? {
        by_cell
            .entry((grade.student_id, grade.criterion_id))
            .or_insert(GradeCell {
                grade_id: grade.id,
                value: grade.value,
            });
    }

    let rows: Vec<GradeMatrixRow> = students
        .into_iter()
        .map(|student| {
            let cells: Vec<Option<GradeCell>> = columns
                .iter()
                .map(|c| by_cell.get(&(student.id, c.id)).cloned())
                .collect();
            // 空行总分为 +0.0
            let total = cells.iter().flatten().fold(0.0, |acc, c| acc + c.value);
            GradeMatrixRow {
                student,
                cells,
                total,
            }
        })
        .collect();

    let max_total: i64 = columns.iter().map(|c| i64::from(c.max_points)).sum();

    debug!(
        "Built grade matrix for {} / {}: {} row(s) x {} column(s)",
        subject.name,
        group.code,
        rows.len(),
        columns.len()
    );

    Ok(GradeMatrix {
        subject,
        group,
        columns,
        rows,
        max_total,
    })
}
