use serde::Serialize;
use uuid::Uuid;

use crate::models::grade_criteria::entities::GradeCriterion;
use crate::models::student_groups::entities::StudentGroup;
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;

// 成绩矩阵单元格
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCell {
    pub grade_id: Uuid,
    pub value: f64,
}

// 成绩矩阵行：一名学生
#[derive(Debug, Clone, Serialize)]
pub struct GradeMatrixRow {
    pub student: Student,
    // 与 columns 一一对应，未录入为 None
    pub cells: Vec<Option<GradeCell>>,
    pub total: f64,
}

impl GradeMatrixRow {
    /// 按评分标准 ID 取单元格
    pub fn cell(&self, columns: &[GradeCriterion], criterion_id: Uuid) -> Option<&GradeCell> {
        columns
            .iter()
            .position(|c| c.id == criterion_id)
            .and_then(|idx| self.cells.get(idx))
            .and_then(|cell| cell.as_ref())
    }

    pub fn graded_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

// 成绩矩阵：行为学生，列为评分标准
#[derive(Debug, Clone, Serialize)]
pub struct GradeMatrix {
    pub subject: Subject,
    pub group: StudentGroup,
    pub columns: Vec<GradeCriterion>,
    pub rows: Vec<GradeMatrixRow>,
    pub max_total: i64,
}

impl GradeMatrix {
    pub fn row(&self, student_id: Uuid) -> Option<&GradeMatrixRow> {
        self.rows.iter().find(|r| r.student.id == student_id)
    }

    /// 单元格取值，便于界面层与测试读取
    pub fn value(&self, student_id: Uuid, criterion_id: Uuid) -> Option<f64> {
        self.row(student_id)
            .and_then(|r| r.cell(&self.columns, criterion_id))
            .map(|c| c.value)
    }
}
