use crate::errors::{GradebookError, Result};
use crate::models::grade_matrix::responses::GradeMatrix;

/// 成绩矩阵转 CSV：学号、姓、名、各评分标准、总分
pub fn matrix_to_csv(matrix: &GradeMatrix) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![
        "album".to_string(),
        "last_name".to_string(),
        "first_name".to_string(),
    ];
    header.extend(matrix.columns.iter().map(|c| c.name.clone()));
    header.push("total".to_string());
    writer.write_record(&header)?;

    for row in &matrix.rows {
        let mut record = vec![
            row.student.album.clone(),
            row.student.last_name.clone(),
            row.student.first_name.clone(),
        ];
        record.extend(
            row.cells
                .iter()
                .map(|cell| cell.as_ref().map(|c| c.value.to_string()).unwrap_or_default()),
        );
        record.push(row.total.to_string());
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GradebookError::export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| GradebookError::export(e.to_string()))
}
