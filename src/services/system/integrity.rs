use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

use super::IntegrityService;
use crate::errors::Result;
use crate::models::system::responses::{CollectionCounts, IntegrityIssue, IntegrityReport};
use crate::storage::Record;

fn invalid_records<T: Record>(records: &[T], issues: &mut Vec<IntegrityIssue>) {
    for record in records {
        if let Err(e) = record.validate() {
            issues.push(IntegrityIssue {
                collection: T::COLLECTION,
                record_id: record.id(),
                problem: e.message().to_string(),
            });
        }
    }
}

fn ids<T: Record>(records: &[T]) -> HashSet<Uuid> {
    records.iter().map(|r| r.id()).collect()
}

// 空 id 由校验负责，这里只报告指向不存在记录的引用
fn dangling<T: Record>(
    record: &T,
    field: &str,
    target: Uuid,
    known: &HashSet<Uuid>,
    issues: &mut Vec<IntegrityIssue>,
) {
    if !target.is_nil() && !known.contains(&target) {
        issues.push(IntegrityIssue {
            collection: T::COLLECTION,
            record_id: record.id(),
            problem: format!("{field}.dangling"),
        });
    }
}

pub async fn check(service: &IntegrityService) -> Result<IntegrityReport> {
    let storage = service.storage();

    let students = storage.students.get_all().await?;
    let groups = storage.student_groups.get_all().await?;
    let subjects = storage.subjects.get_all().await?;
    let criteria = storage.grade_criteria.get_all().await?;
    let grades = storage.grades.get_all().await?;
    let assignments = storage.assignments.get_all().await?;

    let counts = CollectionCounts {
        students: students.len(),
        student_groups: groups.len(),
        subjects: subjects.len(),
        grade_criteria: criteria.len(),
        grades: grades.len(),
        assignments: assignments.len(),
    };

    let mut invalid = Vec::new();
    invalid_records(&students, &mut invalid);
    invalid_records(&groups, &mut invalid);
    invalid_records(&subjects, &mut invalid);
    invalid_records(&criteria, &mut invalid);
    invalid_records(&grades, &mut invalid);
    invalid_records(&assignments, &mut invalid);

    let student_ids = ids(&students);
    let group_ids = ids(&groups);
    let subject_ids = ids(&subjects);
    let criterion_ids = ids(&criteria);

    let mut refs = Vec::new();
    for s in &students {
        if let Some(group_id) = s.group_id {
            dangling(s, "group_id", group_id, &group_ids, &mut refs);
        }
    }
    for c in &criteria {
        dangling(c, "subject_id", c.subject_id, &subject_ids, &mut refs);
    }
    for g in &grades {
        dangling(g, "subject_id", g.subject_id, &subject_ids, &mut refs);
        dangling(g, "criterion_id", g.criterion_id, &criterion_ids, &mut refs);
        dangling(g, "student_id", g.student_id, &student_ids, &mut refs);
    }
    for a in &assignments {
        dangling(a, "student_group_id", a.student_group_id, &group_ids, &mut refs);
        dangling(a, "subject_id", a.subject_id, &subject_ids, &mut refs);
    }

    let report = IntegrityReport {
        system_name: service.system_name().to_string(),
        counts,
        invalid_records: invalid,
        dangling_references: refs,
    };

    if report.is_clean() {
        info!("Integrity check passed: {:?}", report.counts);
    } else {
        warn!(
            "Integrity check found {} invalid record(s) and {} dangling reference(s)",
            report.invalid_records.len(),
            report.dangling_references.len()
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::assignments::entities::StudentGroupSubjectAssignment;
    use crate::models::grade_criteria::entities::GradeCriterion;
    use crate::models::grades::entities::Grade;
    use crate::models::student_groups::entities::StudentGroup;
    use crate::models::students::entities::Student;
    use crate::models::subjects::entities::Subject;
    use crate::storage::{Dao, MemoryHandler, Storage, codec};

    #[tokio::test]
    async fn test_empty_storage_is_clean() {
        let svc = IntegrityService::new(Arc::new(Storage::in_memory()), "Gradebook");
        let report = svc.check().await.unwrap();
        assert!(report.is_clean());
        assert_eq!(report.counts, CollectionCounts::default());
        assert_eq!(report.system_name, "Gradebook");
    }

    #[tokio::test]
    async fn test_consistent_data_is_clean() {
        let storage = Arc::new(Storage::in_memory());
        let group = StudentGroup::new("INF-1", "Informatics", None);
        let subject = Subject::new("Algebra");
        let criterion = GradeCriterion::new("Exam", 50, subject.id);
        let student = Student::new("Anna", "Nowak", "s1", Some(group.id));
        let grade = Grade::new(subject.id, criterion.id, student.id, 40.0);
        storage.student_groups.save(group.clone()).await.unwrap();
        storage.subjects.save(subject.clone()).await.unwrap();
        storage.grade_criteria.save(criterion).await.unwrap();
        storage.students.save(student).await.unwrap();
        storage.grades.save(grade).await.unwrap();
        storage
            .assignments
            .save(StudentGroupSubjectAssignment::new(group.id, subject.id))
            .await
            .unwrap();

        let report = IntegrityService::new(storage, "Gradebook")
            .check()
            .await
            .unwrap();
        assert!(report.is_clean());
        assert_eq!(report.counts.students, 1);
        assert_eq!(report.counts.grades, 1);
        assert_eq!(report.counts.assignments, 1);
    }

    #[tokio::test]
    async fn test_reports_dangling_references() {
        let storage = Arc::new(Storage::in_memory());
        let subject = Subject::new("Algebra");
        storage.subjects.save(subject.clone()).await.unwrap();
        let student = Student::new("Anna", "Nowak", "s1", Some(Uuid::new_v4()));
        storage.students.save(student.clone()).await.unwrap();
        let grade = Grade::new(subject.id, Uuid::new_v4(), student.id, 10.0);
        storage.grades.save(grade.clone()).await.unwrap();

        let report = IntegrityService::new(storage, "Gradebook")
            .check()
            .await
            .unwrap();
        assert!(report.invalid_records.is_empty());
        assert_eq!(
            report.dangling_references,
            vec![
                IntegrityIssue {
                    collection: "students",
                    record_id: student.id,
                    problem: "group_id.dangling".into(),
                },
                IntegrityIssue {
                    collection: "grades",
                    record_id: grade.id,
                    problem: "criterion_id.dangling".into(),
                },
            ]
        );
        assert!(!report.is_clean());
    }

    #[tokio::test]
    async fn test_reports_records_failing_validation() {
        // 绕过 DAO 直接写入非法记录
        let mut bad = Subject::new("Algebra");
        bad.name = "  ".into();
        let bytes = codec::encode(std::slice::from_ref(&bad), false).unwrap();
        let mut storage = Storage::in_memory();
        storage.subjects = Dao::new(Arc::new(MemoryHandler::<Subject>::from_bytes(bytes)));

        let report = IntegrityService::new(Arc::new(storage), "Gradebook")
            .check()
            .await
            .unwrap();
        assert_eq!(report.counts.subjects, 1);
        assert_eq!(
            report.invalid_records,
            vec![IntegrityIssue {
                collection: "subjects",
                record_id: bad.id,
                problem: "subject.name.required".into(),
            }]
        );
    }
}
