pub mod assignments;
pub mod grade_matrix;
pub mod grades;
pub mod student_groups;
pub mod students;
pub mod subjects;
pub mod system;

pub use assignments::AssignmentService;
pub use grade_matrix::GradeQueryService;
pub use grades::GradeService;
pub use student_groups::StudentGroupService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::IntegrityService;
