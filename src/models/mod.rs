pub mod common;
pub mod courses;
pub mod grades;
pub mod system;
pub mod teacher_tests;
pub mod users;

pub use common::{
    ApiResponse, CourseId, ErrorCode, GradeId, Payload, StudentTestId, SubjectId, TeacherTestId,
    UserId,
};
pub use system::entities::AppStartTime;
