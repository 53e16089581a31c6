pub mod error_code;
pub mod ids;
pub mod payload;
pub mod response;

pub use error_code::ErrorCode;
pub use ids::{CourseId, GradeId, StudentTestId, SubjectId, TeacherTestId, UserId};
pub use payload::Payload;
pub use response::ApiResponse;
