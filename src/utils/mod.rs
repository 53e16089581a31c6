pub mod extractor;
pub mod parameter_error_handler;

pub use extractor::{CallerId, SafeCourseId, SafeGradeId, USER_ID_HEADER};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
