pub mod access;
pub mod caller;
pub mod courses;
pub mod grades;
pub mod system;
pub mod teacher_tests;

#[cfg(test)]
pub(crate) mod test_support;

pub use courses::CourseService;
pub use grades::GradeService;
pub use system::SystemService;
pub use teacher_tests::TestService;
