//! 预导入模块，方便使用

pub use super::attendances::{Entity as Attendances, Model as AttendanceModel};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::grades::{Entity as Grades, Model as GradeModel};
pub use super::student_test_answers::{
    Entity as StudentTestAnswers, Model as StudentTestAnswerModel,
};
pub use super::student_tests::{Entity as StudentTests, Model as StudentTestModel};
pub use super::subjects::{Entity as Subjects, Model as SubjectModel};
pub use super::teacher_tests::{Entity as TeacherTests, Model as TeacherTestModel};
pub use super::test_questions::{Entity as TestQuestions, Model as TestQuestionModel};
pub use super::users::{Entity as Users, Model as UserModel};
