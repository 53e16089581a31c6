//! 成绩存储操作

use super::SeaOrmSession;
use crate::entity::{
    courses, from_unix,
    grades::{self, Column, Entity as Grades},
    student_test_answers::{self, Entity as StudentTestAnswers},
    student_tests, subjects, teacher_tests, test_questions,
};
use crate::errors::{PortalError, Result};
use crate::models::{
    CourseId, GradeId, StudentTestId, TeacherTestId, UserId,
    grades::entities::{Grade, GradeDetail, GradeSummary},
};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

#[derive(Debug, FromQueryResult)]
struct GradeSummaryRow {
    grade_id: i64,
    student_user_id: i64,
    teacher_test_id: i64,
    score: f64,
    comment: Option<String>,
    test_title: String,
    subject_name: String,
    scheduled_at: i64,
    duration_minutes: i32,
}

impl From<GradeSummaryRow> for GradeSummary {
    fn from(row: GradeSummaryRow) -> Self {
        GradeSummary {
            grade_id: GradeId(row.grade_id),
            student_user_id: UserId(row.student_user_id),
            teacher_test_id: TeacherTestId(row.teacher_test_id),
            score: row.score,
            comment: row.comment,
            test_title: row.test_title,
            subject_name: row.subject_name,
            scheduled_at: from_unix(row.scheduled_at),
            duration_minutes: row.duration_minutes,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct GradeDetailRow {
    test_question_id: i64,
    question_text: String,
    student_answer: String,
    is_correct: bool,
    score: i32,
}

impl From<GradeDetailRow> for GradeDetail {
    fn from(row: GradeDetailRow) -> Self {
        GradeDetail {
            test_question_id: row.test_question_id,
            question_text: row.question_text,
            student_answer: row.student_answer,
            is_correct: row.is_correct,
            score: row.score,
        }
    }
}

impl SeaOrmSession {
    /// 成绩概要：成绩 → 答卷 → 测验，成绩 → 课程 → 教科，任一环节缺失或已删除即为空
    pub async fn grade_summary_impl(&self, grade_id: GradeId) -> Result<Option<GradeSummary>> {
        let row = Grades::find()
            .select_only()
            .column_as(Column::Id, "grade_id")
            .column_as(Column::StudentUserId, "student_user_id")
            .column_as(student_tests::Column::TeacherTestId, "teacher_test_id")
            .column_as(Column::Score, "score")
            .column_as(Column::Comment, "comment")
            .column_as(teacher_tests::Column::Title, "test_title")
            .column_as(subjects::Column::Name, "subject_name")
            .column_as(teacher_tests::Column::ScheduledAt, "scheduled_at")
            .column_as(teacher_tests::Column::DurationMinutes, "duration_minutes")
            .join(JoinType::InnerJoin, grades::Relation::StudentTest.def())
            .join(JoinType::InnerJoin, student_tests::Relation::TeacherTest.def())
            .join(JoinType::InnerJoin, grades::Relation::Course.def())
            .join(JoinType::InnerJoin, courses::Relation::Subject.def())
            .filter(Column::Id.eq(grade_id.get()))
            .filter(Column::IsDeleted.eq(false))
            .filter(student_tests::Column::IsDeleted.eq(false))
            .filter(teacher_tests::Column::IsDeleted.eq(false))
            .filter(courses::Column::IsDeleted.eq(false))
            .filter(subjects::Column::IsDeleted.eq(false))
            .into_model::<GradeSummaryRow>()
            .one(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩概要失败: {e}")))?;

        Ok(row.map(GradeSummary::from))
    }

    /// 答卷逐题明细，按明细 ID 升序
    pub async fn grade_details_impl(
        &self,
        student_test_id: StudentTestId,
    ) -> Result<Vec<GradeDetail>> {
        let rows = StudentTestAnswers::find()
            .select_only()
            .column_as(test_questions::Column::Id, "test_question_id")
            .column_as(test_questions::Column::QuestionText, "question_text")
            .column_as(student_test_answers::Column::StudentAnswer, "student_answer")
            .column_as(student_test_answers::Column::IsCorrect, "is_correct")
            .column_as(student_test_answers::Column::Score, "score")
            .join(
                JoinType::InnerJoin,
                student_test_answers::Relation::TestQuestion.def(),
            )
            .filter(student_test_answers::Column::StudentTestId.eq(student_test_id.get()))
            .filter(student_test_answers::Column::IsDeleted.eq(false))
            .order_by_asc(student_test_answers::Column::Id)
            .into_model::<GradeDetailRow>()
            .all(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩明细失败: {e}")))?;

        Ok(rows.into_iter().map(GradeDetail::from).collect())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_impl(&self, grade_id: GradeId) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id.get())
            .filter(Column::IsDeleted.eq(false))
            .one(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 检查教师是否负责该课程
    pub async fn is_teacher_of_course_impl(
        &self,
        teacher_id: UserId,
        course_id: CourseId,
    ) -> Result<bool> {
        let count = courses::Entity::find_by_id(course_id.get())
            .filter(courses::Column::TeacherUserId.eq(teacher_id.get()))
            .filter(courses::Column::IsDeleted.eq(false))
            .count(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(count > 0)
    }
}
