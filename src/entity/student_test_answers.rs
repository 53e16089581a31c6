//! 学生作答明细实体（主键即成绩明细 ID）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_test_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_test_id: i64,
    pub test_question_id: i64,
    #[sea_orm(column_type = "Text")]
    pub student_answer: String,
    pub is_correct: bool,
    pub score: i32,
    pub grade_type: Option<String>,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_tests::Entity",
        from = "Column::StudentTestId",
        to = "super::student_tests::Column::Id"
    )]
    StudentTest,
    #[sea_orm(
        belongs_to = "super::test_questions::Entity",
        from = "Column::TestQuestionId",
        to = "super::test_questions::Column::Id"
    )]
    TestQuestion,
}

impl Related<super::student_tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTest.def()
    }
}

impl Related<super::test_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
