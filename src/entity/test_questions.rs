//! 测验题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_test_id: i64,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    #[sea_orm(column_type = "Text")]
    pub correct_answer: String,
    pub score: i32,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher_tests::Entity",
        from = "Column::TeacherTestId",
        to = "super::teacher_tests::Column::Id"
    )]
    TeacherTest,
    #[sea_orm(has_many = "super::student_test_answers::Entity")]
    Answers,
}

impl Related<super::teacher_tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherTest.def()
    }
}

impl Related<super::student_test_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
