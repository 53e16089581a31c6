//! 教师测验实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_tests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub duration_minutes: i32,
    pub course_id: i64,
    pub created_by: i64,
    pub is_draft: bool,
    pub scheduled_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::student_tests::Entity")]
    StudentTests,
    #[sea_orm(has_many = "super::test_questions::Entity")]
    TestQuestions,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::student_tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTests.def()
    }
}

impl Related<super::test_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
