//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_test_id: i64,
    pub student_user_id: i64,
    pub course_id: i64,
    pub score: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub submitted_at: Option<i64>,
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
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentUserId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::student_tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTest.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        use crate::models::grades::entities::Grade;
        use crate::models::{CourseId, GradeId, StudentTestId, UserId};

        Grade {
            id: GradeId(self.id),
            student_test_id: StudentTestId(self.student_test_id),
            student_user_id: UserId(self.student_user_id),
            course_id: CourseId(self.course_id),
            score: self.score,
            comment: self.comment,
            submitted_at: self.submitted_at.map(super::from_unix),
        }
    }
}
