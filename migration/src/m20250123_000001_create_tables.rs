use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教科表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subjects::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(
                        ColumnDef::new(Courses::TeacherUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::SubjectId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Courses::ScheduledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .col(
                        ColumnDef::new(Courses::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::TeacherUserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建出席表
        manager
            .create_table(
                Table::create()
                    .table(Attendances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attendances::StudentUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendances::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendances::Status).string().not_null())
                    .col(
                        ColumnDef::new(Attendances::AttendedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendances::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::StudentUserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendances::Table, Attendances::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师测验表
        manager
            .create_table(
                Table::create()
                    .table(TeacherTests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherTests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeacherTests::Title).string().not_null())
                    .col(
                        ColumnDef::new(TeacherTests::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::IsDraft)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::ScheduledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherTests::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherTests::Table, TeacherTests::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherTests::Table, TeacherTests::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生答卷表
        manager
            .create_table(
                Table::create()
                    .table(StudentTests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentTests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentTests::TeacherTestId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentTests::StudentUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentTests::Score).double().not_null())
                    .col(ColumnDef::new(StudentTests::Comment).text().null())
                    .col(
                        ColumnDef::new(StudentTests::SubmittedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentTests::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentTests::Table, StudentTests::TeacherTestId)
                            .to(TeacherTests::Table, TeacherTests::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentTests::Table, StudentTests::StudentUserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建测验题目表
        manager
            .create_table(
                Table::create()
                    .table(TestQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestQuestions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TestQuestions::TeacherTestId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestQuestions::QuestionText)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestQuestions::CorrectAnswer)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestQuestions::Score).integer().not_null())
                    .col(
                        ColumnDef::new(TestQuestions::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestQuestions::Table, TestQuestions::TeacherTestId)
                            .to(TeacherTests::Table, TeacherTests::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生作答明细表
        manager
            .create_table(
                Table::create()
                    .table(StudentTestAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentTestAnswers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentTestAnswers::StudentTestId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentTestAnswers::TestQuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentTestAnswers::StudentAnswer)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentTestAnswers::IsCorrect)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentTestAnswers::Score)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentTestAnswers::GradeType).string().null())
                    .col(
                        ColumnDef::new(StudentTestAnswers::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentTestAnswers::Table, StudentTestAnswers::StudentTestId)
                            .to(StudentTests::Table, StudentTests::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                StudentTestAnswers::Table,
                                StudentTestAnswers::TestQuestionId,
                            )
                            .to(TestQuestions::Table, TestQuestions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Grades::StudentTestId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Grades::StudentUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Grades::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::Score).double().not_null())
                    .col(ColumnDef::new(Grades::Comment).text().null())
                    .col(ColumnDef::new(Grades::SubmittedAt).big_integer().null())
                    .col(
                        ColumnDef::new(Grades::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentTestId)
                            .to(StudentTests::Table, StudentTests::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 常用查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_teacher_user_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendances_student_course")
                    .table(Attendances::Table)
                    .col(Attendances::StudentUserId)
                    .col(Attendances::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teacher_tests_created_by")
                    .table(TeacherTests::Table)
                    .col(TeacherTests::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_test_answers_student_test_id")
                    .table(StudentTestAnswers::Table)
                    .col(StudentTestAnswers::StudentTestId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentTestAnswers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentTests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherTests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Role,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Title,
    Description,
    TeacherUserId,
    SubjectId,
    ScheduledAt,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
}

#[derive(DeriveIden)]
enum Attendances {
    #[sea_orm(iden = "attendances")]
    Table,
    Id,
    StudentUserId,
    CourseId,
    Status,
    AttendedAt,
    IsDeleted,
}

#[derive(DeriveIden)]
enum TeacherTests {
    #[sea_orm(iden = "teacher_tests")]
    Table,
    Id,
    Title,
    Description,
    DurationMinutes,
    CourseId,
    CreatedBy,
    IsDraft,
    ScheduledAt,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
}

#[derive(DeriveIden)]
enum StudentTests {
    #[sea_orm(iden = "student_tests")]
    Table,
    Id,
    TeacherTestId,
    StudentUserId,
    Score,
    Comment,
    SubmittedAt,
    IsDeleted,
}

#[derive(DeriveIden)]
enum TestQuestions {
    #[sea_orm(iden = "test_questions")]
    Table,
    Id,
    TeacherTestId,
    QuestionText,
    CorrectAnswer,
    Score,
    IsDeleted,
}

#[derive(DeriveIden)]
enum StudentTestAnswers {
    #[sea_orm(iden = "student_test_answers")]
    Table,
    Id,
    StudentTestId,
    TestQuestionId,
    StudentAnswer,
    IsCorrect,
    Score,
    GradeType,
    IsDeleted,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentTestId,
    StudentUserId,
    CourseId,
    Score,
    Comment,
    SubmittedAt,
    IsDeleted,
}
