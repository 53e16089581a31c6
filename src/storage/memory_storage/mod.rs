//! 内存存储实现
//!
//! `database.url = "memory://"` 时启用，用于本地演示和测试。
//! 会话之间串行执行；未提交的会话在丢弃时恢复课程表快照。
//! 每次存储调用都会记录操作名称，测试据此断言校验先于存储访问。

mod demo;
mod tables;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

pub use tables::{
    AnswerRow, AttendanceRow, CourseRow, GradeRow, StudentTestRow, SubjectRow, TeacherTestRow,
    TestQuestionRow, UserRow,
};
use tables::MemoryTables;

use crate::errors::{PortalError, Result};
use crate::models::{
    CourseId, GradeId, StudentTestId, SubjectId, TeacherTestId, UserId,
    courses::{entities::Course, requests::CourseFields},
    grades::entities::{Grade, GradeDetail, GradeSummary},
    teacher_tests::entities::TestListItem,
};
use crate::runtime::RequestContext;
use crate::storage::{
    CourseStore, GradeStore, Storage, StorageSession, TestStore, UserStore,
};

const MEMORY_SCHEME: &str = "memory://";

#[derive(Clone, Default)]
pub struct MemoryStorage {
    tables: Arc<MemoryTables>,
    session_lock: Arc<Mutex<()>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否为内存后端的 URL
    pub fn accepts(url: &str) -> bool {
        url.starts_with(MEMORY_SCHEME)
    }
}

pub struct MemorySession {
    tables: Arc<MemoryTables>,
    courses_snapshot: Vec<CourseRow>,
    committed: bool,
    _guard: OwnedMutexGuard<()>,
}

impl MemorySession {
    // 记录操作并检查截止时间
    fn enter(&self, ctx: &RequestContext, operation: &'static str) -> Result<()> {
        if ctx.is_expired() {
            return Err(PortalError::deadline_exceeded(format!(
                "{operation} exceeded the request deadline (request {})",
                ctx.request_id()
            )));
        }
        self.tables.record(operation);
        Ok(())
    }

    fn test_item(&self, test: &TeacherTestRow) -> Option<TestListItem> {
        let course = self
            .tables
            .courses
            .get(&test.course_id)
            .filter(|c| !c.is_deleted)?;
        let subject = self
            .tables
            .subjects
            .get(&course.subject_id)
            .filter(|s| !s.is_deleted)?;
        let teacher = self
            .tables
            .users
            .get(&course.teacher_user_id)
            .filter(|u| !u.is_deleted)?;

        Some(TestListItem {
            teacher_test_id: TeacherTestId(test.id),
            title: test.title.clone(),
            description: test.description.clone(),
            duration_minutes: test.duration_minutes,
            course_title: course.title.clone(),
            subject_name: subject.name.clone(),
            teacher_name: teacher.name.clone(),
            scheduled_at: test.scheduled_at,
            is_draft: test.is_draft,
            created_at: test.created_at,
        })
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        if !self.committed {
            let snapshot = std::mem::take(&mut self.courses_snapshot);
            self.tables.restore_courses(snapshot);
            debug!("内存会话未提交，已回滚");
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn begin(&self, ctx: &RequestContext) -> Result<Box<dyn StorageSession>> {
        // 等待前一个会话释放，同样受截止时间约束
        let guard = ctx
            .run("begin", async {
                Ok(self.session_lock.clone().lock_owned().await)
            })
            .await?;
        debug!(
            request_id = ctx.request_id(),
            remaining_ms = ctx.remaining().as_millis() as u64,
            "内存会话已开启"
        );
        Ok(Box::new(MemorySession {
            tables: self.tables.clone(),
            courses_snapshot: self.tables.snapshot_courses(),
            committed: false,
            _guard: guard,
        }))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl StorageSession for MemorySession {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.committed = true;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemorySession {
    async fn user_role(&self, ctx: &RequestContext, user_id: UserId) -> Result<Option<String>> {
        self.enter(ctx, "user_role")?;
        Ok(self
            .tables
            .users
            .get(&user_id.get())
            .filter(|u| !u.is_deleted)
            .map(|u| u.role.clone()))
    }

    async fn user_exists(&self, ctx: &RequestContext, user_id: UserId) -> Result<bool> {
        self.enter(ctx, "user_exists")?;
        Ok(self
            .tables
            .users
            .get(&user_id.get())
            .is_some_and(|u| !u.is_deleted))
    }
}

#[async_trait]
impl CourseStore for MemorySession {
    async fn create_course(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
        fields: &CourseFields,
    ) -> Result<Course> {
        self.enter(ctx, "create_course")?;
        let now = Utc::now().trunc_subsecs(0);
        let row = CourseRow {
            id: self.tables.next_id(),
            title: fields.title.clone(),
            description: fields.description.clone(),
            teacher_user_id: teacher_id.get(),
            subject_id: fields.subject_id.get(),
            scheduled_at: fields.scheduled_at,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        let course = row.to_course();
        self.tables.courses.insert(row.id, row);
        Ok(course)
    }

    async fn get_course(
        &self,
        ctx: &RequestContext,
        course_id: CourseId,
    ) -> Result<Option<Course>> {
        self.enter(ctx, "get_course")?;
        Ok(self
            .tables
            .courses
            .get(&course_id.get())
            .filter(|c| !c.is_deleted)
            .map(|c| c.to_course()))
    }

    async fn update_course(
        &self,
        ctx: &RequestContext,
        course_id: CourseId,
        fields: &CourseFields,
    ) -> Result<u64> {
        self.enter(ctx, "update_course")?;
        let Some(mut row) = self.tables.courses.get_mut(&course_id.get()) else {
            return Ok(0);
        };
        if row.is_deleted {
            return Ok(0);
        }
        row.title = fields.title.clone();
        row.description = fields.description.clone();
        row.subject_id = fields.subject_id.get();
        row.scheduled_at = fields.scheduled_at;
        row.updated_at = Utc::now().trunc_subsecs(0);
        Ok(1)
    }

    async fn subject_exists(&self, ctx: &RequestContext, subject_id: SubjectId) -> Result<bool> {
        self.enter(ctx, "subject_exists")?;
        Ok(self
            .tables
            .subjects
            .get(&subject_id.get())
            .is_some_and(|s| !s.is_deleted))
    }
}

#[async_trait]
impl GradeStore for MemorySession {
    async fn grade_summary(
        &self,
        ctx: &RequestContext,
        grade_id: GradeId,
    ) -> Result<Option<GradeSummary>> {
        self.enter(ctx, "grade_summary")?;
        let tables = &self.tables;
        let Some(grade) = tables.grades.get(&grade_id.get()).filter(|g| !g.is_deleted) else {
            return Ok(None);
        };
        let Some(student_test) = tables
            .student_tests
            .get(&grade.student_test_id)
            .filter(|st| !st.is_deleted)
        else {
            return Ok(None);
        };
        let Some(test) = tables
            .teacher_tests
            .get(&student_test.teacher_test_id)
            .filter(|t| !t.is_deleted)
        else {
            return Ok(None);
        };
        let Some(course) = tables.courses.get(&grade.course_id).filter(|c| !c.is_deleted) else {
            return Ok(None);
        };
        let Some(subject) = tables
            .subjects
            .get(&course.subject_id)
            .filter(|s| !s.is_deleted)
        else {
            return Ok(None);
        };

        Ok(Some(GradeSummary {
            grade_id: GradeId(grade.id),
            student_user_id: UserId(grade.student_user_id),
            teacher_test_id: TeacherTestId(test.id),
            score: grade.score,
            comment: grade.comment.clone(),
            test_title: test.title.clone(),
            subject_name: subject.name.clone(),
            scheduled_at: test.scheduled_at,
            duration_minutes: test.duration_minutes,
        }))
    }

    async fn grade_details(
        &self,
        ctx: &RequestContext,
        student_test_id: StudentTestId,
    ) -> Result<Vec<GradeDetail>> {
        self.enter(ctx, "grade_details")?;
        let mut answers: Vec<AnswerRow> = self
            .tables
            .answers
            .iter()
            .filter(|a| a.student_test_id == student_test_id.get() && !a.is_deleted)
            .map(|a| a.value().clone())
            .collect();
        answers.sort_by_key(|a| a.id);

        Ok(answers
            .into_iter()
            .filter_map(|answer| {
                let question = self.tables.questions.get(&answer.test_question_id)?;
                Some(GradeDetail {
                    test_question_id: question.id,
                    question_text: question.question_text.clone(),
                    student_answer: answer.student_answer,
                    is_correct: answer.is_correct,
                    score: answer.score,
                })
            })
            .collect())
    }

    async fn get_grade(&self, ctx: &RequestContext, grade_id: GradeId) -> Result<Option<Grade>> {
        self.enter(ctx, "get_grade")?;
        Ok(self
            .tables
            .grades
            .get(&grade_id.get())
            .filter(|g| !g.is_deleted)
            .map(|g| Grade {
                id: GradeId(g.id),
                student_test_id: StudentTestId(g.student_test_id),
                student_user_id: UserId(g.student_user_id),
                course_id: CourseId(g.course_id),
                score: g.score,
                comment: g.comment.clone(),
                submitted_at: g.submitted_at,
            }))
    }

    async fn is_teacher_of_course(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
        course_id: CourseId,
    ) -> Result<bool> {
        self.enter(ctx, "is_teacher_of_course")?;
        Ok(self
            .tables
            .courses
            .get(&course_id.get())
            .is_some_and(|c| !c.is_deleted && c.teacher_user_id == teacher_id.get()))
    }
}

#[async_trait]
impl TestStore for MemorySession {
    async fn list_tests_for_teacher(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
    ) -> Result<Vec<TestListItem>> {
        self.enter(ctx, "list_tests_for_teacher")?;
        let mut tests: Vec<TeacherTestRow> = self
            .tables
            .teacher_tests
            .iter()
            .filter(|t| t.created_by == teacher_id.get() && !t.is_deleted)
            .map(|t| t.value().clone())
            .collect();
        tests.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        Ok(tests.iter().filter_map(|t| self.test_item(t)).collect())
    }

    async fn list_tests_for_student(
        &self,
        ctx: &RequestContext,
        student_id: UserId,
    ) -> Result<Vec<TestListItem>> {
        self.enter(ctx, "list_tests_for_student")?;
        let attended: HashSet<i64> = self
            .tables
            .attendances
            .iter()
            .filter(|a| a.student_user_id == student_id.get() && !a.is_deleted)
            .map(|a| a.course_id)
            .collect();

        let mut tests: Vec<TeacherTestRow> = self
            .tables
            .teacher_tests
            .iter()
            .filter(|t| !t.is_deleted && !t.is_draft && attended.contains(&t.course_id))
            .map(|t| t.value().clone())
            .collect();
        tests.sort_by(|a, b| {
            a.scheduled_at
                .cmp(&b.scheduled_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(tests.iter().filter_map(|t| self.test_item(t)).collect())
    }
}
