//! 角色访问矩阵
//!
//! 每个 {角色, 操作} 组合对应唯一一条规则。`Deny` 在这里直接拒绝，
//! 其余范围型规则由各业务流程结合存储数据判断。

use tracing::info;

use crate::errors::{PortalError, Result};
use crate::models::users::entities::{Caller, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreateCourse,
    UpdateCourse,
    ViewGrade,
    ListTests,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::CreateCourse,
            Action::UpdateCourse,
            Action::ViewGrade,
            Action::ListTests,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateCourse => "create_course",
            Action::UpdateCourse => "update_course",
            Action::ViewGrade => "view_grade",
            Action::ListTests => "list_tests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    Allow,
    Deny,
    // 仅课程负责教师
    CourseOwnerOnly,
    // 仅本人的记录
    OwnRecordsOnly,
    // 仅自己负责课程的记录
    TaughtCoursesOnly,
    Unrestricted,
    // 自己创建的测验
    AuthoredTests,
    // 出席课程中的已发布测验
    AttendedCourses,
}

pub const fn rule(role: UserRole, action: Action) -> AccessRule {
    use AccessRule::*;

    match (role, action) {
        (UserRole::Student, Action::CreateCourse) => Deny,
        (UserRole::Student, Action::UpdateCourse) => Deny,
        (UserRole::Student, Action::ViewGrade) => OwnRecordsOnly,
        (UserRole::Student, Action::ListTests) => AttendedCourses,

        (UserRole::Teacher, Action::CreateCourse) => Allow,
        (UserRole::Teacher, Action::UpdateCourse) => CourseOwnerOnly,
        (UserRole::Teacher, Action::ViewGrade) => TaughtCoursesOnly,
        (UserRole::Teacher, Action::ListTests) => AuthoredTests,

        (UserRole::Parent, Action::CreateCourse) => Deny,
        (UserRole::Parent, Action::UpdateCourse) => Deny,
        (UserRole::Parent, Action::ViewGrade) => Unrestricted,
        (UserRole::Parent, Action::ListTests) => AttendedCourses,

        (UserRole::Admin, Action::CreateCourse) => Deny,
        (UserRole::Admin, Action::UpdateCourse) => Deny,
        (UserRole::Admin, Action::ViewGrade) => Unrestricted,
        (UserRole::Admin, Action::ListTests) => AttendedCourses,

        (UserRole::Other, Action::CreateCourse) => Deny,
        (UserRole::Other, Action::UpdateCourse) => Deny,
        (UserRole::Other, Action::ViewGrade) => Unrestricted,
        (UserRole::Other, Action::ListTests) => AttendedCourses,
    }
}

/// 查表并拒绝 `Deny`，返回需要进一步判断的规则
pub fn authorize(caller: &Caller, action: Action) -> Result<AccessRule> {
    match rule(caller.role, action) {
        AccessRule::Deny => {
            info!(
                user_id = %caller.id,
                role = %caller.role,
                action = action.as_str(),
                "access denied by role"
            );
            Err(PortalError::forbidden(format!(
                "role '{}' may not perform {}",
                caller.role,
                action.as_str()
            )))
        }
        granted => Ok(granted),
    }
}

/// 规则与操作不匹配时的统一拒绝
pub fn rule_mismatch(caller: &Caller, action: Action, rule: AccessRule) -> PortalError {
    info!(
        user_id = %caller.id,
        role = %caller.role,
        action = action.as_str(),
        ?rule,
        "access rule does not apply to action"
    );
    PortalError::forbidden(format!(
        "role '{}' may not perform {}",
        caller.role,
        action.as_str()
    ))
}
