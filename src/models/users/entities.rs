use serde::{Deserialize, Serialize};

use crate::models::UserId;

// 用户角色
//
// 角色集合是封闭的：数据库中出现的其他字符串不会被当作任何角色。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student, // 学生
    Teacher, // 教师
    Parent,  // 家长
    Admin,   // 管理员
    Other,   // 其他（只读）
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const PARENT: &'static str = "parent";
    pub const ADMIN: &'static str = "admin";
    pub const OTHER: &'static str = "other";

    pub fn all_roles() -> &'static [UserRole] {
        &[
            UserRole::Student,
            UserRole::Teacher,
            UserRole::Parent,
            UserRole::Admin,
            UserRole::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => UserRole::STUDENT,
            UserRole::Teacher => UserRole::TEACHER,
            UserRole::Parent => UserRole::PARENT,
            UserRole::Admin => UserRole::ADMIN,
            UserRole::Other => UserRole::OTHER,
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid user role: '{s}'. supported roles: student, teacher, parent, admin, other"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::PARENT => Ok(UserRole::Parent),
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::OTHER => Ok(UserRole::Other),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// 已解析的调用者身份
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: UserId,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in UserRole::all_roles() {
            assert_eq!(role.to_string().parse::<UserRole>().as_ref(), Ok(role));
        }
    }

    #[test]
    fn test_other_role_parses() {
        assert_eq!("other".parse::<UserRole>(), Ok(UserRole::Other));
        assert_eq!(
            serde_json::from_str::<UserRole>("\"other\"").unwrap(),
            UserRole::Other
        );
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("superuser".parse::<UserRole>().is_err());
        assert!("Teacher".parse::<UserRole>().is_err());
        assert!("janitor".parse::<UserRole>().is_err());
        assert!(serde_json::from_str::<UserRole>("\"guest\"").is_err());
    }
}
