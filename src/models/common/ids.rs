//! 强类型标识符
//!
//! 字符串形式的 ID 只在 HTTP 边界解析一次，之后各层只传递这些类型。

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id_types {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub i64);

            impl $name {
                /// 解析正整数 ID，非数字或非正数返回 None
                pub fn parse(raw: &str) -> Option<Self> {
                    match raw.trim().parse::<i64>() {
                        Ok(value) if value > 0 => Some(Self(value)),
                        _ => None,
                    }
                }

                pub fn get(self) -> i64 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> i64 {
                    id.0
                }
            }
        )*
    };
}

define_id_types!(
    UserId,
    CourseId,
    SubjectId,
    GradeId,
    StudentTestId,
    TeacherTestId,
);
