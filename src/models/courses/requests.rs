use chrono::{DateTime, SubsecRound, Utc};
use serde::Deserialize;

use crate::errors::{PortalError, Result};
use crate::models::SubjectId;

// 创建课程请求
//
// 字段缺失时按空值处理，由服务层统一给出校验错误，
// 这样角色校验总是先于载荷校验生效。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subject_id: i64,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

// 更新课程请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subject_id: i64,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// 通过校验的课程字段（用于存储层）
#[derive(Debug, Clone, PartialEq)]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub subject_id: SubjectId,
    pub scheduled_at: DateTime<Utc>,
}

impl CreateCourseRequest {
    pub fn validate(self) -> Result<CourseFields> {
        validate_course_fields(
            self.title,
            self.description,
            self.subject_id,
            self.scheduled_at,
        )
    }
}

impl UpdateCourseRequest {
    pub fn validate(self) -> Result<CourseFields> {
        validate_course_fields(
            self.title,
            self.description,
            self.subject_id,
            self.scheduled_at,
        )
    }
}

fn validate_course_fields(
    title: String,
    description: String,
    subject_id: i64,
    scheduled_at: Option<DateTime<Utc>>,
) -> Result<CourseFields> {
    if title.trim().is_empty() {
        return Err(PortalError::invalid_input("title is required"));
    }

    if description.trim().is_empty() {
        return Err(PortalError::invalid_input("description is required"));
    }

    if subject_id <= 0 {
        return Err(PortalError::invalid_input("valid subject_id is required"));
    }

    let scheduled_at =
        scheduled_at.ok_or_else(|| PortalError::invalid_input("scheduled_at is required"))?;

    Ok(CourseFields {
        title,
        description,
        subject_id: SubjectId(subject_id),
        // 存储精度为秒
        scheduled_at: scheduled_at.trunc_subsecs(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use chrono::TimeZone;

    fn valid_request() -> CreateCourseRequest {
        CreateCourseRequest {
            title: "Algebra I".to_string(),
            description: "intro".to_string(),
            subject_id: 3,
            scheduled_at: Some(Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_valid_request() {
        let fields = valid_request().validate().unwrap();
        assert_eq!(fields.title, "Algebra I");
        assert_eq!(fields.subject_id, SubjectId(3));
    }

    #[test]
    fn test_missing_fields() {
        let cases = [
            CreateCourseRequest {
                title: String::new(),
                ..valid_request()
            },
            CreateCourseRequest {
                title: "   ".to_string(),
                ..valid_request()
            },
            CreateCourseRequest {
                description: String::new(),
                ..valid_request()
            },
            CreateCourseRequest {
                subject_id: 0,
                ..valid_request()
            },
            CreateCourseRequest {
                subject_id: -1,
                ..valid_request()
            },
            CreateCourseRequest {
                scheduled_at: None,
                ..valid_request()
            },
        ];

        for case in cases {
            let err = case.validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_scheduled_at_truncated_to_seconds() {
        let at = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        let fields = UpdateCourseRequest {
            title: "Geometry".to_string(),
            description: "shapes".to_string(),
            subject_id: 1,
            scheduled_at: Some(at),
        }
        .validate()
        .unwrap();
        assert_eq!(fields.scheduled_at.timestamp_subsec_nanos(), 0);
        assert_eq!(fields.scheduled_at.timestamp(), at.timestamp());
    }

    #[test]
    fn test_missing_json_fields_deserialize_to_empty() {
        let req: CreateCourseRequest = serde_json::from_str(r#"{"subject_id": 2}"#).unwrap();
        assert!(req.title.is_empty());
        assert!(req.scheduled_at.is_none());
    }
}
