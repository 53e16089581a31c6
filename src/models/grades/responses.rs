use serde::Serialize;

use super::entities::{GradeDetail, GradeSummary};

// 成绩详情响应
#[derive(Debug, Clone, Serialize)]
pub struct GradeDetailResponse {
    pub grade_summary: GradeSummary,
    pub grade_details: Vec<GradeDetail>,
}
