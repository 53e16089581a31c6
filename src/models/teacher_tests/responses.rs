use serde::Serialize;

use super::entities::TestListItem;

// 测验列表响应
#[derive(Debug, Clone, Serialize)]
pub struct TestListResponse {
    pub count: usize,
    pub tests: Vec<TestListItem>,
}

impl From<Vec<TestListItem>> for TestListResponse {
    fn from(tests: Vec<TestListItem>) -> Self {
        Self {
            count: tests.len(),
            tests,
        }
    }
}
