use serde::Serialize;
use ts_rs::TS;

use super::entities::{Mcq, McqQuestion};

/// 提交选择题答案的结果
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct SubmitAnswersResponse {
    /// 该资料下的题目总数
    pub total_questions: i64,
    /// 本次提交的题目数
    pub answered_questions: i64,
    pub correct_answers: i64,
    pub total_score: i64,
}

/// 选择题列表：学生看到的是不含答案的题面
#[derive(Debug, Clone, Serialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub enum McqListResponse {
    Full(Vec<Mcq>),
    Questions(Vec<McqQuestion>),
}
