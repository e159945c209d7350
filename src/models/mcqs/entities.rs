use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 选择题
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct Mcq {
    pub id: i64,
    pub course_id: i64,
    pub material_id: i64,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Mcq {
    /// 精确字符串比较
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }

    /// 学生视角：不包含正确答案
    pub fn into_question(self) -> McqQuestion {
        McqQuestion {
            id: self.id,
            course_id: self.course_id,
            material_id: self.material_id,
            question: self.question,
            answers: self.answers,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct McqQuestion {
    pub id: i64,
    pub course_id: i64,
    pub material_id: i64,
    pub question: String,
    pub answers: Vec<String>,
}

/// 学生作答记录，(student_id, mcq_id) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct StudentAnswer {
    pub id: i64,
    pub student_id: i64,
    pub mcq_id: i64,
    pub selected_answer: String,
    pub is_correct: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 已判分、待写入的一条作答
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAnswer {
    pub mcq_id: i64,
    pub selected_answer: String,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq() -> Mcq {
        let now = chrono::Utc::now();
        Mcq {
            id: 1,
            course_id: 1,
            material_id: 1,
            question: "2 + 2 = ?".into(),
            answers: vec!["3".into(), "4".into()],
            correct_answer: "4".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_correctness_is_exact_match() {
        let mcq = mcq();
        assert!(mcq.is_correct("4"));
        assert!(!mcq.is_correct(" 4"));
        assert!(!mcq.is_correct("four"));
    }

    #[test]
    fn test_question_view_hides_answer() {
        let json = serde_json::to_value(mcq().into_question()).unwrap();
        assert!(json.get("correct_answer").is_none());
        assert_eq!(json["answers"][1], "4");
    }
}
