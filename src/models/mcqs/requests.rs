use std::collections::HashSet;

use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{LmsError, Result};

const MAX_TEXT_LEN: usize = 255;

/// 单道选择题的输入（创建与更新共用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct McqInput {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct CreateMcqsRequest {
    pub mcqs: Vec<McqInput>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct AnswerInput {
    pub mcq_id: i64,
    pub selected_answer: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct SubmitAnswersRequest {
    pub mcq_answers: Vec<AnswerInput>,
}

impl McqInput {
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(LmsError::validation("The question field is required."));
        }
        if self.question.chars().count() > MAX_TEXT_LEN {
            return Err(LmsError::validation(
                "The question must not be greater than 255 characters.",
            ));
        }
        if self.answers.len() < 2 {
            return Err(LmsError::validation(
                "The answers field must have at least 2 items.",
            ));
        }
        if self.answers.iter().any(|a| a.trim().is_empty()) {
            return Err(LmsError::validation("Answers must not be empty."));
        }
        if self.correct_answer.chars().count() > MAX_TEXT_LEN {
            return Err(LmsError::validation(
                "The correct answer must not be greater than 255 characters.",
            ));
        }
        if !self.answers.contains(&self.correct_answer) {
            return Err(LmsError::validation(
                "The correct answer must be one of the answers.",
            ));
        }
        Ok(())
    }
}

impl CreateMcqsRequest {
    pub fn validate(&self) -> Result<()> {
        if self.mcqs.is_empty() {
            return Err(LmsError::validation("At least one MCQ is required."));
        }
        self.mcqs.iter().try_for_each(McqInput::validate)
    }
}

impl SubmitAnswersRequest {
    pub fn validate(&self) -> Result<()> {
        if self.mcq_answers.is_empty() {
            return Err(LmsError::validation("The mcq answers field is required."));
        }

        let mut seen = HashSet::with_capacity(self.mcq_answers.len());
        for answer in &self.mcq_answers {
            if answer.selected_answer.is_empty() {
                return Err(LmsError::validation(format!(
                    "The selected answer for MCQ {} is required.",
                    answer.mcq_id
                )));
            }
            if !seen.insert(answer.mcq_id) {
                return Err(LmsError::validation(format!(
                    "MCQ {} is answered more than once.",
                    answer.mcq_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(answers: &[&str], correct: &str) -> McqInput {
        McqInput {
            question: "Pick one".into(),
            answers: answers.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.into(),
        }
    }

    #[test]
    fn test_mcq_needs_two_answers() {
        assert!(input(&["a"], "a").validate().is_err());
        assert!(input(&["a", "b"], "a").validate().is_ok());
    }

    #[test]
    fn test_correct_answer_must_be_a_candidate() {
        assert!(input(&["a", "b"], "c").validate().is_err());
    }

    #[test]
    fn test_question_length_limit() {
        let mut mcq = input(&["a", "b"], "b");
        mcq.question = "q".repeat(256);
        assert!(mcq.validate().is_err());
        mcq.question = "q".repeat(255);
        assert!(mcq.validate().is_ok());
    }

    #[test]
    fn test_submission_rejects_duplicates_and_blanks() {
        let answer = |mcq_id, selected: &str| AnswerInput {
            mcq_id,
            selected_answer: selected.into(),
        };

        let empty = SubmitAnswersRequest {
            mcq_answers: vec![],
        };
        assert!(empty.validate().is_err());

        let blank = SubmitAnswersRequest {
            mcq_answers: vec![answer(1, "")],
        };
        assert!(blank.validate().is_err());

        let duplicated = SubmitAnswersRequest {
            mcq_answers: vec![answer(1, "a"), answer(1, "b")],
        };
        assert!(duplicated.validate().is_err());

        let ok = SubmitAnswersRequest {
            mcq_answers: vec![answer(1, "a"), answer(2, "b")],
        };
        assert!(ok.validate().is_ok());
    }
}
