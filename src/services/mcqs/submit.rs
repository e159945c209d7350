//! 选择题作答提交
//!
//! 整批提交要么全部写入，要么一条都不写：先在内存中解析并判分每一条作答，
//! 任何一个题目 id 不属于该资料都会在写库之前返回错误。

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_student;
use crate::models::mcqs::{
    entities::{Mcq, ScoredAnswer},
    requests::{AnswerInput, SubmitAnswersRequest},
    responses::SubmitAnswersResponse,
};
use crate::models::users::entities::User;
use crate::services::catalog::lookup::find_material_in_course;
use crate::storage::Storage;

/// 对照资料下的题目判分
pub fn score_answers(mcqs: &[Mcq], answers: Vec<AnswerInput>) -> Result<Vec<ScoredAnswer>> {
    let by_id: HashMap<i64, &Mcq> = mcqs.iter().map(|m| (m.id, m)).collect();

    answers
        .into_iter()
        .map(|answer| {
            let mcq = by_id.get(&answer.mcq_id).ok_or_else(|| {
                LmsError::not_found(format!(
                    "MCQ with ID {} not found in this material",
                    answer.mcq_id
                ))
            })?;

            Ok(ScoredAnswer {
                mcq_id: answer.mcq_id,
                is_correct: mcq.is_correct(&answer.selected_answer),
                selected_answer: answer.selected_answer,
            })
        })
        .collect()
}

pub fn summarize(total_questions: usize, scored: &[ScoredAnswer]) -> SubmitAnswersResponse {
    let correct = scored.iter().filter(|a| a.is_correct).count() as i64;
    SubmitAnswersResponse {
        total_questions: total_questions as i64,
        answered_questions: scored.len() as i64,
        correct_answers: correct,
        total_score: correct,
    }
}

pub async fn submit_answers(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
    material_id: i64,
    req: SubmitAnswersRequest,
) -> Result<SubmitAnswersResponse> {
    let student = require_student(storage, caller).await?;
    req.validate()?;
    find_material_in_course(storage, course_id, material_id).await?;

    let mcqs = storage.list_mcqs_by_material(course_id, material_id).await?;
    if mcqs.is_empty() {
        return Err(LmsError::not_found("No MCQs found for this material"));
    }

    let scored = score_answers(&mcqs, req.mcq_answers)?;
    let summary = summarize(mcqs.len(), &scored);

    storage.save_student_answers(student.id, scored).await?;

    debug!(
        "Student {} answered {} MCQs on material {}, {} correct",
        student.id, summary.answered_questions, material_id, summary.correct_answers
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq(id: i64, correct: &str) -> Mcq {
        let now = chrono::Utc::now();
        Mcq {
            id,
            course_id: 1,
            material_id: 1,
            question: format!("Question {id}"),
            answers: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: correct.into(),
            created_at: now,
            updated_at: now,
        }
    }

    fn answer(mcq_id: i64, selected: &str) -> AnswerInput {
        AnswerInput {
            mcq_id,
            selected_answer: selected.into(),
        }
    }

    #[test]
    fn test_three_of_four_correct() {
        let mcqs = vec![mcq(1, "a"), mcq(2, "b"), mcq(3, "c"), mcq(4, "a")];
        let scored =
            score_answers(&mcqs, vec![answer(1, "a"), answer(2, "b"), answer(3, "c")]).unwrap();

        assert_eq!(
            summarize(mcqs.len(), &scored),
            SubmitAnswersResponse {
                total_questions: 4,
                answered_questions: 3,
                correct_answers: 3,
                total_score: 3,
            }
        );
    }

    #[test]
    fn test_wrong_answer_is_recorded_as_incorrect() {
        let mcqs = vec![mcq(1, "a")];
        let scored = score_answers(&mcqs, vec![answer(1, "b")]).unwrap();
        assert_eq!(scored.len(), 1);
        assert!(!scored[0].is_correct);
        assert_eq!(scored[0].selected_answer, "b");
    }

    #[test]
    fn test_unknown_id_fails_whole_batch() {
        let mcqs = vec![mcq(1, "a")];
        let err = score_answers(&mcqs, vec![answer(1, "a"), answer(99, "a")]).unwrap_err();
        assert_eq!(err.message(), "MCQ with ID 99 not found in this material");
    }
}
