//! Mock-interview quizzes and assessment history.
//!
//! Quiz questions are generated per request and never stored on their own;
//! only graded results land in the assessments table. The improvement tip is
//! best effort: a failed tip call never blocks saving the assessment.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::interview::prompts::{
    QUIZ_PROMPT_TEMPLATE, QUIZ_SYSTEM, TIP_PROMPT_TEMPLATE, TIP_SYSTEM,
};
use crate::llm_client::LlmClient;
use crate::models::assessment::AssessmentRow;
use crate::models::user::User;
use crate::store::{NewAssessment, Store};

const QUIZ_CATEGORY: &str = "Technical";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
struct QuizPayload {
    questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultRequest {
    pub questions: Vec<QuizQuestion>,
    pub answers: Vec<String>,
    pub score: f64,
}

/// Per-question grading outcome stored inside the assessment's JSON column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: String,
    pub answer: String,
    pub user_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_quiz(
    store: &dyn Store,
    llm: &LlmClient,
    external_id: &str,
) -> Result<Vec<QuizQuestion>, AppError> {
    let (user, industry) = onboarded_user(store, external_id).await?;

    let skills_clause = if user.skills.is_empty() {
        String::new()
    } else {
        format!(" with expertise in {}", user.skills.join(", "))
    };
    let prompt = QUIZ_PROMPT_TEMPLATE
        .replace("{industry}", &industry)
        .replace("{skills_clause}", &skills_clause);

    let payload: QuizPayload = llm
        .call_json(&prompt, QUIZ_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))?;

    if payload.questions.is_empty() {
        return Err(AppError::Llm(
            "Quiz generation returned no questions".to_string(),
        ));
    }

    Ok(payload.questions)
}

pub async fn save_quiz_result(
    store: &dyn Store,
    llm: &LlmClient,
    external_id: &str,
    request: QuizResultRequest,
) -> Result<AssessmentRow, AppError> {
    validate_result(&request)?;

    let (user, industry) = onboarded_user(store, external_id).await?;

    let results = grade(&request.questions, &request.answers);
    let wrong: Vec<&QuestionResult> = results.iter().filter(|r| !r.is_correct).collect();

    let improvement_tip = if wrong.is_empty() {
        None
    } else {
        match llm
            .call_text(&build_tip_prompt(&industry, &wrong), TIP_SYSTEM)
            .await
        {
            Ok(tip) => Some(tip),
            Err(e) => {
                warn!("Improvement tip generation failed: {e}");
                None
            }
        }
    };

    let assessment = NewAssessment {
        user_id: user.id,
        quiz_score: request.score,
        questions: serde_json::to_value(&results).map_err(|e| AppError::Internal(e.into()))?,
        category: QUIZ_CATEGORY.to_string(),
        improvement_tip,
    };

    Ok(store.insert_assessment(&assessment).await?)
}

/// All of the user's past assessments, oldest first (the order the progress
/// chart consumes).
pub async fn list_assessments(
    store: &dyn Store,
    external_id: &str,
) -> Result<Vec<AssessmentRow>, AppError> {
    let user = store
        .find_user(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(store.list_assessments(user.id).await?)
}

/// Pairs each question with the submitted answer. Callers validate that the
/// two slices are the same length.
pub fn grade(questions: &[QuizQuestion], answers: &[String]) -> Vec<QuestionResult> {
    questions
        .iter()
        .zip(answers)
        .map(|(question, answer)| QuestionResult {
            question: question.question.clone(),
            answer: question.correct_answer.clone(),
            user_answer: answer.clone(),
            is_correct: question.correct_answer == *answer,
            explanation: question.explanation.clone(),
        })
        .collect()
}

async fn onboarded_user(store: &dyn Store, external_id: &str) -> Result<(User, String), AppError> {
    let user = store
        .find_user(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let industry = user
        .industry
        .clone()
        .filter(|industry| !industry.is_empty())
        .ok_or_else(|| AppError::Validation("User has not completed onboarding".to_string()))?;

    Ok((user, industry))
}

fn validate_result(request: &QuizResultRequest) -> Result<(), AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation("questions cannot be empty".to_string()));
    }
    if request.answers.len() != request.questions.len() {
        return Err(AppError::Validation(
            "answers must match questions one-to-one".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&request.score) {
        return Err(AppError::Validation(
            "score must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

fn build_tip_prompt(industry: &str, wrong: &[&QuestionResult]) -> String {
    let wrong_questions = wrong
        .iter()
        .map(|result| {
            format!(
                "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                result.question, result.answer, result.user_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    TIP_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{wrong_questions}", &wrong_questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn question(text: &str, correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            correct_answer: correct.to_string(),
            explanation: "Covered in the fundamentals.".to_string(),
        }
    }

    #[test]
    fn test_grade_marks_correct_and_wrong_answers() {
        let questions = vec![question("Q1", "A"), question("Q2", "B")];
        let answers = vec!["A".to_string(), "C".to_string()];

        let results = grade(&questions, &answers);

        assert_eq!(results.len(), 2);
        assert!(results[0].is_correct);
        assert!(!results[1].is_correct);
        assert_eq!(results[1].answer, "B");
        assert_eq!(results[1].user_answer, "C");
    }

    #[test]
    fn test_quiz_payload_parses_camel_case() {
        let raw = r#"{
            "questions": [
                {
                    "question": "What does ACID stand for?",
                    "options": ["a", "b", "c", "d"],
                    "correctAnswer": "a",
                    "explanation": "Transactions."
                }
            ]
        }"#;

        let payload: QuizPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.questions.len(), 1);
        assert_eq!(payload.questions[0].correct_answer, "a");
    }

    #[test]
    fn test_tip_prompt_lists_wrong_answers() {
        let results = vec![QuestionResult {
            question: "Q1".to_string(),
            answer: "A".to_string(),
            user_answer: "B".to_string(),
            is_correct: false,
            explanation: "explanation".to_string(),
        }];
        let wrong: Vec<&QuestionResult> = results.iter().collect();

        let prompt = build_tip_prompt("Fintech", &wrong);

        assert!(prompt.contains("Fintech technical interview questions"));
        assert!(prompt.contains("Question: \"Q1\""));
        assert!(prompt.contains("Correct Answer: \"A\""));
        assert!(prompt.contains("User Answer: \"B\""));
    }

    #[tokio::test]
    async fn test_perfect_score_saves_without_tip() {
        let store = MemoryStore::with_user("user_1");
        store.set_user_industry("user_1", Some("Data Science"));
        let llm = LlmClient::new("test-key".to_string());

        let request = QuizResultRequest {
            questions: vec![question("Q1", "A"), question("Q2", "B")],
            answers: vec!["A".to_string(), "B".to_string()],
            score: 100.0,
        };
        let row = save_quiz_result(&store, &llm, "user_1", request)
            .await
            .unwrap();

        assert_eq!(row.quiz_score, 100.0);
        assert_eq!(row.category, "Technical");
        assert!(row.improvement_tip.is_none());

        let stored: Vec<QuestionResult> = serde_json::from_value(row.questions).unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|result| result.is_correct));
    }

    #[tokio::test]
    async fn test_save_requires_onboarded_user() {
        let store = MemoryStore::with_user("user_1");
        let llm = LlmClient::new("test-key".to_string());

        let request = QuizResultRequest {
            questions: vec![question("Q1", "A")],
            answers: vec!["A".to_string()],
            score: 100.0,
        };
        let err = save_quiz_result(&store, &llm, "user_1", request)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_mismatched_answers_are_rejected() {
        let store = MemoryStore::with_user("user_1");
        store.set_user_industry("user_1", Some("Data Science"));
        let llm = LlmClient::new("test-key".to_string());

        let request = QuizResultRequest {
            questions: vec![question("Q1", "A"), question("Q2", "B")],
            answers: vec!["A".to_string()],
            score: 50.0,
        };
        let err = save_quiz_result(&store, &llm, "user_1", request)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_rejected() {
        let store = MemoryStore::with_user("user_1");
        store.set_user_industry("user_1", Some("Data Science"));
        let llm = LlmClient::new("test-key".to_string());

        let request = QuizResultRequest {
            questions: vec![question("Q1", "A")],
            answers: vec!["A".to_string()],
            score: 120.0,
        };
        let err = save_quiz_result(&store, &llm, "user_1", request)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_assessments_come_back_oldest_first() {
        let store = MemoryStore::with_user("user_1");
        store.set_user_industry("user_1", Some("Data Science"));
        let llm = LlmClient::new("test-key".to_string());

        for score in [40.0, 70.0, 90.0] {
            let request = QuizResultRequest {
                questions: vec![question("Q1", "A")],
                answers: vec!["A".to_string()],
                score,
            };
            save_quiz_result(&store, &llm, "user_1", request)
                .await
                .unwrap();
        }

        let listed = list_assessments(&store, "user_1").await.unwrap();

        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].quiz_score, 40.0);
        assert_eq!(listed[2].quiz_score, 90.0);
        assert!(listed.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_list_for_unknown_identity() {
        let store = MemoryStore::default();

        let err = list_assessments(&store, "ghost").await.unwrap_err();

        assert!(matches!(err, AppError::UserNotFound));
    }
}
