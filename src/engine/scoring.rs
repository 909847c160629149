// src/engine/scoring.rs

use std::collections::HashMap;

use crate::models::{assessment::AnswerSubmission, question::AnswerKey};

/// Tallies from grading one submission.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScoreSheet {
    pub correct: usize,
    pub answered: usize,
    /// Topic id -> correctness of each graded answer, in submission order.
    pub by_topic: HashMap<i64, Vec<bool>>,
}

impl ScoreSheet {
    /// Overall percentage, or `None` when nothing could be graded.
    pub fn percentage(&self) -> Option<f64> {
        if self.answered == 0 {
            return None;
        }
        Some(percentage(self.correct, self.answered))
    }
}

/// `100 * correct / total`. Callers guarantee `total > 0`.
///
/// Multiplying first keeps whole-number results exact, so 3 of 5 is 60.0 and not 59.999...
pub fn percentage(correct: usize, total: usize) -> f64 {
    (correct as f64 * 100.0) / total as f64
}

/// Option labels are compared ASCII case-insensitively: "b" answers "B".
pub fn is_correct(selected: &str, correct: &str) -> bool {
    selected.eq_ignore_ascii_case(correct)
}

/// Grades every answer whose question is known.
///
/// Answers for question ids missing from `keys` are skipped: they count toward
/// neither the overall nor any topic tally.
pub fn grade(answers: &[AnswerSubmission], keys: &HashMap<i64, AnswerKey>) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();

    for answer in answers {
        let Some(key) = keys.get(&answer.question_id) else {
            tracing::debug!(
                question_id = answer.question_id,
                "Skipping answer for unknown question"
            );
            continue;
        };

        let correct = is_correct(&answer.selected_option, &key.correct_option);
        if correct {
            sheet.correct += 1;
        }
        sheet.answered += 1;
        sheet.by_topic.entry(key.topic_id).or_default().push(correct);
    }

    sheet
}
