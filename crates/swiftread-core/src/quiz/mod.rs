//! Comprehension quizzes: the question record, the generator seam, and
//! answer scoring.

use serde::{Deserialize, Serialize};

/// One multiple-choice question. The core validates only the count of
/// questions a generator returns, never their content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
}

/// Abstract comprehension-question source. Implementations consume the
/// raw source text and return zero or more questions; zero is a valid
/// degenerate result, not an error of the reading flow.
pub trait QuizGenerator {
    type Error;

    fn generate(&mut self, text: &str) -> Result<Vec<QuizQuestion>, Self::Error>;
}

/// Scoring state for one quiz attempt: one answer per question, a
/// final integer percentage. A run over zero questions is complete
/// immediately and scores zero.
#[derive(Clone, Debug)]
pub struct QuizRun {
    questions: Vec<QuizQuestion>,
    answers: Vec<usize>,
}

impl QuizRun {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the question awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// Record the answer for the current question. Returns `true` when
    /// the run is complete afterwards; answering a complete run is a
    /// no-op.
    pub fn answer(&mut self, choice: usize) -> bool {
        if !self.is_complete() {
            self.answers.push(choice);
        }
        self.is_complete()
    }

    pub fn correct_count(&self) -> usize {
        self.answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, question)| **answer == question.correct_answer)
            .count()
    }

    /// Final comprehension score, rounded to a whole percentage.
    pub fn score_percent(&self) -> u8 {
        if self.questions.is_empty() {
            return 0;
        }

        (self.correct_count() as f64 / self.questions.len() as f64 * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests;
