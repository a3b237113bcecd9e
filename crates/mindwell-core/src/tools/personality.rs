//! Forced-choice personality quiz and its counting-based scorer.
//!
//! Eight questions, two per trait axis. Each answer contributes one
//! letter to exactly one axis; the type code picks, per axis, the pole
//! with the higher tally, ties (including the fully unanswered case)
//! resolving to E, S, T, J.

use std::collections::BTreeMap;

use crate::{MindwellError, Result};

/// One selectable option of a question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionOption {
    pub text: &'static str,
    pub code: char,
}

/// One forced-choice question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub options: [QuestionOption; 2],
}

/// The fixed question catalog, in presentation order.
pub const QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        text: "在社交聚会中，你通常：",
        options: [
            QuestionOption { text: "与多人交谈，包括陌生人", code: 'E' },
            QuestionOption { text: "只与少数熟识的人交谈", code: 'I' },
        ],
    },
    Question {
        id: 2,
        text: "你更倾向于：",
        options: [
            QuestionOption { text: "实际、具体、着眼于当前", code: 'S' },
            QuestionOption { text: "直觉、抽象、着眼于未来", code: 'N' },
        ],
    },
    Question {
        id: 3,
        text: "在做决策时，你更依赖：",
        options: [
            QuestionOption { text: "逻辑分析与客观事实", code: 'T' },
            QuestionOption { text: "个人价值观与对他人的影响", code: 'F' },
        ],
    },
    Question {
        id: 4,
        text: "你更喜欢的工作方式是：",
        options: [
            QuestionOption { text: "有计划、有条理、按部就班", code: 'J' },
            QuestionOption { text: "灵活、自发、随遇而安", code: 'P' },
        ],
    },
    Question {
        id: 5,
        text: "在一天的劳累之后，你感到恢复精力的方式是：",
        options: [
            QuestionOption { text: "和朋友聚在一起聊天", code: 'E' },
            QuestionOption { text: "一个人安静地待着", code: 'I' },
        ],
    },
    Question {
        id: 6,
        text: "你更倾向于注意到：",
        options: [
            QuestionOption { text: "细节与真实发生的事情", code: 'S' },
            QuestionOption { text: "联系、暗示与隐藏的含义", code: 'N' },
        ],
    },
    Question {
        id: 7,
        text: "你认为哪种评价更悦耳：",
        options: [
            QuestionOption { text: "\u{201c}一个冷静理智的人\u{201d}", code: 'T' },
            QuestionOption { text: "\u{201c}一个有同情心的人\u{201d}", code: 'F' },
        ],
    },
    Question {
        id: 8,
        text: "你是否通常：",
        options: [
            QuestionOption { text: "早早做好决定并感到轻松", code: 'J' },
            QuestionOption { text: "保留选择权并等待更多信息", code: 'P' },
        ],
    },
];

/// The four trait axes in type-code order. The first pole of each pair
/// wins ties.
const AXES: [(char, char); 4] = [('E', 'I'), ('S', 'N'), ('T', 'F'), ('J', 'P')];

/// Recorded answers: question id → trait letter. Later answers for the
/// same id overwrite.
#[derive(Debug, Clone, Default)]
pub struct Answers(BTreeMap<u8, char>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a question.
    ///
    /// The id must belong to the catalog and the letter must be one of
    /// that question's two option codes.
    pub fn record(&mut self, id: u8, code: char) -> Result<()> {
        let question = QUESTIONS
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| MindwellError::invalid_input(format!("unknown question id {id}")))?;
        if !question.options.iter().any(|opt| opt.code == code) {
            return Err(MindwellError::invalid_input(format!(
                "answer '{code}' is not an option for question {id}"
            )));
        }
        self.0.insert(id, code);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == QUESTIONS.len()
    }

    fn count(&self, code: char) -> usize {
        self.0.values().filter(|&&c| c == code).count()
    }
}

/// Tallies the recorded answers into a four-letter type code.
///
/// Operates on whatever subset of answers is present; an empty map
/// yields "ESTJ". Insertion order never affects the result.
pub fn score(answers: &Answers) -> String {
    AXES.iter()
        .map(|&(first, second)| {
            if answers.count(first) >= answers.count(second) {
                first
            } else {
                second
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answers_score_estj() {
        assert_eq!(score(&Answers::new()), "ESTJ");
    }

    #[test]
    fn full_introvert_profile() {
        let mut answers = Answers::new();
        for (id, code) in [
            (1, 'I'),
            (2, 'N'),
            (3, 'F'),
            (4, 'P'),
            (5, 'I'),
            (6, 'N'),
            (7, 'F'),
            (8, 'P'),
        ] {
            answers.record(id, code).unwrap();
        }
        assert!(answers.is_complete());
        assert_eq!(score(&answers), "INFP");
    }

    #[test]
    fn per_axis_ties_fall_to_the_default_pole() {
        let mut answers = Answers::new();
        // One vote each way on E/I; S/N, T/F, J/P untouched.
        answers.record(1, 'E').unwrap();
        answers.record(5, 'I').unwrap();
        assert_eq!(score(&answers), "ESTJ");
    }

    #[test]
    fn result_alphabet_is_fixed_per_axis() {
        // Exhaustively walk every combination of the 8 binary choices.
        for mask in 0u16..256 {
            let mut answers = Answers::new();
            for (i, question) in QUESTIONS.iter().enumerate() {
                let pick = (mask >> i) & 1;
                answers
                    .record(question.id, question.options[pick as usize].code)
                    .unwrap();
            }
            let code = score(&answers);
            let bytes = code.as_bytes();
            assert_eq!(bytes.len(), 4);
            assert!(matches!(bytes[0], b'E' | b'I'));
            assert!(matches!(bytes[1], b'S' | b'N'));
            assert!(matches!(bytes[2], b'T' | b'F'));
            assert!(matches!(bytes[3], b'J' | b'P'));
        }
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let pairs = [(1, 'E'), (2, 'N'), (3, 'T'), (4, 'P'), (5, 'I'), (6, 'N')];

        let mut forward = Answers::new();
        for (id, code) in pairs {
            forward.record(id, code).unwrap();
        }
        let mut backward = Answers::new();
        for (id, code) in pairs.iter().rev() {
            backward.record(*id, *code).unwrap();
        }
        assert_eq!(score(&forward), score(&backward));
    }

    #[test]
    fn later_answers_overwrite() {
        let mut answers = Answers::new();
        answers.record(1, 'E').unwrap();
        answers.record(1, 'I').unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(score(&answers), "ISTJ");
    }

    #[test]
    fn rejects_foreign_ids_and_codes() {
        let mut answers = Answers::new();
        assert!(answers.record(9, 'E').is_err());
        // Question 1 is an E/I question; 'S' belongs elsewhere.
        assert!(answers.record(1, 'S').is_err());
        assert!(answers.is_empty());
    }
}
