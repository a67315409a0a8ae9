//! Tests for quiz scoring.

use mathgame_quiz::{Difficulty, Quiz, QuizError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn quiz(seed: u64) -> Quiz<StdRng> {
    Quiz::new(StdRng::seed_from_u64(seed), Difficulty::default())
}

#[test]
fn test_starts_at_zero() {
    let quiz = quiz(1);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.difficulty(), Difficulty(100));
}

#[test]
fn test_correct_answer_scores_a_point() {
    let mut quiz = quiz(2);
    let index = quiz.correct_index().expect("sum is always offered");
    let expected = quiz.problem().answer();

    let answer = quiz.answer(index).unwrap();

    assert!(answer.correct);
    assert_eq!(answer.chosen, expected);
    assert_eq!(answer.score, 1);
    assert_eq!(quiz.score(), 1);
}

#[test]
fn test_wrong_answer_loses_a_point() {
    // Search seeds for a problem with at least one wrong choice.
    let mut quiz = (0..100)
        .map(quiz)
        .find(|q| q.problem().choices().iter().any(|c| *c != q.problem().answer()))
        .expect("some seed offers a wrong choice");
    let expected = quiz.problem().answer();
    let index = quiz
        .problem()
        .choices()
        .iter()
        .position(|c| *c != expected)
        .unwrap();

    let answer = quiz.answer(index).unwrap();

    assert!(!answer.correct);
    assert_eq!(answer.expected, expected);
    assert_eq!(quiz.score(), -1);
}

#[test]
fn test_out_of_bounds_changes_nothing() {
    let mut quiz = quiz(3);
    let before = quiz.problem().clone();

    assert_eq!(quiz.answer(9), Err(QuizError::ChoiceOutOfBounds(9)));
    assert_eq!(quiz.problem(), &before);
    assert_eq!(quiz.score(), 0);
}

#[test]
fn test_score_tracks_many_rounds() {
    let mut quiz = quiz(4);
    let mut expected_score = 0;
    for round in 0..50 {
        let index = if round % 3 == 0 {
            quiz.correct_index().unwrap()
        } else {
            round % 9
        };
        let answer = quiz.answer(index).unwrap();
        expected_score += if answer.correct { 1 } else { -1 };
        assert_eq!(answer.score, expected_score);
    }
    assert_eq!(quiz.score(), expected_score);
}
