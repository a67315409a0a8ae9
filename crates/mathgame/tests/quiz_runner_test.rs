//! Tests for the line-based quiz runner.

use mathgame::QuizRunner;
use mathgame_quiz::{Difficulty, Quiz};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn quiz() -> Quiz<StdRng> {
    Quiz::new(StdRng::seed_from_u64(11), Difficulty(10))
}

#[tokio::test]
async fn test_correct_answer_scores() {
    let quiz = quiz();
    let choice = quiz.correct_index().unwrap() + 1;
    let input = format!("{choice}\n");
    let mut output = Vec::new();

    let score = QuizRunner::new(quiz, input.as_bytes(), &mut output)
        .run(1)
        .await
        .unwrap();

    assert_eq!(score, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Correct!"));
    assert!(text.contains("Score: 1"));
}

#[tokio::test]
async fn test_invalid_choices_are_reprompted() {
    let quiz = quiz();
    let choice = quiz.correct_index().unwrap() + 1;
    let input = format!("0\nten\n{choice}\n");
    let mut output = Vec::new();

    let score = QuizRunner::new(quiz, input.as_bytes(), &mut output)
        .run(1)
        .await
        .unwrap();

    assert_eq!(score, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("'0' is not a choice"));
    assert!(text.contains("'ten' is not a choice"));
}

#[tokio::test]
async fn test_input_closing_ends_early() {
    let mut output = Vec::new();
    let mut runner = QuizRunner::new(quiz(), &b""[..], &mut output);

    let score = runner.run(5).await.unwrap();

    assert_eq!(score, 0);
    assert_eq!(runner.quiz().score(), 0);
}
