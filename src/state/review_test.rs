use super::*;

#[test]
fn review_answers_default_is_empty() {
    let answers = ReviewAnswers::default();
    assert!(answers.is_empty());
    assert_eq!(answers.len(), 0);
    assert_eq!(answers.get(1), None);
}

#[test]
fn remarking_a_word_keeps_single_latest_answer() {
    let mut answers = ReviewAnswers::default();
    answers.mark(5, true);
    answers.mark(5, false);

    assert_eq!(answers.len(), 1);
    assert_eq!(answers.get(5), Some(false));
    let collected: Vec<_> = answers.iter().collect();
    assert_eq!(collected, vec![ReviewAnswer { word_id: 5, correct: false }]);
}

#[test]
fn marking_preserves_other_entries() {
    let mut answers = ReviewAnswers::default();
    answers.mark(1, true);
    answers.mark(2, false);
    answers.mark(1, false);

    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get(1), Some(false));
    assert_eq!(answers.get(2), Some(false));
}

#[test]
fn empty_buffer_builds_no_submission() {
    assert!(ReviewAnswers::default().to_submission().is_none());
}

#[test]
fn submission_lists_answers_in_word_id_order() {
    let mut answers = ReviewAnswers::default();
    answers.mark(9, true);
    answers.mark(3, false);

    let submission = answers.to_submission().unwrap();
    assert_eq!(
        submission.answers,
        vec![ReviewAnswer { word_id: 3, correct: false }, ReviewAnswer { word_id: 9, correct: true }]
    );
}

#[test]
fn clear_empties_buffer() {
    let mut answers = ReviewAnswers::default();
    answers.mark(1, true);
    answers.clear();
    assert!(answers.is_empty());
}
