use cartamaroc_engine::errors::TriviaError;
use cartamaroc_engine::trivia::{
    LevelBlock, Question, QuestionBank, TriviaOutcome, TriviaSession,
};

fn question(text: &str, correct: &str) -> Question {
    Question {
        question_text: text.to_string(),
        options: vec![
            correct.to_string(),
            "wrong 1".to_string(),
            "wrong 2".to_string(),
            "wrong 3".to_string(),
        ],
        correct_answer: correct.to_string(),
    }
}

/// One question per level so selection order is fixed regardless of seed.
fn three_question_bank() -> QuestionBank {
    QuestionBank::new(vec![
        LevelBlock {
            level_name: "Level 1".to_string(),
            questions: vec![question("q1", "a1")],
        },
        LevelBlock {
            level_name: "Level 2".to_string(),
            questions: vec![question("q2", "a2")],
        },
        LevelBlock {
            level_name: "Level 3".to_string(),
            questions: vec![question("q3", "a3")],
        },
    ])
}

fn session(players: &[&str], ladder: Vec<u64>) -> TriviaSession {
    TriviaSession::with_settings(&three_question_bank(), players.to_vec(), ladder, 1, Some(1))
        .unwrap()
}

#[test]
fn wrong_answerers_are_eliminated_with_zero_on_the_first_question() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    let answer = s.current_question().unwrap().correct_answer.clone();

    s.submit_answer("alice", &answer).unwrap();
    s.submit_answer("bob", "wrong 1").unwrap();

    let result = s.resolve_round().unwrap();
    assert_eq!(result.question_index, 0);
    assert_eq!(result.correct, vec!["alice".to_string()]);
    assert_eq!(result.eliminated.len(), 1);
    assert_eq!(result.eliminated[0].player, "bob");
    assert_eq!(result.eliminated[0].prize, 0);
    assert!(result.outcome.is_none());

    assert_eq!(s.current_index(), 1);
    assert!(s.is_active("alice"));
    assert!(!s.is_active("bob"));
    assert_eq!(s.eliminated_prizes().get("bob"), Some(&0));
}

#[test]
fn eliminated_players_keep_the_previous_prize() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    let answer = s.current_question().unwrap().correct_answer.clone();
    s.submit_answer("alice", &answer).unwrap();
    s.submit_answer("bob", &answer).unwrap();
    s.resolve_round().unwrap();

    // second question: bob fails and keeps the first prize
    let answer = s.current_question().unwrap().correct_answer.clone();
    s.submit_answer("alice", &answer).unwrap();
    s.submit_answer("bob", "wrong 2").unwrap();
    let result = s.resolve_round().unwrap();

    assert_eq!(result.eliminated[0].player, "bob");
    assert_eq!(result.eliminated[0].prize, 100);
    assert_eq!(s.eliminated_prizes().get("bob"), Some(&100));
}

#[test]
fn non_answerers_count_as_wrong_on_forced_resolution() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    let answer = s.current_question().unwrap().correct_answer.clone();
    s.submit_answer("alice", &answer).unwrap();
    // bob never answers: the round can still be resolved at any time

    let result = s.resolve_round().unwrap();
    assert_eq!(result.correct, vec!["alice".to_string()]);
    assert_eq!(result.eliminated[0].player, "bob");
    assert!(!s.is_active("bob"));
}

#[test]
fn losing_every_player_ends_the_session_in_a_loss() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    // nobody answers
    let result = s.resolve_round().unwrap();
    assert_eq!(result.eliminated.len(), 2);
    assert_eq!(result.outcome, Some(TriviaOutcome::Loss));
    assert_eq!(s.outcome(), Some(&TriviaOutcome::Loss));
    assert_eq!(s.active_players().count(), 0);

    // the session is over for good
    assert!(matches!(
        s.submit_answer("alice", "a1").unwrap_err(),
        TriviaError::Finished
    ));
    assert!(matches!(s.resolve_round().unwrap_err(), TriviaError::Finished));
}

#[test]
fn exhausting_the_questions_wins_for_all_remaining_players() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    for _ in 0..3 {
        let answer = s.current_question().unwrap().correct_answer.clone();
        s.submit_answer("alice", &answer).unwrap();
        s.submit_answer("bob", &answer).unwrap();
        s.resolve_round().unwrap();
    }
    assert_eq!(
        s.outcome(),
        Some(&TriviaOutcome::Win {
            winners: vec!["alice".to_string(), "bob".to_string()]
        })
    );
    assert!(s.current_question().is_none());
    assert!(s.current_prize().is_none());
}

#[test]
fn each_player_answers_at_most_once_per_round() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    s.submit_answer("alice", "wrong 1").unwrap();
    // a second attempt is rejected, even with the right answer
    let answer = s.current_question().unwrap().correct_answer.clone();
    assert!(matches!(
        s.submit_answer("alice", &answer).unwrap_err(),
        TriviaError::AlreadyAnswered(_)
    ));

    // the first (wrong) answer stands
    let result = s.resolve_round().unwrap();
    assert_eq!(result.eliminated[0].player, "alice");
}

#[test]
fn outsiders_cannot_answer() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    assert!(matches!(
        s.submit_answer("mallory", "a1").unwrap_err(),
        TriviaError::NotInRound(_)
    ));

    // an eliminated player is an outsider from the next round on
    let answer = s.current_question().unwrap().correct_answer.clone();
    s.submit_answer("alice", &answer).unwrap();
    s.resolve_round().unwrap();
    assert!(matches!(
        s.submit_answer("bob", "anything").unwrap_err(),
        TriviaError::NotInRound(_)
    ));
}

#[test]
fn answered_sets_reset_between_rounds() {
    let mut s = session(&["alice", "bob"], vec![100, 200, 300]);
    let answer = s.current_question().unwrap().correct_answer.clone();
    s.submit_answer("alice", &answer).unwrap();
    s.submit_answer("bob", &answer).unwrap();
    s.resolve_round().unwrap();

    // both may answer again on the next question
    let answer = s.current_question().unwrap().correct_answer.clone();
    s.submit_answer("alice", &answer).unwrap();
    s.submit_answer("bob", &answer).unwrap();
}

#[test]
fn prizes_track_the_ladder_position() {
    let mut s = session(&["alice"], vec![10, 20, 30]);
    assert_eq!(s.current_prize(), Some(10));
    let answer = s.current_question().unwrap().correct_answer.clone();
    s.submit_answer("alice", &answer).unwrap();
    s.resolve_round().unwrap();
    assert_eq!(s.current_prize(), Some(20));
}
