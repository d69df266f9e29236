//! # Trivia Command
//!
//! Runs a millionaire session at the terminal. Every active player is
//! prompted in turn for each question; a blank line (or EOF) counts as not
//! answering, which is how a chat adapter's round timeout looks to the
//! engine. After the prompts the round is resolved and the results are
//! printed, until the session ends in a win or a loss.

use crate::error::CliError;
use crate::io_utils::read_input_line;
use cartamaroc_engine::trivia::{QuestionBank, TriviaOutcome, TriviaSession};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Handle the trivia command: load the bank, then play rounds to the end.
pub fn handle_trivia_command(
    questions: PathBuf,
    players: Vec<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let bank = QuestionBank::load(&questions)?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut session = TriviaSession::new(&bank, players, Some(seed))?;

    writeln!(
        out,
        "trivia: {} questions, {} players, seed={}",
        session.question_count(),
        session.active_players().count(),
        seed
    )?;

    while session.outcome().is_none() {
        let Some(question) = session.current_question() else {
            break;
        };
        let text = question.question_text.clone();
        let options = question.options.clone();
        let number = session.current_index() + 1;
        let prize = session.current_prize().unwrap_or(0);

        writeln!(out)?;
        writeln!(
            out,
            "Question {}/{} - Prize: ${}",
            number,
            session.question_count(),
            prize
        )?;
        writeln!(out, "{}", text)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, option)?;
        }

        let active: Vec<String> = session.active_players().map(str::to_string).collect();
        for player in &active {
            writeln!(out, "{}, your answer (1-{}, blank to pass):", player, options.len())?;
            let Some(line) = read_input_line(stdin) else {
                continue; // EOF: remaining players time out
            };
            if line.is_empty() {
                continue;
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => {
                    session.submit_answer(player, &options[n - 1])?;
                    writeln!(out, "Answer locked in!")?;
                }
                _ => {
                    writeln!(out, "No such option; counted as a pass.")?;
                }
            }
        }

        let result = session.resolve_round()?;
        writeln!(out, "Correct answer: {}", result.correct_answer)?;
        if result.correct.is_empty() {
            writeln!(out, "Correct players: none")?;
        } else {
            writeln!(out, "Correct players: {}", result.correct.join(", "))?;
        }
        for e in &result.eliminated {
            writeln!(out, "{} eliminated - keeps ${}", e.player, e.prize)?;
        }
    }

    writeln!(out)?;
    match session.outcome() {
        Some(TriviaOutcome::Win { winners }) => {
            writeln!(out, "YOU WIN! Millionaires: {}", winners.join(", "))?;
        }
        Some(TriviaOutcome::Loss) => {
            writeln!(out, "All players eliminated! Final winnings:")?;
            for (player, prize) in session.eliminated_prizes() {
                writeln!(out, "  {} - ${}", player, prize)?;
            }
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const BANK: &str = r#"[
        {
            "levelName": "Level 1",
            "questions": [
                {
                    "questionText": "What is 2+2?",
                    "options": ["3", "4", "5", "6"],
                    "correctAnswer": "4"
                }
            ]
        },
        {
            "levelName": "Level 2",
            "questions": [
                {
                    "questionText": "What is 3*3?",
                    "options": ["6", "7", "8", "9"],
                    "correctAnswer": "9"
                }
            ]
        }
    ]"#;

    fn bank_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("Questions.json");
        std::fs::write(&path, BANK).unwrap();
        path
    }

    fn run_trivia(players: &[&str], input: &str) -> (Result<(), CliError>, String) {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_trivia_command(
            bank_file(&dir),
            players.iter().map(|s| s.to_string()).collect(),
            Some(1),
            &mut out,
            &mut stdin,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_all_correct_answers_win() {
        // ana answers both questions correctly: option 2 then option 4
        let (result, output) = run_trivia(&["ana"], "2\n4\n");
        assert!(result.is_ok());
        assert!(output.contains("Question 1/2"));
        assert!(output.contains("Question 2/2"));
        assert!(output.contains("YOU WIN! Millionaires: ana"));
    }

    #[test]
    fn test_wrong_answer_on_first_question_keeps_nothing() {
        let (result, output) = run_trivia(&["ana"], "1\n");
        assert!(result.is_ok());
        assert!(output.contains("ana eliminated - keeps $0"));
        assert!(output.contains("All players eliminated!"));
    }

    #[test]
    fn test_silence_counts_as_a_timeout() {
        let (result, output) = run_trivia(&["ana", "bilal"], "2\n\n");
        assert!(result.is_ok());
        // ana advanced, bilal passed and was eliminated with nothing
        assert!(output.contains("bilal eliminated - keeps $0"));
        assert!(output.contains("Correct players: ana"));
    }

    #[test]
    fn test_elimination_on_second_question_keeps_the_first_prize() {
        // correct on q1, wrong on q2
        let (result, output) = run_trivia(&["ana"], "2\n1\n");
        assert!(result.is_ok());
        assert!(output.contains("ana eliminated - keeps $100"));
    }

    #[test]
    fn test_missing_bank_is_a_config_error() {
        let mut out = Vec::new();
        let mut stdin = Cursor::new(Vec::new());
        let result = handle_trivia_command(
            PathBuf::from("/nonexistent/Questions.json"),
            vec!["ana".to_string()],
            Some(1),
            &mut out,
            &mut stdin,
        );
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
