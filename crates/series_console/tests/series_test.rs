//! Scripted series played through the console boundary.

use series_console::{
    Console, ConsoleError, RoundOutcome, Series, SeriesConfig, SeriesOutcome,
};
use series_tictactoe::Marker;
use std::io::Cursor;

type ScriptedSeries<P> = Series<Cursor<&'static str>, Vec<u8>, P>;

fn first(candidates: &[usize]) -> usize {
    candidates[0]
}

fn config(winning_score: u32) -> SeriesConfig {
    SeriesConfig::default()
        .with_winning_score(winning_score)
        .with_think_delay_ms(0)
}

fn series(
    winning_score: u32,
    input: &'static str,
) -> ScriptedSeries<fn(&[usize]) -> usize> {
    let console = Console::new(Cursor::new(input), Vec::new());
    Series::new(config(winning_score), console, first as fn(&[usize]) -> usize)
}

fn output<P: series_tictactoe::FallbackPicker>(series: ScriptedSeries<P>) -> String {
    String::from_utf8(series.into_console().into_output()).unwrap()
}

#[test]
fn test_computer_takes_series_when_player_leaves_row_open() {
    // Computer opens round 1 at cell 0, then 1, then completes the top row.
    let mut series = series(1, "9\n7\n");
    let report = series.play().unwrap();

    assert_eq!(report.outcome, SeriesOutcome::Won(Marker::Computer));
    assert_eq!(report.rounds_played, 1);
    assert_eq!(report.score.computer(), 1);
    assert_eq!(report.score.player(), 0);

    let out = output(series);
    assert!(out.contains("The computer WON this round!"));
    assert!(out.contains("Computer WINS the series!"));
    assert!(out.contains("Final Score: Player: 0 | Computer: 1"));
    assert!(out.contains("| O | O | O |"));
    assert!(!out.contains("Do you want to play another round?"));
}

#[test]
fn test_invalid_moves_are_reprompted() {
    let mut series = series(1, "abc\n0\n1\n9\n7\n");
    let report = series.play().unwrap();
    assert_eq!(report.outcome, SeriesOutcome::Won(Marker::Computer));

    let out = output(series);
    assert_eq!(out.matches("Please enter a valid number between 1 and 9.").count(), 1);
    assert_eq!(out.matches("Invalid move. Try again.").count(), 2);
}

#[test]
fn test_player_can_decline_after_a_round() {
    let mut series = series(2, "9\n7\nmaybe\nn\n");
    let report = series.play().unwrap();

    assert_eq!(report.outcome, SeriesOutcome::Declined);
    assert_eq!(report.rounds_played, 1);

    let out = output(series);
    assert!(out.contains("Invalid input. Please enter Y or N."));
    assert!(out.contains("Final Score: Player: 0 | Computer: 1"));
    assert!(out.contains("Thanks for playing! Goodbye!"));
}

#[test]
fn test_player_opens_second_round_and_wins_it() {
    // Round 2: player 0, computer 1, player 3, computer blocks 6,
    // player 4, computer blocks 5, player 8 completes the main diagonal.
    let mut series = series(2, "9\n7\ny\n1\n4\n5\n9\nn\n");
    let report = series.play().unwrap();

    assert_eq!(report.outcome, SeriesOutcome::Declined);
    assert_eq!(report.rounds_played, 2);
    assert_eq!(report.score.player(), 1);
    assert_eq!(report.score.computer(), 1);

    let out = output(series);
    assert!(out.contains("Congratulations, the player WON this round!"));
    assert!(out.contains("Final Score: Player: 1 | Computer: 1"));
    assert_eq!(out.matches("Welcome to Tic Tac Toe - Best of 3").count(), 2);
}

#[test]
fn test_round_ends_in_draw() {
    // Computer: 0, player 4, computer 1, player 2 (blocks),
    // computer blocks 6, player 3, computer blocks 5, player 7,
    // computer fills 8.
    let mut series = series(1, "5\n3\n4\n8\n");
    let outcome = series.play_round(1).unwrap();
    assert_eq!(outcome, RoundOutcome::Draw);

    let out = output(series);
    assert!(out.contains("It's a draw!"));
    assert!(!out.contains("WON this round"));
}

#[test]
fn test_input_closed_mid_round() {
    let mut series = series(2, "");
    let err = series.play().unwrap_err();
    assert!(matches!(err, ConsoleError::InputClosed));
    assert_eq!(series.score().computer(), 0);
}

#[test]
fn test_one_by_one_board_goes_to_opener() {
    let console = Console::new(Cursor::new(""), Vec::new());
    let config = config(1).with_board_size(1);
    let mut series = Series::new(config, console, first as fn(&[usize]) -> usize);

    let report = series.play().unwrap();
    assert_eq!(report.outcome, SeriesOutcome::Won(Marker::Computer));
}

#[test]
fn test_full_board_win_is_not_a_draw() {
    // The player opens round 2 and completes the main diagonal on the ninth mark.
    let mut series = series(1, "1\n4\n8\n5\n9\n");
    let outcome = series.play_round(2).unwrap();
    assert_eq!(outcome, RoundOutcome::Won(Marker::Player));

    let out = output(series);
    assert!(out.contains("| X | O | O |\n+---+---+---+\n| X | X | O |\n+---+---+---+\n| O | X | X |"));
    assert!(out.contains("Congratulations, the player WON this round!"));
    assert!(!out.contains("It's a draw!"));
}

#[test]
fn test_player_takes_series_with_fork() {
    // X forks the bottom row and the anti-diagonal; the computer can block one.
    let mut series = series(1, "9\n3\n7\n8\n");
    let report = series.play().unwrap();

    assert_eq!(report.outcome, SeriesOutcome::Won(Marker::Player));
    assert_eq!(report.rounds_played, 1);
    assert_eq!(report.score.player(), 1);
    assert_eq!(report.score.computer(), 0);

    let out = output(series);
    assert!(out.contains("Congratulations, the player WON this round!"));
    assert!(out.contains("Player WINS the series! Congratulations!"));
    assert!(out.contains("Final Score: Player: 1 | Computer: 0"));
    assert!(!out.contains("Do you want to play another round?"));
}
