//! Interactive advisor mode
//!
//! Text loop for games scored outside the program: the solver proposes
//! guesses, the player reports black/white counts from the physical board.

use crate::core::{GameParams, Match};
use crate::output::formatters::{feedback_pegs, sequence_pegs};
use crate::solver::{Advisor, AdvisorError, NullObserver, profile_guess};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive advisor loop
///
/// # Errors
/// Returns an error if reading user input fails or the suggestion search
/// cannot produce a guess.
pub fn run_interactive(params: GameParams) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Board: {} colors, {} pegs. I'll suggest guesses that minimize the",
        params.colors(),
        params.length()
    );
    println!("worst-case number of remaining codes. After each guess, enter the");
    println!("feedback from your board as two numbers:\n");
    println!("  black white   e.g. '2 1' for 2 exact hits and 1 displaced color");
    println!("  - Or type 'win' if the guess was exactly right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last feedback\n");

    let mut advisor = Advisor::new(params);

    loop {
        let remaining = advisor.remaining();
        let suggestion = advisor
            .suggest(&NullObserver)
            .map_err(|e| e.to_string())?;
        let turn = advisor.history().len() + 1;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {remaining} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        let evaluation = profile_guess(&suggestion, advisor.candidates());
        println!(
            "\nSuggested guess: {} {}",
            suggestion,
            sequence_pegs(&suggestion)
        );
        println!("   Worst case:   {} candidates remain\n", evaluation.worst_case);

        if remaining <= 10 {
            println!("Remaining candidates:");
            for candidate in advisor.candidates() {
                println!("  • {candidate} {}", sequence_pegs(candidate));
            }
            println!();
        }

        let input = get_user_input("Enter feedback (black white, 'win', or command)")?
            .to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                advisor.reset();
                println!("\nNew game started!\n");
            }
            "undo" | "u" => {
                if advisor.undo() {
                    println!("Undone! Back to turn {}\n", advisor.history().len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            "win" | "correct" | "yes" | "solved" => {
                print_win_banner(turn, &advisor);
                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        advisor.reset();
                        println!("\nNew game started!\n");
                    }
                    _ => {
                        println!("\nThanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            _ => {
                let Some(feedback) = parse_feedback(&input) else {
                    println!("{}", "Invalid input! Use 'black white', e.g. '2 1'\n".red());
                    continue;
                };

                if feedback.is_win(params.length()) {
                    print_win_banner(turn, &advisor);
                    return Ok(());
                }

                match advisor.apply_feedback(&suggestion, feedback) {
                    Ok(remaining) => {
                        println!("✓ {remaining} candidates remain\n");
                    }
                    Err(AdvisorError::InconsistentFeedback { .. }) => {
                        println!(
                            "{}",
                            "No code is consistent with that feedback. Some score was \
                             entered incorrectly; type 'undo' to go back.\n"
                                .red()
                        );
                    }
                    Err(err) => {
                        println!("{}\n", err.to_string().red());
                    }
                }
            }
        }
    }
}

/// Parse a "black white" pair of hit counts
fn parse_feedback(input: &str) -> Option<Match> {
    let mut tokens = input.split_whitespace();
    let black: u16 = tokens.next()?.parse().ok()?;
    let white: u16 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(Match::new(black, white))
}

fn print_win_banner(turn: usize, advisor: &Advisor) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "        C O D E   C R A C K E D !        ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    if !advisor.history().is_empty() {
        println!("\n  Guess history:");
        for (i, (guess, feedback)) in advisor.history().iter().enumerate() {
            println!(
                "    {}. {} {} {}",
                (i + 1).to_string().bright_black(),
                guess,
                sequence_pegs(guess),
                feedback_pegs(*feedback, advisor.params().length())
            );
        }
    }

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
