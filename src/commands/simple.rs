//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: type part of a name to see suggestions,
//! a full name (or the only remaining suggestion) to guess it.

use super::CommandError;
use crate::core::Entity;
use crate::game::{GameState, Session};
use crate::output::{print_history, print_legend, print_solved_banner, print_suggestions};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// What the player's line of input resolved to
#[derive(Debug, PartialEq, Eq)]
pub enum LineAction<'a> {
    Quit,
    NewGame,
    Hint,
    Guess(&'a Entity),
    Suggest(Vec<&'a Entity>),
}

/// Interpret one line of input against the current session
///
/// Commands are full words only, so a single letter is always a name prefix.
/// An exact identifier or display name is a guess; otherwise the line is a
/// prefix, and a prefix with exactly one suggestion is treated as that guess.
#[must_use]
pub fn interpret_line<'a, R: Rng>(session: &Session<'a, R>, line: &str) -> LineAction<'a> {
    let input = line.trim();
    match input.to_lowercase().as_str() {
        "quit" | "exit" => return LineAction::Quit,
        "new" => return LineAction::NewGame,
        "hint" | "?" => return LineAction::Hint,
        _ => {}
    }

    if let Some(entity) = session.catalog().resolve(input) {
        return LineAction::Guess(entity);
    }

    let suggestions = session.suggest(input);
    if let [only] = suggestions.as_slice() {
        LineAction::Guess(*only)
    } else {
        LineAction::Suggest(suggestions)
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<'_, R>) -> Result<(), CommandError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Champdle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret champion. Each guess is compared attribute by attribute:");
    print_legend();
    println!("\nType part of a name to see suggestions, or a full name to guess.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'hint' for remaining candidates\n");

    if session.state() == GameState::NotStarted {
        session.start_new_game();
    }

    loop {
        let turn = session.history().len() + 1;
        let line = get_user_input(&format!("Guess #{turn}"))?;

        match interpret_line(session, &line) {
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::NewGame => {
                session.start_new_game();
                println!("\n🔄 New game started!\n");
            }
            LineAction::Hint => print_hint(session),
            LineAction::Suggest(suggestions) => {
                if line.trim().is_empty() {
                    continue;
                }
                print_suggestions(&suggestions);
            }
            LineAction::Guess(entity) => {
                if session.guessed().contains(entity.identifier()) {
                    println!(
                        "{}",
                        format!("Already guessed {}", entity.display_name()).yellow()
                    );
                    continue;
                }

                session.submit_guess(entity.identifier())?;
                println!();
                print_history(session.catalog().schema(), session.history());
                println!();

                if session.is_solved() {
                    print_solved_banner(session.history());

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session.start_new_game();
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn print_hint<R: Rng>(session: &Session<'_, R>) {
    let candidates = session.candidates();
    println!(
        "\n💡 {} candidates remaining",
        candidates.len().to_string().bright_cyan().bold()
    );
    if candidates.len() <= 10 {
        for candidate in &candidates {
            println!("  • {}", candidate.display_name());
        }
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn started(catalog: &Catalog) -> Session<'_> {
        let mut session = Session::new(catalog, StdRng::seed_from_u64(1));
        session.start_with_target("zed").unwrap();
        session
    }

    #[test]
    fn commands_are_recognized() {
        let catalog = Catalog::champions().unwrap();
        let session = started(&catalog);

        assert_eq!(interpret_line(&session, "QUIT"), LineAction::Quit);
        assert_eq!(interpret_line(&session, " new "), LineAction::NewGame);
        assert_eq!(interpret_line(&session, "hint"), LineAction::Hint);
    }

    #[test]
    fn single_letter_is_a_prefix() {
        let catalog = Catalog::champions().unwrap();
        let mut session = started(&catalog);
        session.submit_guess("ahri").unwrap();

        match interpret_line(&session, "n") {
            LineAction::Suggest(list) => {
                let names: Vec<&str> = list.iter().map(|e| e.display_name()).collect();
                assert_eq!(names, ["Nasus", "Nautilus"]);
            }
            other => panic!("expected suggestions, got {other:?}"),
        }
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn full_name_is_a_guess() {
        let catalog = Catalog::champions().unwrap();
        let session = started(&catalog);

        let expected = catalog.get("jarvaniv").unwrap();
        assert_eq!(interpret_line(&session, "jarvan iv"), LineAction::Guess(expected));
        assert_eq!(interpret_line(&session, "jarvaniv"), LineAction::Guess(expected));
    }

    #[test]
    fn unique_prefix_is_a_guess() {
        let catalog = Catalog::champions().unwrap();
        let session = started(&catalog);

        let expected = catalog.get("thresh").unwrap();
        assert_eq!(interpret_line(&session, "thr"), LineAction::Guess(expected));
    }

    #[test]
    fn ambiguous_prefix_lists_suggestions() {
        let catalog = Catalog::champions().unwrap();
        let session = started(&catalog);

        match interpret_line(&session, "ja") {
            LineAction::Suggest(list) => {
                let names: Vec<&str> = list.iter().map(|e| e.display_name()).collect();
                assert_eq!(names, ["Janna", "Jarvan IV", "Jax"]);
            }
            other => panic!("expected suggestions, got {other:?}"),
        }
    }

    #[test]
    fn guessed_entities_leave_suggestions() {
        let catalog = Catalog::champions().unwrap();
        let mut session = started(&catalog);
        session.submit_guess("janna").unwrap();
        session.submit_guess("jax").unwrap();

        let expected = catalog.get("jarvaniv").unwrap();
        assert_eq!(interpret_line(&session, "ja"), LineAction::Guess(expected));
    }
}
