//! Game session state machine
//!
//! `NotStarted -> InProgress -> Solved`. A new game can be started from any
//! state; nothing else leaves `Solved`.

use crate::catalog::Catalog;
use crate::core::{Entity, GuessResult, evaluate};
use crate::solver::filter_candidates;
use rand::Rng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    InProgress,
    Solved,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not started"),
            Self::InProgress => write!(f, "In progress"),
            Self::Solved => write!(f, "Solved"),
        }
    }
}

/// Caller errors for session operations
///
/// These are caller mistakes, not game events: front ends check state and
/// resolve names before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),
    #[error("the game is already solved")]
    GameAlreadySolved,
    #[error("no game has been started")]
    GameNotStarted,
}

/// One playthrough against a secret target
///
/// The random source is injected so tests and `--seed` runs can fix the target.
pub struct Session<'a, R: Rng = StdRng> {
    catalog: &'a Catalog,
    rng: R,
    state: GameState,
    target: Option<&'a Entity>,
    history: Vec<GuessResult>,
    guessed: FxHashSet<String>,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Create a session in the `NotStarted` state
    #[must_use]
    pub fn new(catalog: &'a Catalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            state: GameState::NotStarted,
            target: None,
            history: Vec::new(),
            guessed: FxHashSet::default(),
        }
    }

    /// Start a new game with a uniformly random target
    ///
    /// Valid from any state; history and guessed set are cleared.
    pub fn start_new_game(&mut self) {
        let entities = self.catalog.list_all();
        let index = self.rng.random_range(0..entities.len());
        self.begin(&entities[index]);
    }

    /// Start a new game against a chosen target
    ///
    /// # Errors
    /// Returns `GameError::UnknownEntity` if the identifier is not in the
    /// catalog; the current game is left untouched in that case.
    pub fn start_with_target(&mut self, identifier: &str) -> Result<(), GameError> {
        let catalog = self.catalog;
        let target = catalog
            .get(identifier)
            .ok_or_else(|| GameError::UnknownEntity(identifier.to_string()))?;
        self.begin(target);
        Ok(())
    }

    fn begin(&mut self, target: &'a Entity) {
        self.target = Some(target);
        self.history.clear();
        self.guessed.clear();
        self.state = GameState::InProgress;
        log::debug!("new game started");
        log::trace!("target is '{}'", target.identifier());
    }

    /// Submit a guess by identifier
    ///
    /// Re-submitting an identifier already guessed this game is a no-op that
    /// returns the earlier result.
    ///
    /// # Errors
    /// - `GameNotStarted` before the first game
    /// - `GameAlreadySolved` once the target was found
    /// - `UnknownEntity` if the identifier is not in the catalog
    ///
    /// History is never modified on error.
    ///
    /// # Examples
    /// ```
    /// use champdle::catalog::Catalog;
    /// use champdle::game::{GameState, Session};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let catalog = Catalog::champions().unwrap();
    /// let mut session = Session::new(&catalog, StdRng::seed_from_u64(7));
    /// session.start_with_target("garen").unwrap();
    ///
    /// let result = session.submit_guess("darius").unwrap();
    /// assert!(!result.is_perfect());
    ///
    /// let result = session.submit_guess("garen").unwrap();
    /// assert!(result.is_perfect());
    /// assert_eq!(session.state(), GameState::Solved);
    /// ```
    pub fn submit_guess(&mut self, identifier: &str) -> Result<&GuessResult, GameError> {
        let target = match self.state {
            GameState::NotStarted => return Err(self.reject(GameError::GameNotStarted)),
            GameState::Solved => return Err(self.reject(GameError::GameAlreadySolved)),
            GameState::InProgress => self.target.ok_or(GameError::GameNotStarted)?,
        };

        let catalog = self.catalog;
        let Some(guess) = catalog.get(identifier) else {
            return Err(self.reject(GameError::UnknownEntity(identifier.to_string())));
        };

        if let Some(index) = self
            .history
            .iter()
            .position(|r| r.guess().identifier() == identifier)
        {
            log::debug!("'{identifier}' already guessed, returning earlier result");
            return Ok(&self.history[index]);
        }
        // `guessed` mirrors the history identifiers
        debug_assert!(!self.guessed.contains(identifier));

        let result = evaluate(catalog.schema(), target, guess);
        self.guessed.insert(identifier.to_string());
        if result.solves_target() {
            self.state = GameState::Solved;
            log::info!("solved in {} guesses", self.history.len() + 1);
        } else {
            log::debug!("guess #{} '{identifier}' scored {}", self.history.len() + 1, result.to_emoji());
        }
        self.history.push(result);

        Ok(&self.history[self.history.len() - 1])
    }

    fn reject(&self, error: GameError) -> GameError {
        log::warn!("rejected guess in state '{}': {error}", self.state);
        error
    }

    /// Suggestions for the current input, excluding entities already guessed
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Vec<&'a Entity> {
        self.catalog.suggest(prefix, &self.guessed)
    }

    /// Entities still consistent with every result so far
    ///
    /// Empty before the first game.
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Entity> {
        if self.state == GameState::NotStarted {
            return Vec::new();
        }
        filter_candidates(self.catalog, &self.history)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Results in submission order (oldest first)
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &FxHashSet<String> {
        &self.guessed
    }

    /// The target, revealed only once it has been guessed
    #[must_use]
    pub fn solution(&self) -> Option<&'a Entity> {
        if self.is_solved() { self.target } else { None }
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttributeKind, MatchVerdict, Schema};
    use rand::SeedableRng;

    fn role_catalog() -> Catalog {
        let schema = Schema::new([("gender", AttributeKind::Single), ("role", AttributeKind::Multi)]);
        Catalog::new(
            schema,
            vec![
                Entity::new("A", "Alpha", "")
                    .with_single("gender", "Male")
                    .with_multi("role", ["Top"]),
                Entity::new("B", "Beta", "")
                    .with_single("gender", "Male")
                    .with_multi("role", ["Top", "Jungle"]),
                Entity::new("C", "Gamma", "")
                    .with_single("gender", "Female")
                    .with_multi("role", ["Support"]),
            ],
        )
        .unwrap()
    }

    fn session(catalog: &Catalog) -> Session<'_> {
        Session::new(catalog, StdRng::seed_from_u64(42))
    }

    #[test]
    fn new_session_not_started() {
        let catalog = role_catalog();
        let session = session(&catalog);

        assert_eq!(session.state(), GameState::NotStarted);
        assert!(session.history().is_empty());
        assert!(session.solution().is_none());
        assert!(session.candidates().is_empty());
    }

    #[test]
    fn submit_before_start_fails() {
        let catalog = role_catalog();
        let mut s = session(&catalog);

        assert_eq!(s.submit_guess("A"), Err(GameError::GameNotStarted));
        assert!(s.history().is_empty());
    }

    #[test]
    fn start_new_game_resets_everything() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();
        s.submit_guess("A").unwrap();
        s.submit_guess("B").unwrap();
        assert!(s.is_solved());

        s.start_new_game();
        assert_eq!(s.state(), GameState::InProgress);
        assert!(!s.is_solved());
        assert!(s.history().is_empty());
        assert!(s.guessed().is_empty());
    }

    #[test]
    fn start_new_game_from_in_progress() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_new_game();
        s.submit_guess("A").unwrap();
        assert_eq!(s.history().len(), 1);

        s.start_new_game();
        assert_eq!(s.state(), GameState::InProgress);
        assert!(s.history().is_empty());
    }

    #[test]
    fn spec_scenario_partial_not_solved() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();

        let result = s.submit_guess("A").unwrap();
        assert_eq!(result.verdict("role"), Some(MatchVerdict::Partial));
        assert_eq!(result.verdict("gender"), Some(MatchVerdict::Exact));
        assert!(!s.is_solved());
        assert!(s.solution().is_none());
    }

    #[test]
    fn guessing_target_solves() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("C").unwrap();

        let result = s.submit_guess("C").unwrap();
        assert!(result.is_perfect());
        assert_eq!(s.state(), GameState::Solved);
        assert_eq!(s.solution().unwrap().identifier(), "C");
    }

    #[test]
    fn submit_after_solved_fails_without_touching_history() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("C").unwrap();
        s.submit_guess("C").unwrap();

        assert_eq!(s.submit_guess("A"), Err(GameError::GameAlreadySolved));
        assert_eq!(s.submit_guess("C"), Err(GameError::GameAlreadySolved));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn unknown_entity_fails_without_touching_history() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();
        s.submit_guess("A").unwrap();

        assert_eq!(
            s.submit_guess("Z"),
            Err(GameError::UnknownEntity("Z".to_string()))
        );
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.state(), GameState::InProgress);
    }

    #[test]
    fn duplicate_guess_is_idempotent() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();

        let first = s.submit_guess("A").unwrap().clone();
        let second = s.submit_guess("A").unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.guessed().len(), 1);
    }

    #[test]
    fn duplicate_guess_returns_its_own_row() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();
        s.submit_guess("A").unwrap();
        s.submit_guess("C").unwrap();

        let again = s.submit_guess("A").unwrap();
        assert_eq!(again.guess().identifier(), "A");
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn attribute_twins_do_not_linger_as_candidates() {
        let schema = Schema::new([("role", AttributeKind::Multi)]);
        let catalog = Catalog::new(
            schema,
            vec![
                Entity::new("A", "A", "").with_multi("role", ["Top"]),
                Entity::new("B", "B", "").with_multi("role", ["Top"]),
                Entity::new("C", "C", "").with_multi("role", ["Mid"]),
            ],
        )
        .unwrap();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();

        assert!(s.submit_guess("A").unwrap().is_perfect());
        assert!(!s.is_solved());
        let ids: Vec<&str> = s.candidates().iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, ["B"]);

        s.submit_guess("B").unwrap();
        assert!(s.is_solved());
        let ids: Vec<&str> = s.candidates().iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, ["B"]);
    }

    #[test]
    fn start_with_unknown_target_keeps_game() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();
        s.submit_guess("A").unwrap();

        assert_eq!(
            s.start_with_target("nope"),
            Err(GameError::UnknownEntity("nope".to_string()))
        );
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.state(), GameState::InProgress);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let catalog = Catalog::champions().unwrap();
        let solve_with_seed = |seed: u64| {
            let mut s = Session::new(&catalog, StdRng::seed_from_u64(seed));
            s.start_new_game();
            // Brute-force the target to reveal it
            for entity in catalog.list_all() {
                if s.submit_guess(entity.identifier()).unwrap().solves_target() {
                    break;
                }
            }
            s.solution().unwrap().identifier().to_string()
        };

        assert_eq!(solve_with_seed(1234), solve_with_seed(1234));
    }

    #[test]
    fn random_target_always_reachable() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        for _ in 0..20 {
            s.start_new_game();
            assert_eq!(s.candidates().len(), 3);
            let solved = catalog
                .list_all()
                .iter()
                .any(|e| s.submit_guess(e.identifier()).is_ok_and(GuessResult::solves_target));
            assert!(solved);
            assert!(s.is_solved());
        }
    }

    #[test]
    fn suggest_excludes_guessed() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("C").unwrap();
        assert_eq!(s.suggest("a").len(), 1);

        s.submit_guess("A").unwrap();
        assert!(s.suggest("a").is_empty());
        assert!(s.suggest("").is_empty());
        assert_eq!(s.suggest("g").len(), 1);
    }

    #[test]
    fn candidates_narrow_and_keep_target() {
        let catalog = role_catalog();
        let mut s = session(&catalog);
        s.start_with_target("B").unwrap();
        assert_eq!(s.candidates().len(), 3);

        s.submit_guess("C").unwrap();
        let ids: Vec<&str> = s.candidates().iter().map(|e| e.identifier()).collect();
        assert!(ids.contains(&"B"));
        assert!(!ids.contains(&"C"));

        s.submit_guess("B").unwrap();
        let ids: Vec<&str> = s.candidates().iter().map(|e| e.identifier()).collect();
        assert_eq!(ids, ["B"]);
    }
}
