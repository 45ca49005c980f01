//! Per-screen fetch lifecycle. Each screen owns one [`LoadState`] slot;
//! transitions happen only on fetch start, success, or failure, and a
//! result from a superseded fetch is discarded on arrival.

use crate::error::FetchError;
use crate::fetch::RosterRow;
use crate::models::Pokemon;

/// Lifecycle of one screen's data slot.
#[derive(Debug, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> LoadState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn resolve(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail { name: String },
}

/// All mutable state behind the UI. Fetches run elsewhere; they hand
/// their tagged results back through the `finish_*` methods, which ignore
/// anything from a generation that has since been superseded.
pub struct App {
    pub screen: Screen,
    pub roster: LoadState<Vec<RosterRow>>,
    pub detail: LoadState<Pokemon>,
    pub selected: usize,
    pub show_help: bool,
    roster_generation: u64,
    detail_generation: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::List,
            roster: LoadState::Idle,
            detail: LoadState::Idle,
            selected: 0,
            show_help: false,
            roster_generation: 0,
            detail_generation: 0,
        }
    }

    /// Mark the roster as loading and return the generation tag the
    /// spawned fetch must hand back with its result.
    pub fn start_roster_load(&mut self) -> u64 {
        self.roster_generation += 1;
        self.roster = LoadState::Loading;
        self.selected = 0;
        self.roster_generation
    }

    /// Accept a roster result. Returns false (and changes nothing) when
    /// the tag belongs to a superseded fetch.
    pub fn finish_roster_load(
        &mut self,
        generation: u64,
        result: Result<Vec<RosterRow>, FetchError>,
    ) -> bool {
        if generation != self.roster_generation {
            return false;
        }
        self.roster.resolve(result);
        true
    }

    /// Switch to the detail screen for `name` and start its fetch.
    pub fn open_detail(&mut self, name: String) -> u64 {
        self.screen = Screen::Detail { name };
        self.detail_generation += 1;
        self.detail = LoadState::Loading;
        self.detail_generation
    }

    pub fn finish_detail_load(
        &mut self,
        generation: u64,
        result: Result<Pokemon, FetchError>,
    ) -> bool {
        if generation != self.detail_generation {
            return false;
        }
        self.detail.resolve(result);
        true
    }

    /// Back to the list. Bumping the generation means an in-flight detail
    /// fetch can no longer touch the state when it lands.
    pub fn close_detail(&mut self) {
        self.screen = Screen::List;
        self.detail = LoadState::Idle;
        self.detail_generation += 1;
    }

    fn roster_len(&self) -> usize {
        self.roster.data().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        let len = self.roster_len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.roster_len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Name of the selected row, when that row loaded successfully.
    pub fn selected_name(&self) -> Option<&str> {
        self.roster
            .data()
            .and_then(|rows| rows.get(self.selected))
            .and_then(|row| row.as_ref().ok())
            .map(|row| row.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PokemonRow;

    fn row(name: &str) -> RosterRow {
        Ok(PokemonRow {
            name: name.to_string(),
            front_sprite: None,
            back_sprite: None,
            types: vec!["normal".to_string()],
        })
    }

    #[test]
    fn roster_load_walks_idle_loading_loaded() {
        let mut app = App::new();
        assert!(app.roster.is_idle());

        let generation = app.start_roster_load();
        assert!(app.roster.is_loading());

        assert!(app.finish_roster_load(generation, Ok(vec![row("pikachu")])));
        assert!(app.roster.is_loaded());
        assert_eq!(app.selected_name(), Some("pikachu"));
    }

    #[test]
    fn failed_roster_load_keeps_the_error() {
        let mut app = App::new();
        let generation = app.start_roster_load();
        assert!(app.finish_roster_load(generation, Err(FetchError::Task("boom".into()))));
        assert!(app.roster.error().is_some());
        assert_eq!(app.selected_name(), None);
    }

    #[test]
    fn stale_roster_result_is_discarded() {
        let mut app = App::new();
        let first = app.start_roster_load();
        let _second = app.start_roster_load();

        assert!(!app.finish_roster_load(first, Ok(vec![row("bulbasaur")])));
        assert!(app.roster.is_loading());
    }

    #[test]
    fn detail_result_after_close_is_discarded() {
        let mut app = App::new();
        let generation = app.open_detail("pikachu".to_string());
        assert_eq!(
            app.screen,
            Screen::Detail {
                name: "pikachu".to_string()
            }
        );
        app.close_detail();

        // The fetch lands after the screen went away; nothing may change.
        assert!(!app.finish_detail_load(generation, Err(FetchError::Task("late".into()))));
        assert!(app.detail.is_idle());
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn selection_wraps_and_skips_nothing() {
        let mut app = App::new();
        let generation = app.start_roster_load();
        app.finish_roster_load(
            generation,
            Ok(vec![
                row("bulbasaur"),
                Err(FetchError::Task("down".into())),
                row("venusaur"),
            ]),
        );

        assert_eq!(app.selected_name(), Some("bulbasaur"));
        app.select_next();
        // The failed row is selectable but exposes no name to open.
        assert_eq!(app.selected_name(), None);
        app.select_next();
        assert_eq!(app.selected_name(), Some("venusaur"));
        app.select_next();
        assert_eq!(app.selected_name(), Some("bulbasaur"));
        app.select_previous();
        assert_eq!(app.selected_name(), Some("venusaur"));
    }
}
