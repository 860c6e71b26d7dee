//! Game phase state machine
//!
//! Phases only change through [`next_phase`]; every (phase, event) pair not
//! listed there is rejected. The machine is cyclic: GameOver always leads
//! back to Menu.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title fade-in/out
    Intro,
    /// Start / Help / Settings buttons
    Menu,
    Help,
    Settings,
    /// "3, 2, 1, GO!" before the first round of a match
    Countdown,
    /// Ball in play
    Playing,
    /// Pause after a point before the next round
    Grace,
    /// Match decided, waiting for "back to menu"
    GameOver,
}

impl GamePhase {
    pub const ALL: [GamePhase; 8] = [
        GamePhase::Intro,
        GamePhase::Menu,
        GamePhase::Help,
        GamePhase::Settings,
        GamePhase::Countdown,
        GamePhase::Playing,
        GamePhase::Grace,
        GamePhase::GameOver,
    ];

    /// Phases showing the exit button that returns to the menu
    pub fn has_exit_button(&self) -> bool {
        !matches!(self, GamePhase::Intro | GamePhase::Menu | GamePhase::GameOver)
    }
}

/// Things that can move the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseEvent {
    /// Any key or button press
    AnyInput,
    Start,
    Help,
    Settings,
    /// Leave the settings screen
    Back,
    /// Escape during a match
    Cancel,
    /// Exit button
    ExitToMenu,
    /// Game over screen button
    BackToMenu,
    IntroElapsed,
    CountdownElapsed,
    /// A point was scored without deciding the match
    PointScored,
    /// A point was scored that decided the match
    MatchWon,
    GraceElapsed,
}

impl PhaseEvent {
    /// Events raised by the simulation itself rather than the player. Firing
    /// one of these from the wrong phase is a logic error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            PhaseEvent::IntroElapsed
                | PhaseEvent::CountdownElapsed
                | PhaseEvent::PointScored
                | PhaseEvent::MatchWon
                | PhaseEvent::GraceElapsed
        )
    }
}

/// Transition table
pub fn next_phase(phase: GamePhase, event: PhaseEvent) -> Option<GamePhase> {
    use GamePhase as P;
    use PhaseEvent as E;

    match (phase, event) {
        // From Intro
        (P::Intro, E::IntroElapsed) => Some(P::Menu),
        (P::Intro, _) if !event.is_internal() => Some(P::Menu),

        // From Menu
        (P::Menu, E::Start) => Some(P::Countdown),
        (P::Menu, E::Help) => Some(P::Help),
        (P::Menu, E::Settings) => Some(P::Settings),

        // From Help: any key or button returns
        (P::Help, _) if !event.is_internal() => Some(P::Menu),

        // From Settings
        (P::Settings, E::Back | E::ExitToMenu) => Some(P::Menu),

        // From Countdown
        (P::Countdown, E::CountdownElapsed) => Some(P::Playing),
        (P::Countdown, E::Cancel | E::ExitToMenu) => Some(P::Menu),

        // From Playing
        (P::Playing, E::PointScored) => Some(P::Grace),
        (P::Playing, E::MatchWon) => Some(P::GameOver),
        (P::Playing, E::Cancel | E::ExitToMenu) => Some(P::Menu),

        // From Grace
        (P::Grace, E::GraceElapsed) => Some(P::Playing),
        (P::Grace, E::Cancel | E::ExitToMenu) => Some(P::Menu),

        // From GameOver
        (P::GameOver, E::BackToMenu) => Some(P::Menu),

        _ => None,
    }
}

impl GameState {
    /// Apply a phase event and restart the phase timer. Returns false and
    /// leaves the phase alone when the table has no entry for the pair.
    pub fn transition(&mut self, event: PhaseEvent) -> bool {
        match next_phase(self.phase, event) {
            Some(next) => {
                log::info!("Phase {:?} -> {:?} ({:?})", self.phase, next, event);
                self.phase = next;
                self.phase_started_ms = self.now_ms;
                true
            }
            None => {
                debug_assert!(
                    !event.is_internal(),
                    "{:?} raised from illegal phase {:?}",
                    event,
                    self.phase
                );
                log::debug!("Ignoring {:?} in {:?}", event, self.phase);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: [PhaseEvent; 13] = [
        PhaseEvent::AnyInput,
        PhaseEvent::Start,
        PhaseEvent::Help,
        PhaseEvent::Settings,
        PhaseEvent::Back,
        PhaseEvent::Cancel,
        PhaseEvent::ExitToMenu,
        PhaseEvent::BackToMenu,
        PhaseEvent::IntroElapsed,
        PhaseEvent::CountdownElapsed,
        PhaseEvent::PointScored,
        PhaseEvent::MatchWon,
        PhaseEvent::GraceElapsed,
    ];

    /// Every legal transition, written out independently of the match above
    fn expected(phase: GamePhase, event: PhaseEvent) -> Option<GamePhase> {
        use GamePhase as P;
        use PhaseEvent as E;
        let allowed: &[(P, E, P)] = &[
            (P::Intro, E::AnyInput, P::Menu),
            (P::Intro, E::Start, P::Menu),
            (P::Intro, E::Help, P::Menu),
            (P::Intro, E::Settings, P::Menu),
            (P::Intro, E::Back, P::Menu),
            (P::Intro, E::Cancel, P::Menu),
            (P::Intro, E::ExitToMenu, P::Menu),
            (P::Intro, E::BackToMenu, P::Menu),
            (P::Intro, E::IntroElapsed, P::Menu),
            (P::Menu, E::Start, P::Countdown),
            (P::Menu, E::Help, P::Help),
            (P::Menu, E::Settings, P::Settings),
            (P::Help, E::AnyInput, P::Menu),
            (P::Help, E::Start, P::Menu),
            (P::Help, E::Help, P::Menu),
            (P::Help, E::Settings, P::Menu),
            (P::Help, E::Back, P::Menu),
            (P::Help, E::Cancel, P::Menu),
            (P::Help, E::ExitToMenu, P::Menu),
            (P::Help, E::BackToMenu, P::Menu),
            (P::Settings, E::Back, P::Menu),
            (P::Settings, E::ExitToMenu, P::Menu),
            (P::Countdown, E::CountdownElapsed, P::Playing),
            (P::Countdown, E::Cancel, P::Menu),
            (P::Countdown, E::ExitToMenu, P::Menu),
            (P::Playing, E::PointScored, P::Grace),
            (P::Playing, E::MatchWon, P::GameOver),
            (P::Playing, E::Cancel, P::Menu),
            (P::Playing, E::ExitToMenu, P::Menu),
            (P::Grace, E::GraceElapsed, P::Playing),
            (P::Grace, E::Cancel, P::Menu),
            (P::Grace, E::ExitToMenu, P::Menu),
            (P::GameOver, E::BackToMenu, P::Menu),
        ];
        allowed
            .iter()
            .find(|(from, on, _)| *from == phase && *on == event)
            .map(|(_, _, to)| *to)
    }

    #[test]
    fn test_table_is_exhaustive() {
        for phase in GamePhase::ALL {
            for event in EVENTS {
                assert_eq!(
                    next_phase(phase, event),
                    expected(phase, event),
                    "{phase:?} on {event:?}"
                );
            }
        }
    }

    #[test]
    fn test_transition_restarts_timer() {
        let mut state = GameState::new(1, 100);
        state.now_ms = 900;
        assert!(state.transition(PhaseEvent::AnyInput));
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.phase_started_ms, 900);

        // Not in the table: nothing changes
        state.now_ms = 1000;
        assert!(!state.transition(PhaseEvent::BackToMenu));
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.phase_started_ms, 900);
    }

    #[test]
    #[should_panic(expected = "illegal phase")]
    #[cfg(debug_assertions)]
    fn test_internal_event_from_wrong_phase_panics() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Menu;
        state.transition(PhaseEvent::PointScored);
    }

    #[test]
    fn test_help_and_intro_close_on_same_input() {
        for event in EVENTS.iter().filter(|e| !e.is_internal()) {
            assert_eq!(next_phase(GamePhase::Help, *event), Some(GamePhase::Menu), "{event:?}");
            assert_eq!(next_phase(GamePhase::Intro, *event), Some(GamePhase::Menu), "{event:?}");
        }
    }

    #[test]
    fn test_game_over_not_terminal() {
        assert_eq!(
            next_phase(GamePhase::GameOver, PhaseEvent::BackToMenu),
            Some(GamePhase::Menu)
        );
        // Exit button is not shown on the game over screen
        assert_eq!(next_phase(GamePhase::GameOver, PhaseEvent::ExitToMenu), None);
        assert!(!GamePhase::GameOver.has_exit_button());
    }

    #[test]
    fn test_every_phase_reaches_menu() {
        for phase in GamePhase::ALL {
            let reaches = phase == GamePhase::Menu
                || EVENTS
                    .iter()
                    .any(|e| next_phase(phase, *e) == Some(GamePhase::Menu));
            assert!(reaches, "{phase:?} has no way back to the menu");
        }
    }

    #[test]
    fn test_internal_events_have_one_source() {
        for event in EVENTS.iter().filter(|e| e.is_internal()) {
            let sources = GamePhase::ALL
                .iter()
                .filter(|p| next_phase(**p, *event).is_some())
                .count();
            assert_eq!(sources, 1, "{event:?}");
        }
    }
}
