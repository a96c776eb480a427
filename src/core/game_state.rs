//! The game's mode and its transition table.

use crate::managers::InputType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Title screen, waiting for the first flap.
    #[default]
    Menu,
    Playing,
    GameOver,
    Paused,
}

/// What the engine must do for an input in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Reset the world and begin a run.
    StartGame,
    Flap,
    Pause,
    Resume,
    /// Reset the world and go back to the title screen.
    ReturnToMenu,
    ToggleMute,
    Ignore,
}

impl GameState {
    /// Look up the transition for `input`. Crashes are not inputs; the
    /// engine moves `Playing → GameOver` itself.
    pub fn on_input(self, input: InputType) -> Transition {
        use GameState::*;
        match (self, input) {
            (_, InputType::Mute) => Transition::ToggleMute,
            (Menu, InputType::Flap) => Transition::StartGame,
            (Playing, InputType::Flap) => Transition::Flap,
            (GameOver, InputType::Flap) => Transition::ReturnToMenu,
            (Playing, InputType::Pause) => Transition::Pause,
            (Paused, InputType::Pause) => Transition::Resume,
            (Paused, InputType::Flap) | (Menu, InputType::Pause) | (GameOver, InputType::Pause) => {
                Transition::Ignore
            }
        }
    }

    /// State after applying `transition`.
    pub fn after(self, transition: Transition) -> GameState {
        match transition {
            Transition::StartGame | Transition::Resume => GameState::Playing,
            Transition::Pause => GameState::Paused,
            Transition::ReturnToMenu => GameState::Menu,
            Transition::Flap | Transition::ToggleMute | Transition::Ignore => self,
        }
    }

    /// True while physics should advance.
    pub fn is_simulating(self) -> bool {
        self == GameState::Playing
    }

    pub fn name(self) -> &'static str {
        match self {
            GameState::Menu => "menu",
            GameState::Playing => "playing",
            GameState::GameOver => "game_over",
            GameState::Paused => "paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_menu() {
        assert_eq!(GameState::default(), GameState::Menu);
    }

    #[test]
    fn test_transition_table() {
        use GameState::*;
        let cases = [
            (Menu, InputType::Flap, Transition::StartGame, Playing),
            (Playing, InputType::Flap, Transition::Flap, Playing),
            (Playing, InputType::Pause, Transition::Pause, Paused),
            (Paused, InputType::Pause, Transition::Resume, Playing),
            (GameOver, InputType::Flap, Transition::ReturnToMenu, Menu),
            (Paused, InputType::Flap, Transition::Ignore, Paused),
            (Menu, InputType::Pause, Transition::Ignore, Menu),
            (GameOver, InputType::Pause, Transition::Ignore, GameOver),
        ];
        for (state, input, transition, next) in cases {
            assert_eq!(state.on_input(input), transition, "{:?} + {:?}", state, input);
            assert_eq!(state.after(transition), next);
        }
    }

    #[test]
    fn test_mute_never_changes_state() {
        for state in [
            GameState::Menu,
            GameState::Playing,
            GameState::GameOver,
            GameState::Paused,
        ] {
            let t = state.on_input(InputType::Mute);
            assert_eq!(t, Transition::ToggleMute);
            assert_eq!(state.after(t), state);
        }
    }

    #[test]
    fn test_only_playing_simulates() {
        assert!(GameState::Playing.is_simulating());
        assert!(!GameState::Paused.is_simulating());
        assert!(!GameState::Menu.is_simulating());
        assert!(!GameState::GameOver.is_simulating());
    }
}
