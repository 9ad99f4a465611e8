use crate::*;

/// Discrete requests coming from keyboard, pointer or on-screen buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    TogglePause,
    Start,
}

impl InputEvent {
    /// Maps a `KeyboardEvent`'s `key` and `code`, unknown keys map to nothing.
    pub fn from_key(key: &str, code: &str) -> Option<Self> {
        use InputEvent::*;

        if code == "Space" {
            return Some(TogglePause);
        }

        let key = key.trim_start_matches("Arrow");
        let event = match key.len() {
            1 => match key.as_bytes()[0].to_ascii_lowercase() {
                b' ' => TogglePause,
                b'w' => Up,
                b's' => Down,
                b'a' => Left,
                b'd' => Right,
                _ => return None,
            },
            _ if key.eq_ignore_ascii_case("up") => Up,
            _ if key.eq_ignore_ascii_case("down") => Down,
            _ if key.eq_ignore_ascii_case("left") => Left,
            _ if key.eq_ignore_ascii_case("right") => Right,
            _ if key.eq_ignore_ascii_case("space") || key.eq_ignore_ascii_case("spacebar") => {
                TogglePause
            }
            _ => return None,
        };
        Some(event)
    }

    /// Like [`InputEvent::from_key`], but keys held with Ctrl, Meta or Alt stay browser
    /// shortcuts.
    pub fn from_keypress(key: &str, code: &str, modified: bool) -> Option<Self> {
        if modified {
            return None;
        }
        Self::from_key(key, code)
    }

    pub const fn direction(self) -> Option<Direction> {
        use InputEvent::*;
        match self {
            Up => Some(Direction::Up),
            Down => Some(Direction::Down),
            Left => Some(Direction::Left),
            Right => Some(Direction::Right),
            TogglePause | Start => None,
        }
    }
}

impl From<Direction> for InputEvent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(InputEvent::from_key("ArrowUp", "ArrowUp"), Some(InputEvent::Up));
        assert_eq!(InputEvent::from_key("ArrowLeft", "ArrowLeft"), Some(InputEvent::Left));
        assert_eq!(InputEvent::from_key("s", "KeyS"), Some(InputEvent::Down));
        assert_eq!(InputEvent::from_key("D", "KeyD"), Some(InputEvent::Right));
    }

    #[test]
    fn space_toggles_pause_in_every_spelling() {
        assert_eq!(InputEvent::from_key(" ", ""), Some(InputEvent::TogglePause));
        assert_eq!(InputEvent::from_key("Spacebar", ""), Some(InputEvent::TogglePause));
        assert_eq!(InputEvent::from_key("Unidentified", "Space"), Some(InputEvent::TogglePause));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(InputEvent::from_key("Enter", "Enter"), None);
        assert_eq!(InputEvent::from_key("x", "KeyX"), None);
        assert_eq!(InputEvent::from_key("", ""), None);
        assert_eq!(InputEvent::from_key("é", "Quote"), None);
    }

    #[test]
    fn shortcuts_are_left_to_the_browser() {
        assert_eq!(InputEvent::from_keypress("s", "KeyS", true), None);
        assert_eq!(InputEvent::from_keypress("d", "KeyD", true), None);
        assert_eq!(InputEvent::from_keypress(" ", "Space", true), None);
        assert_eq!(InputEvent::from_keypress("s", "KeyS", false), Some(InputEvent::Down));
    }

    #[test]
    fn directions_round_trip_through_events() {
        for direction in Direction::ALL {
            assert_eq!(InputEvent::from(direction).direction(), Some(direction));
        }
        assert_eq!(InputEvent::Start.direction(), None);
    }
}
