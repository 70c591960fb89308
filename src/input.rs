use crate::direction::Direction;
use winit::event::VirtualKeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Steer(Direction),
    Restart,
    TogglePause,
    Quit,
}

/// Keys checked each frame for a fresh press.
pub const BOUND_KEYS: [VirtualKeyCode; 11] = [
    VirtualKeyCode::Right,
    VirtualKeyCode::D,
    VirtualKeyCode::Left,
    VirtualKeyCode::A,
    VirtualKeyCode::Up,
    VirtualKeyCode::W,
    VirtualKeyCode::Down,
    VirtualKeyCode::S,
    VirtualKeyCode::R,
    VirtualKeyCode::P,
    VirtualKeyCode::Escape,
];

/// Held, not pressed: the snake runs faster while it is down.
pub const BOOST_KEY: VirtualKeyCode = VirtualKeyCode::Space;

pub fn action_for_key(key: VirtualKeyCode) -> Option<Action> {
    Some(match key {
        VirtualKeyCode::Right | VirtualKeyCode::D => Action::Steer(Direction::Right),
        VirtualKeyCode::Left | VirtualKeyCode::A => Action::Steer(Direction::Left),
        VirtualKeyCode::Up | VirtualKeyCode::W => Action::Steer(Direction::Up),
        VirtualKeyCode::Down | VirtualKeyCode::S => Action::Steer(Direction::Down),
        VirtualKeyCode::R => Action::Restart,
        VirtualKeyCode::P => Action::TogglePause,
        VirtualKeyCode::Escape => Action::Quit,
        _ => return None,
    })
}
