use crate::player::{Player, TurnDirection, WalkDirection};

/// Logical inputs, mapped to physical keys by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Exit,
    CopyLayout,
    SaveSnapshot,
    LoadSnapshot,
}

/// Keyboard state polled once per frame
pub trait InputSource {
    /// Held this frame
    fn is_down(&self, control: Control) -> bool;

    /// Went down this frame. Defaults to [`InputSource::is_down`].
    fn is_pressed(&self, control: Control) -> bool {
        self.is_down(control)
    }
}

/// Translate held keys into walk and turn intent
///
/// Releasing either key of a pair clears that pair's intent before the held
/// keys are read back; when both are held the forward / left key wins.
pub fn apply_input(player: &mut Player, input: &impl InputSource) {
    if !input.is_down(Control::MoveForward) || !input.is_down(Control::MoveBackward) {
        player.walk_direction = WalkDirection::None;
    }

    if !input.is_down(Control::TurnLeft) || !input.is_down(Control::TurnRight) {
        player.turn_direction = TurnDirection::None;
    }

    if input.is_down(Control::MoveForward) {
        player.walk_direction = WalkDirection::Forward;
    } else if input.is_down(Control::MoveBackward) {
        player.walk_direction = WalkDirection::Backward;
    }

    if input.is_down(Control::TurnLeft) {
        player.turn_direction = TurnDirection::Left;
    } else if input.is_down(Control::TurnRight) {
        player.turn_direction = TurnDirection::Right;
    }
}
