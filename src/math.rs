use std::f32::consts::TAU;

/// Wrap any angle into `[0, 2π)`.
///
/// The remainder against a full turn keeps the sign of the input, so negative
/// results are shifted up by one turn. Angles a hair below zero would round to
/// exactly `2π` after the shift and are folded back to `0.0`.
pub fn normalize_angle(angle: f32) -> f32 {
    let angle = angle % TAU;
    if angle >= 0.0 {
        return angle;
    }

    let wrapped = angle + TAU;
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
