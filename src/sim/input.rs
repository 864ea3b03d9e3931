//! Pointer input for the human paddle

use super::state::GameState;

/// Center the player's paddle on a pointer height, in field units measured
/// from the top edge.
///
/// Ignored unless the game is running. Out-of-range heights are clamped so the
/// paddle stays inside the field.
pub fn pointer_moved(state: &mut GameState, y: f32) {
    if !state.is_running() {
        return;
    }
    let field = state.field;
    state.left.set_center_y(y, &field);
}

/// Convert a client-space y coordinate into field units.
///
/// `content_top`/`content_height` describe the canvas' drawing area on screen,
/// inside any CSS border. The field may be drawn at a different size than its
/// logical height when CSS scales it.
pub fn client_to_field_y(
    client_y: f32,
    content_top: f32,
    content_height: f32,
    field_height: f32,
) -> f32 {
    let y = client_y - content_top;
    if content_height > 0.0 {
        y * field_height / content_height
    } else {
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Field, GamePhase};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running_state() -> GameState {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(Field::new(800.0, 500.0), &mut rng);
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let mut state = running_state();
        pointer_moved(&mut state, 120.0);
        assert_eq!(state.left.center_y(), 120.0);
        assert_eq!(state.left.top(), 80.0);
    }

    #[test]
    fn test_pointer_ignored_unless_running() {
        for phase in [GamePhase::Idle, GamePhase::GameOver] {
            let mut state = running_state();
            state.phase = phase;
            let before = state.left.pos;
            pointer_moved(&mut state, 30.0);
            assert_eq!(state.left.pos, before);
        }
    }

    #[test]
    fn test_client_to_field_scaling() {
        assert_eq!(client_to_field_y(150.0, 50.0, 500.0, 500.0), 100.0);
        // Canvas shown at half size
        assert_eq!(client_to_field_y(150.0, 50.0, 250.0, 500.0), 200.0);
        // Collapsed layout box: fall back to unscaled
        assert_eq!(client_to_field_y(150.0, 50.0, 0.0, 500.0), 100.0);
    }

    #[test]
    fn test_client_to_field_inside_border() {
        // 500px canvas with a 2px border: box top at 50, content starts at 52
        let border = 2.0;
        let content_top = 50.0 + border;
        assert_eq!(client_to_field_y(52.0, content_top, 500.0, 500.0), 0.0);
        assert_eq!(client_to_field_y(552.0, content_top, 500.0, 500.0), 500.0);
        assert_eq!(client_to_field_y(302.0, content_top, 500.0, 500.0), 250.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_field(y in -2000.0f32..2000.0) {
            let mut state = running_state();
            pointer_moved(&mut state, y);
            prop_assert!(state.left.top() >= 0.0);
            prop_assert!(state.left.bottom() <= state.field.height);
        }
    }
}
