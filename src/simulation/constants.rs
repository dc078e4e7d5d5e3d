//! Structural constants of the behavior simulation
//!
//! Unlike `BehaviorConfig`, these are part of the state machine's shape
//! rather than feel-tuning knobs, so they live here as plain constants.

/// Speed multiplier per AI state, applied on top of preferred speed
pub const IDLE_SPEED_MULT: f32 = 1.0;
pub const INTERESTED_SPEED_MULT: f32 = 0.5;
pub const CHASING_SPEED_MULT: f32 = 1.8;
pub const STRIKING_SPEED_MULT: f32 = 2.5;
pub const FLEEING_SPEED_MULT: f32 = 2.0;

// Interest score weights; must sum to 1.0
pub const WEIGHT_DISTANCE: f32 = 0.25;
pub const WEIGHT_SPEED_MATCH: f32 = 0.20;
pub const WEIGHT_DEPTH_MATCH: f32 = 0.15;
pub const WEIGHT_MOTION: f32 = 0.15;
pub const WEIGHT_HUNGER: f32 = 0.15;
pub const WEIGHT_ALERTNESS: f32 = 0.10;

// Hunt score weights; must sum to 1.0
pub const HUNT_WEIGHT_HUNGER: f32 = 0.4;
pub const HUNT_WEIGHT_DISTANCE: f32 = 0.3;
pub const HUNT_WEIGHT_DIET: f32 = 0.2;
pub const HUNT_WEIGHT_SIZE: f32 = 0.1;

/// Interest amplification at full frenzy intensity
pub const FRENZY_SCORE_AMPLIFICATION: f32 = 0.5;

/// Strike attempts granted while frenzied (minimum, maximum)
pub const FRENZY_STRIKE_BUDGET: (u8, u8) = (2, 3);

/// Strike attempts granted by the auto-engage shortcut
pub const ENGAGE_STRIKE_BUDGET: (u8, u8) = (1, 4);

// Ambush species
pub const AMBUSH_PATROL_RADIUS: f32 = 25.0;
pub const AMBUSH_IDLE_SPEED_MULT: f32 = 0.1;
pub const AMBUSH_STRIKE_BURST: f32 = 2.5;

// Circler species
pub const CIRCLE_DURATION: f32 = 2.0;
pub const CIRCLE_RADIUS: f32 = 35.0;
pub const CIRCLE_ANGULAR_SPEED: f32 = 1.8;
pub const CIRCLE_BUMP_CHANCE: f64 = 0.04;
pub const CIRCLE_COMMIT_CHANCE: f64 = 0.65;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_weights_sum_to_one() {
        let sum = WEIGHT_DISTANCE
            + WEIGHT_SPEED_MATCH
            + WEIGHT_DEPTH_MATCH
            + WEIGHT_MOTION
            + WEIGHT_HUNGER
            + WEIGHT_ALERTNESS;
        assert!((sum - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_hunt_weights_sum_to_one() {
        let sum = HUNT_WEIGHT_HUNGER + HUNT_WEIGHT_DISTANCE + HUNT_WEIGHT_DIET + HUNT_WEIGHT_SIZE;
        assert!((sum - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_state_speed_ordering() {
        assert!(STRIKING_SPEED_MULT > CHASING_SPEED_MULT);
        assert!(CHASING_SPEED_MULT > IDLE_SPEED_MULT);
        assert!(IDLE_SPEED_MULT > INTERESTED_SPEED_MULT);
    }

    #[test]
    fn test_budget_bounds_ordered() {
        assert!(ENGAGE_STRIKE_BUDGET.0 <= ENGAGE_STRIKE_BUDGET.1);
        assert!(FRENZY_STRIKE_BUDGET.0 <= FRENZY_STRIKE_BUDGET.1);
    }
}
