//! Default tuning constants for the match simulation
//!
//! These seed `EngineConfig::default()`. Engine code reads the config, not
//! these constants, so a match can be re-tuned without recompiling.

// ============================================================
// Field geometry
// ============================================================
pub mod field {
    /// Default field width (goal axis)
    pub const WIDTH: f32 = 800.0;

    /// Default field height (lateral axis)
    pub const HEIGHT: f32 = 400.0;

    /// Player body diameter; most radii are multiples of this
    pub const PLAYER_SIZE: f32 = 38.0;

    /// Goal mouth width, centred on the lateral axis
    pub const GOAL_SIZE: f32 = 120.0;

    /// Lateral margin the ball and players are kept inside of
    pub const SIDE_MARGIN: f32 = 10.0;

    /// Extra distance past half a body at which the ball counts as over the line
    pub const GOAL_LINE_SLACK: f32 = 3.0;

    /// Inset from the goal line used for goal-directed movement targets
    pub const GOAL_TARGET_INSET: f32 = 10.0;

    /// Kickoff spots as (share of width, share of height) for goalkeeper,
    /// defender and striker of the left team. The right team is mirrored in x.
    pub const KICKOFF_LAYOUT: [(f32, f32); 3] = [(0.25, 0.5), (0.40, 0.3), (0.40, 0.7)];
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    /// Per-tick velocity retention of a free ball
    pub const DECAY: f32 = 0.98;

    /// Above this speed a loose ball cannot be controlled
    pub const FAST_BALL_SPEED: f32 = 6.0;

    /// Share of speed kept when a fast ball bounces off a player
    pub const REBOUND_FACTOR: f32 = 0.3;
}

// ============================================================
// Player movement (inertia heuristic)
// ============================================================
pub mod movement {
    pub const MAX_SPEED: f32 = 2.0;
    pub const ACCELERATION: f32 = 0.2;
    pub const DECELERATION: f32 = 0.3;

    /// Distance to target under which the player brakes and stops
    pub const STOP_THRESHOLD: f32 = 0.5;

    /// Velocity retention while braking
    pub const STOP_DAMPING: f32 = 0.8;

    /// Velocity components below this snap to zero while braking
    pub const VELOCITY_SNAP: f32 = 0.05;

    /// Speed above which a sign mismatch counts as a direction reversal
    pub const REVERSAL_DEADBAND: f32 = 0.1;

    /// Acceleration stops once within this distance of the desired velocity
    pub const DESIRED_TOLERANCE: f32 = 0.05;
}

// ============================================================
// Cooldowns (ticks)
// ============================================================
pub mod cooldown {
    pub const BALL_PASS: f32 = 20.0;
    pub const BALL_SHOOT: f32 = 30.0;
    pub const BALL_FAILED_CONTROL: f32 = 30.0;
    pub const BALL_DISPUTED: f32 = 20.0;
    pub const BALL_STOLEN: f32 = 60.0;
    pub const BODY_STOLEN: f32 = 60.0;
    pub const BALL_TAKE_OFF: f32 = 20.0;
    pub const BALL_FAIL_DEFENDING: f32 = 60.0;
    pub const BODY_FAIL_DEFENDING: f32 = 60.0;
}

// ============================================================
// Possession contest
// ============================================================
pub mod contest {
    /// Roll below this: the challenger steals the ball
    pub const STEAL_CHANCE: f32 = 0.2;

    /// Roll below this (and above steal): the ball is knocked loose
    pub const TAKE_OFF_CHANCE: f32 = 0.5;

    pub const TAKE_OFF_FORCE: f32 = 4.0;
    pub const TAKE_OFF_SPREAD: i32 = 200;

    pub const DISPUTE_FORCE: f32 = 3.0;
    pub const DISPUTE_SPREAD: i32 = 100;
}

// ============================================================
// Decisions and kicks
// ============================================================
pub mod decision {
    /// Marked radius = PLAYER_SIZE * this
    pub const MARKED_RADIUS_FACTOR: f32 = 1.5;

    /// Opponent-near radius = PLAYER_SIZE * this (compact rule set uses 3.0)
    pub const NEAR_RADIUS_FACTOR: f32 = 6.0;
    pub const NEAR_RADIUS_FACTOR_COMPACT: f32 = 3.0;

    /// Collision overlap threshold = PLAYER_SIZE * this
    pub const COLLISION_FACTOR: f32 = 0.6;

    /// Spacing a supporting teammate keeps from its team's ball chaser
    pub const ASSIST_DISTANCE: f32 = 80.0;

    /// Opponents closer than this to a pass lane block it
    pub const INTERCEPTION_DISTANCE: f32 = 25.0;

    /// Share of the lane near either end that is ignored for blocking
    pub const INTERCEPTION_MARGIN: f32 = 0.05;

    pub const PASS_BASE_FORCE: f32 = 2.0;
    pub const PASS_FORCE_PER_UNIT: f32 = 0.01;
    pub const PASS_FORCE_CAP: f32 = 4.0;

    pub const SHOT_FORCE: f32 = 10.0;

    /// Share of the goal mouth a shot may be aimed across
    pub const SHOT_SPREAD: f32 = 0.9;

    /// Lateral anchors for switch-flank, as a share of field height
    pub const FLANK_LOW: f32 = 0.3;
    pub const FLANK_HIGH: f32 = 0.7;

    /// Jitter range for flank anchors, in hundredths
    pub const FLANK_JITTER_MIN: i32 = 1;
    pub const FLANK_JITTER_MAX: i32 = 20;
}
