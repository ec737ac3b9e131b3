//! Invariants that must hold for any input sequence

use brick_breaker::Config;
use brick_breaker::sim::{GameEvent, GamePhase, GameState, TickInput, autopilot, tick};
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    // Start/reset requests are rare so runs get a chance to play out
    (any::<bool>(), any::<bool>(), prop::bool::weighted(0.02)).prop_map(
        |(left_held, right_held, start_or_reset)| TickInput {
            left_held,
            right_held,
            start_or_reset,
        },
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (1u32..=6, 1u32..=8, 1.0f32..12.0, 1.0f32..9.0, 40.0f32..200.0).prop_map(
        |(brick_rows, brick_columns, paddle_step, ball_speed, paddle_width)| Config {
            brick_rows,
            brick_columns,
            paddle_step,
            ball_speed,
            paddle_width,
            ..Default::default()
        },
    )
}

fn started(config: Config) -> GameState {
    let mut state = GameState::new(config).unwrap();
    tick(
        &mut state,
        &TickInput {
            start_or_reset: true,
            ..Default::default()
        },
    );
    state
}

proptest! {
    #[test]
    fn paddle_stays_on_board(
        config in config_strategy(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut state = GameState::new(config).unwrap();
        for input in &inputs {
            tick(&mut state, input);
            let max_x = state.config.board_width - state.paddle.width;
            prop_assert!(state.paddle.pos.x >= 0.0);
            prop_assert!(state.paddle.pos.x <= max_x);
        }
    }

    #[test]
    fn score_counts_newly_dead_bricks(
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut state = GameState::new(Config::default()).unwrap();
        for input in &inputs {
            let before_score = state.score;
            let before_alive = state.bricks_alive();
            let was_running = state.phase == GamePhase::Running;

            tick(&mut state, input);

            if was_running && !input.start_or_reset {
                prop_assert!(state.score >= before_score);
                let killed = before_alive - state.bricks_alive();
                prop_assert_eq!(state.score - before_score, killed as u32);
            }
            prop_assert_eq!(state.score as usize, state.bricks.len() - state.bricks_alive());
        }
    }

    #[test]
    fn ball_speed_is_preserved(
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut state = GameState::new(Config::default()).unwrap();
        let speed = state.config.ball_speed;
        for input in &inputs {
            tick(&mut state, input);
            prop_assert_eq!(state.ball.vel.x.abs(), speed);
            prop_assert_eq!(state.ball.vel.y.abs(), speed);
        }
    }

    #[test]
    fn reset_is_idempotent(
        inputs in prop::collection::vec(input_strategy(), 0..200),
    ) {
        let mut state = GameState::new(Config::default()).unwrap();
        for input in &inputs {
            tick(&mut state, input);
        }
        state.reset();
        let once = state.clone();
        state.reset();
        prop_assert_eq!(state, once);
    }

    #[test]
    fn phase_changes_follow_the_state_machine(
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut state = GameState::new(Config::default()).unwrap();
        for input in &inputs {
            let before = state.phase;
            tick(&mut state, input);
            let after = state.phase;
            let allowed = before == after
                || matches!(
                    (before, after),
                    (GamePhase::Idle, GamePhase::Running)
                        | (GamePhase::Running, GamePhase::Won)
                        | (GamePhase::Running, GamePhase::Lost)
                        | (_, GamePhase::Idle)
                );
            prop_assert!(allowed, "{:?} -> {:?}", before, after);
            if after.is_terminal() && before == after {
                prop_assert!(state.events.is_empty());
            }
        }
    }
}

#[test]
fn win_fires_once_when_board_is_cleared() {
    // Small board so the autopilot clears it quickly
    let config = Config {
        brick_rows: 1,
        brick_columns: 2,
        ..Default::default()
    };
    let total = config.total_bricks();
    let mut state = started(config);
    let mut wins = 0;

    for _ in 0..20_000 {
        let controls = autopilot::steer(&state);
        tick(
            &mut state,
            &TickInput {
                left_held: controls.left_held,
                right_held: controls.right_held,
                start_or_reset: false,
            },
        );
        wins += state.events.iter().filter(|e| **e == GameEvent::Won).count();
        assert_eq!(state.phase == GamePhase::Won, state.score == total);
    }

    assert_eq!(state.phase, GamePhase::Won);
    assert_eq!(wins, 1);
}

#[test]
fn losing_requires_a_miss() {
    let mut state = started(Config::default());
    // Nobody at the controls: the ball eventually falls past the paddle
    for _ in 0..20_000 {
        tick(&mut state, &TickInput::default());
        if state.phase == GamePhase::Lost {
            break;
        }
    }

    assert_eq!(state.phase, GamePhase::Lost);
    assert_eq!(state.events, vec![GameEvent::Lost]);
    let ball = &state.ball;
    let paddle = &state.paddle;
    assert!(ball.pos.x + ball.radius <= paddle.pos.x || ball.pos.x - ball.radius >= paddle.right());
}
