use turtle_rs::api::{Interpreter, RenderParams, TurtleConfig};
use turtle_rs::core::normalize_heading;
use turtle_rs::render::RecordingSurface;
use proptest::prelude::*;

fn render(commands: &str, params: RenderParams) -> (turtle_rs::RenderOutcome, RecordingSurface) {
    let mut interpreter =
        Interpreter::new(RecordingSurface::default(), TurtleConfig::new(params)).expect("init");
    let outcome = interpreter.render(commands).expect("render");
    (outcome, interpreter.into_surface())
}

fn params_strategy() -> impl Strategy<Value = RenderParams> {
    (
        -100.0f64..100.0,
        -360.0f64..360.0,
        -500.0f64..500.0,
        -500.0f64..500.0,
        0.0f64..360.0,
    )
        .prop_map(|(step, delta, x, y, heading)| {
            RenderParams::new(step, delta)
                .with_start((x, y))
                .with_heading(heading)
        })
}

fn heading_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_heading(a - b);
    diff.min(360.0 - diff)
}

proptest! {
    #[test]
    fn strings_without_turtle_symbols_are_no_ops(
        commands in "[a-eg-zA-EG-Z0-9 \\[\\]!$&^/*]{0,64}",
        params in params_strategy(),
    ) {
        let (outcome, surface) = render(&commands, params);

        prop_assert!(surface.segments().is_empty());
        prop_assert_eq!(outcome.cursor.position, params.start);
        prop_assert_eq!(outcome.cursor.heading, normalize_heading(params.heading));
        prop_assert_eq!(outcome.ignored_symbols, commands.chars().count());
    }

    #[test]
    fn segment_count_equals_uppercase_f_count(
        commands in "[Ff+\\-XY\\[\\] ]{0,128}",
        params in params_strategy(),
    ) {
        let (outcome, surface) = render(&commands, params);
        let forward_count = commands.chars().filter(|symbol| *symbol == 'F').count();

        prop_assert_eq!(surface.segments().len(), forward_count);
        prop_assert_eq!(outcome.segments_drawn, forward_count);
    }

    #[test]
    fn matched_turns_restore_heading(
        turns in 0usize..32,
        left_first in any::<bool>(),
        params in params_strategy(),
    ) {
        let (first, second) = if left_first { ('+', '-') } else { ('-', '+') };
        let commands: String = std::iter::repeat_n(first, turns)
            .chain(std::iter::repeat_n(second, turns))
            .collect();

        let (outcome, _) = render(&commands, params);

        prop_assert!(heading_distance(outcome.cursor.heading, params.heading) < 1e-6);
        prop_assert_eq!(outcome.cursor.position, params.start);
    }

    #[test]
    fn lowercase_f_moves_exactly_like_uppercase_f(
        commands in "[Ff+\\-]{0,64}",
        params in params_strategy(),
    ) {
        let drawn = commands.replace('f', "F");
        let moved = commands.replace('F', "f");

        let (drawn_outcome, drawn_surface) = render(&drawn, params);
        let (moved_outcome, moved_surface) = render(&moved, params);

        prop_assert_eq!(drawn_outcome.cursor, moved_outcome.cursor);
        prop_assert!(moved_surface.segments().is_empty());
        prop_assert_eq!(
            drawn_surface.segments().len(),
            commands.chars().filter(|symbol| matches!(symbol, 'F' | 'f')).count()
        );
    }

    #[test]
    fn segments_chain_from_start_when_no_moves(
        commands in "[F+\\-]{1,64}",
        params in params_strategy(),
    ) {
        let (_, surface) = render(&commands, params);
        let segments = surface.segments();

        if let Some(first) = segments.first() {
            prop_assert_eq!(first.from, params.start);
        }
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
    }
}
