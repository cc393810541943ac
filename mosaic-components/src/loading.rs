//! Looping activity indicators.
//!
//! ## Usage
//!
//! Show while work of unknown length is in progress. Every loader runs one
//! looping [`Animation`] over a handful of animated channels held by a
//! [`LoaderController`]; the view maps channel values onto transforms.

use std::{f64::consts::PI, time::Duration};

use derive_setters::Setters;
use mosaic_ui::{
    AnimatedValue, Animation, AnimationHandle, Animator, Color, Dp, Easing, State, Style,
    ViewNode,
    animation::{delay, interpolate, jump, looping, parallel, sequence, timing},
    frame_time, remember_with_key,
    style::{Align, FlexDirection, Inset, Justify, Position, TransformOp},
};
use smallvec::SmallVec;
use tracing::trace;

use crate::theme::use_theme;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Animated channels and the loop driving them.
#[derive(Debug, Default)]
pub struct LoaderController {
    channels: SmallVec<[AnimatedValue; 8]>,
    animator: Animator,
    running: Option<AnimationHandle>,
}

impl LoaderController {
    /// Creates an idle controller with no channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current channel values.
    pub fn values(&self) -> SmallVec<[f32; 8]> {
        self.channels.iter().map(AnimatedValue::get).collect()
    }

    /// Value of channel `index`, or 0 if it does not exist.
    pub fn value(&self, index: usize) -> f32 {
        self.channels.get(index).map_or(0.0, AnimatedValue::get)
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Ensures one channel per entry of `initial` and a running loop built by
    /// `build`, then advances to `now`.
    ///
    /// A change in channel count rebuilds the channels and restarts the loop.
    pub fn run(
        &mut self,
        initial: &[f32],
        build: impl FnOnce(&[AnimatedValue]) -> Animation,
        now: Duration,
    ) {
        if self.channels.len() != initial.len() {
            self.stop();
            self.channels = initial.iter().copied().map(AnimatedValue::new).collect();
        }
        if self.running.is_none() {
            self.running = Some(self.animator.start(build(&self.channels), now));
            trace!(channels = self.channels.len(), "loader started");
        }
        self.animator.tick(now);
    }

    /// Stops the loop, leaving channels where they are.
    pub fn stop(&mut self) {
        if let Some(handle) = self.running.take() {
            self.animator.stop(handle);
        }
    }
}

fn loader_state(controller: &Option<State<LoaderController>>, key: &str) -> State<LoaderController> {
    controller
        .clone()
        .unwrap_or_else(|| remember_with_key(key, LoaderController::new))
}

fn centered() -> Style {
    Style::new()
        .flex(1.0)
        .justify_content(Justify::Center)
        .align_items(Align::Center)
}

fn circle(size: Dp, color: Color) -> Style {
    Style::new()
        .size(size, size)
        .border_radius(size / 2.0)
        .background(color)
}

macro_rules! loader_args_common {
    ($args:ident) => {
        impl $args {
            /// Uses an external controller.
            pub fn controller(mut self, controller: State<LoaderController>) -> Self {
                self.controller = Some(controller);
                self
            }

            fn color_or_theme(&self) -> Color {
                self.color.unwrap_or_else(|| use_theme().colors.primary)
            }
        }
    };
}

const RING_DOTS: usize = 8;

/// Arguments for [`circular_dots_loader`].
#[derive(Clone, PartialEq, Setters)]
pub struct CircularDotsLoaderArgs {
    /// Controller key of the loader.
    #[setters(into)]
    pub key: String,
    /// Diameter of the ring.
    pub size: Dp,
    /// Diameter of each dot.
    pub dot_size: Dp,
    /// Dot color; theme `primary` when unset.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<LoaderController>>,
}

impl Default for CircularDotsLoaderArgs {
    fn default() -> Self {
        Self {
            key: "circular_dots_loader".to_string(),
            size: Dp(50.0),
            dot_size: Dp(8.0),
            color: None,
            controller: None,
        }
    }
}

loader_args_common!(CircularDotsLoaderArgs);

fn circular_dots_animation(channels: &[AnimatedValue]) -> Animation {
    parallel(channels.iter().enumerate().map(|(i, dot)| {
        sequence([
            delay(ms(i as u64 * 125)),
            looping(sequence([
                timing(dot, 1.0, ms(300)),
                timing(dot, 0.0, ms(300)),
                delay(ms(700)),
            ])),
        ])
    }))
}

/// Top-left corner of dot `index` inside a ring of `size`.
fn ring_dot_origin(index: usize, size: Dp, dot_size: Dp) -> (Dp, Dp) {
    let radians = index as f64 * 2.0 * PI / RING_DOTS as f64;
    let radius = size.0 / 2.0 - dot_size.0;
    let left = size.0 / 2.0 + radians.cos() * radius - dot_size.0 / 2.0;
    let top = size.0 / 2.0 + radians.sin() * radius - dot_size.0 / 2.0;
    (Dp(left), Dp(top))
}

/// Eight dots around a circle, pulsing in turn.
pub fn circular_dots_loader(args: &CircularDotsLoaderArgs) -> ViewNode {
    let values = loader_state(&args.controller, &args.key).with_mut(|c| {
        c.run(&[0.0; RING_DOTS], circular_dots_animation, frame_time());
        c.values()
    });
    let color = args.color_or_theme();

    let dots = values.iter().enumerate().map(|(i, &v)| {
        let (left, top) = ring_dot_origin(i, args.size, args.dot_size);
        ViewNode::view().key(format!("{}.dot.{i}", args.key)).style(
            circle(args.dot_size, color)
                .position(Position::Absolute)
                .inset(Inset {
                    left: Some(left),
                    top: Some(top),
                    ..Inset::default()
                })
                .opacity(interpolate(v, &[0.0, 1.0], &[0.3, 1.0]))
                .transform(TransformOp::Scale(interpolate(v, &[0.0, 1.0], &[0.5, 1.2]))),
        )
    });

    ViewNode::view().key(args.key.clone()).style(centered()).child(
        ViewNode::view()
            .style(
                Style::new()
                    .size(args.size, args.size)
                    .position(Position::Relative),
            )
            .children(dots),
    )
}

/// Arguments for [`wave_loader`].
#[derive(Clone, PartialEq, Setters)]
pub struct WaveLoaderArgs {
    /// Controller key of the loader.
    #[setters(into)]
    pub key: String,
    /// Number of dots.
    pub dot_count: usize,
    /// Dot color; theme `primary` when unset.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<LoaderController>>,
}

impl Default for WaveLoaderArgs {
    fn default() -> Self {
        Self {
            key: "wave_loader".to_string(),
            dot_count: 5,
            color: None,
            controller: None,
        }
    }
}

loader_args_common!(WaveLoaderArgs);

const WAVE_EASING: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

fn wave_animation(channels: &[AnimatedValue]) -> Animation {
    parallel(channels.iter().enumerate().map(|(i, dot)| {
        looping(sequence([
            delay(ms(i as u64 * 100)),
            timing(dot, 1.0, ms(500)).easing(WAVE_EASING),
            timing(dot, 0.0, ms(500)).easing(WAVE_EASING),
        ]))
    }))
}

/// A row of dots rising and falling in a wave.
pub fn wave_loader(args: &WaveLoaderArgs) -> ViewNode {
    let values = loader_state(&args.controller, &args.key).with_mut(|c| {
        c.run(&vec![0.0; args.dot_count], wave_animation, frame_time());
        c.values()
    });
    let color = args.color_or_theme();

    ViewNode::view()
        .key(args.key.clone())
        .style(
            Style::new()
                .flex_direction(FlexDirection::Row)
                .align_items(Align::Center)
                .justify_content(Justify::Center)
                .gap(Dp(8.0)),
        )
        .children(values.iter().enumerate().map(|(i, &v)| {
            ViewNode::view().key(format!("{}.dot.{i}", args.key)).style(
                circle(Dp(10.0), color)
                    .transform(TransformOp::TranslateY(interpolate(v, &[0.0, 1.0], &[0.0, -20.0]))),
            )
        }))
}

/// Arguments for [`pulse_rings_loader`].
#[derive(Clone, PartialEq, Setters)]
pub struct PulseRingsLoaderArgs {
    /// Controller key of the loader.
    #[setters(into)]
    pub key: String,
    /// Diameter of a fully grown ring.
    pub size: Dp,
    /// Ring color; theme `primary` when unset.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<LoaderController>>,
}

impl Default for PulseRingsLoaderArgs {
    fn default() -> Self {
        Self {
            key: "pulse_rings_loader".to_string(),
            size: Dp(80.0),
            color: None,
            controller: None,
        }
    }
}

loader_args_common!(PulseRingsLoaderArgs);

const RING_DELAYS_MS: [u64; 3] = [0, 666, 1333];

/// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1)`, run backwards: the
/// ease-out built from it.
const RING_EASING: Easing = Easing::CubicBezier(0.75, 0.0, 0.75, 0.9);

fn pulse_rings_animation(channels: &[AnimatedValue]) -> Animation {
    parallel(channels.iter().zip(RING_DELAYS_MS).map(|(ring, wait)| {
        looping(sequence([
            delay(ms(wait)),
            timing(ring, 1.0, ms(2000)).easing(RING_EASING),
            jump(ring, 0.0),
        ]))
    }))
}

fn ring_opacity(progress: f32) -> f32 {
    interpolate(progress, &[0.0, 0.5, 1.0], &[0.8, 0.4, 0.0])
}

/// Three concentric rings growing outward and fading.
pub fn pulse_rings_loader(args: &PulseRingsLoaderArgs) -> ViewNode {
    let values = loader_state(&args.controller, &args.key).with_mut(|c| {
        c.run(&[0.0; 3], pulse_rings_animation, frame_time());
        c.values()
    });
    let color = args.color_or_theme();

    let rings = values.iter().enumerate().map(|(i, &v)| {
        ViewNode::view().key(format!("{}.ring.{i}", args.key)).style(
            Style::new()
                .position(Position::Absolute)
                .size(args.size, args.size)
                .border_radius(args.size / 2.0)
                .border_width(Dp(3.0))
                .border_color(color)
                .opacity(ring_opacity(v))
                .transform(TransformOp::Scale(v)),
        )
    });

    ViewNode::view().key(args.key.clone()).style(centered()).child(
        ViewNode::view()
            .style(Style::new().size(args.size, args.size))
            .children(rings),
    )
}

/// Arguments for [`bar_loader`].
#[derive(Clone, PartialEq, Setters)]
pub struct BarLoaderArgs {
    /// Controller key of the loader.
    #[setters(into)]
    pub key: String,
    /// Number of bars.
    pub bar_count: usize,
    /// Bar color; theme `primary` when unset.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<LoaderController>>,
}

impl Default for BarLoaderArgs {
    fn default() -> Self {
        Self {
            key: "bar_loader".to_string(),
            bar_count: 5,
            color: None,
            controller: None,
        }
    }
}

loader_args_common!(BarLoaderArgs);

fn bar_animation(channels: &[AnimatedValue]) -> Animation {
    parallel(channels.iter().enumerate().map(|(i, bar)| {
        looping(sequence([
            delay(ms(i as u64 * 100)),
            timing(bar, 1.0, ms(600)).easing(Easing::EaseInOut),
            timing(bar, 0.0, ms(600)).easing(Easing::EaseInOut),
        ]))
    }))
}

/// A row of bars stretching vertically in turn.
pub fn bar_loader(args: &BarLoaderArgs) -> ViewNode {
    let values = loader_state(&args.controller, &args.key).with_mut(|c| {
        c.run(&vec![0.0; args.bar_count], bar_animation, frame_time());
        c.values()
    });
    let color = args.color_or_theme();

    ViewNode::view()
        .key(args.key.clone())
        .style(
            Style::new()
                .flex_direction(FlexDirection::Row)
                .align_items(Align::Center)
                .justify_content(Justify::Center)
                .gap(Dp(5.0))
                .height(Dp(40.0)),
        )
        .children(values.iter().enumerate().map(|(i, &v)| {
            ViewNode::view().key(format!("{}.bar.{i}", args.key)).style(
                Style::new()
                    .size(Dp(4.0), Dp(30.0))
                    .border_radius(Dp(2.0))
                    .background(color)
                    .transform(TransformOp::ScaleY(interpolate(v, &[0.0, 1.0], &[0.3, 1.0]))),
            )
        }))
}

/// Arguments for [`orbit_loader`].
#[derive(Clone, PartialEq, Setters)]
pub struct OrbitLoaderArgs {
    /// Controller key of the loader.
    #[setters(into)]
    pub key: String,
    /// Diameter of the orbit.
    pub size: Dp,
    /// Dot color; theme `primary` when unset.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<LoaderController>>,
}

impl Default for OrbitLoaderArgs {
    fn default() -> Self {
        Self {
            key: "orbit_loader".to_string(),
            size: Dp(60.0),
            color: None,
            controller: None,
        }
    }
}

loader_args_common!(OrbitLoaderArgs);

const ORBIT_DOT: Dp = Dp(12.0);

fn orbit_animation(channels: &[AnimatedValue]) -> Animation {
    parallel(
        channels
            .iter()
            .map(|turn| looping(timing(turn, 1.0, ms(1500)).easing(Easing::Linear))),
    )
}

/// Two dots orbiting a common center.
pub fn orbit_loader(args: &OrbitLoaderArgs) -> ViewNode {
    let turn = loader_state(&args.controller, &args.key).with_mut(|c| {
        c.run(&[0.0], orbit_animation, frame_time());
        c.value(0)
    });
    let color = args.color_or_theme();
    let left = Some(args.size / 2.0 - ORBIT_DOT / 2.0);
    let dot = |name: &str, inset: Inset| {
        ViewNode::view()
            .key(format!("{}.{name}", args.key))
            .style(circle(ORBIT_DOT, color).position(Position::Absolute).inset(inset))
    };

    ViewNode::view().key(args.key.clone()).style(centered()).child(
        ViewNode::view()
            .key(format!("{}.orbit", args.key))
            .style(
                Style::new()
                    .size(args.size, args.size)
                    .position(Position::Relative)
                    .transform(TransformOp::Rotate(turn * 360.0)),
            )
            .child(dot(
                "top",
                Inset {
                    top: Some(Dp::ZERO),
                    left,
                    ..Inset::default()
                },
            ))
            .child(dot(
                "bottom",
                Inset {
                    bottom: Some(Dp::ZERO),
                    left,
                    ..Inset::default()
                },
            )),
    )
}

/// Arguments for [`square_loader`].
#[derive(Clone, PartialEq, Setters)]
pub struct SquareLoaderArgs {
    /// Controller key of the loader.
    #[setters(into)]
    pub key: String,
    /// Side length.
    pub size: Dp,
    /// Fill color; theme `primary` when unset.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<LoaderController>>,
}

impl Default for SquareLoaderArgs {
    fn default() -> Self {
        Self {
            key: "square_loader".to_string(),
            size: Dp(50.0),
            color: None,
            controller: None,
        }
    }
}

loader_args_common!(SquareLoaderArgs);

fn square_animation(channels: &[AnimatedValue]) -> Animation {
    let [turn, scale] = channels else {
        return parallel([]);
    };
    looping(parallel([
        timing(turn, 1.0, ms(2000)).easing(Easing::Linear),
        sequence([
            timing(scale, 0.7, ms(1000)).easing(Easing::EaseInOut),
            timing(scale, 1.0, ms(1000)).easing(Easing::EaseInOut),
        ]),
    ]))
}

/// A rounded square spinning while it breathes.
pub fn square_loader(args: &SquareLoaderArgs) -> ViewNode {
    let (turn, scale) = loader_state(&args.controller, &args.key).with_mut(|c| {
        c.run(&[0.0, 1.0], square_animation, frame_time());
        (c.value(0), c.value(1))
    });
    let color = args.color_or_theme();

    ViewNode::view().key(args.key.clone()).style(centered()).child(
        ViewNode::view().key(format!("{}.square", args.key)).style(
            Style::new()
                .size(args.size, args.size)
                .border_radius(Dp(5.0))
                .background(color)
                .transform(TransformOp::Rotate(turn * 360.0))
                .transform(TransformOp::Scale(scale)),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn run_at(
        c: &mut LoaderController,
        initial: &[f32],
        build: fn(&[AnimatedValue]) -> Animation,
        at: u64,
    ) {
        c.run(initial, build, ms(at));
    }

    #[test]
    fn ring_dots_sit_on_the_circle() {
        let (left, top) = ring_dot_origin(0, Dp(50.0), Dp(8.0));
        assert!((left.0 - 38.0).abs() < 1e-9);
        assert!((top.0 - 21.0).abs() < 1e-9);
        let (left, top) = ring_dot_origin(2, Dp(50.0), Dp(8.0));
        assert!((left.0 - 21.0).abs() < 1e-9);
        assert!((top.0 - 38.0).abs() < 1e-9);
    }

    #[test]
    fn circular_dots_are_staggered() {
        let mut c = LoaderController::new();
        let initial = [0.0; RING_DOTS];
        run_at(&mut c, &initial, circular_dots_animation, 0);
        run_at(&mut c, &initial, circular_dots_animation, 300);
        assert!(close(c.value(0), 1.0));
        assert!(c.value(1) < 1.0);
        run_at(&mut c, &initial, circular_dots_animation, 425);
        assert!(close(c.value(1), 1.0));
        // dot 0 finished its 1300ms cycle and starts over
        run_at(&mut c, &initial, circular_dots_animation, 1300);
        assert!(close(c.value(0), 0.0));
        run_at(&mut c, &initial, circular_dots_animation, 1600);
        assert!(close(c.value(0), 1.0));
    }

    #[test]
    fn wave_dots_rise_after_their_delay() {
        let mut c = LoaderController::new();
        let initial = [0.0; 5];
        run_at(&mut c, &initial, wave_animation, 0);
        run_at(&mut c, &initial, wave_animation, 600);
        assert!(close(c.value(1), 1.0));
        assert!(c.value(0) < 1.0);
        assert!(c.value(4) > 0.0 && c.value(4) < 1.0);
    }

    #[test]
    fn ring_easing_is_ease_mirrored() {
        let ease = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let mirrored = 1.0 - ease.apply(1.0 - t);
            assert!(close(RING_EASING.apply(t), mirrored), "t={t}");
        }
        assert!(RING_EASING.apply(0.5) < 0.3);
    }

    #[test]
    fn pulse_rings_reset_instantly() {
        let mut c = LoaderController::new();
        let initial = [0.0; 3];
        run_at(&mut c, &initial, pulse_rings_animation, 0);
        run_at(&mut c, &initial, pulse_rings_animation, 1999);
        assert!(c.value(0) > 0.99);
        run_at(&mut c, &initial, pulse_rings_animation, 2000);
        assert!(close(c.value(0), 0.0));
        assert!(close(ring_opacity(0.25), 0.6));
        assert!(close(ring_opacity(1.0), 0.0));
    }

    #[test]
    fn bars_peak_after_delay_and_rise() {
        let mut c = LoaderController::new();
        let initial = [0.0; 5];
        run_at(&mut c, &initial, bar_animation, 0);
        run_at(&mut c, &initial, bar_animation, 700);
        assert!(close(c.value(1), 1.0));
        run_at(&mut c, &initial, bar_animation, 1300);
        assert!(close(c.value(1), 0.0));
    }

    #[test]
    fn orbit_turns_linearly() {
        let mut c = LoaderController::new();
        run_at(&mut c, &[0.0], orbit_animation, 0);
        run_at(&mut c, &[0.0], orbit_animation, 750);
        assert!(close(c.value(0), 0.5));
        run_at(&mut c, &[0.0], orbit_animation, 1875);
        assert!(close(c.value(0), 0.25));
    }

    #[test]
    fn square_spins_and_breathes() {
        let mut c = LoaderController::new();
        run_at(&mut c, &[0.0, 1.0], square_animation, 0);
        run_at(&mut c, &[0.0, 1.0], square_animation, 1000);
        assert!(close(c.value(0), 0.5));
        assert!(close(c.value(1), 0.7));
        run_at(&mut c, &[0.0, 1.0], square_animation, 2500);
        assert!(close(c.value(0), 0.25));
    }

    #[test]
    fn channel_count_change_restarts() {
        let mut c = LoaderController::new();
        run_at(&mut c, &[0.0; 5], bar_animation, 0);
        run_at(&mut c, &[0.0; 5], bar_animation, 300);
        run_at(&mut c, &[0.0; 3], bar_animation, 300);
        assert_eq!(c.values().len(), 3);
        assert!(c.is_running());
        assert_eq!(c.value(0), 0.0);
    }

    #[test]
    fn loaders_render_their_parts() {
        let dots = circular_dots_loader(&CircularDotsLoaderArgs::default().key("test-dots"));
        assert_eq!(dots.node_count(), 2 + RING_DOTS);
        let bars = bar_loader(&BarLoaderArgs::default().key("test-bars").bar_count(3));
        assert!(bars.find("test-bars.bar.2").is_some());
        let orbit = orbit_loader(&OrbitLoaderArgs::default().key("test-orbit"));
        let top = orbit.find("test-orbit.top").unwrap();
        assert_eq!(top.style.inset.and_then(|i| i.left), Some(Dp(24.0)));
    }
}
