//! Time-based value animations.
//!
//! An [`Animation`] is a plain description: timings, delays, and the
//! sequence/parallel/loop combinators. An [`Animator`] runs descriptions
//! against frame timestamps and writes progress into shared
//! [`AnimatedValue`]s that components read while building their view.
//!
//! ```
//! use std::time::Duration;
//! use mosaic_ui::animation::{AnimatedValue, Animator, Easing, timing};
//!
//! let opacity = AnimatedValue::new(0.0);
//! let mut animator = Animator::new();
//! let handle = animator.start(
//!     timing(&opacity, 1.0, Duration::from_millis(200)).easing(Easing::Linear),
//!     Duration::ZERO,
//! );
//! animator.tick(Duration::from_millis(100));
//! assert!((opacity.get() - 0.5).abs() < 1e-6);
//! let finished = animator.tick(Duration::from_millis(200));
//! assert_eq!(finished.as_slice(), &[handle]);
//! ```

use std::time::Duration;

use smallvec::SmallVec;
use tracing::trace;

use crate::State;

/// Easing curves mapping linear progress in `0..=1` to eased progress.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Slow start, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Slow end, the mirror of [`Easing::EaseIn`].
    EaseOut,
    /// Slow start and end, [`Easing::EaseIn`] mirrored around the midpoint.
    #[default]
    EaseInOut,
    /// CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Applies the curve. Input is clamped to `0..=1`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => ease_in(t),
            Easing::EaseOut => 1.0 - ease_in(1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    ease_in(t * 2.0) / 2.0
                } else {
                    1.0 - ease_in((1.0 - t) * 2.0) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn ease_in(t: f32) -> f32 {
    cubic_bezier(0.42, 0.0, 1.0, 1.0, t)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let (x1, y1, x2, y2, x) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64, x as f64);
    let coord = |t: f64, p1: f64, p2: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };
    let slope = |t: f64, p1: f64, p2: f64| {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    };

    let mut t = x;
    for _ in 0..8 {
        let err = coord(t, x1, x2) - x;
        if err.abs() < 1e-7 {
            return coord(t, y1, y2) as f32;
        }
        let d = slope(t, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    // Newton did not converge; bisect.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    t = x;
    for _ in 0..64 {
        let value = coord(t, x1, x2);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    coord(t, y1, y2) as f32
}

/// Piecewise-linear mapping of `value` from `input` breakpoints to `output`
/// breakpoints, clamped at both ends.
///
/// `input` must be ascending and as long as `output`. With fewer than two
/// breakpoints the first output (or `value` itself) is returned.
pub fn interpolate(value: f32, input: &[f32], output: &[f32]) -> f32 {
    let len = input.len().min(output.len());
    if len == 0 {
        return value;
    }
    if len == 1 || value <= input[0] {
        return output[0];
    }
    if value >= input[len - 1] {
        return output[len - 1];
    }
    for i in 1..len {
        if value <= input[i] {
            let span = input[i] - input[i - 1];
            if span <= 0.0 {
                return output[i];
            }
            let t = (value - input[i - 1]) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[len - 1]
}

/// A float shared between running animations and the components that read
/// it. Clones refer to the same value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatedValue {
    inner: State<f32>,
}

impl AnimatedValue {
    /// Creates a value.
    pub fn new(value: f32) -> Self {
        Self {
            inner: State::new(value),
        }
    }

    /// Current value.
    pub fn get(&self) -> f32 {
        self.inner.get()
    }

    /// Jumps to `value`. A running animation on this value keeps writing on
    /// later ticks.
    pub fn set(&self, value: f32) {
        self.inner.set(value);
    }

    /// Maps the current value through [`interpolate`].
    pub fn interpolate(&self, input: &[f32], output: &[f32]) -> f32 {
        interpolate(self.get(), input, output)
    }
}

/// Description of an animation.
#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    /// Moves `value` from wherever it is when this step starts to `to`.
    Timing {
        /// Driven value.
        value: AnimatedValue,
        /// Target.
        to: f32,
        /// Length of the step.
        duration: Duration,
        /// Curve.
        easing: Easing,
    },
    /// Waits.
    Delay(Duration),
    /// Runs children one after another.
    Sequence(Vec<Animation>),
    /// Runs children together; finishes when all have.
    Parallel(Vec<Animation>),
    /// Repeats the body forever. Values driven by the body return to the
    /// value they had when the loop first started before every iteration.
    Loop(Box<Animation>),
}

impl Animation {
    /// Sets the easing of a timing step. Other variants are unchanged.
    pub fn easing(mut self, curve: Easing) -> Self {
        if let Animation::Timing { easing, .. } = &mut self {
            *easing = curve;
        }
        self
    }

    /// Total length of one run, or `None` for loops.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Animation::Timing { duration, .. } | Animation::Delay(duration) => Some(*duration),
            Animation::Sequence(steps) => steps
                .iter()
                .try_fold(Duration::ZERO, |total, step| Some(total + step.duration()?)),
            Animation::Parallel(steps) => steps
                .iter()
                .try_fold(Duration::ZERO, |longest, step| {
                    Some(longest.max(step.duration()?))
                }),
            Animation::Loop(_) => None,
        }
    }
}

/// Animates `value` to `to` with the default ease-in-out curve.
pub fn timing(value: &AnimatedValue, to: f32, duration: Duration) -> Animation {
    Animation::Timing {
        value: value.clone(),
        to,
        duration,
        easing: Easing::default(),
    }
}

/// Sets `value` to `to` without interpolation.
pub fn jump(value: &AnimatedValue, to: f32) -> Animation {
    timing(value, to, Duration::ZERO).easing(Easing::Linear)
}

/// Waits for `duration`.
pub fn delay(duration: Duration) -> Animation {
    Animation::Delay(duration)
}

/// Runs `steps` one after another.
pub fn sequence(steps: impl IntoIterator<Item = Animation>) -> Animation {
    Animation::Sequence(steps.into_iter().collect())
}

/// Runs `steps` together.
pub fn parallel(steps: impl IntoIterator<Item = Animation>) -> Animation {
    Animation::Parallel(steps.into_iter().collect())
}

/// Repeats `body` forever.
pub fn looping(body: Animation) -> Animation {
    Animation::Loop(Box::new(body))
}

enum Step {
    Running,
    Finished { leftover: Duration },
}

enum Node {
    Timing {
        value: AnimatedValue,
        from: Option<f32>,
        origin: Option<f32>,
        to: f32,
        duration: Duration,
        easing: Easing,
        elapsed: Duration,
    },
    Delay {
        duration: Duration,
        elapsed: Duration,
    },
    Sequence {
        steps: Vec<Node>,
        index: usize,
    },
    Parallel {
        steps: Vec<Node>,
        done: Vec<bool>,
    },
    Loop {
        body: Box<Node>,
        restart: bool,
    },
}

impl Node {
    fn build(animation: Animation) -> Self {
        match animation {
            Animation::Timing {
                value,
                to,
                duration,
                easing,
            } => Node::Timing {
                value,
                from: None,
                origin: None,
                to,
                duration,
                easing,
                elapsed: Duration::ZERO,
            },
            Animation::Delay(duration) => Node::Delay {
                duration,
                elapsed: Duration::ZERO,
            },
            Animation::Sequence(steps) => Node::Sequence {
                steps: steps.into_iter().map(Node::build).collect(),
                index: 0,
            },
            Animation::Parallel(steps) => {
                let done = vec![false; steps.len()];
                Node::Parallel {
                    steps: steps.into_iter().map(Node::build).collect(),
                    done,
                }
            }
            Animation::Loop(body) => Node::Loop {
                body: Box::new(Node::build(*body)),
                restart: false,
            },
        }
    }

    fn advance(&mut self, dt: Duration) -> Step {
        match self {
            Node::Timing {
                value,
                from,
                origin,
                to,
                duration,
                easing,
                elapsed,
            } => {
                let start = *from.get_or_insert_with(|| value.get());
                origin.get_or_insert(start);
                *elapsed += dt;
                if *elapsed >= *duration {
                    value.set(*to);
                    return Step::Finished {
                        leftover: *elapsed - *duration,
                    };
                }
                let progress = elapsed.as_secs_f32() / duration.as_secs_f32();
                value.set(start + (*to - start) * easing.apply(progress));
                Step::Running
            }
            Node::Delay { duration, elapsed } => {
                *elapsed += dt;
                if *elapsed >= *duration {
                    Step::Finished {
                        leftover: *elapsed - *duration,
                    }
                } else {
                    Step::Running
                }
            }
            Node::Sequence { steps, index } => {
                let mut remaining = dt;
                while let Some(step) = steps.get_mut(*index) {
                    match step.advance(remaining) {
                        Step::Running => return Step::Running,
                        Step::Finished { leftover } => {
                            *index += 1;
                            remaining = leftover;
                        }
                    }
                }
                Step::Finished {
                    leftover: remaining,
                }
            }
            Node::Parallel { steps, done } => {
                let mut leftover: Option<Duration> = None;
                for (step, done) in steps.iter_mut().zip(done.iter_mut()) {
                    if *done {
                        continue;
                    }
                    if let Step::Finished { leftover: rest } = step.advance(dt) {
                        *done = true;
                        leftover = Some(leftover.map_or(rest, |l| l.min(rest)));
                    }
                }
                if done.iter().all(|d| *d) {
                    Step::Finished {
                        leftover: leftover.unwrap_or(dt),
                    }
                } else {
                    Step::Running
                }
            }
            Node::Loop { body, restart } => {
                if std::mem::take(restart) {
                    body.reset();
                }
                let mut remaining = dt;
                loop {
                    match body.advance(remaining) {
                        Step::Running => return Step::Running,
                        // An iteration that consumed no time would spin forever;
                        // restart on the next frame instead.
                        Step::Finished { leftover } if leftover >= remaining => {
                            *restart = true;
                            return Step::Running;
                        }
                        Step::Finished { leftover } => {
                            body.reset();
                            remaining = leftover;
                        }
                    }
                }
            }
        }
    }

    fn reset(&mut self) {
        match self {
            Node::Timing {
                value,
                from,
                origin,
                elapsed,
                ..
            } => {
                if let Some(origin) = origin {
                    value.set(*origin);
                }
                *from = None;
                *elapsed = Duration::ZERO;
            }
            Node::Delay { elapsed, .. } => *elapsed = Duration::ZERO,
            Node::Sequence { steps, index } => {
                // Reverse order so the earliest step's origin wins on shared values.
                steps.iter_mut().rev().for_each(Node::reset);
                *index = 0;
            }
            Node::Parallel { steps, done } => {
                steps.iter_mut().rev().for_each(Node::reset);
                done.iter_mut().for_each(|d| *d = false);
            }
            Node::Loop { body, restart } => {
                body.reset();
                *restart = false;
            }
        }
    }
}

/// Identifies an animation started on an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

struct Running {
    handle: AnimationHandle,
    node: Node,
    last_tick: Duration,
    finished: bool,
}

/// Runs animations against frame timestamps.
#[derive(Default)]
pub struct Animator {
    running: Vec<Running>,
    next_id: u64,
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("running", &self.running.len())
            .finish()
    }
}

impl Animator {
    /// Creates an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `animation` at frame time `now`. Timing steps capture their
    /// start value immediately.
    pub fn start(&mut self, animation: Animation, now: Duration) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;
        let mut node = Node::build(animation);
        let finished = matches!(node.advance(Duration::ZERO), Step::Finished { .. });
        trace!(?handle, finished, "animation started");
        self.running.push(Running {
            handle,
            node,
            last_tick: now,
            finished,
        });
        handle
    }

    /// Advances every running animation to `now` and returns the handles that
    /// completed. Stopped animations are never reported.
    pub fn tick(&mut self, now: Duration) -> SmallVec<[AnimationHandle; 4]> {
        let mut completed = SmallVec::new();
        for entry in &mut self.running {
            if !entry.finished {
                let dt = now.saturating_sub(entry.last_tick);
                entry.last_tick = now.max(entry.last_tick);
                entry.finished = matches!(entry.node.advance(dt), Step::Finished { .. });
            }
            if entry.finished {
                completed.push(entry.handle);
            }
        }
        self.running.retain(|entry| !entry.finished);
        for handle in &completed {
            trace!(?handle, "animation finished");
        }
        completed
    }

    /// Stops an animation where it is. Returns `false` when it was not
    /// running.
    pub fn stop(&mut self, handle: AnimationHandle) -> bool {
        let before = self.running.len();
        self.running.retain(|entry| entry.handle != handle);
        let stopped = self.running.len() != before;
        if stopped {
            trace!(?handle, "animation stopped");
        }
        stopped
    }

    /// Stops every animation.
    pub fn stop_all(&mut self) {
        self.running.clear();
    }

    /// Whether `handle` is still running.
    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.running.iter().any(|entry| entry.handle == handle)
    }

    /// Whether nothing is running.
    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }
}
