//! Entrance animations driven by viewport visibility.
//!
//! Two timing strategies coexist:
//!
//! - Counters are sampled once per animation frame with a quartic ease-out
//!   ([`CounterAnimation`]); the last frame writes the exact target.
//! - Progress bars hand interpolation to CSS: width is reset to `0%`, then
//!   after a short delay set to the target so the transition animates
//!   ([`ProgressBar`]).
//!
//! Every effect is claimed through the [`AnimationGuard`] so it runs at most
//! once per element per page load, however often visibility fires.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Stable per-element identity handed out by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKey(pub u32);

/// Guarded entrance effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Reveal,
    Counter,
    Progress,
}

/// Records which (element, effect) pairs have already run.
#[derive(Debug, Default)]
pub struct AnimationGuard {
    next_key: u32,
    ran: HashSet<(ElementKey, Effect)>,
}

impl AnimationGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a key for an element seen for the first time.
    pub fn issue_key(&mut self) -> ElementKey {
        self.next_key += 1;
        ElementKey(self.next_key)
    }

    /// Returns `true` the first time `effect` is claimed for `key`, `false`
    /// on every later call.
    pub fn claim(&mut self, key: ElementKey, effect: Effect) -> bool {
        self.ran.insert((key, effect))
    }
}

/// Parse the leading integer of `raw` the way HTML attribute values are
/// usually read: optional whitespace, optional sign, digits, then anything.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let Ok(magnitude) = digits[..end].parse::<i64>() else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Duration attribute in milliseconds; zero, negative or unparsable values
/// fall back to `default_ms`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn duration_or(raw: Option<&str>, default_ms: f64) -> f64 {
    match raw.and_then(parse_leading_int) {
        Some(ms) if ms > 0 => ms as f64,
        _ => default_ms,
    }
}

/// `1 - (1 - p)^4`.
#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Render an integer with comma thousands separators.
#[must_use]
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `data-count` / `data-duration` of a counter element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    pub target: i64,
    pub duration_ms: f64,
}

impl CounterSpec {
    /// `None` when the target is missing or not a number.
    #[must_use]
    pub fn from_attrs(count: Option<&str>, duration: Option<&str>, default_ms: f64) -> Option<Self> {
        let target = count.and_then(parse_leading_int)?;
        Some(Self { target, duration_ms: duration_or(duration, default_ms) })
    }
}

/// One sampled counter frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

/// Frame-sampled count-up from zero to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    start: i64,
    target: i64,
    duration_ms: f64,
    started_at: f64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(spec: CounterSpec, started_at: f64) -> Self {
        Self { start: 0, target: spec.target, duration_ms: spec.duration_ms, started_at }
    }

    /// Elapsed fraction, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value to display at `now`. The frame reaching `p = 1` is `done` and
    /// carries the exact target.
    #[must_use]
    pub fn sample(&self, now: f64) -> CounterFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return CounterFrame { value: self.target, done: true };
        }
        #[allow(clippy::cast_precision_loss)]
        let (start, target) = (self.start as f64, self.target as f64);
        let eased = start + (target - start) * ease_out_quart(progress);
        // Flooring keeps every intermediate value between start and target.
        #[allow(clippy::cast_possible_truncation)]
        let value = eased.floor() as i64;
        CounterFrame { value: value.clamp(self.start.min(self.target), self.start.max(self.target)), done: false }
    }
}

/// An inline style assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWrite {
    pub property: &'static str,
    pub value: String,
}

impl StyleWrite {
    fn new(property: &'static str, value: String) -> Self {
        Self { property, value }
    }
}

/// `data-progress` / `data-duration` of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSpec {
    /// Target width in percent, clamped to `[0, 100]`.
    pub percent: i64,
    pub duration_ms: f64,
}

impl ProgressSpec {
    #[must_use]
    pub fn from_attrs(progress: Option<&str>, duration: Option<&str>, default_ms: f64) -> Option<Self> {
        let percent = progress.and_then(parse_leading_int)?.clamp(0, 100);
        Some(Self { percent, duration_ms: duration_or(duration, default_ms) })
    }
}

/// Progress bar lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Idle,
    /// `width: 0%` and the transition are applied; target not yet written.
    Primed,
    /// Target width written; CSS is animating.
    Running,
}

/// CSS-transition progress bar. The target write is only reachable after the
/// zero-width write, so the transition always starts from `0%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    spec: ProgressSpec,
    phase: ProgressPhase,
}

impl ProgressBar {
    #[must_use]
    pub fn new(spec: ProgressSpec) -> Self {
        Self { spec, phase: ProgressPhase::Idle }
    }

    #[must_use]
    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    /// Styles for the starting state. Empty unless the bar is idle.
    pub fn prime(&mut self) -> Vec<StyleWrite> {
        if self.phase != ProgressPhase::Idle {
            return Vec::new();
        }
        self.phase = ProgressPhase::Primed;
        vec![
            StyleWrite::new("width", "0%".to_owned()),
            StyleWrite::new("transition", format!("width {}ms ease-out", self.spec.duration_ms)),
        ]
    }

    /// The target width, once, and only after [`ProgressBar::prime`].
    pub fn release(&mut self) -> Option<StyleWrite> {
        if self.phase != ProgressPhase::Primed {
            return None;
        }
        self.phase = ProgressPhase::Running;
        Some(StyleWrite::new("width", format!("{}%", self.spec.percent)))
    }
}

/// `animation-delay` value for a `data-delay` child, if the delay is numeric.
#[must_use]
pub fn reveal_delay(raw: Option<&str>) -> Option<String> {
    let ms = raw.and_then(parse_leading_int)?;
    Some(format!("{}ms", ms.max(0)))
}

#[cfg(feature = "hydrate")]
pub use browser::RevealAnimator;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::Element;

    use super::{AnimationGuard, CounterAnimation, CounterSpec, Effect, ElementKey, ProgressBar, ProgressSpec};
    use crate::config::Config;
    use crate::dom;
    use crate::observer::{ObserveMode, ViewportObserver};

    const KEY_ATTR: &str = "data-folio-key";
    const REVEAL_SELECTOR: &str = ".scroll-reveal, .tech-button";
    const COUNTER_SELECTOR: &str = "[data-count]";
    const PROGRESS_SELECTOR: &str = "[data-progress]";

    /// Observers for reveal, counter and progress-bar effects.
    #[derive(Clone)]
    pub struct RevealAnimator {
        reveal: ViewportObserver,
        counters: ViewportObserver,
        progress: ViewportObserver,
    }

    impl RevealAnimator {
        pub fn new(config: &Config, guard: Rc<RefCell<AnimationGuard>>) -> Self {
            let reveal_guard = Rc::clone(&guard);
            let reveal = ViewportObserver::new(&config.observers.reveal, ObserveMode::Repeat, move |el| {
                reveal_element(el, &reveal_guard);
            });

            let counter_guard = Rc::clone(&guard);
            let counter_default = config.animation.counter_duration_ms;
            let counters = ViewportObserver::new(&config.observers.counter, ObserveMode::OneShot, move |el| {
                if claim(el, &counter_guard, Effect::Counter) {
                    start_counter(el, counter_default);
                }
            });

            let progress_default = config.animation.progress_duration_ms;
            let delay_ms = config.animation.progress_start_delay_ms;
            let progress = ViewportObserver::new(&config.observers.progress, ObserveMode::OneShot, move |el| {
                if claim(el, &guard, Effect::Progress) {
                    start_progress(el, progress_default, delay_ms);
                }
            });

            Self { reveal, counters, progress }
        }

        pub fn observe_document(&self) {
            self.reveal.observe_all(REVEAL_SELECTOR);
            self.counters.observe_all(COUNTER_SELECTOR);
            self.progress.observe_all(PROGRESS_SELECTOR);
        }

        /// Observe animatable elements inside a freshly spliced subtree.
        pub fn observe_subtree(&self, root: &Element) {
            self.reveal.observe_subtree(root, REVEAL_SELECTOR);
            self.counters.observe_subtree(root, COUNTER_SELECTOR);
            self.progress.observe_subtree(root, PROGRESS_SELECTOR);
        }
    }

    fn element_key(el: &Element, guard: &RefCell<AnimationGuard>) -> ElementKey {
        if let Some(raw) = el.get_attribute(KEY_ATTR)
            && let Ok(id) = raw.parse::<u32>()
        {
            return ElementKey(id);
        }
        let key = guard.borrow_mut().issue_key();
        dom::set_attr(el, KEY_ATTR, &key.0.to_string());
        key
    }

    fn claim(el: &Element, guard: &RefCell<AnimationGuard>, effect: Effect) -> bool {
        let key = element_key(el, guard);
        guard.borrow_mut().claim(key, effect)
    }

    fn reveal_element(el: &Element, guard: &RefCell<AnimationGuard>) {
        dom::add_class(el, "revealed");
        if !claim(el, guard, Effect::Reveal) {
            return;
        }
        for child in dom::query_all_in(el, "[data-delay]") {
            if let Some(delay) = super::reveal_delay(child.get_attribute("data-delay").as_deref()) {
                dom::set_style(&child, "animation-delay", &delay);
            }
            dom::add_class(&child, "animate-fadeIn");
        }
    }

    fn start_counter(el: &Element, default_ms: f64) {
        let spec = CounterSpec::from_attrs(
            el.get_attribute("data-count").as_deref(),
            el.get_attribute("data-duration").as_deref(),
            default_ms,
        );
        let Some(spec) = spec else {
            log::debug!("skipping counter with non-numeric data-count");
            return;
        };
        let animation = CounterAnimation::new(spec, dom::now_ms());
        let el = el.clone();
        let fallback = el.clone();
        if !dom::request_frame(move |ts| counter_frame(el, animation, ts)) {
            write_count(&fallback, spec.target);
        }
    }

    fn counter_frame(el: Element, animation: CounterAnimation, ts: f64) {
        let frame = animation.sample(ts);
        write_count(&el, frame.value);
        if frame.done {
            return;
        }
        let fallback = el.clone();
        if !dom::request_frame(move |ts| counter_frame(el, animation, ts)) {
            let done = animation.sample(f64::INFINITY);
            write_count(&fallback, done.value);
        }
    }

    fn write_count(el: &Element, value: i64) {
        el.set_text_content(Some(&super::format_count(value)));
    }

    fn start_progress(el: &Element, default_ms: f64, delay_ms: u32) {
        let spec = ProgressSpec::from_attrs(
            el.get_attribute("data-progress").as_deref(),
            el.get_attribute("data-duration").as_deref(),
            default_ms,
        );
        let Some(spec) = spec else {
            log::debug!("skipping progress bar with non-numeric data-progress");
            return;
        };
        let mut bar = ProgressBar::new(spec);
        for write in bar.prime() {
            dom::set_style(el, write.property, &write.value);
        }
        let el = el.clone();
        dom::after(delay_ms, move || {
            if let Some(write) = bar.release() {
                dom::set_style(&el, write.property, &write.value);
            }
        });
    }
}
