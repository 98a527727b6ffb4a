//! Frame- and scroll-driven numbers. Nothing here touches the DOM; the
//! components in `components::animated` feed timestamps and offsets in.

pub const DEFAULT_COUNTER_SECONDS: f64 = 1.2;

/// Counts from 0 up to `target` over `duration` seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    start: Option<f64>,
    current: u64,
    elapsed_fraction: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_secs: f64) -> Self {
        Self {
            target,
            duration_ms: duration_secs * 1000.0,
            start: None,
            current: 0,
            elapsed_fraction: 0.0,
        }
    }

    /// Pins the start time. Without it the first tick becomes the start.
    pub fn starting_at(mut self, now_ms: f64) -> Self {
        self.start = Some(now_ms);
        self
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_fraction >= 1.0
    }

    /// Advances to `now_ms` and returns whether another frame is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.is_finished() {
            return false;
        }
        let start = *self.start.get_or_insert(now_ms);

        let fraction = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        // Frames can arrive with a stale timestamp; never move backwards.
        self.elapsed_fraction = fraction.max(self.elapsed_fraction);

        self.current = if self.is_finished() {
            self.target
        } else {
            (self.elapsed_fraction * self.target as f64).floor() as u64
        };
        !self.is_finished()
    }
}

/// Linear map from a scroll domain onto an output range, clamped at both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMapping {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScrollMapping {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, offset: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return if offset < d0 { r0 } else { r1 };
        }
        let t = (offset - d0) / (d1 - d0);
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        r0 + t * (r1 - r0)
    }
}

pub const HERO_BACKDROP: ScrollMapping = ScrollMapping::new((0.0, 400.0), (0.0, 60.0));
pub const HERO_ORB: ScrollMapping = ScrollMapping::new((0.0, 400.0), (0.0, -40.0));

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroOffsets {
    pub backdrop: f64,
    pub orb: f64,
}

pub fn hero_offsets(scroll_y: f64) -> HeroOffsets {
    HeroOffsets {
        backdrop: HERO_BACKDROP.map(scroll_y),
        orb: HERO_ORB.map(scroll_y),
    }
}

/// Fraction of the page scrolled, for the progress bar. 0 on pages that
/// cannot scroll.
pub fn scroll_progress(offset: f64, max_scroll: f64) -> f64 {
    if max_scroll <= 0.0 || max_scroll.is_nan() {
        return 0.0;
    }
    ScrollMapping::new((0.0, max_scroll), (0.0, 1.0)).map(offset)
}

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
