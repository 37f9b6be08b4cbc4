// Formatting and animation helpers

pub fn format_currency(v: f64) -> String {
    format!("₱{:.2}", v)
}

/// Whole pesos with thousands separators, e.g. `₱4,000`. Fractions keep two decimals.
pub fn format_grouped_currency(v: f64) -> String {
    let cents = (v.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };
    match cents % 100 {
        0 => format!("{sign}₱{grouped}"),
        frac => format!("{sign}₱{grouped}.{frac:02}"),
    }
}

/// Ctrl+S or Cmd+S: save whatever form has focus instead of the page.
pub fn is_save_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("s")
}

/// Locks or restores page scrolling behind a modal surface.
pub fn set_page_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

/// easeInOutQuad over `t` in `[0, 1]`.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Eased interpolation between two numbers over a fixed wall-clock duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    /// Value after `elapsed_ms`, and whether the tween has finished.
    pub fn sample(&self, elapsed_ms: f64) -> (f64, bool) {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return (self.to, true);
        }
        let progress = (elapsed_ms / self.duration_ms).max(0.0);
        let eased = ease_in_out_quad(progress);
        (self.from + (self.to - self.from) * eased, false)
    }
}
