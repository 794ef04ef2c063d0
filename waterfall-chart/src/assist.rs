//! Baseline selection for the invisible offset bar.
//!
//! The assist bar sits beneath each visible delta bar and positions it
//! at the correct height. Which baseline to use depends on how the
//! running total moved relative to the previous step, so the decision
//! is a small step function over `(previous_total, total_sum)`.

/// How the assist bar is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistPaint {
    /// Invisible spacer; only the delta bar above it shows.
    Transparent,
    /// Painted in the delta bar's color as a sign-flip visual cue.
    Colored,
}

/// Outcome of the baseline step function for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssistDecision {
    /// No assist bar at this index (total rows).
    Token,
    Baseline { value: f64, paint: AssistPaint },
}

/// True when the running total sits on opposite sides of zero before
/// and after the current row.
pub fn opposite_signs(a: f64, b: f64) -> bool {
    a * b < 0.0
}

/// Select the assist-bar baseline for one row of the accumulation.
///
/// Total rows render no assist bar. The first row starts from zero.
/// When the running total flips sign or grows in magnitude, the bar is
/// anchored at the previous total and painted as a visual cue;
/// otherwise it is anchored at the new total and kept transparent.
pub fn assist_decision(
    previous_total: f64,
    total_sum: f64,
    is_total_row: bool,
    index: usize,
) -> AssistDecision {
    if is_total_row {
        return AssistDecision::Token;
    }
    if index == 0 {
        return AssistDecision::Baseline {
            value: 0.0,
            paint: AssistPaint::Transparent,
        };
    }
    if opposite_signs(previous_total, total_sum) || total_sum.abs() > previous_total.abs() {
        AssistDecision::Baseline {
            value: previous_total,
            paint: AssistPaint::Colored,
        }
    } else {
        AssistDecision::Baseline {
            value: total_sum,
            paint: AssistPaint::Transparent,
        }
    }
}
