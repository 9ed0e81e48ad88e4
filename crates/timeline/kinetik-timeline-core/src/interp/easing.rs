//! Easing curves mapping local progress [0,1] to eased progress.
//!
//! Every curve pins `ease(0) == 0` and `ease(1) == 1`. `OutBack` overshoots in
//! between; all other curves are monotonic.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InSine,
    OutSine,
    InOutSine,
    OutBack,
    /// Cubic-bezier timing with control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl Easing {
    /// Eased progress for local progress `t`; `t` is clamped to [0,1].
    pub fn value_for_progress(self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Easing::InCubic => t * t * t,
            Easing::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::InSine => 1.0 - (t * PI / 2.0).cos(),
            Easing::OutSine => (t * PI / 2.0).sin(),
            Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::OutBack => {
                const C1: f32 = 1.701_58;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
            Easing::CubicBezier([x1, y1, x2, y2]) => bezier_ease_t(t, x1, y1, x2, y2),
        }
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Bezier(0,0,1,1) is exactly linear
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 12] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::OutBack,
        Easing::CubicBezier([0.25, 0.1, 0.25, 1.0]),
    ];

    #[test]
    fn endpoints_are_pinned() {
        for e in ALL {
            assert_eq!(e.value_for_progress(0.0), 0.0, "{e:?}");
            assert_eq!(e.value_for_progress(1.0), 1.0, "{e:?}");
            assert_eq!(e.value_for_progress(-0.5), 0.0, "{e:?}");
            assert_eq!(e.value_for_progress(3.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn monotonic_curves_do_not_decrease() {
        for e in ALL.iter().filter(|e| **e != Easing::OutBack) {
            let mut last = 0.0f32;
            for i in 0..=100 {
                let v = e.value_for_progress(i as f32 / 100.0);
                assert!(v + 1e-5 >= last, "{e:?} decreased at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn out_back_overshoots() {
        let peak = (0..100)
            .map(|i| Easing::OutBack.value_for_progress(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let e = Easing::CubicBezier([0.0, 0.0, 1.0, 1.0]);
        assert_eq!(e.value_for_progress(0.3), 0.3);
    }

    #[test]
    fn serde_names_are_camel_case() {
        assert_eq!(
            serde_json::to_string(&Easing::InOutCubic).unwrap(),
            "\"inOutCubic\""
        );
        let e: Easing = serde_json::from_str(r#"{"cubicBezier":[0.4,0.0,0.2,1.0]}"#).unwrap();
        assert_eq!(e, Easing::CubicBezier([0.4, 0.0, 0.2, 1.0]));
    }
}
