use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Endpoint coordinates of the guide path, in image pixels.
///
/// The six values are independent; nothing keeps `top_y` above `base_y` or
/// `mid_x` between the other x values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParameters {
    pub start_x: u32,
    pub top_y: u32,
    pub mid_x: u32,
    pub turn_y: u32,
    pub end_x: u32,
    pub base_y: u32,
}

fn fraction_of(dimension: u32, fraction: f64) -> u32 {
    (f64::from(dimension) * fraction).round() as u32
}

impl PathParameters {
    pub fn defaults_for(width: u32, height: u32) -> Self {
        Self {
            start_x: fraction_of(width, START_X_FRACTION),
            top_y: fraction_of(height, TOP_Y_FRACTION),
            mid_x: fraction_of(width, MID_X_FRACTION),
            turn_y: fraction_of(height, TURN_Y_FRACTION),
            end_x: fraction_of(width, END_X_FRACTION),
            base_y: fraction_of(height, BASE_Y_FRACTION),
        }
    }

    pub fn clamped_to(self, width: u32, height: u32) -> Self {
        Self {
            start_x: self.start_x.min(width),
            top_y: self.top_y.min(height),
            mid_x: self.mid_x.min(width),
            turn_y: self.turn_y.min(height),
            end_x: self.end_x.min(width),
            base_y: self.base_y.min(height),
        }
    }

    /// Where the arrowhead points.
    pub fn terminal(&self) -> (u32, u32) {
        (self.end_x, self.turn_y)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_for_a_1000_by_800_chart() {
        let p = PathParameters::defaults_for(1000, 800);
        assert_eq!(
            p,
            PathParameters {
                start_x: 250,
                top_y: 240,
                mid_x: 650,
                turn_y: 480,
                end_x: 750,
                base_y: 680,
            }
        );
    }

    #[test]
    fn defaults_round_to_nearest() {
        // 0.25 * 10 = 2.5, 0.85 * 7 = 5.95
        let p = PathParameters::defaults_for(10, 7);
        assert_eq!(p.start_x, 3);
        assert_eq!(p.base_y, 6);
        assert_eq!(p.top_y, 2);
    }

    #[test]
    fn clamping_only_touches_out_of_range_fields() {
        let p = PathParameters {
            start_x: 10,
            top_y: 900,
            mid_x: 700,
            turn_y: 20,
            end_x: 50,
            base_y: 400,
        };
        let c = p.clamped_to(600, 300);
        assert_eq!(c.start_x, 10);
        assert_eq!(c.top_y, 300);
        assert_eq!(c.mid_x, 600);
        assert_eq!(c.turn_y, 20);
        assert_eq!(c.end_x, 50);
        assert_eq!(c.base_y, 300);
    }

    #[test]
    fn json_uses_field_names() {
        let json = PathParameters::defaults_for(100, 100).to_json().unwrap();
        let back: PathParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PathParameters::defaults_for(100, 100));
        assert!(json.contains("\"turn_y\": 60"));
    }

    proptest! {
        #[test]
        fn defaults_stay_within_bounds(w in 1u32..20_000, h in 1u32..20_000) {
            let p = PathParameters::defaults_for(w, h);
            for x in [p.start_x, p.mid_x, p.end_x] {
                prop_assert!(x <= w);
            }
            for y in [p.top_y, p.turn_y, p.base_y] {
                prop_assert!(y <= h);
            }
            prop_assert_eq!(p.start_x, (f64::from(w) * 0.25).round() as u32);
            prop_assert_eq!(p.turn_y, (f64::from(h) * 0.60).round() as u32);
            prop_assert_eq!(p.clamped_to(w, h), p);
        }
    }
}
