//! Thai land-area units (rai and ngan).
//!
//! 1 rai = 1600 m²; 1 ngan = 400 m² = 1/4 rai. Display quantities are
//! truncated (floor), never rounded: surveyors quote whole rai and whole ngan
//! and the remainder is simply dropped.

use std::fmt;

/// Square meters per rai.
pub const SQ_M_PER_RAI: f64 = 1600.0;
/// Ngan per rai.
pub const NGAN_PER_RAI: f64 = 4.0;

/// A land area quoted in whole rai and whole ngan (0–3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaiNgan {
    pub rai: u64,
    pub ngan: u64,
}

impl RaiNgan {
    /// Convert square meters to whole rai and ngan.
    ///
    /// Both quantities are floored: `rai = ⌊m²/1600⌋`, `ngan = ⌊fract · 4⌋`.
    /// Exactly 2.75 rai therefore reports 2 rai 3 ngan, not 3 rai 0 ngan.
    /// Negative or non-finite input clamps to zero.
    pub fn from_square_meters(sq_m: f64) -> Self {
        if !sq_m.is_finite() || sq_m <= 0.0 {
            return Self { rai: 0, ngan: 0 };
        }
        let rai_exact = sq_m / SQ_M_PER_RAI;
        let rai = rai_exact.floor();
        let ngan = (rai_exact.fract() * NGAN_PER_RAI).floor();
        Self {
            rai: rai as u64,
            ngan: ngan as u64,
        }
    }
}

impl fmt::Display for RaiNgan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rai {} ngan", self.rai, self.ngan)
    }
}

/// The fixed Thai annotation pattern: `พื้นที่: {rai} ไร่ {ngan} งาน`.
pub fn area_label(sq_m: f64) -> String {
    let a = RaiNgan::from_square_meters(sq_m);
    format!("พื้นที่: {} ไร่ {} งาน", a.rai, a.ngan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_both_quantities() {
        // 4400 m² = 2.75 rai exactly; 0.75 rai = 3 ngan exactly.
        let a = RaiNgan::from_square_meters(4400.0);
        assert_eq!(a, RaiNgan { rai: 2, ngan: 3 });

        // Just under a whole ngan stays floored.
        let b = RaiNgan::from_square_meters(399.9);
        assert_eq!(b, RaiNgan { rai: 0, ngan: 0 });

        // 1 ngan on the nose.
        let c = RaiNgan::from_square_meters(400.0);
        assert_eq!(c, RaiNgan { rai: 0, ngan: 1 });
    }

    #[test]
    fn whole_rai_has_zero_ngan() {
        let a = RaiNgan::from_square_meters(3.0 * SQ_M_PER_RAI);
        assert_eq!(a, RaiNgan { rai: 3, ngan: 0 });
    }

    #[test]
    fn degenerate_input_clamps_to_zero() {
        assert_eq!(
            RaiNgan::from_square_meters(0.0),
            RaiNgan { rai: 0, ngan: 0 }
        );
        assert_eq!(
            RaiNgan::from_square_meters(-5.0),
            RaiNgan { rai: 0, ngan: 0 }
        );
        assert_eq!(
            RaiNgan::from_square_meters(f64::NAN),
            RaiNgan { rai: 0, ngan: 0 }
        );
    }

    #[test]
    fn label_uses_the_fixed_thai_pattern() {
        assert_eq!(area_label(4400.0), "พื้นที่: 2 ไร่ 3 งาน");
        assert_eq!(area_label(0.0), "พื้นที่: 0 ไร่ 0 งาน");
    }

    #[test]
    fn display_is_transliterated() {
        let a = RaiNgan::from_square_meters(4400.0);
        assert_eq!(a.to_string(), "2 rai 3 ngan");
    }
}
