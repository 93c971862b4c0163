//! Unit conversions for WordprocessingML and DrawingML measurements.
//!
//! WordprocessingML measures spacing and margins in twips (twentieths of a
//! point), font sizes in half-points, and DrawingML extents in EMUs
//! (English Metric Units, 914400 per inch).

/// Convert points to twips.
pub(crate) fn pt_to_twips(pt: f64) -> u32 {
    (pt * 20.0) as u32
}

/// Convert centimeters to twips (1 inch = 2.54 cm = 1440 twips).
pub(crate) fn cm_to_twips(cm: f64) -> u32 {
    (cm * 1440.0 / 2.54) as u32
}

/// Convert points to half-points (the `w:sz` unit).
pub(crate) fn pt_to_half_points(pt: f64) -> u32 {
    (pt * 2.0) as u32
}

/// Convert inches to EMUs.
pub(crate) fn inches_to_emu(inches: f64) -> i64 {
    (inches * 914400.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_conversions() {
        assert_eq!(pt_to_twips(18.0), 360);
        assert_eq!(pt_to_twips(10.5), 210);
        assert_eq!(pt_to_half_points(11.0), 22);
        assert_eq!(pt_to_half_points(10.5), 21);
    }

    #[test]
    fn test_metric_conversions() {
        assert_eq!(cm_to_twips(2.54), 1440);
        assert_eq!(cm_to_twips(2.5), 1417);
        assert_eq!(inches_to_emu(2.0), 1828800);
        assert_eq!(inches_to_emu(1.0), 914400);
    }
}
