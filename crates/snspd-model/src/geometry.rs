use snspd_core::DetectorConstants;

const MIN_DIMENSION: f64 = 1e-3;

/// Kinetic inductance of the meander in nH.
///
/// `Lk = K_LK * length_um / (width_nm * thickness_nm)`. Every dimension is
/// floored at 1e-3 so degenerate geometry never divides by zero.
pub fn kinetic_inductance_nh(
    length_um: f64,
    width_nm: f64,
    thickness_nm: f64,
    constants: &DetectorConstants,
) -> f64 {
    let length_um = length_um.max(MIN_DIMENSION);
    let width_nm = width_nm.max(MIN_DIMENSION);
    let thickness_nm = thickness_nm.max(MIN_DIMENSION);
    constants.k_lk * length_um / (width_nm * thickness_nm)
}
