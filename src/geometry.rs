//! Footprint arithmetic for rectangular floor plans.
//!
//! Pure and total: degenerate inputs yield a count of zero instead of an
//! error, so callers treat "does not fit" and "nonsense dimensions"
//! uniformly.

use crate::model::EPSILON_GENERAL;

/// Number of `len × wid` footprints tiling a floor in one fixed orientation.
fn slots_oriented(floor_len: f64, floor_wid: f64, item_len: f64, item_wid: f64) -> u32 {
    if item_len <= EPSILON_GENERAL || item_wid <= EPSILON_GENERAL {
        return 0;
    }
    if floor_len <= 0.0 || floor_wid <= 0.0 {
        return 0;
    }
    ((floor_len / item_len).floor() * (floor_wid / item_wid).floor()) as u32
}

/// Maximum number of `item_len × item_wid` footprints that fit on a
/// `floor_len × floor_wid` floor, allowing the two axis-aligned rotations.
///
/// Returns 0 when the footprint exceeds the floor in both rotations.
pub fn floor_slots(floor_len: f64, floor_wid: f64, item_len: f64, item_wid: f64) -> u32 {
    slots_oriented(floor_len, floor_wid, item_len, item_wid)
        .max(slots_oriented(floor_len, floor_wid, item_wid, item_len))
}

/// Full layers of height `item_height` that fit under a ceiling of `budget`.
pub fn layers_by_height(budget: f64, item_height: f64) -> u32 {
    if item_height <= EPSILON_GENERAL || budget <= 0.0 {
        return 0;
    }
    (budget / item_height).floor() as u32
}
