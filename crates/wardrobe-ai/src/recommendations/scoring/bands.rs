/// Lower temperature bounds (°F, inclusive) and the warmth appropriate at or above each.
/// Checked top to bottom; anything colder than the last bound gets [`COLDEST_BAND`].
pub const WARMTH_BANDS: [(f64, i32); 4] = [(90.0, 2), (75.0, 3), (60.0, 5), (45.0, 7)];

pub const COLDEST_BAND: i32 = 9;

/// Target warmth level for a temperature. Lower means lighter clothing is appropriate.
pub fn warmth_band(temp_f: f64) -> i32 {
    WARMTH_BANDS
        .iter()
        .find(|(floor, _)| temp_f >= *floor)
        .map(|(_, band)| *band)
        .unwrap_or(COLDEST_BAND)
}
