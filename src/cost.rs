//! Total annual cost derivation

use crate::dataset::CollegeRecord;

/// Compute the total annual cost for a college.
///
/// Base tuition is the in-state figure unless it is the zero sentinel, in
/// which case the out-of-state figure applies. Room and board is added only
/// when requested.
pub fn compute_cost(record: &CollegeRecord, include_room_and_board: bool) -> f64 {
    let tuition = if record.in_state != 0.0 {
        record.in_state
    } else {
        record.out_state
    };

    if include_room_and_board {
        tuition + record.room_and_board
    } else {
        tuition
    }
}
