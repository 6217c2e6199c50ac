use crate::model::NormalizedBooking;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

/// Regroupe par instant local exact (à la nanoseconde), dans l'ordre de
/// première apparition ; l'ordre d'entrée est conservé dans chaque groupe.
pub(super) fn group_by_instant(bookings: Vec<NormalizedBooking>) -> Vec<Vec<NormalizedBooking>> {
    let mut index: HashMap<DateTime<FixedOffset>, usize> = HashMap::new();
    let mut groups: Vec<Vec<NormalizedBooking>> = Vec::new();

    for booking in bookings {
        match index.get(&booking.local_start) {
            Some(&pos) => groups[pos].push(booking),
            None => {
                index.insert(booking.local_start, groups.len());
                groups.push(vec![booking]);
            }
        }
    }

    groups
}

pub(super) fn display_label(members: &[NormalizedBooking]) -> String {
    match members {
        [single] => single.booking.client_name.clone(),
        _ => format!("{} Bookings At This Time", members.len()),
    }
}
