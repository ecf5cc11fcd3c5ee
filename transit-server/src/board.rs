//! Departure-board grouping of raw arrivals.
//!
//! One directional arrival list (a stop's buses, or a station's upbound
//! trains) becomes a sequence of display rows, one per (route,
//! destination) pair: the next arrival, and optionally the one after it.
//! Rows appear in first-occurrence order, not time order: each route
//! shows its own next arrival, the board is not a time-sorted feed.

use crate::domain::Arrival;

/// One display row of a grouped board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalGroup {
    /// The earliest arrival seen for this (route, destination) pair.
    pub next: Arrival,
    /// The arrival after it, when the list carries a second one.
    pub following: Option<Arrival>,
}

/// Group raw arrivals by (route, destination).
///
/// Group order is the order each pair first appears in the input. The
/// first member of a pair is the "next" arrival, the second becomes
/// "following"; any further members do not fit on the board and are
/// dropped. The input's `next_arrival` field (a follow-up estimate
/// carried only by the first record of an ungrouped list) is a separate
/// concept from the grouped "following" record; both survive untouched.
///
/// Empty input yields an empty board.
pub fn group_arrivals(arrivals: &[Arrival]) -> Vec<ArrivalGroup> {
    // Boards are at most a handful of rows; a linear scan beats a map.
    let mut groups: Vec<ArrivalGroup> = Vec::new();

    for arrival in arrivals {
        let existing = groups.iter_mut().find(|g| {
            g.next.route_name == arrival.route_name && g.next.destination == arrival.destination
        });

        match existing {
            Some(group) => {
                if group.following.is_none() {
                    group.following = Some(arrival.clone());
                }
            }
            None => groups.push(ArrivalGroup {
                next: arrival.clone(),
                following: None,
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_board() {
        assert!(group_arrivals(&[]).is_empty());
    }

    #[test]
    fn groups_form_in_input_order_with_following() {
        let arrivals = vec![
            Arrival::new("2", "Wangsimni", 3),
            Arrival::new("2", "Wangsimni", 11),
            Arrival::new("5", "Sadang", 7),
        ];

        let groups = group_arrivals(&arrivals);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].next.route_name, "2");
        assert_eq!(groups[0].next.destination, "Wangsimni");
        assert_eq!(groups[0].next.time_minutes, 3);
        assert_eq!(groups[0].following.as_ref().unwrap().time_minutes, 11);

        assert_eq!(groups[1].next.route_name, "5");
        assert_eq!(groups[1].next.destination, "Sadang");
        assert_eq!(groups[1].next.time_minutes, 7);
        assert_eq!(groups[1].following, None);
    }

    #[test]
    fn board_is_not_time_sorted() {
        // The later-arriving route came first in the input, so it keeps
        // the first row.
        let arrivals = vec![Arrival::new("9401", "회차지", 14), Arrival::new("140", "회차지", 2)];

        let groups = group_arrivals(&arrivals);
        assert_eq!(groups[0].next.route_name, "9401");
        assert_eq!(groups[1].next.route_name, "140");
    }

    #[test]
    fn third_arrival_for_a_pair_is_dropped() {
        let arrivals = vec![
            Arrival::new("2", "잠실행", 2),
            Arrival::new("2", "잠실행", 9),
            Arrival::new("2", "잠실행", 17),
        ];

        let groups = group_arrivals(&arrivals);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].next.time_minutes, 2);
        assert_eq!(groups[0].following.as_ref().unwrap().time_minutes, 9);
    }

    #[test]
    fn same_route_different_destination_is_a_new_group() {
        let arrivals = vec![Arrival::new("2", "잠실행", 4), Arrival::new("2", "시청행", 6)];

        let groups = group_arrivals(&arrivals);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.following.is_none()));
    }

    #[test]
    fn next_arrival_field_survives_grouping() {
        let mut first = Arrival::new("470", "회차지", 3);
        first.next_arrival = Some(9);
        let arrivals = vec![first, Arrival::new("140", "회차지", 5)];

        let groups = group_arrivals(&arrivals);
        assert_eq!(groups[0].next.next_arrival, Some(9));
        assert_eq!(groups[1].next.next_arrival, None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arrival() -> impl Strategy<Value = Arrival> {
        ("[a-c]", "[x-z]", 0u32..30).prop_map(|(route, dest, t)| Arrival::new(route, dest, t))
    }

    proptest! {
        /// One group per distinct (route, destination) pair.
        #[test]
        fn one_group_per_pair(arrivals in proptest::collection::vec(arrival(), 0..12)) {
            let groups = group_arrivals(&arrivals);
            let mut pairs: Vec<(String, String)> = arrivals
                .iter()
                .map(|a| (a.route_name.clone(), a.destination.clone()))
                .collect();
            pairs.sort();
            pairs.dedup();
            prop_assert_eq!(groups.len(), pairs.len());
        }

        /// Every group's next arrival is the pair's first occurrence.
        #[test]
        fn next_is_first_occurrence(arrivals in proptest::collection::vec(arrival(), 0..12)) {
            let groups = group_arrivals(&arrivals);
            for group in &groups {
                let first = arrivals
                    .iter()
                    .find(|a| {
                        a.route_name == group.next.route_name
                            && a.destination == group.next.destination
                    })
                    .unwrap();
                prop_assert_eq!(&group.next, first);
            }
        }
    }
}
