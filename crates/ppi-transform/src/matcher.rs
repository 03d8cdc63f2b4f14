//! Start/complete instance matching.
//!
//! Within one case and one activity, each COMPLETE event claims the most
//! recent unclaimed START event that is not later than itself. COMPLETE events
//! are visited in time order. A COMPLETE with nothing to claim forms an
//! instance on its own, and START events never claimed do as well, so every
//! event ends up in exactly one instance.
//!
//! The pairing itself ([`match_activity`]) works on positions and timestamps
//! only and is independent of how identifiers are produced.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ppi_model::LifecyclePhase;

use crate::ids::InstanceIdGenerator;
use crate::split::SplitEvent;

/// An event reduced to what matching needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamped {
    pub position: usize,
    pub timestamp: DateTime<Utc>,
}

impl Stamped {
    pub fn new(position: usize, timestamp: DateTime<Utc>) -> Self {
        Self {
            position,
            timestamp,
        }
    }
}

/// How events were grouped into one activity instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceAssignment {
    Paired { start: usize, complete: usize },
    CompleteOnly { complete: usize },
    StartOnly { start: usize },
}

impl InstanceAssignment {
    /// Earliest event position in the instance.
    pub fn first_position(&self) -> usize {
        match *self {
            InstanceAssignment::Paired { start, complete } => start.min(complete),
            InstanceAssignment::CompleteOnly { complete } => complete,
            InstanceAssignment::StartOnly { start } => start,
        }
    }

    fn positions(&self) -> impl Iterator<Item = usize> {
        let (first, second) = match *self {
            InstanceAssignment::Paired { start, complete } => (start, Some(complete)),
            InstanceAssignment::CompleteOnly { complete } => (complete, None),
            InstanceAssignment::StartOnly { start } => (start, None),
        };
        std::iter::once(first).chain(second)
    }
}

/// Pair START and COMPLETE events of one case/activity.
///
/// Inputs need not be sorted. Completes with equal timestamps are visited by
/// position. Among eligible starts with equal timestamps the lowest position is
/// claimed first, so same-instant rows pair with their own start.
pub fn match_activity(starts: &[Stamped], completes: &[Stamped]) -> Vec<InstanceAssignment> {
    let mut starts = starts.to_vec();
    starts.sort_by_key(|s| (s.timestamp, Reverse(s.position)));
    let mut completes = completes.to_vec();
    completes.sort_by_key(|c| (c.timestamp, c.position));

    let mut pending = starts.into_iter().peekable();
    // Eligible, unclaimed starts. Pushed in time order, so the top is the latest.
    let mut open: Vec<Stamped> = Vec::new();
    let mut assignments = Vec::with_capacity(completes.len() + pending.len());

    for complete in completes {
        while let Some(start) = pending.next_if(|s| s.timestamp <= complete.timestamp) {
            open.push(start);
        }
        assignments.push(match open.pop() {
            Some(start) => InstanceAssignment::Paired {
                start: start.position,
                complete: complete.position,
            },
            None => InstanceAssignment::CompleteOnly {
                complete: complete.position,
            },
        });
    }

    assignments.extend(
        open.into_iter()
            .chain(pending)
            .map(|start| InstanceAssignment::StartOnly {
                start: start.position,
            }),
    );
    assignments
}

/// Instance ids for a list of events, plus how the instances were formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedInstances {
    /// One id per input event, in input order.
    pub instance_ids: Vec<String>,
    pub paired: usize,
    pub complete_only: usize,
    pub start_only: usize,
}

impl MatchedInstances {
    pub fn instance_count(&self) -> usize {
        self.paired + self.complete_only + self.start_only
    }

    /// Instances missing one of their two events.
    pub fn degenerate_count(&self) -> usize {
        self.complete_only + self.start_only
    }
}

/// Assign instance ids to every event by matching per case and activity.
///
/// Ids are drawn from `ids` in order of each instance's earliest event, so with
/// events sorted by case and time a [`SequentialIds`](crate::SequentialIds)
/// generator numbers instances chronologically within each case.
pub fn match_instances<G>(events: &[SplitEvent], ids: &mut G) -> MatchedInstances
where
    G: InstanceIdGenerator + ?Sized,
{
    type Phases = (Vec<Stamped>, Vec<Stamped>);
    let mut groups: BTreeMap<(&str, &str), Phases> = BTreeMap::new();
    for (position, event) in events.iter().enumerate() {
        let (starts, completes) = groups
            .entry((event.case_id.as_str(), event.activity.as_str()))
            .or_default();
        let stamped = Stamped::new(position, event.timestamp);
        match event.phase {
            LifecyclePhase::Start => starts.push(stamped),
            LifecyclePhase::Complete => completes.push(stamped),
        }
    }

    let mut assignments: Vec<InstanceAssignment> = Vec::with_capacity(events.len());
    for ((case_id, activity), (starts, completes)) in &groups {
        let matched = match_activity(starts, completes);
        tracing::trace!(
            case_id,
            activity,
            starts = starts.len(),
            completes = completes.len(),
            instances = matched.len(),
            "matched activity"
        );
        assignments.extend(matched);
    }
    assignments.sort_by_key(InstanceAssignment::first_position);

    let mut outcome = MatchedInstances::default();
    let mut assigned: Vec<Option<String>> = vec![None; events.len()];
    for assignment in &assignments {
        match assignment {
            InstanceAssignment::Paired { .. } => outcome.paired += 1,
            InstanceAssignment::CompleteOnly { .. } => outcome.complete_only += 1,
            InstanceAssignment::StartOnly { .. } => outcome.start_only += 1,
        }
        let id = ids.next_id();
        for position in assignment.positions() {
            assigned[position] = Some(id.clone());
        }
    }
    outcome.instance_ids = assigned
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    fn event(case_id: &str, activity: &str, hour: u32, phase: LifecyclePhase) -> SplitEvent {
        SplitEvent {
            source_row: 0,
            case_id: case_id.to_string(),
            activity: activity.to_string(),
            timestamp: at(hour),
            phase,
            instance_id: None,
        }
    }

    #[test]
    fn test_latest_eligible_start_is_claimed() {
        let starts = [
            Stamped::new(0, at(1)),
            Stamped::new(1, at(2)),
            Stamped::new(2, at(3)),
        ];
        let completes = [Stamped::new(3, at(5))];
        let matched = match_activity(&starts, &completes);

        assert_eq!(
            matched[0],
            InstanceAssignment::Paired {
                start: 2,
                complete: 3
            }
        );
        assert_eq!(matched.len(), 3);
        assert!(matched.contains(&InstanceAssignment::StartOnly { start: 0 }));
        assert!(matched.contains(&InstanceAssignment::StartOnly { start: 1 }));
    }

    #[test]
    fn test_later_start_is_not_eligible() {
        let starts = [Stamped::new(1, at(6))];
        let completes = [Stamped::new(0, at(5))];
        assert_eq!(
            match_activity(&starts, &completes),
            vec![
                InstanceAssignment::CompleteOnly { complete: 0 },
                InstanceAssignment::StartOnly { start: 1 },
            ]
        );
    }

    #[test]
    fn test_interleaved_instances_nest() {
        // start 1, start 2, complete 3, complete 4
        let starts = [Stamped::new(0, at(1)), Stamped::new(1, at(2))];
        let completes = [Stamped::new(2, at(3)), Stamped::new(3, at(4))];
        assert_eq!(
            match_activity(&starts, &completes),
            vec![
                InstanceAssignment::Paired {
                    start: 1,
                    complete: 2
                },
                InstanceAssignment::Paired {
                    start: 0,
                    complete: 3
                },
            ]
        );
    }

    #[test]
    fn test_equal_timestamps_pair() {
        let starts = [Stamped::new(0, at(4))];
        let completes = [Stamped::new(1, at(4))];
        assert_eq!(
            match_activity(&starts, &completes),
            vec![InstanceAssignment::Paired {
                start: 0,
                complete: 1
            }]
        );
    }

    #[test]
    fn test_same_instant_starts_pair_in_row_order() {
        // two atomic rows at one instant: starts 0, 1 then completes 2, 3
        let starts = [Stamped::new(0, at(4)), Stamped::new(1, at(4))];
        let completes = [Stamped::new(2, at(4)), Stamped::new(3, at(4))];
        assert_eq!(
            match_activity(&starts, &completes),
            vec![
                InstanceAssignment::Paired {
                    start: 0,
                    complete: 2
                },
                InstanceAssignment::Paired {
                    start: 1,
                    complete: 3
                },
            ]
        );
    }

    #[test]
    fn test_matching_is_scoped_to_case_and_activity() {
        let events = vec![
            event("1", "A", 1, LifecyclePhase::Start),
            event("1", "B", 2, LifecyclePhase::Complete),
            event("1", "A", 3, LifecyclePhase::Complete),
            event("2", "A", 4, LifecyclePhase::Complete),
        ];
        let matched = match_instances(&events, &mut SequentialIds::new());

        assert_eq!(matched.instance_ids, vec!["1", "2", "1", "3"]);
        assert_eq!(matched.paired, 1);
        assert_eq!(matched.complete_only, 2);
        assert_eq!(matched.start_only, 0);
        assert_eq!(matched.instance_count(), 3);
        assert_eq!(matched.degenerate_count(), 2);
    }

    #[test]
    fn test_lone_complete_gets_its_own_id() {
        let events = vec![event("1", "A", 5, LifecyclePhase::Complete)];
        let matched = match_instances(&events, &mut SequentialIds::with_prefix("i"));
        assert_eq!(matched.instance_ids, vec!["i1"]);
        assert_eq!(matched.complete_only, 1);
    }
}
