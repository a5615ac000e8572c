use cel_timeline_core::{
    sampling::sample,
    state::{Rgb, State, Vec2},
    timeline::Timeline,
    Interval, TimelineError,
};

fn st(x: f32, w: u32, c: u8) -> State {
    State::new(Vec2::new(x, x), Rgb::new(c, c, c), w, w)
}

fn mk_timeline(states: &[(u32, u32, State)]) -> Timeline {
    let mut tl = Timeline::new();
    for (start, end, state) in states {
        tl.append(&State::default(), *start, *end, *state).unwrap();
    }
    tl
}

/// it should keep contiguity across a mixed append/splice/remove sequence
#[test]
fn contiguity_across_mixed_mutations() {
    let mut tl = mk_timeline(&[
        (0, 10, st(1.0, 10, 10)),
        (10, 20, st(2.0, 20, 20)),
        (20, 30, st(3.0, 30, 30)),
    ]);
    assert!(tl.is_contiguous());

    tl.insert_frame(15, st(9.0, 90, 90)).unwrap();
    assert!(tl.is_contiguous());
    assert_eq!(tl.len(), 4);

    let middle = tl.as_slice()[1];
    tl.remove(&middle).unwrap();
    assert!(tl.is_contiguous());
    assert_eq!(tl.len(), 3);
    assert_eq!(tl.start(), Some(0));
    assert_eq!(tl.end(), Some(30));
}

/// it should inherit the start state from the prior end state on append
#[test]
fn append_continuity() {
    let mut tl = Timeline::new();
    tl.append(&st(0.0, 1, 1), 0, 10, st(5.0, 50, 50)).unwrap();
    tl.append(&st(99.0, 99, 99), 10, 20, st(6.0, 60, 60))
        .unwrap();
    let second = tl.as_slice()[1];
    assert_eq!(second.start_state, st(5.0, 50, 50));
}

/// it should reject appends that leave a gap or overlap
#[test]
fn append_discontinuous_time() {
    let mut tl = mk_timeline(&[(0, 10, st(1.0, 10, 10))]);
    for bad_start in [9, 11] {
        let err = tl
            .append(&State::default(), bad_start, 15, st(2.0, 2, 2))
            .unwrap_err();
        assert_eq!(
            err,
            TimelineError::DiscontinuousTime {
                expected: 10,
                found: bad_start
            }
        );
    }
    assert_eq!(tl.len(), 1);
}

/// it should reject a reversed tick range and leave the timeline unchanged
#[test]
fn append_invalid_range() {
    let mut tl = mk_timeline(&[(0, 10, st(1.0, 10, 10))]);
    let err = tl
        .append(&State::default(), 10, 5, st(2.0, 2, 2))
        .unwrap_err();
    assert!(matches!(err, TimelineError::InvalidRange(_)));
    assert_eq!(tl.len(), 1);
}

/// it should sample the spliced pose exactly on both halves of the split
#[test]
fn splice_round_trip() {
    let mut tl = mk_timeline(&[(0, 10, st(10.0, 100, 200))]);
    let pose = st(3.0, 33, 133);
    tl.insert_frame(4, pose).unwrap();

    let left = tl.as_slice()[0];
    let right = tl.as_slice()[1];
    assert_eq!(left.end_tick, 4);
    assert_eq!(right.start_tick, 4);
    assert_eq!(sample(&left, 4), pose);
    assert_eq!(sample(&right, 4), pose);
    assert_eq!(tl.start(), Some(0));
    assert_eq!(tl.end(), Some(10));
}

/// it should leave the timeline unchanged when splicing at an existing boundary
#[test]
fn splice_boundary_noop() {
    let mut tl = mk_timeline(&[(0, 10, st(1.0, 10, 10)), (10, 20, st(2.0, 20, 20))]);
    let before = tl.as_slice().to_vec();
    for boundary in [0, 10, 20] {
        tl.insert_frame(boundary, st(77.0, 7, 7)).unwrap();
    }
    assert_eq!(tl.as_slice(), &before[..]);
}

/// it should fail a splice outside the covered span
#[test]
fn splice_out_of_bounds() {
    let mut tl = mk_timeline(&[(5, 10, st(1.0, 10, 10))]);
    for tick in [4, 11] {
        let err = tl.insert_frame(tick, st(0.0, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            TimelineError::OutOfBounds {
                tick,
                start: 5,
                end: 10
            }
        );
    }
}

/// it should establish a held pose when splicing into an empty timeline
#[test]
fn splice_into_empty() {
    let mut tl = Timeline::new();
    let pose = st(4.0, 44, 44);
    tl.insert_frame(7, pose).unwrap();
    assert_eq!(tl.as_slice(), &[Interval::held(7, pose)]);
    assert_eq!(sample(&tl.as_slice()[0], 7), pose);
}

/// it should merge neighbors on internal removal: count -1, span preserved
#[test]
fn merge_on_internal_removal() {
    let mut tl = mk_timeline(&[
        (0, 10, st(1.0, 10, 10)),
        (10, 20, st(2.0, 20, 20)),
        (20, 30, st(3.0, 30, 30)),
    ]);
    let middle = tl.as_slice()[1];
    let successor_start = tl.as_slice()[2].start_state;
    tl.remove(&middle).unwrap();

    assert_eq!(tl.len(), 2);
    assert_eq!(tl.start(), Some(0));
    assert_eq!(tl.end(), Some(30));
    let merged = tl.as_slice()[0];
    assert_eq!(merged.start_tick, 0);
    assert_eq!(merged.end_tick, 20);
    assert_eq!(merged.start_state, State::default());
    assert_eq!(merged.end_state, successor_start);
    assert!(tl.is_contiguous());
}

/// it should drop a first or last interval outright without repair
#[test]
fn remove_at_ends_drops_outright() {
    let mut tl = mk_timeline(&[
        (0, 10, st(1.0, 10, 10)),
        (10, 20, st(2.0, 20, 20)),
        (20, 30, st(3.0, 30, 30)),
    ]);
    let first = tl.as_slice()[0];
    tl.remove(&first).unwrap();
    assert_eq!(tl.len(), 2);
    assert_eq!(tl.start(), Some(10));

    let last = *tl.last().unwrap();
    tl.remove(&last).unwrap();
    assert_eq!(tl.len(), 1);
    assert_eq!(tl.end(), Some(20));
}

/// it should report EmptyTimeline and IntervalNotFound on bad removals
#[test]
fn remove_error_paths() {
    let mut empty = Timeline::new();
    let ghost = Interval::held(3, st(0.0, 0, 0));
    assert_eq!(empty.remove(&ghost).unwrap_err(), TimelineError::EmptyTimeline);
    assert_eq!(
        empty.remove_at_tick(3).unwrap_err(),
        TimelineError::EmptyTimeline
    );

    let mut tl = mk_timeline(&[(0, 10, st(1.0, 10, 10))]);
    assert_eq!(
        tl.remove(&ghost).unwrap_err(),
        TimelineError::IntervalNotFound
    );
    assert_eq!(tl.len(), 1);
}

/// it should remove the single covering interval via remove_at_tick
#[test]
fn remove_at_tick_interior() {
    let mut tl = mk_timeline(&[
        (0, 10, st(1.0, 10, 10)),
        (10, 20, st(2.0, 20, 20)),
        (20, 30, st(3.0, 30, 30)),
    ]);
    tl.remove_at_tick(15).unwrap();
    assert_eq!(tl.len(), 2);
    assert_eq!(tl.start(), Some(0));
    assert_eq!(tl.end(), Some(30));
    assert!(tl.is_contiguous());
}

/// it should remove both intervals sharing a boundary tick
#[test]
fn remove_at_tick_boundary_hits_two() {
    let mut tl = mk_timeline(&[
        (0, 10, st(1.0, 10, 10)),
        (10, 20, st(2.0, 20, 20)),
        (20, 30, st(3.0, 30, 30)),
        (30, 40, st(4.0, 40, 40)),
    ]);
    tl.remove_at_tick(20).unwrap();
    assert_eq!(tl.len(), 2);
    assert_eq!(tl.start(), Some(0));
    assert_eq!(tl.end(), Some(40));
    assert!(tl.is_contiguous());
    assert_eq!(tl.as_slice()[0].end_tick, 30);
}

/// it should empty a two-interval timeline when removing at their shared boundary
#[test]
fn remove_at_tick_boundary_of_two() {
    let mut tl = mk_timeline(&[(0, 10, st(1.0, 10, 10)), (10, 20, st(2.0, 20, 20))]);
    tl.remove_at_tick(10).unwrap();
    assert!(tl.is_empty());
}

/// it should fail remove_at_tick outside the covered span
#[test]
fn remove_at_tick_out_of_bounds() {
    let mut tl = mk_timeline(&[(5, 10, st(1.0, 10, 10))]);
    let err = tl.remove_at_tick(11).unwrap_err();
    assert_eq!(
        err,
        TimelineError::OutOfBounds {
            tick: 11,
            start: 5,
            end: 10
        }
    );
    assert_eq!(tl.len(), 1);
}

/// it should accept zero-length intervals and keep them contiguous
#[test]
fn zero_length_intervals() {
    let mut tl = mk_timeline(&[(0, 10, st(1.0, 10, 10))]);
    tl.append(&State::default(), 10, 10, st(1.0, 10, 10))
        .unwrap();
    tl.append(&State::default(), 10, 25, st(2.0, 20, 20))
        .unwrap();
    assert!(tl.is_contiguous());
    assert_eq!(tl.len(), 3);
    assert!(tl.as_slice()[1].is_held());
}

/// it should locate the covering interval under half-open containment
#[test]
fn interval_at_is_half_open() {
    let tl = mk_timeline(&[(0, 10, st(1.0, 10, 10)), (10, 20, st(2.0, 20, 20))]);
    assert_eq!(tl.interval_at(0).unwrap().start_tick, 0);
    // A shared boundary belongs to the interval it opens.
    assert_eq!(tl.interval_at(10).unwrap().start_tick, 10);
    assert!(tl.interval_at(20).is_none());
}
