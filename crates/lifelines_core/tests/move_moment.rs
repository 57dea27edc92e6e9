mod helpers;

use helpers::assert_back_references_consistent;
use lifelines_core::{Life, MomentId, MoveMomentRequest, StoryLineId};
use uuid::Uuid;

/// Storyline A with two moments, storyline B with one.
fn setup() -> (Life, StoryLineId, StoryLineId, MomentId, MomentId, MomentId) {
    let mut life = Life::new();
    let a = life.create_story_line("food and symptom log");
    let b = life.create_story_line("vacation log");
    let m1 = life
        .create_and_add_moment("I ate a cheeseburger", a)
        .expect("add to a");
    let m2 = life
        .create_and_add_moment("I got a headache", a)
        .expect("add to a");
    let m3 = life
        .create_and_add_moment("We landed in France!", b)
        .expect("add to b");
    (life, a, b, m1, m2, m3)
}

fn moment_ids(life: &Life, story_line_id: StoryLineId) -> Vec<MomentId> {
    life.story_lines
        .get(story_line_id)
        .expect("storyline should exist")
        .moment_ids
        .clone()
}

#[test]
fn move_between_story_lines_updates_both_sides() {
    let (mut life, a, b, m1, m2, m3) = setup();

    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m1,
        origin_id: a,
        destination_id: b,
        anchor: None,
    });

    assert_eq!(moment_ids(&life, a), vec![m2]);
    assert_eq!(moment_ids(&life, b), vec![m3, m1]);
    let moved = life.moments.get(m1).expect("moment should survive the move");
    assert_eq!(moved.story_line_ids, vec![b]);
    assert_back_references_consistent(&life);
}

#[test]
fn move_with_anchor_inserts_at_anchor_position() {
    let (mut life, a, b, m1, _m2, m3) = setup();

    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m1,
        origin_id: a,
        destination_id: b,
        anchor: Some(m3),
    });

    assert_eq!(moment_ids(&life, b), vec![m1, m3]);
    assert_back_references_consistent(&life);
}

#[test]
fn move_with_unresolvable_anchor_appends() {
    let (mut life, a, b, m1, _m2, m3) = setup();

    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m1,
        origin_id: a,
        destination_id: b,
        anchor: Some(Uuid::new_v4()),
    });

    assert_eq!(moment_ids(&life, b), vec![m3, m1]);
}

#[test]
fn same_origin_and_destination_reorders_in_place() {
    let (mut life, a, _b, m1, m2, _m3) = setup();

    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m2,
        origin_id: a,
        destination_id: a,
        anchor: Some(m1),
    });

    assert_eq!(moment_ids(&life, a), vec![m2, m1]);
    let reordered = life.moments.get(m2).expect("moment should exist");
    assert_eq!(reordered.story_line_ids, vec![a]);
    assert_back_references_consistent(&life);
}

#[test]
fn move_round_trip_restores_origin_order_and_associations() {
    let (mut life, a, b, _m1, m2, _m3) = setup();
    let order_before = moment_ids(&life, a);
    let associations_before = life
        .moments
        .get(m2)
        .expect("moment should exist")
        .story_line_ids
        .clone();

    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m2,
        origin_id: a,
        destination_id: b,
        anchor: None,
    });
    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m2,
        origin_id: b,
        destination_id: a,
        anchor: None,
    });

    assert_eq!(moment_ids(&life, a), order_before);
    let restored = life.moments.get(m2).expect("moment should exist");
    assert_eq!(restored.story_line_ids, associations_before);
    assert_back_references_consistent(&life);
}

#[test]
fn move_is_noop_when_any_id_is_unresolvable() {
    let (mut life, a, b, m1, _m2, _m3) = setup();
    let before = life.clone();

    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: Uuid::new_v4(),
        origin_id: a,
        destination_id: b,
        anchor: None,
    });
    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m1,
        origin_id: Uuid::new_v4(),
        destination_id: b,
        anchor: None,
    });
    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m1,
        origin_id: a,
        destination_id: Uuid::new_v4(),
        anchor: None,
    });

    assert_eq!(life, before);
}

#[test]
fn move_never_duplicates_a_shared_moment_in_destination() {
    let (mut life, a, b, m1, _m2, m3) = setup();
    life.update_story_line_ids(m1, &[a, b]);

    life.move_moment_to_different_story_line(&MoveMomentRequest {
        moment_id: m1,
        origin_id: a,
        destination_id: b,
        anchor: None,
    });

    assert_eq!(moment_ids(&life, b), vec![m3, m1]);
    let moved = life.moments.get(m1).expect("moment should exist");
    assert_eq!(moved.story_line_ids, vec![b]);
    assert_back_references_consistent(&life);
}
