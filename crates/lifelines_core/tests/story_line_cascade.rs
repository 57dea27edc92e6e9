mod helpers;

use helpers::assert_back_references_consistent;
use lifelines_core::Life;
use uuid::Uuid;

#[test]
fn delete_story_line_cascades_per_remaining_membership() {
    let mut life = Life::new();
    let a = life.create_story_line("food and symptom log");
    let b = life.create_story_line("vacation log");
    let sole = life
        .create_and_add_moment("I ate a cheeseburger", a)
        .expect("add to a");
    let shared = life
        .create_and_add_moment("I got a headache", a)
        .expect("add to a");
    life.update_story_line_ids(shared, &[a, b]);

    life.delete_story_line(a);

    assert!(life.story_lines.get(a).is_none());
    assert!(
        life.moments.get(sole).is_none(),
        "moment with no remaining storyline must be removed entirely"
    );
    let survivor = life.moments.get(shared).expect("shared moment survives");
    assert_eq!(survivor.story_line_ids, vec![b]);
    assert_back_references_consistent(&life);
}

#[test]
fn delete_story_line_with_no_moments_removes_entry_only() {
    let mut life = Life::sample_data();
    let empty = life.create_story_line("empty");

    life.delete_story_line(empty);

    assert!(life.story_lines.get(empty).is_none());
    assert_eq!(life.moments.len(), 1);
    assert_back_references_consistent(&life);
}

#[test]
fn delete_story_line_is_noop_for_unknown_id() {
    let mut life = Life::sample_data();
    let before = life.clone();

    life.delete_story_line(Uuid::new_v4());

    assert_eq!(life, before);
}

#[test]
fn delete_moment_removes_every_back_reference() {
    let mut life = Life::new();
    let a = life.create_story_line("food and symptom log");
    let b = life.create_story_line("vacation log");
    let moment_id = life
        .create_and_add_moment("We landed in France!", b)
        .expect("add to b");
    life.update_story_line_ids(moment_id, &[a, b]);

    life.delete_moment(moment_id);

    assert!(life.moments.get(moment_id).is_none());
    for story_line in [a, b] {
        let entry = life
            .story_lines
            .get(story_line)
            .expect("storyline should remain");
        assert!(entry.moment_ids.is_empty());
    }
    assert_back_references_consistent(&life);
}

#[test]
fn delete_moment_is_noop_for_unknown_id() {
    let mut life = Life::sample_data();
    let before = life.clone();

    life.delete_moment(Uuid::new_v4());

    assert_eq!(life, before);
}

#[test]
fn story_lines_for_moment_follows_association_order() {
    let mut life = Life::new();
    let a = life.create_story_line("food and symptom log");
    let b = life.create_story_line("vacation log");
    let moment_id = life.create_moment("I had a mild sore throat this morning", None);
    life.update_story_line_ids(moment_id, &[b, a]);

    let names: Vec<&str> = life
        .story_lines_for_moment(moment_id)
        .iter()
        .map(|story_line| story_line.name.as_str())
        .collect();

    assert_eq!(names, vec!["vacation log", "food and symptom log"]);
    assert!(life.story_lines_for_moment(Uuid::new_v4()).is_empty());
}
