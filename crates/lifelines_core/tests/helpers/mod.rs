use lifelines_core::Life;

/// Asserts the bidirectional association invariant: for every moment m and
/// storyline s, `s.id in m.story_line_ids <=> m.id in s.moment_ids`, and
/// every referenced id resolves to a live entry.
pub fn assert_back_references_consistent(life: &Life) {
    for moment in life.moments.iter() {
        for story_line_id in &moment.story_line_ids {
            let story_line = life
                .story_lines
                .get(*story_line_id)
                .expect("moment must reference a live storyline");
            assert!(
                story_line.moment_ids.contains(&moment.id),
                "storyline `{}` is missing back-reference to moment `{}`",
                story_line.name,
                moment.description
            );
        }
    }

    for story_line in life.story_lines.iter() {
        for moment_id in &story_line.moment_ids {
            let moment = life
                .moments
                .get(*moment_id)
                .expect("storyline must reference a live moment");
            assert!(
                moment.story_line_ids.contains(&story_line.id),
                "moment `{}` is missing back-reference to storyline `{}`",
                moment.description,
                story_line.name
            );
        }
    }
}
