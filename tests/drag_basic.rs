#![forbid(unsafe_code)]
use weekendly::model::{Activity, ActivityId, Category, DayPlan, Schedule};
use weekendly::schedule::{apply_drag, DragOutcome};

fn act(id: &str) -> Activity {
    Activity::new(
        ActivityId::new(id),
        id.to_uppercase(),
        Category::Relax,
        "😌 Relaxed",
        "Sun",
    )
}

fn schedule(saturday: &[&str], sunday: &[&str]) -> Schedule {
    Schedule {
        days: vec![
            DayPlan {
                key: "saturday".into(),
                activities: saturday.iter().map(|id| act(id)).collect(),
            },
            DayPlan {
                key: "sunday".into(),
                activities: sunday.iter().map(|id| act(id)).collect(),
            },
        ],
    }
}

fn ids(schedule: &Schedule, day: &str) -> Vec<String> {
    schedule
        .day(day)
        .unwrap()
        .activities
        .iter()
        .map(|a| a.id.as_str().to_owned())
        .collect()
}

#[test]
fn same_day_drop_on_item_inserts_before_it() {
    // Glisser A sur C : insertion avant C dans [B, C] restant
    let s = schedule(&["a", "b", "c"], &["d"]);
    let out = apply_drag(&s, "a", "c");
    let next = out.applied().expect("drag applies");
    assert_eq!(ids(next, "saturday"), ["b", "a", "c"]);
    assert_eq!(ids(next, "sunday"), ["d"]);
}

#[test]
fn same_day_drop_on_container_moves_to_end() {
    let s = schedule(&["a", "b", "c"], &[]);
    let next = apply_drag(&s, "a", "saturday");
    assert_eq!(ids(next.applied().unwrap(), "saturday"), ["b", "c", "a"]);
}

#[test]
fn cross_day_drop_on_container_appends() {
    let s = schedule(&["a", "b"], &["c"]);
    let next = apply_drag(&s, "a", "sunday");
    let next = next.applied().unwrap();
    assert_eq!(ids(next, "saturday"), ["b"]);
    assert_eq!(ids(next, "sunday"), ["c", "a"]);
}

#[test]
fn cross_day_drop_on_item_inserts_before_it() {
    let s = schedule(&["a", "b"], &["c", "d"]);
    let next = apply_drag(&s, "b", "d");
    let next = next.applied().unwrap();
    assert_eq!(ids(next, "saturday"), ["a"]);
    assert_eq!(ids(next, "sunday"), ["c", "b", "d"]);
}

#[test]
fn cross_day_move_conserves_activity_count() {
    let s = schedule(&["a", "b", "c"], &["d"]);
    let next = apply_drag(&s, "b", "sunday");
    let next = next.applied().unwrap();
    assert_eq!(next.total_activities(), s.total_activities());
    // aucune activité dupliquée dans un même jour
    for day in &next.days {
        let mut seen: Vec<&str> = day.activities.iter().map(|a| a.id.as_str()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), day.activities.len());
    }
}

#[test]
fn reorder_onto_immediate_successor_is_idempotent() {
    let s = schedule(&["a", "b", "c"], &[]);
    let once = apply_drag(&s, "a", "b").applied().unwrap().clone();
    let twice = apply_drag(&once, "a", "b").applied().unwrap().clone();
    assert_eq!(once, twice);
}

#[test]
fn unknown_active_id_is_ignored() {
    let s = schedule(&["a"], &[]);
    assert_eq!(apply_drag(&s, "zz", "saturday"), DragOutcome::Ignored);
}

#[test]
fn unresolvable_over_id_is_ignored_not_reinterpreted() {
    // L'ancien comportement retombait sur « over = clé de jour littérale » ;
    // ici la cible introuvable annule le drag, état intact.
    let s = schedule(&["a", "b"], &[]);
    assert_eq!(apply_drag(&s, "a", "nonexistent-day"), DragOutcome::Ignored);
}

#[test]
fn drop_on_itself_is_ignored() {
    let s = schedule(&["a", "b"], &[]);
    assert_eq!(apply_drag(&s, "a", "a"), DragOutcome::Ignored);
}

#[test]
fn untouched_days_keep_their_sequences() {
    let mut s = schedule(&["a", "b"], &["c"]);
    s.days.push(DayPlan {
        key: "monday".into(),
        activities: vec![act("e")],
    });
    let next = apply_drag(&s, "a", "sunday");
    let next = next.applied().unwrap();
    assert_eq!(ids(next, "monday"), ["e"]);
}
