use super::util::{self, DropTarget};
use super::{ActivityPatch, DragOutcome, PlanError};
use crate::model::{Activity, ActivityId, DayPlan, Schedule, EXTRA_DAYS, SATURDAY, SUNDAY};

/// Réducteur du glisser-déposer. Réordonne dans un jour ou déplace entre
/// jours ; toute cible irrésoluble vaut drag annulé (`Ignored`), jamais
/// d'état indéfini.
pub fn apply_drag(schedule: &Schedule, active_id: &str, over_id: &str) -> DragOutcome {
    if active_id == over_id {
        return DragOutcome::Ignored;
    }

    let active = ActivityId::new(active_id);
    let Some((source_idx, active_pos)) = schedule.locate(&active) else {
        return DragOutcome::Ignored;
    };
    let Some(target) = util::resolve_target(schedule, over_id) else {
        return DragOutcome::Ignored;
    };

    let source_key = schedule.days[source_idx].key.clone();
    let mut next = schedule.clone();

    match target {
        DropTarget::Container(day) if day == source_key => {
            // Dépôt sur son propre conteneur : l'activité passe en fin de jour.
            let items = &mut next.days[source_idx].activities;
            let moved = items.remove(active_pos);
            items.push(moved);
        }
        DropTarget::Before(day, over) if day == source_key => {
            let items = &mut next.days[source_idx].activities;
            let moved = items.remove(active_pos);
            // Position recalculée après retrait : insertion avant la cible.
            let Some(over_pos) = items.iter().position(|a| a.id == over) else {
                return DragOutcome::Ignored;
            };
            items.insert(over_pos, moved);
        }
        DropTarget::Container(day) => {
            let moved = next.days[source_idx].activities.remove(active_pos);
            match next.day_mut(&day) {
                Some(plan) => plan.activities.push(moved),
                None => return DragOutcome::Ignored,
            }
        }
        DropTarget::Before(day, over) => {
            let moved = next.days[source_idx].activities.remove(active_pos);
            let Some(plan) = next.day_mut(&day) else {
                return DragOutcome::Ignored;
            };
            let Some(over_pos) = plan.position_of(&over) else {
                return DragOutcome::Ignored;
            };
            plan.activities.insert(over_pos, moved);
        }
    }

    DragOutcome::Applied(next)
}

/// Copie une activité du catalogue vers un jour. Doublon intra-jour refusé ;
/// rien n'empêche la même activité d'apparaître sur deux jours différents.
pub fn add_activity(
    schedule: &Schedule,
    catalog: &[Activity],
    activity_id: &ActivityId,
    day: &str,
) -> Result<Schedule, PlanError> {
    let activity = catalog
        .iter()
        .find(|a| &a.id == activity_id)
        .ok_or_else(|| PlanError::UnknownActivity(activity_id.to_string()))?;

    let mut next = schedule.clone();
    let plan = next
        .day_mut(day)
        .ok_or_else(|| PlanError::UnknownDay(day.to_owned()))?;
    if plan.position_of(activity_id).is_some() {
        return Err(PlanError::AlreadyScheduled {
            activity: activity_id.to_string(),
            day: day.to_owned(),
        });
    }
    plan.activities.push(activity.clone());
    Ok(next)
}

/// Retire une activité d'un jour. Une activité absente du jour est un no-op.
pub fn remove_activity(
    schedule: &Schedule,
    activity_id: &ActivityId,
    day: &str,
) -> Result<Schedule, PlanError> {
    let mut next = schedule.clone();
    let plan = next
        .day_mut(day)
        .ok_or_else(|| PlanError::UnknownDay(day.to_owned()))?;
    plan.activities.retain(|a| &a.id != activity_id);
    Ok(next)
}

/// Applique un patch partiel à la copie planifiée, jamais au catalogue.
pub fn update_activity(
    schedule: &Schedule,
    activity_id: &ActivityId,
    day: &str,
    patch: &ActivityPatch,
) -> Result<Schedule, PlanError> {
    let mut next = schedule.clone();
    let plan = next
        .day_mut(day)
        .ok_or_else(|| PlanError::UnknownDay(day.to_owned()))?;
    let pos = plan
        .position_of(activity_id)
        .ok_or_else(|| PlanError::UnknownActivity(activity_id.to_string()))?;

    let activity = &mut plan.activities[pos];
    if let Some(title) = &patch.title {
        activity.title = title.clone();
    }
    if let Some(mood) = &patch.mood {
        activity.mood = mood.clone();
    }
    if let Some(duration) = patch.duration {
        activity.duration = Some(duration);
    }
    if let Some(vibe) = &patch.vibe {
        activity.vibe = Some(vibe.clone());
    }
    Ok(next)
}

/// Prochain jour ajoutable, dans l'ordre lundi → vendredi.
pub fn next_day_key(schedule: &Schedule) -> Option<&'static str> {
    EXTRA_DAYS
        .iter()
        .copied()
        .find(|&key| schedule.day(key).is_none())
}

pub fn add_day(schedule: &Schedule, key: &str) -> Result<Schedule, PlanError> {
    if schedule.day(key).is_some() {
        return Err(PlanError::DayExists(key.to_owned()));
    }
    let mut next = schedule.clone();
    next.days.push(DayPlan::empty(key));
    Ok(next)
}

/// Retire un jour ajouté, ainsi que tous les jours ajoutés après lui.
/// Samedi et dimanche sont intouchables.
pub fn remove_day(schedule: &Schedule, key: &str) -> Result<Schedule, PlanError> {
    if key == SATURDAY || key == SUNDAY {
        return Err(PlanError::ProtectedDay(key.to_owned()));
    }
    let pos = schedule
        .days
        .iter()
        .position(|d| d.key == key)
        .ok_or_else(|| PlanError::UnknownDay(key.to_owned()))?;
    let mut next = schedule.clone();
    next.days.truncate(pos);
    Ok(next)
}
