use crate::model::{ActivityId, Schedule};

/// Jour contenant l'activité, s'il existe.
pub(super) fn day_of<'a>(schedule: &'a Schedule, id: &ActivityId) -> Option<&'a str> {
    schedule
        .days
        .iter()
        .find(|d| d.position_of(id).is_some())
        .map(|d| d.key.as_str())
}

/// Cible d'un dépôt, une fois résolue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DropTarget {
    /// Dépôt sur le conteneur du jour : insertion en fin de séquence.
    Container(String),
    /// Dépôt sur une activité : insertion avant elle.
    Before(String, ActivityId),
}

/// Résout `over_id` : d'abord un jour connu, sinon le jour qui contient
/// l'activité visée. `None` = cible introuvable, le drag sera ignoré.
pub(super) fn resolve_target(schedule: &Schedule, over_id: &str) -> Option<DropTarget> {
    if schedule.day(over_id).is_some() {
        return Some(DropTarget::Container(over_id.to_owned()));
    }
    let over = ActivityId::new(over_id);
    day_of(schedule, &over).map(|day| DropTarget::Before(day.to_owned(), over))
}
