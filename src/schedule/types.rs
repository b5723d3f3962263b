use crate::model::Schedule;
use thiserror::Error;

/// Résultat d'un glisser-déposer. `Ignored` vaut annulation :
/// l'état antérieur reste valable tel quel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Applied(Schedule),
    Ignored,
}

impl DragOutcome {
    pub fn applied(&self) -> Option<&Schedule> {
        match self {
            DragOutcome::Applied(s) => Some(s),
            DragOutcome::Ignored => None,
        }
    }
}

/// Retouche partielle d'une activité planifiée (équivalent d'un patch).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub mood: Option<String>,
    pub duration: Option<u32>,
    pub vibe: Option<String>,
}

impl ActivityPatch {
    pub fn vibe<S: Into<String>>(tag: S) -> Self {
        Self {
            vibe: Some(tag.into()),
            ..Self::default()
        }
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),
    #[error("unknown day: {0}")]
    UnknownDay(String),
    #[error("activity {activity} already scheduled on {day}")]
    AlreadyScheduled { activity: String, day: String },
    #[error("day already present: {0}")]
    DayExists(String),
    #[error("weekend day cannot be removed: {0}")]
    ProtectedDay(String),
    #[error("no extra day left to add")]
    NoDayLeft,
    #[error("catalog only covers {0} distinct categories, 4 required")]
    NotEnoughCategories(usize),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
