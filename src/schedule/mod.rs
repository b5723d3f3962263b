mod mutate;
mod types;
mod util;

pub use mutate::{
    add_activity, add_day, apply_drag, next_day_key, remove_activity, remove_day, update_activity,
};
pub use types::{ActivityPatch, DragOutcome, PlanError};

use crate::catalog;
use crate::model::{Activity, ActivityId, Schedule, Theme};
use crate::storage::Snapshot;
use rand::Rng;

/// Planner : détient l'état courant (catalogue, planning, thème) et délègue
/// chaque mutation aux réducteurs purs de `mutate`. L'abonnement et le rendu
/// restent à la charge de l'appelant.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Vec<Activity>,
    schedule: Schedule,
    theme: Theme,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner {
    pub fn new() -> Self {
        Self {
            catalog: catalog::builtin_catalog(),
            schedule: Schedule::default(),
            theme: Theme::default(),
        }
    }

    /// Restaure un planner depuis un instantané persisté.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            catalog: catalog::builtin_catalog(),
            schedule: snapshot.schedule,
            theme: snapshot.active_theme,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            schedule: self.schedule.clone(),
            active_theme: self.theme,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn theme(&self) -> Theme {
        self.theme
    }
    pub fn catalog(&self) -> &[Activity] {
        &self.catalog
    }

    /// Étend le catalogue pour la session courante (jamais persisté).
    pub fn extend_catalog(&mut self, extra: Vec<Activity>) {
        self.catalog.extend(extra);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn add_activity(&mut self, id: &ActivityId, day: &str) -> Result<(), PlanError> {
        self.schedule = mutate::add_activity(&self.schedule, &self.catalog, id, day)?;
        Ok(())
    }

    pub fn remove_activity(&mut self, id: &ActivityId, day: &str) -> Result<(), PlanError> {
        self.schedule = mutate::remove_activity(&self.schedule, id, day)?;
        Ok(())
    }

    pub fn update_activity(
        &mut self,
        id: &ActivityId,
        day: &str,
        patch: &ActivityPatch,
    ) -> Result<(), PlanError> {
        self.schedule = mutate::update_activity(&self.schedule, id, day, patch)?;
        Ok(())
    }

    /// Applique un glisser-déposer ; `false` = drag annulé, état inchangé.
    pub fn apply_drag(&mut self, active_id: &str, over_id: &str) -> bool {
        match mutate::apply_drag(&self.schedule, active_id, over_id) {
            DragOutcome::Applied(next) => {
                self.schedule = next;
                true
            }
            DragOutcome::Ignored => false,
        }
    }

    pub fn add_day(&mut self, key: &str) -> Result<(), PlanError> {
        self.schedule = mutate::add_day(&self.schedule, key)?;
        Ok(())
    }

    /// Ajoute le prochain jour libre (lundi → vendredi) et renvoie sa clé.
    pub fn add_next_day(&mut self) -> Result<&'static str, PlanError> {
        let key = mutate::next_day_key(&self.schedule).ok_or(PlanError::NoDayLeft)?;
        self.schedule = mutate::add_day(&self.schedule, key)?;
        Ok(key)
    }

    pub fn remove_day(&mut self, key: &str) -> Result<(), PlanError> {
        self.schedule = mutate::remove_day(&self.schedule, key)?;
        Ok(())
    }

    /// Remplace samedi et dimanche par un tirage de 4 activités
    /// de catégories distinctes.
    pub fn surprise<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlanError> {
        self.schedule = catalog::surprise_plan(&self.catalog, &self.schedule, rng)?;
        Ok(())
    }
}
