use crate::model::{Schedule, Theme};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Résumé prêt à imprimer ou partager.
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub generated_at: DateTime<Utc>,
    pub content: String,
}

/// Permet de customiser le rendu du plan (texte, HTML imprimable, etc.).
pub trait PlanRenderer {
    fn render(&self, schedule: &Schedule, theme: Theme, generated_at: DateTime<Utc>) -> String;
}

/// Gabarit texte simple, destiné à l'export/impression natif.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPlan;

impl PlanRenderer for TextPlan {
    fn render(&self, schedule: &Schedule, theme: Theme, generated_at: DateTime<Utc>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Ton plan de week-end (thème {theme})");
        let _ = writeln!(out, "Généré le {}", generated_at.to_rfc3339());
        for day in &schedule.days {
            let _ = writeln!(out, "\n== {} ==", day.key);
            if day.activities.is_empty() {
                let _ = writeln!(out, "  (rien de prévu)");
                continue;
            }
            for activity in &day.activities {
                let duration = activity
                    .duration
                    .map(|m| format!(" — {m} min"))
                    .unwrap_or_default();
                let vibe = activity
                    .vibe
                    .as_deref()
                    .map(|v| format!(" [{v}]"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "  - {} ({}, {}){duration}{vibe}",
                    activity.title, activity.category, activity.mood
                );
            }
        }
        out
    }
}

/// Prépare le résumé du plan courant avec le renderer fourni.
pub fn prepare_summary(
    schedule: &Schedule,
    theme: Theme,
    now: DateTime<Utc>,
    renderer: &dyn PlanRenderer,
) -> PlanSummary {
    PlanSummary {
        generated_at: now,
        content: renderer.render(schedule, theme, now),
    }
}
