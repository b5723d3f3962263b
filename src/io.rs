use crate::model::{Activity, ActivityId, Category, Schedule};
use crate::storage::Snapshot;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'activités depuis CSV : header
/// `title,category,mood,icon[,description][,duration]`. Les identifiants
/// sont générés ; l'extension du catalogue ne vaut que pour la session.
pub fn import_activities_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Activity>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let title = rec.get(0).context("missing title")?.trim();
        let category = rec.get(1).context("missing category")?.trim();
        let mood = rec.get(2).context("missing mood")?.trim();
        let icon = rec.get(3).context("missing icon")?.trim();
        if title.is_empty() || mood.is_empty() || icon.is_empty() {
            bail!("invalid activity row (empty)");
        }
        let category: Category = category
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid category for activity {title}"))?;
        let mut activity = Activity::new(ActivityId::random(), title, category, mood, icon);
        if let Some(description) = rec.get(4) {
            let description = description.trim();
            if !description.is_empty() {
                activity.description = Some(description.to_owned());
            }
        }
        if let Some(duration) = rec.get(5) {
            let duration = duration.trim();
            if !duration.is_empty() {
                activity.duration = Some(
                    duration
                        .parse()
                        .with_context(|| format!("invalid duration for activity {title}"))?,
                );
            }
        }
        out.push(activity);
    }
    Ok(out)
}

/// Export JSON de l'instantané (jolie mise en forme)
pub fn export_plan_json<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning : header `day,position,id,title,category,duration,vibe`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "position", "id", "title", "category", "duration", "vibe"])?;
    for day in &schedule.days {
        for (pos, activity) in day.activities.iter().enumerate() {
            let position = pos.to_string();
            let duration = activity
                .duration
                .map(|m| m.to_string())
                .unwrap_or_default();
            w.write_record([
                day.key.as_str(),
                position.as_str(),
                activity.id.as_str(),
                activity.title.as_str(),
                activity.category.as_str(),
                duration.as_str(),
                activity.vibe.as_deref().unwrap_or(""),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
