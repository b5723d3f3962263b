#![forbid(unsafe_code)]
//! Weekendly — bibliothèque de planification de week-ends locale (sans BD).
//!
//! - Catalogue d'activités embarqué, planning par jour, thèmes.
//! - Réducteurs purs pour le glisser-déposer (réordonner/déplacer).
//! - Dérivation des week-ends prolongés depuis un flux de jours fériés.
//! - Instantané JSON `{ schedule, active_theme }` ; tout le reste est éphémère.

pub mod catalog;
pub mod feed;
pub mod holidays;
pub mod io;
pub mod model;
pub mod render;
pub mod schedule;
pub mod storage;

pub use feed::{FeedClient, FeedError, LongWeekendTracker, TrackerState};
pub use holidays::{derive_long_weekends, Holiday, LongWeekend};
pub use model::{Activity, ActivityId, Category, DayPlan, Schedule, Theme};
pub use render::{prepare_summary, PlanRenderer, PlanSummary, TextPlan};
pub use schedule::{apply_drag, ActivityPatch, DragOutcome, PlanError, Planner};
pub use storage::{JsonStorage, Snapshot, Storage};
