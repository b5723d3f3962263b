use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Jours toujours présents dans un planning.
pub const SATURDAY: &str = "saturday";
pub const SUNDAY: &str = "sunday";

/// Ordre d'ajout des jours supplémentaires.
pub const EXTRA_DAYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

/// Identifiant fort pour Activity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catégories fermées du catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Outdoors,
    Entertainment,
    Relax,
    Culture,
    Social,
    Learning,
    Wellness,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Outdoors => "Outdoors",
            Category::Entertainment => "Entertainment",
            Category::Relax => "Relax",
            Category::Culture => "Culture",
            Category::Social => "Social",
            Category::Learning => "Learning",
            Category::Wellness => "Wellness",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "outdoors" => Ok(Category::Outdoors),
            "entertainment" => Ok(Category::Entertainment),
            "relax" => Ok(Category::Relax),
            "culture" => Ok(Category::Culture),
            "social" => Ok(Category::Social),
            "learning" => Ok(Category::Learning),
            "wellness" => Ok(Category::Wellness),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activité du catalogue. Entrée immuable, sauf `vibe` qui n'est posé
/// que sur la copie planifiée, jamais sur l'original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub category: Category,
    pub mood: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
}

impl Activity {
    pub fn new<T: Into<String>, M: Into<String>, I: Into<String>>(
        id: ActivityId,
        title: T,
        category: Category,
        mood: M,
        icon: I,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            mood: mood.into(),
            icon: icon.into(),
            description: None,
            duration: None,
            vibe: None,
        }
    }
}

/// Thèmes visuels proposés par l'application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    DefaultWeekend,
    LazyWeekend,
    AdventurousWeekend,
    FamilyWeekend,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::LazyWeekend
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::DefaultWeekend => "default-weekend",
            Theme::LazyWeekend => "lazy-weekend",
            Theme::AdventurousWeekend => "adventurous-weekend",
            Theme::FamilyWeekend => "family-weekend",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default-weekend" => Ok(Theme::DefaultWeekend),
            "lazy-weekend" => Ok(Theme::LazyWeekend),
            "adventurous-weekend" => Ok(Theme::AdventurousWeekend),
            "family-weekend" => Ok(Theme::FamilyWeekend),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Séquence ordonnée des activités d'un jour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub key: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl DayPlan {
    pub fn empty<K: Into<String>>(key: K) -> Self {
        Self {
            key: key.into(),
            activities: Vec::new(),
        }
    }

    pub fn position_of(&self, id: &ActivityId) -> Option<usize> {
        self.activities.iter().position(|a| &a.id == id)
    }
}

/// Planning complet : suite ordonnée de jours (samedi et dimanche d'abord,
/// puis les jours ajoutés à la demande).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<DayPlan>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            days: vec![DayPlan::empty(SATURDAY), DayPlan::empty(SUNDAY)],
        }
    }
}

impl Schedule {
    pub fn day<'a>(&'a self, key: &str) -> Option<&'a DayPlan> {
        self.days.iter().find(|d| d.key == key)
    }

    pub fn day_mut(&mut self, key: &str) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.key == key)
    }

    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.key.as_str())
    }

    /// Localise une activité : (index du jour, position dans le jour).
    pub fn locate(&self, id: &ActivityId) -> Option<(usize, usize)> {
        self.days
            .iter()
            .enumerate()
            .find_map(|(di, day)| day.position_of(id).map(|pos| (di, pos)))
    }

    pub fn total_activities(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }
}
