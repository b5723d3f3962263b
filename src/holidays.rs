use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Jour férié tel que consommé du flux : nom + date ISO brute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub date: String,
}

impl Holiday {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, date: D) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }
}

/// Fenêtre de week-end prolongé dérivée. Éphémère : recalculée à chaque
/// récupération du flux, jamais persistée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongWeekend {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u8,
    pub name: String,
    /// Libellés du span dans l'ordre calendaire, le nom du férié à sa place.
    pub labels: Vec<String>,
}

/// Dérive les fenêtres de week-end prolongé : normalisation (un férié par
/// date ISO, le dernier gagne), règles par jour de semaine, dédoublonnage
/// par date de début, tri chronologique, filtrage au futur strict.
///
/// `today` est injectable pour rester déterministe en test. Une date
/// imparsable fait sauter l'enregistrement fautif, jamais le lot entier.
pub fn derive_long_weekends(holidays: &[Holiday], today: NaiveDate) -> Vec<LongWeekend> {
    let mut windows: Vec<LongWeekend> = Vec::new();

    for (name, date) in normalize(holidays) {
        let Some(window) = window_for(&name, date) else {
            continue;
        };
        // Deux fenêtres partageant la même date de début : la première vue gagne.
        if windows.iter().any(|w| w.start_date == window.start_date) {
            continue;
        }
        windows.push(window);
    }

    windows.sort_by_key(|w| w.start_date);
    windows.retain(|w| w.start_date > today);
    windows
}

/// Un enregistrement par date ISO, dans l'ordre de première apparition ;
/// une collision remplace le nom mais garde la position d'origine.
fn normalize(holidays: &[Holiday]) -> Vec<(String, NaiveDate)> {
    let mut seen: Vec<(&str, String, NaiveDate)> = Vec::new();
    for holiday in holidays {
        let Some(date) = parse_iso_date(&holiday.date) else {
            continue;
        };
        match seen.iter_mut().find(|(iso, ..)| *iso == holiday.date) {
            Some(slot) => slot.1 = holiday.name.clone(),
            None => seen.push((&holiday.date, holiday.name.clone(), date)),
        }
    }
    seen.into_iter().map(|(_, name, date)| (name, date)).collect()
}

/// Le flux émet tantôt une date nue, tantôt un instant horodaté ; seuls les
/// dix premiers caractères (la date calendaire) comptent ici.
fn parse_iso_date(iso: &str) -> Option<NaiveDate> {
    let head = iso.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Règles fixes par jour de semaine. Mercredi, samedi et dimanche
/// ne prolongent rien.
fn window_for(name: &str, date: NaiveDate) -> Option<LongWeekend> {
    match date.weekday() {
        Weekday::Fri => Some(window(
            name,
            date,
            date + Duration::days(2),
            vec![name.to_owned(), "Saturday".into(), "Sunday".into()],
        )),
        Weekday::Mon => Some(window(
            name,
            date - Duration::days(2),
            date,
            vec!["Saturday".into(), "Sunday".into(), name.to_owned()],
        )),
        Weekday::Thu => Some(window(
            name,
            date,
            date + Duration::days(3),
            vec![
                name.to_owned(),
                "Friday".into(),
                "Saturday".into(),
                "Sunday".into(),
            ],
        )),
        Weekday::Tue => Some(window(
            name,
            date - Duration::days(3),
            date,
            vec![
                "Saturday".into(),
                "Sunday".into(),
                "Monday".into(),
                name.to_owned(),
            ],
        )),
        _ => None,
    }
}

fn window(name: &str, start: NaiveDate, end: NaiveDate, labels: Vec<String>) -> LongWeekend {
    LongWeekend {
        start_date: start,
        end_date: end,
        duration_days: ((end - start).num_days() + 1) as u8,
        name: name.to_owned(),
        labels,
    }
}
