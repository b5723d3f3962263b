use crate::holidays::{Holiday, LongWeekend};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Point d'entrée Calendarific par défaut ; surchargé en test.
pub const DEFAULT_API_URL: &str = "https://calendarific.com/api/v2/holidays";

/// Le flux amont ne borne rien ; on impose un délai raisonnable et on le
/// remonte comme n'importe quelle autre erreur réessayable.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Toute panne du flux (transport, statut, forme de la réponse) est
/// réessayable à la main ; aucune relance automatique.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("holiday feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("holiday feed answered with status {0}")]
    Status(u16),
    #[error("unexpected holiday feed payload: {0}")]
    Shape(String),
}

// Enveloppe { response: { holidays: [ { name, date: { iso } } ] } }
#[derive(Debug, Deserialize)]
struct Envelope {
    response: Payload,
}

#[derive(Debug, Deserialize)]
struct Payload {
    holidays: Vec<RawHoliday>,
}

#[derive(Debug, Deserialize)]
struct RawHoliday {
    name: String,
    date: RawDate,
}

#[derive(Debug, Deserialize)]
struct RawDate {
    iso: String,
}

/// Client du flux de jours fériés, paramétré par pays et années,
/// authentifié par clé statique.
#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
    api_key: String,
    country: String,
    years: Vec<i32>,
}

impl FeedClient {
    pub fn new<K: Into<String>, C: Into<String>>(api_key: K, country: C, years: Vec<i32>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            api_key: api_key.into(),
            country: country.into(),
            years,
        }
    }

    pub fn with_base_url<U: Into<String>>(mut self, url: U) -> Self {
        self.base_url = url.into();
        self
    }

    /// Récupère le lot de jours fériés, déjà déballé de son enveloppe.
    pub fn fetch_holidays(&self) -> Result<Vec<Holiday>, FeedError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let mut query: Vec<(&str, String)> = vec![
            ("api_key", self.api_key.clone()),
            ("country", self.country.clone()),
        ];
        for year in &self.years {
            query.push(("year", year.to_string()));
        }

        let response = http.get(&self.base_url).query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|err| FeedError::Shape(err.to_string()))?;

        Ok(envelope
            .response
            .holidays
            .into_iter()
            .map(|raw| Holiday::new(raw.name, raw.date.iso))
            .collect())
    }
}

/// Jeton identifiant une requête en vol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// États observables d'une récupération du flux.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    Loading,
    Ready(Vec<LongWeekend>),
    Failed(String),
}

/// Cycle de vie des récupérations : les relances ne sont pas dédupliquées,
/// seule la résolution de la dernière requête lancée compte. Une résolution
/// périmée est simplement ignorée.
#[derive(Debug)]
pub struct LongWeekendTracker {
    generation: u64,
    state: TrackerState,
}

impl Default for LongWeekendTracker {
    fn default() -> Self {
        Self {
            generation: 0,
            state: TrackerState::Loading,
        }
    }
}

impl LongWeekendTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Démarre une récupération et bascule en `Loading`.
    pub fn begin(&mut self) -> FetchToken {
        self.generation += 1;
        self.state = TrackerState::Loading;
        FetchToken(self.generation)
    }

    /// Pose le résultat d'une récupération ; `false` si le jeton est périmé
    /// (une requête plus récente a été lancée depuis).
    pub fn resolve(
        &mut self,
        token: FetchToken,
        result: Result<Vec<LongWeekend>, String>,
    ) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(windows) => TrackerState::Ready(windows),
            Err(message) => TrackerState::Failed(message),
        };
        true
    }
}
