use crate::week::WeekWindow;
use chrono::{DateTime, FixedOffset, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CLIENT_NAME: &str = "No Name";
pub const DEFAULT_ADDRESS: &str = "No Address Provided";
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";
pub const DEFAULT_STATUS: &str = "Booked";

/// Identifiant fort pour Booking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookingId(String);

impl BookingId {
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

/// Réservation brute telle que livrée par la couche de données.
///
/// `start` reste la chaîne d'origine : sa validité n'est vérifiée qu'à la
/// normalisation, où une valeur illisible exclut la réservation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Booking {
    pub id: BookingId,
    pub start: String,
    pub client_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assignee: Option<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_status"))]
    pub status: String,
}

#[cfg(feature = "serde")]
fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl Booking {
    /// Un nom de client vide devient `"No Name"`.
    pub fn new<S: Into<String>, C: Into<String>>(id: BookingId, start: S, client_name: C) -> Self {
        let client_name = client_name.into().trim().to_string();
        Self {
            id,
            start: start.into(),
            client_name: if client_name.is_empty() {
                DEFAULT_CLIENT_NAME.to_string()
            } else {
                client_name
            },
            address: None,
            assignee: None,
            status: DEFAULT_STATUS.to_string(),
        }
    }

    pub fn with_address<S: Into<String>>(mut self, address: S) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_assignee<S: Into<String>>(mut self, assignee: S) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = status.into();
        self
    }

    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or(DEFAULT_ADDRESS)
    }

    /// Intervenant affecté, `"Unassigned"` à défaut.
    pub fn assignee(&self) -> &str {
        self.assignee.as_deref().unwrap_or(DEFAULT_ASSIGNEE)
    }
}

/// Réservation dont l'instant est exprimé dans le fuseau d'affichage.
///
/// `local_start` désigne le même instant absolu que `start` ; seuls les
/// champs calendaires (jour, heure, minute) diffèrent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedBooking {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub booking: Booking,
    pub local_start: DateTime<FixedOffset>,
}

/// Entrée de la grille : une réservation seule ou un groupe simultané.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    /// Instant local commun à tous les membres.
    pub key: DateTime<FixedOffset>,
    pub is_group: bool,
    /// Jamais vide ; ordre d'entrée conservé.
    pub members: Vec<NormalizedBooking>,
    pub display_label: String,
    pub top_offset_px: i32,
}

impl Slot {
    /// Premier membre (celui dont l'intervenant figure sur la carte).
    pub fn primary(&self) -> &NormalizedBooking {
        &self.members[0]
    }

    /// Clients des 2e et 3e membres, affichés en aperçu sous un groupe.
    pub fn preview(&self) -> Vec<&str> {
        self.members
            .iter()
            .skip(1)
            .take(2)
            .map(|m| m.booking.client_name.as_str())
            .collect()
    }

    /// Date calendaire du slot dans le fuseau d'affichage.
    pub fn local_date(&self) -> NaiveDate {
        self.key.date_naive()
    }
}

/// Colonne d'un jour dans la grille.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayColumn {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

/// Grille hebdomadaire : 7 colonnes, une par jour de la fenêtre.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekGrid {
    pub window: WeekWindow,
    pub columns: Vec<DayColumn>,
}

impl WeekGrid {
    pub fn column(&self, date: NaiveDate) -> Option<&DayColumn> {
        self.columns.iter().find(|c| c.date == date)
    }

    /// Index de la colonne à mettre en évidence pour `today`.
    pub fn today_index(&self, today: NaiveDate) -> Option<usize> {
        self.columns.iter().position(|c| c.date == today)
    }

    pub fn slot_count(&self) -> usize {
        self.columns.iter().map(|c| c.slots.len()).sum()
    }
}
