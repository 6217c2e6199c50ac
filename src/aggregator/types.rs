use crate::error::ProjectionError;
use crate::model::{BookingId, Slot};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hauteur d'heure maximale acceptée par `validate`.
pub const MAX_PX_PER_HOUR: u32 = 10_000;

/// Géométrie de la grille : plage horaire affichée et hauteur d'une heure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    pub px_per_hour: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 7,
            day_end_hour: 19,
            px_per_hour: 60,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.day_start_hour >= self.day_end_hour {
            return Err(ProjectionError::InvalidLayout(
                "day_start_hour must be before day_end_hour",
            ));
        }
        if self.day_end_hour > 24 {
            return Err(ProjectionError::InvalidLayout("day_end_hour must be <= 24"));
        }
        if self.px_per_hour == 0 {
            return Err(ProjectionError::InvalidLayout("px_per_hour must be > 0"));
        }
        if self.px_per_hour > MAX_PX_PER_HOUR {
            return Err(ProjectionError::InvalidLayout("px_per_hour must be <= 10000"));
        }
        Ok(())
    }
}

/// Réservation exclue de la grille (horodatage illisible).
#[derive(Debug)]
pub struct Rejected {
    pub id: BookingId,
    pub error: ProjectionError,
}

/// Résultat d'une agrégation : slots dans l'ordre de première apparition,
/// plus les réservations écartées, à journaliser par l'appelant.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub slots: Vec<Slot>,
    pub rejected: Vec<Rejected>,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Nombre de réservations placées (tous slots confondus).
    pub fn booking_count(&self) -> usize {
        self.slots.iter().map(|s| s.members.len()).sum()
    }
}
