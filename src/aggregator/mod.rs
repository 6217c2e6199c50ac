mod grouping;
mod layout;
mod types;

pub use types::{Aggregation, LayoutConfig, Rejected, MAX_PX_PER_HOUR};

use crate::config::ProjectionConfig;
use crate::error::ProjectionError;
use crate::model::{Booking, NormalizedBooking, Slot};
use crate::normalizer::DisplayZone;

/// BookingAggregator : fuseau d'affichage + géométrie, sans autre état.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingAggregator {
    zone: DisplayZone,
    layout: LayoutConfig,
}

impl BookingAggregator {
    pub fn new(zone: DisplayZone, layout: LayoutConfig) -> Self {
        Self { zone, layout }
    }

    /// Construit l'agrégateur depuis une configuration validée.
    pub fn from_config(config: &ProjectionConfig) -> Result<Self, ProjectionError> {
        config.validate()?;
        Ok(Self::new(config.zone()?, config.layout))
    }

    pub fn zone(&self) -> &DisplayZone {
        &self.zone
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Normalise, écarte les horodatages illisibles, regroupe par instant
    /// exact et calcule la position de chaque slot.
    pub fn aggregate(&self, bookings: &[Booking]) -> Aggregation {
        let mut normalized = Vec::with_capacity(bookings.len());
        let mut rejected = Vec::new();

        for booking in bookings {
            match self.zone.normalize_booking(booking) {
                Ok(nb) => normalized.push(nb),
                Err(error) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(
                        booking = booking.id.as_str(),
                        code = error.code(),
                        %error,
                        "booking excluded from calendar"
                    );
                    rejected.push(Rejected {
                        id: booking.id.clone(),
                        error,
                    });
                }
            }
        }

        let slots: Vec<Slot> = grouping::group_by_instant(normalized)
            .into_iter()
            .map(|members| self.build_slot(members))
            .collect();

        #[cfg(feature = "logging")]
        tracing::debug!(
            zone = self.zone.name(),
            input = bookings.len(),
            slots = slots.len(),
            rejected = rejected.len(),
            "bookings aggregated"
        );

        Aggregation { slots, rejected }
    }

    fn build_slot(&self, members: Vec<NormalizedBooking>) -> Slot {
        let key = members[0].local_start;
        Slot {
            key,
            is_group: members.len() > 1,
            display_label: grouping::display_label(&members),
            top_offset_px: self.layout.top_offset_px(&key),
            members,
        }
    }
}

/// Agrégation avec la géométrie par défaut (07:00–19:00, 60 px/h).
pub fn aggregate(bookings: &[Booking], zone: &DisplayZone) -> Aggregation {
    BookingAggregator::new(*zone, LayoutConfig::default()).aggregate(bookings)
}
