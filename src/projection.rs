use crate::aggregator::{BookingAggregator, Rejected};
use crate::config::ProjectionConfig;
use crate::error::ProjectionError;
use crate::model::{Booking, WeekGrid};
use crate::week::{bucket, window_for};
use chrono::NaiveDate;

/// Grille de la semaine contenant la date de référence, et rejets.
#[derive(Debug)]
pub struct Projection {
    pub grid: WeekGrid,
    pub rejected: Vec<Rejected>,
}

/// Chaîne complète : normalisation → regroupement → fenêtre → colonnes.
///
/// Seule une configuration invalide échoue ; les réservations illisibles
/// sont reportées dans `rejected`.
pub fn project(
    bookings: &[Booking],
    config: &ProjectionConfig,
    reference: NaiveDate,
) -> Result<Projection, ProjectionError> {
    let aggregator = BookingAggregator::from_config(config)?;
    let aggregation = aggregator.aggregate(bookings);
    let window = window_for(reference, config.week_starts_on);
    Ok(Projection {
        grid: bucket(&window, aggregation.slots),
        rejected: aggregation.rejected,
    })
}
