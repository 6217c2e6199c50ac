#![forbid(unsafe_code)]
//! Semainier — projection de réservations sur une grille hebdomadaire (sans BD).
//!
//! - Normalisation des instants vers un fuseau d'affichage unique (IANA, DST compris).
//! - Regroupement des réservations au même instant exact en « slots ».
//! - Positionnement vertical en pixels dans une plage horaire configurable.
//! - Fenêtre de 7 jours, navigation par semaines, répartition par colonne.
//!
//! Aucun état : chaque appel recalcule tout à partir de la liste fournie.

pub mod aggregator;
pub mod config;
pub mod error;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod normalizer;
pub mod projection;
pub mod week;

pub use aggregator::{aggregate, Aggregation, BookingAggregator, LayoutConfig, Rejected};
pub use config::ProjectionConfig;
pub use error::ProjectionError;
pub use model::{Booking, BookingId, DayColumn, NormalizedBooking, Slot, WeekGrid};
pub use normalizer::{normalize, parse_instant, DisplayZone};
pub use projection::{project, Projection};
pub use week::{bucket, shift, window_for, WeekStart, WeekWindow};
