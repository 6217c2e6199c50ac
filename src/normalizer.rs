use crate::error::ProjectionError;
use crate::model::{Booking, NormalizedBooking};
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

/// Formats de secours après RFC 3339 (forme texte PostgreSQL).
const FALLBACK_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Fuseau d'affichage (identifiant IANA), fixé pour tout un calcul.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    tz: Tz,
}

impl DisplayZone {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Ex. `"Europe/London"`.
    pub fn parse(name: &str) -> Result<Self, ProjectionError> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ProjectionError::UnknownTimezone(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Même instant, champs d'horloge du fuseau (règles DST appliquées).
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    pub fn normalize_booking(&self, booking: &Booking) -> Result<NormalizedBooking, ProjectionError> {
        let local = normalize(&booking.start, self)?;
        Ok(NormalizedBooking {
            booking: booking.clone(),
            local_start: local.fixed_offset(),
        })
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::London)
    }
}

/// Convertit un horodatage absolu en instant d'horloge murale du fuseau.
pub fn normalize(raw: &str, zone: &DisplayZone) -> Result<DateTime<Tz>, ProjectionError> {
    let instant = parse_instant(raw)?;
    Ok(zone.localize(instant))
}

/// Lit un instant absolu : RFC 3339 d'abord, puis la forme PostgreSQL
/// (`2024-03-30 23:30:00+00`). Un décalage explicite est obligatoire.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, ProjectionError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(malformed(raw, "empty timestamp"));
    }
    let first = match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(err) => err,
    };
    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| DateTime::<FixedOffset>::parse_from_str(s, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| malformed(raw, &first.to_string()))
}

fn malformed(raw: &str, reason: &str) -> ProjectionError {
    ProjectionError::MalformedTimestamp {
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}
