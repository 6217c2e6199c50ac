use thiserror::Error;

/// Erreurs de la projection. Aucune n'est fatale pour un calcul :
/// un horodatage invalide exclut seulement la réservation concernée.
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("malformed timestamp {raw:?}: {reason}")]
    MalformedTimestamp { raw: String, reason: String },
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
    #[error("invalid weekday: {0} (expected 0=Sunday..6=Saturday)")]
    InvalidWeekday(u8),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProjectionError {
    /// Code stable exposé aux consommateurs (rendu, rapports).
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedTimestamp { .. } => "MALFORMED_TIMESTAMP",
            Self::UnknownTimezone(_) => "UNKNOWN_TIMEZONE",
            Self::InvalidLayout(_) => "INVALID_LAYOUT",
            Self::InvalidWeekday(_) => "INVALID_WEEKDAY",
            Self::Other(_) => "OTHER",
        }
    }
}
