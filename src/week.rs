use crate::error::ProjectionError;
use crate::model::{DayColumn, Slot, WeekGrid};
use chrono::{Datelike, Days, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Premier jour de la semaine affichée (0=dimanche .. 6=samedi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WeekStartRepr", into = "u8"))]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekStart {
    pub fn from_index(index: u8) -> Result<Self, ProjectionError> {
        Ok(match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            other => return Err(ProjectionError::InvalidWeekday(other)),
        })
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
        }
    }
}

impl From<WeekStart> for u8 {
    fn from(value: WeekStart) -> Self {
        value.index()
    }
}

impl FromStr for WeekStart {
    type Err = ProjectionError;

    /// Accepte l'index (`"1"`) ou le nom anglais (`"monday"`, `"Mon"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::from_index(index);
        }
        let weekday = s
            .parse::<Weekday>()
            .map_err(|_| ProjectionError::Other(anyhow::anyhow!("unknown weekday: {s}")))?;
        Self::from_index(weekday.num_days_from_sunday() as u8)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum WeekStartRepr {
    Index(u8),
    Name(String),
}

#[cfg(feature = "serde")]
impl TryFrom<WeekStartRepr> for WeekStart {
    type Error = ProjectionError;

    fn try_from(repr: WeekStartRepr) -> Result<Self, Self::Error> {
        match repr {
            WeekStartRepr::Index(i) => Self::from_index(i),
            WeekStartRepr::Name(name) => name.parse(),
        }
    }
}

/// Fenêtre de 7 jours consécutifs à partir de `week_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekWindow {
    pub reference: NaiveDate,
    pub week_starts_on: WeekStart,
    pub week_start: NaiveDate,
    pub days: [NaiveDate; 7],
}

impl WeekWindow {
    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[6]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }

    /// En-tête de page : `"Jun 10 - Jun 16, 2024"`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.first_day().format("%b %-d"),
            self.last_day().format("%b %-d, %Y")
        )
    }
}

/// Arrondit `reference` au dernier `week_starts_on` (lui-même inclus) et
/// énumère les 7 dates.
pub fn window_for(reference: NaiveDate, week_starts_on: WeekStart) -> WeekWindow {
    let back = (7 + reference.weekday().num_days_from_sunday()
        - week_starts_on.weekday().num_days_from_sunday())
        % 7;
    let week_start = add_days(reference, -i64::from(back));
    let days = std::array::from_fn(|i| add_days(week_start, i as i64));
    WeekWindow {
        reference,
        week_starts_on,
        week_start,
        days,
    }
}

/// Décale la date de référence de `delta_weeks * 7` jours et recalcule.
pub fn shift(window: &WeekWindow, delta_weeks: i64) -> WeekWindow {
    let reference = add_days(window.reference, delta_weeks.saturating_mul(7));
    window_for(reference, window.week_starts_on)
}

/// Range chaque slot dans la colonne de sa date locale ; les slots hors
/// fenêtre sont ignorés. L'ordre relatif des slots est conservé.
pub fn bucket(window: &WeekWindow, slots: Vec<Slot>) -> WeekGrid {
    let mut columns: Vec<DayColumn> = window
        .days
        .iter()
        .map(|&date| DayColumn {
            date,
            slots: Vec::new(),
        })
        .collect();

    for slot in slots {
        let date = slot.local_date();
        if let Some(column) = columns.iter_mut().find(|c| c.date == date) {
            column.slots.push(slot);
        }
    }

    WeekGrid {
        window: window.clone(),
        columns,
    }
}

// Sature aux bornes de NaiveDate plutôt que d'échouer.
fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let magnitude = Days::new(delta.unsigned_abs());
    let moved = if delta >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    moved.unwrap_or(if delta >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}
