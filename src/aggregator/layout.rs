use super::LayoutConfig;
use chrono::{DateTime, FixedOffset, Timelike};

impl LayoutConfig {
    /// Décalage vertical en pixels depuis le haut de la grille.
    ///
    /// Pas de rognage : avant `day_start_hour` le résultat est négatif, après
    /// `day_end_hour` il dépasse la grille.
    pub fn top_offset_px(&self, local: &DateTime<FixedOffset>) -> i32 {
        let minutes =
            (i64::from(local.hour()) - i64::from(self.day_start_hour)) * 60 + i64::from(local.minute());
        let px = minutes.saturating_mul(i64::from(self.px_per_hour)).div_euclid(60);
        px.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Heures affichées, une ligne chacune (7..=18 par défaut).
    pub fn hours(&self) -> Vec<u32> {
        (self.day_start_hour..self.day_end_hour).collect()
    }

    pub fn grid_height_px(&self) -> u32 {
        self.day_end_hour
            .saturating_sub(self.day_start_hour)
            .saturating_mul(self.px_per_hour)
    }

    /// Libellé 12 h d'une ligne : `"7 AM"`, `"12 PM"`.
    pub fn row_label(hour: u32) -> String {
        let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
        let h12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{h12} {suffix}")
    }
}
