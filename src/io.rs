use crate::model::{Booking, BookingId, WeekGrid, DEFAULT_STATUS};
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Ligne telle que fournie par la couche de données : tout est facultatif.
/// Un `start` absent devient une chaîne vide, que la normalisation écarte
/// ensuite sans bloquer le reste du fichier.
#[derive(Debug, Deserialize)]
struct BookingRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    client_name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl BookingRecord {
    fn into_booking(self) -> Booking {
        let id = non_blank(self.id).map_or_else(BookingId::random, BookingId::new);
        let start = self.start.as_deref().map_or("", str::trim);
        let mut booking = Booking::new(id, start, self.client_name.unwrap_or_default())
            .with_status(non_blank(self.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()));
        booking.address = non_blank(self.address);
        booking.assignee = non_blank(self.assignee);
        booking
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Import JSON : tableau d'objets `{id?, start?, client_name?, address?, assignee?, status?}`
pub fn import_bookings_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Booking>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<BookingRecord> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing bookings {}", path.display()))?;
    Ok(records.into_iter().map(BookingRecord::into_booking).collect())
}

/// Import CSV: header `id,start,client_name,address,assignee,status`
pub fn import_bookings_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Booking>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).map(str::to_string);
        let record = BookingRecord {
            id: field(0),
            start: field(1),
            client_name: field(2),
            address: field(3),
            assignee: field(4),
            status: field(5),
        };
        out.push(record.into_booking());
    }
    Ok(out)
}

/// Lit un fichier de réservations : `.csv` en CSV, sinon JSON.
pub fn read_bookings<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Booking>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        import_bookings_csv(path)
    } else {
        import_bookings_json(path)
    }
}

/// Ne garde que les réservations au statut donné (casse ignorée).
pub fn retain_status(bookings: &mut Vec<Booking>, status: &str) {
    let status = status.trim();
    bookings.retain(|b| b.status.trim().eq_ignore_ascii_case(status));
}

/// Export JSON de la grille, écrit de manière atomique.
pub fn export_grid_json<P: AsRef<Path>>(path: P, grid: &WeekGrid) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(grid)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

/// Export CSV de la grille, une ligne par réservation:
/// header `date,slot_key,top_offset_px,display_label,is_group,booking_id,client_name,address,assignee,status,start`
pub fn export_grid_csv<P: AsRef<Path>>(path: P, grid: &WeekGrid) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "date",
        "slot_key",
        "top_offset_px",
        "display_label",
        "is_group",
        "booking_id",
        "client_name",
        "address",
        "assignee",
        "status",
        "start",
    ])?;
    let mut offset = itoa::Buffer::new();
    for column in &grid.columns {
        let date = column.date.to_string();
        for slot in &column.slots {
            let key = slot.key.to_rfc3339();
            let top = offset.format(slot.top_offset_px).to_string();
            let is_group = if slot.is_group { "true" } else { "false" };
            for member in &slot.members {
                let b = &member.booking;
                w.write_record([
                    date.as_str(),
                    key.as_str(),
                    top.as_str(),
                    slot.display_label.as_str(),
                    is_group,
                    b.id.as_str(),
                    b.client_name.as_str(),
                    b.address(),
                    b.assignee(),
                    b.status.as_str(),
                    b.start.as_str(),
                ])?;
            }
        }
    }
    w.flush()?;
    Ok(())
}
