//! Display formatting for the listing (pt-BR conventions).

use jiff::{Timestamp, civil};

const EMPTY: &str = "-";

/// `dd/mm/yyyy`. Empty input shows `-`; unparseable input is shown as-is.
pub fn date(raw: &str) -> String {
    match parse(raw) {
        Parsed::Empty => EMPTY.to_string(),
        Parsed::DateTime(dt) => dt.strftime("%d/%m/%Y").to_string(),
        Parsed::Raw => raw.to_string(),
    }
}

/// `dd/mm/yyyy HH:MM`.
pub fn date_time(raw: &str) -> String {
    match parse(raw) {
        Parsed::Empty => EMPTY.to_string(),
        Parsed::DateTime(dt) => dt.strftime("%d/%m/%Y %H:%M").to_string(),
        Parsed::Raw => raw.to_string(),
    }
}

/// "1 cadastro encontrado", "2 cadastros encontrados".
pub fn total_label(total: u64) -> String {
    if total == 1 {
        format!("{total} cadastro encontrado")
    } else {
        format!("{total} cadastros encontrados")
    }
}

enum Parsed {
    Empty,
    DateTime(civil::DateTime),
    Raw,
}

fn parse(raw: &str) -> Parsed {
    let raw = raw.trim();
    if raw.is_empty() {
        return Parsed::Empty;
    }

    // Only values carrying `Z` or an offset parse as a timestamp. Shown in UTC.
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Parsed::DateTime(ts.to_zoned(jiff::tz::TimeZone::UTC).datetime());
    }
    // Date-only input parses as midnight
    if let Ok(dt) = raw.parse::<civil::DateTime>() {
        return Parsed::DateTime(dt);
    }

    Parsed::Raw
}
