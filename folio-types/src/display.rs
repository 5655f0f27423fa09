use std::fmt::Display;

/// Label used in place of an end date while an entry is ongoing.
pub const PRESENT: &str = "Present";

/// Formats a start/end period for display.
///
/// A current entry always reads "<start> – Present", whatever end value is
/// stored alongside it.
pub fn period_label<S: Display, E: Display>(start: S, end: Option<E>, is_current: bool) -> String {
    if is_current {
        return format!("{start} – {PRESENT}");
    }
    match end {
        Some(end) => format!("{start} – {end}"),
        None => format!("{start} – N/A"),
    }
}
