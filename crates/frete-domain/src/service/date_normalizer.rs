//! `DD/MM/YYYY` to `YYYY-MM-DD`

/// Reorder a slash date; anything without `/` passes through untouched
///
/// No calendar validation is done: `32/13/2024` becomes `2024-13-32`.
pub fn normalize_date(raw: &str) -> String {
    if !raw.contains('/') {
        return raw.to_string();
    }

    let mut parts = raw.split('/');
    let day = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let year = parts.next().unwrap_or_default();

    format!("{}-{:0>2}-{:0>2}", year, month, day)
}
