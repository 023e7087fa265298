//! List filtering, ordering and dashboard totals

use chrono::{Datelike, Duration, NaiveDate};
use frete_types::{Facility, StoredFreight};
use serde::Serialize;

/// Date window for the record list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    All,
    /// Sunday through Saturday of the current week
    Week,
    /// First through last day of the previous calendar month
    LastMonth,
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl DateRange {
    /// Inclusive `YYYY-MM-DD` bounds relative to `today`
    pub fn bounds(&self, today: NaiveDate) -> Option<(Option<String>, Option<String>)> {
        let fmt = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
        match self {
            DateRange::All => None,
            DateRange::Week => {
                let dow = i64::from(today.weekday().num_days_from_sunday());
                let start = today - Duration::days(dow);
                let end = today + Duration::days(6 - dow);
                Some((Some(fmt(start)), Some(fmt(end))))
            }
            DateRange::LastMonth => {
                let last = today.with_day(1)?.pred_opt()?;
                let first = last.with_day(1)?;
                Some((Some(fmt(first)), Some(fmt(last))))
            }
            DateRange::Custom { start, end } => Some((start.map(fmt), end.map(fmt))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Case-insensitive match on driver name or plate
    pub search: Option<String>,
    pub facility: Option<Facility>,
    pub date_range: DateRange,
}

impl RecordQuery {
    fn matches(
        &self,
        stored: &StoredFreight,
        bounds: &Option<(Option<String>, Option<String>)>,
    ) -> bool {
        let r = &stored.record;

        if let Some(term) = self.search.as_deref().map(str::to_lowercase) {
            if !term.is_empty()
                && !r.driver_name.to_lowercase().contains(&term)
                && !r.license_plate.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if let Some(ref facility) = self.facility {
            if &r.facility != facility {
                return false;
            }
        }

        // Lexicographic comparison is exact for YYYY-MM-DD; undated records stay
        if let Some((start, end)) = bounds {
            if !r.date.is_empty() {
                if matches!(start, Some(s) if r.date.as_str() < s.as_str()) {
                    return false;
                }
                if matches!(end, Some(e) if r.date.as_str() > e.as_str()) {
                    return false;
                }
            }
        }

        true
    }
}

/// Apply the query, newest date first, then newest creation
pub fn filter_and_sort(
    records: Vec<StoredFreight>,
    query: &RecordQuery,
    today: NaiveDate,
) -> Vec<StoredFreight> {
    let bounds = query.date_range.bounds(today);
    let mut filtered: Vec<_> = records
        .into_iter()
        .filter(|r| query.matches(r, &bounds))
        .collect();

    filtered.sort_by(|a, b| {
        b.record
            .date
            .cmp(&a.record.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    filtered
}

/// Totals shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_freights: usize,
    pub total_value: f64,
    pub total_deliveries: i64,
    pub value_santa_luzia: f64,
    pub value_contagem: f64,
    pub value_other: f64,
}

pub fn compute_stats(records: &[StoredFreight]) -> DashboardStats {
    records.iter().fold(DashboardStats::default(), |mut acc, stored| {
        let r = &stored.record;
        acc.total_freights += 1;
        acc.total_value += r.price;
        acc.total_deliveries = acc.total_deliveries.saturating_add(r.delivery_count);
        match r.facility {
            Facility::SantaLuzia => acc.value_santa_luzia += r.price,
            Facility::Contagem => acc.value_contagem += r.price,
            Facility::Other(_) => acc.value_other += r.price,
        }
        acc
    })
}
