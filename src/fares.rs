use crate::models::{parse_search_date, FareDataset, FareObservation, FareQuery, TripType};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Parsed form of a [`FareQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareFilter {
    pub ond: String,
    pub trip_type: TripType,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
}

impl FareFilter {
    pub fn parse(query: &FareQuery) -> Option<Self> {
        Some(Self {
            ond: query.ond.trim().to_string(),
            trip_type: TripType::from_code(&query.trip_type)?,
            date_min: parse_search_date(&query.search_date_min)?,
            date_max: parse_search_date(&query.search_date_max)?,
        })
    }
}

/// Answers a fare query. A query that cannot be parsed yields no observations.
pub fn query_fares(data: &FareDataset, query: &FareQuery) -> Vec<FareObservation> {
    match FareFilter::parse(query) {
        Some(filter) => aggregate_fares(data, &filter),
        None => {
            warn!(?query, "ignoring unparsable fare query");
            Vec::new()
        }
    }
}

/// Median of per-search cheapest prices, per airline and advance purchase.
///
/// Output is ordered by airline, then advance purchase.
pub fn aggregate_fares(data: &FareDataset, filter: &FareFilter) -> Vec<FareObservation> {
    let mut cheapest_per_search: HashMap<(&str, &str, i64), f64> = HashMap::new();
    for record in &data.records {
        if record.ond != filter.ond
            || record.trip_type != filter.trip_type
            || record.search_date < filter.date_min
            || record.search_date > filter.date_max
        {
            continue;
        }
        let key = (record.search_id.as_str(), record.airline.as_str(), record.advance_purchase);
        cheapest_per_search
            .entry(key)
            .and_modify(|price| *price = price.min(record.price))
            .or_insert(record.price);
    }

    let mut buckets: BTreeMap<(&str, i64), Vec<f64>> = BTreeMap::new();
    for ((_, airline, advance_purchase), price) in cheapest_per_search {
        buckets.entry((airline, advance_purchase)).or_default().push(price);
    }

    buckets
        .into_iter()
        .filter_map(|((airline, advance_purchase), mut prices)| {
            Some(FareObservation {
                airline: airline.to_string(),
                advance_purchase,
                price: median(&mut prices)?,
            })
        })
        .collect()
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
