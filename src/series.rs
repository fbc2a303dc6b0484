use crate::models::{Color, FareObservation, FareSeries, PricePoint};
use rand::Rng;
use std::collections::HashMap;

/// How series colors are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// A fresh color per airline on every build.
    #[default]
    Random,
    /// Same airline, same color.
    Stable,
}

impl ColorScheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" => Some(ColorScheme::Random),
            "stable" => Some(ColorScheme::Stable),
            _ => None,
        }
    }

    pub fn color_for(self, airline: &str) -> Color {
        match self {
            ColorScheme::Random => random_color(),
            ColorScheme::Stable => stable_color(airline),
        }
    }
}

pub fn random_color() -> Color {
    Color::from_rgb(rand::rng().random_range(0..=0x00FF_FFFF))
}

/// FNV-1a over the airline code, folded to 24 bits.
pub fn stable_color(airline: &str) -> Color {
    const OFFSET: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let hash = airline
        .bytes()
        .fold(OFFSET, |acc, byte| (acc ^ u32::from(byte)).wrapping_mul(PRIME));
    Color::from_rgb((hash >> 8) ^ (hash & 0xFF))
}

/// Splits a flat observation list into one series per airline.
///
/// Airlines come out in the order they are first seen; each series keeps
/// the relative order of its observations.
pub fn group_by_airline<F>(observations: Vec<FareObservation>, mut color_for: F) -> Vec<FareSeries>
where
    F: FnMut(&str) -> Color,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut series: Vec<FareSeries> = Vec::new();

    for observation in observations {
        let point = PricePoint {
            advance_purchase: observation.advance_purchase,
            price: observation.price,
        };
        match index.get(&observation.airline) {
            Some(&slot) => series[slot].prices.push(point),
            None => {
                index.insert(observation.airline.clone(), series.len());
                series.push(FareSeries {
                    line_color: color_for(&observation.airline),
                    airline: observation.airline,
                    prices: vec![point],
                });
            }
        }
    }

    series
}

/// Lowest price across every series. Each point is already a per-day median,
/// so this is the cheapest median on the chart.
pub fn cheapest_median_price(series: &[FareSeries]) -> Option<f64> {
    series
        .iter()
        .flat_map(|s| s.prices.iter())
        .map(|point| point.price)
        .filter(|price| price.is_finite())
        .min_by(|a, b| a.total_cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(airline: &str, advance_purchase: i64, price: f64) -> FareObservation {
        FareObservation {
            airline: airline.to_string(),
            advance_purchase,
            price,
        }
    }

    fn airlines(series: &[FareSeries]) -> Vec<&str> {
        series.iter().map(|s| s.airline.as_str()).collect()
    }

    #[test]
    fn airlines_follow_first_seen_order() {
        let data = vec![
            obs("B", 1, 10.0),
            obs("A", 2, 20.0),
            obs("B", 3, 30.0),
            obs("C", 4, 40.0),
            obs("A", 5, 50.0),
        ];

        let series = group_by_airline(data, stable_color);
        assert_eq!(airlines(&series), vec!["B", "A", "C"]);

        let b: Vec<i64> = series[0].prices.iter().map(|p| p.advance_purchase).collect();
        let a: Vec<i64> = series[1].prices.iter().map(|p| p.advance_purchase).collect();
        assert_eq!(b, vec![1, 3]);
        assert_eq!(a, vec![2, 5]);
        assert_eq!(series[2].prices, vec![PricePoint { advance_purchase: 4, price: 40.0 }]);
    }

    #[test]
    fn paris_lisbon_scenario() {
        let data = vec![obs("AF", 10, 120.0), obs("TP", 10, 95.0), obs("AF", 5, 150.0)];
        let series = group_by_airline(data, |_| random_color());

        assert_eq!(airlines(&series), vec!["AF", "TP"]);
        assert_eq!(
            series[0].prices,
            vec![
                PricePoint { advance_purchase: 10, price: 120.0 },
                PricePoint { advance_purchase: 5, price: 150.0 },
            ]
        );
        assert_eq!(series[1].prices, vec![PricePoint { advance_purchase: 10, price: 95.0 }]);
    }

    #[test]
    fn empty_input_gives_no_series() {
        assert!(group_by_airline(Vec::new(), stable_color).is_empty());
    }

    #[test]
    fn one_color_request_per_airline() {
        let mut calls = Vec::new();
        let data = vec![obs("AF", 1, 1.0), obs("AF", 2, 2.0), obs("TP", 1, 3.0)];
        group_by_airline(data, |airline| {
            calls.push(airline.to_string());
            Color::from_rgb(0)
        });
        assert_eq!(calls, vec!["AF", "TP"]);
    }

    #[test]
    fn colors_are_valid_hex() {
        for _ in 0..200 {
            let hex = random_color().to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn stable_scheme_repeats_colors() {
        assert_eq!(stable_color("AF"), stable_color("AF"));
        assert_ne!(stable_color("AF"), stable_color("TP"));
        assert_eq!(ColorScheme::from_name("Stable"), Some(ColorScheme::Stable));
        assert_eq!(ColorScheme::from_name("pastel"), None);
    }

    #[test]
    fn cheapest_median_is_lowest_point() {
        let series = group_by_airline(
            vec![obs("AF", 10, 120.0), obs("TP", 10, 95.0), obs("AF", 5, 150.0)],
            stable_color,
        );
        assert_eq!(cheapest_median_price(&series), Some(95.0));
        assert_eq!(cheapest_median_price(&[]), None);
    }
}
