use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Date format used on the wire for `search_date_min` / `search_date_max`.
pub const SEARCH_DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    #[serde(rename = "OW")]
    OneWay,
    #[serde(rename = "RT")]
    RoundTrip,
}

impl TripType {
    pub fn code(self) -> &'static str {
        match self {
            TripType::OneWay => "OW",
            TripType::RoundTrip => "RT",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "OW" => Some(TripType::OneWay),
            "RT" => Some(TripType::RoundTrip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub trip_type: TripType,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
}

impl SearchParams {
    /// Route identifier sent as `OnD`, e.g. `PAR-LIS`.
    pub fn ond(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }
}

pub fn format_search_date(date: NaiveDate) -> String {
    date.format(SEARCH_DATE_FORMAT).to_string()
}

/// Accepts both `2020/11/17` and `2020-11-17`.
pub fn parse_search_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, SEARCH_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareObservation {
    pub airline: String,
    pub advance_purchase: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub advance_purchase: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub fn from_rgb(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    pub fn rgb(self) -> u32 {
        self.0
    }

    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits = raw
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color: {raw}")))?;
        u32::from_str_radix(digits, 16)
            .map(Color::from_rgb)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareSeries {
    pub airline: String,
    pub line_color: Color,
    pub prices: Vec<PricePoint>,
}

/// What the page currently shows. Replaced as a whole after each successful search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartView {
    pub params: Option<SearchParams>,
    pub series: Vec<FareSeries>,
    pub cheapest_median_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_destination")]
    pub destination: String,
    #[serde(default = "default_trip_type")]
    pub trip_type: String,
    #[serde(default = "default_date_min")]
    pub date_min: String,
    #[serde(default = "default_date_max")]
    pub date_max: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            destination: default_destination(),
            trip_type: default_trip_type(),
            date_min: default_date_min(),
            date_max: default_date_max(),
        }
    }
}

fn default_origin() -> String {
    "PAR".to_string()
}

fn default_destination() -> String {
    "LIS".to_string()
}

fn default_trip_type() -> String {
    "RT".to_string()
}

fn default_date_min() -> String {
    "2020/11/17".to_string()
}

fn default_date_max() -> String {
    "2025/11/17".to_string()
}

/// Query string of the fare endpoint, named the way the page sends it.
#[derive(Debug, Deserialize)]
pub struct FareQuery {
    #[serde(rename = "OnD")]
    pub ond: String,
    pub trip_type: String,
    pub search_date_min: String,
    pub search_date_max: String,
}

/// One recorded recommendation in the fare dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareRecord {
    pub search_id: String,
    pub ond: String,
    pub trip_type: TripType,
    pub search_date: NaiveDate,
    pub advance_purchase: i64,
    pub airline: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FareDataset {
    pub records: Vec<FareRecord>,
}

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
}
