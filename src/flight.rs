use chrono::{DateTime, Datelike, NaiveDate, Utc};
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::locale::Locale;

/// External booking engine the search form redirects to.
pub const BOOKING_BASE_URL: &str = "https://skysync.travel/flight/search";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Roundtrip,
    Oneway,
    Multicity,
}

/// Booking classes as the engine's single-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CabinClass {
    #[default]
    #[serde(rename = "Y")]
    Economy,
    #[serde(rename = "W")]
    PremiumEconomy,
    #[serde(rename = "C")]
    Business,
    #[serde(rename = "F")]
    First,
}

impl CabinClass {
    pub fn code(self) -> &'static str {
        match self {
            CabinClass::Economy => "Y",
            CabinClass::PremiumEconomy => "W",
            CabinClass::Business => "C",
            CabinClass::First => "F",
        }
    }
}

/// Passenger counts. Invariants: at least one adult, infants never exceed
/// adults (each infant shares an adult's seat). The mutating operations keep
/// the counts valid by refusing out-of-range steps, mirroring the disabled
/// +/- buttons in the selector UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPassengers")]
pub struct Passengers {
    adults: u32,
    children: u32,
    infants: u32,
}

#[derive(Deserialize)]
struct RawPassengers {
    adults: u32,
    #[serde(default)]
    children: u32,
    #[serde(default)]
    infants: u32,
}

impl TryFrom<RawPassengers> for Passengers {
    type Error = String;

    fn try_from(raw: RawPassengers) -> Result<Self, Self::Error> {
        Passengers::new(raw.adults, raw.children, raw.infants)
            .map_err(|e| e.to_string())
    }
}

impl Default for Passengers {
    fn default() -> Self {
        Self { adults: 1, children: 0, infants: 0 }
    }
}

impl Passengers {
    pub fn new(adults: u32, children: u32, infants: u32) -> Result<Self, FlightUrlError> {
        if adults < 1 {
            return Err(FlightUrlError::NoAdults);
        }
        if infants > adults {
            return Err(FlightUrlError::TooManyInfants { infants, adults });
        }
        Ok(Self { adults, children, infants })
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn infants(&self) -> u32 {
        self.infants
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }

    pub fn add_adult(&mut self) {
        self.adults += 1;
    }

    /// No-op at one adult, or when dropping an adult would strand an infant.
    pub fn remove_adult(&mut self) {
        if self.adults > 1 && self.adults - 1 >= self.infants {
            self.adults -= 1;
        }
    }

    pub fn add_child(&mut self) {
        self.children += 1;
    }

    pub fn remove_child(&mut self) {
        self.children = self.children.saturating_sub(1);
    }

    /// No-op once infants have caught up with adults.
    pub fn add_infant(&mut self) {
        if self.infants < self.adults {
            self.infants += 1;
        }
    }

    pub fn remove_infant(&mut self) {
        self.infants = self.infants.saturating_sub(1);
    }
}

/// Airport selection as it arrives from the form: just the IATA code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AirportRef {
    pub iata: String,
}

impl From<&crate::airports::Airport> for AirportRef {
    fn from(airport: &crate::airports::Airport) -> Self {
        Self { iata: airport.iata.to_string() }
    }
}

/// A date as the form may hold it: an actual calendar date, ISO text, or the
/// raw year/month/day parts a date-picker widget produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlightDate {
    Calendar(NaiveDate),
    Parts { year: i32, month: u32, day: u32 },
    Text(String),
}

impl FlightDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        FlightDate::Parts { year, month, day }
    }

    /// Serialize to the booking engine's `DD-MMM-YYYY` format, e.g.
    /// `19-Nov-2025`. An unrecognizable or out-of-range date is an error:
    /// a URL must never go out with an empty `dtt{n}` parameter.
    pub fn format_dtt(&self) -> Result<String, FlightUrlError> {
        let date = self.as_naive_date()?;
        Ok(format!(
            "{:02}-{}-{}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ))
    }

    fn as_naive_date(&self) -> Result<NaiveDate, FlightUrlError> {
        match self {
            FlightDate::Calendar(date) => Ok(*date),
            FlightDate::Parts { year, month, day } => {
                NaiveDate::from_ymd_opt(*year, *month, *day)
                    .ok_or_else(|| FlightUrlError::InvalidDate(format!("{year}-{month}-{day}")))
            }
            FlightDate::Text(text) => {
                let text = text.trim();
                if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                    return Ok(date);
                }
                if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                    return Ok(dt.date_naive());
                }
                Err(FlightUrlError::InvalidDate(text.to_string()))
            }
        }
    }
}

/// One leg of the search form. Fields are optional because the form fills
/// them incrementally; the URL builder demands what the trip type requires.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentForm {
    pub from: Option<AirportRef>,
    pub to: Option<AirportRef>,
    pub departure_date: Option<FlightDate>,
    pub return_date: Option<FlightDate>,
}

/// Complete flight search form state.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearch {
    pub trip_type: TripType,
    #[serde(default)]
    pub cabin_class: CabinClass,
    pub passengers: Passengers,
    /// Used by `roundtrip` and `oneway`.
    #[serde(default)]
    pub segment: SegmentForm,
    /// Used by `multicity`.
    #[serde(default)]
    pub multi_city: Vec<SegmentForm>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlightUrlError {
    #[error("at least one adult passenger is required")]
    NoAdults,

    #[error("{infants} infants cannot travel with {adults} adults")]
    TooManyInfants { infants: u32, adults: u32 },

    #[error("multi-city search needs at least 2 complete segments, got {found}")]
    TooFewSegments { found: usize },

    #[error("segment {segment} is missing its {field}")]
    IncompleteSegment { segment: usize, field: &'static str },

    #[error("unrecognized date: {0}")]
    InvalidDate(String),
}

impl FlightUrlError {
    /// The inline message the search form shows. The production form uses one
    /// generic prompt for every validation miss.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ar => "الرجاء ملء جميع الحقول المطلوبة",
            Locale::En => "Please fill in all required fields",
        }
    }
}

struct Leg<'a> {
    dep: &'a str,
    ret: &'a str,
    dtt: String,
}

impl FlightSearch {
    /// Build the booking engine redirect URL, stamping the current instant as
    /// the cache buster.
    pub fn build_search_url(&self) -> Result<Url, FlightUrlError> {
        self.build_search_url_at(Utc::now())
    }

    /// Pure variant of [`build_search_url`]: the cache-busting `currtime`
    /// comes from `issued_at`, nothing else is read from the environment.
    pub fn build_search_url_at(&self, issued_at: DateTime<Utc>) -> Result<Url, FlightUrlError> {
        if self.passengers.adults() < 1 {
            return Err(FlightUrlError::NoAdults);
        }

        let (legs, trip_code) = match self.trip_type {
            TripType::Multicity => {
                if self.multi_city.len() < 2 {
                    return Err(FlightUrlError::TooFewSegments { found: self.multi_city.len() });
                }
                let mut legs = Vec::with_capacity(self.multi_city.len());
                for (idx, segment) in self.multi_city.iter().enumerate() {
                    legs.push(outbound_leg(segment, idx + 1)?);
                }
                (legs, "2")
            }
            TripType::Roundtrip => {
                let out = outbound_leg(&self.segment, 1)?;
                let back = return_leg(&self.segment, 2)?;
                (vec![out, back], "2")
            }
            TripType::Oneway => (vec![outbound_leg(&self.segment, 1)?], "1"),
        };

        let mut url = Url::parse(BOOKING_BASE_URL).unwrap();
        {
            let mut query = url.query_pairs_mut();
            for (idx, leg) in legs.iter().enumerate() {
                let n = idx + 1;
                query.append_pair(&format!("dep{n}"), leg.dep);
                query.append_pair(&format!("ret{n}"), leg.ret);
                query.append_pair(&format!("dtt{n}"), &leg.dtt);
                query.append_pair(&format!("cl{n}"), self.cabin_class.code());
            }
            query.append_pair("triptype", trip_code);

            query.append_pair("adult", &self.passengers.adults().to_string());
            query.append_pair("child", &self.passengers.children().to_string());
            query.append_pair("infant", &self.passengers.infants().to_string());

            // fixed engine defaults
            query.append_pair("direct", "false");
            query.append_pair("baggage", "false");
            query.append_pair("pft", "");
            query.append_pair("key", "IRT");
            query.append_pair("airlines", "");
            query.append_pair("ref", "false");
            query.append_pair("lc", "EN");
            query.append_pair("curr", "EGP");
            query.append_pair("currtime", &issued_at.timestamp_millis().to_string());
        }

        Ok(url)
    }
}

fn outbound_leg(segment: &SegmentForm, number: usize) -> Result<Leg<'_>, FlightUrlError> {
    let from = segment
        .from
        .as_ref()
        .ok_or(FlightUrlError::IncompleteSegment { segment: number, field: "origin" })?;
    let to = segment
        .to
        .as_ref()
        .ok_or(FlightUrlError::IncompleteSegment { segment: number, field: "destination" })?;
    let departure = segment
        .departure_date
        .as_ref()
        .ok_or(FlightUrlError::IncompleteSegment { segment: number, field: "departure date" })?;

    Ok(Leg { dep: &from.iata, ret: &to.iata, dtt: departure.format_dtt()? })
}

/// The return leg of a round trip: same segment with from/to swapped.
fn return_leg(segment: &SegmentForm, number: usize) -> Result<Leg<'_>, FlightUrlError> {
    let from = segment
        .from
        .as_ref()
        .ok_or(FlightUrlError::IncompleteSegment { segment: number, field: "origin" })?;
    let to = segment
        .to
        .as_ref()
        .ok_or(FlightUrlError::IncompleteSegment { segment: number, field: "destination" })?;
    let return_date = segment
        .return_date
        .as_ref()
        .ok_or(FlightUrlError::IncompleteSegment { segment: number, field: "return date" })?;

    Ok(Leg { dep: &to.iata, ret: &from.iata, dtt: return_date.format_dtt()? })
}
