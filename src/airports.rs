use serde::Serialize;

/// Static airport reference data used by the flight search autocomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub iata: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

// Major airports with IATA codes, focused on the Middle East, Europe, Asia
// and popular destinations.
pub static AIRPORTS: &[Airport] = &[
    // Egypt
    Airport { iata: "CAI", name: "Cairo International Airport", city: "Cairo", country: "Egypt" },
    Airport { iata: "HRG", name: "Hurghada International Airport", city: "Hurghada", country: "Egypt" },
    Airport { iata: "SSH", name: "Sharm El Sheikh International Airport", city: "Sharm El Sheikh", country: "Egypt" },
    Airport { iata: "ALY", name: "El Nouzha Airport", city: "Alexandria", country: "Egypt" },
    Airport { iata: "LXR", name: "Luxor International Airport", city: "Luxor", country: "Egypt" },
    Airport { iata: "ASW", name: "Aswan International Airport", city: "Aswan", country: "Egypt" },
    // UAE
    Airport { iata: "DXB", name: "Dubai International Airport", city: "Dubai", country: "United Arab Emirates" },
    Airport { iata: "AUH", name: "Abu Dhabi International Airport", city: "Abu Dhabi", country: "United Arab Emirates" },
    Airport { iata: "SHJ", name: "Sharjah International Airport", city: "Sharjah", country: "United Arab Emirates" },
    // Gulf
    Airport { iata: "DOH", name: "Hamad International Airport", city: "Doha", country: "Qatar" },
    Airport { iata: "KWI", name: "Kuwait International Airport", city: "Kuwait City", country: "Kuwait" },
    Airport { iata: "BAH", name: "Bahrain International Airport", city: "Manama", country: "Bahrain" },
    Airport { iata: "MCT", name: "Muscat International Airport", city: "Muscat", country: "Oman" },
    // Saudi Arabia
    Airport { iata: "RUH", name: "King Khalid International Airport", city: "Riyadh", country: "Saudi Arabia" },
    Airport { iata: "JED", name: "King Abdulaziz International Airport", city: "Jeddah", country: "Saudi Arabia" },
    Airport { iata: "MED", name: "Prince Mohammad bin Abdulaziz Airport", city: "Medina", country: "Saudi Arabia" },
    Airport { iata: "DMM", name: "King Fahd International Airport", city: "Dammam", country: "Saudi Arabia" },
    // Levant
    Airport { iata: "AMM", name: "Queen Alia International Airport", city: "Amman", country: "Jordan" },
    Airport { iata: "BEY", name: "Beirut Rafic Hariri International Airport", city: "Beirut", country: "Lebanon" },
    // Turkey
    Airport { iata: "IST", name: "Istanbul Airport", city: "Istanbul", country: "Turkey" },
    Airport { iata: "SAW", name: "Sabiha Gokcen International Airport", city: "Istanbul", country: "Turkey" },
    Airport { iata: "AYT", name: "Antalya Airport", city: "Antalya", country: "Turkey" },
    // Europe
    Airport { iata: "LHR", name: "Heathrow Airport", city: "London", country: "United Kingdom" },
    Airport { iata: "LGW", name: "Gatwick Airport", city: "London", country: "United Kingdom" },
    Airport { iata: "CDG", name: "Charles de Gaulle Airport", city: "Paris", country: "France" },
    Airport { iata: "FCO", name: "Leonardo da Vinci Fiumicino Airport", city: "Rome", country: "Italy" },
    Airport { iata: "MAD", name: "Adolfo Suarez Madrid-Barajas Airport", city: "Madrid", country: "Spain" },
    Airport { iata: "BCN", name: "Barcelona El Prat Airport", city: "Barcelona", country: "Spain" },
    Airport { iata: "FRA", name: "Frankfurt Airport", city: "Frankfurt", country: "Germany" },
    Airport { iata: "MUC", name: "Munich Airport", city: "Munich", country: "Germany" },
    Airport { iata: "AMS", name: "Amsterdam Airport Schiphol", city: "Amsterdam", country: "Netherlands" },
    Airport { iata: "ZRH", name: "Zurich Airport", city: "Zurich", country: "Switzerland" },
    Airport { iata: "VIE", name: "Vienna International Airport", city: "Vienna", country: "Austria" },
    Airport { iata: "ATH", name: "Athens International Airport", city: "Athens", country: "Greece" },
    // Asia
    Airport { iata: "BOM", name: "Chhatrapati Shivaji Maharaj International Airport", city: "Mumbai", country: "India" },
    Airport { iata: "DEL", name: "Indira Gandhi International Airport", city: "New Delhi", country: "India" },
    Airport { iata: "BKK", name: "Suvarnabhumi Airport", city: "Bangkok", country: "Thailand" },
    Airport { iata: "SIN", name: "Singapore Changi Airport", city: "Singapore", country: "Singapore" },
    Airport { iata: "KUL", name: "Kuala Lumpur International Airport", city: "Kuala Lumpur", country: "Malaysia" },
    Airport { iata: "HKG", name: "Hong Kong International Airport", city: "Hong Kong", country: "Hong Kong" },
    Airport { iata: "NRT", name: "Narita International Airport", city: "Tokyo", country: "Japan" },
    Airport { iata: "ICN", name: "Incheon International Airport", city: "Seoul", country: "South Korea" },
    // Americas
    Airport { iata: "JFK", name: "John F. Kennedy International Airport", city: "New York", country: "United States" },
    Airport { iata: "LAX", name: "Los Angeles International Airport", city: "Los Angeles", country: "United States" },
    Airport { iata: "YYZ", name: "Toronto Pearson International Airport", city: "Toronto", country: "Canada" },
    // Africa
    Airport { iata: "CMN", name: "Mohammed V International Airport", city: "Casablanca", country: "Morocco" },
    Airport { iata: "TUN", name: "Tunis Carthage International Airport", city: "Tunis", country: "Tunisia" },
    Airport { iata: "NBO", name: "Jomo Kenyatta International Airport", city: "Nairobi", country: "Kenya" },
    Airport { iata: "JNB", name: "O. R. Tambo International Airport", city: "Johannesburg", country: "South Africa" },
];

/// Minimum query length before the autocomplete searches at all.
const MIN_QUERY_LEN: usize = 2;

pub fn find_by_iata(iata: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.iata.eq_ignore_ascii_case(iata))
}

/// Search airports by name, city, country, or IATA code.
///
/// Results are ranked: exact IATA matches first, then city-prefix matches,
/// otherwise registry order is kept.
pub fn search(query: &str, max_results: usize) -> Vec<&'static Airport> {
    let query = query.trim().to_lowercase();
    if query.len() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut results: Vec<&'static Airport> = AIRPORTS
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&query)
                || a.city.to_lowercase().contains(&query)
                || a.country.to_lowercase().contains(&query)
                || a.iata.to_lowercase().contains(&query)
        })
        .collect();

    results.sort_by(|a, b| rank(a, &query).cmp(&rank(b, &query)));
    results.truncate(max_results);
    results
}

fn rank(airport: &Airport, query: &str) -> u8 {
    if airport.iata.to_lowercase() == query {
        0
    } else if airport.city.to_lowercase().starts_with(query) {
        1
    } else {
        2
    }
}
