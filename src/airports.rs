use crate::models::Airport;

const fn airport(code: &'static str, name: &'static str) -> Airport {
    Airport { code, name }
}

pub const AIRPORTS: &[Airport] = &[
    airport("PAR", "Paris (all airports)"),
    airport("CDG", "Paris Charles de Gaulle"),
    airport("ORY", "Paris Orly"),
    airport("LIS", "Lisbon Humberto Delgado"),
    airport("OPO", "Porto Francisco Sa Carneiro"),
    airport("MAD", "Madrid Barajas"),
    airport("BCN", "Barcelona El Prat"),
    airport("LON", "London (all airports)"),
    airport("LHR", "London Heathrow"),
    airport("LGW", "London Gatwick"),
    airport("AMS", "Amsterdam Schiphol"),
    airport("FRA", "Frankfurt am Main"),
    airport("MUC", "Munich"),
    airport("FCO", "Rome Fiumicino"),
    airport("MXP", "Milan Malpensa"),
    airport("NCE", "Nice Cote d'Azur"),
    airport("MRS", "Marseille Provence"),
    airport("LYS", "Lyon Saint-Exupery"),
    airport("TLS", "Toulouse Blagnac"),
    airport("BOD", "Bordeaux Merignac"),
    airport("GVA", "Geneva"),
    airport("ZRH", "Zurich"),
    airport("BRU", "Brussels"),
    airport("DUB", "Dublin"),
    airport("CPH", "Copenhagen Kastrup"),
    airport("ATH", "Athens Eleftherios Venizelos"),
    airport("IST", "Istanbul"),
    airport("NYC", "New York (all airports)"),
    airport("JFK", "New York John F. Kennedy"),
    airport("MTL", "Montreal (all airports)"),
    airport("DXB", "Dubai"),
];

/// Entries whose code or name contains `query`, ignoring case. An empty
/// query returns every airport.
pub fn search(query: &str) -> Vec<Airport> {
    let needle = query.trim().to_lowercase();
    AIRPORTS
        .iter()
        .filter(|a| {
            needle.is_empty()
                || a.code.to_lowercase().contains(&needle)
                || a.name.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}
