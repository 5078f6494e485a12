//! Country registry (ISO 3166-1) and the country-name matcher.
//!
//! Lookups are case-insensitive exact matches. A miss is `None`, never an error.

use std::collections::HashMap;

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub alpha_2: &'static str,
    pub alpha_3: &'static str,
    /// Common short name (e.g. "United States")
    pub name: &'static str,
    /// Official long name, where one exists (e.g. "United States of America")
    pub official_name: Option<&'static str>,
}

const fn c(
    alpha_2: &'static str,
    alpha_3: &'static str,
    name: &'static str,
    official_name: Option<&'static str>,
) -> Country {
    Country { alpha_2, alpha_3, name, official_name }
}

// ─── ISO 3166-1 dataset ─────────────────────────────────────────

const ISO_3166_1: &[Country] = &[
    c("AW", "ABW", "Aruba", None),
    c("AF", "AFG", "Afghanistan", Some("Islamic Republic of Afghanistan")),
    c("AO", "AGO", "Angola", Some("Republic of Angola")),
    c("AI", "AIA", "Anguilla", None),
    c("AX", "ALA", "Åland Islands", None),
    c("AL", "ALB", "Albania", Some("Republic of Albania")),
    c("AD", "AND", "Andorra", Some("Principality of Andorra")),
    c("AE", "ARE", "United Arab Emirates", None),
    c("AR", "ARG", "Argentina", Some("Argentine Republic")),
    c("AM", "ARM", "Armenia", Some("Republic of Armenia")),
    c("AS", "ASM", "American Samoa", None),
    c("AQ", "ATA", "Antarctica", None),
    c("TF", "ATF", "French Southern Territories", None),
    c("AG", "ATG", "Antigua and Barbuda", None),
    c("AU", "AUS", "Australia", None),
    c("AT", "AUT", "Austria", Some("Republic of Austria")),
    c("AZ", "AZE", "Azerbaijan", Some("Republic of Azerbaijan")),
    c("BI", "BDI", "Burundi", Some("Republic of Burundi")),
    c("BE", "BEL", "Belgium", Some("Kingdom of Belgium")),
    c("BJ", "BEN", "Benin", Some("Republic of Benin")),
    c("BQ", "BES", "Bonaire, Sint Eustatius and Saba", None),
    c("BF", "BFA", "Burkina Faso", None),
    c("BD", "BGD", "Bangladesh", Some("People's Republic of Bangladesh")),
    c("BG", "BGR", "Bulgaria", Some("Republic of Bulgaria")),
    c("BH", "BHR", "Bahrain", Some("Kingdom of Bahrain")),
    c("BS", "BHS", "Bahamas", Some("Commonwealth of the Bahamas")),
    c("BA", "BIH", "Bosnia and Herzegovina", Some("Republic of Bosnia and Herzegovina")),
    c("BL", "BLM", "Saint Barthélemy", None),
    c("BY", "BLR", "Belarus", Some("Republic of Belarus")),
    c("BZ", "BLZ", "Belize", None),
    c("BM", "BMU", "Bermuda", None),
    c("BO", "BOL", "Bolivia, Plurinational State of", Some("Plurinational State of Bolivia")),
    c("BR", "BRA", "Brazil", Some("Federative Republic of Brazil")),
    c("BB", "BRB", "Barbados", None),
    c("BN", "BRN", "Brunei Darussalam", None),
    c("BT", "BTN", "Bhutan", Some("Kingdom of Bhutan")),
    c("BV", "BVT", "Bouvet Island", None),
    c("BW", "BWA", "Botswana", Some("Republic of Botswana")),
    c("CF", "CAF", "Central African Republic", None),
    c("CA", "CAN", "Canada", None),
    c("CC", "CCK", "Cocos (Keeling) Islands", None),
    c("CH", "CHE", "Switzerland", Some("Swiss Confederation")),
    c("CL", "CHL", "Chile", Some("Republic of Chile")),
    c("CN", "CHN", "China", Some("People's Republic of China")),
    c("CI", "CIV", "Côte d'Ivoire", Some("Republic of Côte d'Ivoire")),
    c("CM", "CMR", "Cameroon", Some("Republic of Cameroon")),
    c("CD", "COD", "Congo, The Democratic Republic of the", None),
    c("CG", "COG", "Congo", Some("Republic of the Congo")),
    c("CK", "COK", "Cook Islands", None),
    c("CO", "COL", "Colombia", Some("Republic of Colombia")),
    c("KM", "COM", "Comoros", Some("Union of the Comoros")),
    c("CV", "CPV", "Cabo Verde", Some("Republic of Cabo Verde")),
    c("CR", "CRI", "Costa Rica", Some("Republic of Costa Rica")),
    c("CU", "CUB", "Cuba", Some("Republic of Cuba")),
    c("CW", "CUW", "Curaçao", None),
    c("CX", "CXR", "Christmas Island", None),
    c("KY", "CYM", "Cayman Islands", None),
    c("CY", "CYP", "Cyprus", Some("Republic of Cyprus")),
    c("CZ", "CZE", "Czechia", Some("Czech Republic")),
    c("DE", "DEU", "Germany", Some("Federal Republic of Germany")),
    c("DJ", "DJI", "Djibouti", Some("Republic of Djibouti")),
    c("DM", "DMA", "Dominica", Some("Commonwealth of Dominica")),
    c("DK", "DNK", "Denmark", Some("Kingdom of Denmark")),
    c("DO", "DOM", "Dominican Republic", None),
    c("DZ", "DZA", "Algeria", Some("People's Democratic Republic of Algeria")),
    c("EC", "ECU", "Ecuador", Some("Republic of Ecuador")),
    c("EG", "EGY", "Egypt", Some("Arab Republic of Egypt")),
    c("ER", "ERI", "Eritrea", Some("the State of Eritrea")),
    c("EH", "ESH", "Western Sahara", None),
    c("ES", "ESP", "Spain", Some("Kingdom of Spain")),
    c("EE", "EST", "Estonia", Some("Republic of Estonia")),
    c("ET", "ETH", "Ethiopia", Some("Federal Democratic Republic of Ethiopia")),
    c("FI", "FIN", "Finland", Some("Republic of Finland")),
    c("FJ", "FJI", "Fiji", Some("Republic of Fiji")),
    c("FK", "FLK", "Falkland Islands (Malvinas)", None),
    c("FR", "FRA", "France", Some("French Republic")),
    c("FO", "FRO", "Faroe Islands", None),
    c("FM", "FSM", "Micronesia, Federated States of", Some("Federated States of Micronesia")),
    c("GA", "GAB", "Gabon", Some("Gabonese Republic")),
    c("GB", "GBR", "United Kingdom", Some("United Kingdom of Great Britain and Northern Ireland")),
    c("GE", "GEO", "Georgia", None),
    c("GG", "GGY", "Guernsey", None),
    c("GH", "GHA", "Ghana", Some("Republic of Ghana")),
    c("GI", "GIB", "Gibraltar", None),
    c("GN", "GIN", "Guinea", Some("Republic of Guinea")),
    c("GP", "GLP", "Guadeloupe", None),
    c("GM", "GMB", "Gambia", Some("Republic of the Gambia")),
    c("GW", "GNB", "Guinea-Bissau", Some("Republic of Guinea-Bissau")),
    c("GQ", "GNQ", "Equatorial Guinea", Some("Republic of Equatorial Guinea")),
    c("GR", "GRC", "Greece", Some("Hellenic Republic")),
    c("GD", "GRD", "Grenada", None),
    c("GL", "GRL", "Greenland", None),
    c("GT", "GTM", "Guatemala", Some("Republic of Guatemala")),
    c("GF", "GUF", "French Guiana", None),
    c("GU", "GUM", "Guam", None),
    c("GY", "GUY", "Guyana", Some("Republic of Guyana")),
    c("HK", "HKG", "Hong Kong", Some("Hong Kong Special Administrative Region of China")),
    c("HM", "HMD", "Heard Island and McDonald Islands", None),
    c("HN", "HND", "Honduras", Some("Republic of Honduras")),
    c("HR", "HRV", "Croatia", Some("Republic of Croatia")),
    c("HT", "HTI", "Haiti", Some("Republic of Haiti")),
    c("HU", "HUN", "Hungary", None),
    c("ID", "IDN", "Indonesia", Some("Republic of Indonesia")),
    c("IM", "IMN", "Isle of Man", None),
    c("IN", "IND", "India", Some("Republic of India")),
    c("IO", "IOT", "British Indian Ocean Territory", None),
    c("IE", "IRL", "Ireland", None),
    c("IR", "IRN", "Iran, Islamic Republic of", Some("Islamic Republic of Iran")),
    c("IQ", "IRQ", "Iraq", Some("Republic of Iraq")),
    c("IS", "ISL", "Iceland", Some("Republic of Iceland")),
    c("IL", "ISR", "Israel", Some("State of Israel")),
    c("IT", "ITA", "Italy", Some("Italian Republic")),
    c("JM", "JAM", "Jamaica", None),
    c("JE", "JEY", "Jersey", None),
    c("JO", "JOR", "Jordan", Some("Hashemite Kingdom of Jordan")),
    c("JP", "JPN", "Japan", None),
    c("KZ", "KAZ", "Kazakhstan", Some("Republic of Kazakhstan")),
    c("KE", "KEN", "Kenya", Some("Republic of Kenya")),
    c("KG", "KGZ", "Kyrgyzstan", Some("Kyrgyz Republic")),
    c("KH", "KHM", "Cambodia", Some("Kingdom of Cambodia")),
    c("KI", "KIR", "Kiribati", Some("Republic of Kiribati")),
    c("KN", "KNA", "Saint Kitts and Nevis", None),
    c("KR", "KOR", "Korea, Republic of", None),
    c("KW", "KWT", "Kuwait", Some("State of Kuwait")),
    c("LA", "LAO", "Lao People's Democratic Republic", None),
    c("LB", "LBN", "Lebanon", Some("Lebanese Republic")),
    c("LR", "LBR", "Liberia", Some("Republic of Liberia")),
    c("LY", "LBY", "Libya", None),
    c("LC", "LCA", "Saint Lucia", None),
    c("LI", "LIE", "Liechtenstein", Some("Principality of Liechtenstein")),
    c("LK", "LKA", "Sri Lanka", Some("Democratic Socialist Republic of Sri Lanka")),
    c("LS", "LSO", "Lesotho", Some("Kingdom of Lesotho")),
    c("LT", "LTU", "Lithuania", Some("Republic of Lithuania")),
    c("LU", "LUX", "Luxembourg", Some("Grand Duchy of Luxembourg")),
    c("LV", "LVA", "Latvia", Some("Republic of Latvia")),
    c("MO", "MAC", "Macao", Some("Macao Special Administrative Region of China")),
    c("MF", "MAF", "Saint Martin (French part)", None),
    c("MA", "MAR", "Morocco", Some("Kingdom of Morocco")),
    c("MC", "MCO", "Monaco", Some("Principality of Monaco")),
    c("MD", "MDA", "Moldova, Republic of", Some("Republic of Moldova")),
    c("MG", "MDG", "Madagascar", Some("Republic of Madagascar")),
    c("MV", "MDV", "Maldives", Some("Republic of Maldives")),
    c("MX", "MEX", "Mexico", Some("United Mexican States")),
    c("MH", "MHL", "Marshall Islands", Some("Republic of the Marshall Islands")),
    c("MK", "MKD", "North Macedonia", Some("Republic of North Macedonia")),
    c("ML", "MLI", "Mali", Some("Republic of Mali")),
    c("MT", "MLT", "Malta", Some("Republic of Malta")),
    c("MM", "MMR", "Myanmar", Some("Republic of Myanmar")),
    c("ME", "MNE", "Montenegro", None),
    c("MN", "MNG", "Mongolia", None),
    c("MP", "MNP", "Northern Mariana Islands", Some("Commonwealth of the Northern Mariana Islands")),
    c("MZ", "MOZ", "Mozambique", Some("Republic of Mozambique")),
    c("MR", "MRT", "Mauritania", Some("Islamic Republic of Mauritania")),
    c("MS", "MSR", "Montserrat", None),
    c("MQ", "MTQ", "Martinique", None),
    c("MU", "MUS", "Mauritius", Some("Republic of Mauritius")),
    c("MW", "MWI", "Malawi", Some("Republic of Malawi")),
    c("MY", "MYS", "Malaysia", None),
    c("YT", "MYT", "Mayotte", None),
    c("NA", "NAM", "Namibia", Some("Republic of Namibia")),
    c("NC", "NCL", "New Caledonia", None),
    c("NE", "NER", "Niger", Some("Republic of the Niger")),
    c("NF", "NFK", "Norfolk Island", None),
    c("NG", "NGA", "Nigeria", Some("Federal Republic of Nigeria")),
    c("NI", "NIC", "Nicaragua", Some("Republic of Nicaragua")),
    c("NU", "NIU", "Niue", None),
    c("NL", "NLD", "Netherlands", Some("Kingdom of the Netherlands")),
    c("NO", "NOR", "Norway", Some("Kingdom of Norway")),
    c("NP", "NPL", "Nepal", Some("Federal Democratic Republic of Nepal")),
    c("NR", "NRU", "Nauru", Some("Republic of Nauru")),
    c("NZ", "NZL", "New Zealand", None),
    c("OM", "OMN", "Oman", Some("Sultanate of Oman")),
    c("PK", "PAK", "Pakistan", Some("Islamic Republic of Pakistan")),
    c("PA", "PAN", "Panama", Some("Republic of Panama")),
    c("PN", "PCN", "Pitcairn", None),
    c("PE", "PER", "Peru", Some("Republic of Peru")),
    c("PH", "PHL", "Philippines", Some("Republic of the Philippines")),
    c("PW", "PLW", "Palau", Some("Republic of Palau")),
    c("PG", "PNG", "Papua New Guinea", Some("Independent State of Papua New Guinea")),
    c("PL", "POL", "Poland", Some("Republic of Poland")),
    c("PR", "PRI", "Puerto Rico", None),
    c("KP", "PRK", "Korea, Democratic People's Republic of", Some("Democratic People's Republic of Korea")),
    c("PT", "PRT", "Portugal", Some("Portuguese Republic")),
    c("PY", "PRY", "Paraguay", Some("Republic of Paraguay")),
    c("PS", "PSE", "Palestine, State of", Some("the State of Palestine")),
    c("PF", "PYF", "French Polynesia", None),
    c("QA", "QAT", "Qatar", Some("State of Qatar")),
    c("RE", "REU", "Réunion", None),
    c("RO", "ROU", "Romania", None),
    c("RU", "RUS", "Russian Federation", None),
    c("RW", "RWA", "Rwanda", Some("Rwandese Republic")),
    c("SA", "SAU", "Saudi Arabia", Some("Kingdom of Saudi Arabia")),
    c("SD", "SDN", "Sudan", Some("Republic of the Sudan")),
    c("SN", "SEN", "Senegal", Some("Republic of Senegal")),
    c("SG", "SGP", "Singapore", Some("Republic of Singapore")),
    c("GS", "SGS", "South Georgia and the South Sandwich Islands", None),
    c("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", None),
    c("SJ", "SJM", "Svalbard and Jan Mayen", None),
    c("SB", "SLB", "Solomon Islands", None),
    c("SL", "SLE", "Sierra Leone", Some("Republic of Sierra Leone")),
    c("SV", "SLV", "El Salvador", Some("Republic of El Salvador")),
    c("SM", "SMR", "San Marino", Some("Republic of San Marino")),
    c("SO", "SOM", "Somalia", Some("Federal Republic of Somalia")),
    c("PM", "SPM", "Saint Pierre and Miquelon", None),
    c("RS", "SRB", "Serbia", Some("Republic of Serbia")),
    c("SS", "SSD", "South Sudan", Some("Republic of South Sudan")),
    c("ST", "STP", "Sao Tome and Principe", Some("Democratic Republic of Sao Tome and Principe")),
    c("SR", "SUR", "Suriname", Some("Republic of Suriname")),
    c("SK", "SVK", "Slovakia", Some("Slovak Republic")),
    c("SI", "SVN", "Slovenia", Some("Republic of Slovenia")),
    c("SE", "SWE", "Sweden", Some("Kingdom of Sweden")),
    c("SZ", "SWZ", "Eswatini", Some("Kingdom of Eswatini")),
    c("SX", "SXM", "Sint Maarten (Dutch part)", None),
    c("SC", "SYC", "Seychelles", Some("Republic of Seychelles")),
    c("SY", "SYR", "Syrian Arab Republic", None),
    c("TC", "TCA", "Turks and Caicos Islands", None),
    c("TD", "TCD", "Chad", Some("Republic of Chad")),
    c("TG", "TGO", "Togo", Some("Togolese Republic")),
    c("TH", "THA", "Thailand", Some("Kingdom of Thailand")),
    c("TJ", "TJK", "Tajikistan", Some("Republic of Tajikistan")),
    c("TK", "TKL", "Tokelau", None),
    c("TM", "TKM", "Turkmenistan", None),
    c("TL", "TLS", "Timor-Leste", Some("Democratic Republic of Timor-Leste")),
    c("TO", "TON", "Tonga", Some("Kingdom of Tonga")),
    c("TT", "TTO", "Trinidad and Tobago", Some("Republic of Trinidad and Tobago")),
    c("TN", "TUN", "Tunisia", Some("Republic of Tunisia")),
    c("TR", "TUR", "Türkiye", Some("Republic of Türkiye")),
    c("TV", "TUV", "Tuvalu", None),
    c("TW", "TWN", "Taiwan, Province of China", Some("Taiwan, Province of China")),
    c("TZ", "TZA", "Tanzania, United Republic of", Some("United Republic of Tanzania")),
    c("UG", "UGA", "Uganda", Some("Republic of Uganda")),
    c("UA", "UKR", "Ukraine", None),
    c("UM", "UMI", "United States Minor Outlying Islands", None),
    c("UY", "URY", "Uruguay", Some("Eastern Republic of Uruguay")),
    c("US", "USA", "United States", Some("United States of America")),
    c("UZ", "UZB", "Uzbekistan", Some("Republic of Uzbekistan")),
    c("VA", "VAT", "Holy See (Vatican City State)", None),
    c("VC", "VCT", "Saint Vincent and the Grenadines", None),
    c("VE", "VEN", "Venezuela, Bolivarian Republic of", Some("Bolivarian Republic of Venezuela")),
    c("VG", "VGB", "Virgin Islands, British", Some("British Virgin Islands")),
    c("VI", "VIR", "Virgin Islands, U.S.", Some("Virgin Islands of the United States")),
    c("VN", "VNM", "Viet Nam", Some("Socialist Republic of Viet Nam")),
    c("VU", "VUT", "Vanuatu", Some("Republic of Vanuatu")),
    c("WF", "WLF", "Wallis and Futuna", None),
    c("WS", "WSM", "Samoa", Some("Independent State of Samoa")),
    c("YE", "YEM", "Yemen", Some("Republic of Yemen")),
    c("ZA", "ZAF", "South Africa", Some("Republic of South Africa")),
    c("ZM", "ZMB", "Zambia", Some("Republic of Zambia")),
    c("ZW", "ZWE", "Zimbabwe", Some("Republic of Zimbabwe")),
];

/// Indexed view over the ISO 3166-1 table.
pub struct CountryRegistry {
    entries: &'static [Country],
    by_name: HashMap<String, usize>,
    by_official_name: HashMap<String, usize>,
    by_alpha_2: HashMap<String, usize>,
}

impl CountryRegistry {
    /// Registry over the built-in ISO 3166-1 table.
    pub fn iso3166() -> Self {
        Self::from_entries(ISO_3166_1)
    }

    fn from_entries(entries: &'static [Country]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_official_name = HashMap::new();
        let mut by_alpha_2 = HashMap::with_capacity(entries.len());

        for (i, country) in entries.iter().enumerate() {
            by_name.entry(country.name.to_lowercase()).or_insert(i);
            if let Some(official) = country.official_name {
                by_official_name.entry(official.to_lowercase()).or_insert(i);
            }
            by_alpha_2.entry(country.alpha_2.to_ascii_lowercase()).or_insert(i);
        }

        Self { entries, by_name, by_official_name, by_alpha_2 }
    }

    pub fn by_name(&self, name: &str) -> Option<&Country> {
        self.by_name.get(&name.to_lowercase()).map(|&i| &self.entries[i])
    }

    pub fn by_official_name(&self, name: &str) -> Option<&Country> {
        self.by_official_name
            .get(&name.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    pub fn by_alpha_2(&self, code: &str) -> Option<&Country> {
        self.by_alpha_2
            .get(&code.trim().to_ascii_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Canonical country name for an alpha-2 code.
    pub fn name_for_alpha_2(&self, code: &str) -> Option<&'static str> {
        self.by_alpha_2(code).map(|c| c.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::iso3166()
    }
}

// ─── Matcher ────────────────────────────────────────────────────

/// Decides whether a candidate string names a sovereign country.
pub struct CountryMatcher<'a> {
    registry: &'a CountryRegistry,
}

impl<'a> CountryMatcher<'a> {
    pub fn new(registry: &'a CountryRegistry) -> Self {
        Self { registry }
    }

    /// Title-cases the candidate word by word, then checks the common name
    /// and, failing that, the official name.
    pub fn is_country(&self, candidate: &str) -> bool {
        self.lookup(candidate).is_some()
    }

    /// Registry entry for a candidate, if it names a country.
    pub fn lookup(&self, candidate: &str) -> Option<&'a Country> {
        let normalized = title_case(candidate);
        if normalized.is_empty() {
            return None;
        }
        self.registry
            .by_name(&normalized)
            .or_else(|| self.registry.by_official_name(&normalized))
    }
}

/// "nEW zealand" → "New Zealand". Words are split on whitespace and rejoined
/// with single spaces.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size() {
        assert_eq!(CountryRegistry::iso3166().len(), 249);
    }

    #[test]
    fn test_alpha_2_lookup() {
        let registry = CountryRegistry::iso3166();
        assert_eq!(registry.name_for_alpha_2("FR"), Some("France"));
        assert_eq!(registry.name_for_alpha_2("us"), Some("United States"));
        assert_eq!(registry.by_alpha_2("DE").map(|c| c.alpha_3), Some("DEU"));
        assert_eq!(registry.name_for_alpha_2("XX"), None);
        assert_eq!(registry.name_for_alpha_2(""), None);
    }

    #[test]
    fn test_official_name_lookup() {
        let registry = CountryRegistry::iso3166();
        let country = registry.by_official_name("French Republic").unwrap();
        assert_eq!(country.alpha_2, "FR");
        assert!(registry.by_name("French Republic").is_none());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("nEW zealand"), "New Zealand");
        assert_eq!(title_case("  france  "), "France");
        assert_eq!(title_case("USA"), "Usa");
        assert_eq!(title_case("île"), "Île");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_is_country_common_name() {
        let registry = CountryRegistry::iso3166();
        let matcher = CountryMatcher::new(&registry);
        assert!(matcher.is_country("France"));
        assert!(matcher.is_country("france"));
        assert!(matcher.is_country("SAUDI ARABIA"));
    }

    #[test]
    fn test_is_country_official_name() {
        let registry = CountryRegistry::iso3166();
        let matcher = CountryMatcher::new(&registry);
        assert!(matcher.is_country("United States of America"));
        assert_eq!(
            matcher.lookup("kingdom of sweden").map(|c| c.alpha_3),
            Some("SWE")
        );
    }

    #[test]
    fn test_is_country_rejects() {
        let registry = CountryRegistry::iso3166();
        let matcher = CountryMatcher::new(&registry);
        assert!(!matcher.is_country("USA"));
        assert!(!matcher.is_country("Atlantis"));
        assert!(!matcher.is_country("Paris"));
        assert!(!matcher.is_country("   "));
    }
}
