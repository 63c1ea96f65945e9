use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Display};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
    Antarctica,
    Other,
}

impl Region {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Africa" => Some(Self::Africa),
            "Asia" => Some(Self::Asia),
            "Europe" => Some(Self::Europe),
            "North America" => Some(Self::NorthAmerica),
            "South America" => Some(Self::SouthAmerica),
            "Oceania" => Some(Self::Oceania),
            "Antarctica" => Some(Self::Antarctica),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Oceania => "Oceania",
            Self::Antarctica => "Antarctica",
            Self::Other => "Other",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("'{country}' is a member of both {first} and {second}")]
    DuplicateMembership {
        country: String,
        first: Region,
        second: Region,
    },
}

/// Ordered region-to-member-countries table. Classification scans entries in
/// definition order, so membership must be unambiguous: construction fails if
/// the same country string appears under two different regions.
#[derive(Debug)]
pub struct RegionTable {
    entries: Vec<(Region, Vec<String>)>,
}

impl RegionTable {
    pub fn new(entries: Vec<(Region, Vec<String>)>) -> Result<Self, TableError> {
        let mut seen: HashMap<String, Region> = HashMap::new();
        for (region, members) in &entries {
            for member in members {
                match seen.get(member.as_str()) {
                    Some(first) if *first != *region => {
                        return Err(TableError::DuplicateMembership {
                            country: member.clone(),
                            first: *first,
                            second: *region,
                        });
                    }
                    _ => {
                        seen.insert(member.clone(), *region);
                    }
                }
            }
        }

        Ok(Self { entries })
    }

    /// First region whose member set contains an exact match for `country`,
    /// or `Region::Other` when none does. Exact string match only: no case
    /// folding and no alias resolution beyond the table's literal entries.
    pub fn classify(&self, country: &str) -> Region {
        for (region, members) in &self.entries {
            if members.iter().any(|member| member == country) {
                return *region;
            }
        }

        Region::Other
    }

    pub fn entries(&self) -> &[(Region, Vec<String>)] {
        &self.entries
    }
}

fn members(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

// Transcontinental countries the source data listed under both Asia and
// Europe (Armenia, Azerbaijan, Cyprus, Georgia, Kazakhstan) are kept under
// Asia only, which is where definition-order scanning always placed them.
pub static DEFAULT_REGION_TABLE: Lazy<RegionTable> = Lazy::new(|| {
    RegionTable::new(vec![
        (
            Region::Africa,
            members(&[
                "Algeria",
                "Angola",
                "Benin",
                "Botswana",
                "Burkina Faso",
                "Burundi",
                "Cabo Verde",
                "Cameroon",
                "Central African Republic",
                "Chad",
                "Comoros",
                "Congo (Brazzaville)",
                "Congo (Kinshasa)",
                "Côte d'Ivoire",
                "Djibouti",
                "Egypt",
                "Equatorial Guinea",
                "Eritrea",
                "Eswatini",
                "Ethiopia",
                "Gabon",
                "Gambia",
                "Ghana",
                "Guinea",
                "Guinea-Bissau",
                "Kenya",
                "Lesotho",
                "Liberia",
                "Libya",
                "Madagascar",
                "Malawi",
                "Mali",
                "Mauritania",
                "Mauritius",
                "Morocco",
                "Mozambique",
                "Namibia",
                "Niger",
                "Nigeria",
                "Rwanda",
                "São Tomé and Príncipe",
                "Senegal",
                "Seychelles",
                "Sierra Leone",
                "Somalia",
                "South Africa",
                "South Sudan",
                "Sudan",
                "Tanzania",
                "Togo",
                "Tunisia",
                "Uganda",
                "Zambia",
                "Zimbabwe",
            ]),
        ),
        (
            Region::Asia,
            members(&[
                "Afghanistan",
                "Armenia",
                "Azerbaijan",
                "Bahrain",
                "Bangladesh",
                "Bhutan",
                "Brunei",
                "Cambodia",
                "China",
                "Cyprus",
                "Georgia",
                "India",
                "Indonesia",
                "Iran",
                "Iraq",
                "Israel",
                "Japan",
                "Jordan",
                "Kazakhstan",
                "Kuwait",
                "Kyrgyzstan",
                "Laos",
                "Lebanon",
                "Malaysia",
                "Maldives",
                "Mongolia",
                "Myanmar",
                "Nepal",
                "North Korea",
                "Oman",
                "Pakistan",
                "Palestine",
                "Philippines",
                "Qatar",
                "Saudi Arabia",
                "Singapore",
                "South Korea",
                "Sri Lanka",
                "Syria",
                "Tajikistan",
                "Thailand",
                "Timor-Leste",
                "Turkey",
                "Turkmenistan",
                "United Arab Emirates",
                "Uzbekistan",
                "Vietnam",
                "Yemen",
            ]),
        ),
        (
            Region::Europe,
            members(&[
                "Albania",
                "Andorra",
                "Austria",
                "Belarus",
                "Belgium",
                "Bosnia and Herzegovina",
                "Bulgaria",
                "Croatia",
                "Czech Republic",
                "Denmark",
                "Estonia",
                "Finland",
                "France",
                "Germany",
                "Greece",
                "Hungary",
                "Iceland",
                "Ireland",
                "Italy",
                "Kosovo",
                "Latvia",
                "Liechtenstein",
                "Lithuania",
                "Luxembourg",
                "Malta",
                "Moldova",
                "Monaco",
                "Montenegro",
                "Netherlands",
                "North Macedonia",
                "Norway",
                "Poland",
                "Portugal",
                "Romania",
                "Russia",
                "San Marino",
                "Serbia",
                "Slovakia",
                "Slovenia",
                "Spain",
                "Sweden",
                "Switzerland",
                "Ukraine",
                "United Kingdom",
                "Vatican City",
            ]),
        ),
        (
            Region::NorthAmerica,
            members(&[
                "Antigua and Barbuda",
                "Bahamas",
                "Barbados",
                "Belize",
                "Canada",
                "Costa Rica",
                "Cuba",
                "Dominica",
                "Dominican Republic",
                "El Salvador",
                "Grenada",
                "Guatemala",
                "Haiti",
                "Honduras",
                "Jamaica",
                "Mexico",
                "Nicaragua",
                "Panama",
                "Saint Kitts and Nevis",
                "Saint Lucia",
                "Saint Vincent and the Grenadines",
                "Trinidad and Tobago",
                "United States",
            ]),
        ),
        (
            Region::SouthAmerica,
            members(&[
                "Argentina",
                "Bolivia",
                "Brazil",
                "Chile",
                "Colombia",
                "Ecuador",
                "Guyana",
                "Paraguay",
                "Peru",
                "Suriname",
                "Uruguay",
                "Venezuela",
            ]),
        ),
        (
            Region::Oceania,
            members(&[
                "Australia",
                "Fiji",
                "Kiribati",
                "Marshall Islands",
                "Micronesia",
                "Nauru",
                "New Zealand",
                "Palau",
                "Papua New Guinea",
                "Samoa",
                "Solomon Islands",
                "Tonga",
                "Tuvalu",
                "Vanuatu",
            ]),
        ),
        (Region::Antarctica, Vec::new()),
    ])
    .expect("default region table holds no duplicate membership")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_table_members() {
        assert_eq!(DEFAULT_REGION_TABLE.classify("Nigeria"), Region::Africa);
        assert_eq!(DEFAULT_REGION_TABLE.classify("Japan"), Region::Asia);
        assert_eq!(DEFAULT_REGION_TABLE.classify("Brazil"), Region::SouthAmerica);
        assert_eq!(DEFAULT_REGION_TABLE.classify("Fiji"), Region::Oceania);
    }

    #[test]
    fn every_member_classifies_to_its_own_region() {
        for (region, countries) in DEFAULT_REGION_TABLE.entries() {
            for country in countries {
                assert_eq!(DEFAULT_REGION_TABLE.classify(country), *region);
            }
        }
    }

    #[test]
    fn unknown_country_falls_back_to_other() {
        assert_eq!(DEFAULT_REGION_TABLE.classify("Atlantis"), Region::Other);
        assert_eq!(DEFAULT_REGION_TABLE.classify("nan"), Region::Other);
        assert_eq!(DEFAULT_REGION_TABLE.classify(""), Region::Other);
    }

    #[test]
    fn classify_is_exact_match_only() {
        assert_eq!(DEFAULT_REGION_TABLE.classify("nigeria"), Region::Other);
        assert_eq!(DEFAULT_REGION_TABLE.classify("Nigeria "), Region::Other);
        assert_eq!(DEFAULT_REGION_TABLE.classify("UK"), Region::Other);
    }

    #[test]
    fn classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(DEFAULT_REGION_TABLE.classify("Kenya"), Region::Africa);
        }
    }

    #[test]
    fn duplicate_membership_across_regions_fails_construction() {
        let err = RegionTable::new(vec![
            (Region::Asia, members(&["Georgia"])),
            (Region::Europe, members(&["Georgia"])),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            TableError::DuplicateMembership {
                first: Region::Asia,
                second: Region::Europe,
                ..
            }
        ));
    }

    #[test]
    fn repeated_membership_within_one_region_is_tolerated() {
        let table =
            RegionTable::new(vec![(Region::Africa, members(&["Kenya", "Kenya"]))]).unwrap();

        assert_eq!(table.classify("Kenya"), Region::Africa);
    }

    #[test]
    fn region_serializes_to_its_label() {
        for region in [
            Region::Africa,
            Region::Asia,
            Region::Europe,
            Region::NorthAmerica,
            Region::SouthAmerica,
            Region::Oceania,
            Region::Antarctica,
            Region::Other,
        ] {
            assert_eq!(
                serde_json::to_value(region).unwrap(),
                serde_json::Value::String(region.label().to_string())
            );
        }
    }

    #[test]
    fn region_labels_round_trip() {
        for region in [
            Region::Africa,
            Region::Asia,
            Region::Europe,
            Region::NorthAmerica,
            Region::SouthAmerica,
            Region::Oceania,
            Region::Antarctica,
            Region::Other,
        ] {
            assert_eq!(Region::from_label(region.label()), Some(region));
        }
        assert_eq!(Region::from_label("ALL"), None);
    }
}
