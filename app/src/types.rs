use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Top-level document of the static `list.json` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub districts: Vec<District>,
}

impl Dataset {
    pub fn station_count(&self) -> usize {
        self.districts.iter().map(|d| d.stations.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct District {
    #[serde(rename = "district_ml", default)]
    pub name_local: String,
    #[serde(rename = "district_en", default)]
    pub name_romanized: String,
    /// Display order; never re-sorted.
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl District {
    /// Stable key used for the expansion set and DOM ids.
    pub fn id(&self) -> String {
        slug(&self.name_romanized)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Station {
    #[serde(rename = "name_ml", default)]
    pub name_local: String,
    #[serde(rename = "name_en", default)]
    pub name_romanized: String,
    /// Dialable as-is; the format is not validated.
    #[serde(default)]
    pub phone: String,
}

/// Lowercases `name` and collapses every whitespace run into a single `-`.
///
/// Leading and trailing whitespace is not trimmed, it becomes a hyphen too.
pub fn slug(name: &str) -> String {
    WHITESPACE_RUN.replace_all(&name.to_lowercase(), "-").into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_two_words() {
        assert_eq!(slug("Thiruvananthapuram City"), "thiruvananthapuram-city");
    }

    #[test]
    fn test_slug_single_word() {
        assert_eq!(slug("Kollam"), "kollam");
    }

    #[test]
    fn test_slug_collapses_whitespace_runs() {
        assert_eq!(slug("Kochi  \t Rural"), "kochi-rural");
    }

    #[test]
    fn test_slug_keeps_edge_whitespace_as_hyphens() {
        assert_eq!(slug(" Idukki "), "-idukki-");
    }

    #[test]
    fn test_slug_empty() {
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_district_id_uses_romanized_name() {
        let district = District {
            name_local: "കൊല്ലം റൂറൽ".to_string(),
            name_romanized: "Kollam Rural".to_string(),
            stations: Vec::new(),
        };
        assert_eq!(district.id(), "kollam-rural");
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "districts": [{
                "district_ml": "കൊല്ലം",
                "district_en": "Kollam",
                "stations": [{ "name_ml": "ടൗൺ", "name_en": "Town Station", "phone": "0474-1" }]
            }]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.districts.len(), 1);
        let district = &dataset.districts[0];
        assert_eq!(district.name_local, "കൊല്ലം");
        assert_eq!(district.name_romanized, "Kollam");
        assert_eq!(district.stations[0].name_romanized, "Town Station");
        assert_eq!(district.stations[0].phone, "0474-1");
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let json = r#"{ "districts": [{ "district_en": "Wayanad", "stations": [{ "name_en": "Kalpetta" }] }] }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        let district = &dataset.districts[0];
        assert_eq!(district.name_local, "");
        assert_eq!(district.stations[0].phone, "");
    }

    #[test]
    fn test_station_count() {
        let dataset = Dataset {
            districts: vec![
                District {
                    stations: vec![Station::default(), Station::default()],
                    ..District::default()
                },
                District {
                    stations: vec![Station::default()],
                    ..District::default()
                },
            ],
        };
        assert_eq!(dataset.station_count(), 3);
    }
}
