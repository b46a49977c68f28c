use serde_json::{json, Value};

/// The ten query categories the gateway serves. Each kind knows its upstream
/// path, cache key, extraction path through the `MRData` body, and the shape
/// of its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    DriverStandings,
    ConstructorStandings,
    Drivers,
    Constructors,
    Circuits,
    Seasons,
    Results,
    ResultsRound,
    Qualifying,
    Schedule,
}

/// Output shape of a resource: a list of rows or a single race object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    List,
    Race,
}

impl Shape {
    pub fn empty(&self) -> Value {
        match self {
            Shape::List => json!([]),
            Shape::Race => json!({}),
        }
    }
}

enum Step {
    Key(&'static str),
    Index(usize),
}

impl ResourceKind {
    fn name(&self) -> &'static str {
        match self {
            ResourceKind::DriverStandings => "DriverStandings",
            ResourceKind::ConstructorStandings => "ConstructorStandings",
            ResourceKind::Drivers => "Drivers",
            ResourceKind::Constructors => "Constructors",
            ResourceKind::Circuits => "Circuits",
            ResourceKind::Seasons => "Seasons",
            ResourceKind::Results => "Results",
            ResourceKind::ResultsRound => "ResultsRound",
            ResourceKind::Qualifying => "Qualifying",
            ResourceKind::Schedule => "Schedule",
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            ResourceKind::ResultsRound | ResourceKind::Qualifying => Shape::Race,
            _ => Shape::List,
        }
    }

    /// Deterministic cache key. The seasons listing uses a single shared key
    /// independent of pagination parameters.
    pub fn cache_key(&self, year: Option<&str>, round: Option<&str>) -> String {
        match (year, round) {
            (Some(year), Some(round)) => format!("{}_{}_{}", self.name(), year, round),
            (Some(year), None) => format!("{}_{}", self.name(), year),
            _ => self.name().to_string(),
        }
    }

    /// Path relative to the configured API base.
    pub fn upstream_path(&self, year: Option<&str>, round: Option<&str>) -> String {
        let year = year.unwrap_or_default();
        let round = round.unwrap_or_default();
        match self {
            ResourceKind::DriverStandings => format!("{year}/driverStandings.json"),
            ResourceKind::ConstructorStandings => format!("{year}/constructorStandings.json"),
            ResourceKind::Drivers => format!("{year}/drivers.json"),
            ResourceKind::Constructors => format!("{year}/constructors.json"),
            ResourceKind::Circuits => format!("{year}/circuits.json"),
            ResourceKind::Seasons => "seasons.json?limit=10000".to_string(),
            ResourceKind::Results => format!("{year}/results/1.json"),
            ResourceKind::ResultsRound => format!("{year}/{round}/results.json"),
            ResourceKind::Qualifying => format!("{year}/{round}/qualifying.json"),
            ResourceKind::Schedule => format!("{year}.json"),
        }
    }

    fn steps(&self) -> &'static [Step] {
        use Step::{Index, Key};
        match self {
            ResourceKind::DriverStandings => &[
                Key("MRData"),
                Key("StandingsTable"),
                Key("StandingsLists"),
                Index(0),
                Key("DriverStandings"),
            ],
            ResourceKind::ConstructorStandings => &[
                Key("MRData"),
                Key("StandingsTable"),
                Key("StandingsLists"),
                Index(0),
                Key("ConstructorStandings"),
            ],
            ResourceKind::Drivers => &[Key("MRData"), Key("DriverTable"), Key("Drivers")],
            ResourceKind::Constructors => {
                &[Key("MRData"), Key("ConstructorTable"), Key("Constructors")]
            }
            ResourceKind::Circuits => &[Key("MRData"), Key("CircuitTable"), Key("Circuits")],
            ResourceKind::Seasons => &[Key("MRData"), Key("SeasonTable"), Key("Seasons")],
            ResourceKind::Results | ResourceKind::Schedule => {
                &[Key("MRData"), Key("RaceTable"), Key("Races")]
            }
            ResourceKind::ResultsRound | ResourceKind::Qualifying => {
                &[Key("MRData"), Key("RaceTable"), Key("Races"), Index(0)]
            }
        }
    }

    /// Descend the fixed extraction path through the upstream body. `None`
    /// when any step is missing, which callers degrade to the empty container
    /// (list shapes) or "race not found" (race shapes).
    pub fn extract(&self, body: &Value) -> Option<Value> {
        let mut current = body;
        for step in self.steps() {
            current = match step {
                Step::Key(key) => current.get(key)?,
                Step::Index(index) => current.get(index)?,
            };
        }
        Some(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings_body() -> Value {
        json!({
            "MRData": {
                "StandingsTable": {
                    "StandingsLists": [
                        {
                            "season": "2020",
                            "DriverStandings": [
                                {"position": "1", "Driver": {"driverId": "hamilton"}}
                            ]
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn cache_keys_match_naming_scheme() {
        assert_eq!(
            ResourceKind::DriverStandings.cache_key(Some("2020"), None),
            "DriverStandings_2020"
        );
        assert_eq!(
            ResourceKind::Qualifying.cache_key(Some("2021"), Some("3")),
            "Qualifying_2021_3"
        );
        assert_eq!(ResourceKind::Seasons.cache_key(None, None), "Seasons");
    }

    #[test]
    fn upstream_paths_follow_ergast_layout() {
        assert_eq!(
            ResourceKind::DriverStandings.upstream_path(Some("2020"), None),
            "2020/driverStandings.json"
        );
        assert_eq!(
            ResourceKind::ResultsRound.upstream_path(Some("2021"), Some("5")),
            "2021/5/results.json"
        );
        assert_eq!(
            ResourceKind::Schedule.upstream_path(Some("2024"), None),
            "2024.json"
        );
        assert_eq!(
            ResourceKind::Seasons.upstream_path(None, None),
            "seasons.json?limit=10000"
        );
    }

    #[test]
    fn extracts_driver_standings_from_first_standings_list() {
        let extracted = ResourceKind::DriverStandings
            .extract(&standings_body())
            .unwrap();
        assert_eq!(extracted[0]["Driver"]["driverId"], "hamilton");
    }

    #[test]
    fn missing_mrdata_yields_none() {
        assert!(ResourceKind::Drivers.extract(&json!({"unexpected": 1})).is_none());
        assert!(ResourceKind::Qualifying.extract(&json!({})).is_none());
    }

    #[test]
    fn empty_standings_lists_yields_none() {
        let body = json!({"MRData": {"StandingsTable": {"StandingsLists": []}}});
        assert!(ResourceKind::DriverStandings.extract(&body).is_none());
    }

    #[test]
    fn empty_races_yields_none_for_single_race_kinds() {
        let body = json!({"MRData": {"RaceTable": {"Races": []}}});
        assert!(ResourceKind::ResultsRound.extract(&body).is_none());
        assert!(ResourceKind::Qualifying.extract(&body).is_none());
    }

    #[test]
    fn race_shapes_are_single_race() {
        assert_eq!(ResourceKind::ResultsRound.shape(), Shape::Race);
        assert_eq!(ResourceKind::Qualifying.shape(), Shape::Race);
        assert_eq!(ResourceKind::Results.shape(), Shape::List);
        assert_eq!(ResourceKind::Results.shape().empty(), json!([]));
        assert_eq!(ResourceKind::Qualifying.shape().empty(), json!({}));
    }
}
