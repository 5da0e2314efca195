//! Raw season batting records supplied by the statistics collaborator.
use serde::{Deserialize, Serialize};

/// One player's season totals as retrieved from an external stats provider.
///
/// Singles are not part of the record; they are derived as
/// `h - doubles - triples - hr` when the rate profile is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingLine {
    pub name: String,
    /// At-bats.
    pub ab: u32,
    /// Hits.
    pub h: u32,
    pub doubles: u32,
    pub triples: u32,
    /// Home runs.
    pub hr: u32,
    /// Walks (bases on balls).
    pub bb: u32,
    /// Strikeouts.
    pub so: u32,
    /// Sacrifice flies.
    pub sf: u32,
    /// Sacrifice hits.
    pub sh: u32,
    /// Double plays grounded into.
    pub gdp: u32,
    /// Stolen bases.
    pub sb: u32,
    /// Caught stealing.
    pub cs: u32,
}

/// Batch of batting lines for one team, as delivered by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupSheet {
    pub team: String,
    pub batters: Vec<BattingLine>,
}

impl LineupSheet {
    /// Load a lineup sheet from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON string cannot be parsed.
    pub fn from_json(json_str: &str) -> Result<Self, String> {
        serde_json::from_str(json_str).map_err(|e| format!("JSON parse error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_parses_from_json() {
        let json = r#"{
            "team": "PHI",
            "batters": [
                {"name": "Leadoff", "ab": 300, "h": 90, "doubles": 20,
                 "triples": 5, "hr": 5, "bb": 30, "so": 50, "sf": 5,
                 "sh": 5, "gdp": 5, "sb": 10, "cs": 5}
            ]
        }"#;
        let sheet = LineupSheet::from_json(json).expect("valid sheet");
        assert_eq!(sheet.team, "PHI");
        assert_eq!(sheet.batters.len(), 1);
        assert_eq!(sheet.batters[0].ab, 300);
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = LineupSheet::from_json("{\"team\": }").unwrap_err();
        assert!(err.contains("JSON parse error"));
    }
}
