use serde::Deserialize;

use crate::model::null_as_empty;

/// A single fixture as returned by the fixture-by-date endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Match {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_live: bool,
    pub tournament: Tournament,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub commentators: Vec<Commentator>,
}

/// The competition a match belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tournament {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Commentator {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_commentators_decode_as_empty() {
        let value = json!({
            "id": "m1",
            "name": "A vs B",
            "is_live": true,
            "tournament": { "name": "V.League", "logo": "https://cdn/logo.png" },
            "commentators": null
        });
        let m: Match = serde_json::from_value(value).unwrap();
        assert!(m.commentators.is_empty());
        assert!(m.is_live);
    }

    #[test]
    fn test_missing_commentators_decode_as_empty() {
        let value = json!({
            "id": "m1",
            "name": "A vs B",
            "is_live": false,
            "tournament": { "name": "V.League", "logo": "" }
        });
        let m: Match = serde_json::from_value(value).unwrap();
        assert!(m.commentators.is_empty());
        assert_eq!(m.tournament.name, "V.League");
    }
}
