use serde::{Deserialize, Serialize};

/// A tracked competitor. Owned by the competitor view; the list is a
/// best-effort local cache updated optimistically on create and delete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Competitor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of the add-competitor request.
#[derive(Debug, Clone, Serialize)]
pub struct NewCompetitor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Envelope of `GET /api/monitoring/competitors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitorsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

/// Envelope of `POST /api/monitoring/competitors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitorCreatedResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub competitor: Option<Competitor>,
}

/// Envelope of `DELETE /api/monitoring/competitors/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitorDeletedResponse {
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_created_competitor_envelope() {
        let response: CompetitorCreatedResponse = serde_json::from_str(
            r#"{
                "success": true,
                "message": "Competitor added successfully",
                "competitor": {
                    "id": "c-1",
                    "user_id": "u-1",
                    "name": "Acme",
                    "website": "https://acme.example",
                    "description": null,
                    "created_at": "2024-11-01T08:00:00"
                }
            }"#,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(response.competitor.unwrap().name, "Acme");
    }

    #[test]
    fn list_keeps_insertion_order_from_api() {
        let response: CompetitorsResponse = serde_json::from_str(
            r#"{"success": true, "competitors": [
                {"id": "c-1", "name": "Acme"},
                {"id": "c-2", "name": "Globex"}
            ]}"#,
        )
        .unwrap();

        let names: Vec<_> = response.competitors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Acme", "Globex"]);
    }
}
