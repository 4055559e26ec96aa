use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single business idea card. Range fields are human-readable strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub startup_cost: String,
    pub difficulty: u8,
    pub time_to_market: String,
    pub potential_revenue: String,
    pub key_steps: Vec<String>,
    pub market_insight: String,
    pub risk_level: String,
    pub unique_value: String,
    pub target_audience: String,
}

impl BusinessIdea {
    /// True when every field except `id` matches.
    pub fn same_content(&self, other: &BusinessIdea) -> bool {
        BusinessIdea { id: other.id, ..self.clone() } == *other
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum FallbackReason {
    NotConfigured,
    Upstream(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "source", content = "reason")]
pub enum IdeaSource {
    Ai,
    Fallback(FallbackReason),
}

impl IdeaSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, IdeaSource::Fallback(_))
    }
}

/// Outcome of one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub ideas: Vec<BusinessIdea>,
    pub source: IdeaSource,
    pub generated_at: DateTime<Utc>,
}

impl Generation {
    pub fn new(ideas: Vec<BusinessIdea>, source: IdeaSource) -> Self {
        Self {
            ideas,
            source,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_idea(title: &str) -> BusinessIdea {
        BusinessIdea {
            id: Uuid::new_v4(),
            title: title.into(),
            description: "desc".into(),
            category: "Consulting".into(),
            startup_cost: "$200 - $800".into(),
            difficulty: 2,
            time_to_market: "2-4 months".into(),
            potential_revenue: "$1K - $8K monthly".into(),
            key_steps: vec!["a".into(); 5],
            market_insight: "insight".into(),
            risk_level: "Low".into(),
            unique_value: "value".into(),
            target_audience: "audience".into(),
        }
    }

    #[test]
    fn test_idea_serializes_camel_case() {
        let idea = make_idea("Test");
        let value = serde_json::to_value(&idea).unwrap();

        assert!(value.get("startupCost").is_some());
        assert!(value.get("keySteps").is_some());
        assert!(value.get("startup_cost").is_none());
    }

    #[test]
    fn test_same_content_ignores_id() {
        let a = make_idea("Same");
        let mut b = a.clone();
        b.id = Uuid::new_v4();
        assert!(a.same_content(&b));

        b.title = "Different".into();
        assert!(!a.same_content(&b));
    }

    #[test]
    fn test_generation_source_json() {
        let generation = Generation::new(
            vec![make_idea("One")],
            IdeaSource::Fallback(FallbackReason::Upstream("timeout".into())),
        );

        let json = serde_json::to_value(&generation).unwrap();
        assert_eq!(json["source"]["source"], "fallback");
        assert_eq!(json["source"]["reason"]["kind"], "upstream");
        assert_eq!(json["source"]["reason"]["detail"], "timeout");

        let parsed: Generation = serde_json::from_value(json).unwrap();
        assert!(parsed.source.is_fallback());
        assert_eq!(parsed.ideas.len(), 1);
    }
}
