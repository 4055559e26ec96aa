use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::data::BusinessIdea;
use crate::error::LlmError;
use crate::profile::UserProfile;

pub const DEFAULT_TITLE: &str = "Untitled Business Idea";
pub const DEFAULT_DESCRIPTION: &str = "No description provided";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_STARTUP_COST: &str = "$1,000 - $5,000";
pub const DEFAULT_DIFFICULTY: u8 = 3;
pub const DEFAULT_TIME_TO_MARKET: &str = "3-6 months";
pub const DEFAULT_REVENUE: &str = "$5K - $20K monthly";
pub const DEFAULT_KEY_STEPS: [&str; 5] = [
    "Research market",
    "Develop product",
    "Launch business",
    "Scale operations",
    "Optimize growth",
];
pub const DEFAULT_MARKET_INSIGHT: &str = "Market showing positive growth trends";
pub const DEFAULT_RISK_LEVEL: &str = "Medium";
pub const DEFAULT_UNIQUE_VALUE: &str = "Leverages your unique skills and experience";
pub const DEFAULT_TARGET_AUDIENCE: &str = "Target customers in your area of expertise";

/// One prompt, one completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

/// Text-generation backend. Returns the model's raw text output.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;

    /// Succeeds when the backend accepts the request; the reply is not inspected.
    async fn ping(&self, request: CompletionRequest) -> Result<(), LlmError> {
        self.complete(request).await.map(|_| ())
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Messages-API client. The request timeout comes from `ServiceConfig`;
/// there are no retries.
pub struct AnthropicProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(config: &ServiceConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            model: config.model.clone(),
        })
    }
}

impl AnthropicProvider {
    /// POST one request; any non-2xx status is an error.
    async fn send(&self, request: CompletionRequest) -> Result<reqwest::Response, LlmError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let envelope: MessagesResponse = self.send(request).await?.json().await?;
        envelope
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .find(|text| !text.trim().is_empty())
            .ok_or_else(|| LlmError::Envelope("no text content in response".into()))
    }

    async fn ping(&self, request: CompletionRequest) -> Result<(), LlmError> {
        self.send(request).await.map(|_| ())
    }
}

/// Instruction sent upstream: the profile, the twelve fields, and one
/// worked example record.
pub fn build_prompt(profile: &UserProfile, count: usize) -> String {
    format!(
        r#"You are an expert business consultant and entrepreneur with deep knowledge of market trends, business models, and startup strategies. Generate {count} unique, personalized business ideas based on the following user profile:

**User Profile:**
- Interests: {interests}
- Skills: {skills}
- Budget: {budget}
- Experience Level: {expertise}
- Time Commitment: {time}
- Risk Tolerance: {risk}

**Requirements:**
1. Each idea should be realistic and actionable given the user's profile
2. Ideas should leverage the user's existing skills and interests
3. Consider the user's budget constraints and risk tolerance
4. Provide diverse business models (consulting, technology, services, products)
5. Include market validation and competitive analysis insights

**For each business idea, provide:**
- title: Compelling, specific business name/concept
- description: 2-3 sentences explaining the business concept and value proposition
- category: Primary business category (Technology, Consulting, Education, Services, etc.)
- startupCost: Realistic range based on user's budget (e.g., "$2,000 - $8,000")
- difficulty: Number from 1-5 (1=very easy, 5=very challenging)
- timeToMarket: Realistic timeline (e.g., "3-6 months")
- potentialRevenue: Monthly revenue potential (e.g., "$5K - $25K monthly")
- keySteps: 5 specific, actionable implementation steps
- marketInsight: Current market trends and opportunities (1-2 sentences)
- riskLevel: Low, Medium, or High based on market conditions
- uniqueValue: What makes this opportunity special for this user
- targetAudience: Specific customer segments to focus on

**Format your response as a valid JSON array with {count} business idea objects. Each object must have all the fields listed above. Ensure the JSON is properly formatted and can be parsed.**

Example format:
[
  {{
    "title": "AI-Powered Marketing Consultancy",
    "description": "Help small businesses leverage AI tools for marketing automation and customer insights...",
    "category": "Consulting",
    "startupCost": "$2,000 - $5,000",
    "difficulty": 3,
    "timeToMarket": "2-4 months",
    "potentialRevenue": "$8K - $30K monthly",
    "keySteps": ["Define service offerings", "Build AI tool stack", "Create case studies", "Launch marketing", "Scale operations"],
    "marketInsight": "AI marketing tools market growing 25% annually as SMBs seek competitive advantages",
    "riskLevel": "Medium",
    "uniqueValue": "Combines technical AI knowledge with marketing expertise for underserved SMB market",
    "targetAudience": "Small to medium businesses with 10-100 employees seeking marketing automation"
  }}
]

Generate {count} unique, high-quality business ideas now:"#,
        count = count,
        interests = profile.interests.join(", "),
        skills = profile.skills.join(", "),
        budget = profile.budget,
        expertise = profile.expertise,
        time = profile.time_commitment,
        risk = profile.risk_tolerance,
    )
}

/// Every complete JSON array that starts at some `[` in `text`, in order.
fn json_arrays(text: &str) -> impl Iterator<Item = Vec<Value>> + '_ {
    text.match_indices('[').filter_map(|(start, _)| {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(Value::Array(items))) => Some(items),
            _ => None,
        }
    })
}

/// Find the first JSON array in free text that holds at least one object.
/// Commentary around it, including bracketed footnotes like `[1]`, is ignored.
pub fn extract_array(text: &str) -> Option<Vec<Value>> {
    json_arrays(text).find(|items| items.iter().any(Value::is_object))
}

fn text_field(record: &Value, key: &str, default: &str) -> String {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn difficulty_field(record: &Value) -> u8 {
    record
        .get("difficulty")
        .and_then(|v| v.as_f64())
        .filter(|d| d.is_finite())
        .map(|d| d.round().clamp(1.0, 5.0) as u8)
        .unwrap_or(DEFAULT_DIFFICULTY)
}

fn key_steps_field(record: &Value) -> Vec<String> {
    let mut steps: Vec<String> = record
        .get("keySteps")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .take(DEFAULT_KEY_STEPS.len())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    // Pad short lists so every idea carries exactly five steps.
    let have = steps.len();
    steps.extend(DEFAULT_KEY_STEPS[have..].iter().map(|s| s.to_string()));
    steps
}

/// Coerce one parsed record into a complete idea. Never fails; each missing
/// or malformed field takes its default.
pub fn normalize_idea(record: &Value) -> BusinessIdea {
    BusinessIdea {
        id: Uuid::new_v4(),
        title: text_field(record, "title", DEFAULT_TITLE),
        description: text_field(record, "description", DEFAULT_DESCRIPTION),
        category: text_field(record, "category", DEFAULT_CATEGORY),
        startup_cost: text_field(record, "startupCost", DEFAULT_STARTUP_COST),
        difficulty: difficulty_field(record),
        time_to_market: text_field(record, "timeToMarket", DEFAULT_TIME_TO_MARKET),
        potential_revenue: text_field(record, "potentialRevenue", DEFAULT_REVENUE),
        key_steps: key_steps_field(record),
        market_insight: text_field(record, "marketInsight", DEFAULT_MARKET_INSIGHT),
        risk_level: text_field(record, "riskLevel", DEFAULT_RISK_LEVEL),
        unique_value: text_field(record, "uniqueValue", DEFAULT_UNIQUE_VALUE),
        target_audience: text_field(record, "targetAudience", DEFAULT_TARGET_AUDIENCE),
    }
}

/// Parse model output into ideas: locate the idea array, normalize every
/// element. An output whose only array is `[]` is reported as empty.
pub fn parse_generated_ideas(text: &str) -> Result<Vec<BusinessIdea>, LlmError> {
    match extract_array(text) {
        Some(records) => Ok(records.iter().map(normalize_idea).collect()),
        None if json_arrays(text).any(|items| items.is_empty()) => Err(LlmError::EmptyIdeas),
        None => Err(LlmError::NoArray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(
            vec!["Technology".into(), "Finance".into()],
            vec!["Programming".into(), "Marketing".into()],
            "$5,000 - $25,000",
            "Domain expert - Deep industry knowledge",
            "Full-time (40+ hours)",
            "Aggressive - Higher risk, higher potential",
        )
    }

    #[test]
    fn test_prompt_embeds_profile_and_field_names() {
        let prompt = build_prompt(&profile(), 4);

        assert!(prompt.contains("- Interests: Technology, Finance"));
        assert!(prompt.contains("- Skills: Programming, Marketing"));
        assert!(prompt.contains("- Budget: $5,000 - $25,000"));
        assert!(prompt.contains("- Experience Level: Domain expert - Deep industry knowledge"));
        assert!(prompt.contains("- Time Commitment: Full-time (40+ hours)"));
        assert!(prompt.contains("- Risk Tolerance: Aggressive - Higher risk, higher potential"));
        assert!(prompt.contains("Generate 4 unique"));
        for field in [
            "title",
            "description",
            "category",
            "startupCost",
            "difficulty",
            "timeToMarket",
            "potentialRevenue",
            "keySteps",
            "marketInsight",
            "riskLevel",
            "uniqueValue",
            "targetAudience",
        ] {
            assert!(prompt.contains(&format!("\"{}\":", field)), "example lacks {}", field);
        }
    }

    #[test]
    fn test_prompt_echoes_labels_verbatim() {
        let profile = UserProfile::new(
            vec!["Music".into()],
            vec!["Teaching".into()],
            "about $3k",
            "Domain expert",
            "Full-time (20-30 hours)",
            "Moderate",
        );
        let prompt = build_prompt(&profile, 4);

        assert!(prompt.contains("- Budget: about $3k\n"));
        assert!(prompt.contains("- Experience Level: Domain expert\n"));
        assert!(prompt.contains("- Time Commitment: Full-time (20-30 hours)\n"));
        assert!(prompt.contains("- Risk Tolerance: Moderate\n"));
    }

    #[test]
    fn test_prompt_example_is_valid_json() {
        let prompt = build_prompt(&profile(), 4);
        let example = extract_array(&prompt).expect("example array");
        assert_eq!(example.len(), 1);
        assert_eq!(example[0]["difficulty"], 3);
    }

    #[test]
    fn test_extract_array_skips_commentary() {
        let text = "Sure! [Note: see below]\n[{\"title\": \"A\"}, {\"title\": \"B\"}]\nHope this helps [1]";
        let items = extract_array(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "A");
    }

    #[test]
    fn test_extract_array_none_without_brackets() {
        assert!(extract_array("I cannot help with that.").is_none());
        assert!(extract_array("[{\"title\": \"unterminated\"").is_none());
    }

    #[test]
    fn test_extract_array_skips_footnote_arrays() {
        let text = "Based on [1] your profile, here are ideas:\n[{\"title\":\"Real Idea\",\"difficulty\":2}]";
        let items = extract_array(text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Real Idea");

        let ideas = parse_generated_ideas(text).unwrap();
        assert_eq!(ideas[0].title, "Real Idea");
        assert_eq!(ideas[0].difficulty, 2);
    }

    #[test]
    fn test_footnotes_alone_are_not_ideas() {
        assert!(extract_array("See [1] and [\"a\", \"b\"].").is_none());
        assert!(matches!(
            parse_generated_ideas("See [1] and [2, 3]."),
            Err(LlmError::NoArray)
        ));
    }

    #[test]
    fn test_normalize_missing_difficulty_defaults_to_three() {
        let idea = normalize_idea(&serde_json::json!({ "title": "Bakery" }));
        assert_eq!(idea.title, "Bakery");
        assert_eq!(idea.difficulty, 3);
    }

    #[test]
    fn test_normalize_wrong_types_and_blanks() {
        let idea = normalize_idea(&serde_json::json!({
            "title": "   ",
            "category": 42,
            "difficulty": "hard",
            "keySteps": "do things",
            "riskLevel": null
        }));

        assert_eq!(idea.title, DEFAULT_TITLE);
        assert_eq!(idea.category, DEFAULT_CATEGORY);
        assert_eq!(idea.difficulty, DEFAULT_DIFFICULTY);
        assert_eq!(idea.key_steps, DEFAULT_KEY_STEPS.map(String::from).to_vec());
        assert_eq!(idea.risk_level, DEFAULT_RISK_LEVEL);
        assert_eq!(idea.target_audience, DEFAULT_TARGET_AUDIENCE);
    }

    #[test]
    fn test_normalize_clamps_difficulty() {
        assert_eq!(normalize_idea(&serde_json::json!({ "difficulty": 9 })).difficulty, 5);
        assert_eq!(normalize_idea(&serde_json::json!({ "difficulty": 0 })).difficulty, 1);
        assert_eq!(normalize_idea(&serde_json::json!({ "difficulty": 2.4 })).difficulty, 2);
    }

    #[test]
    fn test_key_steps_padded_and_truncated() {
        let short = normalize_idea(&serde_json::json!({ "keySteps": ["Find customers", 7] }));
        assert_eq!(short.key_steps.len(), 5);
        assert_eq!(short.key_steps[0], "Find customers");
        assert_eq!(short.key_steps[1], "Develop product");

        let long = normalize_idea(&serde_json::json!({
            "keySteps": ["1", "2", "3", "4", "5", "6", "7"]
        }));
        assert_eq!(long.key_steps, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_non_object_element_becomes_default_record() {
        let ideas = parse_generated_ideas("[{\"title\": \"Kept\"}, \"just a string\"]").unwrap();
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].title, "Kept");
        assert_eq!(ideas[1].title, DEFAULT_TITLE);
        assert_eq!(ideas[1].key_steps.len(), 5);
    }

    #[test]
    fn test_parse_rejects_empty_array() {
        assert!(matches!(
            parse_generated_ideas("Here you go: []"),
            Err(LlmError::EmptyIdeas)
        ));
        assert!(matches!(
            parse_generated_ideas("nothing"),
            Err(LlmError::NoArray)
        ));
    }

    #[test]
    fn test_messages_request_shape() {
        let body = MessagesRequest {
            model: "m",
            max_tokens: 4000,
            temperature: Some(0.7),
            messages: vec![Message {
                role: "user",
                content: "hi",
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["max_tokens"], 4000);
        assert_eq!(json["messages"][0]["role"], "user");

        let probe = MessagesRequest {
            model: "m",
            max_tokens: 10,
            temperature: None,
            messages: vec![],
        };
        assert!(serde_json::to_value(&probe).unwrap().get("temperature").is_none());
    }

    #[test]
    fn test_envelope_text_extraction_shape() {
        let envelope: MessagesResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_1",
            "content": [{ "type": "text", "text": "[{\"title\": \"X\"}]" }],
            "stop_reason": "end_turn"
        }))
        .unwrap();
        assert_eq!(envelope.content.len(), 1);
        assert!(envelope.content[0].text.as_deref().unwrap().starts_with('['));
    }
}
