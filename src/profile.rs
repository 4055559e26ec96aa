use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ProfileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Under1K,
    From1KTo5K,
    From5KTo25K,
    From25KTo100K,
    Over100K,
    Other,
}

/// Coarse budget bucket used by the revenue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

impl Budget {
    pub fn level(&self) -> BudgetLevel {
        match self {
            Budget::Under1K | Budget::From1KTo5K => BudgetLevel::Low,
            Budget::From5KTo25K => BudgetLevel::Medium,
            Budget::From25KTo100K | Budget::Over100K | Budget::Other => BudgetLevel::High,
        }
    }
}

impl From<&str> for Budget {
    fn from(label: &str) -> Self {
        match label.trim() {
            "Under $1,000" => Budget::Under1K,
            "$1,000 - $5,000" => Budget::From1KTo5K,
            "$5,000 - $25,000" => Budget::From5KTo25K,
            "$25,000 - $100,000" => Budget::From25KTo100K,
            "Over $100,000" => Budget::Over100K,
            _ => Budget::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expertise {
    CompleteBeginner,
    SomeBusinessKnowledge,
    ExperiencedProfessional,
    ManagementExperience,
    SerialEntrepreneur,
    DomainExpert,
    TechnicalSpecialist,
    CreativeProfessional,
    Other,
}

impl Expertise {
    /// Adjustment applied to an archetype's base difficulty.
    pub fn difficulty_modifier(&self) -> i8 {
        match self {
            Expertise::CompleteBeginner => -1,
            Expertise::ManagementExperience
            | Expertise::SerialEntrepreneur
            | Expertise::DomainExpert
            | Expertise::TechnicalSpecialist => 1,
            Expertise::SomeBusinessKnowledge
            | Expertise::ExperiencedProfessional
            | Expertise::CreativeProfessional
            | Expertise::Other => 0,
        }
    }
}

impl From<&str> for Expertise {
    fn from(label: &str) -> Self {
        let head = label
            .split(" - ")
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match head.as_str() {
            "complete beginner" => Expertise::CompleteBeginner,
            "some business knowledge" => Expertise::SomeBusinessKnowledge,
            "experienced professional" => Expertise::ExperiencedProfessional,
            "management experience" => Expertise::ManagementExperience,
            "serial entrepreneur" => Expertise::SerialEntrepreneur,
            "domain expert" => Expertise::DomainExpert,
            "technical specialist" => Expertise::TechnicalSpecialist,
            "creative professional" => Expertise::CreativeProfessional,
            _ => Expertise::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCommitment {
    PartTime,
    FullTime,
    Other,
}

impl TimeCommitment {
    pub fn is_full_time(&self) -> bool {
        matches!(self, TimeCommitment::FullTime)
    }
}

impl From<&str> for TimeCommitment {
    fn from(label: &str) -> Self {
        if label.contains("Full-time") {
            TimeCommitment::FullTime
        } else if label.contains("Part-time") {
            TimeCommitment::PartTime
        } else {
            TimeCommitment::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
    Other,
}

impl From<&str> for RiskTolerance {
    fn from(label: &str) -> Self {
        // Checked in this order; a label naming two tolerances takes the first.
        if label.contains("Conservative") {
            RiskTolerance::Conservative
        } else if label.contains("Moderate") {
            RiskTolerance::Moderate
        } else if label.contains("Aggressive") {
            RiskTolerance::Aggressive
        } else {
            RiskTolerance::Other
        }
    }
}

/// One wizard answer: the label exactly as given, and the tag it resolved to.
/// Serializes as the label, so profiles round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer<T> {
    label: String,
    tag: T,
}

impl<T> Answer<T>
where
    T: for<'a> From<&'a str>,
{
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let tag = <T as From<&str>>::from(label.as_str());
        Self { label, tag }
    }
}

impl<T> Answer<T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tag(&self) -> &T {
        &self.tag
    }
}

impl<T> From<&str> for Answer<T>
where
    T: for<'a> From<&'a str>,
{
    fn from(label: &str) -> Self {
        Answer::new(label)
    }
}

impl<T> From<String> for Answer<T>
where
    T: for<'a> From<&'a str>,
{
    fn from(label: String) -> Self {
        Answer::new(label)
    }
}

impl<T> fmt::Display for Answer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl<T> Serialize for Answer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

impl<'de, T> Deserialize<'de> for Answer<T>
where
    T: for<'a> From<&'a str>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Answer::new)
    }
}

/// Answers collected by the wizard. Categorical answers are resolved into
/// closed tags on construction; the labels themselves are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub budget: Answer<Budget>,
    pub expertise: Answer<Expertise>,
    pub time_commitment: Answer<TimeCommitment>,
    pub risk_tolerance: Answer<RiskTolerance>,
}

impl UserProfile {
    pub fn new(
        interests: Vec<String>,
        skills: Vec<String>,
        budget: impl Into<String>,
        expertise: impl Into<String>,
        time_commitment: impl Into<String>,
        risk_tolerance: impl Into<String>,
    ) -> Self {
        Self {
            interests,
            skills,
            budget: Answer::new(budget),
            expertise: Answer::new(expertise),
            time_commitment: Answer::new(time_commitment),
            risk_tolerance: Answer::new(risk_tolerance),
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.interests.is_empty() {
            return Err(ProfileError::MissingInterests);
        }
        if self.skills.is_empty() {
            return Err(ProfileError::MissingSkills);
        }
        Ok(())
    }

    pub fn primary_interest(&self) -> &str {
        self.interests.first().map(String::as_str).unwrap_or("Business")
    }

    pub fn primary_skill(&self) -> Option<&str> {
        self.skills.first().map(String::as_str)
    }

    pub fn secondary_skill(&self) -> Option<&str> {
        self.skills.get(1).map(String::as_str)
    }

    /// First skill that appears in `candidates`, in profile order.
    pub fn find_skill(&self, candidates: &[&str]) -> Option<&str> {
        self.skills
            .iter()
            .map(String::as_str)
            .find(|skill| candidates.contains(skill))
    }
}
