use uuid::Uuid;

use crate::data::BusinessIdea;
use crate::error::ProfileError;
use crate::profile::UserProfile;
use crate::scoring::{
    difficulty, market_insight, revenue, risk_level, startup_cost, target_audience,
    AudienceModel, CostTier, DifficultyTier, InsightKind, RevenueModel, RiskTier,
};

/// Skills whose holders get the automated variant of the service idea.
const AUTOMATABLE_SKILLS: [&str; 4] = ["Technology", "Finance", "Marketing", "Data Analysis"];

const TECH_SKILLS: [&str; 5] = [
    "Programming",
    "Web Development",
    "Mobile Development",
    "Data Analysis",
    "UX/UI Design",
];

const TEACHING_SKILLS: [&str; 4] = ["Teaching", "Content Creation", "Public Speaking", "Writing"];

/// A fixed business-model template. `build` must be a pure function of the
/// profile apart from the fresh id.
pub trait Archetype: Send + Sync {
    fn name(&self) -> &str;
    fn build(&self, profile: &UserProfile) -> BusinessIdea;
}

fn steps(items: [&str; 5]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub struct ConsultingArchetype;

impl Archetype for ConsultingArchetype {
    fn name(&self) -> &str {
        "consulting"
    }

    fn build(&self, profile: &UserProfile) -> BusinessIdea {
        let interest = profile.primary_interest();
        let skill = profile.primary_skill().unwrap_or("Consulting");
        let secondary = profile.secondary_skill().unwrap_or("Strategy");

        BusinessIdea {
            id: Uuid::new_v4(),
            title: format!("{} {} Consultancy", interest, skill),
            description: format!(
                "Launch a specialized consulting firm that combines your expertise in {} and {} to help businesses in the {} sector optimize their operations, increase efficiency, and accelerate growth through data-driven strategies and proven methodologies.",
                skill,
                secondary,
                interest.to_lowercase()
            ),
            category: "Consulting".into(),
            startup_cost: startup_cost(profile.budget.tag(), CostTier::Low).into(),
            difficulty: difficulty(profile.expertise.tag(), DifficultyTier::Medium),
            time_to_market: "2-4 months".into(),
            potential_revenue: revenue(
                profile.budget.tag(),
                profile.time_commitment.tag(),
                RevenueModel::Consulting,
            )
            .into(),
            key_steps: steps([
                "Define your niche and service offerings",
                "Build a professional brand and online presence",
                "Network and establish industry connections",
                "Create case studies and testimonials",
                "Scale through referrals and partnerships",
            ]),
            market_insight: market_insight(interest, InsightKind::Consulting),
            risk_level: risk_level(profile.risk_tolerance.tag(), RiskTier::Low).into(),
            unique_value: format!(
                "Combines deep {} expertise with {} industry knowledge to deliver specialized solutions that generic consultants cannot provide",
                skill, interest
            ),
            target_audience: target_audience(interest, AudienceModel::B2b),
        }
    }
}

pub struct PlatformArchetype;

impl Archetype for PlatformArchetype {
    fn name(&self) -> &str {
        "platform"
    }

    fn build(&self, profile: &UserProfile) -> BusinessIdea {
        let interest = profile.primary_interest();
        let tech_skill = profile.find_skill(&TECH_SKILLS).unwrap_or("Technology");

        BusinessIdea {
            id: Uuid::new_v4(),
            title: format!("{} Digital Marketplace", interest),
            description: format!(
                "Create an innovative online platform that connects {} professionals with clients, featuring advanced matching algorithms, integrated payment systems, and community-driven features. Monetize through transaction fees, premium memberships, and value-added services.",
                interest.to_lowercase()
            ),
            category: "Technology".into(),
            startup_cost: startup_cost(profile.budget.tag(), CostTier::Medium).into(),
            difficulty: difficulty(profile.expertise.tag(), DifficultyTier::High),
            time_to_market: "6-12 months".into(),
            potential_revenue: revenue(
                profile.budget.tag(),
                profile.time_commitment.tag(),
                RevenueModel::Platform,
            )
            .into(),
            key_steps: steps([
                "Conduct market research and validate demand",
                "Design user experience and technical architecture",
                "Develop MVP with core features",
                "Launch beta and gather user feedback",
                "Scale platform and add advanced features",
            ]),
            market_insight: market_insight(interest, InsightKind::Technology),
            risk_level: risk_level(profile.risk_tolerance.tag(), RiskTier::MediumHigh).into(),
            unique_value: format!(
                "Leverages {} expertise to create a specialized platform that addresses specific pain points in the {} market",
                tech_skill, interest
            ),
            target_audience: target_audience(interest, AudienceModel::B2b2c),
        }
    }
}

pub struct EducationArchetype;

impl Archetype for EducationArchetype {
    fn name(&self) -> &str {
        "education"
    }

    fn build(&self, profile: &UserProfile) -> BusinessIdea {
        let interest = profile.primary_interest();
        let teaching_skill = profile
            .find_skill(&TEACHING_SKILLS)
            .or_else(|| profile.primary_skill())
            .unwrap_or("Teaching");

        BusinessIdea {
            id: Uuid::new_v4(),
            title: format!("{} Mastery Academy", interest),
            description: format!(
                "Develop a comprehensive online education platform offering courses, workshops, and certification programs in {}. Combine your {} skills with cutting-edge learning technologies to create engaging, results-driven educational experiences for professionals and enthusiasts.",
                interest.to_lowercase(),
                teaching_skill.to_lowercase()
            ),
            category: "Education".into(),
            startup_cost: startup_cost(profile.budget.tag(), CostTier::LowMedium).into(),
            difficulty: difficulty(profile.expertise.tag(), DifficultyTier::Medium),
            time_to_market: "3-6 months".into(),
            potential_revenue: revenue(
                profile.budget.tag(),
                profile.time_commitment.tag(),
                RevenueModel::Education,
            )
            .into(),
            key_steps: steps([
                "Identify learning gaps and curriculum opportunities",
                "Create high-quality educational content",
                "Build learning platform and user experience",
                "Launch with pilot group and gather feedback",
                "Scale through marketing and partnerships",
            ]),
            market_insight: market_insight(interest, InsightKind::Education),
            risk_level: risk_level(profile.risk_tolerance.tag(), RiskTier::LowMedium).into(),
            unique_value: format!(
                "Combines {} expertise with {} knowledge to deliver practical, actionable learning experiences",
                teaching_skill, interest
            ),
            target_audience: target_audience(interest, AudienceModel::B2c),
        }
    }
}

/// Automated variant when the primary skill is automatable, premium otherwise.
pub struct ServiceArchetype;

impl ServiceArchetype {
    pub fn is_automated(profile: &UserProfile) -> bool {
        profile
            .primary_skill()
            .is_some_and(|skill| AUTOMATABLE_SKILLS.contains(&skill))
    }
}

impl Archetype for ServiceArchetype {
    fn name(&self) -> &str {
        "service"
    }

    fn build(&self, profile: &UserProfile) -> BusinessIdea {
        let interest = profile.primary_interest();
        let skill = profile.primary_skill().unwrap_or("Service");
        let automated = Self::is_automated(profile);

        let pick = |a: &'static str, p: &'static str| if automated { a } else { p };

        BusinessIdea {
            id: Uuid::new_v4(),
            title: format!("{} {} Solutions", pick("Automated", "Premium"), interest),
            description: format!(
                "Build a {} service business that solves critical problems in the {} industry. Leverage your {} skills to create {} that deliver measurable results for clients.",
                pick("technology-driven", "high-touch"),
                interest.to_lowercase(),
                skill.to_lowercase(),
                pick("scalable, automated solutions", "personalized, premium services")
            ),
            category: pick("Technology", "Services").into(),
            startup_cost: startup_cost(
                profile.budget.tag(),
                if automated { CostTier::Medium } else { CostTier::Low },
            )
            .into(),
            difficulty: difficulty(
                profile.expertise.tag(),
                if automated {
                    DifficultyTier::High
                } else {
                    DifficultyTier::Medium
                },
            ),
            time_to_market: pick("4-8 months", "2-4 months").into(),
            potential_revenue: revenue(
                profile.budget.tag(),
                profile.time_commitment.tag(),
                if automated {
                    RevenueModel::Saas
                } else {
                    RevenueModel::Service
                },
            )
            .into(),
            key_steps: steps([
                "Identify high-value problem to solve",
                pick("Develop automated solution", "Design service delivery process"),
                "Test with pilot customers",
                "Refine offering based on feedback",
                pick(
                    "Scale through automation",
                    "Grow through referrals and team expansion",
                ),
            ]),
            market_insight: market_insight(
                interest,
                if automated {
                    InsightKind::Automation
                } else {
                    InsightKind::Services
                },
            ),
            risk_level: risk_level(
                profile.risk_tolerance.tag(),
                if automated { RiskTier::Medium } else { RiskTier::Low },
            )
            .into(),
            unique_value: format!(
                "Applies {} expertise to deliver {} solutions in the {} market",
                skill,
                pick("scalable, efficient", "personalized, high-quality"),
                interest
            ),
            target_audience: target_audience(interest, AudienceModel::B2b),
        }
    }
}

/// Deterministic offline generator: one idea per archetype, in fixed order.
pub struct FallbackGenerator {
    archetypes: Vec<Box<dyn Archetype>>,
}

impl FallbackGenerator {
    pub fn new() -> Self {
        Self {
            archetypes: vec![
                Box::new(ConsultingArchetype),
                Box::new(PlatformArchetype),
                Box::new(EducationArchetype),
                Box::new(ServiceArchetype),
            ],
        }
    }

    pub fn generate(&self, profile: &UserProfile) -> Result<Vec<BusinessIdea>, ProfileError> {
        profile.validate()?;

        let ideas: Vec<BusinessIdea> = self
            .archetypes
            .iter()
            .map(|archetype| {
                let idea = archetype.build(profile);
                tracing::debug!(
                    archetype = archetype.name(),
                    title = %idea.title,
                    "Built template idea"
                );
                idea
            })
            .collect();

        Ok(ideas)
    }
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Answer;

    fn scenario_profile() -> UserProfile {
        UserProfile::new(
            vec!["Technology".into()],
            vec!["Programming".into(), "Marketing".into()],
            "$5,000 - $25,000",
            "Domain expert - Deep industry knowledge",
            "Full-time (40+ hours)",
            "Aggressive - Higher risk, higher potential",
        )
    }

    fn beginner_profile(skill: &str) -> UserProfile {
        UserProfile::new(
            vec!["Pet Care".into()],
            vec![skill.into()],
            "Under $1,000",
            "Complete beginner - New to business",
            "Part-time (10-20 hours)",
            "Conservative - Lower risk, steady returns",
        )
    }

    #[test]
    fn test_generates_four_in_archetype_order() {
        let ideas = FallbackGenerator::new().generate(&scenario_profile()).unwrap();

        assert_eq!(ideas.len(), 4);
        assert_eq!(ideas[0].category, "Consulting");
        assert_eq!(ideas[1].title, "Technology Digital Marketplace");
        assert_eq!(ideas[2].category, "Education");
        assert_eq!(ideas[3].title, "Premium Technology Solutions");
    }

    #[test]
    fn test_deterministic_except_id() {
        let generator = FallbackGenerator::new();
        let profile = scenario_profile();

        let first = generator.generate(&profile).unwrap();
        let second = generator.generate(&profile).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert!(a.same_content(b));
        }
    }

    #[test]
    fn test_ids_unique_within_batch() {
        let ideas = FallbackGenerator::new().generate(&scenario_profile()).unwrap();
        let mut ids: Vec<_> = ideas.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_platform_scenario() {
        let ideas = FallbackGenerator::new().generate(&scenario_profile()).unwrap();
        let platform = &ideas[1];

        assert_eq!(platform.category, "Technology");
        assert_eq!(platform.difficulty, 5);
        assert_eq!(platform.startup_cost, "$8,000 - $20,000");
        assert_eq!(platform.risk_level, "High");
        assert_eq!(platform.potential_revenue, "$5K - $50K monthly");
        assert_eq!(
            platform.unique_value,
            "Leverages Programming expertise to create a specialized platform that addresses specific pain points in the Technology market"
        );
        assert_eq!(
            platform.target_audience,
            "Technology service providers and their end customers"
        );
    }

    #[test]
    fn test_consulting_lowest_budget_cost() {
        let ideas = FallbackGenerator::new()
            .generate(&beginner_profile("Sales"))
            .unwrap();
        assert_eq!(ideas[0].startup_cost, "$200 - $800");
        assert_eq!(ideas[0].difficulty, 2);
        assert_eq!(ideas[0].title, "Pet Care Sales Consultancy");
        assert!(ideas[0].description.contains("Sales and Strategy"));
    }

    #[test]
    fn test_service_automated_branch() {
        let ideas = FallbackGenerator::new()
            .generate(&beginner_profile("Finance"))
            .unwrap();
        let service = &ideas[3];

        assert_eq!(service.title, "Automated Pet Care Solutions");
        assert_eq!(service.category, "Technology");
        assert_eq!(service.startup_cost, "$800 - $1,200");
        assert_eq!(service.difficulty, 3);
        assert_eq!(service.potential_revenue, "$300 - $6K monthly");
        assert_eq!(service.risk_level, "Low-Medium");
        assert_eq!(service.key_steps[1], "Develop automated solution");
        assert_eq!(service.key_steps[4], "Scale through automation");
    }

    #[test]
    fn test_service_premium_branch() {
        let ideas = FallbackGenerator::new()
            .generate(&beginner_profile("Photography"))
            .unwrap();
        let service = &ideas[3];

        assert_eq!(service.category, "Services");
        assert_eq!(service.time_to_market, "2-4 months");
        assert_eq!(service.key_steps[1], "Design service delivery process");
        assert_eq!(service.risk_level, "Low");
    }

    #[test]
    fn test_education_uses_teaching_skill() {
        let mut profile = beginner_profile("Sales");
        profile.skills.push("Public Speaking".into());

        let ideas = FallbackGenerator::new().generate(&profile).unwrap();
        assert!(ideas[2].description.contains("public speaking skills"));
        assert!(ideas[2].unique_value.starts_with("Combines Public Speaking expertise"));
    }

    #[test]
    fn test_every_record_has_five_steps_and_bounded_difficulty() {
        let mut profile = scenario_profile();
        for expertise in ["Complete beginner", "Serial entrepreneur", "Unlisted"] {
            profile.expertise = Answer::new(expertise);
            for idea in FallbackGenerator::new().generate(&profile).unwrap() {
                assert_eq!(idea.key_steps.len(), 5);
                assert!((1..=5).contains(&idea.difficulty));
            }
        }
    }

    #[test]
    fn test_empty_profile_rejected() {
        let mut profile = scenario_profile();
        profile.skills.clear();
        assert_eq!(
            FallbackGenerator::new().generate(&profile).unwrap_err(),
            ProfileError::MissingSkills
        );
    }
}
