//! Lookup tables behind the offline idea templates. Every function here is a
//! pure mapping from categorical tags to display strings or numbers.

use crate::profile::{Budget, BudgetLevel, Expertise, RiskTolerance, TimeCommitment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTier {
    Low,
    LowMedium,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    Low,
    Medium,
    MediumHigh,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    LowMedium,
    Medium,
    MediumHigh,
    High,
}

/// Business-type tag for the revenue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueModel {
    Consulting,
    Platform,
    Education,
    Service,
    Saas,
}

/// Business-type tag for the market insight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Consulting,
    Technology,
    Education,
    Services,
    Automation,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Consulting => "consulting",
            InsightKind::Technology => "technology",
            InsightKind::Education => "education",
            InsightKind::Services => "services",
            InsightKind::Automation => "automation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceModel {
    B2b,
    B2c,
    B2b2c,
}

pub const DEFAULT_STARTUP_COST: &str = "$2,000 - $10,000";

pub fn startup_cost(budget: &Budget, tier: CostTier) -> &'static str {
    use CostTier::*;
    match (budget, tier) {
        (Budget::Under1K, Low) => "$200 - $800",
        (Budget::Under1K, LowMedium) => "$500 - $1,000",
        (Budget::Under1K, Medium) => "$800 - $1,200",
        (Budget::Under1K, High) => "$1,000+",
        (Budget::From1KTo5K, Low) => "$500 - $2,000",
        (Budget::From1KTo5K, LowMedium) => "$1,000 - $3,000",
        (Budget::From1KTo5K, Medium) => "$2,000 - $5,000",
        (Budget::From1KTo5K, High) => "$3,000 - $7,000",
        (Budget::From5KTo25K, Low) => "$2,000 - $8,000",
        (Budget::From5KTo25K, LowMedium) => "$5,000 - $12,000",
        (Budget::From5KTo25K, Medium) => "$8,000 - $20,000",
        (Budget::From5KTo25K, High) => "$15,000 - $30,000",
        (Budget::From25KTo100K, Low) => "$10,000 - $30,000",
        (Budget::From25KTo100K, LowMedium) => "$20,000 - $50,000",
        (Budget::From25KTo100K, Medium) => "$40,000 - $80,000",
        (Budget::From25KTo100K, High) => "$60,000 - $120,000",
        (Budget::Over100K, Low) => "$25,000 - $75,000",
        (Budget::Over100K, LowMedium) => "$50,000 - $100,000",
        (Budget::Over100K, Medium) => "$75,000 - $150,000",
        (Budget::Over100K, High) => "$100,000 - $250,000",
        (Budget::Other, _) => DEFAULT_STARTUP_COST,
    }
}

/// Base difficulty plus the expertise modifier, clamped to 1..=5.
pub fn difficulty(expertise: &Expertise, tier: DifficultyTier) -> u8 {
    let base: i8 = match tier {
        DifficultyTier::Low => 2,
        DifficultyTier::Medium => 3,
        DifficultyTier::MediumHigh | DifficultyTier::High => 4,
    };
    (base + expertise.difficulty_modifier()).clamp(1, 5) as u8
}

pub fn revenue(budget: &Budget, time: &TimeCommitment, model: RevenueModel) -> &'static str {
    use BudgetLevel::*;
    let full_time = time.is_full_time();
    let pick = |full: &'static str, part: &'static str| if full_time { full } else { part };

    match (model, budget.level()) {
        (RevenueModel::Consulting, Low) => pick("$3K - $15K monthly", "$1K - $8K monthly"),
        (RevenueModel::Consulting, Medium) => pick("$8K - $35K monthly", "$3K - $18K monthly"),
        (RevenueModel::Consulting, High) => pick("$15K - $60K monthly", "$6K - $30K monthly"),
        (RevenueModel::Platform, Low) => pick("$2K - $20K monthly", "$500 - $8K monthly"),
        (RevenueModel::Platform, Medium) => pick("$5K - $50K monthly", "$2K - $25K monthly"),
        (RevenueModel::Platform, High) => pick("$10K - $100K monthly", "$4K - $50K monthly"),
        (RevenueModel::Education, Low) => pick("$2K - $12K monthly", "$800 - $5K monthly"),
        (RevenueModel::Education, Medium) => pick("$5K - $30K monthly", "$2K - $15K monthly"),
        (RevenueModel::Education, High) => pick("$10K - $60K monthly", "$4K - $30K monthly"),
        (RevenueModel::Service, Low) => pick("$4K - $20K monthly", "$1.5K - $10K monthly"),
        (RevenueModel::Service, Medium) => pick("$8K - $40K monthly", "$3K - $20K monthly"),
        (RevenueModel::Service, High) => pick("$15K - $75K monthly", "$6K - $35K monthly"),
        (RevenueModel::Saas, Low) => pick("$1K - $15K monthly", "$300 - $6K monthly"),
        (RevenueModel::Saas, Medium) => pick("$3K - $40K monthly", "$1K - $20K monthly"),
        (RevenueModel::Saas, High) => pick("$8K - $80K monthly", "$3K - $40K monthly"),
    }
}

/// Unrecognized tolerances are scored as Moderate.
pub fn risk_level(tolerance: &RiskTolerance, tier: RiskTier) -> &'static str {
    use RiskTier::*;
    match tolerance {
        RiskTolerance::Conservative => match tier {
            Low | LowMedium => "Low",
            Medium => "Low-Medium",
            MediumHigh | High => "Medium",
        },
        RiskTolerance::Moderate | RiskTolerance::Other => match tier {
            Low => "Low",
            LowMedium => "Low-Medium",
            Medium => "Medium",
            MediumHigh => "Medium-High",
            High => "High",
        },
        RiskTolerance::Aggressive => match tier {
            Low => "Low-Medium",
            LowMedium => "Medium",
            Medium => "Medium-High",
            MediumHigh | High => "High",
        },
    }
}

pub fn market_insight(interest: &str, kind: InsightKind) -> String {
    use InsightKind::*;
    let known = match (interest, kind) {
        ("Technology", Consulting) => "Tech consulting market growing 8% annually as businesses accelerate digital transformation",
        ("Technology", Technology) => "B2B software platforms seeing 25% annual growth with increasing demand for specialized solutions",
        ("Technology", Education) => "Tech education market valued at $85B with 15% annual growth driven by skill gaps",
        ("Technology", Services) => "Technology services market expanding rapidly as companies outsource specialized functions",
        ("Technology", Automation) => "Business automation market growing 12% annually as companies seek efficiency gains",
        ("Health & Wellness", Consulting) => "Wellness consulting growing 12% annually as corporate wellness programs expand",
        ("Health & Wellness", Technology) => "Digital health platforms attracting $14B+ in annual investment",
        ("Health & Wellness", Education) => "Health education market growing 9% annually with focus on preventive care",
        ("Health & Wellness", Services) => "Wellness services market valued at $639B with strong consumer demand",
        ("Health & Wellness", Automation) => "Health tech automation reducing costs by 20-30% while improving outcomes",
        ("Education", Consulting) => "EdTech consulting growing 18% annually as institutions modernize",
        ("Education", Technology) => "Online learning platforms market expected to reach $350B by 2025",
        ("Education", Education) => "Professional development market growing 13% annually",
        ("Education", Services) => "Educational services seeing increased demand for personalized learning",
        ("Education", Automation) => "AI in education market growing 45% annually with focus on personalization",
        ("Finance", Consulting) => "Financial consulting growing 7% annually driven by regulatory changes",
        ("Finance", Technology) => "FinTech market attracting $100B+ in annual investment",
        ("Finance", Education) => "Financial literacy education market expanding as awareness grows",
        ("Finance", Services) => "Financial services digitization creating new opportunities",
        ("Finance", Automation) => "Financial automation reducing processing costs by 40-60%",
        _ => "",
    };

    if !known.is_empty() {
        known.to_string()
    } else if interest.trim().is_empty() {
        "Market showing positive growth trends".to_string()
    } else {
        format!(
            "{} sector experiencing growth with increasing demand for specialized {} solutions",
            interest,
            kind.as_str()
        )
    }
}

pub fn target_audience(interest: &str, model: AudienceModel) -> String {
    use AudienceModel::*;
    let known = match (interest, model) {
        ("Technology", B2b) => "Tech companies, startups, and digital agencies seeking specialized expertise",
        ("Technology", B2c) => "Tech professionals, developers, and digital enthusiasts",
        ("Technology", B2b2c) => "Technology service providers and their end customers",
        ("Health & Wellness", B2b) => "Healthcare providers, wellness companies, and corporate wellness programs",
        ("Health & Wellness", B2c) => "Health-conscious individuals, fitness enthusiasts, and wellness seekers",
        ("Health & Wellness", B2b2c) => "Healthcare organizations and their patients/members",
        ("Education", B2b) => "Educational institutions, training companies, and corporate learning departments",
        ("Education", B2c) => "Students, professionals, and lifelong learners seeking skill development",
        ("Education", B2b2c) => "Educational organizations and their students/employees",
        ("Finance", B2b) => "Financial institutions, accounting firms, and business owners",
        ("Finance", B2c) => "Individual investors, small business owners, and financial planning seekers",
        ("Finance", B2b2c) => "Financial service providers and their clients",
        _ => "",
    };

    if !known.is_empty() {
        known.to_string()
    } else if interest.trim().is_empty() {
        "Target customers in your area of expertise".to_string()
    } else {
        format!(
            "{} professionals, businesses, and enthusiasts seeking specialized solutions",
            interest
        )
    }
}
