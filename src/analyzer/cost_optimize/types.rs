//! Core types for cloud cost optimization.
//!
//! These types describe a project profile, the cost estimate and usage pattern
//! derived from it, the candidate and ranked recommendations, and the final
//! optimization report.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Implements `as_str` and `Display` for a closed label enum.
macro_rules! impl_labels {
    ($ty:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Get the string representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

// ============================================================================
// Profile Enumerations
// ============================================================================

/// Declared traffic shape of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficPattern {
    Steady,
    #[serde(alias = "peak-hours")]
    PeakHours,
    Bursty,
    Seasonal,
}

impl TrafficPattern {
    /// Parse a traffic pattern (case-insensitive, `-` and `_` interchangeable).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "steady" => Some(Self::Steady),
            "peak_hours" => Some(Self::PeakHours),
            "bursty" => Some(Self::Bursty),
            "seasonal" => Some(Self::Seasonal),
            _ => None,
        }
    }
}

impl_labels!(TrafficPattern {
    Steady => "steady",
    PeakHours => "peak_hours",
    Bursty => "bursty",
    Seasonal => "seasonal",
});

/// Supported cloud regions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Region {
    #[default]
    #[serde(rename = "ap-south-1")]
    ApSouth1,
    #[serde(rename = "us-east-1")]
    UsEast1,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::ApSouth1,
        Region::UsEast1,
        Region::EuWest1,
        Region::ApSoutheast1,
    ];

    /// Parse a region code.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == code.trim())
    }

    /// Human-readable location of the region.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ApSouth1 => "Mumbai",
            Self::UsEast1 => "N. Virginia",
            Self::EuWest1 => "Ireland",
            Self::ApSoutheast1 => "Singapore",
        }
    }
}

impl_labels!(Region {
    ApSouth1 => "ap-south-1",
    UsEast1 => "us-east-1",
    EuWest1 => "eu-west-1",
    ApSoutheast1 => "ap-southeast-1",
});

// ============================================================================
// Project Profile
// ============================================================================

/// Technology stack of the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    pub backend: String,
    pub frontend: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

/// Infrastructure the project currently runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentInfrastructure {
    /// Number of EC2 instances
    pub ec2_instances: u32,
    /// EC2 instance type (e.g., "t3.medium")
    pub instance_type: String,
    /// RDS instance type, if a managed database is provisioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rds: Option<String>,
    #[serde(default)]
    pub load_balancer: bool,
    #[serde(default)]
    pub cdn: bool,
    /// Object storage size in GB (default: 100)
    #[serde(default = "default_storage_gb")]
    pub storage_gb: Option<u64>,
    /// Monitoring level ("basic" or "advanced")
    #[serde(default = "default_monitoring")]
    pub monitoring: String,
}

fn default_storage_gb() -> Option<u64> {
    Some(100)
}

fn default_monitoring() -> String {
    "basic".to_string()
}

/// Immutable description of a workload to optimize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub project_name: String,
    pub monthly_budget_inr: u64,
    pub expected_users: u64,
    pub traffic_pattern: TrafficPattern,
    #[serde(default)]
    pub region: Region,
    pub tech_stack: TechStack,
    #[serde(default)]
    pub features: Vec<String>,
    pub current_infra: CurrentInfrastructure,
}

impl ProjectProfile {
    /// Validate constraints that the type system does not already enforce.
    ///
    /// Budget, user count, instance count and storage are unsigned, and region
    /// and traffic pattern are closed enums rejected at deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.trim().is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        if self.current_infra.instance_type.trim().is_empty() {
            return Err(ValidationError::EmptyInstanceType);
        }
        Ok(())
    }

    /// Check for a feature by exact name.
    pub fn has_feature(&self, name: &str) -> bool {
        self.features.iter().any(|f| f == name)
    }

    /// Check whether any feature contains the given keyword (case-insensitive).
    pub fn any_feature_contains(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.features
            .iter()
            .any(|f| f.to_lowercase().contains(&keyword))
    }

    /// Example profile: a food delivery app with peak-hour traffic.
    pub fn example() -> Self {
        Self {
            project_name: "Food Delivery App".to_string(),
            monthly_budget_inr: 50_000,
            expected_users: 100_000,
            traffic_pattern: TrafficPattern::PeakHours,
            region: Region::ApSouth1,
            tech_stack: TechStack {
                backend: "Spring Boot".to_string(),
                frontend: "React".to_string(),
                database: "PostgreSQL".to_string(),
                cache: Some("Redis".to_string()),
                storage: Some("Object Storage".to_string()),
                auth: Some("JWT".to_string()),
            },
            features: vec![
                "real-time order tracking".to_string(),
                "image uploads".to_string(),
                "notifications".to_string(),
                "analytics".to_string(),
            ],
            current_infra: CurrentInfrastructure {
                ec2_instances: 2,
                instance_type: "t3.medium".to_string(),
                rds: Some("db.t3.medium".to_string()),
                load_balancer: true,
                cdn: false,
                storage_gb: Some(500),
                monitoring: "basic".to_string(),
            },
        }
    }
}

// ============================================================================
// Cost Estimate
// ============================================================================

/// Monthly cost per service bucket (INR).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceCost {
    #[serde(rename = "EC2")]
    pub ec2: f64,
    #[serde(rename = "RDS")]
    pub rds: f64,
    #[serde(rename = "Storage")]
    pub storage: f64,
    #[serde(rename = "LoadBalancer")]
    pub load_balancer: f64,
    #[serde(rename = "CDN")]
    pub cdn: f64,
    #[serde(rename = "Monitoring")]
    pub monitoring: f64,
    #[serde(rename = "DataTransfer")]
    pub data_transfer: f64,
    /// Overflow bucket; not produced by the estimator.
    #[serde(rename = "Other")]
    pub other: f64,
}

impl ServiceCost {
    /// Sum of the seven named services (excludes `other`).
    pub fn total(&self) -> f64 {
        self.named().iter().map(|(_, cost)| cost).sum()
    }

    /// The seven named buckets in display order.
    pub fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("EC2", self.ec2),
            ("RDS", self.rds),
            ("Storage", self.storage),
            ("Load Balancer", self.load_balancer),
            ("CDN", self.cdn),
            ("Monitoring", self.monitoring),
            ("Data Transfer", self.data_transfer),
        ]
    }
}

/// Cost estimate compared against the project budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub service_costs: ServiceCost,
    pub total_monthly_cost: f64,
    pub budget: f64,
    /// Budget minus total cost; negative when over budget.
    pub remaining_budget: f64,
    pub budget_utilization_percent: f64,
}

impl CostEstimate {
    pub fn is_within_budget(&self) -> bool {
        self.total_monthly_cost <= self.budget
    }
}

// ============================================================================
// Usage Pattern
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrafficType {
    ConsistentLowVariance,
    PredictablePeaks,
    UnpredictableSpikes,
    PeriodicVariations,
}

impl_labels!(TrafficType {
    ConsistentLowVariance => "consistent-low-variance",
    PredictablePeaks => "predictable-peaks",
    UnpredictableSpikes => "unpredictable-spikes",
    PeriodicVariations => "periodic-variations",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DbLoad {
    ReadHeavy,
    WriteHeavy,
    Balanced,
}

impl_labels!(DbLoad {
    ReadHeavy => "read-heavy",
    WriteHeavy => "write-heavy",
    Balanced => "balanced",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageAccess {
    FrequentReads,
    MixedHotCold,
    OccasionalAccess,
}

impl_labels!(StorageAccess {
    FrequentReads => "frequent-reads",
    MixedHotCold => "mixed-hot-cold",
    OccasionalAccess => "occasional-access",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingNeed {
    AutoScaleRequired,
    ScheduledScaling,
    HorizontalScaling,
    FixedCapacity,
}

impl ScalingNeed {
    /// Whether the workload benefits from elastic capacity.
    pub fn is_elastic(&self) -> bool {
        matches!(self, Self::AutoScaleRequired | Self::HorizontalScaling)
    }
}

impl_labels!(ScalingNeed {
    AutoScaleRequired => "auto-scale-required",
    ScheduledScaling => "scheduled-scaling",
    HorizontalScaling => "horizontal-scaling",
    FixedCapacity => "fixed-capacity",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CpuPattern {
    CpuIntensive,
    VariableCpu,
    ModerateCpu,
}

impl_labels!(CpuPattern {
    CpuIntensive => "cpu-intensive",
    VariableCpu => "variable-cpu",
    ModerateCpu => "moderate-cpu",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryPattern {
    MemoryIntensive,
    ModerateMemory,
    LowMemory,
}

impl_labels!(MemoryPattern {
    MemoryIntensive => "memory-intensive",
    ModerateMemory => "moderate-memory",
    LowMemory => "low-memory",
});

/// Qualitative workload tags derived from a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePattern {
    pub traffic_type: TrafficType,
    pub db_load: DbLoad,
    pub storage_access: StorageAccess,
    pub scaling_need: ScalingNeed,
    pub cpu_pattern: CpuPattern,
    pub memory_pattern: MemoryPattern,
    /// Likely peak hours of day (0-23)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_hours: Option<Vec<u8>>,
}

// ============================================================================
// Recommendation
// ============================================================================

/// Risk or complexity level.
///
/// Ordered `Low < Medium < High`, with ordinals 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Parse a level from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Ordinal used for scoring arithmetic.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl_labels!(Level {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

/// Cloud service a recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "EC2")]
    Ec2,
    #[serde(rename = "RDS")]
    Rds,
    Storage,
    Network,
    Monitoring,
    Lambda,
    #[serde(rename = "CDN")]
    Cdn,
    General,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::Ec2,
        Service::Rds,
        Service::Storage,
        Service::Network,
        Service::Monitoring,
        Service::Lambda,
        Service::Cdn,
        Service::General,
    ];
}

impl_labels!(Service {
    Ec2 => "EC2",
    Rds => "RDS",
    Storage => "Storage",
    Network => "Network",
    Monitoring => "Monitoring",
    Lambda => "Lambda",
    Cdn => "CDN",
    General => "General",
});

/// A candidate optimization action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Unique within one optimization run
    pub id: u32,
    pub title: String,
    pub service: Service,
    pub description: String,
    pub expected_savings_inr: f64,
    pub risk: Level,
    pub complexity: Level,
    pub impact: String,
    pub implementation_steps: Vec<String>,
}

impl Recommendation {
    /// Check the invariants the ranker relies on.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is empty".to_string());
        }
        if !self.expected_savings_inr.is_finite() {
            return Err("expected savings is not a finite number".to_string());
        }
        if self.expected_savings_inr < 0.0 {
            return Err(format!(
                "expected savings is negative ({})",
                self.expected_savings_inr
            ));
        }
        Ok(())
    }

    /// Low risk and low complexity.
    pub fn is_quick_win(&self) -> bool {
        self.risk == Level::Low && self.complexity == Level::Low
    }

    /// Sum of risk and complexity ordinals.
    pub fn effort(&self) -> u8 {
        self.risk.ordinal() + self.complexity.ordinal()
    }
}

impl AsRef<Recommendation> for Recommendation {
    fn as_ref(&self) -> &Recommendation {
        self
    }
}

/// A recommendation paired with the score assigned by the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub score: f64,
}

impl AsRef<Recommendation> for RankedRecommendation {
    fn as_ref(&self) -> &Recommendation {
        &self.recommendation
    }
}

/// Recommendations grouped under a single service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceGroup<T> {
    pub service: Service,
    pub recommendations: Vec<T>,
}

/// Recommendations partitioned by combined risk and complexity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roadmap<T> {
    /// Effort (risk + complexity) of at most 2
    pub immediate: Vec<T>,
    /// Effort of 3 or 4
    pub short_term: Vec<T>,
    /// Effort above 4
    pub long_term: Vec<T>,
}

/// Derived planning views over a report's recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInsights {
    /// Highest savings regardless of risk
    pub high_impact: Vec<RankedRecommendation>,
    pub by_service: Vec<ServiceGroup<RankedRecommendation>>,
    pub roadmap: Roadmap<RankedRecommendation>,
}

impl<T> Default for Roadmap<T> {
    fn default() -> Self {
        Self {
            immediate: Vec::new(),
            short_term: Vec::new(),
            long_term: Vec::new(),
        }
    }
}

// ============================================================================
// Optimization Request & Report
// ============================================================================

/// Minimum number of recommendations a caller may request.
pub const MIN_RECOMMENDATIONS: usize = 5;
/// Maximum number of recommendations a caller may request.
pub const MAX_RECOMMENDATIONS: usize = 20;

/// An optimization request as accepted at the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub profile: ProjectProfile,
    #[serde(default = "default_num_recommendations")]
    pub num_recommendations: usize,
    #[serde(default = "default_include_high_risk")]
    pub include_high_risk: bool,
}

fn default_num_recommendations() -> usize {
    15
}

fn default_include_high_risk() -> bool {
    true
}

impl OptimizationRequest {
    pub fn new(profile: ProjectProfile) -> Self {
        Self {
            profile,
            num_recommendations: default_num_recommendations(),
            include_high_risk: default_include_high_risk(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_RECOMMENDATIONS..=MAX_RECOMMENDATIONS).contains(&self.num_recommendations) {
            return Err(ValidationError::RecommendationCountOutOfRange {
                value: self.num_recommendations,
                min: MIN_RECOMMENDATIONS,
                max: MAX_RECOMMENDATIONS,
            });
        }
        self.profile.validate()
    }
}

/// Whether the estimated cost fits the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    #[serde(rename = "Within Budget")]
    WithinBudget,
    #[serde(rename = "Over Budget")]
    OverBudget,
}

impl BudgetStatus {
    pub fn from_costs(estimated_cost: f64, budget: f64) -> Self {
        if estimated_cost <= budget {
            Self::WithinBudget
        } else {
            Self::OverBudget
        }
    }
}

impl_labels!(BudgetStatus {
    WithinBudget => "Within Budget",
    OverBudget => "Over Budget",
});

/// Final output of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub project: String,
    pub budget: f64,
    pub estimated_cost: f64,
    pub status: BudgetStatus,
    pub cost_breakdown: ServiceCost,
    pub usage_patterns: UsagePattern,
    pub recommendations: Vec<RankedRecommendation>,
    pub total_potential_savings: f64,
    pub top_3_quick_wins: Vec<RankedRecommendation>,
    pub generated_at: DateTime<Utc>,
}

impl OptimizationReport {
    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::High > Level::Medium);
        assert!(Level::Medium > Level::Low);
        assert_eq!(Level::Low.ordinal(), 1);
        assert_eq!(Level::High.ordinal(), 3);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("low"), Some(Level::Low));
        assert_eq!(Level::parse(" MEDIUM "), Some(Level::Medium));
        assert_eq!(Level::parse("extreme"), None);
    }

    #[test]
    fn test_traffic_pattern_aliases() {
        let p: TrafficPattern = serde_json::from_str("\"peak-hours\"").unwrap();
        assert_eq!(p, TrafficPattern::PeakHours);
        let p: TrafficPattern = serde_json::from_str("\"peak_hours\"").unwrap();
        assert_eq!(p, TrafficPattern::PeakHours);
        assert_eq!(TrafficPattern::parse("Peak-Hours"), Some(TrafficPattern::PeakHours));
        assert!(serde_json::from_str::<TrafficPattern>("\"random\"").is_err());
    }

    #[test]
    fn test_region_rejects_unknown() {
        assert_eq!(Region::parse("eu-west-1"), Some(Region::EuWest1));
        assert!(serde_json::from_str::<Region>("\"mars-north-1\"").is_err());
    }

    #[test]
    fn test_profile_defaults() {
        let json = r#"{
            "project_name": "Demo",
            "monthly_budget_inr": 1000,
            "expected_users": 10,
            "traffic_pattern": "steady",
            "tech_stack": {"backend": "Go", "frontend": "None", "database": "None"},
            "current_infra": {"ec2_instances": 1, "instance_type": "t3.micro"}
        }"#;
        let profile: ProjectProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.region, Region::ApSouth1);
        assert_eq!(profile.current_infra.storage_gb, Some(100));
        assert_eq!(profile.current_infra.monitoring, "basic");
        assert!(profile.features.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut value = serde_json::to_value(ProjectProfile::example()).unwrap();
        value["monthly_budget_inr"] = serde_json::json!(-5);
        assert!(serde_json::from_value::<ProjectProfile>(value).is_err());
    }

    #[test]
    fn test_has_feature_is_exact() {
        let mut profile = ProjectProfile::example();
        profile.features = vec!["Analytics".to_string(), " batch".to_string()];
        assert!(!profile.has_feature("analytics"));
        assert!(!profile.has_feature("batch"));
        assert!(profile.has_feature("Analytics"));
        assert!(profile.any_feature_contains("analytics"));
    }

    #[test]
    fn test_profile_validate_empty_name() {
        let mut profile = ProjectProfile::example();
        profile.project_name = "  ".to_string();
        assert_eq!(profile.validate(), Err(ValidationError::EmptyProjectName));
    }

    #[test]
    fn test_request_count_range() {
        let mut request = OptimizationRequest::new(ProjectProfile::example());
        assert!(request.validate().is_ok());
        request.num_recommendations = 4;
        assert!(matches!(
            request.validate(),
            Err(ValidationError::RecommendationCountOutOfRange { value: 4, .. })
        ));
        request.num_recommendations = 21;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_ranked_recommendation_flattens() {
        let ranked = RankedRecommendation {
            recommendation: Recommendation {
                id: 1,
                title: "Use S3 Intelligent-Tiering".to_string(),
                service: Service::Storage,
                description: String::new(),
                expected_savings_inr: 400.0,
                risk: Level::Low,
                complexity: Level::Low,
                impact: String::new(),
                implementation_steps: vec![],
            },
            score: 0.5,
        };
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["title"], "Use S3 Intelligent-Tiering");
        assert_eq!(json["service"], "Storage");
        assert_eq!(json["risk"], "Low");
        assert_eq!(json["score"], 0.5);
    }

    #[test]
    fn test_budget_status_labels() {
        assert_eq!(BudgetStatus::from_costs(10.0, 10.0), BudgetStatus::WithinBudget);
        assert_eq!(BudgetStatus::from_costs(10.5, 10.0), BudgetStatus::OverBudget);
        assert_eq!(
            serde_json::to_string(&BudgetStatus::OverBudget).unwrap(),
            "\"Over Budget\""
        );
    }

    #[test]
    fn test_service_cost_total_excludes_other() {
        let costs = ServiceCost {
            ec2: 1.0,
            rds: 2.0,
            storage: 3.0,
            load_balancer: 4.0,
            cdn: 5.0,
            monitoring: 6.0,
            data_transfer: 7.0,
            other: 100.0,
        };
        assert_eq!(costs.total(), 28.0);
        let json = serde_json::to_value(costs).unwrap();
        assert_eq!(json["LoadBalancer"], 4.0);
    }
}
