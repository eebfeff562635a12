//! COST-DB-001..003: managed database rules.
//!
//! Only evaluated when the project has an RDS instance.

use super::{RecommendationRule, RuleContext, RuleDomain, codes, recommendation, steps};
use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::types::{DbLoad, Level, Recommendation, Service};

/// Flat monthly saving of storage autoscaling over a fixed allocation.
const STORAGE_AUTOSCALING_SAVINGS: f64 = 1_500.0;

/// Rule: read-heavy databases benefit from read replicas.
pub struct ReadReplicasRule;

impl RecommendationRule for ReadReplicasRule {
    fn code(&self) -> &'static str {
        codes::READ_REPLICAS
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Database
    }

    fn title(&self) -> &'static str {
        "Add RDS Read Replicas"
    }

    fn description(&self) -> &'static str {
        "Suggest read replicas for read-heavy databases"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        if ctx.pattern.db_load != DbLoad::ReadHeavy {
            return None;
        }

        Some(recommendation(
            self.title(),
            Service::Rds,
            "Offload read queries to read replicas",
            ctx.estimate.service_costs.rds * 0.15,
            Level::Low,
            Level::Medium,
            "Reduces primary DB load, improves read performance",
            steps(&[
                "Create 1-2 read replicas in same AZ",
                "Update application to use replica endpoints for reads",
                "Implement read/write connection splitting",
                "Monitor replication lag",
            ]),
        ))
    }
}

/// Rule: pool database connections.
pub struct ConnectionPoolingRule;

impl RecommendationRule for ConnectionPoolingRule {
    fn code(&self) -> &'static str {
        codes::CONNECTION_POOLING
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Database
    }

    fn title(&self) -> &'static str {
        "Implement Database Connection Pooling"
    }

    fn description(&self) -> &'static str {
        "Suggest RDS Proxy or application-level connection pooling"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        Some(recommendation(
            self.title(),
            Service::Rds,
            "Use RDS Proxy or application-level pooling to reduce connections",
            ctx.estimate.service_costs.rds * 0.10,
            Level::Low,
            Level::Low,
            "Reduces database load and enables smaller instance sizes",
            steps(&[
                "Analyze current connection count and patterns",
                "Set up RDS Proxy or configure PgBouncer/HikariCP",
                "Configure max connections based on instance type",
                "Test with production-like load",
            ]),
        ))
    }
}

/// Rule: let RDS storage grow on demand.
pub struct StorageAutoscalingRule;

impl RecommendationRule for StorageAutoscalingRule {
    fn code(&self) -> &'static str {
        codes::STORAGE_AUTOSCALING
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Database
    }

    fn title(&self) -> &'static str {
        "Enable RDS Storage Autoscaling"
    }

    fn description(&self) -> &'static str {
        "Suggest storage autoscaling instead of over-provisioned RDS storage"
    }

    fn check(&self, _ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        Some(recommendation(
            self.title(),
            Service::Rds,
            "Automatically scale storage based on usage",
            STORAGE_AUTOSCALING_SAVINGS,
            Level::Low,
            Level::Low,
            "Pay only for storage you use, prevents over-provisioning",
            steps(&[
                "Enable storage autoscaling in RDS settings",
                "Set maximum storage threshold",
                "Configure scaling threshold (e.g., 90% full)",
                "Monitor storage usage patterns",
            ]),
        ))
    }
}
