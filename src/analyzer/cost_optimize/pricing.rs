//! Static pricing table (INR per month).
//!
//! Simplified on-demand prices for the services the estimator models. Unknown
//! instance types fall back to documented defaults instead of failing.

use super::types::Region;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback monthly price for an unknown EC2 instance type (t3.medium).
pub const DEFAULT_EC2_PRICE: f64 = 28_000.0;
/// Fallback monthly price for an unknown RDS instance type (db.t3.medium).
pub const DEFAULT_RDS_PRICE: f64 = 40_000.0;
/// Storage provisioned alongside every RDS instance.
pub const RDS_STORAGE_GB: f64 = 100.0;

/// Object storage assumed when a profile does not specify a size.
pub const DEFAULT_STORAGE_GB: u64 = 100;
/// Average CDN volume served per user per month (MB).
pub const CDN_MB_PER_USER: f64 = 50.0;
/// Average data transferred per user per month (MB).
pub const TRANSFER_MB_PER_USER: f64 = 100.0;
/// Data transfer included before charges apply (GB).
pub const FREE_TRANSFER_GB: f64 = 100.0;
/// Metrics every deployment emits before feature-specific ones.
pub const BASE_CUSTOM_METRICS: usize = 3;

/// Per-GB storage prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoragePricing {
    pub object_storage_gb: f64,
    pub ebs_gp3_gb: f64,
    pub glacier_gb: f64,
}

impl Default for StoragePricing {
    fn default() -> Self {
        Self {
            object_storage_gb: 2.0,
            ebs_gp3_gb: 6.0,
            glacier_gb: 0.3,
        }
    }
}

/// Network prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkPricing {
    pub load_balancer: f64,
    pub cdn_gb: f64,
    pub data_transfer_gb: f64,
}

impl Default for NetworkPricing {
    fn default() -> Self {
        Self {
            load_balancer: 2_000.0,
            cdn_gb: 5.0,
            data_transfer_gb: 7.0,
        }
    }
}

/// Monitoring prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringPricing {
    pub basic: f64,
    pub advanced: f64,
    pub custom_metric: f64,
}

impl Default for MonitoringPricing {
    fn default() -> Self {
        Self {
            basic: 1_000.0,
            advanced: 3_000.0,
            custom_metric: 50.0,
        }
    }
}

/// Unit prices consulted read-only by the estimator and the rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub ec2: BTreeMap<String, f64>,
    pub rds: BTreeMap<String, f64>,
    pub storage: StoragePricing,
    pub network: NetworkPricing,
    pub monitoring: MonitoringPricing,
    /// Keyed by region code (e.g., "ap-south-1")
    pub region_multipliers: BTreeMap<String, f64>,
}

impl Default for PricingTable {
    fn default() -> Self {
        let ec2 = [
            ("t3.nano", 3_500.0),
            ("t3.micro", 7_000.0),
            ("t3.small", 14_000.0),
            ("t3.medium", 28_000.0),
            ("t3.large", 56_000.0),
            ("t3.xlarge", 112_000.0),
            ("t3.2xlarge", 224_000.0),
            // ARM (Graviton)
            ("t4g.nano", 2_800.0),
            ("t4g.micro", 5_600.0),
            ("t4g.small", 11_200.0),
            ("t4g.medium", 22_400.0),
            ("t4g.large", 44_800.0),
        ];
        let rds = [
            ("db.t3.micro", 10_000.0),
            ("db.t3.small", 20_000.0),
            ("db.t3.medium", 40_000.0),
            ("db.t3.large", 80_000.0),
            ("db.t3.xlarge", 160_000.0),
        ];
        let region_multipliers = [
            (Region::ApSouth1, 1.0),
            (Region::UsEast1, 0.95),
            (Region::EuWest1, 1.05),
            (Region::ApSoutheast1, 1.08),
        ];

        Self {
            ec2: ec2.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            rds: rds.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            storage: StoragePricing::default(),
            network: NetworkPricing::default(),
            monitoring: MonitoringPricing::default(),
            region_multipliers: region_multipliers
                .iter()
                .map(|(region, m)| (region.as_str().to_string(), *m))
                .collect(),
        }
    }
}

impl PricingTable {
    /// Price multiplier for a region (1.0 when the table has no entry).
    pub fn region_multiplier(&self, region: Region) -> f64 {
        self.region_multipliers
            .get(region.as_str())
            .copied()
            .unwrap_or(1.0)
    }

    /// Listed EC2 price, if the instance type is in the table.
    pub fn ec2_listed(&self, instance_type: &str) -> Option<f64> {
        self.ec2.get(instance_type).copied()
    }

    /// EC2 price with fallback to [`DEFAULT_EC2_PRICE`].
    pub fn ec2_price(&self, instance_type: &str) -> f64 {
        self.ec2_listed(instance_type).unwrap_or(DEFAULT_EC2_PRICE)
    }

    /// RDS price with fallback to [`DEFAULT_RDS_PRICE`].
    pub fn rds_price(&self, instance_type: &str) -> f64 {
        self.rds
            .get(instance_type)
            .copied()
            .unwrap_or(DEFAULT_RDS_PRICE)
    }

    /// ARM (Graviton) counterpart of an x86 instance type, if priced.
    ///
    /// Only the t3 family has a counterpart (t4g).
    pub fn arm_equivalent(&self, instance_type: &str) -> Option<String> {
        let size = instance_type.strip_prefix("t3.")?;
        let candidate = format!("t4g.{size}");
        self.ec2.contains_key(&candidate).then_some(candidate)
    }

    /// Next smaller priced size of an instance type.
    ///
    /// Walks the ladder xlarge → large → medium → small; the first size found
    /// as a substring decides, even if its smaller sibling is not priced.
    pub fn smaller_instance(&self, instance_type: &str) -> Option<String> {
        const SIZE_LADDER: &[(&str, &str)] =
            &[("xlarge", "large"), ("large", "medium"), ("medium", "small")];

        let &(size, smaller) = SIZE_LADDER
            .iter()
            .find(|(size, _)| instance_type.contains(*size))?;
        let candidate = instance_type.replace(size, smaller);
        self.ec2.contains_key(&candidate).then_some(candidate)
    }
}
