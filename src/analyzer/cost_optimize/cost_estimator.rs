//! Cost Estimator for Cloud Infrastructure
//!
//! Converts a project profile into a per-service monthly cost breakdown using
//! the pricing table, and compares the total against the project budget.

use super::pricing::{
    BASE_CUSTOM_METRICS, CDN_MB_PER_USER, DEFAULT_STORAGE_GB, FREE_TRANSFER_GB, PricingTable,
    RDS_STORAGE_GB, TRANSFER_MB_PER_USER,
};
use super::types::{CostEstimate, ProjectProfile, ServiceCost, TrafficPattern};

const MB_PER_GB: f64 = 1024.0;

/// Estimate the monthly cost of a project.
pub fn estimate_costs(profile: &ProjectProfile, pricing: &PricingTable) -> CostEstimate {
    let multiplier = pricing.region_multiplier(profile.region);

    let service_costs = ServiceCost {
        ec2: ec2_cost(profile, pricing, multiplier),
        rds: rds_cost(profile, pricing, multiplier),
        storage: storage_cost(profile, pricing, multiplier),
        load_balancer: load_balancer_cost(profile, pricing, multiplier),
        cdn: cdn_cost(profile, pricing, multiplier),
        monitoring: monitoring_cost(profile, pricing, multiplier),
        data_transfer: data_transfer_cost(profile, pricing, multiplier),
        other: 0.0,
    };

    let total = service_costs.total();
    let budget = profile.monthly_budget_inr as f64;
    let utilization = if budget > 0.0 {
        total / budget * 100.0
    } else {
        0.0
    };

    CostEstimate {
        service_costs,
        total_monthly_cost: total,
        budget,
        remaining_budget: budget - total,
        budget_utilization_percent: utilization,
    }
}

fn ec2_cost(profile: &ProjectProfile, pricing: &PricingTable, multiplier: f64) -> f64 {
    let infra = &profile.current_infra;
    let cost = pricing.ec2_price(&infra.instance_type) * f64::from(infra.ec2_instances) * multiplier;
    log::debug!(
        "EC2 cost: {}x {} = {:.2}",
        infra.ec2_instances,
        infra.instance_type,
        cost
    );
    cost
}

fn rds_cost(profile: &ProjectProfile, pricing: &PricingTable, multiplier: f64) -> f64 {
    let Some(instance_type) = profile.current_infra.rds.as_deref() else {
        return 0.0;
    };

    let storage = RDS_STORAGE_GB * pricing.storage.ebs_gp3_gb;
    let cost = (pricing.rds_price(instance_type) + storage) * multiplier;
    log::debug!(
        "RDS cost: {} + {}GB = {:.2}",
        instance_type,
        RDS_STORAGE_GB,
        cost
    );
    cost
}

fn storage_cost(profile: &ProjectProfile, pricing: &PricingTable, multiplier: f64) -> f64 {
    let mut storage_gb = profile
        .current_infra
        .storage_gb
        .unwrap_or(DEFAULT_STORAGE_GB) as f64;

    if profile.has_feature("image uploads") {
        storage_gb *= 2.0;
    }
    if profile.has_feature("analytics") {
        storage_gb *= 1.5;
    }

    let cost = storage_gb * pricing.storage.object_storage_gb * multiplier;
    log::debug!("Storage cost: {:.0}GB = {:.2}", storage_gb, cost);
    cost
}

fn load_balancer_cost(profile: &ProjectProfile, pricing: &PricingTable, multiplier: f64) -> f64 {
    if !profile.current_infra.load_balancer {
        return 0.0;
    }

    // LCU surcharge for spiky traffic
    let surcharge = match profile.traffic_pattern {
        TrafficPattern::PeakHours => 1.3,
        TrafficPattern::Bursty => 1.5,
        TrafficPattern::Steady | TrafficPattern::Seasonal => 1.0,
    };

    let cost = pricing.network.load_balancer * surcharge * multiplier;
    log::debug!("Load balancer cost: {:.2}", cost);
    cost
}

fn cdn_cost(profile: &ProjectProfile, pricing: &PricingTable, multiplier: f64) -> f64 {
    if !profile.current_infra.cdn {
        return 0.0;
    }

    let total_gb = profile.expected_users as f64 * CDN_MB_PER_USER / MB_PER_GB;
    let cost = total_gb * pricing.network.cdn_gb * multiplier;
    log::debug!("CDN cost: {:.2}GB = {:.2}", total_gb, cost);
    cost
}

fn monitoring_cost(profile: &ProjectProfile, pricing: &PricingTable, multiplier: f64) -> f64 {
    let base = if profile.current_infra.monitoring.trim() == "advanced" {
        pricing.monitoring.advanced
    } else {
        pricing.monitoring.basic
    };

    let metrics = (BASE_CUSTOM_METRICS + profile.features.len()) as f64;
    let cost = (base + metrics * pricing.monitoring.custom_metric) * multiplier;
    log::debug!("Monitoring cost: {:.2}", cost);
    cost
}

fn data_transfer_cost(profile: &ProjectProfile, pricing: &PricingTable, multiplier: f64) -> f64 {
    let total_gb = profile.expected_users as f64 * TRANSFER_MB_PER_USER / MB_PER_GB;
    let billable_gb = (total_gb - FREE_TRANSFER_GB).max(0.0);

    let cost = billable_gb * pricing.network.data_transfer_gb * multiplier;
    log::debug!("Data transfer cost: {:.2}GB = {:.2}", billable_gb, cost);
    cost
}

/// Render the non-zero cost buckets, one per line.
pub fn cost_breakdown_lines(estimate: &CostEstimate) -> Vec<String> {
    service_cost_lines(&estimate.service_costs)
}

pub(crate) fn service_cost_lines(costs: &ServiceCost) -> Vec<String> {
    costs
        .named()
        .iter()
        .filter(|(_, cost)| *cost > 0.0)
        .map(|(name, cost)| format!("{}: ₹{}", name, format_inr(*cost)))
        .collect()
}

/// Round cost to 2 decimal places.
pub fn round_cost(cost: f64) -> f64 {
    (cost * 100.0).round() / 100.0
}

/// Format an amount with thousands separators and two decimals.
pub fn format_inr(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}
