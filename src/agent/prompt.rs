//! Prompts for the generative recommendation source.

use super::GenerationRequest;
use crate::analyzer::cost_optimize::cost_estimator::format_inr;

/// System prompt sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are an expert cloud cost optimization consultant with deep knowledge of AWS, GCP, and Azure.
Your job is to analyze cloud infrastructure and provide actionable, money-saving recommendations.
You must be specific, practical, and consider real-world trade-offs.";

/// Maximum number of existing titles listed in the prompt.
pub const MAX_AVOID_TITLES: usize = 5;

/// Build the user prompt for a generation request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let profile = request.profile;
    let stack = &profile.tech_stack;
    let costs = &request.estimate.service_costs;
    let pattern = request.pattern;

    let budget_status = if request.estimate.is_within_budget() {
        format!(
            "Within budget (₹{} remaining)",
            format_inr(request.estimate.remaining_budget)
        )
    } else {
        format!(
            "Over budget by ₹{}",
            format_inr(request.estimate.remaining_budget.abs())
        )
    };

    let mut prompt = format!(
        "You are a cloud cost optimization expert.

Project Details:
- Name: {name}
- Monthly Budget: ₹{budget}
- Expected Users: {users}
- Traffic Pattern: {traffic}
- Region: {region}

Tech Stack:
Backend: {backend}
Frontend: {frontend}
Database: {database}
Cache: {cache}
Storage: {storage}
Auth: {auth}
Features: {features}

Current Infrastructure Costs:
EC2: ₹{ec2}
RDS: ₹{rds}
Storage: ₹{storage_cost}
Load Balancer: ₹{lb}
CDN: ₹{cdn}
Monitoring: ₹{monitoring}
Data Transfer: ₹{transfer}

Total Monthly Cost: ₹{total}
Budget Status: {budget_status}

Usage Patterns Detected:
Traffic Type: {traffic_type}
Database Load: {db_load}
Storage Access: {storage_access}
Scaling Need: {scaling_need}
CPU Pattern: {cpu}
Memory Pattern: {memory}

Task: Generate exactly {count} cost optimization recommendations.

For EACH recommendation, provide:
1. A clear, actionable title
2. The affected cloud service
3. Expected monthly savings in INR
4. Risk level (Low/Medium/High)
5. Performance impact description
6. Implementation complexity (Low/Medium/High)
7. Detailed implementation steps

Focus on:
- Recommendations with highest ROI
- Variety of services (compute, database, storage, network)
- Both quick wins and strategic changes
- Budget-aware suggestions

Format each recommendation as a numbered bold title (e.g. `1. **Title**`) followed by its details.",
        name = profile.project_name,
        budget = format_inr(profile.monthly_budget_inr as f64),
        users = profile.expected_users,
        traffic = profile.traffic_pattern,
        region = profile.region,
        backend = stack.backend,
        frontend = stack.frontend,
        database = stack.database,
        cache = stack.cache.as_deref().unwrap_or("None"),
        storage = stack.storage.as_deref().unwrap_or("Object Storage"),
        auth = stack.auth.as_deref().unwrap_or("Standard"),
        features = profile.features.join(", "),
        ec2 = format_inr(costs.ec2),
        rds = format_inr(costs.rds),
        storage_cost = format_inr(costs.storage),
        lb = format_inr(costs.load_balancer),
        cdn = format_inr(costs.cdn),
        monitoring = format_inr(costs.monitoring),
        transfer = format_inr(costs.data_transfer),
        total = format_inr(request.estimate.total_monthly_cost),
        budget_status = budget_status,
        traffic_type = pattern.traffic_type,
        db_load = pattern.db_load,
        storage_access = pattern.storage_access,
        scaling_need = pattern.scaling_need,
        cpu = pattern.cpu_pattern,
        memory = pattern.memory_pattern,
        count = request.count,
    );

    if !request.avoid_titles.is_empty() {
        prompt.push_str("\n\nNote: Avoid duplicating these existing recommendations:\n");
        let titles: Vec<String> = request
            .avoid_titles
            .iter()
            .take(MAX_AVOID_TITLES)
            .map(|title| format!("- {title}"))
            .collect();
        prompt.push_str(&titles.join("\n"));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::cost_optimize::pricing::PricingTable;
    use crate::analyzer::cost_optimize::types::ProjectProfile;
    use crate::analyzer::cost_optimize::{cost_estimator, usage_analyzer};

    #[test]
    fn test_prompt_contains_context() {
        let profile = ProjectProfile::example();
        let estimate = cost_estimator::estimate_costs(&profile, &PricingTable::default());
        let pattern = usage_analyzer::analyze(&profile);
        let request = GenerationRequest {
            profile: &profile,
            estimate: &estimate,
            pattern: &pattern,
            count: 5,
            avoid_titles: (1..=7).map(|i| format!("Title {i}")).collect(),
            first_id: 12,
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("- Name: Food Delivery App"));
        assert!(prompt.contains("EC2: ₹56,000.00"));
        assert!(prompt.contains("Budget Status: Over budget by ₹"));
        assert!(prompt.contains("Database Load: write-heavy"));
        assert!(prompt.contains("Generate exactly 5 cost optimization recommendations"));
        assert!(prompt.contains("- Title 5"));
        assert!(!prompt.contains("- Title 6"));
    }

    #[test]
    fn test_prompt_without_avoid_list() {
        let profile = ProjectProfile::example();
        let estimate = cost_estimator::estimate_costs(&profile, &PricingTable::default());
        let pattern = usage_analyzer::analyze(&profile);
        let request = GenerationRequest {
            profile: &profile,
            estimate: &estimate,
            pattern: &pattern,
            count: 8,
            avoid_titles: Vec::new(),
            first_id: 1,
        };
        assert!(!build_prompt(&request).contains("Avoid duplicating"));
    }
}
