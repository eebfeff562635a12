use proptest::prelude::*;

use cloud_cost_optimizer::analyzer::cost_optimize::dedup::{deduplicate, normalize_title, title_similarity};
use cloud_cost_optimizer::analyzer::cost_optimize::ranker::{
    filter_by_risk, implementation_roadmap, quick_wins,
};
use cloud_cost_optimizer::analyzer::cost_optimize::rules::{RuleContext, generate_recommendations};
use cloud_cost_optimizer::analyzer::cost_optimize::types::{
    CurrentInfrastructure, TechStack,
};
use cloud_cost_optimizer::analyzer::cost_optimize::{
    CostOptimizer, Level, OptimizerConfig, PricingTable, ProjectProfile, Ranker, Recommendation,
    Region, Service, TrafficPattern, analyze_usage, estimate_costs,
};

/// Property tests for the estimator, rule engine, dedup and ranker invariants.

const WORDS: &[&str] = &[
    "enable", "auto", "scaling", "graviton", "spot", "instances", "s3", "lifecycle", "cdn",
    "log", "retention", "rds", "replicas", "compress", "images", "use", "for", "storage",
];

const FEATURES: &[&str] = &[
    "image uploads",
    "analytics",
    "batch exports",
    "real-time chat",
    "video streaming",
    "notifications",
    "search",
    "file upload",
];

const INSTANCE_TYPES: &[&str] = &[
    "t3.micro", "t3.small", "t3.medium", "t3.large", "t3.xlarge", "m5.large", "c6g.medium",
];

fn level() -> impl Strategy<Value = Level> {
    prop_oneof![Just(Level::Low), Just(Level::Medium), Just(Level::High)]
}

fn service() -> impl Strategy<Value = Service> {
    prop::sample::select(Service::ALL.to_vec())
}

fn title() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..6).prop_map(|w| w.join(" "))
}

fn recommendation() -> impl Strategy<Value = Recommendation> {
    (title(), service(), 0.0..50_000.0f64, level(), level()).prop_map(
        |(title, service, savings, risk, complexity)| Recommendation {
            id: 0,
            title,
            service,
            description: String::new(),
            expected_savings_inr: savings,
            risk,
            complexity,
            impact: String::new(),
            implementation_steps: Vec::new(),
        },
    )
}

fn recommendations() -> impl Strategy<Value = Vec<Recommendation>> {
    prop::collection::vec(recommendation(), 0..25).prop_map(|mut recs| {
        for (i, rec) in recs.iter_mut().enumerate() {
            rec.id = i as u32 + 1;
        }
        recs
    })
}

fn traffic() -> impl Strategy<Value = TrafficPattern> {
    prop_oneof![
        Just(TrafficPattern::Steady),
        Just(TrafficPattern::PeakHours),
        Just(TrafficPattern::Bursty),
        Just(TrafficPattern::Seasonal),
    ]
}

fn profile() -> impl Strategy<Value = ProjectProfile> {
    (
        0u64..500_000,
        0u64..2_000_000,
        traffic(),
        prop::sample::select(Region::ALL.to_vec()),
        prop::sample::subsequence(FEATURES.to_vec(), 0..FEATURES.len()),
        1u32..8,
        prop::sample::select(INSTANCE_TYPES.to_vec()),
        prop::option::of(prop::sample::select(vec!["db.t3.micro", "db.t3.medium", "db.r5.large"])),
        (any::<bool>(), any::<bool>(), prop::option::of(0u64..5_000), any::<bool>()),
    )
        .prop_map(
            |(budget, users, traffic, region, features, instances, instance_type, rds, extra)| {
                let (load_balancer, cdn, storage_gb, advanced) = extra;
                ProjectProfile {
                    project_name: "Generated".to_string(),
                    monthly_budget_inr: budget,
                    expected_users: users,
                    traffic_pattern: traffic,
                    region,
                    tech_stack: TechStack {
                        backend: "Node.js".to_string(),
                        frontend: "React".to_string(),
                        database: "PostgreSQL".to_string(),
                        cache: None,
                        storage: None,
                        auth: None,
                    },
                    features: features.into_iter().map(String::from).collect(),
                    current_infra: CurrentInfrastructure {
                        ec2_instances: instances,
                        instance_type: instance_type.to_string(),
                        rds: rds.map(String::from),
                        load_balancer,
                        cdn,
                        storage_gb,
                        monitoring: if advanced { "advanced" } else { "basic" }.to_string(),
                    },
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_rank_sorts_descending_and_keeps_everything(recs in recommendations()) {
        let config = OptimizerConfig::default();
        let profile = ProjectProfile::example();
        let pattern = analyze_usage(&profile);

        let ranked = Ranker::new(&config).rank(recs.clone(), &profile, &pattern).unwrap();

        prop_assert_eq!(ranked.len(), recs.len());
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));

        let mut in_ids: Vec<u32> = recs.iter().map(|r| r.id).collect();
        let mut out_ids: Vec<u32> = ranked.iter().map(|r| r.recommendation.id).collect();
        in_ids.sort_unstable();
        out_ids.sort_unstable();
        prop_assert_eq!(in_ids, out_ids);
    }

    #[test]
    fn prop_rank_is_stable_for_equal_scores(rec in recommendation(), copies in 2usize..6) {
        let config = OptimizerConfig::default();
        let profile = ProjectProfile::example();
        let pattern = analyze_usage(&profile);

        let recs: Vec<Recommendation> = (0..copies)
            .map(|i| Recommendation { id: i as u32 + 1, ..rec.clone() })
            .collect();
        let ranked = Ranker::new(&config).rank(recs, &profile, &pattern).unwrap();
        let ids: Vec<u32> = ranked.iter().map(|r| r.recommendation.id).collect();
        prop_assert_eq!(ids, (1..=copies as u32).collect::<Vec<_>>());
    }

    #[test]
    fn prop_dedup_leaves_no_similar_pairs(recs in recommendations(), threshold in 0.0..1.0f64) {
        let unique = deduplicate(recs.clone(), threshold);

        for (i, a) in unique.iter().enumerate() {
            for b in &unique[i + 1..] {
                let sim = title_similarity(&normalize_title(&a.title), &normalize_title(&b.title));
                prop_assert!(sim <= threshold);
            }
        }

        // Survivors keep their input order and the first candidate always survives.
        let positions: Vec<usize> = unique
            .iter()
            .map(|u| recs.iter().position(|r| r.id == u.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        if let Some(first) = recs.first() {
            prop_assert_eq!(unique[0].id, first.id);
        }
    }

    #[test]
    fn prop_dedup_is_idempotent(recs in recommendations(), threshold in 0.0..1.0f64) {
        let once = deduplicate(recs, threshold);
        let once_ids: Vec<u32> = once.iter().map(|r| r.id).collect();
        let twice_ids: Vec<u32> = deduplicate(once, threshold).iter().map(|r| r.id).collect();
        prop_assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn prop_similarity_is_symmetric_and_bounded(a in title(), b in title()) {
        let ab = title_similarity(&a, &b);
        prop_assert_eq!(ab, title_similarity(&b, &a));
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(title_similarity(&a, &a), 1.0);
    }

    #[test]
    fn prop_risk_filter_and_derived_views(recs in recommendations(), max_risk in level(), top_n in 0usize..5) {
        let filtered = filter_by_risk(recs.clone(), max_risk);
        prop_assert!(filtered.iter().all(|r| r.risk <= max_risk));
        prop_assert_eq!(
            filtered.len(),
            recs.iter().filter(|r| r.risk <= max_risk).count()
        );

        let wins = quick_wins(&recs, top_n);
        prop_assert!(wins.len() <= top_n);
        prop_assert!(wins.iter().all(|r| r.is_quick_win()));
        prop_assert!(wins.windows(2).all(|w| w[0].expected_savings_inr >= w[1].expected_savings_inr));

        let roadmap = implementation_roadmap(&recs);
        prop_assert_eq!(
            roadmap.immediate.len() + roadmap.short_term.len() + roadmap.long_term.len(),
            recs.len()
        );
        prop_assert!(roadmap.immediate.iter().all(|r| r.effort() <= 2));
        prop_assert!(roadmap.long_term.iter().all(|r| r.effort() > 4));
    }

    #[test]
    fn prop_estimate_is_consistent(profile in profile()) {
        let estimate = estimate_costs(&profile, &PricingTable::default());
        let costs = estimate.service_costs;

        for (_, cost) in costs.named() {
            prop_assert!(cost >= 0.0 && cost.is_finite());
        }
        prop_assert_eq!(costs.other, 0.0);
        prop_assert!((estimate.total_monthly_cost - costs.total()).abs() < 1e-6);
        prop_assert!(
            (estimate.remaining_budget - (estimate.budget - estimate.total_monthly_cost)).abs() < 1e-6
        );
        if profile.current_infra.rds.is_none() {
            prop_assert_eq!(costs.rds, 0.0);
        }
    }

    #[test]
    fn prop_rules_produce_valid_candidates(profile in profile()) {
        let pricing = PricingTable::default();
        let estimate = estimate_costs(&profile, &pricing);
        let pattern = analyze_usage(&profile);
        let ctx = RuleContext {
            profile: &profile,
            estimate: &estimate,
            pattern: &pattern,
            pricing: &pricing,
        };

        let recs = generate_recommendations(&ctx, &OptimizerConfig::default());
        for (i, rec) in recs.iter().enumerate() {
            prop_assert_eq!(rec.id, i as u32 + 1);
            prop_assert!(rec.validate().is_ok());
            prop_assert!(!rec.implementation_steps.is_empty());
        }
        if profile.current_infra.rds.is_none() {
            prop_assert!(recs.iter().all(|r| r.service != Service::Rds));
        }
    }

    #[test]
    fn prop_optimize_respects_count(profile in profile(), n in 5usize..=20, include_high_risk in any::<bool>()) {
        let report = CostOptimizer::new().optimize(&profile, n, include_high_risk).unwrap();

        prop_assert!(report.recommendations.len() <= n);
        prop_assert!(report.top_3_quick_wins.len() <= 3);
        prop_assert!(report.recommendations.windows(2).all(|w| w[0].score >= w[1].score));
        if !include_high_risk {
            prop_assert!(report.recommendations.iter().all(|r| r.recommendation.risk != Level::High));
        }
    }
}
