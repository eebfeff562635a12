//! Usage Pattern Analyzer
//!
//! Derives qualitative workload tags from the declarative hints in a project
//! profile. Every classification is a table of keywords evaluated in order, so
//! the heuristics can be read (and tested) as data.

use super::types::{
    CpuPattern, DbLoad, MemoryPattern, ProjectProfile, ScalingNeed, StorageAccess, TrafficPattern,
    TrafficType, UsagePattern,
};

// ============================================================================
// Keyword Tables
// ============================================================================

const READ_INDICATORS: &[&str] = &["analytics", "dashboard", "reporting", "search"];
const WRITE_INDICATORS: &[&str] = &["upload", "tracking", "logging", "real-time"];

const HOT_STORAGE_INDICATORS: &[&str] = &["image", "video", "real-time", "cdn"];
const COLD_STORAGE_INDICATORS: &[&str] = &["archive", "backup", "historical", "logs"];

const CPU_INTENSIVE_INDICATORS: &[&str] = &["java", "spring", "machine learning", "video", "encoding"];
const MEMORY_INTENSIVE_INDICATORS: &[&str] = &["java", "jvm", "cache", "redis", "analytics"];

/// A load ratio beyond this marks the database as read- or write-heavy.
const DB_SKEW_RATIO: f64 = 1.5;

const HORIZONTAL_SCALING_USERS: u64 = 100_000;
const MODERATE_MEMORY_USERS: u64 = 50_000;

/// Peak hours by project category, matched against the project name.
const PEAK_HOURS_BY_CATEGORY: &[(&[&str], &[u8])] = &[
    (&["food", "delivery", "restaurant"], &[12, 13, 19, 20, 21]),
    (&["ecommerce", "shop", "store"], &[18, 19, 20, 21, 22]),
    (&["business", "enterprise", "crm"], &[9, 10, 11, 14, 15, 16]),
    (&["video", "game", "entertainment"], &[19, 20, 21, 22, 23]),
];
const DEFAULT_PEAK_HOURS: &[u8] = &[9, 12, 18, 20];

// ============================================================================
// Analysis
// ============================================================================

/// Analyze the usage pattern of a project.
pub fn analyze(profile: &ProjectProfile) -> UsagePattern {
    let features: Vec<String> = profile.features.iter().map(|f| f.to_lowercase()).collect();

    let pattern = UsagePattern {
        traffic_type: traffic_type(profile.traffic_pattern),
        db_load: db_load(&features),
        storage_access: storage_access(&features),
        scaling_need: scaling_need(profile),
        cpu_pattern: cpu_pattern(profile, &features),
        memory_pattern: memory_pattern(profile, &features),
        peak_hours: Some(peak_hours(&profile.project_name)),
    };

    log::info!(
        "Usage pattern: traffic={}, db={}, storage={}, scaling={}, cpu={}, memory={}",
        pattern.traffic_type,
        pattern.db_load,
        pattern.storage_access,
        pattern.scaling_need,
        pattern.cpu_pattern,
        pattern.memory_pattern
    );
    pattern
}

/// Number of indicators found as a substring of at least one feature.
fn indicator_score(indicators: &[&str], features: &[String]) -> usize {
    indicators
        .iter()
        .filter(|ind| features.iter().any(|f| f.contains(*ind)))
        .count()
}

fn any_contains(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn traffic_type(pattern: TrafficPattern) -> TrafficType {
    match pattern {
        TrafficPattern::Steady => TrafficType::ConsistentLowVariance,
        TrafficPattern::PeakHours => TrafficType::PredictablePeaks,
        TrafficPattern::Bursty => TrafficType::UnpredictableSpikes,
        TrafficPattern::Seasonal => TrafficType::PeriodicVariations,
    }
}

fn db_load(features: &[String]) -> DbLoad {
    let read = indicator_score(READ_INDICATORS, features) as f64;
    let write = indicator_score(WRITE_INDICATORS, features) as f64;

    if write > read * DB_SKEW_RATIO {
        DbLoad::WriteHeavy
    } else if read > write * DB_SKEW_RATIO {
        DbLoad::ReadHeavy
    } else {
        DbLoad::Balanced
    }
}

fn storage_access(features: &[String]) -> StorageAccess {
    let hot = indicator_score(HOT_STORAGE_INDICATORS, features);
    let cold = indicator_score(COLD_STORAGE_INDICATORS, features);

    if hot > cold {
        StorageAccess::FrequentReads
    } else if cold > 0 {
        StorageAccess::MixedHotCold
    } else {
        StorageAccess::OccasionalAccess
    }
}

fn scaling_need(profile: &ProjectProfile) -> ScalingNeed {
    match profile.traffic_pattern {
        TrafficPattern::Bursty | TrafficPattern::PeakHours => ScalingNeed::AutoScaleRequired,
        TrafficPattern::Seasonal => ScalingNeed::ScheduledScaling,
        TrafficPattern::Steady if profile.expected_users > HORIZONTAL_SCALING_USERS => {
            ScalingNeed::HorizontalScaling
        }
        TrafficPattern::Steady => ScalingNeed::FixedCapacity,
    }
}

fn cpu_pattern(profile: &ProjectProfile, features: &[String]) -> CpuPattern {
    let backend = profile.tech_stack.backend.to_lowercase();
    let intensive = any_contains(&backend, CPU_INTENSIVE_INDICATORS)
        || features
            .iter()
            .any(|f| any_contains(f, CPU_INTENSIVE_INDICATORS));

    if intensive {
        CpuPattern::CpuIntensive
    } else if profile.traffic_pattern == TrafficPattern::Bursty {
        CpuPattern::VariableCpu
    } else {
        CpuPattern::ModerateCpu
    }
}

fn memory_pattern(profile: &ProjectProfile, features: &[String]) -> MemoryPattern {
    let backend = profile.tech_stack.backend.to_lowercase();
    let redis_cache = profile
        .tech_stack
        .cache
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains("redis"));

    let intensive = any_contains(&backend, MEMORY_INTENSIVE_INDICATORS)
        || redis_cache
        || features.iter().any(|f| f.contains("analytics"));

    if intensive {
        MemoryPattern::MemoryIntensive
    } else if profile.expected_users > MODERATE_MEMORY_USERS {
        MemoryPattern::ModerateMemory
    } else {
        MemoryPattern::LowMemory
    }
}

fn peak_hours(project_name: &str) -> Vec<u8> {
    let name = project_name.to_lowercase();
    PEAK_HOURS_BY_CATEGORY
        .iter()
        .find(|(keywords, _)| any_contains(&name, keywords))
        .map_or(DEFAULT_PEAK_HOURS, |(_, hours)| *hours)
        .to_vec()
}

/// Render a human-readable, multi-line summary of a usage pattern.
pub fn pattern_summary(pattern: &UsagePattern) -> String {
    let mut lines = vec![
        format!("Traffic: {}", pattern.traffic_type),
        format!("Database: {}", pattern.db_load),
        format!("Storage: {}", pattern.storage_access),
        format!("Scaling: {}", pattern.scaling_need),
        format!("CPU: {}", pattern.cpu_pattern),
        format!("Memory: {}", pattern.memory_pattern),
    ];

    if let Some(hours) = pattern.peak_hours.as_deref().filter(|h| !h.is_empty()) {
        let hours: Vec<String> = hours.iter().map(|h| format!("{h}:00")).collect();
        lines.push(format!("Peak Hours: {}", hours.join(", ")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(features: &[&str]) -> ProjectProfile {
        let mut profile = ProjectProfile::example();
        profile.features = features.iter().map(|f| f.to_string()).collect();
        profile
    }

    #[test]
    fn test_example_profile() {
        let pattern = analyze(&ProjectProfile::example());
        assert_eq!(pattern.traffic_type, TrafficType::PredictablePeaks);
        // write: upload, tracking, real-time = 3; read: analytics = 1
        assert_eq!(pattern.db_load, DbLoad::WriteHeavy);
        assert_eq!(pattern.storage_access, StorageAccess::FrequentReads);
        assert_eq!(pattern.scaling_need, ScalingNeed::AutoScaleRequired);
        assert_eq!(pattern.cpu_pattern, CpuPattern::CpuIntensive);
        assert_eq!(pattern.memory_pattern, MemoryPattern::MemoryIntensive);
        assert_eq!(pattern.peak_hours, Some(vec![12, 13, 19, 20, 21]));
    }

    #[test]
    fn test_db_load_classification() {
        assert_eq!(analyze(&profile_with(&["analytics dashboard"])).db_load, DbLoad::ReadHeavy);
        assert_eq!(analyze(&profile_with(&["search", "upload"])).db_load, DbLoad::Balanced);
        assert_eq!(analyze(&profile_with(&[])).db_load, DbLoad::Balanced);
        assert_eq!(analyze(&profile_with(&["Audit LOGGING"])).db_load, DbLoad::WriteHeavy);
    }

    #[test]
    fn test_storage_access_classification() {
        assert_eq!(
            analyze(&profile_with(&["backup", "image gallery"])).storage_access,
            StorageAccess::MixedHotCold
        );
        assert_eq!(
            analyze(&profile_with(&["historical archive"])).storage_access,
            StorageAccess::MixedHotCold
        );
        assert_eq!(
            analyze(&profile_with(&["chat"])).storage_access,
            StorageAccess::OccasionalAccess
        );
    }

    #[test]
    fn test_scaling_need() {
        let mut profile = ProjectProfile::example();
        profile.traffic_pattern = TrafficPattern::Seasonal;
        assert_eq!(analyze(&profile).scaling_need, ScalingNeed::ScheduledScaling);

        profile.traffic_pattern = TrafficPattern::Steady;
        profile.expected_users = 100_000;
        assert_eq!(analyze(&profile).scaling_need, ScalingNeed::FixedCapacity);
        profile.expected_users = 100_001;
        assert_eq!(analyze(&profile).scaling_need, ScalingNeed::HorizontalScaling);
    }

    #[test]
    fn test_cpu_and_memory_patterns() {
        let mut profile = profile_with(&["chat"]);
        profile.tech_stack.backend = "Go".to_string();
        profile.tech_stack.cache = None;
        profile.traffic_pattern = TrafficPattern::Bursty;
        profile.expected_users = 10_000;

        let pattern = analyze(&profile);
        assert_eq!(pattern.cpu_pattern, CpuPattern::VariableCpu);
        assert_eq!(pattern.memory_pattern, MemoryPattern::LowMemory);

        profile.traffic_pattern = TrafficPattern::Steady;
        profile.expected_users = 60_000;
        let pattern = analyze(&profile);
        assert_eq!(pattern.cpu_pattern, CpuPattern::ModerateCpu);
        assert_eq!(pattern.memory_pattern, MemoryPattern::ModerateMemory);

        profile.tech_stack.cache = Some("Redis Cluster".to_string());
        assert_eq!(analyze(&profile).memory_pattern, MemoryPattern::MemoryIntensive);
    }

    #[test]
    fn test_peak_hours_by_category() {
        assert_eq!(peak_hours("ShopSmart"), vec![18, 19, 20, 21, 22]);
        assert_eq!(peak_hours("Enterprise CRM"), vec![9, 10, 11, 14, 15, 16]);
        assert_eq!(peak_hours("Game Hub"), vec![19, 20, 21, 22, 23]);
        assert_eq!(peak_hours("Notes"), vec![9, 12, 18, 20]);
        // First category wins
        assert_eq!(peak_hours("Video Delivery"), vec![12, 13, 19, 20, 21]);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let profile = ProjectProfile::example();
        assert_eq!(analyze(&profile), analyze(&profile));
    }

    #[test]
    fn test_pattern_summary() {
        let summary = pattern_summary(&analyze(&ProjectProfile::example()));
        assert!(summary.starts_with("Traffic: predictable-peaks\n"));
        assert!(summary.contains("Database: write-heavy"));
        assert!(summary.ends_with("Peak Hours: 12:00, 13:00, 19:00, 20:00, 21:00"));
    }
}
