//! Best-effort parser for free-text model responses.
//!
//! Recommendations are expected as numbered bold titles (`1. **Title**`)
//! followed by free text. Service, savings, risk, complexity, impact and steps
//! are recovered from that text with keyword heuristics. When no numbered
//! titles are found, a coarser section-based parse is attempted.

use crate::analyzer::cost_optimize::types::{Level, Recommendation, Service};
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_DESCRIPTION_CHARS: usize = 200;
const MAX_TITLE_CHARS: usize = 100;
const MAX_STEPS: usize = 5;
const MIN_STEP_CHARS: usize = 10;

const FALLBACK_MAX_RECOMMENDATIONS: usize = 10;
const FALLBACK_MIN_SECTION_CHARS: usize = 50;
const FALLBACK_SAVINGS: f64 = 2_000.0;

static TITLE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+)\.\s*\*\*([^*]+)\*\*").expect("valid title regex"));

static SAVINGS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"₹\s*([\d,]+)",
        r"(?i)([\d,]+)\s*INR",
        r"(?i)sav(?:e|ings?).*?([\d,]+)",
        r"(?i)([\d,]+).*?(?:rupees?|INR)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid savings regex"))
    .collect()
});

static STEP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+[.)]|[-•*])\s+").expect("valid step regex"));

static SECTION_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+|\n\d+\.\s+").expect("valid section regex"));

const GENERIC_STEPS: &[&str] = &[
    "Analyze current configuration and usage",
    "Plan implementation with team",
    "Test in staging environment",
    "Deploy to production with monitoring",
];

/// Parse a model response into candidate recommendations.
///
/// Ids are assigned sequentially from `first_id`. Candidates without a
/// usable title are dropped.
pub fn parse_recommendations(response: &str, first_id: u32) -> Vec<Recommendation> {
    let headers: Vec<_> = TITLE_HEADER.captures_iter(response).collect();
    let mut recommendations = Vec::with_capacity(headers.len());

    for (i, caps) in headers.iter().enumerate() {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let title = title.as_str().trim();
        if title.is_empty() {
            continue;
        }

        let end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(response.len(), |m| m.start());
        let content = response[whole.end()..end].trim();

        recommendations.push(Recommendation {
            id: first_id + recommendations.len() as u32,
            title: title.to_string(),
            service: extract_service(title, content),
            description: truncate_chars(content, MAX_DESCRIPTION_CHARS),
            expected_savings_inr: extract_savings(content),
            risk: extract_risk(content),
            complexity: extract_complexity(content),
            impact: extract_impact(content),
            implementation_steps: extract_steps(content),
        });
    }

    if recommendations.is_empty() {
        log::debug!("No numbered recommendations found, using section parse");
        return parse_sections(response, first_id);
    }
    recommendations
}

/// Coarse fallback: every sufficiently long section after the first becomes a
/// General recommendation with medium risk and complexity.
fn parse_sections(response: &str, first_id: u32) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for section in SECTION_SPLIT.split(response).skip(1) {
        if section.trim().chars().count() < FALLBACK_MIN_SECTION_CHARS {
            continue;
        }

        let first_line = section.lines().next().unwrap_or_default().trim();
        let title = first_line
            .strip_prefix("**")
            .unwrap_or(first_line)
            .trim_end_matches("**")
            .trim();
        if title.is_empty() {
            continue;
        }

        recommendations.push(Recommendation {
            id: first_id + recommendations.len() as u32,
            title: truncate_chars(title, MAX_TITLE_CHARS),
            service: Service::General,
            description: truncate_chars(section, MAX_DESCRIPTION_CHARS),
            expected_savings_inr: FALLBACK_SAVINGS,
            risk: Level::Medium,
            complexity: Level::Medium,
            impact: "Improves cost efficiency".to_string(),
            implementation_steps: vec!["Review and implement recommendation".to_string()],
        });

        if recommendations.len() >= FALLBACK_MAX_RECOMMENDATIONS {
            break;
        }
    }

    recommendations
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Service named in the title or content, else guessed from keywords.
pub fn extract_service(title: &str, content: &str) -> Service {
    const NAMED: &[Service] = &[
        Service::Ec2,
        Service::Rds,
        Service::Storage,
        Service::Network,
        Service::Monitoring,
        Service::Lambda,
        Service::Cdn,
    ];
    const KEYWORDS: &[(&[&str], Service)] = &[
        (&["instance", "compute", "cpu", "memory"], Service::Ec2),
        (&["database", "db", "sql"], Service::Rds),
        (&["storage", "s3", "bucket"], Service::Storage),
    ];

    let text = format!("{title} {content}").to_lowercase();

    if let Some(service) = NAMED
        .iter()
        .find(|s| text.contains(&s.as_str().to_lowercase()))
    {
        return *service;
    }

    KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| text.contains(w)))
        .map_or(Service::General, |(_, service)| *service)
}

/// Monthly savings mentioned in the content, else a keyword-based estimate.
pub fn extract_savings(content: &str) -> f64 {
    for pattern in SAVINGS_PATTERNS.iter() {
        let amount = pattern
            .captures(content)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok());
        if let Some(amount) = amount.filter(|a| a.is_finite()) {
            return amount;
        }
    }

    let lower = content.to_lowercase();
    if lower.contains("downsize") || lower.contains("reduce") {
        3_000.0
    } else if lower.contains("optimize") {
        2_000.0
    } else {
        1_500.0
    }
}

pub fn extract_risk(content: &str) -> Level {
    let lower = content.to_lowercase();
    if lower.contains("high risk") || lower.contains("risky") {
        Level::High
    } else if lower.contains("medium risk") || lower.contains("moderate risk") {
        Level::Medium
    } else {
        Level::Low
    }
}

pub fn extract_complexity(content: &str) -> Level {
    let lower = content.to_lowercase();
    if lower.contains("complex") || lower.contains("difficult") {
        Level::High
    } else if lower.contains("moderate") {
        Level::Medium
    } else {
        Level::Low
    }
}

/// First sentence describing an impact, else the first sentence.
pub fn extract_impact(content: &str) -> String {
    const IMPACT_WORDS: &[&str] = &["impact", "performance", "benefit", "improve"];

    let impact = content
        .split('.')
        .find(|sentence| {
            let lower = sentence.to_lowercase();
            IMPACT_WORDS.iter().any(|w| lower.contains(w))
        })
        .or_else(|| content.split('.').next())
        .map(str::trim)
        .unwrap_or_default();

    if impact.is_empty() {
        "Optimizes cost efficiency".to_string()
    } else {
        impact.to_string()
    }
}

/// Numbered or bulleted lines of the content, at most five.
pub fn extract_steps(content: &str) -> Vec<String> {
    let steps: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| STEP_MARKER.is_match(line))
        .map(|line| STEP_MARKER.replace(line, "").trim().to_string())
        .filter(|step| step.chars().count() > MIN_STEP_CHARS)
        .take(MAX_STEPS)
        .collect();

    if steps.is_empty() {
        GENERIC_STEPS.iter().map(|s| s.to_string()).collect()
    } else {
        steps
    }
}
