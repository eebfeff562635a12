//! Handlers for the `rules` and `config` commands.

use crate::analyzer::cost_optimize::rules::{RuleDomain, all_rules};
use crate::config::types::Config;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
struct RuleEntry {
    code: &'static str,
    domain: RuleDomain,
    title: &'static str,
    description: &'static str,
    ignored: bool,
}

/// List the rule catalogue, marking rules the configuration ignores.
pub fn handle_rules(json: bool, config: &Config) -> Result<()> {
    let entries: Vec<RuleEntry> = all_rules()
        .iter()
        .map(|rule| RuleEntry {
            code: rule.code(),
            domain: rule.domain(),
            title: rule.title(),
            description: rule.description(),
            ignored: config.optimizer.should_ignore_rule(rule.code()),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("\n{}", "📋 Cost Optimization Rules".bright_white().bold());
    println!("{}", "═".repeat(60).bright_blue());

    let mut current_domain = None;
    for entry in &entries {
        if current_domain != Some(entry.domain) {
            current_domain = Some(entry.domain);
            println!("\n{}", entry.domain.as_str().to_uppercase().bright_cyan().bold());
        }

        let code = if entry.ignored {
            format!("{} (ignored)", entry.code).dimmed()
        } else {
            entry.code.yellow()
        };
        println!("  {} {}", code, entry.title.bright_white());
        println!("    {}", entry.description.dimmed());
    }
    println!();

    Ok(())
}

/// Print the effective configuration.
pub fn handle_config(config: &Config) -> Result<()> {
    println!("{}", crate::config::to_toml(config)?);
    Ok(())
}
