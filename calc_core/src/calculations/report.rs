//! # Calculation Report
//!
//! Builds the four titled text blocks attached to every
//! [`CalculationResult`], and a plain-text rendering for terminals.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::calculations::beam::CalculationResult;
use crate::config::DesignCriteria;
use crate::materials::SteelProfile;

pub const INPUT_DATA_TITLE: &str = "Input Data";
pub const REACTIONS_TITLE: &str = "Support Reactions";
pub const RESULTS_TITLE: &str = "Calculation Results";
pub const COMPLIANCE_TITLE: &str = "Code Compliance Check";

/// One titled block of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub content: String,
}

impl ReportSection {
    fn new(title: &str, lines: Vec<String>) -> Self {
        ReportSection {
            title: title.to_string(),
            content: lines.join("\n"),
        }
    }
}

fn verdict(sufficient: bool) -> &'static str {
    if sufficient {
        "✅ sufficient"
    } else {
        "❌ insufficient"
    }
}

/// Assemble the report sections, always in the same four-block order.
pub fn build_sections(
    result: &CalculationResult,
    profile: &SteelProfile,
    criteria: &DesignCriteria,
) -> Vec<ReportSection> {
    let input = &result.input_data;

    let input_data = ReportSection::new(
        INPUT_DATA_TITLE,
        vec![
            format!("Span length: {:.2} m", input.length),
            format!("Support type: {}", input.support_type.label()),
            format!("Force: {:.2} kN", input.force),
            format!("Force position: {:.1}% of span", input.force_position * 100.0),
            format!("Profile: {}", profile.name),
        ],
    );

    let reactions = ReportSection::new(
        REACTIONS_TITLE,
        result
            .reactions
            .entries()
            .into_iter()
            .map(|(name, value, unit)| format!("{}: {:.2} {}", name, value, unit))
            .collect(),
    );

    let results = ReportSection::new(
        RESULTS_TITLE,
        vec![
            format!("Maximum bending moment: {:.2} kN·m", result.max_moment),
            format!("Maximum deflection: {:.3} mm", result.max_deflection),
            format!("Maximum stress: {:.2} MPa", result.max_stress),
        ],
    );

    let compliance = ReportSection::new(
        COMPLIANCE_TITLE,
        vec![
            format!("Strength: {}", verdict(result.is_strength_sufficient)),
            format!("Allowable stress: {:.1} MPa", criteria.allowable_stress_mpa),
            format!("Stiffness: {}", verdict(result.is_stiffness_sufficient)),
            format!("Allowable deflection: L/{}", criteria.deflection_denominator()),
        ],
    );

    vec![input_data, reactions, results, compliance]
}

/// Render a result as plain text for terminal output.
#[must_use]
pub fn render_text(result: &CalculationResult) -> String {
    let mut output = String::new();

    for section in &result.report_sections {
        let _ = writeln!(output, "{}", section.title);
        let _ = writeln!(output, "{}", "-".repeat(section.title.chars().count()));
        for line in section.content.lines() {
            let _ = writeln!(output, "  {}", line);
        }
        output.push('\n');
    }

    let _ = writeln!(
        output,
        "RESULT: {}",
        if result.passes() { "PASS" } else { "FAIL" }
    );
    output
}
