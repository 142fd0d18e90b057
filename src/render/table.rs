//! Plain-text dashboard

use std::fmt::Write;

use crate::metrics::{Dashboard, Medal, POINTS_TARGET, SOLVED_TARGET};

const BAR_WIDTH: usize = 30;

/// Render the dashboard as text cards and tables
pub fn render_table(dashboard: &Dashboard) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_dashboard(&mut out, dashboard)?;
    Ok(out)
}

fn write_dashboard(out: &mut String, dashboard: &Dashboard) -> std::fmt::Result {
    let summary = &dashboard.summary;
    let metrics = &dashboard.metrics;

    writeln!(out, "SkillRack Analytics Dashboard")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{:<16} {}", "Student Name", summary.name)?;
    writeln!(out, "{:<16} {}", "Roll Number", summary.roll_number)?;
    writeln!(out, "{:<16} {}", "Department", summary.department)?;
    writeln!(out, "{:<16} {}", "College", summary.college)?;
    writeln!(out, "{:<16} #{}", "Current Rank", summary.rank)?;
    writeln!(out, "{:<16} {}", "Current Level", summary.level)?;
    writeln!(out)?;

    let bronze = dashboard
        .medals
        .iter()
        .find(|m| m.medal == Medal::Bronze)
        .map(|m| m.count)
        .unwrap_or(0);

    writeln!(out, "Key Metrics")?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(
        out,
        "{:<16} {:>8}   {:.2}% of {}",
        "Programs Solved", metrics.solved_programs, metrics.solved_percentage, SOLVED_TARGET
    )?;
    writeln!(
        out,
        "{:<16} {:>8}   {:.2}% of {}",
        "Total Points", metrics.total_points, metrics.points_percentage, POINTS_TARGET
    )?;
    writeln!(out, "{:<16} {:>8}", "Bronze Medals", bronze)?;
    writeln!(out, "{:<16} {}", "Academic Year", summary.year)?;
    writeln!(out)?;

    writeln!(out, "Points Breakdown")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for entry in &metrics.breakdown {
        let formula = format!("{} × {} = {}", entry.count, entry.multiplier, entry.points);
        writeln!(out, "{:<12} {:<28} {:>8}", entry.category, formula, entry.points)?;
    }
    writeln!(out, "{:<12} {:<28} {:>8}", "Total", "", metrics.total_points)?;
    writeln!(out)?;

    writeln!(out, "Language Distribution")?;
    writeln!(out, "{}", "-".repeat(60))?;
    if dashboard.languages.is_empty() {
        writeln!(out, "(no solved programs)")?;
    }
    for usage in &dashboard.languages {
        writeln!(
            out,
            "{:<8} {:<width$} {:>6} ({:.1}%)",
            usage.language,
            bar(usage.share),
            usage.solved,
            usage.share,
            width = BAR_WIDTH
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Medals")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for medal in &dashboard.medals {
        writeln!(
            out,
            "{:<8} {:>6}  {}",
            medal.medal.name(),
            medal.count,
            medal.color
        )?;
    }

    Ok(())
}

/// Horizontal bar for a 0-100 share
fn bar(share: f64) -> String {
    let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}
