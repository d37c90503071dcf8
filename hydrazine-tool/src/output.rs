//! Text, JSON and YAML rendering of charts and catalog listings.

use std::fmt::Write;

use hydrazine_core::{Chart, LoadoutBuild, LocationNode, Ship};
use serde::Serialize;

use crate::error::HydError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("unknown format: {}", s)),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    build: Option<&'a LoadoutBuild>,
    chart: &'a Chart<'a>,
}

fn structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>, HydError> {
    match format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)? + "\n")),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        OutputFormat::Text => Ok(None),
    }
}

pub fn render_chart(
    chart: &Chart<'_>,
    build: Option<&LoadoutBuild>,
    format: OutputFormat,
) -> Result<String, HydError> {
    if let Some(out) = structured(&Report { build, chart }, format)? {
        return Ok(out);
    }

    let mut out = String::new();
    if let Some(build) = build {
        let _ = writeln!(out, "{} // {}", build.ship, build.goal);
        let _ = writeln!(
            out,
            "Total cost: {:.0} UEC   Jumps: {}   Travel time: {}",
            build.total_cost, build.total_jumps, build.estimated_travel_time
        );
        let _ = writeln!(out, "Route: {}", build.route.join(" -> "));
        out.push('\n');
    }

    let _ = writeln!(out, "Resolved route ({} stops):", chart.route.len());
    for (id, point) in chart.route.nodes.iter().zip(&chart.route.points) {
        let _ = writeln!(out, "  {:<14} ({:>5.1}, {:>5.1})", id, point.x, point.y);
    }
    if !chart.route.is_drawable() {
        let _ = writeln!(out, "  (not enough resolved stops to draw a path)");
    }

    let _ = writeln!(out, "\nShop markers:");
    for marker in &chart.markers {
        let component = marker.component;
        match &marker.placement {
            Some(p) => {
                let _ = writeln!(
                    out,
                    "  {:<12} {:<28} @ {:<14} slot {} ({:>5.1}, {:>5.1})  [{}]",
                    marker.label,
                    component.shop_name,
                    p.node_id,
                    p.slot,
                    p.position.x,
                    p.position.y,
                    component.location
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "  {:<12} {:<28} @ unresolved location {:?}",
                    marker.label, component.shop_name, component.location
                );
            }
        }
    }

    Ok(out)
}

pub fn render_ships(ships: &[&Ship], format: OutputFormat) -> Result<String, HydError> {
    if let Some(out) = structured(&ships, format)? {
        return Ok(out);
    }
    let mut out = String::new();
    for ship in ships {
        let _ = writeln!(
            out,
            "{:<24} {:<22} {:<14} {}",
            ship.name, ship.manufacturer, ship.focus, ship.id
        );
    }
    let _ = writeln!(out, "{} active", ships.len());
    Ok(out)
}

pub fn render_locations(nodes: &[&LocationNode], format: OutputFormat) -> Result<String, HydError> {
    if let Some(out) = structured(&nodes, format)? {
        return Ok(out);
    }
    let mut out = String::new();
    for node in nodes {
        let _ = writeln!(
            out,
            "{:<18} {:<14} {:<8} ({:.0}, {:.0})",
            node.name, node.id, node.category, node.position.x, node.position.y
        );
    }
    Ok(out)
}
