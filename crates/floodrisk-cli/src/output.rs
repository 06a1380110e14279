//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use floodrisk_domain::{Adjustment, DamageTable, Estimate};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    currency_symbol: String,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            currency_symbol: "£".to_string(),
        }
    }

    /// Formatter for fatal errors on stderr, coloured only on a terminal.
    pub fn for_errors(no_color: bool, stderr_is_terminal: bool) -> Self {
        Self::new(OutputFormat::Quiet, !no_color && stderr_is_terminal)
    }

    /// Use a different currency symbol.
    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency_symbol = symbol.to_string();
        self
    }

    /// Format a damage estimate.
    pub fn format_estimate(&self, estimate: &Estimate) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_estimate_json(estimate),
            OutputFormat::Table => Ok(self.format_estimate_table(estimate)),
            OutputFormat::Quiet => Ok(self.currency(estimate.cost)),
        }
    }

    /// Format the damage table.
    pub fn format_damage_table(&self, table: &DamageTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_damage_table_json(table),
            OutputFormat::Table => Ok(self.format_damage_table_table(table)),
            OutputFormat::Quiet => Ok(table
                .iter()
                .map(|t| format!("{} {}", t.bucket, t.cost))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_estimate_json(&self, estimate: &Estimate) -> Result<String> {
        let adjustment = match estimate.adjustment {
            Adjustment::Padding { count } => serde_json::json!({
                "mode": "padding",
                "non_inundated_count": count
            }),
            Adjustment::Percentage { value } => serde_json::json!({
                "mode": "percentage",
                "percent_inundated": value
            }),
        };

        let value = serde_json::json!({
            "readings": estimate.readings,
            "adjustment": adjustment,
            "mean_depth_m": estimate.mean_depth,
            "bucket": estimate.bucket,
            "cost": estimate.cost,
            "currency_symbol": self.currency_symbol
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_estimate_table(&self, estimate: &Estimate) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Readings", "Adjustment", "Mean depth (m)", "Bucket", "Damage cost"]);
        builder.push_record([
            estimate.readings.to_string(),
            estimate.adjustment.to_string(),
            format!("{:.3}", estimate.mean_depth),
            estimate.bucket.to_string(),
            self.currency(estimate.cost),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let headline = format!("Expected damage cost {}", self.currency(estimate.cost));
        format!("{}\n{}", table, self.colorize(&headline, Color::Green))
    }

    fn format_damage_table_json(&self, table: &DamageTable) -> Result<String> {
        let tiers: Vec<serde_json::Value> = table
            .iter()
            .map(|t| serde_json::json!({ "bucket": t.bucket, "cost": t.cost }))
            .collect();
        Ok(serde_json::to_string_pretty(&tiers)?)
    }

    fn format_damage_table_table(&self, table: &DamageTable) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Bucket", "Mean depth (m)", "Damage cost"]);

        let tiers = table.tiers();
        for (i, tier) in tiers.iter().enumerate() {
            let previous = i.checked_sub(1).map(|p| tiers[p].bucket);
            let is_last = i + 1 == tiers.len();
            let range = match (previous, is_last) {
                (None, true) => ">= 0".to_string(),
                (None, false) if tier.bucket == 0 => "0".to_string(),
                (None, false) => format!("<= {}", tier.bucket),
                (Some(prev), true) => format!("> {}", prev),
                (Some(prev), false) => format!("({}, {}]", prev, tier.bucket),
            };
            builder.push_record([tier.bucket.to_string(), range, self.currency(tier.cost)]);
        }

        let mut rendered = builder.build();
        rendered
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        rendered.to_string()
    }

    fn currency(&self, amount: u64) -> String {
        format_currency(amount, &self.currency_symbol)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), Color::Red)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

/// Format a whole-unit amount with thousands separators, e.g. `£105,000`.
pub fn format_currency(amount: u64, symbol: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", symbol, grouped)
}
