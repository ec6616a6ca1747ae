//! Output formatters for screening reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScreenerError};
use crate::output::report::ScreeningReport;
use crate::scoring::report::Severity;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for downstream integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharable reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with a score gauge and category breakdown
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Screening Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 860px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #0a66c2;
            padding-bottom: 20px;
        }
        .gauge {
            width: 140px;
            height: 140px;
            border-radius: 50%;
            margin: 20px auto;
            display: flex;
            align-items: center;
            justify-content: center;
            background: conic-gradient(#0a66c2 {{ gauge_degrees }}deg, #e9ecef 0deg);
        }
        .gauge-inner {
            width: 104px;
            height: 104px;
            border-radius: 50%;
            background: white;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.8em;
            font-weight: bold;
        }
        .score-badge {
            display: inline-block;
            padding: 6px 14px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #0a66c2;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .category-row { margin: 12px 0; }
        .category-bar {
            background: #e9ecef;
            border-radius: 4px;
            height: 14px;
            overflow: hidden;
        }
        .category-fill {
            background: #0a66c2;
            height: 100%;
        }
        .recommendation {
            background: #f8f9fa;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #17a2b8;
        }
        .severity-high { border-left-color: #dc3545; }
        .severity-medium { border-left-color: #ffc107; }
        .strengths {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #28a745;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
        ul { margin: 10px 0; }
        li { margin: 5px 0; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Screening Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
            <div class="gauge"><div class="gauge-inner">{{ overall_score }}</div></div>
            <span class="score-badge {{ score_class }}">{{ score_label }}</span>
            <p><strong>{{ verdict }}</strong></p>
        </div>

        {% if has_candidate %}
        <div class="section">
            <h2>Candidate</h2>
            {{ candidate_html | safe }}
        </div>
        {% endif %}

        <div class="section">
            <h2>Category Breakdown</h2>
            {{ category_rows_html | safe }}
        </div>

        {% if has_strengths %}
        <div class="section">
            <h2>Strengths</h2>
            <div class="strengths">{{ strengths_html | safe }}</div>
        </div>
        {% endif %}

        {% if has_recommendations %}
        <div class="section">
            <h2>Recommendations</h2>
            {{ recommendations_html | safe }}
        </div>
        {% endif %}

        <div class="section">
            <h2>Optimization Tips</h2>
            {{ tips_html | safe }}
        </div>

        {% if has_ai_summary %}
        <div class="section">
            <h2>AI Insights</h2>
            {{ ai_summary_html | safe }}
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by Resume Screener v{{ version }}</strong></p>
            <p>Resume: {{ resume_file }} | Words: {{ word_count }} | AI model: {{ ai_model }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    overall_score: u8,
    gauge_degrees: String,
    score_class: String,
    score_label: String,
    verdict: String,
    has_candidate: bool,
    candidate_html: String,
    category_rows_html: String,
    has_strengths: bool,
    strengths_html: String,
    has_recommendations: bool,
    recommendations_html: String,
    tips_html: String,
    has_ai_summary: bool,
    ai_summary_html: String,
    version: String,
    resume_file: String,
    word_count: usize,
    ai_model: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_score_bar(&self, score: u8) -> String {
        let filled = (score as usize) / 5;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
        if self.use_colors {
            let color = match score {
                80..=100 => Color::Green,
                60..=79 => Color::Yellow,
                _ => Color::Red,
            };
            bar.color(color).to_string()
        } else {
            bar
        }
    }

    fn severity_icon(&self, severity: Severity) -> &'static str {
        if self.use_colors {
            match severity {
                Severity::High => "🚨",
                Severity::Medium => "⚠️ ",
            }
        } else {
            match severity {
                Severity::High => "[!]",
                Severity::Medium => "[*]",
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS SCREENING REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        if let Some(details) = &report.personal_details {
            output.push_str(&self.format_header("👤 Candidate", 2));
            output.push_str(&format!("Name: {}\n", details.name));
            output.push_str(&format!("Role: {}\n", details.job_role));
            output.push_str(&format!("Company: {}\n", details.current_company));
            output.push_str(&format!("Education: {}\n", details.last_education));
        }

        output.push_str(&self.format_header("Overall Score", 2));
        output.push_str(&format!(
            "{}% {}\n",
            report.score.overall_score,
            self.format_score_badge(report.score.overall_score)
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(report.verdict(), Color::Cyan)
        ));

        output.push_str(&self.format_header("Category Breakdown", 2));
        for (category, score) in report.score.category_scores.iter() {
            output.push_str(&format!(
                "  {:<26} {} {:>3}%\n",
                category.display_name(),
                self.format_score_bar(score),
                score
            ));
        }
        output.push_str(&format!(
            "\nIssues found: {} total, {} critical\n",
            report.score.total_issues, report.score.critical_issues
        ));

        if !report.score.strengths.is_empty() {
            output.push_str(&self.format_header("✅ Strengths", 2));
            for strength in &report.score.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !report.score.recommendations.is_empty() {
            output.push_str(&self.format_header("📋 Recommendations", 2));
            for (i, rec) in report.score.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {} {} ({:?})\n",
                    i + 1,
                    self.severity_icon(rec.severity),
                    self.colorize(rec.category.display_name(), Color::White),
                    rec.severity
                ));
                output.push_str(&format!("   Issue: {}\n", rec.issue));
                if self.detailed {
                    output.push_str(&format!("   Impact: {}\n", rec.impact));
                }
                output.push_str(&format!("   Fix: {}\n\n", rec.recommendation));
            }
        }

        output.push_str(&self.format_header("💡 Optimization Tips", 2));
        for tip in &report.score.optimization_tips {
            output.push_str(&format!("  • {}\n", tip));
        }

        if let Some(summary) = &report.ai_summary {
            output.push_str(&self.format_header("🤖 AI Insights", 2));
            output.push_str(&format!(
                "{} {}\n\n",
                self.colorize("Summary:", Color::Cyan),
                summary.professional_summary
            ));
            output.push_str(&format!(
                "{} {}\n",
                self.colorize("Suggestions:", Color::Cyan),
                summary.improvement_suggestions
            ));
        }

        if let Some(feedback) = &report.ai_feedback {
            if !feedback.recommendations.is_empty() {
                output.push_str(&self.format_header("🤖 Content-Aware Recommendations", 2));
                for rec in &feedback.recommendations {
                    output.push_str(&format!(
                        "  • {} [{}]\n    {}\n",
                        self.colorize(&rec.category, Color::White),
                        rec.severity,
                        rec.recommendation
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Screener v{} | AI model: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.screener_version,
            report.metadata.ai_model.as_deref().unwrap_or("none")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Screening Report\n\n");
        output.push_str(&format!(
            "**Overall Score: {}%** - {}\n\n",
            report.score.overall_score,
            report.verdict()
        ));

        if let Some(details) = &report.personal_details {
            output.push_str("## Candidate\n\n");
            output.push_str(&format!("- **Name:** {}\n", details.name));
            output.push_str(&format!("- **Role:** {}\n", details.job_role));
            output.push_str(&format!("- **Company:** {}\n", details.current_company));
            output.push_str(&format!("- **Education:** {}\n\n", details.last_education));
        }

        output.push_str("## Category Breakdown\n\n");
        output.push_str("| Category | Score |\n|----------|-------|\n");
        for (category, score) in report.score.category_scores.iter() {
            output.push_str(&format!("| {} | {}% |\n", category.display_name(), score));
        }
        output.push_str(&format!(
            "\nIssues found: **{}** total, **{}** critical\n\n",
            report.score.total_issues, report.score.critical_issues
        ));

        if !report.score.strengths.is_empty() {
            output.push_str("## Strengths\n\n");
            for strength in &report.score.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !report.score.recommendations.is_empty() {
            output.push_str("## Recommendations\n\n");
            for rec in &report.score.recommendations {
                output.push_str(&format!(
                    "### {} ({:?})\n\n",
                    rec.category.display_name(),
                    rec.severity
                ));
                output.push_str(&format!("- **Issue:** {}\n", rec.issue));
                output.push_str(&format!("- **Impact:** {}\n", rec.impact));
                output.push_str(&format!("- **Fix:** {}\n\n", rec.recommendation));
            }
        }

        output.push_str("## Optimization Tips\n\n");
        for tip in &report.score.optimization_tips {
            output.push_str(&format!("- {}\n", tip));
        }
        output.push('\n');

        if let Some(summary) = &report.ai_summary {
            output.push_str("## AI Insights\n\n");
            output.push_str(&format!("> {}\n\n", summary.professional_summary));
            output.push_str(&format!("{}\n\n", summary.improvement_suggestions));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "Generated {} by Resume Screener v{} | Resume: {} | Words: {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.screener_version,
                report.metadata.resume_file,
                report.metadata.word_count
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn build_template(&self, report: &ScreeningReport) -> HtmlTemplate {
        let (score_class, score_label) = match report.score.overall_score {
            90..=100 => ("score-excellent", "Excellent"),
            80..=89 => ("score-good", "Very Good"),
            70..=79 => ("score-good", "Good"),
            60..=69 => ("score-fair", "Fair"),
            _ => ("score-poor", "Poor"),
        };

        let gauge_degrees = format!("{:.0}", report.score.overall_score as f64 * 3.6);

        let category_rows_html = report
            .score
            .category_scores
            .iter()
            .map(|(category, score)| {
                format!(
                    r#"<div class="category-row"><strong>{}</strong>: {}%<div class="category-bar"><div class="category-fill" style="width: {}%"></div></div></div>"#,
                    html_escape(category.display_name()),
                    score,
                    score
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let strengths_html = bullet_list(&report.score.strengths);

        let recommendations_html = report
            .score
            .recommendations
            .iter()
            .map(|rec| {
                let severity_class = match rec.severity {
                    Severity::High => "severity-high",
                    Severity::Medium => "severity-medium",
                };
                format!(
                    r#"<div class="recommendation {}"><strong>{} ({:?})</strong><p>{}</p><p><em>{}</em></p><p>{}</p></div>"#,
                    severity_class,
                    html_escape(rec.category.display_name()),
                    rec.severity,
                    html_escape(&rec.issue),
                    html_escape(&rec.impact),
                    html_escape(&rec.recommendation)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let tips_html = bullet_list(&report.score.optimization_tips);

        let candidate_html = report
            .personal_details
            .as_ref()
            .map(|details| {
                format!(
                    "<p><strong>{}</strong> - {}</p><p>{} | {}</p>",
                    html_escape(&details.name),
                    html_escape(&details.job_role),
                    html_escape(&details.current_company),
                    html_escape(&details.last_education)
                )
            })
            .unwrap_or_default();

        let ai_summary_html = report
            .ai_summary
            .as_ref()
            .map(|summary| {
                format!(
                    "<blockquote>{}</blockquote><p>{}</p>",
                    html_escape(&summary.professional_summary),
                    html_escape(&summary.improvement_suggestions)
                )
            })
            .unwrap_or_default();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            processing_time: report.metadata.processing_time_ms,
            overall_score: report.score.overall_score,
            gauge_degrees,
            score_class: score_class.to_string(),
            score_label: score_label.to_string(),
            verdict: report.verdict().to_string(),
            has_candidate: report.personal_details.is_some(),
            candidate_html,
            category_rows_html,
            has_strengths: !report.score.strengths.is_empty(),
            strengths_html,
            has_recommendations: !report.score.recommendations.is_empty(),
            recommendations_html,
            tips_html,
            has_ai_summary: report.ai_summary.is_some(),
            ai_summary_html,
            version: report.metadata.screener_version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            word_count: report.metadata.word_count,
            ai_model: report
                .metadata
                .ai_model
                .clone()
                .unwrap_or_else(|| "none".to_string()),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        self.build_template(report)
            .render()
            .map_err(|e| ResumeScreenerError::OutputFormatting(format!("HTML render failed: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let rows = items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect::<Vec<_>>()
        .join("");
    format!("<ul>{}</ul>", rows)
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::{ReportMetadata, ScreeningReport};
    use crate::scoring::engine::ScoringEngine;
    use chrono::Utc;

    fn sample_report() -> ScreeningReport {
        let engine = ScoringEngine::new().unwrap();
        let score = engine.analyze(
            "Jane Doe jane@example.com (555) 123-4567\n\
             Experience: developed Python services, improved latency by 30%.\n\
             Education: B.S. Computer Science. Skills: SQL, React.",
        );
        ScreeningReport::new(
            score,
            ReportMetadata {
                generated_at: Utc::now(),
                screener_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: "resume.txt".to_string(),
                word_count: 25,
                processing_time_ms: 1,
                ai_model: None,
            },
        )
    }

    #[test]
    fn test_console_output_mentions_every_category() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("Keywords & Skills"));
        assert!(output.contains("Formatting"));
        assert!(output.contains("Content Quality"));
        assert!(output.contains("Structure & Organization"));
        assert!(output.contains("Optimization Tips"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = JsonFormatter::new(false);
        let report = sample_report();
        let json = formatter.format_report(&report).unwrap();
        let parsed: ScreeningReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.score, report.score);
    }

    #[test]
    fn test_markdown_output_has_score_table() {
        let formatter = MarkdownFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("| Category | Score |"));
        assert!(output.contains("# ATS Screening Report"));
    }

    #[test]
    fn test_html_output_escapes_and_renders_gauge() {
        let formatter = HtmlFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("<!DOCTYPE html>"));
        assert!(output.contains("gauge"));
        assert!(output.contains("category-fill"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & c"), "a &lt; b &amp; c");
    }
}
