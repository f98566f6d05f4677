//! Console reporter with colored output

use crate::assessment::tier_description;
use crate::{Assessment, CategoryAdvice, Question, RiskTier};
use colored::Colorize;
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print a scored assessment
    pub fn report(&self, assessment: &Assessment) {
        print!("{}", self.render(assessment));
    }

    /// Print just the total and tier
    pub fn report_quiet(&self, assessment: &Assessment) {
        println!(
            "Total: {} ({})",
            assessment.total_score,
            self.paint_tier(assessment.tier, &assessment.tier.to_string())
        );
    }

    /// Print the questionnaire as a numbered list
    pub fn report_questions(&self, questions: &[Question]) {
        print!("{}", self.render_questions(questions));
    }

    pub fn render(&self, assessment: &Assessment) -> String {
        let mut out = String::new();
        self.write_header(&mut out, assessment);
        self.write_tier(&mut out, assessment);
        if !assessment.advice.is_empty() {
            self.write_insights(&mut out, &assessment.advice);
        }
        out
    }

    pub fn render_questions(&self, questions: &[Question]) -> String {
        let mut out = String::new();
        for (index, question) in questions.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} {}",
                index + 1,
                self.bold(&question.text),
                self.dimmed(&format!("[{}]", question.category))
            );
            for option in &question.options {
                if self.verbose {
                    let _ = writeln!(out, "   ( ) {} {}", option.text, self.dimmed(&format!("({:+})", option.score)));
                } else {
                    let _ = writeln!(out, "   ( ) {}", option.text);
                }
            }
        }
        out
    }

    fn write_header(&self, out: &mut String, assessment: &Assessment) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bold("📊 Vendor Risk Assessment"));
        let _ = writeln!(out, "   Questions: {}", assessment.question_count);
        if self.verbose {
            if let Some(ref digest) = assessment.questionnaire_digest {
                let _ = writeln!(out, "   Questionnaire: {}", self.dimmed(&digest[..digest.len().min(12)]));
            }
            let _ = writeln!(out, "   Assessed: {}", self.dimmed(&assessment.assessed_at));
        }
        let _ = writeln!(out);
    }

    fn write_tier(&self, out: &mut String, assessment: &Assessment) {
        let tier = assessment.tier;
        let _ = writeln!(
            out,
            "   Overall Risk Level: {}",
            self.paint_tier(tier, &tier.to_string())
        );
        let _ = writeln!(out, "   Total Score: {}", self.bold(&assessment.total_score.to_string()));
        let _ = writeln!(out, "   {}", self.dimmed(tier_description(tier)));
        let _ = writeln!(out);
    }

    fn write_insights(&self, out: &mut String, advice: &[CategoryAdvice]) {
        let _ = writeln!(out, "   {}", self.bold("Category Insights:"));
        let width = advice.iter().map(|a| a.category.chars().count()).max().unwrap_or(0);

        for entry in advice {
            let badge = format!("{} Risk", entry.severity);
            let _ = writeln!(
                out,
                "   {:<width$}  {} {}",
                entry.category,
                self.paint_tier(entry.severity, &badge),
                self.dimmed(&format!("({})", entry.subtotal)),
                width = width
            );
            if !entry.text.is_empty() {
                let _ = writeln!(out, "     → {}", entry.text);
            }
        }
        let _ = writeln!(out);
    }

    fn paint_tier(&self, tier: RiskTier, text: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match tier {
            RiskTier::Low => text.green().to_string(),
            RiskTier::Medium => text.yellow().to_string(),
            RiskTier::High => text.red().bold().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dimmed(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
