//! HTML reporter: self-contained pages for the question form and results
//!
//! The form renders one radio group per question (`question-{index}`, value
//! = option score). Results render as a tier-colored box with one row per
//! category carrying its advice and severity badge.

use crate::{Assessment, AssessmentError, Question};
use std::fmt::Write;

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reporter that generates standalone HTML pages
pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }

    /// Full page containing the questionnaire form.
    ///
    /// Every question is checked before anything is written, so malformed
    /// data yields a `Render` error and no partial form.
    pub fn render_form(&self, questions: &[Question]) -> Result<String, AssessmentError> {
        super::check_renderable(questions)?;

        let mut body = String::with_capacity(4_096);
        body.push_str("<form id=\"questions-container\">\n");
        for (index, question) in questions.iter().enumerate() {
            Self::write_question(&mut body, index, question);
        }
        body.push_str("</form>\n");
        body.push_str(
            "<p class=\"hint\">Record the chosen option numbers (first option = 0) in an \
             answers file and score them with <code>riskcheck --answers FILE</code>.</p>\n",
        );

        tracing::info!("Rendered {} questions", questions.len());
        Ok(Self::page("Vendor Risk Assessment", &body))
    }

    /// Full page containing the result box
    pub fn report(&self, assessment: &Assessment) -> String {
        Self::page("Vendor Risk Assessment Results", &self.render_result(assessment))
    }

    /// Result box fragment
    pub fn render_result(&self, assessment: &Assessment) -> String {
        let tier = assessment.tier;
        let mut html = String::with_capacity(1_024);
        let _ = writeln!(html, "<div id=\"results\" class=\"result-box risk-{}\">", tier.as_str());
        let _ = writeln!(html, "<h4>Overall Risk Level: {}</h4>", tier);
        let _ = writeln!(
            html,
            "<p><strong>Total Score:</strong> {}</p>",
            assessment.total_score
        );
        html.push_str("<hr>\n<h5>Category Insights:</h5>\n");
        for entry in &assessment.advice {
            let _ = writeln!(
                html,
                "<div class=\"category-row\"><div><strong>{}</strong><br><small>{}</small></div>\
                 <div><span class=\"badge badge-{}\">{} Risk</span></div></div>",
                escape_html(&entry.category),
                escape_html(&entry.text),
                entry.severity.as_str(),
                entry.severity
            );
        }
        html.push_str("</div>\n");
        html
    }

    fn write_question(html: &mut String, index: usize, question: &Question) {
        html.push_str("<div class=\"question-card\">\n");
        let _ = writeln!(
            html,
            "<h5>{}</h5><span class=\"category\">{}</span>",
            escape_html(&question.text),
            escape_html(&question.category)
        );
        for (n, option) in question.options.iter().enumerate() {
            let _ = writeln!(
                html,
                "<div class=\"form-check\"><input class=\"form-check-input\" type=\"radio\" \
                 id=\"question-{index}-{n}\" name=\"question-{index}\" value=\"{score}\" required>\
                 <label class=\"form-check-label\" for=\"question-{index}-{n}\">{text}</label></div>",
                index = index,
                n = n,
                score = option.score,
                text = escape_html(&option.text)
            );
        }
        html.push_str("</div>\n");
    }

    fn page(title: &str, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + 2_048);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(html, "<title>{}</title>", escape_html(title));
        html.push_str(Self::style());
        html.push_str("</head>\n<body>\n<main class=\"container\">\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(title));
        html.push_str(body);
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }

    fn style() -> &'static str {
        r##"<style>
:root{--bg:#f7f7f9;--surface:#fff;--border:#e4e4e7;--text:#18181b;--muted:#71717a;--green:#16a34a;--yellow:#ca8a04;--red:#dc2626;--radius:8px}
*{box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:var(--bg);color:var(--text);line-height:1.5;margin:0}
.container{max-width:760px;margin:0 auto;padding:2rem 1rem}
h1{font-size:1.5rem;margin-bottom:1.5rem}
.question-card{background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);padding:1rem 1.25rem;margin-bottom:1rem}
.question-card h5{font-size:1rem;margin:0 0 .25rem}
.question-card .category{font-size:.75rem;color:var(--muted);text-transform:uppercase;letter-spacing:.4px}
.form-check{padding:.2rem 0}
.form-check-label{margin-left:.4rem}
.hint{font-size:.875rem;color:var(--muted)}
.hint code{background:var(--surface);border:1px solid var(--border);border-radius:4px;padding:0 .3rem}
.result-box{background:var(--surface);border:1px solid var(--border);border-left-width:6px;border-radius:var(--radius);padding:1.25rem}
.risk-low{border-left-color:var(--green)}
.risk-medium{border-left-color:var(--yellow)}
.risk-high{border-left-color:var(--red)}
.category-row{display:flex;justify-content:space-between;align-items:center;gap:1rem;padding:.5rem 0;border-bottom:1px solid var(--border)}
.category-row:last-child{border-bottom:none}
.category-row small{color:var(--muted)}
.badge{font-size:.75rem;font-weight:700;padding:.2rem .6rem;border-radius:10px;color:#fff;white-space:nowrap}
.badge-low{background:var(--green)}
.badge-medium{background:var(--yellow)}
.badge-high{background:var(--red)}
</style>
"##
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::CategoryScores;
    use crate::{AnswerOption, CategoryAdvice, RiskTier};

    fn question(text: &str, category: &str, options: Vec<AnswerOption>) -> Question {
        Question::new(text, category, options)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"R&D" isn't</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; isn&#39;t&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_form_radio_groups() {
        let questions = vec![
            question(
                "Is MFA enforced?",
                "Internet Exposure",
                vec![AnswerOption::new("Yes", 0), AnswerOption::new("No", 3)],
            ),
            question(
                "Any <script> in reports?",
                "Data Sensitivity",
                vec![AnswerOption::new("Never", -1)],
            ),
        ];
        let html = HtmlReporter::new().render_form(&questions).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("name=\"question-0\"").count(), 2);
        assert_eq!(html.matches("name=\"question-1\"").count(), 1);
        assert!(html.contains("value=\"3\""));
        assert!(html.contains("value=\"-1\""));
        assert!(html.contains("Any &lt;script&gt; in reports?"));
        assert!(!html.contains("<script>"));
        assert_eq!(html.matches("class=\"question-card\"").count(), 2);
        assert!(!html.contains("<button"));
        assert!(html.contains("<code>riskcheck --answers FILE</code>"));
    }

    #[test]
    fn test_render_form_rejects_question_without_options() {
        let questions = vec![
            question("Fine", "A", vec![AnswerOption::new("x", 1)]),
            question("Broken", "A", vec![]),
        ];
        let err = HtmlReporter::new().render_form(&questions).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::Render("Failed to render questions. Question 1 has no options.".into())
        );
    }

    #[test]
    fn test_render_form_rejects_empty_category() {
        let questions = vec![question("Q", " ", vec![AnswerOption::new("x", 1)])];
        let err = HtmlReporter::new().render_form(&questions).unwrap_err();
        assert!(err.to_string().contains("has no category"));
    }

    #[test]
    fn test_render_result_box() {
        let mut scores = CategoryScores::new();
        scores.add("Compliance & Legal", 3);
        let assessment = Assessment {
            total_score: 38,
            tier: RiskTier::High,
            category_scores: scores,
            advice: vec![CategoryAdvice {
                category: "Compliance & Legal".into(),
                subtotal: 3,
                severity: RiskTier::Medium,
                text: String::new(),
            }],
            question_count: 12,
            assessed_at: "2026-01-01T00:00:00+00:00".into(),
            questionnaire_digest: None,
        };

        let html = HtmlReporter::new().report(&assessment);
        assert!(html.contains("class=\"result-box risk-high\""));
        assert!(html.contains("<h4>Overall Risk Level: High</h4>"));
        assert!(html.contains("<strong>Total Score:</strong> 38"));
        assert!(html.contains("<strong>Compliance &amp; Legal</strong>"));
        assert!(html.contains("<span class=\"badge badge-medium\">Medium Risk</span>"));
    }
}
