//! Paginated text report over a completed match run.
//!
//! Formatting only: every number in the report was computed by the matcher
//! beforehand. Pages are separated by form-feed lines so the document can be
//! printed or piped through `pr`-style tooling.

use crate::models::{ApplicantProfile, ScoredListing};

/// Report line width in characters
const PAGE_WIDTH: usize = 78;
/// Report page height in lines
const PAGE_HEIGHT: usize = 56;
/// Minimum room left on a page before a role block starts
const ROLE_BLOCK_RESERVE: usize = 12;

/// Renders an applicant's recommendations as a paginated text document
#[derive(Debug)]
pub struct RecommendationReport<'a> {
    profile: &'a ApplicantProfile,
    matches: &'a [ScoredListing],
}

impl<'a> RecommendationReport<'a> {
    pub fn new(profile: &'a ApplicantProfile, matches: &'a [ScoredListing]) -> Self {
        Self { profile, matches }
    }

    pub fn render(&self) -> String {
        let mut page = PageWriter::new();

        // Banner
        page.push(rule('='));
        page.push(centered("Internship & Placement"));
        page.push(centered("Role Recommendations"));
        page.push(rule('='));
        page.blank();

        // Profile summary
        page.push("Your Profile".to_string());
        page.push(format!("Education: {}", self.profile.education));
        for line in wrap_text(
            &format!("Skills: {}", self.profile.skills.join(", ")),
            PAGE_WIDTH,
        ) {
            page.push(line);
        }
        page.blank();
        page.push(rule('-'));
        page.blank();

        page.push(format!("Top {} Matching Roles", self.matches.len()));
        page.blank();

        for (index, role) in self.matches.iter().enumerate() {
            page.ensure_room(ROLE_BLOCK_RESERVE);
            self.render_role(&mut page, index, role);

            if index < self.matches.len() - 1 {
                page.push(rule('-'));
                page.blank();
            }
        }

        // Footer on the last page
        page.blank();
        page.push(centered(&format!(
            "Generated on {}",
            chrono::Utc::now().format("%B %-d, %Y")
        )));

        page.finish()
    }

    fn render_role(&self, page: &mut PageWriter, index: usize, role: &ScoredListing) {
        page.push(spread(
            &format!("{}. {}", index + 1, role.title),
            &format!("{}% Match", role.match_percentage()),
        ));

        if !role.company.is_empty() {
            page.push(format!("Company:  {}", role.company));
        }
        if !role.city.is_empty() && !role.state.is_empty() {
            page.push(format!("Location: {}, {}", role.city, role.state));
        }

        let mut details = String::new();
        if !role.stipend.is_empty() {
            details.push_str(&format!("Stipend: {}  ", role.stipend));
        }
        if !role.duration.is_empty() {
            details.push_str(&format!("Duration: {}  ", role.duration));
        }
        if !role.openings.is_empty() {
            details.push_str(&format!("Openings: {}", role.openings));
        }
        if !details.is_empty() {
            page.push(details.trim_end().to_string());
        }

        if !role.apply_by.is_empty() {
            page.push(format!("Apply by: {}", role.apply_by));
        }
        page.blank();

        page.push("Matched Skills:".to_string());
        for line in wrap_text(&role.matched_skills.join(", "), PAGE_WIDTH - 2) {
            page.push(format!("  {}", line));
        }

        if role.education_satisfied {
            page.push("  * Education requirement met".to_string());
        }
        page.blank();

        if !role.description.is_empty() {
            page.push("Role Description:".to_string());
            for line in wrap_text(&role.description, PAGE_WIDTH - 2) {
                page.push(format!("  {}", line));
            }
            page.blank();
        }

        if !role.application_tips.is_empty() {
            page.ensure_room(6);
            page.push("Application Tips:".to_string());
            for line in wrap_text(&role.application_tips, PAGE_WIDTH - 2) {
                page.push(format!("  {}", line));
            }
            page.blank();
        }
    }
}

/// Accumulates lines and inserts form-feed page breaks
struct PageWriter {
    lines: Vec<String>,
    lines_on_page: usize,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            lines_on_page: 0,
        }
    }

    fn push(&mut self, line: String) {
        if self.lines_on_page >= PAGE_HEIGHT {
            self.page_break();
        }
        self.lines.push(line);
        self.lines_on_page += 1;
    }

    fn blank(&mut self) {
        self.push(String::new());
    }

    fn page_break(&mut self) {
        self.lines.push("\u{c}".to_string());
        self.lines_on_page = 0;
    }

    /// Start a new page when fewer than `needed` lines remain on this one
    fn ensure_room(&mut self, needed: usize) {
        if self.lines_on_page > 0 && self.lines_on_page + needed > PAGE_HEIGHT {
            self.page_break();
        }
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

fn rule(fill: char) -> String {
    std::iter::repeat(fill).take(PAGE_WIDTH).collect()
}

fn centered(text: &str) -> String {
    if text.len() >= PAGE_WIDTH {
        return text.to_string();
    }
    let pad = (PAGE_WIDTH - text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Left text and right text on one line, padded apart
fn spread(left: &str, right: &str) -> String {
    if left.len() + right.len() + 2 > PAGE_WIDTH {
        return format!("{}  {}", left, right);
    }
    let pad = PAGE_WIDTH - left.len() - right.len();
    format!("{}{}{}", left, " ".repeat(pad), right)
}

/// Word-wrap text to the given width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
