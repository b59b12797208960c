//! Domain models: user profile, tracked skills, job applications, and the
//! assessment question/result types shared across modules.

use serde::{Deserialize, Serialize};

/// The profile captured at onboarding and filled in on the profile page.
/// `photo` and `resume` are reserved slots; nothing populates them yet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
  pub name: String,
  pub phone: String,
  #[serde(default)] pub education: String,
  #[serde(default)] pub career_goal: String,
  #[serde(default)] pub bio: String,
  #[serde(default)] pub skills: Vec<String>,
  #[serde(default)] pub interests: Vec<String>,
  #[serde(default)] pub photo: Option<String>,
  #[serde(default)] pub resume: Option<String>,
}

/// Category buckets for the skills tracker. Grouping by category is a derived
/// view; the stored order stays insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
  Technical,
  #[serde(rename = "Soft Skills")]
  SoftSkills,
  Languages,
  Tools,
  Other,
}

impl SkillCategory {
  /// Display order for category grouping on the skills tracker.
  pub const ALL: [SkillCategory; 5] = [
    SkillCategory::Technical,
    SkillCategory::SoftSkills,
    SkillCategory::Languages,
    SkillCategory::Tools,
    SkillCategory::Other,
  ];
}

impl Default for SkillCategory {
  fn default() -> Self { SkillCategory::Technical }
}

/// A tracked skill with a progress score in [0, 100].
/// Distinct from the free-text tags on `UserProfile`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skill {
  pub name: String,
  pub progress: u8,
  #[serde(default)] pub category: SkillCategory,
}

impl Skill {
  /// Four-band proficiency label derived from progress. Distinct from the
  /// three-tier test-result level in the assessment engine.
  pub fn level(&self) -> &'static str {
    match self.progress {
      80..=u8::MAX => "Expert",
      60..=79 => "Advanced",
      40..=59 => "Intermediate",
      _ => "Beginner",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
  Applied,
  Interview,
  Rejected,
  Accepted,
}

/// One tracked application. Ids are uuid-v4 so rapid successive adds can
/// never collide. There is no delete operation, matching the product flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobApplication {
  pub id: String,
  pub title: String,
  pub company: String,
  pub status: JobStatus,
  /// YYYY-MM-DD
  pub applied_date: String,
}

/// A multiple-choice question: exactly four options, one correct index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
  pub text: String,
  pub options: Vec<String>,
  pub correct: usize,
}

/// Fixed question set for one assessable subject.
#[derive(Clone, Debug)]
pub struct SubjectBank {
  pub subject: String,
  pub questions: Vec<Question>,
}

/// Immutable outcome of a finished assessment.
#[derive(Clone, Debug, Serialize)]
pub struct TestResult {
  pub subject: String,
  pub score_percent: u8,
  pub correct_count: usize,
  pub total_questions: usize,
  pub seconds_spent: u32,
  pub level: &'static str,
  pub recommendations: Vec<String>,
}

/// Catalog entry shown on the dashboard; `detail` backs the career page.
#[derive(Clone, Debug, Serialize)]
pub struct CareerPath {
  pub id: u32,
  pub title: String,
  pub description: String,
  pub salary_range: String,
  pub demand: String,
  pub growth: String,
  pub skills: Vec<String>,
  pub detail: CareerDetail,
}

#[derive(Clone, Debug, Serialize)]
pub struct CareerDetail {
  pub roadmap: Vec<RoadmapPeriod>,
  pub companies: Vec<String>,
  pub locations: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoadmapPeriod {
  pub period: String,
  pub tasks: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct FaqEntry {
  pub question: String,
  pub answer: String,
}
