//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.
//!
//! Assessment payloads intentionally never include the correct option index
//! while a test is in progress.

use serde::{Deserialize, Serialize};

use crate::assessment::{AssessmentEngine, Phase, TIME_BUDGET_SECS};
use crate::domain::{CareerPath, FaqEntry, JobApplication, JobStatus, Skill, SkillCategory, TestResult, UserProfile};
use crate::util::format_mmss;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Login {
        name: String,
        phone: String,
    },
    Logout,
    GetProfile,
    UpdateProfile {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        education: Option<String>,
        #[serde(default, rename = "careerGoal")]
        career_goal: Option<String>,
        #[serde(default)]
        bio: Option<String>,
        #[serde(default)]
        skills: Option<Vec<String>>,
        #[serde(default)]
        interests: Option<Vec<String>>,
    },
    GetSkills,
    AddSkill {
        name: String,
        progress: i32,
        #[serde(default)]
        category: SkillCategory,
    },
    UpdateSkill {
        index: usize,
        name: String,
        progress: i32,
        #[serde(default)]
        category: SkillCategory,
    },
    RemoveSkill {
        index: usize,
    },
    GetJobs,
    AddJob {
        title: String,
        company: String,
    },
    SetJobStatus {
        #[serde(rename = "jobId")]
        job_id: String,
        status: JobStatus,
    },
    GetSubjects,
    ChooseSubject {
        subject: String,
    },
    StartTest,
    SelectAnswer {
        option: usize,
    },
    NextQuestion,
    ResetTest,
    GetTestState,
    AnalyzeResume {
        text: String,
    },
    StartInterview,
    GenerateReport,
    GetCareers,
    GetCareerDetail {
        id: u32,
    },
    GetFaq,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Profile {
        #[serde(rename = "loggedIn")]
        logged_in: bool,
        profile: Option<UserProfile>,
    },
    Skills {
        skills: Vec<SkillOut>,
        groups: Vec<SkillGroupOut>,
    },
    Jobs {
        jobs: Vec<JobApplication>,
        counts: StatusCounts,
    },
    Subjects {
        subjects: Vec<String>,
    },
    TestState {
        state: AssessmentView,
    },
    ResumeScore {
        score: Option<u8>,
    },
    InterviewQuestions {
        questions: Vec<String>,
    },
    Report {
        report: ReportOut,
    },
    Careers {
        careers: Vec<CareerSummaryOut>,
    },
    CareerDetail {
        career: CareerPath,
    },
    Faq {
        entries: Vec<FaqEntry>,
    },
    Error {
        message: String,
    },
}

/// Snapshot of the assessment engine for a hosting UI.
#[derive(Debug, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum AssessmentView {
    Idle,
    Selected {
        subject: String,
        #[serde(rename = "questionCount")]
        question_count: usize,
        #[serde(rename = "budgetSecs")]
        budget_secs: u32,
    },
    Running {
        subject: String,
        current: usize,
        total: usize,
        question: QuestionView,
        /// The option currently selected for the shown question, if any.
        selected: Option<usize>,
        #[serde(rename = "remainingSecs")]
        remaining_secs: u32,
        #[serde(rename = "remainingDisplay")]
        remaining_display: String,
    },
    Finished {
        result: TestResult,
    },
}

/// A question as shown to the client: no correct index.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub text: String,
    pub options: Vec<String>,
}

/// Convert the engine's internal phase to the public snapshot.
pub fn assessment_view(engine: &AssessmentEngine) -> AssessmentView {
    match engine.phase() {
        Phase::Idle => AssessmentView::Idle,
        Phase::Selected { subject, questions } => AssessmentView::Selected {
            subject: subject.clone(),
            question_count: questions.len(),
            budget_secs: TIME_BUDGET_SECS,
        },
        Phase::Running(test) => {
            let q = &test.questions[test.current];
            AssessmentView::Running {
                subject: test.subject.clone(),
                current: test.current,
                total: test.questions.len(),
                question: QuestionView { text: q.text.clone(), options: q.options.clone() },
                selected: test.answers[test.current],
                remaining_secs: test.remaining_secs,
                remaining_display: format_mmss(test.remaining_secs),
            }
        }
        Phase::Finished(result) => AssessmentView::Finished { result: result.clone() },
    }
}

/// Dashboard card view of a career path (detail stripped).
#[derive(Debug, Serialize)]
pub struct CareerSummaryOut {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "salaryRange")]
    pub salary_range: String,
    pub demand: String,
    pub growth: String,
    pub skills: Vec<String>,
}

pub fn to_career_summary(c: &CareerPath) -> CareerSummaryOut {
    CareerSummaryOut {
        id: c.id,
        title: c.title.clone(),
        description: c.description.clone(),
        salary_range: c.salary_range.clone(),
        demand: c.demand.clone(),
        growth: c.growth.clone(),
        skills: c.skills.clone(),
    }
}

/// Per-status bucket counts for the applied-jobs overview.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub applied: usize,
    pub interview: usize,
    pub rejected: usize,
    pub accepted: usize,
}

pub fn count_statuses(jobs: &[JobApplication]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for job in jobs {
        match job.status {
            JobStatus::Applied => counts.applied += 1,
            JobStatus::Interview => counts.interview += 1,
            JobStatus::Rejected => counts.rejected += 1,
            JobStatus::Accepted => counts.accepted += 1,
        }
    }
    counts
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct LoginIn {
    pub name: String,
    pub phone: String,
}

/// Partial profile update: supplied fields overwrite, omitted fields are
/// retained from the stored profile.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdateIn {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default, rename = "careerGoal")]
    pub career_goal: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct ProfileOut {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub struct SkillIn {
    pub name: String,
    pub progress: i32,
    #[serde(default)]
    pub category: SkillCategory,
}

/// A tracked skill as shown to the client, with its derived level label.
#[derive(Debug, Serialize)]
pub struct SkillOut {
    pub name: String,
    pub progress: u8,
    pub category: SkillCategory,
    pub level: &'static str,
}

/// One category bucket of the grouped skills view.
#[derive(Debug, Serialize)]
pub struct SkillGroupOut {
    pub category: SkillCategory,
    pub skills: Vec<SkillOut>,
}

#[derive(Serialize)]
pub struct SkillsOut {
    /// Stored insertion order, for the index-addressed update/remove calls.
    pub skills: Vec<SkillOut>,
    /// Derived per-category grouping in fixed display order.
    pub groups: Vec<SkillGroupOut>,
}

fn to_skill_out(skill: &Skill) -> SkillOut {
    SkillOut {
        name: skill.name.clone(),
        progress: skill.progress,
        category: skill.category,
        level: skill.level(),
    }
}

/// Build the client view of the skills list: flat list plus the grouped view.
/// Every category appears, empty or not, so the tracker layout is stable.
pub fn to_skills_out(skills: &[Skill]) -> SkillsOut {
    let groups = SkillCategory::ALL
        .iter()
        .map(|&category| SkillGroupOut {
            category,
            skills: skills.iter().filter(|s| s.category == category).map(to_skill_out).collect(),
        })
        .collect();
    SkillsOut { skills: skills.iter().map(to_skill_out).collect(), groups }
}

#[derive(Debug, Deserialize)]
pub struct JobIn {
    pub title: String,
    pub company: String,
}

#[derive(Debug, Deserialize)]
pub struct JobStatusIn {
    pub status: JobStatus,
}

#[derive(Serialize)]
pub struct JobsOut {
    pub jobs: Vec<JobApplication>,
    pub counts: StatusCounts,
}

#[derive(Serialize)]
pub struct SubjectsOut {
    pub subjects: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChooseSubjectIn {
    pub subject: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerIn {
    pub option: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResumeIn {
    pub text: String,
}

#[derive(Serialize)]
pub struct ResumeOut {
    /// None when the submitted text was empty (analysis rejected).
    pub score: Option<u8>,
}

#[derive(Serialize)]
pub struct InterviewOut {
    pub questions: Vec<String>,
}

/// Simulated report. No file is produced; `note` says so explicitly.
#[derive(Debug, Serialize)]
pub struct ReportOut {
    pub title: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    pub sections: Vec<ReportSectionOut>,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct ReportSectionOut {
    pub title: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct FaqOut {
    pub entries: Vec<FaqEntry>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, progress: u8, category: SkillCategory) -> Skill {
        Skill { name: name.into(), progress, category }
    }

    #[test]
    fn skill_levels_follow_the_four_bands() {
        let cases = [
            (100, "Expert"),
            (80, "Expert"),
            (79, "Advanced"),
            (60, "Advanced"),
            (59, "Intermediate"),
            (40, "Intermediate"),
            (39, "Beginner"),
            (0, "Beginner"),
        ];
        for (progress, expected) in cases {
            let s = skill("Rust", progress, SkillCategory::Technical);
            assert_eq!(s.level(), expected, "progress {progress}");
        }
    }

    #[test]
    fn skills_view_groups_by_category_in_display_order() {
        let stored = vec![
            skill("Git", 85, SkillCategory::Tools),
            skill("React", 70, SkillCategory::Technical),
            skill("Communication", 30, SkillCategory::SoftSkills),
            skill("Python", 55, SkillCategory::Technical),
        ];
        let out = to_skills_out(&stored);

        // Flat list keeps insertion order so index-addressed calls line up.
        let names: Vec<_> = out.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Git", "React", "Communication", "Python"]);
        assert_eq!(out.skills[0].level, "Expert");

        // All five buckets, fixed order, populated from the stored list.
        let order: Vec<_> = out.groups.iter().map(|g| g.category).collect();
        assert_eq!(order, SkillCategory::ALL);
        let technical = &out.groups[0];
        assert_eq!(technical.skills.len(), 2);
        assert_eq!(technical.skills[0].name, "React");
        assert_eq!(technical.skills[0].level, "Advanced");
        assert_eq!(technical.skills[1].level, "Intermediate");
        let soft = &out.groups[1];
        assert_eq!(soft.skills[0].level, "Beginner");
        assert!(out.groups[2].skills.is_empty());
    }
}
