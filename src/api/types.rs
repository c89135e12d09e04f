//! Wire types exchanged with the counselling API
//!
//! These are plain value records. The client holds no authoritative copy of
//! any of them; views fetch them fresh and drop them when done.
//!
//! Optional fields are `Option` with `#[serde(default)]` so a missing key and
//! an explicit `null` both decode to `None`. Request bodies skip `None`
//! fields entirely so partial updates only touch what the caller set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// The authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
}

/// Body of `POST /auth/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of both signup and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A standardized test and where the student is with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub name: String,
    pub status: String,
}

/// The student's onboarding profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub current_education_level: Option<String>,
    #[serde(default)]
    pub degree_major: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub intended_degree: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub target_intake_year: Option<i32>,
    #[serde(default)]
    pub preferred_countries: Option<Vec<String>>,
    #[serde(default)]
    pub budget_min: Option<i64>,
    #[serde(default)]
    pub budget_max: Option<i64>,
    #[serde(default)]
    pub funding_plan: Option<String>,
    #[serde(default)]
    pub exams: Option<Vec<Exam>>,
    #[serde(default)]
    pub sop_status: Option<String>,
    #[serde(default)]
    pub strength_academics: Option<String>,
    #[serde(default)]
    pub strength_exams: Option<String>,
    #[serde(default)]
    pub strength_sop: Option<String>,
}

/// Partial profile for `PUT /profile`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_education_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intended_degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_intake_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_countries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exams: Option<Vec<Exam>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sop_status: Option<String>,
}

impl ProfileUpdate {
    /// Returns `true` when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Response of `POST /profile/complete`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    pub onboarding_complete: bool,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Target intake as the backend sends it: a year, or a placeholder string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Intake {
    Year(i64),
    Text(String),
}

impl std::fmt::Display for Intake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intake::Year(year) => write!(f, "{}", year),
            Intake::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub education: String,
    pub target_intake: Intake,
    #[serde(default)]
    pub countries: Vec<String>,
    pub budget: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStrength {
    #[serde(default)]
    pub academics: Option<String>,
    #[serde(default)]
    pub exams: Option<String>,
    #[serde(default)]
    pub sop: Option<String>,
}

/// Snapshot returned by `GET /dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub profile_summary: Option<ProfileSummary>,
    #[serde(default)]
    pub profile_strength: Option<ProfileStrength>,
    pub stage: u32,
    pub stage_label: String,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub shortlisted_count: u32,
    #[serde(default)]
    pub locked_count: u32,
}

// ---------------------------------------------------------------------------
// Universities
// ---------------------------------------------------------------------------

/// A university as returned by search and recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_chance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Response of `GET /universities/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub universities: Vec<University>,
}

/// Body of `POST /universities/shortlist`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistCreate {
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_chance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<String>,
}

impl From<&University> for ShortlistCreate {
    fn from(u: &University) -> Self {
        Self {
            name: u.name.clone(),
            country: u.country.clone(),
            domain: u.domain.clone(),
            web_page: u.web_page.clone(),
            category: u.category.clone(),
            cost_level: u.cost_level.clone(),
            acceptance_chance: u.acceptance_chance.clone(),
            fit_reason: u.fit_reason.clone(),
            risks: u.risks.clone(),
        }
    }
}

/// A saved university
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistItem {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub web_page: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cost_level: Option<String>,
    #[serde(default)]
    pub acceptance_chance: Option<String>,
    #[serde(default)]
    pub fit_reason: Option<String>,
    #[serde(default)]
    pub risks: Option<String>,
    #[serde(default)]
    pub locked: bool,
}

/// Body of `POST /universities/shortlist/{id}/lock`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRequest {
    pub lock: bool,
}

/// Response of the lock endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockStatus {
    pub locked: bool,
}

/// Response of `GET /universities/recommendations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub dream: Vec<University>,
    #[serde(default)]
    pub target: Vec<University>,
    #[serde(default)]
    pub safe: Vec<University>,
}

/// Acknowledgement returned by delete endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

/// A to-do item, either user-created or generated by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    /// Absent in application guidance payloads
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub shortlist_id: Option<String>,
}

/// Body of `POST /todos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortlist_id: Option<String>,
}

/// Body of `PATCH /todos/{id}`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortlist_id: Option<String>,
}

impl TodoPatch {
    /// A patch that only flips completion
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Applies the set fields of this patch to `todo` in place
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = Some(description.clone());
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(category) = &self.category {
            todo.category = Some(category.clone());
        }
        if let Some(shortlist_id) = &self.shortlist_id {
            todo.shortlist_id = Some(shortlist_id.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Counsellor
// ---------------------------------------------------------------------------

/// One turn of the counsellor conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    /// `user` or `assistant`
    pub role: String,
    pub content: String,
    /// Side effects the counsellor performed on this turn, as raw JSON
    #[serde(default)]
    pub actions: Option<Vec<Value>>,
}

/// Body of `POST /counsellor/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub content: String,
}

/// Response of `POST /counsellor/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounsellorReply {
    pub message: String,
    #[serde(default)]
    pub actions: Option<Vec<Value>>,
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// A locked university as listed in application guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedUniversity {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub web_page: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cost_level: Option<String>,
    #[serde(default)]
    pub acceptance_chance: Option<String>,
    #[serde(default)]
    pub fit_reason: Option<String>,
    #[serde(default)]
    pub risks: Option<String>,
    #[serde(default)]
    pub locked: Option<bool>,
}

/// Response of `GET /applications`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationGuidance {
    #[serde(default)]
    pub locked_universities: Vec<LockedUniversity>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<String>,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shortlist_item_missing_cost_level_is_none() {
        let item: ShortlistItem = serde_json::from_value(json!({
            "id": "s1",
            "user_id": "u1",
            "name": "MIT",
            "country": "United States",
            "cost_level": null,
            "locked": false
        }))
        .unwrap();
        assert!(item.cost_level.is_none());
        assert!(item.domain.is_none());
    }

    #[test]
    fn test_shortlist_create_skips_unset_fields() {
        let body = serde_json::to_value(ShortlistCreate {
            name: "MIT".into(),
            country: "United States".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, json!({"name": "MIT", "country": "United States"}));
    }

    #[test]
    fn test_profile_update_only_serializes_set_fields() {
        let update = ProfileUpdate {
            gpa: Some("3.8".into()),
            preferred_countries: Some(vec!["Canada".into()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"gpa": "3.8", "preferred_countries": ["Canada"]})
        );
        assert!(!update.is_empty());
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn test_dashboard_accepts_numeric_or_text_intake() {
        let base = |intake: Value| {
            json!({
                "profile_summary": {
                    "education": "CS",
                    "target_intake": intake,
                    "countries": [],
                    "budget": "—"
                },
                "profile_strength": null,
                "stage": 1,
                "stage_label": "Building profile",
                "onboarding_complete": false,
                "todos": [],
                "shortlisted_count": 0,
                "locked_count": 0
            })
        };

        let d: Dashboard = serde_json::from_value(base(json!(2026))).unwrap();
        assert_eq!(
            d.profile_summary.unwrap().target_intake,
            Intake::Year(2026)
        );

        let d: Dashboard = serde_json::from_value(base(json!("—"))).unwrap();
        assert_eq!(d.profile_summary.unwrap().target_intake.to_string(), "—");
    }

    #[test]
    fn test_guidance_todos_without_user_id() {
        let guidance: ApplicationGuidance = serde_json::from_value(json!({
            "locked_universities": [{"id": "s1", "name": "MIT", "country": "US", "locked": true}],
            "required_documents": ["Passport copy"],
            "timeline": ["Submit applications"],
            "todos": [{"id": "t1", "title": "SOP", "completed": false, "shortlist_id": "s1"}]
        }))
        .unwrap();
        assert!(guidance.todos[0].user_id.is_none());
        assert_eq!(guidance.locked_universities[0].locked, Some(true));
    }

    #[test]
    fn test_todo_patch_apply() {
        let mut todo = Todo {
            id: "t1".into(),
            user_id: Some("u1".into()),
            title: "Draft SOP".into(),
            description: None,
            completed: false,
            category: None,
            shortlist_id: None,
        };
        TodoPatch::completed(true).apply_to(&mut todo);
        assert!(todo.completed);
        assert_eq!(todo.title, "Draft SOP");
    }

    #[test]
    fn test_todo_patch_serializes_only_completed() {
        assert_eq!(
            serde_json::to_value(TodoPatch::completed(false)).unwrap(),
            json!({"completed": false})
        );
    }
}
