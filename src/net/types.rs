//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies so serde does the shape
//! checking at the boundary. User payloads are deliberately NOT typed here:
//! endpoints disagree on user field names, so they stay a tagged
//! [`RawUser`] until the normalizer in [`crate::state::user`] converts them
//! to the canonical record. Missing optional fields default rather than
//! failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untrusted user payload exactly as an endpoint returned it.
///
/// Field names and presence vary by endpoint (`username` vs `user_name`,
/// flat vs nested). The only way across this boundary is
/// [`crate::state::user::normalize`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawUser(pub Value);

/// Body of a successful login or register response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<RawUser>,
}

/// Response to `POST /auth/send-verification-code`.
///
/// The development backend echoes the code back; production will not.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct VerificationCodeSent {
    #[serde(default)]
    pub code: Option<String>,
}

/// A user as embedded in tasks, reviews, and other aggregate payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A marketplace task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub location_details: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub budget_amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub headcount: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub employer: Option<PublicUser>,
}

impl Task {
    /// Chinese status label shown in lists and detail views.
    pub fn status_label(&self) -> &'static str {
        match self.status.as_deref() {
            Some("pending_approval") => "待审核",
            Some("recruiting") => "招募中",
            Some("in_progress") => "进行中",
            Some("payment_pending") => "待支付",
            Some("completed") => "已完成",
            Some("closed") => "已关闭",
            Some("rejected") => "已拒绝",
            _ => "未知",
        }
    }
}

/// `GET /tasks` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `GET /tasks/:uuid` and `POST /tasks` bodies nest the task.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TaskDetail {
    pub task: Task,
}

/// Pagination block shared by list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items_per_page: u32,
}

/// Worker/employer dashboard body. The backend uses camelCase here, unlike
/// everywhere else.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default, rename = "activeTasks")]
    pub active_tasks: u32,
    #[serde(default, rename = "monthlyIncome")]
    pub monthly_income: f64,
    #[serde(default, rename = "workHours")]
    pub work_hours: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, rename = "reviewCount")]
    pub review_count: u32,
    #[serde(default, rename = "recentTasks")]
    pub recent_tasks: Vec<Task>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A recent-activity line on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// `GET /payments` body: wallet summary plus withdrawal accounts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub accounts: Vec<WithdrawalAccount>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A saved withdrawal destination (e.g. alipay, wechat, bank).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalAccount {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub account: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A ledger entry. Withdrawals carry negative amounts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /payments/withdraw` body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WithdrawalCreated {
    pub transaction: Transaction,
}

/// `POST /payments/withdrawal-accounts` body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountCreated {
    pub account: WithdrawalAccount,
}

/// A review left by one party of a completed task on the other.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub uuid: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub review_type: Option<String>,
    #[serde(default)]
    pub reviewer: Option<PublicUser>,
    #[serde(default)]
    pub reviewee: Option<PublicUser>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /reviews/user/:uuid` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReviewList {
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub stats: Option<ReviewStats>,
}

/// Aggregate rating block attached to review lists.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReviewStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub average_rating: f64,
}

/// A completed task still awaiting this user's review, from
/// `GET /reviews/pending`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PendingReview {
    #[serde(default)]
    pub task: Task,
    /// The counterpart to be reviewed (worker or employer).
    #[serde(default)]
    pub user: PublicUser,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// `GET /reviews/pending` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PendingReviewList {
    #[serde(default)]
    pub pending_reviews: Vec<PendingReview>,
    #[serde(default)]
    pub count: u64,
}

/// `POST /reviews` body nests the created review.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReviewCreated {
    pub review: Review,
}

/// `GET /admin/dashboard` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdminDashboard {
    #[serde(default)]
    pub platform_stats: PlatformStats,
    #[serde(default)]
    pub recent_activity: Vec<AdminActivity>,
}

/// Platform-wide counters on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub active_tasks: u64,
    #[serde(default)]
    pub completed_tasks: u64,
    #[serde(default)]
    pub total_revenue: f64,
}

/// A recent-activity line on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdminActivity {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// `PUT /users/profile` and `PUT /users/settings` nest the updated user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UpdatedUser {
    #[serde(default)]
    pub user: Option<RawUser>,
}

/// `POST /users/profile/avatar` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AvatarUploaded {
    #[serde(default)]
    pub avatar_url: Option<String>,
}
