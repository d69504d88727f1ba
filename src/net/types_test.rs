use super::*;
use serde_json::json;

#[test]
fn raw_user_round_trips_arbitrary_fields() {
    let value = json!({"uuid": "u1", "user_name": "lin", "favorite_color": "red"});
    let raw: RawUser = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(raw.0, value);
    assert_eq!(serde_json::to_value(&raw).unwrap(), value);
}

#[test]
fn auth_payload_tolerates_missing_fields() {
    let payload: AuthPayload = serde_json::from_value(json!({})).unwrap();
    assert!(payload.token.is_none());
    assert!(payload.user.is_none());
}

#[test]
fn auth_payload_carries_token_and_user() {
    let payload: AuthPayload = serde_json::from_value(json!({
        "token": "jwt-abc",
        "user": {"uuid": "u1", "username": "lin", "user_type": "worker"}
    }))
    .unwrap();
    assert_eq!(payload.token.as_deref(), Some("jwt-abc"));
    assert_eq!(payload.user.unwrap().0["uuid"], "u1");
}

#[test]
fn task_deserializes_backend_shape() {
    let task: Task = serde_json::from_value(json!({
        "uuid": "t1",
        "title": "Move boxes",
        "description": "Two hours of lifting",
        "location_type": "offline",
        "payment_type": "hourly",
        "budget_amount": 120.5,
        "currency": "CNY",
        "status": "recruiting",
        "is_urgent": true,
        "employer": {"uuid": "e1", "name": "Acme"}
    }))
    .unwrap();
    assert_eq!(task.uuid, "t1");
    assert_eq!(task.budget_amount, 120.5);
    assert!(task.is_urgent);
    assert_eq!(task.employer.unwrap().name.as_deref(), Some("Acme"));
    assert!(task.start_date.is_none());
}

#[test]
fn status_labels_cover_known_states() {
    let mut task = Task::default();
    for (status, label) in [
        ("recruiting", "招募中"),
        ("in_progress", "进行中"),
        ("payment_pending", "待支付"),
        ("completed", "已完成"),
        ("closed", "已关闭"),
    ] {
        task.status = Some(status.to_owned());
        assert_eq!(task.status_label(), label);
    }
    task.status = None;
    assert_eq!(task.status_label(), "未知");
}

#[test]
fn task_list_defaults_when_pagination_absent() {
    let list: TaskList = serde_json::from_value(json!({"tasks": []})).unwrap();
    assert!(list.tasks.is_empty());
    assert!(list.pagination.is_none());
}

#[test]
fn dashboard_reads_camel_case_keys() {
    let data: DashboardData = serde_json::from_value(json!({
        "activeTasks": 3,
        "monthlyIncome": 2400.0,
        "workHours": 61.5,
        "rating": 4.8,
        "reviewCount": 12,
        "recentTasks": [],
        "activities": [{"id": "activity_1", "content": "完成任务", "date": "2026-08-01"}]
    }))
    .unwrap();
    assert_eq!(data.active_tasks, 3);
    assert_eq!(data.work_hours, 61.5);
    assert_eq!(data.activities[0].content, "完成任务");
}

#[test]
fn transaction_maps_reserved_type_key() {
    let tx: Transaction = serde_json::from_value(json!({
        "uuid": "tx1",
        "type": "withdrawal",
        "amount": -50.0,
        "status": "pending"
    }))
    .unwrap();
    assert_eq!(tx.kind, "withdrawal");
    assert_eq!(tx.amount, -50.0);
}

#[test]
fn wallet_defaults_balance_and_lists() {
    let wallet: Wallet = serde_json::from_value(json!({
        "currency": "CNY",
        "accounts": [{"uuid": "a1", "type": "alipay", "account": "user@example.com", "is_default": true}]
    }))
    .unwrap();
    assert_eq!(wallet.balance, 0.0);
    assert_eq!(wallet.accounts[0].kind, "alipay");
    assert!(wallet.transactions.is_empty());
}

#[test]
fn review_list_reads_stats_block() {
    let list: ReviewList = serde_json::from_value(json!({
        "reviews": [{"uuid": "r1", "rating": 5, "comment": "great", "review_type": "employer_to_worker"}],
        "stats": {"total": 1, "average_rating": 5.0}
    }))
    .unwrap();
    assert_eq!(list.reviews[0].rating, 5);
    assert_eq!(list.stats.unwrap().average_rating, 5.0);
}

#[test]
fn pending_review_list_reads_task_and_counterpart() {
    let list: PendingReviewList = serde_json::from_value(json!({
        "pending_reviews": [{
            "task": {"uuid": "t1", "title": "Move boxes"},
            "user": {"uuid": "w1", "name": "小李", "avatar_url": "/a.png", "user_type": "worker"},
            "completed_at": "2026-08-20"
        }],
        "count": 1
    }))
    .unwrap();
    assert_eq!(list.count, 1);
    let item = &list.pending_reviews[0];
    assert_eq!(item.task.uuid, "t1");
    assert_eq!(item.user.name.as_deref(), Some("小李"));
    assert_eq!(item.completed_at.as_deref(), Some("2026-08-20"));
}

#[test]
fn pending_review_list_defaults_when_empty() {
    let list: PendingReviewList = serde_json::from_value(json!({})).unwrap();
    assert!(list.pending_reviews.is_empty());
    assert_eq!(list.count, 0);
}

#[test]
fn review_created_reads_nested_review() {
    let created: ReviewCreated = serde_json::from_value(json!({
        "review": {
            "uuid": "r1",
            "rating": 4,
            "comment": "合作愉快",
            "reviewer": {"uuid": "e1", "name": "Acme"},
            "reviewee": {"uuid": "w1", "name": "小李"}
        }
    }))
    .unwrap();
    assert_eq!(created.review.rating, 4);
    assert_eq!(created.review.reviewee.unwrap().uuid, "w1");
}

#[test]
fn admin_dashboard_reads_platform_stats() {
    let data: AdminDashboard = serde_json::from_value(json!({
        "platform_stats": {"total_users": 2456, "active_tasks": 528, "total_revenue": 25678.5},
        "recent_activity": [{"type": "new_user", "details": "新用户注册", "time": "2026-08-28T00:00:00Z"}]
    }))
    .unwrap();
    assert_eq!(data.platform_stats.total_users, 2456);
    assert_eq!(data.recent_activity[0].kind.as_deref(), Some("new_user"));
}
