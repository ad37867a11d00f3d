//! Audit Log API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::activity_log::ActivityLogQuery;
use crate::utils::{AppResponse, AppResult, ok};
use shared::models::ActivityLog;

/// 审计日志查询响应
#[derive(Debug, Serialize)]
pub struct AuditListResponse {
    pub items: Vec<ActivityLog>,
    pub total: i64,
}

/// GET /api/audit-log — 查询审计日志
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ActivityLogQuery>,
) -> AppResult<Json<AppResponse<AuditListResponse>>> {
    let (items, total) = state.audit_service.query(&query).await?;
    Ok(ok(AuditListResponse { items, total }))
}
