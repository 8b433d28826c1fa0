use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;

use crate::{entity::audit_logs, error::AppResult};

/// Best-effort audit trail. Callers log a warning on failure instead of
/// failing the request.
pub async fn log_audit(
    conn: &DatabaseConnection,
    user_id: Option<i32>,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) -> AppResult<()> {
    let entry = audit_logs::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        action: Set(action.to_string()),
        resource: Set(resource.map(str::to_string)),
        metadata: Set(metadata),
        created_at: NotSet,
    };
    entry.insert(conn).await?;

    Ok(())
}
