//! ClickHouse connectivity preflight check.

use super::CheckResult;
use crate::models::config::load_config;
use crate::services::clickhouse::ClickHouseClient;

/// Check that the warehouse is reachable and accepts our credentials.
pub async fn check() -> CheckResult {
    let config = load_config();
    let endpoint = format!("{}:{}", config.host, config.port);
    let client = ClickHouseClient::new(config);

    if client.ping().await.is_err() {
        return CheckResult::fail(
            "ClickHouse",
            &format!("endpoint {} unreachable", endpoint),
            "Check CLICKHOUSE_HOST/CLICKHOUSE_PORT and your network connection",
        );
    }

    match client.verify_credentials().await {
        Ok(()) => CheckResult::ok(
            "ClickHouse",
            &format!("connected to {} as {}", endpoint, client.user()),
        ),
        Err(_) => CheckResult::fail(
            "ClickHouse",
            "credentials rejected",
            "Check CLICKHOUSE_USER and CLICKHOUSE_PASSWORD",
        ),
    }
}
