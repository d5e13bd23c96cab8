//! Fetch command implementation.
//!
//! Runs the fixed promoter query and prints the result set.

use crate::models::config::load_config;
use crate::models::table::{render_csv, render_json, render_table, QueryResult};
use crate::services::clickhouse::ClickHouseClient;
use crate::Result;
use colored::Colorize;

/// The report query. Rows with a null, empty, or `0000-00-00` placeholder
/// birth date are filtered out by the warehouse.
pub const PROMOTERS_QUERY: &str = "\
SELECT promoter_code, name, cellphone, city_id, birth_date, membership_date
FROM dwh.snapp_promoters_info_view
WHERE birth_date IS NOT NULL
  AND birth_date != ''
  AND birth_date != '0000-00-00'
LIMIT 10;";

/// Fetch promoter records and print them in the requested format.
pub async fn fetch(format: &str) -> Result<()> {
    let config = load_config();
    tracing::debug!(
        "fetching promoter records from {}:{}/{}",
        config.host,
        config.port,
        config.database
    );

    // Client lives for this one query and is dropped on every exit path.
    let result = {
        let client = ClickHouseClient::new(config);
        client.execute(PROMOTERS_QUERY).await?
    };

    print_result(&result, format)
}

/// Print a result set in the requested format.
fn print_result(result: &QueryResult, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", render_json(result)?),
        "csv" => print!("{}", render_csv(result)),
        _ => {
            println!(
                "{}",
                format!("Found {} promoter records:", result.rows.len())
                    .bold()
                    .cyan()
            );
            println!();
            print!("{}", render_table(result));
        }
    }

    Ok(())
}
