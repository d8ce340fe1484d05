pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{daily_reports, monthly_reports};
pub use exec::exec;
pub use output::{
    output_daily_json, output_daily_table, output_monthly_json, output_monthly_table,
    output_ndjson,
};
