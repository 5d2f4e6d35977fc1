pub mod forecast_item;
pub mod hour_key;
pub mod row;
pub mod run_identifier;
pub mod variable_kind;
