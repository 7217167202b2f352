mod args;
mod fetch;
mod list;
mod params;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use fetch::run_fetch;
pub use list::{run_list, write_asset_table};
pub use params::{FetchParams, ListParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
