pub mod check;
pub mod context;
pub mod list;

pub use check::{apply_check_overrides, execute_check, run_check, run_check_impl};
pub use context::{apply_exclude_overrides, build_scanner, ensure_root, load_config, resolve_root};
pub use list::{run_list, run_list_impl, write_candidates};
