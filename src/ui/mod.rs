//! Terminal output for the CLI
//!
//! Uses `cliclack` when attached to an interactive terminal and falls back
//! to plain, script-friendly lines otherwise (pipes, CI, `GOMARKET_PLAIN`).

mod context;
mod output;
mod prompts;

pub use context::UiContext;
pub use output::{
    intro, outro_success, step_info, step_ok, step_ok_detail, step_warn, step_warn_hint,
};
pub use prompts::confirm;
