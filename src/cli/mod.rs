pub mod io;
pub mod output;
mod shell;
pub mod shell_context;
pub mod state;

pub use shell::{run_cli, Shell};
pub use shell_context::{CliMode, ShellContext};
pub use state::MenuState;
