mod commands;
mod handlers;

pub use commands::{Cli, Commands, ShareAction, ShareCommand};
pub use handlers::{
    handle_clear, handle_conflicts, handle_contact, handle_import, handle_init, handle_plan,
    handle_priority, handle_share_create, handle_share_show, handle_show, handle_validate,
    handle_wallpaper,
};
