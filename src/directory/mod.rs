// 用户目录：id -> 姓名、头像地址

pub mod loader;
pub mod updater;

pub use loader::{DirectoryUser, UserDirectory, load_directory, parse_directory};
pub use updater::{spawn_directory_refresh, update_directory};
