//! Locates Bear's database file.

use std::path::{Path, PathBuf};

/// Location of Bear's database relative to the user's home directory.
pub const BEAR_DATABASE_RELATIVE_PATH: &str = "Library/Group Containers/9K33E3U3T4.net.shinyfrog.bear/Application Data/database.sqlite";

/// Returns the conventional path to Bear's database for the current user.
///
/// Falls back to a relative path when no home directory can be determined;
/// such a path will normally fail [`exists`].
pub fn locate() -> PathBuf {
    locate_in(&dirs::home_dir().unwrap_or_default())
}

/// Returns the path to Bear's database under the given home directory.
pub fn locate_in(home: &Path) -> PathBuf {
    home.join(BEAR_DATABASE_RELATIVE_PATH)
}

/// Returns true if something exists at `path`.
pub fn exists(path: &Path) -> bool {
    path.exists()
}
