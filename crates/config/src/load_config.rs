// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Walks from `start` up to the filesystem root looking for `filename`.
pub fn find_in_parent(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// Picks the config file to read.
///
/// An explicit path wins (relative paths are taken from `cwd`), then the
/// nearest `filename` in `cwd` or a parent, then `default_config_dir`.
pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: &Path,
    filename: &str,
    cli_file: Option<&Path>,
) -> PathBuf {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return cli_file.to_path_buf();
        }
        return clean(cwd.join(cli_file));
    }

    if let Some(found) = find_in_parent(cwd, filename) {
        return found;
    }

    clean(default_config_dir.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &Path, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/work/acirfx.config.yaml"))
    }

    #[test]
    fn test_resolve_order() {
        let cwd = Path::new("/work/crates/fixtures");
        let default_dir = Path::new("/home/me/.config/acirfx");

        let path = resolve_config_path(not_found, cwd, default_dir, "acirfx.config.yaml", None);
        assert_eq!(path, PathBuf::from("/home/me/.config/acirfx/acirfx.config.yaml"));

        let path = resolve_config_path(found, cwd, default_dir, "acirfx.config.yaml", None);
        assert_eq!(path, PathBuf::from("/work/acirfx.config.yaml"));

        let path = resolve_config_path(
            found,
            cwd,
            default_dir,
            "acirfx.config.yaml",
            Some(Path::new("/etc/acirfx.yaml")),
        );
        assert_eq!(path, PathBuf::from("/etc/acirfx.yaml"));

        let path = resolve_config_path(
            found,
            cwd,
            default_dir,
            "acirfx.config.yaml",
            Some(Path::new("../conf.yaml")),
        );
        assert_eq!(path, PathBuf::from("/work/crates/conf.yaml"));
    }

    #[test]
    fn test_find_in_parent_walks_up() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("acirfx.config.yaml"), "").unwrap();

        assert_eq!(
            find_in_parent(&nested, "acirfx.config.yaml"),
            Some(temp.path().join("acirfx.config.yaml"))
        );
        assert_eq!(find_in_parent(&nested, "missing.yaml"), None);
    }
}
