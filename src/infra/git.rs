use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace};

use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

/// Git working tree accessed through the `git` binary.
///
/// Every query runs with `-C <root>` and `--relative`, so paths are reported
/// relative to the root and changes outside it are ignored. Renames are listed
/// as a deletion plus an addition.
pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    /// Verify that `workspace_root` is inside a git working tree.
    pub async fn open(workspace_root: impl Into<PathBuf>) -> AppResult<Self> {
        let workspace_root = workspace_root.into();
        if workspace_root.as_os_str().is_empty() {
            return Err(AppError::Validation(
                "root directory must not be empty".to_string(),
            ));
        }

        let git = Self { workspace_root };
        let inside = git.run(&["rev-parse", "--is-inside-work-tree"]).await?;
        if inside.trim() != "true" {
            return Err(AppError::RepositoryAccess(format!(
                "{} is not inside a git working tree",
                git.workspace_root.display()
            )));
        }
        Ok(git)
    }

    async fn run(&self, args: &[&str]) -> AppResult<String> {
        trace!(root = %self.workspace_root.display(), ?args, "running git");
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.workspace_root)
            .args(args)
            .output()
            .await
            .map_err(|err| AppError::RepositoryAccess(format!("failed to run git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::RepositoryAccess(format!(
                "git {} failed in {}: {}",
                args.join(" "),
                self.workspace_root.display(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn changed_files(&self) -> AppResult<Vec<String>> {
        let output = self
            .run(&[
                "diff",
                "--name-only",
                "-z",
                "--no-renames",
                "--relative",
                "HEAD",
            ])
            .await?;
        let files = parse_name_list(&output);
        debug!(count = files.len(), "collected diff summary");
        Ok(files)
    }

    async fn file_diff(&self, path: &str) -> AppResult<String> {
        self.run(&["diff", "--no-renames", "--relative", "HEAD", "--", path])
            .await
    }
}

fn parse_name_list(output: &str) -> Vec<String> {
    output
        .split('\0')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}


#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::testing::init_repo;
    use super::*;

    #[test]
    fn splits_nul_separated_names() {
        let names = parse_name_list("src/main.rs\0dir with space/a b.txt\0");
        assert_eq!(names, vec!["src/main.rs", "dir with space/a b.txt"]);
        assert!(parse_name_list("").is_empty());
    }

    #[tokio::test]
    async fn rejects_empty_root() {
        let result = GitCli::open("").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_directory_outside_repository() {
        let dir = TempDir::new().unwrap();
        let result = GitCli::open(dir.path()).await;
        assert!(matches!(result, Err(AppError::RepositoryAccess(_))));
    }

    #[tokio::test]
    async fn clean_tree_has_no_changes() {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path(), &[("README.md", "hello\n")]);

        let git = GitCli::open(dir.path()).await.unwrap();
        assert!(git.changed_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reports_modified_files_and_their_diff() {
        let dir = TempDir::new().unwrap();
        init_repo(
            dir.path(),
            &[("README.md", "hello\n"), ("src/lib.rs", "fn a() {}\n")],
        );
        fs::write(dir.path().join("src/lib.rs"), "fn b() {}\n").unwrap();
        fs::write(dir.path().join("README.md"), "hello world\n").unwrap();

        let git = GitCli::open(dir.path()).await.unwrap();
        let files = git.changed_files().await.unwrap();
        assert_eq!(files, vec!["README.md", "src/lib.rs"]);

        let diff = git.file_diff("src/lib.rs").await.unwrap();
        assert!(diff.contains("-fn a() {}"));
        assert!(diff.contains("+fn b() {}"));
        assert!(!diff.contains("hello world"));
    }

    #[tokio::test]
    async fn scopes_paths_to_subdirectory_root() {
        let dir = TempDir::new().unwrap();
        init_repo(
            dir.path(),
            &[("README.md", "hello\n"), ("app/main.rs", "fn main() {}\n")],
        );
        fs::write(dir.path().join("README.md"), "changed\n").unwrap();
        fs::write(dir.path().join("app/main.rs"), "fn main() { run() }\n").unwrap();

        let git = GitCli::open(dir.path().join("app")).await.unwrap();
        assert_eq!(git.changed_files().await.unwrap(), vec!["main.rs"]);
        assert!(git.file_diff("main.rs").await.unwrap().contains("+fn main() { run() }"));
    }
}
