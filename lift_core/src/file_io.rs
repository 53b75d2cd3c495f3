//! # File I/O Module
//!
//! Handles project file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent concurrent edits on shared drives
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Projects are saved as `.lsz` (LiftSizer) files containing JSON, one
//! project per file, named after the project number. Lock files use the
//! `.lsz.lock` extension with metadata about who holds the lock.
//!
//! [`ProjectStore`] wraps a directory of project files plus a persistent
//! `counter.json` holding the per-month numbering state.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lift_core::calculations::LoadInputs;
//! use lift_core::file_io::ProjectStore;
//! use lift_core::project::Project;
//!
//! # fn demo(inputs: LoadInputs) -> lift_core::errors::SizingResult<()> {
//! let store = ProjectStore::open("projects")?;
//! let number = store.next_project_number()?;
//! let project = Project::new(number, "Acme Elevators", inputs);
//! store.save(&project)?;
//! # Ok(())
//! # }
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{SizingError, SizingResult};
use crate::project::{Project, ProjectCounter, ProjectStatus, SCHEMA_VERSION};

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "lsz";

/// Lock file metadata stored in .lsz.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both OS-level file locking (via fs2) for process safety and a
/// .lock file with metadata for user visibility.
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    /// The underlying file handle (keeps OS lock)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// Returns `SizingError::FileLocked` when another live process holds
    /// the lock; stale locks (dead pid or older than 24 h) are taken over.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> SizingResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(SizingError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                SizingError::file_error(
                    "create lock",
                    lock_path.display().to_string(),
                    e.to_string(),
                )
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            SizingError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json =
            serde_json::to_string_pretty(&info).map_err(|e| SizingError::SerializationError {
                reason: e.to_string(),
            })?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            SizingError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;

        lock_file.sync_all().map_err(|e| {
            SizingError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a file is locked without acquiring the lock.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if lock_path.exists() {
            if let Ok(info) = read_lock_info(&lock_path) {
                if !is_lock_stale(&info) {
                    return Some(info);
                }
            }
        }
        None
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
        // OS lock is released with _lock_file
    }
}

fn lock_path_for(project_path: &Path) -> PathBuf {
    let mut lock_path = project_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> SizingResult<LockInfo> {
    let contents = read_to_string(lock_path, "read lock")?;
    serde_json::from_str(&contents).map_err(|e| SizingError::SerializationError {
        reason: e.to_string(),
    })
}

/// A live lock belongs to the calling process itself.
fn lock_is_ours(info: &LockInfo) -> bool {
    info.pid == std::process::id()
        && info.machine == hostname().unwrap_or_else(|| "unknown".to_string())
}

/// A lock is stale when its process no longer runs on this machine, or
/// when it is more than 24 hours old.
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
        }
    }

    let age = Utc::now() - info.locked_at;
    age.num_hours() > 24
}

/// Save a project to a file with atomic write semantics.
///
/// Serialize, write to a `.tmp` sibling, fsync, then rename over the
/// target. Interrupted writes never leave a half-written `.lsz` behind.
pub fn save_project(project: &Project, path: &Path) -> SizingResult<()> {
    let json =
        serde_json::to_string_pretty(project).map_err(|e| SizingError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension(format!("{}.tmp", PROJECT_EXTENSION));

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        SizingError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        SizingError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        SizingError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SizingError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a project from a file and validate its schema version.
pub fn load_project(path: &Path) -> SizingResult<Project> {
    let contents = read_to_string(path, "read")?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| SizingError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Load a project, returning whether another user holds its lock.
pub fn load_project_with_lock_check(path: &Path) -> SizingResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    let lock_info = FileLock::check(path);
    Ok((project, lock_info))
}

fn read_to_string(path: &Path, operation: &str) -> SizingResult<String> {
    let mut file = File::open(path).map_err(|e| {
        SizingError::file_error(operation, path.display().to_string(), e.to_string())
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        SizingError::file_error(operation, path.display().to_string(), e.to_string())
    })?;
    Ok(contents)
}

/// Validate that a file version is compatible with the current schema.
/// Major must match; for 0.x files a newer minor than ours is rejected.
fn validate_version(file_version: &str) -> SizingResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || SizingError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

/// One row in a project listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_number: String,
    pub customer: String,
    pub status: ProjectStatus,
    pub modified: DateTime<Utc>,
}

/// Directory-backed store: one `.lsz` file per project, named by project
/// number, plus a `counter.json` with the per-month numbering state.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    const COUNTER_FILE: &'static str = "counter.json";

    /// Open a store, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> SizingResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            SizingError::file_error(
                "create store directory",
                root.display().to_string(),
                e.to_string(),
            )
        })?;
        Ok(ProjectStore { root })
    }

    /// Path of the file a project number maps to.
    pub fn project_path(&self, project_number: &str) -> PathBuf {
        self.root
            .join(project_number)
            .with_extension(PROJECT_EXTENSION)
    }

    /// Issue the next project number and persist the counter.
    pub fn next_project_number(&self) -> SizingResult<String> {
        let counter_path = self.root.join(Self::COUNTER_FILE);

        let mut counter: ProjectCounter = if counter_path.exists() {
            let contents = read_to_string(&counter_path, "read counter")?;
            serde_json::from_str(&contents).map_err(|e| SizingError::SerializationError {
                reason: e.to_string(),
            })?
        } else {
            ProjectCounter::default()
        };

        let number = counter.next(Utc::now());

        let json =
            serde_json::to_string_pretty(&counter).map_err(|e| SizingError::SerializationError {
                reason: e.to_string(),
            })?;
        fs::write(&counter_path, json).map_err(|e| {
            SizingError::file_error(
                "write counter",
                counter_path.display().to_string(),
                e.to_string(),
            )
        })?;

        Ok(number)
    }

    /// Save a project under its project number.
    pub fn save(&self, project: &Project) -> SizingResult<()> {
        save_project(project, &self.project_path(&project.meta.project_number))
    }

    /// Update a stored project: diff against the saved state, append a
    /// revision entry when anything changed, then save. Returns the change
    /// strings (empty when the update was a plain re-save).
    ///
    /// Refuses with `FileLocked` while another process holds the project's
    /// lock; a lock held by this process is fine.
    pub fn update(&self, project: &mut Project) -> SizingResult<Vec<String>> {
        let path = self.project_path(&project.meta.project_number);
        if !path.exists() {
            return Err(SizingError::project_not_found(&project.meta.project_number));
        }

        let (old, lock) = load_project_with_lock_check(&path)?;
        if let Some(info) = lock {
            if !lock_is_ours(&info) {
                return Err(SizingError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", info.user_id, info.machine),
                    info.locked_at.to_rfc3339(),
                ));
            }
        }

        // Revision history belongs to the stored state, not the caller's copy
        project.revisions = old.revisions.clone();
        let changes = project.changes_since(&old);
        project.record_revision(changes.clone());

        self.save(project)?;
        Ok(changes)
    }

    /// Load a project by number. Missing file maps to `ProjectNotFound`.
    pub fn load(&self, project_number: &str) -> SizingResult<Project> {
        let path = self.project_path(project_number);
        if !path.exists() {
            return Err(SizingError::project_not_found(project_number));
        }
        load_project(&path)
    }

    /// Delete a project by number.
    pub fn delete(&self, project_number: &str) -> SizingResult<()> {
        let path = self.project_path(project_number);
        if !path.exists() {
            return Err(SizingError::project_not_found(project_number));
        }
        fs::remove_file(&path).map_err(|e| {
            SizingError::file_error("delete", path.display().to_string(), e.to_string())
        })
    }

    /// List stored projects, newest modification first. Unreadable files
    /// are skipped rather than failing the whole listing.
    pub fn list(&self) -> SizingResult<Vec<ProjectSummary>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            SizingError::file_error(
                "list store directory",
                self.root.display().to_string(),
                e.to_string(),
            )
        })?;

        let mut summaries = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(PROJECT_EXTENSION) {
                continue;
            }
            if let Ok(project) = load_project(&path) {
                summaries.push(ProjectSummary {
                    project_number: project.meta.project_number,
                    customer: project.meta.customer,
                    status: project.meta.status,
                    modified: project.meta.modified,
                });
            }
        }

        summaries.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(summaries)
    }
}
