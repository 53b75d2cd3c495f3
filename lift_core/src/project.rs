//! # Project Data Structures
//!
//! The `Project` struct is the root container for one quoted elevator:
//! load inputs, the chosen cylinder, the selected component set, and the
//! priced and heat-checked results. Projects serialize to `.lsz` files as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, number, customer, status, timestamps)
//! ├── inputs: LoadInputs
//! ├── configuration / cost / thermal: latest engine outputs
//! └── revisions: Vec<Revision> (append-only change log)
//! ```
//!
//! Project numbers are issued per month: `YYYY-MM` plus a two-digit
//! counter that resets when the month rolls over, so the third project of
//! November 2025 is `2025-1103`.
//!
//! ## Example
//!
//! ```rust
//! use lift_core::calculations::{LoadInputs, SuspensionRatio};
//! use lift_core::project::Project;
//!
//! let inputs = LoadInputs {
//!     capacity_kg: 1000.0,
//!     carcass_weight_kg: 800.0,
//!     travel_distance_mm: 3000.0,
//!     buffer_mm: 300.0,
//!     speed_mps: 0.5,
//!     suspension: SuspensionRatio::TwoToOne,
//!     cylinder_count: 2,
//!     regulation: "EN 81-20".to_string(),
//! };
//! let project = Project::new("2025-1101", "Acme Elevators", inputs);
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("2025-1101"));
//! ```

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CostBreakdown, LoadInputs, SelectedConfiguration, ThermalResult};

/// Current schema version for .lsz files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Lifecycle status of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Quote in progress, numbers may still change
    #[default]
    Draft,
    /// Released to production; the configuration is frozen commercially
    Production,
}

impl ProjectStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Production => "Production",
        }
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Stable identity, survives renumbering
    pub id: Uuid,

    /// Issued project number, e.g. "2025-1103"
    pub project_number: String,

    /// Customer name
    pub customer: String,

    /// Lifecycle status
    pub status: ProjectStatus,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// One entry in the append-only revision log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    /// 1-based revision number
    pub number: u32,

    /// When the revision was recorded
    pub date: DateTime<Utc>,

    /// Human-readable change strings, e.g. "Capacity: 1000 -> 1200"
    pub changes: Vec<String>,
}

/// Root project container serialized to `.lsz` files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, number, customer, status)
    pub meta: ProjectMetadata,

    /// Load inputs the quote was sized from
    pub inputs: LoadInputs,

    /// Selected component set, once the selector has run
    pub configuration: Option<SelectedConfiguration>,

    /// Priced breakdown, once the cost engine has run
    pub cost: Option<CostBreakdown>,

    /// Heat check, once the thermal estimator has run
    pub thermal: Option<ThermalResult>,

    /// Append-only revision log, oldest first
    pub revisions: Vec<Revision>,
}

impl Project {
    /// Create a new draft project around a set of load inputs.
    pub fn new(
        project_number: impl Into<String>,
        customer: impl Into<String>,
        inputs: LoadInputs,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                project_number: project_number.into(),
                customer: customer.into(),
                status: ProjectStatus::Draft,
                created: now,
                modified: now,
            },
            inputs,
            configuration: None,
            cost: None,
            thermal: None,
            revisions: Vec::new(),
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Release the quote to production. Idempotent.
    pub fn mark_production(&mut self) {
        if self.meta.status != ProjectStatus::Production {
            self.meta.status = ProjectStatus::Production;
            self.touch();
        }
    }

    /// Diff this project against an older state and return human-readable
    /// change strings. Empty when nothing quote-relevant changed.
    ///
    /// Compared: customer, every load input, the selected cylinder and
    /// components, and the accessory set (as added/removed lists).
    /// Timestamps, revision history and derived numbers are not diffed.
    pub fn changes_since(&self, old: &Project) -> Vec<String> {
        let mut changes = Vec::new();

        diff_str(&mut changes, "Customer", &old.meta.customer, &self.meta.customer);
        if old.meta.status != self.meta.status {
            changes.push(format!(
                "Status: {} -> {}",
                old.meta.status.display_name(),
                self.meta.status.display_name()
            ));
        }

        diff_f64(&mut changes, "Capacity", old.inputs.capacity_kg, self.inputs.capacity_kg);
        diff_f64(
            &mut changes,
            "Carcass weight",
            old.inputs.carcass_weight_kg,
            self.inputs.carcass_weight_kg,
        );
        diff_f64(
            &mut changes,
            "Travel distance",
            old.inputs.travel_distance_mm,
            self.inputs.travel_distance_mm,
        );
        diff_f64(&mut changes, "Buffer", old.inputs.buffer_mm, self.inputs.buffer_mm);
        diff_f64(&mut changes, "Speed", old.inputs.speed_mps, self.inputs.speed_mps);
        if old.inputs.suspension != self.inputs.suspension {
            changes.push(format!(
                "Suspension: {} -> {}",
                old.inputs.suspension.display_name(),
                self.inputs.suspension.display_name()
            ));
        }
        if old.inputs.cylinder_count != self.inputs.cylinder_count {
            changes.push(format!(
                "Cylinder count: {} -> {}",
                old.inputs.cylinder_count, self.inputs.cylinder_count
            ));
        }
        diff_str(&mut changes, "Regulation", &old.inputs.regulation, &self.inputs.regulation);

        self.diff_configuration(&mut changes, old);

        changes
    }

    fn diff_configuration(&self, changes: &mut Vec<String>, old: &Project) {
        let (old_cfg, new_cfg) = match (&old.configuration, &self.configuration) {
            (None, None) => return,
            (Some(_), None) => {
                changes.push("Configuration: removed".to_string());
                return;
            }
            (None, Some(_)) => {
                changes.push("Configuration: added".to_string());
                return;
            }
            (Some(o), Some(n)) => (o, n),
        };

        diff_str(changes, "Cylinder", &old_cfg.cylinder_type, &new_cfg.cylinder_type);
        diff_str(changes, "Pump", &old_cfg.pump, &new_cfg.pump);
        diff_str(changes, "Motor", &old_cfg.motor, &new_cfg.motor);
        if old_cfg.main_valve != new_cfg.main_valve {
            changes.push(format!(
                "Main valve: {} -> {}",
                old_cfg.main_valve.display_name(),
                new_cfg.main_valve.display_name()
            ));
        }
        if old_cfg.rupture_valve != new_cfg.rupture_valve {
            let describe = |key: &Option<crate::catalog::RuptureValveKey>| match key {
                Some(k) => format!("{}{}", k.size.display_name(), if k.dual { " DK" } else { "" }),
                None => "-".to_string(),
            };
            changes.push(format!(
                "Rupture valve: {} -> {}",
                describe(&old_cfg.rupture_valve),
                describe(&new_cfg.rupture_valve)
            ));
        }
        {
            let old_unit = old_cfg.power_unit.as_deref().unwrap_or("-");
            let new_unit = new_cfg.power_unit.as_deref().unwrap_or("-");
            diff_str(changes, "Power unit", old_unit, new_unit);
        }

        let added: Vec<&str> = new_cfg
            .accessories
            .iter()
            .filter(|a| !old_cfg.accessories.contains(a))
            .map(|a| a.display_name())
            .collect();
        if !added.is_empty() {
            changes.push(format!("Accessories added: {}", added.join(", ")));
        }

        let removed: Vec<&str> = old_cfg
            .accessories
            .iter()
            .filter(|a| !new_cfg.accessories.contains(a))
            .map(|a| a.display_name())
            .collect();
        if !removed.is_empty() {
            changes.push(format!("Accessories removed: {}", removed.join(", ")));
        }
    }

    /// Append a revision entry. No-op for an empty change list.
    pub fn record_revision(&mut self, changes: Vec<String>) {
        if changes.is_empty() {
            return;
        }
        let number = self.revisions.len() as u32 + 1;
        self.revisions.push(Revision {
            number,
            date: Utc::now(),
            changes,
        });
        self.touch();
    }
}

fn diff_str(changes: &mut Vec<String>, label: &str, old: &str, new: &str) {
    if old != new {
        let show = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        changes.push(format!("{}: {} -> {}", label, show(old), show(new)));
    }
}

fn diff_f64(changes: &mut Vec<String>, label: &str, old: f64, new: f64) {
    if old != new {
        changes.push(format!("{}: {} -> {}", label, old, new));
    }
}

/// Per-month project number counter.
///
/// Persisted alongside the project directory so numbering survives
/// restarts. The counter resets to 1 whenever the month key changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectCounter {
    /// Month key the counter applies to, "YYYY-MM"
    pub year_month: String,

    /// Last issued counter value within the month
    pub counter: u32,
}

impl ProjectCounter {
    /// Issue the next project number for the given instant.
    pub fn next(&mut self, now: DateTime<Utc>) -> String {
        let year_month = format!("{:04}-{:02}", now.year(), now.month());
        if self.year_month != year_month {
            self.year_month = year_month;
            self.counter = 1;
        } else {
            self.counter += 1;
        }
        format!("{}{:02}", self.year_month, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{select_components, evaluate_cylinders, SuspensionRatio};
    use crate::catalog::{AccessoryKind, Catalog};
    use chrono::TimeZone;

    fn sample_inputs() -> LoadInputs {
        LoadInputs {
            capacity_kg: 1000.0,
            carcass_weight_kg: 800.0,
            travel_distance_mm: 3000.0,
            buffer_mm: 300.0,
            speed_mps: 0.5,
            suspension: SuspensionRatio::TwoToOne,
            cylinder_count: 2,
            regulation: "EN 81-20".to_string(),
        }
    }

    fn sized_project() -> Project {
        let catalog = Catalog::standard();
        let inputs = sample_inputs();
        let evaluations = evaluate_cylinders(&inputs, &catalog).unwrap();
        let chosen = evaluations.iter().find(|e| e.valid).unwrap();
        let config = select_components(chosen, &inputs, &catalog).unwrap();

        let mut project = Project::new("2025-1101", "Acme Elevators", inputs);
        project.configuration = Some(config);
        project
    }

    #[test]
    fn test_new_project_is_draft() {
        let project = Project::new("2025-1101", "Acme Elevators", sample_inputs());
        assert_eq!(project.meta.status, ProjectStatus::Draft);
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert!(project.revisions.is_empty());
        assert!(project.configuration.is_none());
    }

    #[test]
    fn test_mark_production() {
        let mut project = Project::new("2025-1101", "Acme", sample_inputs());
        project.mark_production();
        assert_eq!(project.meta.status, ProjectStatus::Production);
        // idempotent
        let modified = project.meta.modified;
        project.mark_production();
        assert_eq!(project.meta.modified, modified);
    }

    #[test]
    fn test_counter_increments_within_month() {
        let mut counter = ProjectCounter::default();
        let nov = Utc.with_ymd_and_hms(2025, 11, 5, 9, 0, 0).unwrap();
        assert_eq!(counter.next(nov), "2025-1101");
        assert_eq!(counter.next(nov), "2025-1102");
        assert_eq!(counter.next(nov), "2025-1103");
    }

    #[test]
    fn test_counter_resets_on_month_change() {
        let mut counter = ProjectCounter::default();
        let nov = Utc.with_ymd_and_hms(2025, 11, 28, 9, 0, 0).unwrap();
        let dec = Utc.with_ymd_and_hms(2025, 12, 1, 9, 0, 0).unwrap();
        assert_eq!(counter.next(nov), "2025-1101");
        assert_eq!(counter.next(nov), "2025-1102");
        assert_eq!(counter.next(dec), "2025-1201");
    }

    #[test]
    fn test_no_changes_yields_empty_diff() {
        let project = sized_project();
        assert!(project.changes_since(&project).is_empty());
    }

    #[test]
    fn test_input_changes_are_reported() {
        let old = sized_project();
        let mut new = old.clone();
        new.inputs.capacity_kg = 1200.0;
        new.inputs.speed_mps = 0.63;
        new.meta.customer = "Beta Lifts".to_string();

        let changes = new.changes_since(&old);
        assert!(changes.contains(&"Capacity: 1000 -> 1200".to_string()));
        assert!(changes.contains(&"Speed: 0.5 -> 0.63".to_string()));
        assert!(changes.contains(&"Customer: Acme Elevators -> Beta Lifts".to_string()));
    }

    #[test]
    fn test_accessory_diff_reports_added_and_removed() {
        let old = sized_project();
        let mut new = old.clone();
        {
            let cfg = new.configuration.as_mut().unwrap();
            cfg.accessories.retain(|a| *a != AccessoryKind::HandPump);
            cfg.accessories.push(AccessoryKind::TankHeater);
        }

        let changes = new.changes_since(&old);
        assert!(changes.iter().any(|c| c == "Accessories added: Tank heater"));
        assert!(changes.iter().any(|c| c == "Accessories removed: Hand pump"));
    }

    #[test]
    fn test_record_revision_numbers_sequentially() {
        let mut project = sized_project();
        project.record_revision(vec!["Capacity: 1000 -> 1200".to_string()]);
        project.record_revision(Vec::new()); // no-op
        project.record_revision(vec!["Speed: 0.5 -> 0.63".to_string()]);

        assert_eq!(project.revisions.len(), 2);
        assert_eq!(project.revisions[0].number, 1);
        assert_eq!(project.revisions[1].number, 2);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = sized_project();
        project.record_revision(vec!["Capacity: 1000 -> 1200".to_string()]);

        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("2025-1101"));
        assert!(json.contains("\"draft\""));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, project);
    }
}
