//! Layer map validation
//!
//! The synthesizer trusts its input. This module is the upstream check that
//! makes the trust safe: parent references resolve, names are unique, the
//! hierarchy is acyclic, and idle motions target real bones.

use crate::models::{valid_period, LayerMap, ROOT_NAME};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// Type of validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Parent is neither `root` nor a declared layer
    MissingParent,
    /// Two layers share a name
    DuplicateName,
    /// Following parents from a layer leads back to it
    ParentCycle,
    /// An idle sub-motion targets a bone the rig will not have
    UnknownAnimationTarget,
    /// Pivot component outside 0..=1
    PivotOutOfRange,
    /// Idle period that is zero, negative or not finite
    InvalidPeriod,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::MissingParent => write!(f, "missing_parent"),
            IssueType::DuplicateName => write!(f, "duplicate_name"),
            IssueType::ParentCycle => write!(f, "parent_cycle"),
            IssueType::UnknownAnimationTarget => write!(f, "unknown_animation_target"),
            IssueType::PivotOutOfRange => write!(f, "pivot_out_of_range"),
            IssueType::InvalidPeriod => write!(f, "invalid_period"),
        }
    }
}

/// A validation issue found in a layer map
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Index of the offending layer, if the issue is about one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<usize>,
    pub severity: Severity,
    pub issue_type: IssueType,
    /// Human-readable message describing the issue
    pub message: String,
    /// Optional "did you mean" suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new error
    pub fn error(layer: Option<usize>, issue_type: IssueType, message: impl Into<String>) -> Self {
        Self {
            layer,
            severity: Severity::Error,
            issue_type,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create a new warning
    pub fn warning(
        layer: Option<usize>,
        issue_type: IssueType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            layer,
            severity: Severity::Warning,
            issue_type,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion to this issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.layer {
            Some(i) => {
                write!(f, "{} [{}] layer {}: {}", self.severity, self.issue_type, i, self.message)?
            }
            None => write!(f, "{} [{}] {}", self.severity, self.issue_type, self.message)?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Validate a layer map, returning every issue found.
pub fn validate_layer_map(layer_map: &LayerMap) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let names: Vec<&str> = layer_map.layers.iter().map(|l| l.name.as_str()).collect();
    let known: HashSet<&str> = names.iter().copied().collect();

    let mut seen: HashSet<&str> = HashSet::new();
    for (i, layer) in layer_map.layers.iter().enumerate() {
        if !seen.insert(layer.name.as_str()) {
            issues.push(ValidationIssue::error(
                Some(i),
                IssueType::DuplicateName,
                format!("Duplicate layer name '{}'", layer.name),
            ));
        }

        if layer.parent != ROOT_NAME && !known.contains(layer.parent.as_str()) {
            let mut issue = ValidationIssue::error(
                Some(i),
                IssueType::MissingParent,
                format!("Parent missing: {} -> {}", layer.name, layer.parent),
            );
            let mut candidates = names.clone();
            candidates.push(ROOT_NAME);
            if let Some(s) = suggest_name(&layer.parent, &candidates) {
                issue = issue.with_suggestion(s);
            }
            issues.push(issue);
        }

        let pivot = layer.pivot;
        if !(0.0..=1.0).contains(&pivot.x) || !(0.0..=1.0).contains(&pivot.y) {
            issues.push(ValidationIssue::warning(
                Some(i),
                IssueType::PivotOutOfRange,
                format!("Pivot ({}, {}) of '{}' is outside 0..1", pivot.x, pivot.y, layer.name),
            ));
        }
    }

    check_cycles(layer_map, &mut issues);
    check_idle_targets(layer_map, &known, &mut issues);
    check_idle_periods(layer_map, &mut issues);

    issues
}

/// Report every layer that sits on a parent cycle (self-parenting included).
fn check_cycles(layer_map: &LayerMap, issues: &mut Vec<ValidationIssue>) {
    let parent_of: HashMap<&str, &str> = layer_map
        .layers
        .iter()
        .filter(|l| !l.is_root())
        .map(|l| (l.name.as_str(), l.parent.as_str()))
        .collect();

    for (i, layer) in layer_map.layers.iter().enumerate() {
        if layer.is_root() {
            continue;
        }
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = layer.name.as_str();
        while let Some(&parent) = parent_of.get(current) {
            if parent == layer.name {
                issues.push(ValidationIssue::error(
                    Some(i),
                    IssueType::ParentCycle,
                    format!("Layer '{}' is its own ancestor", layer.name),
                ));
                break;
            }
            if !visited.insert(parent) {
                // Cycle that does not include this layer; reported on its members
                break;
            }
            current = parent;
        }
    }
}

fn check_idle_targets(
    layer_map: &LayerMap,
    known: &HashSet<&str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(idle) = layer_map.idle() else {
        return;
    };
    let targets = idle
        .breathing
        .iter()
        .map(|b| ("breathing", b.target.as_str()))
        .chain(idle.head_swing.iter().map(|h| ("headSwing", h.target.as_str())));

    for (motion, target) in targets {
        if target != ROOT_NAME && !known.contains(target) {
            let mut issue = ValidationIssue::warning(
                None,
                IssueType::UnknownAnimationTarget,
                format!("idle.{} targets unknown bone '{}'", motion, target),
            );
            let candidates: Vec<&str> = known.iter().copied().collect();
            if let Some(s) = suggest_name(target, &candidates) {
                issue = issue.with_suggestion(s);
            }
            issues.push(issue);
        }
    }
}

/// Periods the idle generator would replace with its defaults.
fn check_idle_periods(layer_map: &LayerMap, issues: &mut Vec<ValidationIssue>) {
    let Some(idle) = layer_map.idle() else {
        return;
    };
    let periods = idle
        .breathing
        .iter()
        .map(|b| ("breathing", b.period, b.effective_period()))
        .chain(idle.head_swing.iter().map(|h| ("headSwing", h.period, h.effective_period())));

    for (motion, period, fallback) in periods {
        if valid_period(period).is_none() {
            issues.push(ValidationIssue::warning(
                None,
                IssueType::InvalidPeriod,
                format!(
                    "idle.{} period {} must be a positive number; using {}",
                    motion, period, fallback
                ),
            ));
        }
    }
}

/// Suggest a similar name using Levenshtein distance
pub fn suggest_name(unknown: &str, known: &[&str]) -> Option<String> {
    const MAX_DISTANCE: usize = 2;

    let mut best_match: Option<(&str, usize)> = None;

    for candidate in known {
        let distance = levenshtein_distance(unknown, candidate);
        if distance <= MAX_DISTANCE {
            match best_match {
                None => best_match = Some((candidate, distance)),
                Some((_, best_dist)) if distance < best_dist => {
                    best_match = Some((candidate, distance))
                }
                _ => {}
            }
        }
    }

    best_match.map(|(s, _)| s.to_string())
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Single rolling row
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diag + cost);
            diag = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b_chars.len()]
}
