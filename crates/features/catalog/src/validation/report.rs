use serde::Serialize;
use std::fmt;

/// Machine-readable violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    MissingRequiredField,
    InvalidSizeRange,
    MultipleDefaultOptions,
    MissingOptionName,
    AmbiguousHardwareItem,
    DanglingReference,
    IncompleteSizeCoverage,
    InvalidAmount,
    InvalidQuantity,
    DuplicateOptionId,
}

impl ViolationKind {
    /// Severity the validator assigns to this kind.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::IncompleteSizeCoverage => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Blocks submission.
    Error,
    /// Advisory for a human operator.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    /// Field path in the draft shape, e.g. `superBom.hardwareSets[0].items[1].compatibleMaterials`.
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, severity: kind.severity(), path: path.into(), message: message.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at {}: {}", self.kind, self.path, self.message)
    }
}

/// Ordered outcome of a validation run.
///
/// Violations keep the order in which checks found them. In fail-fast mode the
/// report stops accepting violations after the first error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
    #[serde(skip)]
    fail_fast: bool,
}

impl ValidationReport {
    #[must_use]
    pub const fn fail_fast() -> Self {
        Self { violations: Vec::new(), fail_fast: true }
    }

    pub fn push(&mut self, violation: Violation) {
        if !self.is_halted() {
            self.violations.push(violation);
        }
    }

    /// `true` once a fail-fast report holds an error.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.fail_fast && self.violations.iter().any(Violation::is_error)
    }

    /// Appends another report, honoring this report's fail-fast mode.
    pub fn merge(&mut self, other: Self) {
        for violation in other.violations {
            self.push(violation);
        }
    }

    /// No blocking violation was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.violations.iter().any(Violation::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_error())
    }

    /// First blocking violation in check order.
    #[must_use]
    pub fn first(&self) -> Option<&Violation> {
        self.errors().next()
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn contains(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}
