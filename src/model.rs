//! Domain model for shipment load planning.
//!
//! Defines the cargo entities (cartons, pallets, freight containers), the
//! derived planning artifacts (pallet shapes, inventories, container
//! manifests) and the error taxonomy shared across the planning pipeline.
//!
//! All dimensions are centimeters, all weights kilograms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Global numerical tolerance for floating-point comparisons.
pub const EPSILON_GENERAL: f64 = 1e-6;

/// Rounds to two decimal places, the precision used for reported heights
/// and weights.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validation error for request data.
#[derive(Debug, Clone)]
pub enum ValidationError {
    InvalidDimension(String),
    InvalidWeight(String),
    InvalidQuantity(String),
    InvalidConfiguration(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
            ValidationError::InvalidWeight(msg) => write!(f, "Invalid weight: {}", msg),
            ValidationError::InvalidQuantity(msg) => write!(f, "Invalid quantity: {}", msg),
            ValidationError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure modes of a planning call.
///
/// Planning either yields a full plan or one of these; there are no partial
/// results. An overweight plan is not an error, it is returned with
/// [`WeightStatus::Overweight`].
#[derive(Debug, Clone)]
pub enum PlanError {
    /// Request data was rejected before any packing was attempted.
    Validation(ValidationError),
    /// A single carton or pallet cannot fit into any configured container.
    Infeasible(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::Validation(err) => err.fmt(f),
            PlanError::Infeasible(msg) => write!(f, "Infeasible shipment: {}", msg),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Validation(err) => Some(err),
            PlanError::Infeasible(_) => None,
        }
    }
}

impl From<ValidationError> for PlanError {
    fn from(err: ValidationError) -> Self {
        PlanError::Validation(err)
    }
}

/// Helper function to validate a single dimension (DRY principle).
fn validate_dimension(value: f64, name: &str) -> Result<(), ValidationError> {
    if value <= 0.0 || value.is_nan() || value.is_infinite() {
        return Err(ValidationError::InvalidDimension(format!(
            "{} must be positive, got: {}",
            name, value
        )));
    }
    Ok(())
}

/// Helper function to validate a weight (DRY principle).
fn validate_weight_value(value: f64, name: &str) -> Result<(), ValidationError> {
    if value <= 0.0 || value.is_nan() || value.is_infinite() {
        return Err(ValidationError::InvalidWeight(format!(
            "{} must be positive, got: {}",
            name, value
        )));
    }
    Ok(())
}

/// A single carton, the indivisible unit of cargo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carton {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl Carton {
    /// Creates a carton after validating dimensions and weight.
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Result<Self, ValidationError> {
        validate_dimension(length, "Carton length")?;
        validate_dimension(width, "Carton width")?;
        validate_dimension(height, "Carton height")?;
        validate_weight_value(weight, "Carton weight")?;
        Ok(Self {
            length,
            width,
            height,
            weight,
        })
    }
}

/// Empty pallet properties plus the warehouse stacking limit.
///
/// `max_stack_height` is the tallest built pallet (base included) the
/// warehouse will assemble; the container door-height limit caps it further
/// when shapes are derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PalletSpec {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub max_stack_height: f64,
}

impl PalletSpec {
    /// Creates a pallet spec after validating dimensions and weight.
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
        max_stack_height: f64,
    ) -> Result<Self, ValidationError> {
        validate_dimension(length, "Pallet length")?;
        validate_dimension(width, "Pallet width")?;
        validate_dimension(height, "Pallet height")?;
        validate_weight_value(weight, "Pallet weight")?;
        validate_dimension(max_stack_height, "Maximum pallet height")?;
        Ok(Self {
            length,
            width,
            height,
            weight,
            max_stack_height,
        })
    }
}

/// One entry of the freight container catalog. Interior dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerType {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerType {
    pub fn new(name: &str, length: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.to_string(),
            length,
            width,
            height,
        }
    }

    /// Interior volume, the key the catalog is ordered by.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// The standard container catalog, ordered by ascending volumetric capacity.
pub fn standard_catalog() -> Vec<ContainerType> {
    vec![
        ContainerType::new("20' Standard", 590.0, 235.0, 239.0),
        ContainerType::new("40' Standard", 1203.0, 235.0, 239.0),
        ContainerType::new("40' High Cube", 1203.0, 235.0, 269.0),
    ]
}

/// Regulatory and physical limits that bound every plan.
///
/// Passed into the planner explicitly so the core stays free of hidden
/// process-wide state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreightLimits {
    /// Per-container road transport weight limit in kg.
    pub road_weight_limit_kg: f64,
    /// Container door clearance; no built pallet may exceed it.
    pub door_height_cm: f64,
}

impl FreightLimits {
    pub const DEFAULT_ROAD_WEIGHT_LIMIT_KG: f64 = 19950.0;
    pub const DEFAULT_DOOR_HEIGHT_CM: f64 = 258.0;
}

impl Default for FreightLimits {
    fn default() -> Self {
        Self {
            road_weight_limit_kg: Self::DEFAULT_ROAD_WEIGHT_LIMIT_KG,
            door_height_cm: Self::DEFAULT_DOOR_HEIGHT_CM,
        }
    }
}

/// The three pallet build patterns a plan can use.
///
/// Base and Topper are reusable full-height shapes; at most one Remnant
/// absorbs the leftover cartons of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShapeKind {
    Base,
    Topper,
    Remnant,
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Base => "Base",
            ShapeKind::Topper => "Topper",
            ShapeKind::Remnant => "Remnant",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A pallet build pattern: layer count, cartons carried, and what the built
/// pallet measures and weighs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PalletShape {
    pub kind: ShapeKind,
    pub layers: u32,
    /// Cartons on one pallet of this shape.
    pub cartons: u32,
    /// Built height including the pallet base, rounded to 2 decimals.
    pub height: f64,
    /// Cartons plus the empty pallet, in kg.
    pub loaded_weight_kg: f64,
}

/// Pallet counts per shape, the working state of the shipment planner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PalletInventory {
    counts: BTreeMap<ShapeKind, u32>,
}

impl PalletInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ShapeKind, count: u32) {
        if count > 0 {
            *self.counts.entry(kind).or_insert(0) += count;
        }
    }

    pub fn count(&self, kind: ShapeKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_pallets(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_pallets() == 0
    }

    /// Non-zero entries in shape order (Base, Topper, Remnant).
    pub fn iter(&self) -> impl Iterator<Item = (ShapeKind, u32)> + '_ {
        self.counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&kind, &count)| (kind, count))
    }

    /// Removes one pallet of `kind`; returns false when none is left.
    pub fn take_one(&mut self, kind: ShapeKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Subtracts `other` entry-wise. Counts never go below zero.
    pub fn subtract(&mut self, other: &Self) {
        for (kind, count) in other.iter() {
            let entry = self.counts.entry(kind).or_insert(0);
            *entry = entry.saturating_sub(count);
        }
    }
}

/// A pallet shape and how many pallets of it one container carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PalletCount {
    pub shape: PalletShape,
    pub count: u32,
}

/// What a single container carries.
#[derive(Clone, Debug, PartialEq)]
pub enum ManifestLoad {
    Pallets(Vec<PalletCount>),
    Cartons(u32),
}

/// One container of the final plan and its computed load.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerManifest {
    pub container: ContainerType,
    pub load: ManifestLoad,
    /// Cartons represented by this container, directly or via pallets.
    pub cartons: u32,
    pub total_weight_kg: f64,
}

/// Road-weight verdict for a whole plan.
///
/// Any single manifest exceeding the road weight limit flags the plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightStatus {
    Ok,
    Overweight,
}

/// Final planning result.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentPlan {
    /// Aggregated summary, e.g. `2 x 40' High Cube & 1 x 20' Standard`.
    pub recommendation: String,
    pub manifests: Vec<ContainerManifest>,
    /// Pallets built across the shipment; `None` for floor-loaded plans.
    pub total_pallets: Option<u32>,
    pub total_weight_kg: f64,
    pub weight_status: WeightStatus,
}

/// How the cartons travel: loose on the container floor, or built onto
/// pallets first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShipmentMode {
    FloorLoaded,
    Palletized(PalletSpec),
}

/// Validated planning input. All planning entities are derived freshly from
/// one of these per request; nothing outlives the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShipmentRequest {
    pub total_cartons: u32,
    pub carton: Carton,
    pub mode: ShipmentMode,
}

impl ShipmentRequest {
    pub fn new(
        total_cartons: u32,
        carton: Carton,
        mode: ShipmentMode,
    ) -> Result<Self, ValidationError> {
        if total_cartons == 0 {
            return Err(ValidationError::InvalidQuantity(
                "Total cartons must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            total_cartons,
            carton,
            mode,
        })
    }
}

/// Wire form of the shipment mode selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentType {
    FloorLoaded,
    #[default]
    Palletized,
}
