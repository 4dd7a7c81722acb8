//! Pallet configuration: deriving pallet shapes from carton and pallet
//! dimensions, and allocating a pallet inventory for a carton count.
//!
//! Three shapes exist per request. The Base shape is the tallest pallet the
//! warehouse may build under its stacking limit. The Topper is a shorter
//! pallet sized so that one can ride on top of a Base inside the tallest
//! container of the catalog. At most one Remnant pallet absorbs whatever
//! cartons are left after full pallets are taken.

use std::cmp::Ordering;

use crate::geometry;
use crate::model::{
    Carton, ContainerType, FreightLimits, PalletInventory, PalletShape, PalletSpec, ShapeKind,
    ValidationError, round2,
};

/// Pallet shapes derived for one request, plus the footprint shared by all
/// of them.
#[derive(Clone, Debug)]
pub struct ShapeTable {
    /// Pallet footprint, the floor area every shape occupies.
    pub length: f64,
    pub width: f64,
    pub cartons_per_layer: u32,
    pub base: PalletShape,
    pub topper: Option<PalletShape>,
    pub remnant: Option<PalletShape>,
}

impl ShapeTable {
    pub fn get(&self, kind: ShapeKind) -> Option<&PalletShape> {
        match kind {
            ShapeKind::Base => Some(&self.base),
            ShapeKind::Topper => self.topper.as_ref(),
            ShapeKind::Remnant => self.remnant.as_ref(),
        }
    }

    /// All shapes present, in declaration order (Base, Topper, Remnant).
    pub fn shapes(&self) -> impl Iterator<Item = &PalletShape> {
        std::iter::once(&self.base)
            .chain(self.topper.as_ref())
            .chain(self.remnant.as_ref())
    }

    /// Cartons represented by `inventory` under this table.
    pub fn cartons_in(&self, inventory: &PalletInventory) -> u64 {
        inventory
            .iter()
            .map(|(kind, count)| {
                self.get(kind).map_or(0, |shape| shape.cartons as u64) * count as u64
            })
            .sum()
    }
}

fn shape(
    kind: ShapeKind,
    layers: u32,
    cartons: u32,
    carton: &Carton,
    pallet: &PalletSpec,
) -> PalletShape {
    PalletShape {
        kind,
        layers,
        cartons,
        height: round2(layers as f64 * carton.height + pallet.height),
        loaded_weight_kg: round2(cartons as f64 * carton.weight + pallet.weight),
    }
}

/// Derives the Base shape, and the Topper shape when the tallest container
/// of `catalog` leaves room for a second pallet above a Base.
///
/// The height budget for the Base is the lower of the warehouse stacking
/// limit and the container door height. The Topper is sized against the
/// tallest container's headroom above a Base pallet and additionally capped
/// at the Base's layer count, so no shape ever exceeds the effective
/// stacking limit.
pub fn build_shape_table(
    carton: &Carton,
    pallet: &PalletSpec,
    catalog: &[ContainerType],
    limits: &FreightLimits,
) -> Result<ShapeTable, ValidationError> {
    let cartons_per_layer =
        geometry::floor_slots(pallet.length, pallet.width, carton.length, carton.width);
    if cartons_per_layer == 0 {
        return Err(ValidationError::InvalidConfiguration(
            "Carton is larger than the pallet base".to_string(),
        ));
    }

    let effective_max = pallet.max_stack_height.min(limits.door_height_cm);
    let base_layers = geometry::layers_by_height(effective_max - pallet.height, carton.height);
    if base_layers == 0 {
        return Err(ValidationError::InvalidConfiguration(
            "Cannot build a base pallet within the height limit".to_string(),
        ));
    }
    let base = shape(
        ShapeKind::Base,
        base_layers,
        base_layers * cartons_per_layer,
        carton,
        pallet,
    );

    let tallest = catalog
        .iter()
        .max_by(|a, b| a.height.partial_cmp(&b.height).unwrap_or(Ordering::Equal));
    let topper = tallest.and_then(|container| {
        let headroom = container.height - base.height;
        if headroom <= pallet.height {
            return None;
        }
        let layers =
            geometry::layers_by_height(headroom - pallet.height, carton.height).min(base_layers);
        if layers == 0 {
            return None;
        }
        Some(shape(
            ShapeKind::Topper,
            layers,
            layers * cartons_per_layer,
            carton,
            pallet,
        ))
    });

    Ok(ShapeTable {
        length: pallet.length,
        width: pallet.width,
        cartons_per_layer,
        base,
        topper,
        remnant: None,
    })
}

/// Allocates pallets for `total_cartons`: stacked Base+Topper pairs first,
/// then Base-only pallets, then at most one Remnant sized to hold exactly
/// the leftover. Every carton lands on exactly one pallet.
///
/// Sets `table.remnant` when a Remnant pallet is needed.
pub fn allocate_inventory(
    total_cartons: u32,
    table: &mut ShapeTable,
    carton: &Carton,
    pallet: &PalletSpec,
) -> PalletInventory {
    let mut inventory = PalletInventory::new();
    let mut remaining = total_cartons;

    if let Some(topper) = table.topper {
        let stack_capacity = table.base.cartons + topper.cartons;
        let stacks = remaining / stack_capacity;
        inventory.add(ShapeKind::Base, stacks);
        inventory.add(ShapeKind::Topper, stacks);
        remaining %= stack_capacity;
    }

    let base_only = remaining / table.base.cartons;
    inventory.add(ShapeKind::Base, base_only);
    remaining %= table.base.cartons;

    if remaining > 0 {
        let layers = remaining.div_ceil(table.cartons_per_layer);
        table.remnant = Some(shape(ShapeKind::Remnant, layers, remaining, carton, pallet));
        inventory.add(ShapeKind::Remnant, 1);
    }

    inventory
}
