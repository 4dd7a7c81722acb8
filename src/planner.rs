//! Packing the pallet inventory (or loose cartons) into freight containers.
//!
//! Container selection is greedy: the smallest catalog type that takes
//! everything still outstanding wins; otherwise the largest type is filled
//! as far as it goes and the loop repeats. Within one container, floor
//! slots are filled tallest-shape-first so as little door height as
//! possible is wasted.

use std::cmp::Ordering;

use crate::geometry;
use crate::model::{
    Carton, ContainerManifest, ContainerType, EPSILON_GENERAL, FreightLimits, ManifestLoad,
    PalletCount, PalletInventory, PalletSpec, PlanError, ShipmentMode, ShipmentPlan,
    ShipmentRequest, WeightStatus, round2,
};
use crate::pallet::{ShapeTable, allocate_inventory, build_shape_table};

/// Progress events emitted while a plan is computed, for live streaming.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type")]
pub enum PlanEvent {
    /// Pallet shapes were derived and the inventory allocated.
    PalletsBuilt { total_pallets: u32 },
    /// One container was committed to the plan.
    ContainerCommitted {
        index: usize,
        container: String,
        cartons: u32,
        pallets: u32,
        total_weight_kg: f64,
    },
    /// Planning finished with a complete plan.
    Finished {
        containers: usize,
        weight_status: WeightStatus,
    },
    /// Planning aborted; no plan was produced.
    Failed { message: String },
}

/// Computes a full shipment plan for a validated request.
///
/// Pure apart from the injected limits and catalog: identical inputs yield
/// identical plans.
pub fn plan_shipment(
    request: &ShipmentRequest,
    catalog: &[ContainerType],
    limits: &FreightLimits,
) -> Result<ShipmentPlan, PlanError> {
    plan_shipment_with_progress(request, catalog, limits, |_| {})
}

/// Like [`plan_shipment`], invoking `on_event` for each planning step.
pub fn plan_shipment_with_progress(
    request: &ShipmentRequest,
    catalog: &[ContainerType],
    limits: &FreightLimits,
    mut on_event: impl FnMut(&PlanEvent),
) -> Result<ShipmentPlan, PlanError> {
    match &request.mode {
        ShipmentMode::Palletized(pallet) => plan_palletized(
            request.total_cartons,
            &request.carton,
            pallet,
            catalog,
            limits,
            &mut on_event,
        ),
        ShipmentMode::FloorLoaded => plan_floor_loaded(
            request.total_cartons,
            &request.carton,
            catalog,
            limits,
            &mut on_event,
        ),
    }
}

/// Catalog copy sorted ascending by volume, so "smallest that fits" and
/// "largest fallback" are independent of the caller's ordering.
fn sorted_catalog(catalog: &[ContainerType]) -> Result<Vec<ContainerType>, PlanError> {
    if catalog.is_empty() {
        return Err(PlanError::Infeasible(
            "No container types configured".to_string(),
        ));
    }
    let mut catalog = catalog.to_vec();
    catalog.sort_by(|a, b| a.volume().partial_cmp(&b.volume()).unwrap_or(Ordering::Equal));
    Ok(catalog)
}

/// Simulates loading pallets from `pool` into a single container.
///
/// Floor slots are filled one at a time; within a slot the tallest shape
/// still in the pool that fits the remaining door height is stacked next.
/// A shape is only admitted while the running container weight stays under
/// the road limit, except that the first pallet of a container is always
/// admitted: an overweight-but-feasible load is reported and flagged later
/// rather than refused.
///
/// Operates on a copy of the pool and returns the counts actually placed,
/// which may be empty when nothing fits at all.
pub(crate) fn simulate_container_load(
    container: &ContainerType,
    pool: &PalletInventory,
    table: &ShapeTable,
    limits: &FreightLimits,
) -> PalletInventory {
    let slots = geometry::floor_slots(container.length, container.width, table.length, table.width);
    let mut pool = pool.clone();
    let mut placed = PalletInventory::new();
    let mut load_weight = 0.0_f64;

    for _ in 0..slots {
        if pool.is_empty() {
            break;
        }
        let mut remaining_height = container.height;
        loop {
            let next = table
                .shapes()
                .filter(|shape| pool.count(shape.kind) > 0)
                .filter(|shape| shape.height <= remaining_height + EPSILON_GENERAL)
                .filter(|shape| {
                    load_weight <= EPSILON_GENERAL
                        || load_weight + shape.loaded_weight_kg
                            <= limits.road_weight_limit_kg + EPSILON_GENERAL
                })
                .reduce(|best, shape| {
                    if shape.height > best.height + EPSILON_GENERAL {
                        shape
                    } else {
                        best
                    }
                });
            let Some(shape) = next else { break };
            pool.take_one(shape.kind);
            placed.add(shape.kind, 1);
            load_weight += shape.loaded_weight_kg;
            remaining_height -= shape.height;
        }
    }

    placed
}

fn pallet_manifest(
    container: &ContainerType,
    placed: &PalletInventory,
    table: &ShapeTable,
) -> ContainerManifest {
    let pallets: Vec<PalletCount> = placed
        .iter()
        .filter_map(|(kind, count)| {
            table.get(kind).map(|shape| PalletCount {
                shape: *shape,
                count,
            })
        })
        .collect();
    let weight: f64 = pallets
        .iter()
        .map(|entry| entry.shape.loaded_weight_kg * entry.count as f64)
        .sum();
    ContainerManifest {
        container: container.clone(),
        cartons: table.cartons_in(placed) as u32,
        load: ManifestLoad::Pallets(pallets),
        total_weight_kg: round2(weight),
    }
}

fn plan_palletized(
    total_cartons: u32,
    carton: &Carton,
    pallet: &PalletSpec,
    catalog: &[ContainerType],
    limits: &FreightLimits,
    on_event: &mut dyn FnMut(&PlanEvent),
) -> Result<ShipmentPlan, PlanError> {
    let catalog = sorted_catalog(catalog)?;
    let mut table = build_shape_table(carton, pallet, &catalog, limits)?;
    let inventory = allocate_inventory(total_cartons, &mut table, carton, pallet);
    on_event(&PlanEvent::PalletsBuilt {
        total_pallets: inventory.total_pallets(),
    });

    let mut remaining = inventory.clone();
    let mut manifests: Vec<ContainerManifest> = Vec::new();

    // The fallback branch always places at least one pallet, so each pass
    // strictly shrinks `remaining` and the loop is bounded by pallet count.
    while !remaining.is_empty() {
        let full_fit = catalog.iter().find_map(|container| {
            let placed = simulate_container_load(container, &remaining, &table, limits);
            (placed.total_pallets() == remaining.total_pallets()).then_some((container, placed))
        });

        let (container, placed) = match full_fit {
            Some(hit) => hit,
            None => {
                // Last catalog entry is the largest type.
                let largest = &catalog[catalog.len() - 1];
                let placed = simulate_container_load(largest, &remaining, &table, limits);
                if placed.is_empty() {
                    return Err(PlanError::Infeasible(
                        "A single pallet is too large for any container".to_string(),
                    ));
                }
                (largest, placed)
            }
        };

        remaining.subtract(&placed);
        let manifest = pallet_manifest(container, &placed, &table);
        on_event(&PlanEvent::ContainerCommitted {
            index: manifests.len() + 1,
            container: manifest.container.name.clone(),
            cartons: manifest.cartons,
            pallets: placed.total_pallets(),
            total_weight_kg: manifest.total_weight_kg,
        });
        manifests.push(manifest);
    }

    let plan = finish_plan(manifests, Some(inventory.total_pallets()), limits);
    on_event(&PlanEvent::Finished {
        containers: plan.manifests.len(),
        weight_status: plan.weight_status,
    });
    Ok(plan)
}

/// Cartons one container of this type can take when floor-loaded.
///
/// The weight capacity is floored at one carton so a shipment whose single
/// carton already busts the road limit still gets a plan, flagged
/// overweight, instead of a refusal.
fn carton_capacity(container: &ContainerType, carton: &Carton, limits: &FreightLimits) -> u64 {
    let per_layer =
        geometry::floor_slots(container.length, container.width, carton.length, carton.width)
            as u64;
    let layers = geometry::layers_by_height(container.height, carton.height) as u64;
    let volumetric = per_layer * layers;
    if volumetric == 0 {
        return 0;
    }
    let by_weight = ((limits.road_weight_limit_kg / carton.weight).floor() as u64).max(1);
    volumetric.min(by_weight)
}

fn plan_floor_loaded(
    total_cartons: u32,
    carton: &Carton,
    catalog: &[ContainerType],
    limits: &FreightLimits,
    on_event: &mut dyn FnMut(&PlanEvent),
) -> Result<ShipmentPlan, PlanError> {
    let catalog = sorted_catalog(catalog)?;
    let largest = &catalog[catalog.len() - 1];

    let mut remaining = total_cartons as u64;
    let mut manifests: Vec<ContainerManifest> = Vec::new();

    while remaining > 0 {
        let full_fit = catalog.iter().find(|container| {
            let capacity = carton_capacity(container, carton, limits);
            capacity > 0 && remaining <= capacity
        });

        let (container, count) = match full_fit {
            Some(container) => (container, remaining),
            None => {
                let capacity = carton_capacity(largest, carton, limits);
                if capacity == 0 {
                    return Err(PlanError::Infeasible(
                        "A single carton is too large for any container".to_string(),
                    ));
                }
                (largest, capacity.min(remaining))
            }
        };

        remaining -= count;
        let manifest = ContainerManifest {
            container: container.clone(),
            load: ManifestLoad::Cartons(count as u32),
            cartons: count as u32,
            total_weight_kg: round2(count as f64 * carton.weight),
        };
        on_event(&PlanEvent::ContainerCommitted {
            index: manifests.len() + 1,
            container: manifest.container.name.clone(),
            cartons: manifest.cartons,
            pallets: 0,
            total_weight_kg: manifest.total_weight_kg,
        });
        manifests.push(manifest);
    }

    let plan = finish_plan(manifests, None, limits);
    on_event(&PlanEvent::Finished {
        containers: plan.manifests.len(),
        weight_status: plan.weight_status,
    });
    Ok(plan)
}

/// Aggregates committed manifests into the final plan: recommendation
/// string, total weight and the road-weight verdict.
fn finish_plan(
    manifests: Vec<ContainerManifest>,
    total_pallets: Option<u32>,
    limits: &FreightLimits,
) -> ShipmentPlan {
    let total_weight_kg = round2(manifests.iter().map(|m| m.total_weight_kg).sum());
    let overweight = manifests
        .iter()
        .any(|m| m.total_weight_kg > limits.road_weight_limit_kg + EPSILON_GENERAL);
    let weight_status = if overweight {
        WeightStatus::Overweight
    } else {
        WeightStatus::Ok
    };

    // Container types in order of first use.
    let mut counts: Vec<(String, u32)> = Vec::new();
    for manifest in &manifests {
        match counts
            .iter_mut()
            .find(|(name, _)| *name == manifest.container.name)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((manifest.container.name.clone(), 1)),
        }
    }
    let mut recommendation = counts
        .iter()
        .map(|(name, count)| format!("{} x {}", count, name))
        .collect::<Vec<_>>()
        .join(" & ");
    if overweight {
        recommendation.push_str(" (WARNING: Overweight!)");
    }

    ShipmentPlan {
        recommendation,
        manifests,
        total_pallets,
        total_weight_kg,
        weight_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PalletShape, PalletSpec, ShapeKind, standard_catalog};

    fn carton(weight: f64) -> Carton {
        Carton::new(40.0, 30.0, 20.0, weight).unwrap()
    }

    fn pallet() -> PalletSpec {
        PalletSpec::new(120.0, 100.0, 15.0, 20.0, 152.4).unwrap()
    }

    fn palletized(total: u32, carton_weight: f64) -> ShipmentRequest {
        ShipmentRequest::new(
            total,
            carton(carton_weight),
            ShipmentMode::Palletized(pallet()),
        )
        .unwrap()
    }

    fn floor_loaded(total: u32, c: Carton) -> ShipmentRequest {
        ShipmentRequest::new(total, c, ShipmentMode::FloorLoaded).unwrap()
    }

    fn plan(request: &ShipmentRequest) -> Result<ShipmentPlan, PlanError> {
        plan_shipment(request, &standard_catalog(), &FreightLimits::default())
    }

    fn plan_cartons(plan: &ShipmentPlan) -> u64 {
        plan.manifests.iter().map(|m| m.cartons as u64).sum()
    }

    /// Handcrafted single-shape table for simulator-level tests.
    fn base_only_table(height: f64, loaded_weight_kg: f64) -> ShapeTable {
        ShapeTable {
            length: 120.0,
            width: 100.0,
            cartons_per_layer: 9,
            base: PalletShape {
                kind: ShapeKind::Base,
                layers: 1,
                cartons: 9,
                height,
                loaded_weight_kg,
            },
            topper: None,
            remnant: None,
        }
    }

    #[test]
    fn floor_loaded_thousand_cartons_fit_one_small_container() {
        // Scenario: 1000 light cartons. The 20' Standard takes
        // 98 per layer x 11 layers = 1078, within the weight cap.
        let request = floor_loaded(1000, carton(5.0));
        let plan = plan(&request).unwrap();

        assert_eq!(plan.manifests.len(), 1);
        assert_eq!(plan.manifests[0].container.name, "20' Standard");
        assert_eq!(plan.manifests[0].load, ManifestLoad::Cartons(1000));
        assert_eq!(plan.total_weight_kg, 5000.0);
        assert_eq!(plan.weight_status, WeightStatus::Ok);
        assert_eq!(plan.total_pallets, None);
        assert_eq!(plan.recommendation, "1 x 20' Standard");
    }

    #[test]
    fn floor_loaded_splits_across_containers() {
        // 5000 cartons exceed even the High Cube's 2730, so the largest is
        // filled once and the rest drops into the smallest adequate type.
        let request = floor_loaded(5000, carton(5.0));
        let plan = plan(&request).unwrap();

        assert_eq!(plan.manifests.len(), 2);
        assert_eq!(plan.manifests[0].container.name, "40' High Cube");
        assert_eq!(plan.manifests[0].cartons, 2730);
        assert_eq!(plan.manifests[1].container.name, "40' Standard");
        assert_eq!(plan.manifests[1].cartons, 2270);
        assert_eq!(plan_cartons(&plan), 5000);
        assert_eq!(
            plan.recommendation,
            "1 x 40' High Cube & 1 x 40' Standard"
        );
    }

    #[test]
    fn palletized_small_shipment_uses_one_container() {
        // 200 cartons on the reference pallet: 2 Base + 2 Topper + 1
        // Remnant, all of which stack into a single 20' Standard.
        let request = palletized(200, 5.0);
        let plan = plan(&request).unwrap();

        assert_eq!(plan.total_pallets, Some(5));
        assert_eq!(plan.manifests.len(), 1);
        assert_eq!(plan.manifests[0].container.name, "20' Standard");
        assert_eq!(plan_cartons(&plan), 200);
        assert_eq!(plan.weight_status, WeightStatus::Ok);
        // 2x290 + 2x245 + (2x5 + 20) pallet weights included.
        assert_eq!(plan.total_weight_kg, 1100.0);
        assert_eq!(plan.recommendation, "1 x 20' Standard");
    }

    #[test]
    fn palletized_large_shipment_fills_largest_then_smallest_adequate() {
        // 10000 cartons: 101 Base + 101 Topper + 1 Remnant. A High Cube
        // takes 20 Base+Topper stacks per trip; the tail fits a 20'.
        let request = palletized(10000, 5.0);
        let plan = plan(&request).unwrap();

        assert_eq!(plan.total_pallets, Some(203));
        assert_eq!(plan.manifests.len(), 6);
        for manifest in &plan.manifests[..5] {
            assert_eq!(manifest.container.name, "40' High Cube");
            assert_eq!(manifest.cartons, 20 * 54 + 20 * 45);
        }
        assert_eq!(plan.manifests[5].container.name, "20' Standard");
        assert_eq!(plan_cartons(&plan), 10000);
        assert_eq!(
            plan.recommendation,
            "5 x 40' High Cube & 1 x 20' Standard"
        );
    }

    #[test]
    fn every_carton_is_shipped_exactly_once() {
        for total in [1, 9, 53, 54, 55, 99, 100, 198, 200, 1234, 9999] {
            let request = palletized(total, 5.0);
            let plan = plan(&request).unwrap();
            assert_eq!(plan_cartons(&plan), total as u64, "total {}", total);
        }
        for total in [1, 97, 98, 99, 1078, 1079, 40000] {
            let request = floor_loaded(total, carton(5.0));
            let plan = plan(&request).unwrap();
            assert_eq!(plan_cartons(&plan), total as u64, "total {}", total);
        }
    }

    #[test]
    fn planning_is_idempotent() {
        let request = palletized(777, 5.0);
        let first = plan(&request).unwrap();
        let second = plan(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn plan_is_independent_of_catalog_order() {
        let mut reversed = standard_catalog();
        reversed.reverse();
        let request = palletized(777, 5.0);
        let straight =
            plan_shipment(&request, &standard_catalog(), &FreightLimits::default()).unwrap();
        let shuffled = plan_shipment(&request, &reversed, &FreightLimits::default()).unwrap();
        assert_eq!(straight, shuffled);
    }

    #[test]
    fn heavier_cartons_never_need_fewer_containers() {
        let mut previous = 0;
        for weight in [1.0, 5.0, 20.0, 50.0, 200.0] {
            let request = floor_loaded(5000, carton(weight));
            let plan = plan(&request).unwrap();
            assert!(
                plan.manifests.len() >= previous,
                "weight {} gave {} containers after {}",
                weight,
                plan.manifests.len(),
                previous
            );
            previous = plan.manifests.len();
        }
    }

    #[test]
    fn heavier_cartons_never_need_fewer_containers_palletized() {
        let mut previous = 0;
        for weight in [1.0, 5.0, 50.0, 200.0, 400.0] {
            let request = palletized(3000, weight);
            let plan = plan(&request).unwrap();
            assert_eq!(plan_cartons(&plan), 3000, "weight {}", weight);
            assert!(
                plan.manifests.len() >= previous,
                "weight {} gave {} containers after {}",
                weight,
                plan.manifests.len(),
                previous
            );
            if plan.weight_status == WeightStatus::Ok {
                for manifest in &plan.manifests {
                    assert!(
                        manifest.total_weight_kg <= 19950.0 + EPSILON_GENERAL,
                        "weight {} produced an unflagged {} kg manifest",
                        weight,
                        manifest.total_weight_kg
                    );
                }
            }
            previous = plan.manifests.len();
        }
    }

    #[test]
    fn simulator_respects_cumulative_weight_limit() {
        let table = base_only_table(100.0, 15000.0);
        let mut pool = PalletInventory::new();
        pool.add(ShapeKind::Base, 2);

        let catalog = standard_catalog();
        let placed = simulate_container_load(
            &catalog[2],
            &pool,
            &table,
            &FreightLimits::default(),
        );
        // Two 15 t pallets together exceed 19950 kg; only one is admitted.
        assert_eq!(placed.total_pallets(), 1);
    }

    #[test]
    fn simulator_admits_first_pallet_even_when_overweight() {
        let table = base_only_table(100.0, 25000.0);
        let mut pool = PalletInventory::new();
        pool.add(ShapeKind::Base, 1);

        let catalog = standard_catalog();
        let placed = simulate_container_load(
            &catalog[0],
            &pool,
            &table,
            &FreightLimits::default(),
        );
        assert_eq!(placed.total_pallets(), 1);
    }

    #[test]
    fn simulator_stops_once_the_pool_is_drained() {
        // A sub-millimeter footprint saturates the slot count near
        // u32::MAX; the simulator must bail out as soon as the pool is
        // empty instead of sweeping the remaining slots.
        let mut table = base_only_table(100.0, 290.0);
        table.length = 0.001;
        table.width = 0.001;
        let mut pool = PalletInventory::new();
        pool.add(ShapeKind::Base, 3);

        let catalog = standard_catalog();
        let placed = simulate_container_load(
            &catalog[0],
            &pool,
            &table,
            &FreightLimits::default(),
        );
        assert_eq!(placed.total_pallets(), 3);
    }

    #[test]
    fn simulator_stacks_tallest_first() {
        // One Base (135) and one Topper (115) share a floor slot in a High
        // Cube (269); in a 40' Standard (239) they occupy separate slots.
        let request = palletized(99, 5.0);
        let catalog = standard_catalog();
        let limits = FreightLimits::default();
        let ShipmentMode::Palletized(pallet) = request.mode else {
            unreachable!()
        };
        let mut table = build_shape_table(&request.carton, &pallet, &catalog, &limits).unwrap();
        let inventory = allocate_inventory(99, &mut table, &request.carton, &pallet);

        let high_cube = simulate_container_load(&catalog[2], &inventory, &table, &limits);
        assert_eq!(high_cube.total_pallets(), 2);

        let standard = simulate_container_load(&catalog[1], &inventory, &table, &limits);
        assert_eq!(standard.total_pallets(), 2);
    }

    #[test]
    fn overweight_plan_is_flagged_not_refused() {
        // A single 25 t carton builds one remnant pallet heavier than the
        // road limit; the plan is returned and flagged.
        let heavy = Carton::new(100.0, 100.0, 100.0, 25000.0).unwrap();
        let spec = PalletSpec::new(120.0, 100.0, 15.0, 20.0, 152.4).unwrap();
        let request =
            ShipmentRequest::new(1, heavy, ShipmentMode::Palletized(spec)).unwrap();
        let plan = plan_shipment(&request, &standard_catalog(), &FreightLimits::default())
            .unwrap();

        assert_eq!(plan.weight_status, WeightStatus::Overweight);
        assert!(plan.recommendation.contains("(WARNING: Overweight!)"));
        assert_eq!(plan.manifests.len(), 1);
        assert!(plan.manifests[0].total_weight_kg > 19950.0);
    }

    #[test]
    fn overweight_floor_load_is_flagged() {
        let heavy = Carton::new(100.0, 100.0, 100.0, 25000.0).unwrap();
        let request = floor_loaded(1, heavy);
        let plan = plan(&request).unwrap();
        assert_eq!(plan.weight_status, WeightStatus::Overweight);
        assert!(plan.recommendation.ends_with("(WARNING: Overweight!)"));
    }

    #[test]
    fn carton_too_large_for_any_container_is_infeasible() {
        let huge = Carton::new(1300.0, 300.0, 300.0, 5.0).unwrap();
        let request = floor_loaded(10, huge);
        assert!(matches!(plan(&request), Err(PlanError::Infeasible(_))));
    }

    #[test]
    fn pallet_too_large_for_any_container_is_infeasible() {
        // Pallet footprint wider than any container interior.
        let spec = PalletSpec::new(600.0, 300.0, 15.0, 20.0, 152.4).unwrap();
        let request =
            ShipmentRequest::new(10, carton(5.0), ShipmentMode::Palletized(spec)).unwrap();
        assert!(matches!(plan(&request), Err(PlanError::Infeasible(_))));
    }

    #[test]
    fn empty_catalog_is_infeasible() {
        let request = palletized(10, 5.0);
        let result = plan_shipment(&request, &[], &FreightLimits::default());
        assert!(matches!(result, Err(PlanError::Infeasible(_))));
    }

    #[test]
    fn progress_events_track_committed_containers() {
        let request = palletized(200, 5.0);
        let mut events = Vec::new();
        let plan = plan_shipment_with_progress(
            &request,
            &standard_catalog(),
            &FreightLimits::default(),
            |event| events.push(event.clone()),
        )
        .unwrap();

        assert!(matches!(
            events.first(),
            Some(PlanEvent::PalletsBuilt { total_pallets: 5 })
        ));
        let committed = events
            .iter()
            .filter(|event| matches!(event, PlanEvent::ContainerCommitted { .. }))
            .count();
        assert_eq!(committed, plan.manifests.len());
        assert!(matches!(
            events.last(),
            Some(PlanEvent::Finished {
                containers: 1,
                weight_status: WeightStatus::Ok
            })
        ));
    }

    #[test]
    fn manifest_weight_includes_pallet_self_weight() {
        let request = palletized(54, 5.0);
        let plan = plan(&request).unwrap();
        assert_eq!(plan.manifests.len(), 1);
        // One Base pallet: 54 cartons x 5 kg + 20 kg pallet.
        assert_eq!(plan.manifests[0].total_weight_kg, 290.0);
        match &plan.manifests[0].load {
            ManifestLoad::Pallets(pallets) => {
                assert_eq!(pallets.len(), 1);
                assert_eq!(pallets[0].shape.kind, ShapeKind::Base);
                assert_eq!(pallets[0].count, 1);
            }
            other => panic!("expected pallet load, got {:?}", other),
        }
    }
}
