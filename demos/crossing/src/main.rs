//! crossing — plan a river crossing for a foot soldier.
//!
//! A warrior on the west bank wants to reach a city on the east bank.  The
//! only way over is a trireme anchored in the river: the planned path embarks
//! and disembarks on the far side.  A fighter then flies to the same city.
//!
//! ```text
//! cargo run -p crossing -- [fuel-first|health-first]
//! RUST_LOG=wf_path=trace cargo run -p crossing
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wf_core::{SearchConfig, TileId, TurnPolicy, UnitId};
use wf_path::{PathFinder, SearchStats};
use wf_world::{GridMap, GridWorld, UnitKind};

// ── Map ───────────────────────────────────────────────────────────────────────

// `.` plains, `h` hills, `f` forest, `^` mountains, `~` water, `C` city,
// `?` unexplored.
const MAP: &str = "
    ..h..~..f..
    .f^..~.....
    .....~...C.
    ..f..~.....
    ?....~..^^.
";

const SOLDIER_AT: (u32, u32) = (3, 2);
const BOAT_AT:    (u32, u32) = (5, 2);
const CITY_AT:    (i64, i64) = (9, 2);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let policy: TurnPolicy = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => TurnPolicy::default(),
    };
    let config = SearchConfig::default().with_turn_policy(policy);

    let mut world = GridWorld::new(GridMap::parse(MAP)?);
    let warriors = world.add_kind(UnitKind::warriors());
    let trireme = world.add_kind(UnitKind::trireme());
    let fighter = world.add_kind(UnitKind::fighter());
    let soldier = world.add_unit(warriors, SOLDIER_AT.0, SOLDIER_AT.1)?;
    world.add_unit(trireme, BOAT_AT.0, BOAT_AT.1)?;
    let plane = world.add_unit(fighter, 0, 0)?;

    let city = world
        .map()
        .tile_at(CITY_AT.0, CITY_AT.1)
        .context("city lies outside the map")?;

    info!(%policy, width = world.map().width(), height = world.map().height(), "world ready");

    plan(&world, soldier, city, &config)?;
    plan(&world, plane, city, &config)?;
    Ok(())
}

fn plan(world: &GridWorld, id: UnitId, dest: TileId, config: &SearchConfig) -> Result<()> {
    let unit = *world.unit(id)?;
    let kind = &world.kind(unit.kind)?.name;

    let mut finder = PathFinder::with_config(unit, config.clone());
    let mut stats = SearchStats::default();
    let t0 = Instant::now();
    let path = finder.find_path_observed(world, dest, &mut stats);
    let elapsed = t0.elapsed();

    info!(
        unit = kind.as_str(),
        policy = %finder.config().turn_policy,
        steps = path.len(),
        turns = path.turns(),
        expanded = stats.expanded,
        admitted = stats.admitted,
        dead_ends = stats.dead_ends(),
        elapsed_us = elapsed.as_micros() as u64,
        "path planned"
    );

    println!("{kind} → {:?}", world.map().coords(dest));
    for step in &path {
        let (x, y) = world.map().coords(step.tile);
        let aboard = if step.loaded.is_some() { " (aboard)" } else { "" };
        println!(
            "  turn {:>2}  {:<16} ({x:>2},{y:>2})  moves {:>2}  hp {:>2}{aboard}",
            step.turns(),
            step.order.to_string(),
            step.cost.moves_left,
            step.cost.health,
        );
    }
    if path.is_empty() {
        println!("  {path}");
    }
    println!();
    Ok(())
}
