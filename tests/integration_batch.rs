//! End-to-end tests: a mod directory on disk through the batch loader
//! and the load command's execution path

use mapmod_loader::LoadError;
use mapmod_loader::app::services::batch::BatchLoader;
use mapmod_loader::cli::args::{Args, Commands};
use mapmod_loader::cli::commands::load;
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn region_text(id: u32, name: &str, provinces: &str) -> String {
    format!(
        r#"strategic_region={{
	id={id}
	name="{name}"
	provinces={{ {provinces} }}
	weather={{
		period={{
			between={{ 0.0 30.11 }}
			temperature={{ -8.0 22.0 }}
			temperature_day_night={{ -3.0 -7.0 }}
			no_phenomenon=0.700
			rain_light=0.200
			rain_heavy=0.100
			snow=0.050
			blizzard=0.000
			arctic_water=0.000
			mud=0.100
			sandstorm=0.000
			min_snow_level=0.000
		}}
	}}
}}
"#
    )
}

const ADJACENCY: &str = r#"
adjacency_rule = {
	name = "Panama Canal"
	contested = { army = no navy = no submarine = no trade = no }
	enemy = { army = no navy = no submarine = no trade = no }
	friend = { army = yes navy = yes submarine = yes trade = yes }
	neutral = { army = no navy = yes submarine = yes trade = yes }
	required_provinces = { 7617 12518 }
	icon = 12518
	offset = { -3 0 -6 }
}
"#;

const CITIES: &str = r#"
types_source = "map/cities.bmp"
pixel_step_x = 2
pixel_step_y = 2
city_group = {
	color_index = 0
	density = 0.9
	building = {
		distance = 1.0
		mesh = { "western_city_1_entity" }
	}
}
"#;

/// Lay out a mod with the conventional map/ structure
fn write_mod(root: &Path, region_count: u32) {
    let regions = root.join("map/strategic_regions");
    fs::create_dir_all(&regions).unwrap();
    for id in 1..=region_count {
        fs::write(
            regions.join(format!("{id}-Region{id}.txt")),
            region_text(id, &format!("REGION_{id}"), &format!("{id}00 {id}01")),
        )
        .unwrap();
    }
    fs::write(root.join("map/adjacency_rules.txt"), ADJACENCY).unwrap();
    fs::write(root.join("map/cities.txt"), CITIES).unwrap();
}

#[tokio::test]
async fn batch_loader_handles_a_realistic_directory() {
    let root = TempDir::new().unwrap();
    write_mod(root.path(), 8);

    let report = BatchLoader::new(4)
        .load_regions(&root.path().join("map/strategic_regions"))
        .await
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(report.stats.regions_loaded, 8);
    assert_eq!(report.stats.periods_loaded, 8);
    assert_eq!(report.regions.sorted_ids(), (1..=8).collect::<Vec<u32>>());
}

#[tokio::test]
async fn load_command_loads_all_three_file_kinds() {
    let root = TempDir::new().unwrap();
    write_mod(root.path(), 3);

    let args = parse_load_args(root.path(), &[]);
    let outcome = load::execute(&args).await.unwrap();

    assert_eq!(outcome.total_errors(), 0);
    assert_eq!(outcome.report.stats.regions_loaded, 3);

    let adjacency = outcome.adjacency.expect("adjacency rules should load");
    assert!(adjacency.get("Panama Canal").is_some());

    let cities = outcome.cities.expect("city groups should load");
    assert_eq!(cities.groups.len(), 1);
}

#[tokio::test]
async fn skip_flags_leave_optional_files_unloaded() {
    let root = TempDir::new().unwrap();
    write_mod(root.path(), 1);

    let args = parse_load_args(root.path(), &["--skip-adjacency", "--skip-cities"]);
    let outcome = load::execute(&args).await.unwrap();

    assert!(outcome.adjacency.is_none());
    assert!(outcome.cities.is_none());
    assert_eq!(outcome.total_errors(), 0);
}

#[tokio::test]
async fn broken_sibling_files_are_reported_together() {
    let root = TempDir::new().unwrap();
    write_mod(root.path(), 2);
    let regions = root.path().join("map/strategic_regions");

    // One malformed file, one duplicate of region 1
    fs::write(regions.join("90-Broken.txt"), "strategic_region = { id = 90").unwrap();
    fs::write(
        regions.join("91-Duplicate.txt"),
        region_text(1, "DUPLICATE", "900"),
    )
    .unwrap();

    let args = parse_load_args(root.path(), &[]);
    let outcome = load::execute(&args).await.unwrap();

    assert_eq!(outcome.total_errors(), 2);
    assert_eq!(outcome.report.stats.regions_loaded, 2);
    assert!(
        outcome
            .report
            .errors
            .iter()
            .any(|e| matches!(e, LoadError::Parse { .. }))
    );
    assert!(
        outcome
            .report
            .errors
            .iter()
            .any(|e| matches!(e, LoadError::DuplicateId { id: 1, .. }))
    );
}

#[tokio::test]
async fn broken_adjacency_file_is_an_extra_error() {
    let root = TempDir::new().unwrap();
    write_mod(root.path(), 1);
    fs::write(
        root.path().join("map/adjacency_rules.txt"),
        "adjacency_rule = { name = \"Unfinished\"",
    )
    .unwrap();

    let args = parse_load_args(root.path(), &[]);
    let outcome = load::execute(&args).await.unwrap();

    assert!(outcome.adjacency.is_none());
    assert_eq!(outcome.extra_errors.len(), 1);
    assert_eq!(outcome.total_errors(), 1);
}

fn parse_load_args(root: &Path, extra: &[&str]) -> mapmod_loader::cli::args::LoadArgs {
    let mut argv = vec![
        "mapmod-loader".to_string(),
        "load".to_string(),
        root.to_str().unwrap().to_string(),
        "--quiet".to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));

    let args = Args::parse_from(argv);
    match args.command {
        Some(Commands::Load(load_args)) => load_args,
        _ => unreachable!("load command requested"),
    }
}
