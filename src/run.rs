//! The render pipeline: source -> track -> layout -> output files.

use crate::cli::{BuiltinTrack, RenderConfig, TrackSource};
use std::fs;
use tracing::info;
use trackforge_anki::{DriveMap, OverdriveMap};
use trackforge_core::Result;
use trackforge_export::{
    render_annotated_svg, render_clean_svg, render_location_csv, render_location_json,
    render_page_svg, render_track_json,
};
use trackforge_layout::PageGrid;
use trackforge_track::{builders, LocationTable, Track};

/// Builds or imports the track selected by the configuration.
fn build_track(config: &RenderConfig) -> Result<Track> {
    match &config.source {
        TrackSource::Builtin(BuiltinTrack::Starter) => Ok(builders::starter_track()),
        TrackSource::Builtin(BuiltinTrack::Ring) => Ok(builders::ring_track(150.0, 220.0, 10)),
        TrackSource::ImportDrive(file) => {
            let mut map = DriveMap::load(&config.appdata, file)?;
            if config.zero_theta {
                map.reset_theta();
            }
            map.convert(config.rotation)
        }
        TrackSource::ImportOverdrive(file) => {
            let map = OverdriveMap::load(&config.appdata, file)?;
            map.convert(config.rotation)
        }
    }
}

fn write_output(path: &str, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    info!(path, bytes = contents.len(), "wrote output file");
    Ok(())
}

/// Runs the whole pipeline and writes every output file.
pub fn run(config: &RenderConfig) -> Result<()> {
    let track = build_track(config)?;
    let table = LocationTable::from_track(&track);

    let canvas = track.adapt_canvas()?;
    let grid = PageGrid::compute(&canvas, config.paper, config.tiling)?;
    let print_box = grid.print_box();

    let prefix = &config.prefix;
    write_output(
        &format!("{prefix}_track_clean.svg"),
        &render_clean_svg(&print_box, &track),
    )?;
    write_output(
        &format!("{prefix}_track_annotated.svg"),
        &render_annotated_svg(&print_box, &track, &table),
    )?;
    write_output(
        &format!("{prefix}_track.json"),
        &render_track_json(&print_box, &track)?,
    )?;
    write_output(
        &format!("{prefix}_location-table.csv"),
        &render_location_csv(&table),
    )?;
    write_output(
        &format!("{prefix}_location-table.json"),
        &render_location_json(&print_box, &table)?,
    )?;

    // A 1x1 grid needs no per-page output; the combined drawing suffices.
    if !grid.is_single_page() {
        for ix in 0..grid.pages_x() {
            for iy in 0..grid.pages_y() {
                write_output(
                    &format!("{prefix}_track_{ix}x{iy}.svg"),
                    &render_page_svg(&grid, ix, iy, &track),
                )?;
            }
        }
    }

    info!(
        tiles = track.len(),
        pages_x = grid.pages_x(),
        pages_y = grid.pages_y(),
        "render pipeline finished"
    );
    Ok(())
}
