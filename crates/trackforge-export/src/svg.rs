//! SVG renderers for tracks and tiled pages.

use std::fmt::Write;
use trackforge_core::BoundingBox;
use trackforge_layout::PageGrid;
use trackforge_track::{LocationTable, Track};

fn svg_open(viewport: &BoundingBox, width_mm: f64, height_mm: f64) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         width=\"{}mm\" height=\"{}mm\" viewBox=\"{} {} {} {}\">",
        width_mm,
        height_mm,
        viewport.x_min,
        viewport.y_min,
        viewport.width(),
        viewport.height()
    );
    out
}

fn write_track_paths(out: &mut String, track: &Track) {
    for tile in track.tiles() {
        let _ = writeln!(
            out,
            "<path d=\"{}\" style=\"fill:none; stroke:black; stroke-width:{};\"/>",
            tile.svg_path_fragment(),
            track.lane_width()
        );
    }
}

fn write_location_markers(out: &mut String, table: &LocationTable) {
    for record in table.records() {
        let p = record.pose.position;
        let _ = writeln!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"2\" style=\"fill:red;\"/>",
            p.x, p.y
        );
        let _ = writeln!(
            out,
            "<text x=\"{}\" y=\"{}\" style=\"font-size:6; fill:red;\">{}</text>",
            p.x + 3.0,
            p.y - 3.0,
            record.label
        );
    }
}

/// Renders the combined track drawing without annotations.
pub fn render_clean_svg(print_box: &BoundingBox, track: &Track) -> String {
    let mut out = svg_open(print_box, print_box.width(), print_box.height());
    write_track_paths(&mut out, track);
    out.push_str("</svg>\n");
    out
}

/// Renders the combined track drawing with location markers and labels.
pub fn render_annotated_svg(
    print_box: &BoundingBox,
    track: &Track,
    table: &LocationTable,
) -> String {
    let mut out = svg_open(print_box, print_box.width(), print_box.height());
    write_track_paths(&mut out, track);
    write_location_markers(&mut out, table);
    out.push_str("</svg>\n");
    out
}

/// Renders one page of the tiled printout: the track clipped to the page
/// viewport plus crop-mark guides and the page-index label.
pub fn render_page_svg(grid: &PageGrid, ix: usize, iy: usize, track: &Track) -> String {
    let viewport = grid.page_viewport(ix, iy);
    let mut out = svg_open(&viewport, grid.paper_width(), grid.paper_height());
    write_track_paths(&mut out, track);

    let guides = grid.page_guides(ix, iy);
    for line in &guides.lines {
        let dash = if line.dashed {
            " stroke-dasharray:2,2;"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"stroke:cyan;{} stroke-width:{};\"/>",
            line.from.x, line.from.y, line.to.x, line.to.y, dash, line.width
        );
    }
    let _ = writeln!(
        out,
        "<text x=\"{}\" y=\"{}\" style=\"font-size:{}; fill:cyan\">{}</text>",
        guides.label.anchor.x, guides.label.anchor.y, guides.label.font_size, guides.label.text
    );

    out.push_str("</svg>\n");
    out
}
