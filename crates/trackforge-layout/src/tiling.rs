//! Page-grid computation and crop-mark guide geometry.
//!
//! Every page steps by `paper_dimension - whole_margin` but draws the full
//! paper size, so neighboring pages share an overlap strip of
//! `margin_overlap` once their non-printable borders are trimmed. The crop
//! marks are pure geometry derived from the margins and page index; the SVG
//! writer turns them into markup.

use crate::paper::PaperFormat;
use tracing::debug;
use trackforge_core::{BoundingBox, ConfigError, GeometryError, Result, Vector2};

/// Outer clearance added around the track for annotation labels.
const ANNOTATION_CLEARANCE: f64 = 22.5;

/// Stroke width of the thick cut ticks in millimeters.
const GUIDE_WIDTH_THICK: f64 = 2.0;

/// Stroke width of the thin dashed guide lines in millimeters.
const GUIDE_WIDTH_THIN: f64 = 0.1;

/// Relative size of the page-index label within the overlap strip.
const LABEL_SCALE: f64 = 0.75;

/// Margin configuration for the paper tiling.
#[derive(Debug, Clone, Copy)]
pub struct TilingConfig {
    /// Unprintable border inset common to most printers, per side.
    pub margin_not_printable: f64,
    /// Deliberately duplicated strip between adjacent pages.
    pub margin_overlap: f64,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            margin_not_printable: 5.0,
            margin_overlap: 5.0,
        }
    }
}

impl TilingConfig {
    /// Per-page length lost to margins: both non-printable borders plus the
    /// overlap strip.
    pub fn whole_margin(&self) -> f64 {
        2.0 * self.margin_not_printable + self.margin_overlap
    }

    /// Padding applied around the raw track extent before any page math.
    pub fn outer_margin(&self) -> f64 {
        self.margin_not_printable + self.margin_overlap + ANNOTATION_CLEARANCE
    }
}

/// One crop-mark guide line on a page.
#[derive(Debug, Clone, Copy)]
pub struct GuideLine {
    pub from: Vector2,
    pub to: Vector2,
    pub width: f64,
    pub dashed: bool,
}

/// The page-index label drawn inside the overlap corner.
#[derive(Debug, Clone)]
pub struct PageLabel {
    pub anchor: Vector2,
    pub font_size: f64,
    pub text: String,
}

/// Crop-mark geometry of one page.
#[derive(Debug, Clone)]
pub struct PageGuides {
    pub lines: Vec<GuideLine>,
    pub label: PageLabel,
}

/// The computed page grid over a track's padded bounding box.
#[derive(Debug, Clone)]
pub struct PageGrid {
    bb: BoundingBox,
    paper_width: f64,
    paper_height: f64,
    pages_x: usize,
    pages_y: usize,
    config: TilingConfig,
}

impl PageGrid {
    /// Computes the grid for a track bounding box and paper format.
    ///
    /// The raw box is padded by the outer margin first; page counts follow
    /// `ceil((extent - whole_margin) / (paper_dim - whole_margin))` per
    /// axis, which makes each page contribute exactly
    /// `paper_dim - whole_margin` of new printable length.
    pub fn compute(
        track_bb: &BoundingBox,
        format: PaperFormat,
        config: TilingConfig,
    ) -> Result<Self> {
        if track_bb.is_empty() {
            return Err(GeometryError::EmptyCanvas.into());
        }
        let mut bb = *track_bb;
        bb.grow(config.outer_margin());

        let (paper_width, paper_height) = format.dimensions(&bb);
        let pages_x = Self::pages_along(bb.width(), paper_width, &config)?;
        let pages_y = Self::pages_along(bb.height(), paper_height, &config)?;
        debug!(
            pages_x,
            pages_y,
            paper_width,
            paper_height,
            format = format.name(),
            "computed page grid"
        );
        Ok(Self {
            bb,
            paper_width,
            paper_height,
            pages_x,
            pages_y,
            config,
        })
    }

    fn pages_along(extent: f64, paper_dim: f64, config: &TilingConfig) -> Result<usize> {
        let whole_margin = config.whole_margin();
        let step = paper_dim - whole_margin;
        if step <= 0.0 {
            return Err(ConfigError::PaperTooSmall {
                dimension: paper_dim,
                margin: whole_margin,
            }
            .into());
        }
        let pages = ((extent - whole_margin) / step).ceil();
        Ok((pages as usize).max(1))
    }

    pub fn pages_x(&self) -> usize {
        self.pages_x
    }

    pub fn pages_y(&self) -> usize {
        self.pages_y
    }

    /// Whether a single combined drawing suffices and per-page output can
    /// be skipped.
    pub fn is_single_page(&self) -> bool {
        self.pages_x == 1 && self.pages_y == 1
    }

    pub fn paper_width(&self) -> f64 {
        self.paper_width
    }

    pub fn paper_height(&self) -> f64 {
        self.paper_height
    }

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// The padded track bounding box the grid is anchored to.
    pub fn track_box(&self) -> &BoundingBox {
        &self.bb
    }

    /// Viewport of page `(ix, iy)`: steps by the non-overlapping increment
    /// but spans the full paper size, producing deliberate overlap with its
    /// neighbors.
    pub fn page_viewport(&self, ix: usize, iy: usize) -> BoundingBox {
        debug_assert!(ix < self.pages_x && iy < self.pages_y);
        let step_x = self.paper_width - self.config.whole_margin();
        let step_y = self.paper_height - self.config.whole_margin();
        let x_min = self.bb.x_min + step_x * ix as f64;
        let y_min = self.bb.y_min + step_y * iy as f64;
        BoundingBox::new(x_min, x_min + self.paper_width, y_min, y_min + self.paper_height)
    }

    /// The assembled-printout box: outer margins are assumed cut off and
    /// the pages glued along their overlap strips.
    pub fn print_box(&self) -> BoundingBox {
        let whole_margin = self.config.whole_margin();
        BoundingBox::new(
            self.bb.x_min + self.config.margin_not_printable,
            self.bb.x_min + self.pages_x as f64 * (self.paper_width - whole_margin),
            self.bb.y_min + self.config.margin_not_printable,
            self.bb.y_min + self.pages_y as f64 * (self.paper_height - whole_margin),
        )
    }

    /// Crop-mark geometry for page `(ix, iy)`: thick cut ticks at the page
    /// corners, thin dashed guides across the full page, and the page-index
    /// label inside the bottom-left overlap corner.
    pub fn page_guides(&self, ix: usize, iy: usize) -> PageGuides {
        let bb = self.page_viewport(ix, iy);
        let mnp = self.config.margin_not_printable;
        let mo = self.config.margin_overlap;

        // Cut positions: the non-printable inset on the min sides, the
        // inset plus the overlap strip on the max sides.
        let cut_x_min = bb.x_min + mnp;
        let cut_y_min = bb.y_min + mnp;
        let cut_x_max = bb.x_max - mnp - mo;
        let cut_y_max = bb.y_max - mnp - mo;

        let mut lines = Vec::with_capacity(12);
        let thick = GUIDE_WIDTH_THICK;
        let mut tick = |from: Vector2, to: Vector2| {
            lines.push(GuideLine {
                from,
                to,
                width: thick,
                dashed: false,
            });
        };

        // Ticks along the min-side cuts, inset by half the stroke width so
        // the cut runs along the tick's outer edge.
        let y = cut_y_min - 0.5 * thick;
        tick(Vector2::new(bb.x_min, y), Vector2::new(bb.x_min + mnp, y));
        tick(Vector2::new(bb.x_max - mnp, y), Vector2::new(bb.x_max, y));
        let x = cut_x_min - 0.5 * thick;
        tick(Vector2::new(x, bb.y_min), Vector2::new(x, bb.y_min + mnp));
        tick(Vector2::new(x, bb.y_max - mnp), Vector2::new(x, bb.y_max));

        // Ticks along the max-side cuts.
        let y = cut_y_max + 0.5 * thick;
        tick(Vector2::new(bb.x_min, y), Vector2::new(bb.x_min + mnp, y));
        tick(Vector2::new(bb.x_max - mnp, y), Vector2::new(bb.x_max, y));
        let x = cut_x_max + 0.5 * thick;
        tick(Vector2::new(x, bb.y_min), Vector2::new(x, bb.y_min + mnp));
        tick(Vector2::new(x, bb.y_max - mnp), Vector2::new(x, bb.y_max));

        // Thin dashed guides across the full page at every cut position.
        let thin = GUIDE_WIDTH_THIN;
        let mut guide = |from: Vector2, to: Vector2| {
            lines.push(GuideLine {
                from,
                to,
                width: thin,
                dashed: true,
            });
        };
        let y = cut_y_min - 0.5 * thin;
        guide(Vector2::new(bb.x_min, y), Vector2::new(bb.x_max, y));
        let x = cut_x_min - 0.5 * thin;
        guide(Vector2::new(x, bb.y_min), Vector2::new(x, bb.y_max));
        let y = cut_y_max + 0.5 * thin;
        guide(Vector2::new(bb.x_min, y), Vector2::new(bb.x_max, y));
        let x = cut_x_max + 0.5 * thin;
        guide(Vector2::new(x, bb.y_min), Vector2::new(x, bb.y_max));

        let label = PageLabel {
            anchor: Vector2::new(
                bb.x_min + mnp + mo + 0.5 * (1.0 - LABEL_SCALE) * mo,
                bb.y_max - mnp - 0.5 * (1.0 - LABEL_SCALE) * mo,
            ),
            font_size: LABEL_SCALE * mo,
            text: format!("{ix}x{iy}"),
        };

        PageGuides { lines, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: f64, height: f64, format: PaperFormat) -> PageGrid {
        let bb = BoundingBox::new(0.0, width, 0.0, height);
        PageGrid::compute(&bb, format, TilingConfig::default()).unwrap()
    }

    #[test]
    fn test_full_format_is_always_single_page() {
        for (w, h) in [(10.0, 10.0), (440.0, 440.0), (5000.0, 3000.0)] {
            let g = grid(w, h, PaperFormat::Full);
            assert_eq!((g.pages_x(), g.pages_y()), (1, 1));
            assert!(g.is_single_page());
        }
    }

    #[test]
    fn test_empty_box_is_fatal() {
        let err = PageGrid::compute(
            &BoundingBox::empty(),
            PaperFormat::A4Landscape,
            TilingConfig::default(),
        )
        .unwrap_err();
        assert!(err.is_geometry_error());
    }

    #[test]
    fn test_page_count_monotone_in_extent() {
        let mut last = 0;
        for width in [50.0, 300.0, 600.0, 900.0, 1800.0] {
            let g = grid(width, 50.0, PaperFormat::A4Landscape);
            assert!(g.pages_x() >= last);
            last = g.pages_x();
        }
        assert!(last > 1);
    }

    #[test]
    fn test_page_count_monotone_in_paper_size() {
        let small = grid(900.0, 50.0, PaperFormat::A4Landscape);
        let large = grid(900.0, 50.0, PaperFormat::A3Landscape);
        assert!(large.pages_x() <= small.pages_x());
    }

    #[test]
    fn test_adjacent_pages_overlap_exactly_by_overlap_margin() {
        // Padded extent forces a 2x1 grid on a4-landscape.
        let g = grid(400.0, 100.0, PaperFormat::A4Landscape);
        assert_eq!((g.pages_x(), g.pages_y()), (2, 1));

        let config = *g.config();
        let left = g.page_viewport(0, 0);
        let right = g.page_viewport(1, 0);

        // After trimming the non-printable border from both pages, the
        // printable regions share exactly the overlap strip, with no gap.
        let left_printable_end = left.x_max - config.margin_not_printable;
        let right_printable_start = right.x_min + config.margin_not_printable;
        let overlap = left_printable_end - right_printable_start;
        assert!((overlap - config.margin_overlap).abs() < 1e-9);
    }

    #[test]
    fn test_viewports_span_full_paper_size() {
        let g = grid(400.0, 100.0, PaperFormat::A4Landscape);
        let v = g.page_viewport(1, 0);
        assert!((v.width() - g.paper_width()).abs() < 1e-9);
        assert!((v.height() - g.paper_height()).abs() < 1e-9);
    }

    #[test]
    fn test_print_box_covers_all_new_printable_area() {
        let g = grid(400.0, 100.0, PaperFormat::A4Landscape);
        let print = g.print_box();
        let step = g.paper_width() - g.config().whole_margin();
        assert!((print.width() - (2.0 * step - g.config().margin_not_printable)).abs() < 1e-9);
    }

    #[test]
    fn test_page_guides_geometry() {
        let g = grid(400.0, 100.0, PaperFormat::A4Landscape);
        let guides = g.page_guides(1, 0);
        assert_eq!(guides.lines.len(), 12);
        assert_eq!(guides.lines.iter().filter(|l| l.dashed).count(), 4);
        assert_eq!(guides.label.text, "1x0");
        assert!((guides.label.font_size - 0.75 * g.config().margin_overlap).abs() < 1e-12);

        // Dashed guides span the whole page.
        let bb = g.page_viewport(1, 0);
        for line in guides.lines.iter().filter(|l| l.dashed) {
            let len = line.from.distance_to(&line.to);
            assert!(
                (len - bb.width()).abs() < 1e-9 || (len - bb.height()).abs() < 1e-9
            );
        }
    }
}
