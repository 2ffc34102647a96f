//! CSV renderer for the location table.

use std::fmt::Write;
use trackforge_track::LocationTable;

/// Renders the location table as CSV with a header row.
pub fn render_location_csv(table: &LocationTable) -> String {
    let mut out = String::from("index,label,x,y,heading,distance\n");
    for record in table.records() {
        let _ = writeln!(
            out,
            "{},{},{:.6},{:.6},{:.6},{:.6}",
            record.index,
            record.label,
            record.pose.position.x,
            record.pose.position.y,
            record.pose.heading,
            record.distance
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackforge_track::builders::starter_track;
    use trackforge_track::Track;

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let track = starter_track();
        let table = LocationTable::from_track(&track);
        let csv = render_location_csv(&table);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "index,label,x,y,heading,distance");
        assert_eq!(lines.len(), table.len() + 1);
        assert!(lines[1].starts_with("0,segment-0,0.000000,0.000000,"));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let table = LocationTable::from_track(&Track::new());
        let csv = render_location_csv(&table);
        assert_eq!(csv, "index,label,x,y,heading,distance\n");
    }
}
