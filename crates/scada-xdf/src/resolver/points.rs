// crates/scada-xdf/src/resolver/points.rs

//! Builds addressing points from input rows.

use crate::table::Row;
use crate::types::{IfsPoint, IfsPointLink};

/// `INFO` value whose element codes are displayed with spaces instead of underscores.
pub const MEASUREMENT_INFO: &str = "MvMoment";

/// `TYPE` value marking a point that is both monitored and controlled.
pub const CONTROLLED_TYPE: &str = "SP_SC";

/// The sentinel breaker element code.
pub const BREAKER_CODE: &str = "CB";

/// Value used for any address or flag cell that is absent or empty.
const DEFAULT_FIELD: &str = "0";

/// The display form of an element code.
pub fn display_name(code: &str, info: &str) -> String {
    if info == MEASUREMENT_INFO {
        code.replace('_', " ")
    } else {
        code.to_string()
    }
}

/// Root of every network-model path: `ELECTRICITY/NETWORK/{EMPRESA}/{REGION}/{B1}/{B2}/{B3}`.
pub(crate) fn network_path(row: &Row<'_>) -> String {
    format!(
        "ELECTRICITY/NETWORK/{}/{}/{}/{}/{}",
        row.value("EMPRESA"),
        row.value("REGION"),
        row.value("B1"),
        row.value("B2"),
        row.value("B3")
    )
}

fn or_default<'a>(row: &Row<'a>, column: &str) -> &'a str {
    row.non_empty(column).unwrap_or(DEFAULT_FIELD)
}

/// Builds the addressing point for one row.
///
/// `is_breaker` marks rows whose element is breaker-shaped; their name and
/// path segments repeat the display name (`CB_CB`, `CB/CB`).
pub fn build_point(row: &Row<'_>, is_breaker: bool) -> IfsPoint {
    let code = row.value("ELEMENT");
    let info = row.value("INFO");
    let display = display_name(code, info);

    let (name_part, path_part) = if is_breaker {
        (
            format!("{}_{}", display, display),
            format!("{}/{}", display, display),
        )
    } else {
        (display.clone(), display)
    };

    let (suffix, con_type) = if row.value("TYPE") == CONTROLLED_TYPE {
        ("MC", "45")
    } else {
        ("M", "0")
    };

    IfsPoint {
        name: format!(
            "{}_{}_{}_{}_{}_{}",
            row.value("B1"),
            row.value("B2"),
            row.value("B3"),
            name_part,
            info,
            suffix
        ),
        mon_addr_high: or_default(row, "MHB").to_string(),
        mon_addr_low: or_default(row, "MLB").to_string(),
        mon_addr_middle: or_default(row, "MMB").to_string(),
        mon_type: DEFAULT_FIELD.to_string(),
        con_addr_high: or_default(row, "CHB").to_string(),
        con_addr_low: or_default(row, "CLB").to_string(),
        con_addr_middle: or_default(row, "CMB").to_string(),
        con_type: con_type.to_string(),
        select_before: or_default(row, "SBO").to_string(),
        link: Some(IfsPointLink {
            path_b: format!("{}/{}/{}", network_path(row), path_part, info),
        }),
    }
}
