// crates/scada-xdf/src/resolver/breaker.rs

//! Derives the breaker terminal's measurement links from the full row set.

use super::points::{network_path, BREAKER_CODE};
use crate::table::Table;
use crate::types::{BreakerLinks, LinkedTerminal, MeasurementLink};
use log::debug;

/// Element codes measured through the breaker terminal.
pub const LINKED_MEASUREMENTS: [&str; 4] = ["P", "Q", "I_S", "U_RS"];

const TERMINAL_NAME: &str = "T1";

/// Returns the breaker links, or `None` if the table has no `CB` row or no
/// linked measurement rows.
///
/// The last `CB` row supplies the base path. Every measurement row, in table
/// order, contributes one link.
pub fn resolve_breaker_links(table: &Table) -> Option<BreakerLinks> {
    let breaker_row = table
        .rows()
        .filter(|row| row.value("ELEMENT") == BREAKER_CODE)
        .last()?;
    let base_path = network_path(&breaker_row);

    let links: Vec<MeasurementLink> = table
        .rows()
        .map(|row| row.value("ELEMENT"))
        .filter(|code| LINKED_MEASUREMENTS.contains(code))
        .map(|code| MeasurementLink {
            path_b: format!("{}/{}", base_path, code.replace('_', " ")),
        })
        .collect();

    if links.is_empty() {
        debug!("Breaker row found but no linked measurements");
        return None;
    }

    Some(BreakerLinks {
        breaker_name: BREAKER_CODE.to_string(),
        terminal: LinkedTerminal {
            name: TERMINAL_NAME.to_string(),
            links,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 9] = [
        "ELEMENT", "INFO", "TYPE", "B1", "B2", "B3", "AOR", "EMPRESA", "REGION",
    ];

    fn row(code: &str, b3: &str) -> Vec<String> {
        [code, "MvMoment", "AI", "A", "B", b3, "R1", "E", "N"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_links_for_every_measurement_row() {
        let table = Table::new(
            &HEADERS,
            vec![row("P", "C"), row("ST", "C"), row("CB", "C"), row("U_RS", "C"), row("P", "C")],
        );
        let links = resolve_breaker_links(&table).unwrap();
        assert_eq!(links.breaker_name, "CB");
        assert_eq!(links.terminal.name, "T1");
        let paths: Vec<_> = links.terminal.links.iter().map(|l| l.path_b.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "ELECTRICITY/NETWORK/E/N/A/B/C/P",
                "ELECTRICITY/NETWORK/E/N/A/B/C/U RS",
                "ELECTRICITY/NETWORK/E/N/A/B/C/P",
            ]
        );
    }

    #[test]
    fn test_last_breaker_row_supplies_base_path() {
        let table = Table::new(&HEADERS, vec![row("CB", "first"), row("Q", "x"), row("CB", "last")]);
        let links = resolve_breaker_links(&table).unwrap();
        assert_eq!(
            links.terminal.links[0].path_b,
            "ELECTRICITY/NETWORK/E/N/A/B/last/Q"
        );
    }

    #[test]
    fn test_no_breaker_row() {
        let table = Table::new(&HEADERS, vec![row("P", "C"), row("Q", "C")]);
        assert!(resolve_breaker_links(&table).is_none());
    }

    #[test]
    fn test_breaker_without_measurements() {
        let table = Table::new(&HEADERS, vec![row("CB", "C"), row("ST", "C")]);
        assert!(resolve_breaker_links(&table).is_none());
    }
}
