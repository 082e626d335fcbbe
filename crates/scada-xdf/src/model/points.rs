// crates/scada-xdf/src/model/points.rs

//! Contains model structs for addressing points and breaker terminal links.

use serde::Serialize;

/// Represents `<IfsPoint>`.
#[derive(Debug, Serialize, Default)]
pub struct IfsPoint {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@MonAddrHigh")]
    pub mon_addr_high: String,
    #[serde(rename = "@MonAddrLow")]
    pub mon_addr_low: String,
    #[serde(rename = "@MonAddrMiddle")]
    pub mon_addr_middle: String,
    #[serde(rename = "@MonType")]
    pub mon_type: String,
    #[serde(rename = "@ConAddrHigh")]
    pub con_addr_high: String,
    #[serde(rename = "@ConAddrLow")]
    pub con_addr_low: String,
    #[serde(rename = "@ConAddrMiddle")]
    pub con_addr_middle: String,
    #[serde(rename = "@ConType")]
    pub con_type: String,
    #[serde(rename = "@SelectBefore")]
    pub select_before: String,

    #[serde(
        rename = "Link_IfsPointLinksToInfo",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<PathLink>,
}

/// Any link element whose only content is a `PathB` attribute.
#[derive(Debug, Serialize, Default)]
pub struct PathLink {
    #[serde(rename = "@PathB")]
    pub path_b: String,
}

/// Represents `<Terminal Name="T1">` with its measurement links.
#[derive(Debug, Serialize, Default)]
pub struct LinkedTerminal {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "Link_TerminalMeasuredByMeasurement")]
    pub links: Vec<PathLink>,
}
