// crates/scada-xdf/src/model/elements.rs

//! Contains model structs for the network-model elements (`<Analog>`,
//! `<Discrete>`, `<Breaker>`) and their nested records.

use serde::Serialize;

/// Represents `<Analog>`.
#[derive(Debug, Serialize, Default)]
pub struct Analog {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@UnitOfMeasure")]
    pub unit_of_measure: String,
    #[serde(rename = "@WeightingSE")]
    pub weighting_se: String,
    #[serde(rename = "@Multiplier")]
    pub multiplier: String,
    #[serde(rename = "@ElementType")]
    pub element_type: String,
    #[serde(rename = "@Phases")]
    pub phases: String,
    #[serde(rename = "@ElementName")]
    pub element_name: String,
    #[serde(rename = "@MeasurementType")]
    pub measurement_type: String,
    #[serde(rename = "@AreaOfResponsibilityId")]
    pub area_of_responsibility_id: String,

    #[serde(rename = "AnalogValue", skip_serializing_if = "Option::is_none")]
    pub analog_value: Option<AnalogValue>,
    #[serde(rename = "AnalogInfo", skip_serializing_if = "Option::is_none")]
    pub analog_info: Option<AnalogInfo>,
}

/// Represents `<AnalogValue Name=".." Archive=".." InfoName=".."/>`.
#[derive(Debug, Serialize, Default)]
pub struct AnalogValue {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Archive")]
    pub archive: String,
    #[serde(rename = "@InfoName")]
    pub info_name: String,
}

/// Represents `<AnalogInfo Name=".." Value=".." InfoName=".."/>`.
#[derive(Debug, Serialize, Default)]
pub struct AnalogInfo {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Value")]
    pub value: String,
    #[serde(rename = "@InfoName")]
    pub info_name: String,
}

/// Represents `<Discrete>`.
#[derive(Debug, Serialize, Default)]
pub struct Discrete {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@ElementType")]
    pub element_type: String,
    #[serde(rename = "@ElementName")]
    pub element_name: String,
    #[serde(rename = "@MeasurementType")]
    pub measurement_type: String,
    #[serde(rename = "@AreaOfResponsibilityId")]
    pub area_of_responsibility_id: String,

    #[serde(rename = "DiscreteValue", skip_serializing_if = "Option::is_none")]
    pub discrete_value: Option<DiscreteValue>,
    #[serde(rename = "DiscreteInfo", skip_serializing_if = "Option::is_none")]
    pub discrete_info: Option<DiscreteInfo>,
}

/// Represents `<DiscreteValue Name=".." InfoName=".."/>`.
#[derive(Debug, Serialize, Default)]
pub struct DiscreteValue {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@InfoName")]
    pub info_name: String,
}

/// Represents `<DiscreteInfo Name=".." Value=".." InfoName=".."/>`.
#[derive(Debug, Serialize, Default)]
pub struct DiscreteInfo {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Value")]
    pub value: String,
    #[serde(rename = "@InfoName")]
    pub info_name: String,
}

/// Represents `<Breaker>` with its terminals and embedded `<Discrete>`.
#[derive(Debug, Serialize, Default)]
pub struct Breaker {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@FlowBreakerFlag")]
    pub flow_breaker_flag: String,
    #[serde(rename = "@VoltMagLimitCA")]
    pub volt_mag_limit_ca: String,
    #[serde(rename = "@DMSFlag")]
    pub dms_flag: String,
    #[serde(rename = "@AreaOfResponsibilityId")]
    pub area_of_responsibility_id: String,

    #[serde(rename = "Terminal", skip_serializing_if = "Vec::is_empty")]
    pub terminal: Vec<Terminal>,
    #[serde(rename = "Discrete", skip_serializing_if = "Option::is_none")]
    pub discrete: Option<Discrete>,
}

/// Represents `<Terminal Name=".." EquipEnd=".."/>` inside a `<Breaker>`.
#[derive(Debug, Serialize, Default)]
pub struct Terminal {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@EquipEnd")]
    pub equip_end: String,
}
