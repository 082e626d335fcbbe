// crates/scada-xdf/src/builder/elements.rs

//! Maps public `types` elements onto their `model` serialization structs.

use crate::model;
use crate::types;

/// Converts one parent-group element into its serializable form.
pub(super) fn build_element(element: &types::XdfElement) -> model::Element {
    match element {
        types::XdfElement::Point(p) => model::Element::IfsPoint(build_point(p)),
        types::XdfElement::Element(types::NetworkElement::Analog(a)) => {
            model::Element::Analog(build_analog(a))
        }
        types::XdfElement::Element(types::NetworkElement::Discrete(d)) => {
            model::Element::Discrete(build_discrete(d))
        }
        types::XdfElement::Element(types::NetworkElement::Breaker(b)) => {
            model::Element::Breaker(build_breaker(b))
        }
        types::XdfElement::Terminal(t) => model::Element::Terminal(build_linked_terminal(t)),
    }
}

fn build_point(point: &types::IfsPoint) -> model::IfsPoint {
    model::IfsPoint {
        name: point.name.clone(),
        mon_addr_high: point.mon_addr_high.clone(),
        mon_addr_low: point.mon_addr_low.clone(),
        mon_addr_middle: point.mon_addr_middle.clone(),
        mon_type: point.mon_type.clone(),
        con_addr_high: point.con_addr_high.clone(),
        con_addr_low: point.con_addr_low.clone(),
        con_addr_middle: point.con_addr_middle.clone(),
        con_type: point.con_type.clone(),
        select_before: point.select_before.clone(),
        link: point.link.as_ref().map(|l| model::points::PathLink {
            path_b: l.path_b.clone(),
        }),
    }
}

fn build_linked_terminal(terminal: &types::LinkedTerminal) -> model::LinkedTerminal {
    model::LinkedTerminal {
        name: terminal.name.clone(),
        links: terminal
            .links
            .iter()
            .map(|l| model::points::PathLink {
                path_b: l.path_b.clone(),
            })
            .collect(),
    }
}

fn build_analog(analog: &types::Analog) -> model::Analog {
    model::Analog {
        name: analog.name.clone(),
        unit_of_measure: analog.unit_of_measure.clone(),
        weighting_se: analog.weighting_se.clone(),
        multiplier: analog.multiplier.clone(),
        element_type: analog.element_type.clone(),
        phases: analog.phases.clone(),
        element_name: analog.element_name.clone(),
        measurement_type: analog.measurement_type.clone(),
        area_of_responsibility_id: analog.area_of_responsibility_id.clone(),
        analog_value: analog
            .analog_value
            .as_ref()
            .map(|v| model::elements::AnalogValue {
                name: v.name.clone(),
                archive: v.archive.clone(),
                info_name: v.info_name.clone(),
            }),
        analog_info: analog
            .analog_info
            .as_ref()
            .map(|i| model::elements::AnalogInfo {
                name: i.name.clone(),
                value: i.value.clone(),
                info_name: i.info_name.clone(),
            }),
    }
}

fn build_discrete(discrete: &types::Discrete) -> model::Discrete {
    model::Discrete {
        name: discrete.name.clone(),
        element_type: discrete.element_type.clone(),
        element_name: discrete.element_name.clone(),
        measurement_type: discrete.measurement_type.clone(),
        area_of_responsibility_id: discrete.area_of_responsibility_id.clone(),
        discrete_value: discrete
            .discrete_value
            .as_ref()
            .map(|v| model::elements::DiscreteValue {
                name: v.name.clone(),
                info_name: v.info_name.clone(),
            }),
        discrete_info: discrete
            .discrete_info
            .as_ref()
            .map(|i| model::elements::DiscreteInfo {
                name: i.name.clone(),
                value: i.value.clone(),
                info_name: i.info_name.clone(),
            }),
    }
}

fn build_breaker(breaker: &types::Breaker) -> model::Breaker {
    model::Breaker {
        name: breaker.name.clone(),
        flow_breaker_flag: breaker.flow_breaker_flag.clone(),
        volt_mag_limit_ca: breaker.volt_mag_limit_ca.clone(),
        dms_flag: breaker.dms_flag.clone(),
        area_of_responsibility_id: breaker.area_of_responsibility_id.clone(),
        terminal: breaker
            .terminals
            .iter()
            .map(|t| model::elements::Terminal {
                name: t.name.clone(),
                equip_end: t.equip_end.clone(),
            })
            .collect(),
        discrete: breaker.discrete.as_ref().map(build_discrete),
    }
}
