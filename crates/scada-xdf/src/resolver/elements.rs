// crates/scada-xdf/src/resolver/elements.rs

use crate::types::{ElementTemplate, NetworkElement};

/// Instantiates `template` and stamps `name` and `aor` onto the copy.
///
/// Breakers carry both values down to their embedded `Discrete`.
/// Returns `None` for `IfsPoint` templates, which have no network-model form.
pub fn instantiate_element(template: &ElementTemplate, name: &str, aor: &str) -> Option<NetworkElement> {
    match template.instantiate() {
        ElementTemplate::Analog(mut analog) => {
            analog.name = name.to_string();
            analog.area_of_responsibility_id = aor.to_string();
            Some(NetworkElement::Analog(analog))
        }
        ElementTemplate::Discrete(mut discrete) => {
            discrete.name = name.to_string();
            discrete.area_of_responsibility_id = aor.to_string();
            Some(NetworkElement::Discrete(discrete))
        }
        ElementTemplate::Breaker(mut breaker) => {
            breaker.name = name.to_string();
            breaker.area_of_responsibility_id = aor.to_string();
            if let Some(discrete) = breaker.discrete.as_mut() {
                discrete.name = name.to_string();
                discrete.area_of_responsibility_id = aor.to_string();
            }
            Some(NetworkElement::Breaker(breaker))
        }
        ElementTemplate::IfsPoint(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Analog, Breaker, Discrete, IfsPoint};

    #[test]
    fn test_analog_is_parameterized() {
        let template = ElementTemplate::Analog(Analog {
            name: "template".to_string(),
            unit_of_measure: "A".to_string(),
            ..Default::default()
        });
        match instantiate_element(&template, "I S", "R1") {
            Some(NetworkElement::Analog(a)) => {
                assert_eq!(a.name, "I S");
                assert_eq!(a.area_of_responsibility_id, "R1");
                assert_eq!(a.unit_of_measure, "A");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(template.name(), "template");
    }

    #[test]
    fn test_breaker_cascades_to_embedded_discrete() {
        let template = ElementTemplate::Breaker(Breaker {
            discrete: Some(Discrete::default()),
            ..Default::default()
        });
        let element = instantiate_element(&template, "CB", "R2").unwrap();
        assert_eq!(element.name(), "CB");
        assert_eq!(element.area_of_responsibility_id(), "R2");
        if let NetworkElement::Breaker(b) = element {
            let discrete = b.discrete.unwrap();
            assert_eq!(discrete.name, "CB");
            assert_eq!(discrete.area_of_responsibility_id, "R2");
        }
    }

    #[test]
    fn test_breaker_without_discrete() {
        let template = ElementTemplate::Breaker(Breaker::default());
        let element = instantiate_element(&template, "CB", "R2").unwrap();
        assert!(matches!(element, NetworkElement::Breaker(ref b) if b.discrete.is_none()));
    }

    #[test]
    fn test_ifs_point_template_is_not_instantiable() {
        let template = ElementTemplate::IfsPoint(IfsPoint::default());
        assert!(instantiate_element(&template, "X", "R1").is_none());
    }
}
