//! Supports extracting arm parameters from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::kinematic_traits::Elbow;
use crate::parameter_error::ParameterError;
use crate::parameters::plotter_arm::{ElbowChoice, Parameters};

const ROOT: &str = "plotter_arm_parameters";

impl Parameters {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # Drawing arm, two 200 mm links
    /// plotter_arm_parameters:
    ///   reach: 400.0
    ///   resolution: 0.5
    ///   elbow: primary
    ///   continuity: true
    /// ```
    /// Only the reach is required. Resolution defaults to 0.5, elbow to "primary"
    /// (or "mirrored") and continuity to true (choose the configuration closest
    /// to the previous one).
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [Parameters::from_yaml_file], but from the YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(e.to_string()))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("Empty YAML document".into()))?;

        let params = &doc[ROOT];
        if params.is_badvalue() {
            return Err(ParameterError::MissingField(ROOT.into()));
        }

        let mut parameters = Parameters::new(read_number(params, "reach")?
            .ok_or_else(|| ParameterError::MissingField("reach".into()))?);

        if let Some(resolution) = read_number(params, "resolution")? {
            parameters.resolution = resolution;
        }

        let elbow = match &params["elbow"] {
            Yaml::BadValue | Yaml::Null => Elbow::default(),
            Yaml::String(name) => Elbow::from_name(name).ok_or_else(|| invalid("elbow", name))?,
            other => return Err(invalid("elbow", &format!("{:?}", other))),
        };

        let continuity = match &params["continuity"] {
            Yaml::BadValue | Yaml::Null => true,
            Yaml::Boolean(value) => *value,
            other => return Err(invalid("continuity", &format!("{:?}", other))),
        };

        parameters.elbow = if continuity {
            ElbowChoice::NearestToPrevious(elbow)
        } else {
            ElbowChoice::Fixed(elbow)
        };

        parameters.validate()?;
        Ok(parameters)
    }
}

fn invalid(field: &str, value: &str) -> ParameterError {
    ParameterError::InvalidValue { field: field.into(), value: value.into() }
}

/// Reads the optional number, accepting both integer and real notation.
fn read_number(params: &Yaml, key: &str) -> Result<Option<f64>, ParameterError> {
    match &params[key] {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Integer(value) => Ok(Some(*value as f64)),
        Yaml::Real(text) => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| invalid(key, text)),
        other => Err(invalid(key, &format!("{:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning_error::ConfigurationError;

    #[test]
    fn test_full_file() {
        let parameters = Parameters::from_yaml_str(
            "plotter_arm_parameters:\n  reach: 300\n  resolution: 0.25\n  elbow: mirrored\n  continuity: false\n",
        ).expect("valid parameters");
        assert_eq!(parameters.reach, 300.0);
        assert_eq!(parameters.resolution, 0.25);
        assert_eq!(parameters.elbow, ElbowChoice::Fixed(Elbow::Mirrored));
    }

    #[test]
    fn test_defaults() {
        let parameters = Parameters::from_yaml_str("plotter_arm_parameters:\n  reach: 400.0\n")
            .expect("valid parameters");
        assert_eq!(parameters, Parameters::plotter());
    }

    #[test]
    fn test_round_trip_of_preset() {
        let parameters = Parameters::plotter();
        assert_eq!(Parameters::from_yaml_str(&parameters.to_yaml()).unwrap(), parameters);
    }

    #[test]
    fn test_missing_reach() {
        let result = Parameters::from_yaml_str("plotter_arm_parameters:\n  resolution: 0.5\n");
        assert!(matches!(result, Err(ParameterError::MissingField(ref f)) if f == "reach"));

        let result = Parameters::from_yaml_str("something_else: 1\n");
        assert!(matches!(result, Err(ParameterError::MissingField(_))));
    }

    #[test]
    fn test_invalid_values() {
        let result = Parameters::from_yaml_str("plotter_arm_parameters:\n  reach: far\n");
        assert!(matches!(result, Err(ParameterError::InvalidValue { .. })));

        let result = Parameters::from_yaml_str("plotter_arm_parameters:\n  reach: 400\n  elbow: up\n");
        assert!(matches!(result, Err(ParameterError::InvalidValue { ref field, .. }) if field == "elbow"));

        let result = Parameters::from_yaml_str("plotter_arm_parameters:\n  reach: -400\n");
        assert!(matches!(
            result,
            Err(ParameterError::Configuration(ConfigurationError::NonPositiveReach(_)))
        ));
    }

    #[test]
    fn test_broken_yaml() {
        let result = Parameters::from_yaml_str("plotter_arm_parameters: [reach: \n");
        assert!(matches!(result, Err(ParameterError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Parameters::from_yaml_file("/nonexistent/plotter.yaml");
        assert!(matches!(result, Err(ParameterError::IoError(_))));
    }
}
