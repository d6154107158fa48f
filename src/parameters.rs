//! Defines the parameter data structure of the plotting arm

pub mod plotter_arm {
    use crate::kinematic_traits::Elbow;
    use crate::planning_error::{check_reach, check_resolution, ConfigurationError};

    /// Policy to pick one of the two elbow configurations for every waypoint.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ElbowChoice {
        /// Always use the given configuration.
        Fixed(Elbow),

        /// Use the configuration closest to the one chosen for the previous waypoint,
        /// avoiding jumps between adjacent commands. The given configuration is used
        /// for the first waypoint.
        NearestToPrevious(Elbow),
    }

    impl ElbowChoice {
        /// Configuration preferred for the first waypoint.
        pub fn initial(&self) -> Elbow {
            match *self {
                ElbowChoice::Fixed(elbow) => elbow,
                ElbowChoice::NearestToPrevious(elbow) => elbow,
            }
        }

        pub fn is_continuous(&self) -> bool {
            matches!(self, ElbowChoice::NearestToPrevious(_))
        }
    }

    impl Default for ElbowChoice {
        fn default() -> Self {
            ElbowChoice::NearestToPrevious(Elbow::Primary)
        }
    }

    /// Parameters of the arm and of the planning. See [parameters_arms.rs](parameters_arms.rs)
    /// for the concrete arm.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// Maximal distance of the tip from the base. Both links are half of it long.
        pub reach: f64,

        /// Maximal distance between consecutive waypoints, in the units of the reach.
        pub resolution: f64,

        /// Which elbow configuration to command.
        pub elbow: ElbowChoice,
    }

    impl Parameters {
        /// Checks that reach and resolution are usable.
        pub fn validate(&self) -> Result<(), ConfigurationError> {
            check_reach(self.reach)?;
            check_resolution(self.resolution)?;
            Ok(())
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "plotter_arm_parameters:\n  \
              reach: {:?}\n  \
              resolution: {:?}\n  \
              elbow: {}\n  \
              continuity: {}\n",
                self.reach,
                self.resolution,
                self.elbow.initial().name(),
                self.elbow.is_continuous()
            )
        }
    }
}
