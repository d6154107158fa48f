//! Hardcoded parameters for known arms

pub mod plotter_arm {
    use crate::interpolator::DEFAULT_RESOLUTION;
    use crate::parameters::plotter_arm::{ElbowChoice, Parameters};

    #[allow(dead_code)]
    impl Parameters {
        /// Builds parameters for the arm with the given reach, other values default.
        pub fn new(reach: f64) -> Self {
            Parameters {
                reach,
                resolution: DEFAULT_RESOLUTION,
                elbow: ElbowChoice::default(),
            }
        }

        /// The drawing arm: two 200 mm links, waypoints every half millimeter.
        pub fn plotter() -> Self {
            Parameters::new(400.0)
        }
    }
}
