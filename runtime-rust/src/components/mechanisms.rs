use gaussnoise_validator::{MechanismConfig, MechanismKind, Scalar};
use gaussnoise_validator::errors::*;

use ndarray::ArrayD;
use tracing::trace;

use crate::components::Randomise;
use crate::utilities::mechanisms::add_gaussian_noise;

impl Randomise for MechanismConfig {
    fn randomise(&self, value: impl Into<Scalar>) -> Result<f64> {
        let value = self.check_inputs(value)?;
        let scale = self.scale()?;

        trace!(mechanism = %self.kind(), "randomising value");
        match self.kind() {
            MechanismKind::Gaussian => add_gaussian_noise(value, scale)
        }
    }

    fn randomise_array(&self, data: &ArrayD<f64>) -> Result<ArrayD<f64>> {
        self.check_complete()?;
        let scale = self.scale()?;

        trace!(mechanism = %self.kind(), len = data.len(), "randomising array");
        let mut data = data.clone();
        data.iter_mut().try_for_each(|v| {
            *v = match self.kind() {
                MechanismKind::Gaussian => add_gaussian_noise(*v, scale)?
            };
            Ok::<_, Error>(())
        })?;
        Ok(data)
    }
}
