//! # spectro_dosimetry: Dosimetry Quantities from X-ray Spectra
//!
//! ## Domain Layer Role
//!
//! Builds on `spectro_core` interpolation and `adapter_tables` readers:
//! - Attenuation tables interpolated in log-log space ([`AttenuationData`])
//! - Air-kerma weights and transmission ([`KermaWeights`], [`transmission`])
//! - First and second half-value layers ([`HvlCalculator`])
//! - Spectrum-averaged conversion coefficients ([`ConversionTable`],
//!   [`mean_conversion_coefficient`])
//! - Monte Carlo uncertainties in parallel ([`MonteCarloEstimator`])
//! - Batch runs over many tables and spectra ([`ConversionStudy`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use spectro_core::spectrum::Spectrum;
//! use spectro_dosimetry::{AttenuationData, HvlCalculator};
//!
//! let energy = [10.0, 20.0, 30.0, 40.0, 60.0];
//! let mu_al = [26.2, 3.44, 1.13, 0.57, 0.28];
//! let mutr_air = [4.6, 0.54, 0.15, 0.068, 0.03];
//! let data = AttenuationData::new(&energy, &mu_al, &energy, &mutr_air, 2.699).unwrap();
//!
//! let spectrum = Spectrum::new(vec![20.0, 25.0, 30.0, 35.0], vec![0.5, 1.0, 1.0, 0.4]).unwrap();
//! let hvl = HvlCalculator::new(&spectrum, &data).unwrap().compute().unwrap();
//! assert!(hvl.first > 0.0 && hvl.homogeneity < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod attenuation;
pub mod conversion;
pub mod error;
pub mod hvl;
pub mod kerma;
pub mod study;
pub mod uncertainty;

pub use attenuation::{AttenuationData, LogLogCurve, ALUMINIUM_DENSITY};
pub use conversion::{
    angles_for, mean_conversion_coefficient, weighted_mean, ConversionColumn, ConversionTable,
};
pub use error::{DosimetryError, DosimetryResult};
pub use hvl::{HvlCalculator, HvlResult};
pub use kerma::{transmission, KermaWeights};
pub use study::{ConversionRecord, ConversionStudy};
pub use uncertainty::{MonteCarloEstimator, SampleStatistics, UncertaintyConfig};
