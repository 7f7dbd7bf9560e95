use crate::{EndpointInfo, EpsError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds configuration options for end-point scaling
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct EpsConfig {
    /// Three-point (instead of two-point) saturation scaling for relative permeability
    ///
    /// Three-point scaling adds the interior breakpoint of the mobile
    /// saturation zone to the scaled saturation axis.
    pub enable_three_point_kr_sat_scaling: bool,
}

impl EpsConfig {
    /// Allocates a new instance with two-point scaling
    pub fn new() -> Self {
        EpsConfig {
            enable_three_point_kr_sat_scaling: false,
        }
    }
}

impl Default for EpsConfig {
    fn default() -> Self {
        EpsConfig::new()
    }
}

/// Defines the two-phase subsystem handled by a set of scaling points
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum TwoPhaseSystemType {
    /// Oil-water subsystem (water wets; oil is the non-wetting phase)
    OilWater,

    /// Gas-oil subsystem (oil wets; gas is the non-wetting phase)
    GasOil,
}

/// Represents the points on the saturation and value axes to be scaled
///
/// All relative permeability curves are normalized and evaluated as functions
/// of the wetting-phase saturation; the non-wetting branch is therefore
/// expressed on the mirrored axis (1 − saturation) with the point order
/// reversed, so every point sequence below is ascending. One instance is
/// assembled per cell and subsystem; the curve evaluator consumes it read-only,
/// whereas the setters allow manual tuning of individual points afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScalingPoints {
    max_pcnw: f64,
    max_krw: f64,
    max_krn: f64,
    saturation_pc_points: [f64; 2],
    saturation_krw_points: [f64; 3],
    saturation_krn_points: [f64; 3],
    num_kr_points: usize,
}

impl ScalingPoints {
    /// Assembles the scaling points for one cell and subsystem
    pub fn new(info: &EndpointInfo, config: &EpsConfig, system: TwoPhaseSystemType) -> Self {
        match system {
            TwoPhaseSystemType::OilWater => {
                let saturation_pc_points = [info.swl, info.swu];
                let (saturation_krw_points, saturation_krn_points, num_kr_points) =
                    if config.enable_three_point_kr_sat_scaling {
                        (
                            [info.swcr, 1.0 - info.sowcr - info.sgl, info.swu],
                            [info.swl + info.sgl, info.swcr + info.sgl, 1.0 - info.sowcr],
                            3,
                        )
                    } else {
                        (
                            [info.swcr, info.swu, 0.0],
                            [info.swl + info.sgl, 1.0 - info.sowcr, 0.0],
                            2,
                        )
                    };
                ScalingPoints {
                    max_pcnw: info.max_pcow,
                    max_krw: info.max_krw,
                    max_krn: info.max_krow,
                    saturation_pc_points,
                    saturation_krw_points,
                    saturation_krn_points,
                    num_kr_points,
                }
            }
            TwoPhaseSystemType::GasOil => {
                let saturation_pc_points = [1.0 - info.sgu, 1.0 - info.sgl];
                let (saturation_krw_points, saturation_krn_points, num_kr_points) =
                    if config.enable_three_point_kr_sat_scaling {
                        (
                            [info.sogcr, 1.0 - info.sgcr - info.swl, 1.0 - info.swl - info.sgl],
                            [1.0 - info.sgu, info.sogcr + info.swl, 1.0 - info.sgcr],
                            3,
                        )
                    } else {
                        (
                            [info.sogcr, 1.0 - info.swl - info.sgl, 0.0],
                            [1.0 - info.sgu, 1.0 - info.sgcr, 0.0],
                            2,
                        )
                    };
                ScalingPoints {
                    max_pcnw: info.max_pcgo,
                    max_krw: info.max_krog,
                    max_krn: info.max_krg,
                    saturation_pc_points,
                    saturation_krw_points,
                    saturation_krn_points,
                    num_kr_points,
                }
            }
        }
    }

    /// Returns the number of relative permeability saturation points (2 or 3)
    pub fn num_kr_points(&self) -> usize {
        self.num_kr_points
    }

    /// Returns the points used for capillary pressure saturation scaling
    pub fn saturation_pc_points(&self) -> &[f64] {
        &self.saturation_pc_points
    }

    /// Returns the points used for wetting-phase relperm saturation scaling
    pub fn saturation_krw_points(&self) -> &[f64] {
        &self.saturation_krw_points[..self.num_kr_points]
    }

    /// Returns the points used for non-wetting-phase relperm saturation scaling
    pub fn saturation_krn_points(&self) -> &[f64] {
        &self.saturation_krn_points[..self.num_kr_points]
    }

    /// Sets a saturation value for capillary pressure saturation scaling
    pub fn set_saturation_pc_point(&mut self, point: usize, value: f64) -> Result<(), EpsError> {
        if point >= 2 {
            return Err(EpsError::Index {
                name: "pc saturation point",
                index: point,
                len: 2,
            });
        }
        self.saturation_pc_points[point] = value;
        Ok(())
    }

    /// Sets a saturation value for wetting-phase relperm saturation scaling
    pub fn set_saturation_krw_point(&mut self, point: usize, value: f64) -> Result<(), EpsError> {
        if point >= self.num_kr_points {
            return Err(EpsError::Index {
                name: "krw saturation point",
                index: point,
                len: self.num_kr_points,
            });
        }
        self.saturation_krw_points[point] = value;
        Ok(())
    }

    /// Sets a saturation value for non-wetting-phase relperm saturation scaling
    pub fn set_saturation_krn_point(&mut self, point: usize, value: f64) -> Result<(), EpsError> {
        if point >= self.num_kr_points {
            return Err(EpsError::Index {
                name: "krn saturation point",
                index: point,
                len: self.num_kr_points,
            });
        }
        self.saturation_krn_points[point] = value;
        Ok(())
    }

    /// Returns the maximum capillary pressure
    pub fn max_pcnw(&self) -> f64 {
        self.max_pcnw
    }

    /// Sets the maximum capillary pressure
    pub fn set_max_pcnw(&mut self, value: f64) {
        self.max_pcnw = value;
    }

    /// Returns the maximum wetting-phase relative permeability
    pub fn max_krw(&self) -> f64 {
        self.max_krw
    }

    /// Sets the maximum wetting-phase relative permeability
    pub fn set_max_krw(&mut self, value: f64) {
        self.max_krw = value;
    }

    /// Returns the maximum non-wetting-phase relative permeability
    pub fn max_krn(&self) -> f64 {
        self.max_krn
    }

    /// Sets the maximum non-wetting-phase relative permeability
    pub fn set_max_krn(&mut self, value: f64) {
        self.max_krn = value;
    }
}

impl fmt::Display for ScalingPoints {
    /// Generates a human-readable dump of the scaling points (diagnostic use only)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    saturationPcPoints: {:?}", self.saturation_pc_points)?;
        writeln!(f, "    saturationKrwPoints: {:?}", self.saturation_krw_points())?;
        writeln!(f, "    saturationKrnPoints: {:?}", self.saturation_krn_points())?;
        writeln!(f, "    maxPcnw: {}", self.max_pcnw)?;
        writeln!(f, "    maxKrw: {}", self.max_krw)?;
        writeln!(f, "    maxKrn: {}", self.max_krn)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
