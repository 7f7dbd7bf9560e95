use crate::{EpsError, TableFamily};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for the internal consistency checks of family-2 tables
const CONSISTENCY_TOL: f64 = 1e-10;

/// Finds a critical saturation by scanning a relative permeability column in ascending order
///
/// Returns the saturation at the row immediately before the first row with a
/// strictly positive relative permeability. Mobility begins only after the
/// critical saturation plateau, hence a column which is positive at the first
/// row (or nowhere) is malformed.
fn critical_saturation_asc(
    sat: &[f64],
    kr: &[f64],
    sat_region: usize,
    table: &'static str,
    column: &'static str,
) -> Result<f64, EpsError> {
    for row in 0..kr.len() {
        if kr[row] > 0.0 {
            if row == 0 {
                return Err(EpsError::TableFormat {
                    message: format!(
                        "region {}: {} {} column is positive at the first row (no critical saturation plateau)",
                        sat_region, table, column
                    ),
                });
            }
            return Ok(sat[row - 1]);
        }
    }
    Err(EpsError::TableFormat {
        message: format!(
            "region {}: {} {} column has no positive entry",
            sat_region, table, column
        ),
    })
}

/// Finds a critical oil saturation by scanning a relative permeability column from the wet end backward
///
/// The oil columns of family-1 tables are tabulated against the non-oil
/// saturation, descending toward zero oil mobility at the wet end. The scan
/// thus runs backward and the reported critical saturation is the complement
/// of the saturation at the row after the last row with positive oil mobility.
fn critical_saturation_desc(
    sat: &[f64],
    kr: &[f64],
    sat_region: usize,
    table: &'static str,
    column: &'static str,
) -> Result<f64, EpsError> {
    for row in (0..kr.len()).rev() {
        if kr[row] > 0.0 {
            if row == kr.len() - 1 {
                return Err(EpsError::TableFormat {
                    message: format!(
                        "region {}: {} {} column is positive at the last row (no critical saturation plateau)",
                        sat_region, table, column
                    ),
                });
            }
            return Ok(1.0 - sat[row + 1]);
        }
    }
    Err(EpsError::TableFormat {
        message: format!(
            "region {}: {} {} column has no positive entry",
            sat_region, table, column
        ),
    })
}

/// Holds all values which can possibly be used as scaling points
///
/// Depending on the configuration, some of these quantities are not used as
/// actual scaling points; it is easier to extract all of them at once, though.
/// One unscaled record is extracted per saturation region; a cell-specific
/// copy is produced by [crate::EpsGridProperties::extract_scaled]. In a valid
/// input, `swl ≤ swcr ≤ swu` and analogously for the gas and oil complements
/// (not enforced here).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct EndpointInfo {
    /// Connate water saturation
    pub swl: f64,

    /// Connate gas saturation
    pub sgl: f64,

    /// Connate oil saturation of the oil-water system
    pub sowl: f64,

    /// Connate oil saturation of the gas-oil system
    pub sogl: f64,

    /// Critical water saturation
    pub swcr: f64,

    /// Critical gas saturation
    pub sgcr: f64,

    /// Critical oil saturation of the oil-water system
    pub sowcr: f64,

    /// Critical oil saturation of the gas-oil system
    pub sogcr: f64,

    /// Maximum water saturation
    pub swu: f64,

    /// Maximum gas saturation
    pub sgu: f64,

    /// Maximum oil saturation of the oil-water system
    pub sowu: f64,

    /// Maximum oil saturation of the gas-oil system
    pub sogu: f64,

    /// Maximum capillary pressure of the oil-water system
    pub max_pcow: f64,

    /// Maximum capillary pressure of the gas-oil system
    pub max_pcgo: f64,

    /// Maximum relative permeability of water
    pub max_krw: f64,

    /// Maximum relative permeability of oil in the oil-water system
    pub max_krow: f64,

    /// Maximum relative permeability of oil in the gas-oil system
    pub max_krog: f64,

    /// Maximum relative permeability of gas
    pub max_krg: f64,
}

impl EndpointInfo {
    /// Extracts the unscaled end points of a saturation region from its table family
    ///
    /// Connate and maximum saturations come from the boundary rows of the
    /// governing saturation column; critical saturations follow the plateau
    /// search rule; maximum capillary pressures and relative permeabilities are
    /// the authoritative boundary values of their columns. All primary
    /// single-phase quantities are computed first and the cross-phase family-2
    /// quantities are derived from them afterwards.
    pub fn extract_unscaled(family: &TableFamily, sat_region: usize) -> Result<Self, EpsError> {
        match family {
            TableFamily::Family1 { swof, sgof } => {
                let sw = swof.sw();
                let sg = sgof.sg();
                let nw = sw.len();
                let ng = sg.len();

                let swl = sw[0];
                let swu = sw[nw - 1];
                let sgl = sg[0];
                let sgu = sg[ng - 1];

                let swcr = critical_saturation_asc(sw, swof.krw(), sat_region, "SWOF", "krw")?;
                let sowcr = critical_saturation_desc(sw, swof.krow(), sat_region, "SWOF", "krow")?;
                let sgcr = critical_saturation_asc(sg, sgof.krg(), sat_region, "SGOF", "krg")?;
                let sogcr = critical_saturation_desc(sg, sgof.krog(), sat_region, "SGOF", "krog")?;

                Ok(EndpointInfo {
                    swl,
                    sgl,
                    sowl: 1.0 - swu,
                    sogl: 1.0 - sgu,
                    swcr,
                    sgcr,
                    sowcr,
                    sogcr,
                    swu,
                    sgu,
                    sowu: 1.0 - swl,
                    sogu: 1.0 - sgl,
                    max_pcow: swof.pcow()[0],
                    max_pcgo: sgof.pcgo()[ng - 1],
                    max_krw: swof.krw()[nw - 1],
                    max_krow: swof.krow()[0],
                    max_krog: sgof.krog()[0],
                    max_krg: sgof.krg()[ng - 1],
                })
            }
            TableFamily::Family2 { swfn, sgfn, sof3 } => {
                let sw = swfn.sw();
                let sg = sgfn.sg();
                let so = sof3.so();
                let nw = sw.len();
                let ng = sg.len();
                let no = so.len();

                let swl = sw[0];
                let swu = sw[nw - 1];
                let sgl = sg[0];
                let sgu = sg[ng - 1];

                let swcr = critical_saturation_asc(sw, swfn.krw(), sat_region, "SWFN", "krw")?;
                let sgcr = critical_saturation_asc(sg, sgfn.krg(), sat_region, "SGFN", "krg")?;
                // the SOF3 oil columns are tabulated against the oil saturation
                // directly, thus no complement is taken
                let sowcr = critical_saturation_asc(so, sof3.krow(), sat_region, "SOF3", "krow")?;
                let sogcr = critical_saturation_asc(so, sof3.krog(), sat_region, "SOF3", "krog")?;

                // cross-phase quantities; swl and sgl must both be known here
                let sowl = so[0] + sgl;
                let sogl = so[0] + swl;
                let sowu = so[no - 1];
                let sogu = 1.0 - sg[0];

                if f64::abs(sowu - (1.0 - swl)) > CONSISTENCY_TOL {
                    return Err(EpsError::TableFormat {
                        message: format!(
                            "region {}: SOF3 maximum oil saturation {} is inconsistent with the SWFN connate water saturation {}",
                            sat_region, sowu, swl
                        ),
                    });
                }

                let max_krw = swfn.krw()[nw - 1];
                let max_krg = sgfn.krg()[ng - 1];
                if f64::abs(max_krw - max_krg) > CONSISTENCY_TOL {
                    return Err(EpsError::TableFormat {
                        message: format!(
                            "region {}: SWFN and SGFN maximum relative permeabilities differ ({} vs {})",
                            sat_region, max_krw, max_krg
                        ),
                    });
                }

                Ok(EndpointInfo {
                    swl,
                    sgl,
                    sowl,
                    sogl,
                    swcr,
                    sgcr,
                    sowcr,
                    sogcr,
                    swu,
                    sgu,
                    sowu,
                    sogu,
                    max_pcow: swfn.pcow()[0],
                    max_pcgo: sgfn.pcgo()[ng - 1],
                    max_krw,
                    max_krow: sof3.krow()[no - 1],
                    max_krog: sof3.krog()[no - 1],
                    max_krg,
                })
            }
        }
    }
}

impl fmt::Display for EndpointInfo {
    /// Generates a human-readable dump of all end-point values (diagnostic use only)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    Swl: {}", self.swl)?;
        writeln!(f, "    Sgl: {}", self.sgl)?;
        writeln!(f, "    Sowl: {}", self.sowl)?;
        writeln!(f, "    Sogl: {}", self.sogl)?;
        writeln!(f, "    Swcr: {}", self.swcr)?;
        writeln!(f, "    Sgcr: {}", self.sgcr)?;
        writeln!(f, "    Sowcr: {}", self.sowcr)?;
        writeln!(f, "    Sogcr: {}", self.sogcr)?;
        writeln!(f, "    Swu: {}", self.swu)?;
        writeln!(f, "    Sgu: {}", self.sgu)?;
        writeln!(f, "    Sowu: {}", self.sowu)?;
        writeln!(f, "    Sogu: {}", self.sogu)?;
        writeln!(f, "    maxPcow: {}", self.max_pcow)?;
        writeln!(f, "    maxPcgo: {}", self.max_pcgo)?;
        writeln!(f, "    maxKrw: {}", self.max_krw)?;
        writeln!(f, "    maxKrg: {}", self.max_krg)?;
        writeln!(f, "    maxKrow: {}", self.max_krow)?;
        writeln!(f, "    maxKrog: {}", self.max_krog)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::EndpointInfo;
    use crate::{Samples, SatFuncTables, SgofTable, SwfnTable, SwofTable};
    use russell_lab::approx_eq;

    #[test]
    fn extract_unscaled_family_1_works() {
        let tables = Samples::sat_func_tables_family1();
        let family = tables.family(0).unwrap();
        let info = EndpointInfo::extract_unscaled(&family, 0).unwrap();

        // the critical water saturation is the row preceding the first
        // positive krw entry
        assert_eq!(info.swcr, 0.4);
        assert_eq!(info.swl, 0.2);
        assert_eq!(info.swu, 1.0);

        assert_eq!(info.sgl, 0.0);
        assert_eq!(info.sgu, 0.7);
        assert_eq!(info.sgcr, 0.2);

        // oil quantities are complements of the non-oil axis
        approx_eq(info.sowl, 0.0, 1e-15);
        approx_eq(info.sowu, 0.8, 1e-15);
        approx_eq(info.sowcr, 0.2, 1e-15);
        approx_eq(info.sogl, 0.3, 1e-15);
        approx_eq(info.sogu, 1.0, 1e-15);
        approx_eq(info.sogcr, 0.3, 1e-15);

        // boundary values are authoritative
        assert_eq!(info.max_pcow, 6.0);
        assert_eq!(info.max_pcgo, 0.7);
        assert_eq!(info.max_krw, 0.6);
        assert_eq!(info.max_krow, 0.9);
        assert_eq!(info.max_krg, 0.5);
        assert_eq!(info.max_krog, 0.8);
    }

    #[test]
    fn extract_unscaled_family_2_works() {
        let tables = Samples::sat_func_tables_family2();
        let family = tables.family(0).unwrap();
        let info = EndpointInfo::extract_unscaled(&family, 0).unwrap();

        assert_eq!(info.swl, 0.2);
        assert_eq!(info.swu, 1.0);
        assert_eq!(info.swcr, 0.4);
        assert_eq!(info.sgl, 0.0);
        assert_eq!(info.sgu, 0.7);
        assert_eq!(info.sgcr, 0.2);

        // SOF3 critical saturations are read on the oil axis directly
        assert_eq!(info.sowcr, 0.2);
        assert_eq!(info.sogcr, 0.2);

        // cross-phase quantities derived from the connate saturations
        approx_eq(info.sowl, 0.0, 1e-15); // So.front + Sgl
        approx_eq(info.sogl, 0.2, 1e-15); // So.front + Swl
        approx_eq(info.sowu, 0.8, 1e-15);
        approx_eq(info.sogu, 1.0, 1e-15);

        assert_eq!(info.max_pcow, 6.0);
        assert_eq!(info.max_pcgo, 0.7);
        assert_eq!(info.max_krw, 0.6);
        assert_eq!(info.max_krg, 0.6);
        assert_eq!(info.max_krow, 0.8);
        assert_eq!(info.max_krog, 0.8);
    }

    #[test]
    fn mobile_first_row_is_an_error() {
        let mut tables = Samples::sat_func_tables_family1();
        tables.swof[0] = SwofTable::new(
            vec![0.2, 0.6, 1.0],
            vec![0.1, 0.3, 0.6], // positive right away
            vec![0.9, 0.2, 0.0],
            vec![6.0, 1.0, 0.1],
        )
        .unwrap();
        let family = tables.family(0).unwrap();
        assert_eq!(
            EndpointInfo::extract_unscaled(&family, 0).unwrap_err().to_string(),
            "region 0: SWOF krw column is positive at the first row (no critical saturation plateau)"
        );
    }

    #[test]
    fn mobile_last_row_is_an_error() {
        let mut tables = Samples::sat_func_tables_family1();
        tables.swof[0] = SwofTable::new(
            vec![0.2, 0.6, 1.0],
            vec![0.0, 0.3, 0.6],
            vec![0.9, 0.2, 0.1], // oil still mobile at the wet end
            vec![6.0, 1.0, 0.1],
        )
        .unwrap();
        let family = tables.family(0).unwrap();
        assert_eq!(
            EndpointInfo::extract_unscaled(&family, 0).unwrap_err().to_string(),
            "region 0: SWOF krow column is positive at the last row (no critical saturation plateau)"
        );
    }

    #[test]
    fn immobile_column_is_an_error() {
        let mut tables = Samples::sat_func_tables_family1();
        tables.sgof[0] = SgofTable::new(
            vec![0.0, 0.4, 0.7],
            vec![0.0, 0.0, 0.0], // gas never mobile
            vec![0.8, 0.1, 0.0],
            vec![0.0, 0.3, 0.7],
        )
        .unwrap();
        let family = tables.family(0).unwrap();
        assert_eq!(
            EndpointInfo::extract_unscaled(&family, 0).unwrap_err().to_string(),
            "region 0: SGOF krg column has no positive entry"
        );
    }

    #[test]
    fn family_2_consistency_is_checked() {
        // maximum krg disagrees with maximum krw
        let mut tables = Samples::sat_func_tables_family2();
        tables.swfn[0] = SwfnTable::new(
            vec![0.2, 0.4, 0.6, 0.8, 1.0],
            vec![0.0, 0.0, 0.1, 0.3, 0.5],
            vec![6.0, 2.5, 1.0, 0.4, 0.1],
        )
        .unwrap();
        let family = tables.family(0).unwrap();
        assert_eq!(
            EndpointInfo::extract_unscaled(&family, 0).unwrap_err().to_string(),
            "region 0: SWFN and SGFN maximum relative permeabilities differ (0.5 vs 0.6)"
        );

        // maximum oil saturation disagrees with the connate water saturation
        let mut tables = Samples::sat_func_tables_family2();
        tables.swfn[0] = SwfnTable::new(
            vec![0.3, 0.4, 0.6, 0.8, 1.0],
            vec![0.0, 0.0, 0.1, 0.3, 0.6],
            vec![6.0, 2.5, 1.0, 0.4, 0.1],
        )
        .unwrap();
        let family = tables.family(0).unwrap();
        assert_eq!(
            EndpointInfo::extract_unscaled(&family, 0).unwrap_err().to_string(),
            "region 0: SOF3 maximum oil saturation 0.8 is inconsistent with the SWFN connate water saturation 0.3"
        );
    }

    #[test]
    fn error_message_carries_the_region_index() {
        let mut tables = SatFuncTables::new();
        let f1 = Samples::sat_func_tables_family1();
        tables.swof = vec![f1.swof[0].clone(), f1.swof[0].clone()];
        tables.sgof = vec![f1.sgof[0].clone(), Samples::sgof_table_immobile_gas()];
        let family = tables.family(1).unwrap();
        assert_eq!(
            EndpointInfo::extract_unscaled(&family, 1).unwrap_err().to_string(),
            "region 1: SGOF krg column has no positive entry"
        );
    }

    #[test]
    fn display_works() {
        let tables = Samples::sat_func_tables_family1();
        let family = tables.family(0).unwrap();
        let info = EndpointInfo::extract_unscaled(&family, 0).unwrap();
        let dump = format!("{}", info);
        assert!(dump.contains("    Swl: 0.2\n"));
        assert!(dump.contains("    Swcr: 0.4\n"));
        assert!(dump.contains("    maxPcow: 6\n"));
        assert_eq!(dump.lines().count(), 18);
    }

    #[test]
    fn serde_works() {
        let tables = Samples::sat_func_tables_family1();
        let family = tables.family(0).unwrap();
        let info = EndpointInfo::extract_unscaled(&family, 0).unwrap();
        let json = serde_json::to_string(&info).unwrap();
        let read: EndpointInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(read, info);
    }
}
