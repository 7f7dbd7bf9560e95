use crate::{EpsError, SatFuncTables, SgfnTable, SgofTable, Sof3Table, SwfnTable, SwofTable};

/// Holds references to the saturation function tables of the populated keyword family
///
/// The two families are mutually exclusive ways of specifying the same physics;
/// the variant is selected once per region and matched exhaustively afterwards.
#[derive(Clone, Copy, Debug)]
pub enum TableFamily<'a> {
    /// Oil-water (SWOF) and gas-oil (SGOF) tables
    Family1 {
        /// Oil-water table of the region
        swof: &'a SwofTable,

        /// Gas-oil table of the region
        sgof: &'a SgofTable,
    },

    /// Independent water (SWFN) and gas (SGFN) tables plus a three-phase oil (SOF3) table
    Family2 {
        /// Water table of the region
        swfn: &'a SwfnTable,

        /// Gas table of the region
        sgfn: &'a SgfnTable,

        /// Three-phase oil table of the region
        sof3: &'a Sof3Table,
    },
}

impl SatFuncTables {
    /// Selects the populated table family for a saturation region
    ///
    /// Family 1 requires non-empty SWOF and SGOF table sets; family 2 requires
    /// non-empty SWFN, SGFN, and SOF3 table sets. Family 1 takes precedence if
    /// both conditions hold.
    pub fn family(&self, sat_region: usize) -> Result<TableFamily<'_>, EpsError> {
        let family1 = !self.swof.is_empty() && !self.sgof.is_empty();
        let family2 = !self.swfn.is_empty() && !self.sgfn.is_empty() && !self.sof3.is_empty();
        if family1 {
            let swof = self.swof.get(sat_region).ok_or(EpsError::Index {
                name: "SWOF region",
                index: sat_region,
                len: self.swof.len(),
            })?;
            let sgof = self.sgof.get(sat_region).ok_or(EpsError::Index {
                name: "SGOF region",
                index: sat_region,
                len: self.sgof.len(),
            })?;
            Ok(TableFamily::Family1 { swof, sgof })
        } else if family2 {
            let swfn = self.swfn.get(sat_region).ok_or(EpsError::Index {
                name: "SWFN region",
                index: sat_region,
                len: self.swfn.len(),
            })?;
            let sgfn = self.sgfn.get(sat_region).ok_or(EpsError::Index {
                name: "SGFN region",
                index: sat_region,
                len: self.sgfn.len(),
            })?;
            let sof3 = self.sof3.get(sat_region).ok_or(EpsError::Index {
                name: "SOF3 region",
                index: sat_region,
                len: self.sof3.len(),
            })?;
            Ok(TableFamily::Family2 { swfn, sgfn, sof3 })
        } else {
            Err(EpsError::Configuration { sat_region })
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
