use crate::EpsError;

/// Validates the columns of a saturation function table
///
/// The saturation column must be strictly ascending with at least two rows,
/// and every dependent column must have the same length as the saturation column.
fn check_columns(table: &'static str, sat: &[f64], others: &[&[f64]]) -> Result<(), EpsError> {
    if sat.len() < 2 {
        return Err(EpsError::TableFormat {
            message: format!("{} table must have at least two rows", table),
        });
    }
    for col in others {
        if col.len() != sat.len() {
            return Err(EpsError::TableFormat {
                message: format!("{} table columns must all have the same length", table),
            });
        }
    }
    for i in 1..sat.len() {
        if sat[i] <= sat[i - 1] {
            return Err(EpsError::TableFormat {
                message: format!("{} table saturation column must be strictly ascending", table),
            });
        }
    }
    Ok(())
}

/// Holds a family-1 oil-water saturation function table (SWOF)
///
/// Tabulated against ascending water saturation: the relative permeability of
/// water (krw), the relative permeability of oil in the oil-water system (krow),
/// and the oil-water capillary pressure (pcow).
#[derive(Clone, Debug)]
pub struct SwofTable {
    sw: Vec<f64>,
    krw: Vec<f64>,
    krow: Vec<f64>,
    pcow: Vec<f64>,
}

impl SwofTable {
    /// Allocates a new instance with validated columns
    pub fn new(sw: Vec<f64>, krw: Vec<f64>, krow: Vec<f64>, pcow: Vec<f64>) -> Result<Self, EpsError> {
        check_columns("SWOF", &sw, &[&krw[..], &krow[..], &pcow[..]])?;
        Ok(SwofTable { sw, krw, krow, pcow })
    }

    /// Returns the water saturation column
    pub fn sw(&self) -> &[f64] {
        &self.sw
    }

    /// Returns the water relative permeability column
    pub fn krw(&self) -> &[f64] {
        &self.krw
    }

    /// Returns the oil relative permeability column
    pub fn krow(&self) -> &[f64] {
        &self.krow
    }

    /// Returns the oil-water capillary pressure column
    pub fn pcow(&self) -> &[f64] {
        &self.pcow
    }

    /// Returns the number of rows
    pub fn nrow(&self) -> usize {
        self.sw.len()
    }
}

/// Holds a family-1 gas-oil saturation function table (SGOF)
///
/// Tabulated against ascending gas saturation: the relative permeability of
/// gas (krg), the relative permeability of oil in the gas-oil system (krog),
/// and the gas-oil capillary pressure (pcgo).
#[derive(Clone, Debug)]
pub struct SgofTable {
    sg: Vec<f64>,
    krg: Vec<f64>,
    krog: Vec<f64>,
    pcgo: Vec<f64>,
}

impl SgofTable {
    /// Allocates a new instance with validated columns
    pub fn new(sg: Vec<f64>, krg: Vec<f64>, krog: Vec<f64>, pcgo: Vec<f64>) -> Result<Self, EpsError> {
        check_columns("SGOF", &sg, &[&krg[..], &krog[..], &pcgo[..]])?;
        Ok(SgofTable { sg, krg, krog, pcgo })
    }

    /// Returns the gas saturation column
    pub fn sg(&self) -> &[f64] {
        &self.sg
    }

    /// Returns the gas relative permeability column
    pub fn krg(&self) -> &[f64] {
        &self.krg
    }

    /// Returns the oil relative permeability column
    pub fn krog(&self) -> &[f64] {
        &self.krog
    }

    /// Returns the gas-oil capillary pressure column
    pub fn pcgo(&self) -> &[f64] {
        &self.pcgo
    }

    /// Returns the number of rows
    pub fn nrow(&self) -> usize {
        self.sg.len()
    }
}

/// Holds a family-2 water saturation function table (SWFN)
#[derive(Clone, Debug)]
pub struct SwfnTable {
    sw: Vec<f64>,
    krw: Vec<f64>,
    pcow: Vec<f64>,
}

impl SwfnTable {
    /// Allocates a new instance with validated columns
    pub fn new(sw: Vec<f64>, krw: Vec<f64>, pcow: Vec<f64>) -> Result<Self, EpsError> {
        check_columns("SWFN", &sw, &[&krw[..], &pcow[..]])?;
        Ok(SwfnTable { sw, krw, pcow })
    }

    /// Returns the water saturation column
    pub fn sw(&self) -> &[f64] {
        &self.sw
    }

    /// Returns the water relative permeability column
    pub fn krw(&self) -> &[f64] {
        &self.krw
    }

    /// Returns the oil-water capillary pressure column
    pub fn pcow(&self) -> &[f64] {
        &self.pcow
    }

    /// Returns the number of rows
    pub fn nrow(&self) -> usize {
        self.sw.len()
    }
}

/// Holds a family-2 gas saturation function table (SGFN)
#[derive(Clone, Debug)]
pub struct SgfnTable {
    sg: Vec<f64>,
    krg: Vec<f64>,
    pcgo: Vec<f64>,
}

impl SgfnTable {
    /// Allocates a new instance with validated columns
    pub fn new(sg: Vec<f64>, krg: Vec<f64>, pcgo: Vec<f64>) -> Result<Self, EpsError> {
        check_columns("SGFN", &sg, &[&krg[..], &pcgo[..]])?;
        Ok(SgfnTable { sg, krg, pcgo })
    }

    /// Returns the gas saturation column
    pub fn sg(&self) -> &[f64] {
        &self.sg
    }

    /// Returns the gas relative permeability column
    pub fn krg(&self) -> &[f64] {
        &self.krg
    }

    /// Returns the gas-oil capillary pressure column
    pub fn pcgo(&self) -> &[f64] {
        &self.pcgo
    }

    /// Returns the number of rows
    pub fn nrow(&self) -> usize {
        self.sg.len()
    }
}

/// Holds a family-2 three-phase oil saturation function table (SOF3)
///
/// Tabulated against ascending oil saturation: the relative permeability of oil
/// in the oil-water system (krow) and in the gas-oil system (krog).
#[derive(Clone, Debug)]
pub struct Sof3Table {
    so: Vec<f64>,
    krow: Vec<f64>,
    krog: Vec<f64>,
}

impl Sof3Table {
    /// Allocates a new instance with validated columns
    pub fn new(so: Vec<f64>, krow: Vec<f64>, krog: Vec<f64>) -> Result<Self, EpsError> {
        check_columns("SOF3", &so, &[&krow[..], &krog[..]])?;
        Ok(Sof3Table { so, krow, krog })
    }

    /// Returns the oil saturation column
    pub fn so(&self) -> &[f64] {
        &self.so
    }

    /// Returns the oil-in-water relative permeability column
    pub fn krow(&self) -> &[f64] {
        &self.krow
    }

    /// Returns the oil-in-gas relative permeability column
    pub fn krog(&self) -> &[f64] {
        &self.krog
    }

    /// Returns the number of rows
    pub fn nrow(&self) -> usize {
        self.so.len()
    }
}

/// Collects the per-region saturation function tables of both keyword families
///
/// Exactly one family must be populated per region: family 1 consists of the
/// SWOF and SGOF tables whereas family 2 consists of the SWFN, SGFN, and SOF3
/// tables. The entry at position `i` of each vector belongs to saturation
/// region `i`.
#[derive(Clone, Debug, Default)]
pub struct SatFuncTables {
    /// Family-1 oil-water tables, one per saturation region
    pub swof: Vec<SwofTable>,

    /// Family-1 gas-oil tables, one per saturation region
    pub sgof: Vec<SgofTable>,

    /// Family-2 water tables, one per saturation region
    pub swfn: Vec<SwfnTable>,

    /// Family-2 gas tables, one per saturation region
    pub sgfn: Vec<SgfnTable>,

    /// Family-2 three-phase oil tables, one per saturation region
    pub sof3: Vec<Sof3Table>,
}

impl SatFuncTables {
    /// Allocates a new instance with no tables
    pub fn new() -> Self {
        SatFuncTables::default()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{SgofTable, Sof3Table, SwofTable};

    #[test]
    fn new_captures_wrong_input() {
        let res = SwofTable::new(vec![0.2], vec![0.0], vec![0.9], vec![6.0]);
        assert_eq!(
            res.unwrap_err().to_string(),
            "SWOF table must have at least two rows"
        );

        let res = SgofTable::new(vec![0.0, 0.5], vec![0.0], vec![0.8, 0.0], vec![0.0, 0.7]);
        assert_eq!(
            res.unwrap_err().to_string(),
            "SGOF table columns must all have the same length"
        );

        let res = Sof3Table::new(vec![0.2, 0.2], vec![0.0, 0.1], vec![0.0, 0.1]);
        assert_eq!(
            res.unwrap_err().to_string(),
            "SOF3 table saturation column must be strictly ascending"
        );
    }

    #[test]
    fn accessors_work() {
        let table = SwofTable::new(
            vec![0.2, 0.4, 0.6, 0.8, 1.0],
            vec![0.0, 0.0, 0.1, 0.3, 0.6],
            vec![0.9, 0.5, 0.2, 0.0, 0.0],
            vec![6.0, 2.5, 1.0, 0.4, 0.1],
        )
        .unwrap();
        assert_eq!(table.nrow(), 5);
        assert_eq!(table.sw(), &[0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(table.krw(), &[0.0, 0.0, 0.1, 0.3, 0.6]);
        assert_eq!(table.krow(), &[0.9, 0.5, 0.2, 0.0, 0.0]);
        assert_eq!(table.pcow(), &[6.0, 2.5, 1.0, 0.4, 0.1]);
    }
}
