use crate::{EndpointInfo, EpsError};

/// Overrides a single end-point value if its per-cell array is present
fn override_value(target: &mut f64, data: &Option<Vec<f64>>, cell: usize) {
    if let Some(data) = data {
        *target = data[cell];
    }
}

/// Collects the per-cell grid properties which are relevant for end point scaling
///
/// Every override array is optional; absence means "keep the table-derived
/// value for the whole model". The same record shape serves the drainage and
/// the imbibition variants of the override keywords (the caller builds one
/// instance per variant). Arrays are installed through the setters, which
/// validate the length against the number of active cells.
#[derive(Clone, Debug)]
pub struct EpsGridProperties {
    ncell: usize,
    satnum: Vec<usize>,
    swl: Option<Vec<f64>>,
    sgl: Option<Vec<f64>>,
    swcr: Option<Vec<f64>>,
    sgcr: Option<Vec<f64>>,
    sowcr: Option<Vec<f64>>,
    sogcr: Option<Vec<f64>>,
    swu: Option<Vec<f64>>,
    sgu: Option<Vec<f64>>,
    pcw: Option<Vec<f64>>,
    pcg: Option<Vec<f64>>,
    krw: Option<Vec<f64>>,
    kro: Option<Vec<f64>>,
    krg: Option<Vec<f64>>,
}

impl EpsGridProperties {
    /// Allocates a new instance with no override arrays
    ///
    /// `satnum` maps each active cell to its saturation region and fixes the
    /// number of active cells.
    pub fn new(satnum: Vec<usize>) -> Self {
        EpsGridProperties {
            ncell: satnum.len(),
            satnum,
            swl: None,
            sgl: None,
            swcr: None,
            sgcr: None,
            sowcr: None,
            sogcr: None,
            swu: None,
            sgu: None,
            pcw: None,
            pcg: None,
            krw: None,
            kro: None,
            krg: None,
        }
    }

    /// Returns the number of active cells
    pub fn ncell(&self) -> usize {
        self.ncell
    }

    /// Returns the saturation region of a cell
    pub fn sat_region(&self, cell: usize) -> Result<usize, EpsError> {
        if cell >= self.ncell {
            return Err(EpsError::Index {
                name: "cell",
                index: cell,
                len: self.ncell,
            });
        }
        Ok(self.satnum[cell])
    }

    /// Validates the length of an override array
    fn check_len(&self, name: &'static str, data: &[f64]) -> Result<(), EpsError> {
        if data.len() != self.ncell {
            return Err(EpsError::Index {
                name,
                index: data.len(),
                len: self.ncell,
            });
        }
        Ok(())
    }

    /// Sets the per-cell connate water saturation (SWL) override array
    pub fn set_swl(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SWL array length", &data)?;
        self.swl = Some(data);
        Ok(self)
    }

    /// Sets the per-cell connate gas saturation (SGL) override array
    pub fn set_sgl(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SGL array length", &data)?;
        self.sgl = Some(data);
        Ok(self)
    }

    /// Sets the per-cell critical water saturation (SWCR) override array
    pub fn set_swcr(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SWCR array length", &data)?;
        self.swcr = Some(data);
        Ok(self)
    }

    /// Sets the per-cell critical gas saturation (SGCR) override array
    pub fn set_sgcr(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SGCR array length", &data)?;
        self.sgcr = Some(data);
        Ok(self)
    }

    /// Sets the per-cell critical oil-in-water saturation (SOWCR) override array
    pub fn set_sowcr(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SOWCR array length", &data)?;
        self.sowcr = Some(data);
        Ok(self)
    }

    /// Sets the per-cell critical oil-in-gas saturation (SOGCR) override array
    pub fn set_sogcr(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SOGCR array length", &data)?;
        self.sogcr = Some(data);
        Ok(self)
    }

    /// Sets the per-cell maximum water saturation (SWU) override array
    pub fn set_swu(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SWU array length", &data)?;
        self.swu = Some(data);
        Ok(self)
    }

    /// Sets the per-cell maximum gas saturation (SGU) override array
    pub fn set_sgu(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("SGU array length", &data)?;
        self.sgu = Some(data);
        Ok(self)
    }

    /// Sets the per-cell maximum oil-water capillary pressure (PCW) override array
    pub fn set_pcw(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("PCW array length", &data)?;
        self.pcw = Some(data);
        Ok(self)
    }

    /// Sets the per-cell maximum gas-oil capillary pressure (PCG) override array
    pub fn set_pcg(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("PCG array length", &data)?;
        self.pcg = Some(data);
        Ok(self)
    }

    /// Sets the per-cell maximum water relative permeability (KRW) override array
    pub fn set_krw(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("KRW array length", &data)?;
        self.krw = Some(data);
        Ok(self)
    }

    /// Sets the per-cell maximum oil relative permeability (KRO) override array
    ///
    /// This single array drives both the oil-in-water and the oil-in-gas maxima.
    pub fn set_kro(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("KRO array length", &data)?;
        self.kro = Some(data);
        Ok(self)
    }

    /// Sets the per-cell maximum gas relative permeability (KRG) override array
    pub fn set_krg(&mut self, data: Vec<f64>) -> Result<&mut Self, EpsError> {
        self.check_len("KRG array length", &data)?;
        self.krg = Some(data);
        Ok(self)
    }

    /// Produces the cell-specific (scaled) end-point record
    ///
    /// Every quantity whose override array is present is replaced by the
    /// array entry at `cell`; all others keep the unscaled (table-derived)
    /// value. The merge is field-by-field and order independent; no
    /// cross-field validation is performed.
    pub fn extract_scaled(&self, unscaled: &EndpointInfo, cell: usize) -> Result<EndpointInfo, EpsError> {
        if cell >= self.ncell {
            return Err(EpsError::Index {
                name: "cell",
                index: cell,
                len: self.ncell,
            });
        }
        let mut info = *unscaled;
        override_value(&mut info.swl, &self.swl, cell);
        override_value(&mut info.sgl, &self.sgl, cell);
        override_value(&mut info.swcr, &self.swcr, cell);
        override_value(&mut info.sgcr, &self.sgcr, cell);
        override_value(&mut info.sowcr, &self.sowcr, cell);
        override_value(&mut info.sogcr, &self.sogcr, cell);
        override_value(&mut info.swu, &self.swu, cell);
        override_value(&mut info.sgu, &self.sgu, cell);

        override_value(&mut info.max_pcow, &self.pcw, cell);
        override_value(&mut info.max_pcgo, &self.pcg, cell);

        override_value(&mut info.max_krw, &self.krw, cell);
        override_value(&mut info.max_krg, &self.krg, cell);

        // the single KRO array drives both oil maxima; the source data model
        // collapses them to save memory (flagged assumption, see DESIGN.md)
        override_value(&mut info.max_krow, &self.kro, cell);
        override_value(&mut info.max_krog, &self.kro, cell);
        Ok(info)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
