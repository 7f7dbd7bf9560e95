use crate::{EndpointInfo, SatFuncTables, SgfnTable, SgofTable, Sof3Table, SwfnTable, SwofTable};

/// Holds sample saturation function tables and end-point records
///
/// The data is physically sensible but synthetic; it exists so that tests and
/// downstream experiments can run without a deck parser.
pub struct Samples;

impl Samples {
    /// Returns family-1 tables (SWOF + SGOF) for a single saturation region
    pub fn sat_func_tables_family1() -> SatFuncTables {
        let swof = SwofTable::new(
            vec![0.2, 0.4, 0.6, 0.8, 1.0], // Sw
            vec![0.0, 0.0, 0.1, 0.3, 0.6], // krw
            vec![0.9, 0.5, 0.2, 0.0, 0.0], // krow
            vec![6.0, 2.5, 1.0, 0.4, 0.1], // pcow
        )
        .unwrap();
        let sgof = SgofTable::new(
            vec![0.0, 0.2, 0.4, 0.7], // Sg
            vec![0.0, 0.0, 0.2, 0.5], // krg
            vec![0.8, 0.4, 0.1, 0.0], // krog
            vec![0.0, 0.1, 0.3, 0.7], // pcgo
        )
        .unwrap();
        SatFuncTables {
            swof: vec![swof],
            sgof: vec![sgof],
            ..Default::default()
        }
    }

    /// Returns family-2 tables (SWFN + SGFN + SOF3) for a single saturation region
    ///
    /// The tables satisfy the family-2 consistency requirements: the maximum
    /// water and gas relative permeabilities agree, and the maximum oil
    /// saturation equals one minus the connate water saturation.
    pub fn sat_func_tables_family2() -> SatFuncTables {
        let swfn = SwfnTable::new(
            vec![0.2, 0.4, 0.6, 0.8, 1.0], // Sw
            vec![0.0, 0.0, 0.1, 0.3, 0.6], // krw
            vec![6.0, 2.5, 1.0, 0.4, 0.1], // pcow
        )
        .unwrap();
        let sgfn = SgfnTable::new(
            vec![0.0, 0.2, 0.4, 0.7], // Sg
            vec![0.0, 0.0, 0.2, 0.6], // krg
            vec![0.0, 0.1, 0.3, 0.7], // pcgo
        )
        .unwrap();
        let sof3 = Sof3Table::new(
            vec![0.0, 0.2, 0.4, 0.6, 0.8],   // So
            vec![0.0, 0.0, 0.1, 0.4, 0.8],   // krow
            vec![0.0, 0.0, 0.15, 0.45, 0.8], // krog
        )
        .unwrap();
        SatFuncTables {
            swfn: vec![swfn],
            sgfn: vec![sgfn],
            sof3: vec![sof3],
            ..Default::default()
        }
    }

    /// Returns a gas-oil table whose gas phase never becomes mobile
    pub fn sgof_table_immobile_gas() -> SgofTable {
        SgofTable::new(
            vec![0.0, 0.4, 0.7], // Sg
            vec![0.0, 0.0, 0.0], // krg
            vec![0.8, 0.1, 0.0], // krog
            vec![0.0, 0.3, 0.7], // pcgo
        )
        .unwrap()
    }

    /// Returns an end-point record with hand-picked values for both subsystems
    pub fn endpoint_info_oil_water() -> EndpointInfo {
        EndpointInfo {
            swl: 0.15,
            sgl: 0.0,
            sowl: 0.1,
            sogl: 0.15,
            swcr: 0.3,
            sgcr: 0.05,
            sowcr: 0.25,
            sogcr: 0.2,
            swu: 0.9,
            sgu: 0.85,
            sowu: 0.85,
            sogu: 1.0,
            max_pcow: 5.0,
            max_pcgo: 1.0,
            max_krw: 0.8,
            max_krow: 0.75,
            max_krog: 0.7,
            max_krg: 0.95,
        }
    }
}
