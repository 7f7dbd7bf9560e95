use std::fmt;

/// Defines the errors raised by the end-point scaling computations
///
/// All variants indicate malformed input data; none of them is transient,
/// thus the caller must abort the processing of the affected region or cell.
#[derive(Clone, Debug, PartialEq)]
pub enum EpsError {
    /// Neither of the two supported saturation function keyword families is fully populated
    Configuration {
        /// Index of the saturation region being classified
        sat_region: usize,
    },

    /// The shape or contents of a saturation function table violate an extraction rule
    TableFormat {
        /// Descriptive message identifying the region and quantity
        message: String,
    },

    /// A region, cell, row, or point index is outside its valid range
    Index {
        /// Name of the indexed quantity
        name: &'static str,

        /// The offending index
        index: usize,

        /// The valid length
        len: usize,
    },
}

impl fmt::Display for EpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpsError::Configuration { sat_region } => write!(
                f,
                "no valid saturation function keyword family specified for region {}",
                sat_region
            ),
            EpsError::TableFormat { message } => write!(f, "{}", message),
            EpsError::Index { name, index, len } => {
                write!(f, "{} index {} is out of range (len = {})", name, index, len)
            }
        }
    }
}

impl std::error::Error for EpsError {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
