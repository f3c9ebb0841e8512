use serde::{Deserialize, Serialize};

/// Which routing protocol produced a result file.
///
/// Only used as an opaque key for charts and the summary table; no protocol
/// semantics live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    Sdn,
    Aodv,
    Olsr,
}

impl Protocol {
    pub const ALL: [Self; 3] = [Self::Sdn, Self::Aodv, Self::Olsr];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sdn => "SDN",
            Self::Aodv => "AODV",
            Self::Olsr => "OLSR",
        }
    }

    /// File name the simulator writes this protocol's results under.
    pub fn result_file_name(self) -> &'static str {
        match self {
            Self::Sdn => "simulation_results_sdn_vanet.csv",
            Self::Aodv => "simulation_results_aodv.csv",
            Self::Olsr => "simulation_results_olsr.csv",
        }
    }

    /// Stem used for this protocol's chart file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Sdn => "sdn_vanet",
            Self::Aodv => "aodv",
            Self::Olsr => "olsr",
        }
    }
}
