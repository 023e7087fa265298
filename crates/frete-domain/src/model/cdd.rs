//! Facilities that carry a negotiated tariff

use frete_types::Facility;

/// A facility with its own tariff and zone rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cdd {
    SantaLuzia,
    Contagem,
}

impl Cdd {
    /// `None` for facilities outside the contract
    pub fn from_facility(facility: &Facility) -> Option<Self> {
        match facility {
            Facility::SantaLuzia => Some(Cdd::SantaLuzia),
            Facility::Contagem => Some(Cdd::Contagem),
            Facility::Other(_) => None,
        }
    }

    pub fn facility(self) -> Facility {
        match self {
            Cdd::SantaLuzia => Facility::SantaLuzia,
            Cdd::Contagem => Facility::Contagem,
        }
    }
}
