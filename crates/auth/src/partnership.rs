//! Partnership-source route parameter validation.
//!
//! The intake form is reachable at `/:source/accreditation-form`, where
//! the path parameter names the partner that referred the business. Only
//! an enumerated set of sources is valid; anything else is a 404, not a
//! rendered form.

use accredit_core::kebab_to_pascal;

use crate::guards::GuardDecision;
use crate::routing::Destination;

/// The enumerated partnership sources, with their backend numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PartnershipSource {
    ContractorsOfColorado = 1,
    RealEstateDealMakers = 2,
}

impl PartnershipSource {
    pub const ALL: &[PartnershipSource] = &[
        PartnershipSource::ContractorsOfColorado,
        PartnershipSource::RealEstateDealMakers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PartnershipSource::ContractorsOfColorado => "ContractorsOfColorado",
            PartnershipSource::RealEstateDealMakers => "RealEstateDealMakers",
        }
    }

    pub fn id(&self) -> u32 {
        *self as u32
    }

    /// Look up a source from a kebab-case path parameter.
    pub fn from_route_param(param: &str) -> Option<Self> {
        let pascal = kebab_to_pascal(param);
        Self::ALL.iter().copied().find(|s| s.name() == pascal)
    }
}

/// Stateless guard for the `:source` path parameter.
pub fn partnership_source_guard(param: &str) -> GuardDecision {
    if param.is_empty() || PartnershipSource::from_route_param(param).is_none() {
        GuardDecision::Redirect(Destination::NotFound)
    } else {
        GuardDecision::Allow
    }
}
