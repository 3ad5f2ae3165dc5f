use crate::EnvelopePolicy;
use rlp::DecodeLimits;

/// Verifier configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerifierConfig {
    /// Limits applied while decoding the receipt.
    pub limits: DecodeLimits,
    /// Whether EIP-2718 typed receipts are unwrapped before decoding.
    pub envelope: EnvelopePolicy,
}

impl VerifierConfig {
    /// Sets the decode limits.
    pub const fn with_limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the maximum list nesting accepted while decoding.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.limits = self.limits.with_max_depth(max_depth);
        self
    }

    /// Sets the envelope policy.
    pub const fn with_envelope(mut self, envelope: EnvelopePolicy) -> Self {
        self.envelope = envelope;
        self
    }
}
