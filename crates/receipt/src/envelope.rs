/// How the first byte of a receipt is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvelopePolicy {
    /// Receipt bytes are the RLP list itself. A typed envelope fails to decode.
    #[default]
    Untyped,
    /// Receipt bytes may carry an EIP-2718 type byte before the RLP list.
    Typed,
}

impl EnvelopePolicy {
    /// Returns the RLP payload of `receipt` under this policy.
    pub fn receipt_payload(self, receipt: &[u8]) -> &[u8] {
        match self {
            Self::Untyped => receipt,
            Self::Typed => split_typed_receipt(receipt).1,
        }
    }
}

/// Splits an EIP-2718 receipt envelope into its type byte and RLP payload.
///
/// Type bytes are in `0x01..=0x7f`. Any other first byte means the receipt is untyped and it
/// is returned whole.
pub fn split_typed_receipt(receipt: &[u8]) -> (Option<u8>, &[u8]) {
    match receipt.split_first() {
        Some((&ty, payload)) if (0x01..=0x7f).contains(&ty) => (Some(ty), payload),
        _ => (None, receipt),
    }
}
