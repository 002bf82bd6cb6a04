use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// If the condition is not met, return an error message. Borrowed from the
/// `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($msg);
        }
    };
}

pub(crate) use ensure; // make available throughout crate

/// The SIKE hash/XOF `F/G/H`: plain SHAKE256 over the concatenated inputs,
/// read to the caller's length. The three KEM derivations differ only in
/// input layout and output length, with no customization string (SIKE
/// round-3 convention; required for interoperability).
pub(crate) fn shake256(inputs: &[&[u8]], out: &mut [u8]) {
    let mut hasher = Shake256::default();
    for chunk in inputs {
        hasher.update(chunk);
    }
    let mut reader = hasher.finalize_xof();
    reader.read(out);
}
