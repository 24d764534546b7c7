use crate::ClusterError;
use crate::Result;
use std::io::Read;
use std::io::Write;

/// Fixed-layout binary state for a policy.
///
/// Kept apart from [`crate::Policy`] so the numerical code never touches
/// a stream. Implementations write scalar fields in a fixed order,
/// big-endian, and `decode(encode(x)) == x` bit for bit.
pub trait Codec: Sized {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()>;
    fn decode<R: Read>(reader: &mut R) -> Result<Self>;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        Ok(bytes)
    }
    /// decode a complete buffer; leftover bytes mean the layout was wrong
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = std::io::Cursor::new(bytes);
        let decoded = Self::decode(&mut cursor)?;
        match bytes.len() as u64 - cursor.position() {
            0 => Ok(decoded),
            n => Err(ClusterError::Deserialize(format!("{} trailing bytes", n))),
        }
    }
}
