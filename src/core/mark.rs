//! Mark record: `[Oid(4)] [Mark(4)]`, always 8 bytes.

use crate::error::{check_len, fixed_mut, Result};
use crate::protocol::constants::{V1_MARK, V1_MARK_LEN, V1_OID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark {
    pub oid: u32,
    pub mark: u32,
}

impl Mark {
    pub const fn new(oid: u32, mark: u32) -> Self {
        Self { oid, mark }
    }

    fn write_into(&self, buf: &mut [u8; V1_MARK_LEN]) {
        buf[V1_OID..V1_OID + 4].copy_from_slice(&self.oid.to_be_bytes());
        buf[V1_MARK..V1_MARK + 4].copy_from_slice(&self.mark.to_be_bytes());
    }

    pub fn encode(&self, buf: &mut [u8]) -> Result<()> {
        self.write_into(fixed_mut(buf)?);
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; V1_MARK_LEN] {
        let mut buf = [0u8; V1_MARK_LEN];
        self.write_into(&mut buf);
        buf
    }

    pub fn decode(buf: &[u8]) -> Result<Self> {
        check_len(V1_MARK_LEN, buf.len())?;
        let word =
            |at: usize| u32::from_be_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]]);
        Ok(Self {
            oid: word(V1_OID),
            mark: word(V1_MARK),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    #[test]
    fn test_mark_layout() {
        let m = Mark::new(0x0000_0102, 0xA0B0_C0D0);
        assert_eq!(m.to_bytes(), [0, 0, 1, 2, 0xA0, 0xB0, 0xC0, 0xD0]);
        assert_eq!(Mark::decode(&m.to_bytes()).unwrap(), m);
    }

    #[test]
    fn test_mark_wrong_size() {
        let mut buf = [0u8; 9];
        assert!(matches!(
            Mark::new(1, 2).encode(&mut buf),
            Err(ProtocolError::BufferSize {
                expected: 8,
                actual: 9
            })
        ));
        assert_eq!(buf, [0u8; 9]);
        assert!(Mark::decode(&[0u8; 7]).is_err());
    }

    #[test]
    fn test_to_bytes_matches_encode() {
        let m = Mark::new(u32::MAX, 7);
        let mut buf = vec![0u8; V1_MARK_LEN];
        m.encode(&mut buf).unwrap();
        assert_eq!(buf, m.to_bytes());
    }
}
