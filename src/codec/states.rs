use super::*;
use crate::Canopy;
use crate::ClusterError;
use crate::FuzzyKMeans;
use crate::KMeans;
use crate::Policies;
use crate::Result;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::Read;
use std::io::Write;

/* variant bodies
 *
 * fuzzy   m: f64, delta: f64
 * kmeans  delta: f64
 * canopy  t1: f64, t2: f64
 *
 * the envelope for Policies prefixes one tag byte.
 * decoded values go back through the same constructors
 * as fresh ones, so invalid state never escapes a read.
 */

const TAG_FUZZY: u8 = 0;
const TAG_KMEANS: u8 = 1;
const TAG_CANOPY: u8 = 2;

impl Codec for FuzzyKMeans {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_f64::<BE>(self.m())?;
        writer.write_f64::<BE>(self.delta())?;
        Ok(())
    }
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let m = reader.read_f64::<BE>()?;
        let delta = reader.read_f64::<BE>()?;
        Self::new(m, delta)
    }
}

impl Codec for KMeans {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_f64::<BE>(self.delta())?;
        Ok(())
    }
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Self::new(reader.read_f64::<BE>()?)
    }
}

impl Codec for Canopy {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_f64::<BE>(self.t1())?;
        writer.write_f64::<BE>(self.t2())?;
        Ok(())
    }
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let t1 = reader.read_f64::<BE>()?;
        let t2 = reader.read_f64::<BE>()?;
        Self::new(t1, t2)
    }
}

impl Codec for Policies {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            Self::Fuzzy(p) => {
                writer.write_u8(TAG_FUZZY)?;
                p.encode(writer)
            }
            Self::KMeans(p) => {
                writer.write_u8(TAG_KMEANS)?;
                p.encode(writer)
            }
            Self::Canopy(p) => {
                writer.write_u8(TAG_CANOPY)?;
                p.encode(writer)
            }
        }
    }
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        match reader.read_u8()? {
            TAG_FUZZY => FuzzyKMeans::decode(reader).map(Self::from),
            TAG_KMEANS => KMeans::decode(reader).map(Self::from),
            TAG_CANOPY => Canopy::decode(reader).map(Self::from),
            tag => Err(ClusterError::Deserialize(format!("unknown policy tag {}", tag))),
        }
    }
}
