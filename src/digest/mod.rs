use std::fmt::{self, Debug, Display, Formatter};

use log::debug;

use crate::error::{Error, Result};

#[macro_use]
mod macros;
pub mod chunked;
pub mod registry;
pub mod sha256;
pub mod sum;

use self::registry::{Method, MethodKind};
use self::sha256::Sha256;
use self::sum::SimpleSum;

pub trait Digest: Clone + AsRef<[u8]> + Into<Box<[u8]>> + Debug {}

/// Incremental digest computation.
///
/// `update` may be called any number of times with slices of any length,
/// including zero. `finish` consumes the state, so a finished computation
/// cannot be fed again without building a fresh one.
pub trait DigestAlgorithm {
    type Digest: Digest;

    fn update(&mut self, input: &[u8]) -> Result<()>;
    fn finish(self) -> Result<Self::Digest>;
    fn output_size(&self) -> usize;

    fn compute(mut self, input: &[u8]) -> Result<Self::Digest>
    where
        Self: Sized,
    {
        self.update(input)?;
        self.finish()
    }
}

/// Finished digest of any registered method.
#[derive(Clone, PartialEq, Eq)]
pub struct Checksum(Box<[u8]>);

impl Checksum {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Checksum {
    fn from(bytes: &[u8]) -> Checksum {
        Checksum(bytes.into())
    }
}

impl AsRef<[u8]> for Checksum {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Checksum> for Box<[u8]> {
    fn from(checksum: Checksum) -> Box<[u8]> {
        checksum.0
    }
}

impl Debug for Checksum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum(\"{}\")", hex::encode(&self.0))
    }
}

/// Renders as `0x` followed by two lowercase hex digits per output byte.
impl Display for Checksum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Digest for Checksum {}

#[derive(Debug, Clone)]
enum ContextRepr {
    Sum(SimpleSum),
    Sha256(Sha256),
}

/// State of one digest computation, tagged with the method it belongs to.
#[derive(Debug, Clone)]
pub struct Context {
    method: &'static Method,
    repr: ContextRepr,
}

impl Context {
    pub fn init(method: &'static Method) -> Result<Context> {
        let repr = match method.kind {
            MethodKind::Sum(bits) => ContextRepr::Sum(SimpleSum::with_bits(bits)),
            MethodKind::Sha256 => ContextRepr::Sha256(Sha256::default()),
        };
        debug!("initialized {} context", method.name);
        Ok(Context { method, repr })
    }

    pub fn method(&self) -> &'static Method {
        self.method
    }

    pub fn process(&mut self, data: &[u8]) -> Result<()> {
        match &mut self.repr {
            ContextRepr::Sum(sum) => sum.update(data),
            ContextRepr::Sha256(sha) => sha.update(data),
        }
    }
}

impl DigestAlgorithm for Context {
    type Digest = Checksum;

    fn update(&mut self, input: &[u8]) -> Result<()> {
        self.process(input)
    }

    fn finish(self) -> Result<Checksum> {
        let checksum = match self.repr {
            ContextRepr::Sum(sum) => sum.finish()?,
            ContextRepr::Sha256(sha) => Checksum::from(sha.finish()?.as_ref()),
        };
        if checksum.len() != self.method.output_size {
            return Err(Error::FinalizationFailed(format!(
                "{} produced {} bytes, expected {}",
                self.method.name,
                checksum.len(),
                self.method.output_size
            )));
        }
        Ok(checksum)
    }

    fn output_size(&self) -> usize {
        self.method.output_size
    }
}
