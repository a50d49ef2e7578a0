use crate::InputSource;
use anyhow::{anyhow, Result};
use std::io::Read;

/// The complete, unprocessed contents of the input stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    /// The raw bytes.
    pub raw: Vec<u8>,
}

impl RegistrationInput {
    pub fn read(source: &InputSource) -> Result<Self> {
        match source {
            InputSource::Stdin => Self::from_reader(std::io::stdin().lock())
                .map_err(|e| anyhow!("Couldn't read standard input: {}", e)),
            InputSource::File(path) => {
                let file = std::fs::File::open(path)
                    .map_err(|e| anyhow!("Couldn't load input {:?}: {}", path, e))?;
                Self::from_reader(file).map_err(|e| anyhow!("Couldn't load input {:?}: {}", path, e))
            }
        }
    }

    /// Buffers the reader up to end-of-input. Nothing is decoded here, the
    /// emptiness check has to see the whole buffer first.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        Ok(Self { raw })
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl From<&str> for RegistrationInput {
    fn from(text: &str) -> Self {
        Self {
            raw: text.as_bytes().to_vec(),
        }
    }
}
