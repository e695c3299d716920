// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{AcirError, Result};
use crate::native_types::WitnessMap;

pub fn gzip_compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(AcirError::Compression)?;
    encoder.finish().map_err(AcirError::Compression)
}

pub fn gzip_decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(AcirError::Decompression)?;
    Ok(out)
}

/// Serializes a witness map with bincode and gzips the result.
pub fn compress_witness(witness_map: &WitnessMap) -> Result<Vec<u8>> {
    let buf = bincode::serialize(witness_map)?;
    gzip_compress(&buf)
}

pub fn decompress_witness(compressed: &[u8]) -> Result<WitnessMap> {
    let buf = gzip_decompress(compressed)?;
    Ok(bincode::deserialize(&buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native_types::Witness;
    use crate::FieldElement;

    #[test]
    fn test_witness_compression() {
        let witness_map: WitnessMap = [
            (Witness(1), FieldElement::from(5u128)),
            (Witness(2), FieldElement::one()),
        ]
        .into_iter()
        .collect();

        let compressed = compress_witness(&witness_map).unwrap();
        assert_eq!(compressed[0], 0x1f);
        assert_eq!(compressed[1], 0x8b);

        assert_eq!(decompress_witness(&compressed).unwrap(), witness_map);
    }

    #[test]
    fn test_truncated_stream_fails() {
        let compressed = gzip_compress(b"some payload").unwrap();
        let truncated = &compressed[..compressed.len() / 2];

        assert!(matches!(
            gzip_decompress(truncated),
            Err(AcirError::Decompression(_))
        ));
    }

    #[test]
    fn test_empty_map() {
        let compressed = compress_witness(&WitnessMap::new()).unwrap();
        assert!(decompress_witness(&compressed).unwrap().is_empty());
    }
}
