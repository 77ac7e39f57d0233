//! Raw PCM to WAV conversion
//!
//! Gemini returns speech as headerless 16-bit little-endian PCM
//! (`audio/L16;codec=pcm;rate=24000`). Browsers cannot play that directly,
//! so it is wrapped in a RIFF/WAVE container before it is written.

use crate::error::SpeechError;

const BITS_PER_SAMPLE: u16 = 16;

/// Whether a MIME type denotes headerless PCM
pub fn is_raw_pcm(mime_type: &str) -> bool {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    matches!(essence.as_str(), "audio/l16" | "audio/pcm")
}

/// Read the `rate=` parameter of a PCM MIME type
pub fn sample_rate_from_mime(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("rate"))
        .and_then(|(_, value)| value.trim().parse().ok())
}

/// Wrap 16-bit little-endian PCM in a WAV header
///
/// # Errors
///
/// Returns an error if the payload is too large for a RIFF chunk or the
/// byte rate does not fit the header.
pub fn pcm_to_wav(pcm: &[u8], sample_rate: u32, channels: u16) -> Result<Vec<u8>, SpeechError> {
    let data_len = u32::try_from(pcm.len())
        .ok()
        .filter(|len| *len <= u32::MAX - 36)
        .ok_or_else(|| SpeechError::AudioProcessing("PCM payload too large for WAV".to_string()))?;

    let block_align = channels
        .checked_mul(BITS_PER_SAMPLE / 8)
        .ok_or_else(|| SpeechError::AudioProcessing(format!("unsupported channel count {channels}")))?;
    let byte_rate = sample_rate
        .checked_mul(u32::from(block_align))
        .ok_or_else(|| SpeechError::AudioProcessing(format!("unsupported sample rate {sample_rate}")))?;

    let mut wav = Vec::with_capacity(44 + pcm.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.extend_from_slice(pcm);
    Ok(wav)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_pcm_mime_types() {
        assert!(is_raw_pcm("audio/L16;codec=pcm;rate=24000"));
        assert!(is_raw_pcm("audio/pcm"));
        assert!(!is_raw_pcm("audio/wav"));
        assert!(!is_raw_pcm("audio/mpeg"));
    }

    #[test]
    fn reads_sample_rate() {
        assert_eq!(sample_rate_from_mime("audio/L16;codec=pcm;rate=24000"), Some(24000));
        assert_eq!(sample_rate_from_mime("audio/L16; rate=16000"), Some(16000));
        assert_eq!(sample_rate_from_mime("audio/L16"), None);
    }

    #[test]
    fn wav_header_layout() {
        let pcm = vec![0u8; 100];
        let wav = pcm_to_wav(&pcm, 24_000, 1).unwrap();

        assert_eq!(wav.len(), 144);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 136);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 24_000);
        assert_eq!(u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]), 48_000);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 100);
    }

    #[test]
    fn oversized_sample_rate_is_an_error() {
        let rate = sample_rate_from_mime("audio/L16;rate=4000000000").unwrap();

        let err = pcm_to_wav(&[0u8; 4], rate, 1).unwrap_err();

        assert!(matches!(err, SpeechError::AudioProcessing(_)));
    }
}
