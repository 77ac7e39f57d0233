//! Types for speech synthesis

use domain::AudioFormat;

/// Encoded audio returned by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioData {
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Text to speak, in a language, optionally with a named voice
#[derive(Debug, Clone, Copy)]
pub struct SpeechRequest<'a> {
    pub text: &'a str,
    pub language: &'a str,
    /// Backend voice name; language-driven backends ignore it
    pub voice: Option<&'a str>,
}

impl<'a> SpeechRequest<'a> {
    pub const fn new(text: &'a str, language: &'a str) -> Self {
        Self {
            text,
            language,
            voice: None,
        }
    }

    #[must_use]
    pub const fn with_voice(mut self, voice: &'a str) -> Self {
        self.voice = Some(voice);
        self
    }
}
