//! Text post-processing helpers shared by extraction and summarization

/// Collapse every run of whitespace to a single space and trim both ends
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cap `text` at `max_chars` characters, never splitting a character
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Split `text` into chunks of at most `max_chars` characters
///
/// Whole sentences are kept together when they fit; a sentence longer than
/// `max_chars` is split on word boundaries, and a word longer than
/// `max_chars` is split mid-word. Whitespace between chunks is dropped;
/// each chunk is non-empty.
#[must_use]
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunker = Chunker::new(max_chars);
    for sentence in sentences(text) {
        chunker.push_sentence(&sentence);
    }
    chunker.finish()
}

/// Whitespace-normalized sentences, ended by `.`, `!` or `?` before a space
fn sentences(text: &str) -> Vec<Vec<&str>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();
    for word in text.split_whitespace() {
        current.push(word);
        if word.ends_with(['.', '!', '?']) {
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

struct Chunker {
    max_chars: usize,
    chunks: Vec<String>,
    current: String,
    current_len: usize,
}

impl Chunker {
    fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
            chunks: Vec::new(),
            current: String::new(),
            current_len: 0,
        }
    }

    fn push_sentence(&mut self, words: &[&str]) {
        let sentence_len =
            words.iter().map(|w| w.chars().count()).sum::<usize>() + words.len().saturating_sub(1);
        if self.current_len > 0 && self.current_len + 1 + sentence_len > self.max_chars {
            self.flush();
        }
        for word in words {
            self.push_word(word);
        }
    }

    fn push_word(&mut self, mut word: &str) {
        loop {
            let word_len = word.chars().count();
            let needed = if self.current_len == 0 {
                word_len
            } else {
                self.current_len + 1 + word_len
            };
            if needed <= self.max_chars {
                if self.current_len > 0 {
                    self.current.push(' ');
                }
                self.current.push_str(word);
                self.current_len = needed;
                return;
            }
            if self.current_len > 0 {
                self.flush();
                continue;
            }
            let head = truncate_chars(word, self.max_chars);
            self.chunks.push(head.to_string());
            word = &word[head.len()..];
            if word.is_empty() {
                return;
            }
        }
    }

    fn flush(&mut self) {
        if self.current_len > 0 {
            self.chunks.push(std::mem::take(&mut self.current));
            self.current_len = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}
