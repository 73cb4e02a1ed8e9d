use std::fmt;

// @module: Display-line and subtitle-block formatting

/// Words placed on a single display line
pub const WORDS_PER_LINE: usize = 4;

/// Words covered by one two-line subtitle block
pub const WORDS_PER_BLOCK: usize = 2 * WORDS_PER_LINE;

/// One subtitle display unit: up to two lines of text shown together.
///
/// An empty `line2` means the second line is not rendered. Blocks are never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleBlock {
    /// First display line
    pub line1: String,
    /// Second display line, empty when absent
    pub line2: String,
}

impl SubtitleBlock {
    /// Create a new block
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        SubtitleBlock {
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Total word count across both lines
    pub fn word_count(&self) -> usize {
        self.line1.split_whitespace().count() + self.line2.split_whitespace().count()
    }

    /// Whether the second line carries renderable content
    pub fn has_second_line(&self) -> bool {
        !self.line2.trim().is_empty()
    }
}

impl fmt::Display for SubtitleBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.has_second_line() {
            write!(f, "{}\n{}", self.line1, self.line2)
        } else {
            write!(f, "{}", self.line1)
        }
    }
}

/// Groups words into fixed-width display lines and pairs them into blocks
pub struct BlockFormatter;

impl BlockFormatter {
    /// Format one sentence into subtitle blocks (professional mode).
    ///
    /// Sentences of eight or more words are walked in eight-word windows,
    /// each yielding one block of four plus up-to-four words. A trailing
    /// window of fewer than four words yields no block.
    /// Shorter sentences produce a single block; a sentence with
    /// no words still produces one block with both lines empty.
    pub fn blocks_from_sentence(sentence: &str) -> Vec<SubtitleBlock> {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        if words.len() >= WORDS_PER_BLOCK {
            words
                .chunks(WORDS_PER_BLOCK)
                .filter(|window| window.len() >= WORDS_PER_LINE)
                .map(|window| {
                    SubtitleBlock::new(
                        window[..WORDS_PER_LINE].join(" "),
                        window[WORDS_PER_LINE..].join(" "),
                    )
                })
                .collect()
        } else if words.len() >= WORDS_PER_LINE {
            vec![SubtitleBlock::new(
                words[..WORDS_PER_LINE].join(" "),
                words[WORDS_PER_LINE..].join(" "),
            )]
        } else {
            vec![SubtitleBlock::new(words.join(" "), String::new())]
        }
    }

    /// Split whole text into chunks of exactly `chunk_size` words
    /// (last chunk may be shorter). Used by the smart/dummy modes.
    pub fn fixed_chunks(text: &str, chunk_size: usize) -> Vec<String> {
        text.split_whitespace()
            .collect::<Vec<_>>()
            .chunks(chunk_size.max(1))
            .map(|chunk| chunk.join(" "))
            .collect()
    }

    /// Pair chunks two at a time into blocks; an odd trailing chunk
    /// becomes a block with an empty second line
    pub fn pair_chunks(chunks: &[String]) -> Vec<SubtitleBlock> {
        chunks
            .chunks(2)
            .map(|pair| {
                SubtitleBlock::new(
                    pair[0].clone(),
                    pair.get(1).cloned().unwrap_or_default(),
                )
            })
            .collect()
    }
}
