//! Shared text shaping policies for renderer surfaces.

pub const PREVIEW_MAX_CHARS: usize = 96;

/// Chunk sizes exposed by the UI, a Fibonacci ladder from single-word
/// RSVP up to near-paragraph blocks.
pub const CHUNK_SIZE_STEPS: [usize; 10] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89];

/// Next chunk size on the ladder, saturating at both ends. Values off
/// the ladder snap to the nearest step in the requested direction.
pub fn step_chunk_size(current: usize, up: bool) -> usize {
    if up {
        for &step in CHUNK_SIZE_STEPS.iter() {
            if step > current {
                return step;
            }
        }
        *CHUNK_SIZE_STEPS.last().unwrap_or(&1)
    } else {
        for &step in CHUNK_SIZE_STEPS.iter().rev() {
            if step < current {
                return step;
            }
        }
        CHUNK_SIZE_STEPS[0]
    }
}

/// Leading-character count for bionic emphasis: whole word when it has
/// three or fewer characters, otherwise the ceiling half.
pub fn bionic_prefix_chars(word: &str) -> usize {
    let chars = word.chars().count();
    if chars <= 3 { chars } else { chars.div_ceil(2) }
}

/// Split a word into its emphasized prefix and plain suffix at the
/// bionic fixation point. Both halves are slices of the input.
pub fn bionic_split(word: &str) -> (&str, &str) {
    let prefix_chars = bionic_prefix_chars(word);
    let split_at = word
        .char_indices()
        .nth(prefix_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(word.len());
    word.split_at(split_at)
}

/// Whitespace-normalized excerpt for library cards, truncated at a
/// character budget without cutting words in half.
pub fn preview_excerpt(source: &str, max_chars: usize) -> String {
    let mut out = String::new();
    let mut chars = 0usize;

    for word in source.split_whitespace() {
        let word_chars = word.chars().count();
        let sep = usize::from(!out.is_empty());
        if chars + sep + word_chars > max_chars {
            if !out.is_empty() {
                out.push('…');
            }
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(word);
        chars += sep + word_chars;
    }

    out
}
