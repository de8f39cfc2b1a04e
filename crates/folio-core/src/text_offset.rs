/// Maps caret positions, counted in chars, to byte offsets in a `&str`.
///
/// Editors report positions as character indices; slicing a Rust string
/// needs byte offsets that fall on char boundaries.
pub struct CharMap {
    /// Byte offset of every char, followed by `text.len()`
    char_starts: Vec<usize>,
}

impl CharMap {
    pub fn new(text: &str) -> Self {
        let mut char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        char_starts.push(text.len());
        Self { char_starts }
    }

    /// Number of chars in the text
    pub fn len_chars(&self) -> usize {
        self.char_starts.len() - 1
    }

    /// Byte offset of the caret at `char_index`; `len_chars()` maps to the end
    pub fn byte_offset(&self, char_index: usize) -> Option<usize> {
        self.char_starts.get(char_index).copied()
    }

    pub fn char_index(&self, byte_offset: usize) -> Option<usize> {
        self.char_starts.binary_search(&byte_offset).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identity() {
        let map = CharMap::new("hello");
        assert_eq!(map.len_chars(), 5);
        assert_eq!(map.byte_offset(0), Some(0));
        assert_eq!(map.byte_offset(5), Some(5));
        assert_eq!(map.byte_offset(6), None);
    }

    #[test]
    fn test_multibyte_offsets() {
        // 'é' is two bytes, '你' three
        let map = CharMap::new("é你a");
        assert_eq!(map.len_chars(), 3);
        assert_eq!(map.byte_offset(1), Some(2));
        assert_eq!(map.byte_offset(2), Some(5));
        assert_eq!(map.byte_offset(3), Some(6));
        assert_eq!(map.char_index(5), Some(2));
        assert_eq!(map.char_index(3), None);
    }

    #[test]
    fn test_empty_text() {
        let map = CharMap::new("");
        assert_eq!(map.len_chars(), 0);
        assert_eq!(map.byte_offset(0), Some(0));
    }
}
