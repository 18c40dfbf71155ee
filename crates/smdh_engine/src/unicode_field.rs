/// Fixed-width UTF-16 text field.
///
/// SMDH strings are fixed-size arrays of little-endian 16-bit code units.
/// Input longer than the field capacity is truncated; shorter input leaves
/// the trailing units zero. Each `char` occupies exactly one unit with its
/// scalar value truncated to 16 bits. There is no surrogate-pair handling,
/// so characters above U+FFFF are stored incorrectly.
pub struct UnicodeField {
    units: Vec<u16>,
}

impl UnicodeField {
    /// Creates an empty field of `max_length` code units.
    pub fn new(max_length: usize) -> Self {
        Self { units: vec![0; max_length] }
    }

    pub fn with_text(max_length: usize, text: &str) -> Self {
        let mut field = Self::new(max_length);
        field.set(text);
        field
    }

    /// Replaces the field content. Excess characters are dropped.
    pub fn set(&mut self, text: &str) {
        self.units.fill(0);
        for (unit, ch) in self.units.iter_mut().zip(text.chars()) {
            *unit = ch as u16;
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Serializes the field as little-endian bytes, always `2 * max_length` long.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.units.len() * 2);
        for unit in &self.units {
            result.extend(unit.to_le_bytes());
        }
        result
    }
}
