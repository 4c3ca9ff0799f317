use std::fmt::{Display, Error, Formatter};

use num_traits::PrimInt;

use super::metadata::MAX_SYMBOL_WIDTH;

// Bits of an integer
//------------------------------------------------------------------------------

/// Low `N` bits of `value`, most significant first.
pub fn get_bits<T: PrimInt, const N: usize>(value: T) -> [bool; N] {
    debug_assert!(N <= std::mem::size_of::<T>() * 8, "Cannot take {N} bits from a smaller type");

    let mut bits = [false; N];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> (N - 1 - i)) & T::one() == T::one();
    }
    bits
}


// Symbol bits
//------------------------------------------------------------------------------

/// Packed bit string of one assembled symbol, 1 is ink.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct SymbolBits {
    data: [u8; (MAX_SYMBOL_WIDTH + 7) >> 3],
    len: usize,
}

impl SymbolBits {
    pub fn new() -> Self {
        Self { data: [0; (MAX_SYMBOL_WIDTH + 7) >> 3], len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < MAX_SYMBOL_WIDTH,
            "Insufficient capacity: Capacity {MAX_SYMBOL_WIDTH}, Size {}",
            self.len + 1
        );

        if bit {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, bits: &[bool]) {
        bits.iter().for_each(|&b| self.push(b));
    }

    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < self.len, "Out of symbol bounds: Len {}, Pos {i}", self.len);

        (self.data[i >> 3] << (i & 7)) & 0b10000000 != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.get(i))
    }
}

impl Default for SymbolBits {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SymbolBits {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        self.iter().try_for_each(|b| f.write_str(if b { "1" } else { "0" }))
    }
}
