//! Normalization of checksum input into bytes.
//!
//! Every element ends up as a single byte:
//!  * integers keep their low byte, signed values in two's complement
//!  * a character that is an ASCII decimal digit becomes the digit's value, so `'7'` is `7`
//!  * any other character becomes its code point truncated to the low byte
//!  * text has to be exactly one character long, anything else is rejected
//!
//! Strings are sequences of characters, scalars are sequences of one element.

use crate::error::Error;
use alloc::string::String;
use alloc::vec::Vec;

/// A single, not yet normalized, element of a mixed input sequence.
///
/// Usage: `crc.calculate(&[Element::Int(0x31), Element::Char('a'), Element::Text("b")], 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Element<'a> {
    Int(u64),
    Char(char),
    Text(&'a str),
}

impl Element<'_> {
    /// Normalizes the element to a byte. `index` is the position reported on error.
    fn to_byte(self, index: usize) -> Result<u8, Error> {
        match self {
            Element::Int(value) => Ok(value as u8),
            Element::Char(c) => Ok(char_to_byte(c)),
            Element::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(char_to_byte(c)),
                    _ => Err(Error::UnsupportedInputElement {
                        index,
                        chars: text.chars().count(),
                    }),
                }
            }
        }
    }
}

fn char_to_byte(c: char) -> u8 {
    match c.to_digit(10) {
        Some(digit) => digit as u8,
        None => u32::from(c) as u8,
    }
}

/// Converts a value into an [`Element`] so it can be part of an input sequence.
pub trait ToElement {
    fn to_element(&self) -> Element<'_>;
}

/// Anything that can be normalized into the byte sequence a checksum is computed over.
pub trait Input {
    fn normalize(&self) -> Result<Vec<u8>, Error>;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl ToElement for $ty {
                fn to_element(&self) -> Element<'_> {
                    Element::Int(*self as u64)
                }
            }

            impl From<$ty> for Element<'_> {
                fn from(value: $ty) -> Self {
                    Element::Int(value as u64)
                }
            }

            impl Input for $ty {
                fn normalize(&self) -> Result<Vec<u8>, Error> {
                    Ok(alloc::vec![*self as u8])
                }
            }
        )*
    };
}

impl_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ToElement for char {
    fn to_element(&self) -> Element<'_> {
        Element::Char(*self)
    }
}

impl ToElement for &str {
    fn to_element(&self) -> Element<'_> {
        Element::Text(self)
    }
}

impl ToElement for String {
    fn to_element(&self) -> Element<'_> {
        Element::Text(self)
    }
}

impl ToElement for Element<'_> {
    fn to_element(&self) -> Element<'_> {
        *self
    }
}

impl From<char> for Element<'_> {
    fn from(value: char) -> Self {
        Element::Char(value)
    }
}

impl<'a> From<&'a str> for Element<'a> {
    fn from(value: &'a str) -> Self {
        Element::Text(value)
    }
}

impl Input for char {
    fn normalize(&self) -> Result<Vec<u8>, Error> {
        Ok(alloc::vec![char_to_byte(*self)])
    }
}

impl Input for str {
    fn normalize(&self) -> Result<Vec<u8>, Error> {
        Ok(self.chars().map(char_to_byte).collect())
    }
}

impl Input for String {
    fn normalize(&self) -> Result<Vec<u8>, Error> {
        self.as_str().normalize()
    }
}

impl Input for Element<'_> {
    fn normalize(&self) -> Result<Vec<u8>, Error> {
        Ok(alloc::vec![self.to_byte(0)?])
    }
}

impl<T: ToElement> Input for [T] {
    fn normalize(&self) -> Result<Vec<u8>, Error> {
        self.iter()
            .enumerate()
            .map(|(index, element)| element.to_element().to_byte(index))
            .collect()
    }
}

impl<T: ToElement, const N: usize> Input for [T; N] {
    fn normalize(&self) -> Result<Vec<u8>, Error> {
        self.as_slice().normalize()
    }
}

impl<T: ToElement> Input for Vec<T> {
    fn normalize(&self) -> Result<Vec<u8>, Error> {
        self.as_slice().normalize()
    }
}
