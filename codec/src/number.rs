// composite numbers: up to one stroke per decimal order overlaid on one canvas.
// 21 is the union of 20 and 1:
//
//  _ _ x _ _     _ _ x x x     _ _ x x x
//  _ _ x _ _  +  _ _ x _ _  =  _ _ x _ _
//  x x x _ _     _ _ x _ _     x x x _ _
//
// encoding goes through the value bookkeeping of `CompositeNumber`, decoding only looks
// at pixels: a stroke is read off the glyph when all of its pixels are set in it.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, trace, warn};

use crate::canvas::{Board, Canvas};
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_VALUE};
use crate::error::{CodecError, Result};
use crate::geometry::Geometry;
use crate::mapping::StrokeMapping;
use crate::order::Order;

/// An integer in `[0, 9999]`, the range a single glyph can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arabic(u16);

impl Arabic {
    pub fn new(number: i64) -> Result<Self> {
        if !(0..=MAX_VALUE as i64).contains(&number) {
            return Err(CodecError::Range(number.to_string()));
        }
        Ok(Arabic(number as u16))
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    // the non-zero per-order values, units first: 1993 -> 3, 90, 900, 1000
    pub fn order_values(self) -> Vec<u32> {
        let mut number = self.get();
        let mut values = Vec::with_capacity(Order::ALL.len());
        for order in Order::ALL {
            let digit = number % 10;
            number /= 10;
            if digit != 0 {
                values.push(digit * order.multiplier());
            }
        }
        values
    }
}

impl TryFrom<i64> for Arabic {
    type Error = CodecError;

    fn try_from(number: i64) -> Result<Self> {
        Arabic::new(number)
    }
}

impl TryFrom<u32> for Arabic {
    type Error = CodecError;

    fn try_from(number: u32) -> Result<Self> {
        Arabic::new(number as i64)
    }
}

// integral floats (5.0) are accepted, anything with a fraction is not
impl TryFrom<f64> for Arabic {
    type Error = CodecError;

    fn try_from(number: f64) -> Result<Self> {
        if !number.is_finite() || number.fract() != 0.0 {
            return Err(CodecError::Type(number.to_string()));
        }
        if number < 0.0 || number > MAX_VALUE as f64 {
            return Err(CodecError::Range(number.to_string()));
        }
        Ok(Arabic(number as u16))
    }
}

impl FromStr for Arabic {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(number) = s.parse::<i64>() {
            return Arabic::new(number);
        }
        match s.parse::<f64>() {
            Ok(number) => Arabic::try_from(number),
            Err(_) => Err(CodecError::Type(s.to_string())),
        }
    }
}

impl fmt::Display for Arabic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeNumber {
    geometry: Geometry,
    canvas: Canvas,
    order_used: [bool; 4],
    value: u32,
}

impl CompositeNumber {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Ok(CompositeNumber {
            geometry: Geometry::new(height, width)?,
            canvas: Canvas::new(height, width, false)?,
            order_used: [false; 4],
            value: 0,
        })
    }

    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn order_used(&self) -> [bool; 4] {
        self.order_used
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn get_symbol(&self) -> Vec<Vec<u8>> {
        self.canvas.to_matrix()
    }

    /// Contributes one stroke, resolved to its value through `mapping`.
    ///
    /// The symbol must be a single stroke of the mapping, not a combined glyph. Zero is
    /// a no-op; a second stroke at an order already in use is rejected and leaves the
    /// number as it was.
    pub fn add_symbol<S: AsRef<Canvas> + ?Sized>(&mut self, symbol: &S, mapping: &StrokeMapping) -> Result<()> {
        let symbol = symbol.as_ref();
        if mapping.shape() != self.geometry.shape() {
            return Err(CodecError::SizeMismatch { expected: mapping.shape(), found: self.geometry.shape() });
        }
        let symbol_value = mapping.value_of(symbol)?;
        let Some(order) = Order::of_value(symbol_value) else {
            // skip zeroes
            return Ok(());
        };

        if self.order_used[order.index()] {
            warn!(order = order.index(), current = self.value, rejected = symbol_value, "order already in use");
            return Err(CodecError::DuplicateOrder { order: order.index(), current: self.value, rejected: symbol_value });
        }

        self.canvas = self.canvas.union(symbol)?;
        self.order_used[order.index()] = true;
        self.value += symbol_value;
        trace!(added = symbol_value, value = self.value, "added symbol");
        Ok(())
    }
}

impl AsRef<Canvas> for CompositeNumber {
    fn as_ref(&self) -> &Canvas {
        &self.canvas
    }
}

impl Board for CompositeNumber {
    fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.canvas.to_matrix()
    }
}

impl fmt::Display for CompositeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CistercianNumber({})", self.value)
    }
}

pub fn arabic_to_cistercian(number: Arabic, mapping: &StrokeMapping) -> Result<CompositeNumber> {
    let mut cistercian = CompositeNumber::new(mapping.height(), mapping.width())?;
    for value in number.order_values() {
        let stroke = mapping.get(value)?;
        cistercian.add_symbol(&stroke, mapping)?;
    }
    debug!(number = number.get(), height = mapping.height(), width = mapping.width(), "encoded number");
    Ok(cistercian)
}

// the strokes contained in `glyph`, at most one per order, larger strokes winning over their subsets
pub fn find_contained_strokes<S: AsRef<Canvas> + ?Sized>(glyph: &S, mapping: &StrokeMapping) -> Result<Vec<u32>> {
    let glyph = glyph.as_ref();
    if glyph.shape() != mapping.shape() {
        return Err(CodecError::SizeMismatch { expected: mapping.shape(), found: glyph.shape() });
    }

    // (value, size) of the best candidate per order
    let mut candidates: [Option<(u32, usize)>; 4] = [None; 4];
    for stroke in mapping.full_strokes()? {
        let size = stroke.pixel_count();
        let Some(order) = stroke.order() else {
            continue;
        };
        if size == 0 || glyph.intersection_count(stroke.canvas())? != size {
            continue;
        }
        let slot = &mut candidates[order.index()];
        // some strokes are contained within others (1000 in 9000), keep the larger one
        if slot.map_or(true, |(_, best)| best < size) {
            *slot = Some((stroke.value(), size));
        }
    }
    Ok(candidates.iter().flatten().map(|&(value, _)| value).collect())
}

/// Reads a glyph back to its number by comparing pixels only, without the `value` of a
/// `CompositeNumber`.
pub fn cistercian_to_arabic<S: AsRef<Canvas> + ?Sized>(glyph: &S, mapping: &StrokeMapping) -> Result<u32> {
    Ok(find_contained_strokes(glyph, mapping)?.into_iter().sum())
}

fn default_mapping() -> Result<&'static StrokeMapping> {
    static MAPPING: OnceLock<Result<StrokeMapping>> = OnceLock::new();
    MAPPING.get_or_init(|| StrokeMapping::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)).as_ref().map_err(Clone::clone)
}

// encode at the default size
pub fn encode(number: i64) -> Result<CompositeNumber> {
    arabic_to_cistercian(Arabic::new(number)?, default_mapping()?)
}

pub fn encode_with_size(number: i64, height: usize, width: usize) -> Result<CompositeNumber> {
    arabic_to_cistercian(Arabic::new(number)?, &StrokeMapping::new(height, width)?)
}

pub fn decode(composite: &CompositeNumber, mapping: &StrokeMapping) -> Result<u32> {
    cistercian_to_arabic(composite, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> StrokeMapping {
        StrokeMapping::full(7, 5).unwrap()
    }

    #[test]
    fn test_sanity() {
        let number = CompositeNumber::new(7, 5).unwrap();
        assert_eq!(number.height(), 7);
        assert_eq!(number.width(), 5);
        assert_eq!(number.value(), 0);
        assert_eq!(number.order_used(), [false, false, false, false]);
        assert!(number.canvas().is_empty());
    }

    #[test]
    fn test_add_symbol_sanity() {
        let mapping = mapping();
        let mut number = CompositeNumber::new(7, 5).unwrap();
        number.add_symbol(&mapping.get(20).unwrap(), &mapping).unwrap();
        assert_eq!(number.value(), 20);
        assert_eq!(number.order_used(), [false, true, false, false]);

        number.add_symbol(&mapping.get(1).unwrap(), &mapping).unwrap();
        assert_eq!(number.value(), 21);
        assert_eq!(number.order_used(), [true, true, false, false]);
        assert_eq!(number.get_symbol(), vec![
            vec![0, 0, 1, 1, 1],
            vec![0, 0, 1, 0, 0],
            vec![1, 1, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
        ]);
    }

    #[test]
    fn test_add_symbol_duplicate_order() {
        let mapping = mapping();
        let mut number = CompositeNumber::new(7, 5).unwrap();
        number.add_symbol(&mapping.get(1).unwrap(), &mapping).unwrap();
        let before = number.clone();

        let err = number.add_symbol(&mapping.get(2).unwrap(), &mapping).unwrap_err();
        assert_eq!(err, CodecError::DuplicateOrder { order: 0, current: 1, rejected: 2 });
        assert_eq!(
            err.to_string(),
            "Cannot add this symbol, already using order 0, current value is 1, attempting to add 2"
        );
        assert_eq!(number, before);
    }

    #[test]
    fn test_same_order_always_collides() {
        let mapping = mapping();
        for order in Order::ALL {
            for first in 1..=9 {
                for second in 1..=9 {
                    let mut number = CompositeNumber::new(7, 5).unwrap();
                    number.add_symbol(&mapping.get(first * order.multiplier()).unwrap(), &mapping).unwrap();
                    let result = number.add_symbol(&mapping.get(second * order.multiplier()).unwrap(), &mapping);
                    assert!(matches!(result, Err(CodecError::DuplicateOrder { .. })));
                }
            }
        }
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mapping = mapping();
        let mut number = arabic_to_cistercian(Arabic::new(4321).unwrap(), &mapping).unwrap();
        let before = number.clone();
        number.add_symbol(&mapping.get(0).unwrap(), &mapping).unwrap();
        assert_eq!(number, before);
    }

    #[test]
    fn test_add_unrecognized_symbol() {
        let mapping = mapping();
        let mut number = CompositeNumber::new(7, 5).unwrap();
        let glyph = encode(11).unwrap();
        assert_eq!(number.add_symbol(&glyph, &mapping), Err(CodecError::UnrecognizedStroke { height: 7, width: 5 }));
        assert_eq!(number.value(), 0);
    }

    #[test]
    fn test_add_raw_symbol() {
        // a single symbol drawn by hand - 1000
        let symbol = Canvas::from_matrix(&[
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [1, 1, 1, 0, 0],
        ])
        .unwrap();
        let mapping = StrokeMapping::new(7, 5).unwrap();
        let mut number = CompositeNumber::new(7, 5).unwrap();
        number.add_symbol(&symbol, &mapping).unwrap();

        let mut expected = CompositeNumber::new(7, 5).unwrap();
        expected.add_symbol(&mapping.get(1000).unwrap(), &mapping).unwrap();
        assert_eq!(number, expected);
    }

    #[test]
    fn test_add_symbol_mapping_size_mismatch() {
        let mut number = CompositeNumber::new(7, 5).unwrap();
        let other = StrokeMapping::new(9, 5).unwrap();
        let stroke = other.get(3).unwrap();
        assert!(matches!(number.add_symbol(&stroke, &other), Err(CodecError::SizeMismatch { .. })));
    }

    #[test]
    fn test_contribution_commutes() {
        let mapping = mapping();
        let values = [3, 90, 900, 1000];
        let mut reference: Option<CompositeNumber> = None;
        // every rotation and its reverse
        for start in 0..values.len() {
            for reverse in [false, true] {
                let mut order: Vec<u32> = values.iter().cycle().skip(start).take(values.len()).copied().collect();
                if reverse {
                    order.reverse();
                }
                let mut number = CompositeNumber::new(7, 5).unwrap();
                for value in order {
                    number.add_symbol(&mapping.get(value).unwrap(), &mapping).unwrap();
                }
                assert_eq!(number.value(), 1993);
                match &reference {
                    Some(reference) => assert_eq!(&number, reference),
                    None => reference = Some(number),
                }
            }
        }
    }

    #[test]
    fn test_4_digits() {
        let cistercian = encode(1993).unwrap();
        assert_eq!(cistercian.value(), 1993);
        assert_eq!(cistercian.get_symbol(), vec![
            vec![1, 1, 1, 0, 0],
            vec![1, 0, 1, 1, 0],
            vec![1, 1, 1, 0, 1],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 1, 1],
            vec![0, 0, 1, 0, 1],
            vec![1, 1, 1, 1, 1],
        ]);
    }

    #[test]
    fn test_3_digits() {
        let cistercian = encode(2047).unwrap();
        assert_eq!(cistercian.value(), 2047);
        assert_eq!(cistercian.get_symbol(), vec![
            vec![1, 0, 1, 1, 1],
            vec![0, 1, 1, 0, 1],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![1, 1, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
        ]);
    }

    #[test]
    fn test_2_digits() {
        let cistercian = encode(6002).unwrap();
        assert_eq!(cistercian.value(), 6002);
        assert_eq!(cistercian.order_used(), [true, false, false, true]);
        assert_eq!(cistercian.get_symbol(), vec![
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 1, 1],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![1, 0, 1, 0, 0],
            vec![1, 0, 1, 0, 0],
        ]);
    }

    #[test]
    fn test_zero() {
        let cistercian = encode(0).unwrap();
        assert_eq!(cistercian.value(), 0);
        assert_eq!(cistercian.get_symbol(), vec![vec![0; 5]; 7]);
    }

    #[test]
    fn test_nonzero_has_stem() {
        let mapping = StrokeMapping::full(9, 7).unwrap();
        for number in 1..=9999 {
            let cistercian = arabic_to_cistercian(Arabic::new(number).unwrap(), &mapping).unwrap();
            assert!((0..9).all(|row| cistercian.canvas().get(row, 3)), "number {}", number);
        }
    }

    #[test]
    fn test_stem_column_at_even_width() {
        // unflipped orders stand on column width / 2, left-right flipped ones on width / 2 - 1
        let (height, width) = (10, 8);
        let mapping = StrokeMapping::full(height, width).unwrap();
        for number in 1..=9999u32 {
            let cistercian = arabic_to_cistercian(Arabic::try_from(number).unwrap(), &mapping).unwrap();
            let canvas = cistercian.canvas();
            let digits = [number % 10, number / 10 % 10, number / 100 % 10, number / 1000];
            let right = digits[0] != 0 || digits[2] != 0;
            let left = digits[1] != 0 || digits[3] != 0;
            assert_eq!((0..height).all(|row| canvas.get(row, width / 2)), right, "number {}", number);
            assert_eq!((0..height).all(|row| canvas.get(row, width / 2 - 1)), left, "number {}", number);
        }
    }

    #[test]
    fn test_number_out_of_range() {
        assert_eq!(encode(-5).unwrap_err(), CodecError::Range("-5".to_string()));
        assert!(encode(10342).unwrap_err().to_string().starts_with("Number out of range"));
        assert!(matches!(Arabic::try_from(10000u32), Err(CodecError::Range(_))));
        assert!(matches!(Arabic::try_from(-1.0), Err(CodecError::Range(_))));
    }

    #[test]
    fn test_number_not_an_int() {
        let err = Arabic::try_from(5.3).unwrap_err();
        assert_eq!(err, CodecError::Type("5.3".to_string()));
        assert!(err.to_string().starts_with("Unsupported input, only int supported, got"));
        assert!(matches!(Arabic::try_from(f64::NAN), Err(CodecError::Type(_))));
        assert!(matches!("5.3".parse::<Arabic>(), Err(CodecError::Type(_))));
        assert!(matches!("five".parse::<Arabic>(), Err(CodecError::Type(_))));
        assert_eq!(Arabic::try_from(5.0).unwrap().get(), 5);
        assert_eq!(" 1993 ".parse::<Arabic>().unwrap().get(), 1993);
        assert!(matches!("-5".parse::<Arabic>(), Err(CodecError::Range(_))));
    }

    #[test]
    fn test_order_values() {
        assert_eq!(Arabic::new(1993).unwrap().order_values(), vec![3, 90, 900, 1000]);
        assert_eq!(Arabic::new(6002).unwrap().order_values(), vec![2, 6000]);
        assert!(Arabic::new(0).unwrap().order_values().is_empty());
    }

    #[test]
    fn test_decode_1_symbol() {
        let mapping = mapping();
        let glyph = mapping.get(1000).unwrap();
        assert_eq!(cistercian_to_arabic(&glyph, &mapping).unwrap(), 1000);
    }

    #[test]
    fn test_decode_2_symbols() {
        // 1000 + 30
        let glyph = Canvas::from_matrix(&[
            [0, 0, 1, 0, 0],
            [0, 1, 1, 0, 0],
            [1, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 1, 0, 0],
            [1, 1, 1, 0, 0],
        ])
        .unwrap();
        assert_eq!(cistercian_to_arabic(&glyph, &mapping()).unwrap(), 1030);
    }

    #[test]
    fn test_decode_prefers_larger_strokes() {
        let mapping = mapping();
        // 9000 contains 1000, 2000, 6000, 7000 and 8000
        let glyph = mapping.get(9000).unwrap();
        assert_eq!(find_contained_strokes(&glyph, &mapping).unwrap(), vec![9000]);
        assert_eq!(find_contained_strokes(&encode(5555).unwrap(), &mapping).unwrap(), vec![5, 50, 500, 5000]);
    }

    #[test]
    fn test_decode_ignores_bookkeeping() {
        let mapping = mapping();
        let glyph = encode(4723).unwrap();
        let mut number = CompositeNumber::new(7, 5).unwrap();
        number.canvas = glyph.canvas().clone();
        assert_eq!(number.value(), 0);
        assert_eq!(decode(&number, &mapping).unwrap(), 4723);
    }

    #[test]
    fn test_decode_size_mismatch() {
        let glyph = encode_with_size(12, 9, 5).unwrap();
        let err = decode(&glyph, &mapping()).unwrap_err();
        assert_eq!(err, CodecError::SizeMismatch { expected: (7, 5), found: (9, 5) });
    }

    #[test]
    fn test_round_trip_default_size() {
        let mapping = mapping();
        for number in 0..=9999 {
            let cistercian = arabic_to_cistercian(Arabic::new(number).unwrap(), &mapping).unwrap();
            assert_eq!(cistercian.value(), number as u32);
            assert_eq!(decode(&cistercian, &mapping).unwrap(), number as u32, "number {}", number);
        }
    }

    #[test]
    fn test_round_trip_other_sizes() {
        for (height, width) in [(8, 6), (10, 7), (12, 11), (17, 15), (20, 9)] {
            let mapping = StrokeMapping::full(height, width).unwrap();
            for number in 0..=9999 {
                let cistercian = arabic_to_cistercian(Arabic::new(number).unwrap(), &mapping).unwrap();
                assert_eq!(decode(&cistercian, &mapping).unwrap(), number as u32, "{}x{} number {}", height, width, number);
            }
        }
    }

    #[test]
    fn test_encode_with_size_matches_lazy_mapping() {
        let lazy = StrokeMapping::new(15, 11).unwrap();
        let glyph = encode_with_size(8642, 15, 11).unwrap();
        assert_eq!(glyph, arabic_to_cistercian(Arabic::new(8642).unwrap(), &lazy).unwrap());
        assert_eq!(glyph.to_string(), "CistercianNumber(8642)");
    }
}
