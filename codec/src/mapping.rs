// the table from every legal value to its stroke, for one canvas size.
//
// the table is lazy: it starts with only the zero stroke and creates (and keeps)
// missing strokes when asked. asking for 90 creates 9 on the way, since 90 is a
// reflection of 9. strokes are pure functions of (value, height, width), so a
// lazy table and a full one agree on every key they both hold.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::canvas::Canvas;
use crate::digits::{build_digit, Stroke};
use crate::error::{CodecError, Result};
use crate::geometry::Geometry;
use crate::order::{to_order, Order};

/// Number of legal keys: zero plus nine digits at each of the four orders.
pub const FULL_MAPPING_LEN: usize = 1 + 9 * 4;

pub fn is_legal_key(value: u32) -> bool {
    match Order::of_value(value) {
        Some(order) => value % order.multiplier() == 0,
        None => value == 0,
    }
}

// every legal key, ascending
pub fn legal_keys() -> impl Iterator<Item = u32> {
    std::iter::once(0).chain(Order::ALL.into_iter().flat_map(|order| (1..=9).map(move |digit| digit * order.multiplier())))
}

#[derive(Default)]
struct Cache {
    strokes: BTreeMap<u32, Stroke>,
    // pixels -> value, for resolving a bare canvas back to its stroke
    values: HashMap<Canvas, u32>,
}

impl Cache {
    fn insert(&mut self, stroke: Stroke) {
        let value = stroke.value();
        // identical pixels resolve to the smallest value holding them
        self.values
            .entry(stroke.canvas().clone())
            .and_modify(|existing| *existing = (*existing).min(value))
            .or_insert(value);
        self.strokes.insert(value, stroke);
    }

    fn is_full(&self) -> bool {
        self.strokes.len() == FULL_MAPPING_LEN
    }
}

pub struct StrokeMapping {
    geometry: Geometry,
    cache: Mutex<Cache>,
}

impl StrokeMapping {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let geometry = Geometry::new(height, width)?;
        let mut cache = Cache::default();
        cache.insert(Stroke::zero(geometry)?);
        Ok(StrokeMapping { geometry, cache: Mutex::new(cache) })
    }

    pub fn full(height: usize, width: usize) -> Result<Self> {
        let mapping = StrokeMapping::new(height, width)?;
        mapping.create_full()?;
        Ok(mapping)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.geometry.shape()
    }

    // strokes are deterministic, so a cache left behind by a panicking thread is still valid
    fn lock(&self) -> MutexGuard<'_, Cache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, value: u32) -> Result<Stroke> {
        let mut cache = self.lock();
        fill(&mut cache, self.geometry, value)
    }

    pub fn create_full(&self) -> Result<()> {
        let mut cache = self.lock();
        for value in legal_keys() {
            fill(&mut cache, self.geometry, value)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().strokes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    pub fn contains_key(&self, value: u32) -> bool {
        self.lock().strokes.contains_key(&value)
    }

    pub fn keys(&self) -> Vec<u32> {
        self.lock().strokes.keys().copied().collect()
    }

    // a snapshot of the strokes created so far, by ascending value
    pub fn strokes(&self) -> Vec<Stroke> {
        self.lock().strokes.values().cloned().collect()
    }

    // every stroke, creating the missing ones first
    pub fn full_strokes(&self) -> Result<Vec<Stroke>> {
        self.create_full()?;
        Ok(self.strokes())
    }

    /// Resolves a canvas to the value of the stroke with exactly the same pixels.
    ///
    /// Any stroke may be asked about, so the table is completed before the lookup.
    pub fn value_of(&self, symbol: &Canvas) -> Result<u32> {
        let mut cache = self.lock();
        if !cache.is_full() {
            for value in legal_keys() {
                fill(&mut cache, self.geometry, value)?;
            }
        }
        cache
            .values
            .get(symbol)
            .copied()
            .ok_or(CodecError::UnrecognizedStroke { height: symbol.height(), width: symbol.width() })
    }

    /// Pairs `(a, b)` of same-order strokes where every pixel of `a` is also in `b`.
    ///
    /// Decoding keeps the larger stroke of such a pair, so these are the cases where
    /// containment alone would be ambiguous.
    pub fn subset_pairs(&self) -> Result<Vec<(u32, u32)>> {
        let strokes = self.full_strokes()?;
        let mut pairs = Vec::new();
        for a in strokes.iter().filter(|s| !s.is_zero()) {
            for b in strokes.iter().filter(|s| !s.is_zero()) {
                if a.value() != b.value() && a.order() == b.order() && b.canvas().contains(a.canvas())? {
                    pairs.push((a.value(), b.value()));
                }
            }
        }
        Ok(pairs)
    }
}

fn fill(cache: &mut Cache, geometry: Geometry, value: u32) -> Result<Stroke> {
    if !is_legal_key(value) {
        return Err(CodecError::InvalidKey(value.to_string()));
    }
    if let Some(stroke) = cache.strokes.get(&value) {
        return Ok(stroke.clone());
    }
    let stroke = match Order::of_value(value) {
        None => Stroke::zero(geometry)?,
        Some(Order::Units) => build_digit(geometry, value)?,
        Some(order) => {
            let digit = fill(cache, geometry, value / order.multiplier())?;
            to_order(&digit, order)
        }
    };
    debug!(value, height = geometry.height(), width = geometry.width(), "created missing stroke");
    cache.insert(stroke.clone());
    Ok(stroke)
}

pub fn build_mapping(height: usize, width: usize, full: bool) -> Result<StrokeMapping> {
    if full {
        StrokeMapping::full(height, width)
    } else {
        StrokeMapping::new(height, width)
    }
}

impl Clone for StrokeMapping {
    fn clone(&self) -> Self {
        let cache = self.lock();
        let mut copy = Cache::default();
        for stroke in cache.strokes.values() {
            copy.insert(stroke.clone());
        }
        StrokeMapping { geometry: self.geometry, cache: Mutex::new(copy) }
    }
}

impl PartialEq for StrokeMapping {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // one lock at a time, so comparing in both directions from two threads can't deadlock
        let ours = self.strokes();
        let theirs = other.strokes();
        self.geometry == other.geometry
            && ours.iter().map(Stroke::value).eq(theirs.iter().map(Stroke::value))
            && ours == theirs
    }
}

impl fmt::Debug for StrokeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrokeMapping")
            .field("height", &self.height())
            .field("width", &self.width())
            .field("keys", &self.keys())
            .finish()
    }
}
