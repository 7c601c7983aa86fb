// decimal orders and the reflections that carry a units stroke to the other quadrants:
//
//  units      tens       hundreds   thousands
//  _ x x      x x _      _ x _      _ x _
//  _ x _      _ x _      _ x _      _ x _
//  _ x _      _ x _      _ x x      x x _
//             (flip lr)  (flip ud)  (flip lr, then ud)

use crate::digits::Stroke;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Order {
    Units = 0,
    Tens = 1,
    Hundreds = 2,
    Thousands = 3,
}

impl Order {
    pub const ALL: [Order; 4] = [Order::Units, Order::Tens, Order::Hundreds, Order::Thousands];

    // floor(log10(value)); zero and values past the thousands have no order
    pub fn of_value(value: u32) -> Option<Order> {
        match value {
            1..=9 => Some(Order::Units),
            10..=99 => Some(Order::Tens),
            100..=999 => Some(Order::Hundreds),
            1000..=9999 => Some(Order::Thousands),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn multiplier(self) -> u32 {
        10u32.pow(self as u32)
    }
}

// the transforms are meant for units strokes: the value tag is multiplied along with the flip

pub fn to_tens(stroke: &Stroke) -> Stroke {
    Stroke::from_parts(stroke.value() * 10, stroke.geometry(), stroke.canvas().flip_horizontal())
}

pub fn to_hundreds(stroke: &Stroke) -> Stroke {
    Stroke::from_parts(stroke.value() * 100, stroke.geometry(), stroke.canvas().flip_vertical())
}

pub fn to_thousands(stroke: &Stroke) -> Stroke {
    to_hundreds(&to_tens(stroke))
}

pub fn to_order(stroke: &Stroke, order: Order) -> Stroke {
    match order {
        Order::Units => stroke.clone(),
        Order::Tens => to_tens(stroke),
        Order::Hundreds => to_hundreds(stroke),
        Order::Thousands => to_thousands(stroke),
    }
}
