// Randomly built flat records with bounded field domains. Each record is
// created once, printed, and never mutated.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const FIRST_NAMES: [&str; 5] = ["Alice", "Boris", "Clara", "Dmitri", "Elena"];
pub const LAST_NAMES: [&str; 5] = ["Ivanov", "Petrov", "Sidorov", "Smirnov", "Volkov"];
pub const DENOMINATIONS: [u32; 7] = [1, 5, 10, 50, 100, 500, 1000];

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 70;
pub const MIN_SHAPE_SIZE: u32 = 1;
pub const MAX_SHAPE_SIZE: u32 = 100;

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Jpy];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

impl Employee {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            first_name: pick(rng, &FIRST_NAMES).to_string(),
            last_name: pick(rng, &LAST_NAMES).to_string(),
            age: rng.gen_range(MIN_AGE..=MAX_AGE),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (age {})", self.first_name, self.last_name, self.age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banknote {
    pub denomination: u32,
    pub currency: Currency,
}

impl Banknote {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            denomination: *pick(rng, &DENOMINATIONS),
            currency: *pick(rng, &Currency::ALL),
        }
    }
}

impl fmt::Display for Banknote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.denomination, self.currency.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub size: u32,
}

impl Shape {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            kind: *pick(rng, &ShapeKind::ALL),
            size: rng.gen_range(MIN_SHAPE_SIZE..=MAX_SHAPE_SIZE),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of size {}", self.kind.name(), self.size)
    }
}
