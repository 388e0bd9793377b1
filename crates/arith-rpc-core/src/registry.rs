//! Fixed table of arithmetic operations.
//!
//! | operation | arity       | result                     |
//! |-----------|-------------|----------------------------|
//! | add       | 0 or more   | sum, empty sum is 0        |
//! | multiply  | 0 or more   | product, empty product is 1|
//! | subtract  | exactly 2   | `a - b`                    |
//! | divide    | exactly 2   | `a / b`, `b == 0` faults   |
//! | modulo    | exactly 2   | `a % b`, `b == 0` faults   |
//!
//! All arithmetic wraps on 32-bit overflow.

use crate::error::{Result, RpcError};
use std::fmt;

/// How many arguments an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Fixed(usize),
    /// Any number of arguments, folded starting from `identity`.
    Variadic { identity: i32 },
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(expected) => count == *expected,
            Arity::Variadic { .. } => true,
        }
    }
}

/// How an operation turns its arguments into a result.
#[derive(Clone, Copy)]
enum Compute {
    /// Fold every argument into the accumulator, starting from the
    /// operation's [`Arity::Variadic`] identity.
    Fold(fn(i32, i32) -> i32),
    /// Exactly two operands, left to right.
    Binary(fn(i32, i32) -> Result<i32>),
}

/// A registered operation.
#[derive(Clone, Copy)]
pub struct OperationSpec {
    pub name: &'static str,
    pub arity: Arity,
    compute: Compute,
}

impl OperationSpec {
    /// Check the arity rule, then compute.
    pub fn apply(&self, args: &[i32]) -> Result<i32> {
        match (self.arity, self.compute, args) {
            (Arity::Variadic { identity }, Compute::Fold(step), _) => {
                Ok(args.iter().fold(identity, |acc, n| step(acc, *n)))
            }
            (Arity::Fixed(2), Compute::Binary(op), [lhs, rhs]) => op(*lhs, *rhs),
            _ => Err(RpcError::InvalidArguments {
                method: self.name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for OperationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationSpec")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

static OPERATIONS: [OperationSpec; 5] = [
    OperationSpec {
        name: "add",
        arity: Arity::Variadic { identity: 0 },
        compute: Compute::Fold(i32::wrapping_add),
    },
    OperationSpec {
        name: "subtract",
        arity: Arity::Fixed(2),
        compute: Compute::Binary(subtract),
    },
    OperationSpec {
        name: "multiply",
        arity: Arity::Variadic { identity: 1 },
        compute: Compute::Fold(i32::wrapping_mul),
    },
    OperationSpec {
        name: "divide",
        arity: Arity::Fixed(2),
        compute: Compute::Binary(divide),
    },
    OperationSpec {
        name: "modulo",
        arity: Arity::Fixed(2),
        compute: Compute::Binary(modulo),
    },
];

/// Look up an operation by its exact (case-sensitive) name.
pub fn lookup(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// All registered operations, in table order.
pub fn operations() -> &'static [OperationSpec] {
    &OPERATIONS
}

fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
    Ok(lhs.wrapping_sub(rhs))
}

fn divide(lhs: i32, rhs: i32) -> Result<i32> {
    if rhs == 0 {
        return Err(RpcError::DivideByZero);
    }
    // i32::MIN / -1 wraps to i32::MIN instead of panicking.
    Ok(lhs.wrapping_div(rhs))
}

fn modulo(lhs: i32, rhs: i32) -> Result<i32> {
    if rhs == 0 {
        return Err(RpcError::DivideByZero);
    }
    Ok(lhs.wrapping_rem(rhs))
}
