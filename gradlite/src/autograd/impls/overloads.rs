//! `std::ops` for [`Scalar`]: `x + y`, `x - y`, `x * y`, `x / y`, `-x`, with a
//! plain `f64` accepted on either side.
//!
//! Every owned/borrowed combination funnels into the functions below.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::op::Op;
use super::scalar::Scalar;
use crate::autograd::Pow;

fn add(lhs: &Scalar, rhs: &Scalar) -> Scalar {
    Scalar::from_op(lhs.value() + rhs.value(), Op::Add(lhs.clone(), rhs.clone()))
}

fn mul(lhs: &Scalar, rhs: &Scalar) -> Scalar {
    Scalar::from_op(lhs.value() * rhs.value(), Op::Mul(lhs.clone(), rhs.clone()))
}

fn neg(x: &Scalar) -> Scalar {
    mul(x, &Scalar::new(-1.0))
}

fn sub(lhs: &Scalar, rhs: &Scalar) -> Scalar {
    add(lhs, &neg(rhs))
}

fn div(lhs: &Scalar, rhs: &Scalar) -> Scalar {
    mul(lhs, &rhs.pow(-1.0))
}

macro_rules! scalar_binop {
    ($trait:ident, $method:ident, $func:ident) => {
        impl $trait<&Scalar> for &Scalar {
            type Output = Scalar;

            fn $method(self, rhs: &Scalar) -> Scalar {
                $func(self, rhs)
            }
        }

        impl $trait<Scalar> for &Scalar {
            type Output = Scalar;

            fn $method(self, rhs: Scalar) -> Scalar {
                $func(self, &rhs)
            }
        }

        impl $trait<&Scalar> for Scalar {
            type Output = Scalar;

            fn $method(self, rhs: &Scalar) -> Scalar {
                $func(&self, rhs)
            }
        }

        impl $trait<Scalar> for Scalar {
            type Output = Scalar;

            fn $method(self, rhs: Scalar) -> Scalar {
                $func(&self, &rhs)
            }
        }

        impl $trait<f64> for &Scalar {
            type Output = Scalar;

            fn $method(self, rhs: f64) -> Scalar {
                $func(self, &Scalar::new(rhs))
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;

            fn $method(self, rhs: f64) -> Scalar {
                $func(&self, &Scalar::new(rhs))
            }
        }
    };
}

scalar_binop!(Add, add, add);
scalar_binop!(Sub, sub, sub);
scalar_binop!(Mul, mul, mul);
scalar_binop!(Div, div, div);

// -----------------------------------------------------------------------------
// Reflected: number OP node
// -----------------------------------------------------------------------------

macro_rules! reflected_binop {
    ($trait:ident, $method:ident, |$n:ident, $x:ident| $body:expr) => {
        impl $trait<&Scalar> for f64 {
            type Output = Scalar;

            fn $method(self, rhs: &Scalar) -> Scalar {
                let ($n, $x) = (self, rhs);
                $body
            }
        }

        impl $trait<Scalar> for f64 {
            type Output = Scalar;

            fn $method(self, rhs: Scalar) -> Scalar {
                let ($n, $x) = (self, &rhs);
                $body
            }
        }
    };
}

reflected_binop!(Add, add, |n, x| add(x, &Scalar::new(n)));
reflected_binop!(Mul, mul, |n, x| mul(x, &Scalar::new(n)));
// n - x = (-x) + n
reflected_binop!(Sub, sub, |n, x| add(&neg(x), &Scalar::new(n)));
// n / x = n * x^-1
reflected_binop!(Div, div, |n, x| mul(&Scalar::new(n), &x.pow(-1.0)));

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg(&self)
    }
}

// -----------------------------------------------------------------------------
// Sum: starts from a 0.0 leaf, so an empty iterator yields a 0.0 leaf
// -----------------------------------------------------------------------------

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::new(0.0), |acc, x| add(&acc, &x))
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::new(0.0), |acc, x| add(&acc, x))
    }
}
