//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The generic parameters of the impls are given in
/// brackets before the operand types.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident,
        [$($generics:tt)*], $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($generics:tt)*], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($generics)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, [$($generics:tt)*], $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<$($generics)*> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements left-multiplication of a vector by a scalar of the given
/// element kind, which cannot be expressed generically.
macro_rules! impl_scalar_left_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl_binop!(Mul, mul, [const N: usize], $t, Vector<$t, N>, Vector<$t, N>, |a, b| {
                b.mul(*a)
            });
        )*
    };
}

/// Implements the dimension-specific constructor and the named component
/// accessors for the vector of the given dimension.
macro_rules! impl_named_components {
    ($n:literal, $($comp:ident, $comp_mut:ident, $set_comp:ident => $idx:literal),+ $(,)?) => {
        impl<T: Scalar> Vector<T, $n> {
            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($comp: T),+) -> Self {
                Self::from_components([$($comp),+])
            }

            $(
                #[doc = concat!("The ", stringify!($comp), "-component.")]
                #[inline]
                pub const fn $comp(&self) -> T {
                    self.components[$idx]
                }

                #[doc = concat!("A mutable reference to the ", stringify!($comp), "-component.")]
                #[inline]
                pub fn $comp_mut(&mut self) -> &mut T {
                    &mut self.components[$idx]
                }

                #[doc = concat!("Sets the ", stringify!($comp), "-component.")]
                #[inline]
                pub fn $set_comp(&mut self, value: T) {
                    self.components[$idx] = value;
                }
            )+
        }
    };
}
