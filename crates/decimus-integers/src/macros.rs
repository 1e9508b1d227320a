//! Operator forwarding.
//!
//! Each type implements `OpAssign<&T>` by hand; these macros derive the
//! owned and borrowed binary forms from it.

/// Derives `T op T`, `T op &T`, `&T op T`, `&T op &T` and `T op= T` from
/// `T op= &T`.
macro_rules! forward_binop {
    ($t:ty, $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<$t> for $t {
            type Output = $t;

            fn $method(mut self, rhs: $t) -> $t {
                $assign_imp::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            fn $method(mut self, rhs: &$t) -> $t {
                $assign_imp::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                let mut out = self.clone();
                $assign_imp::$assign_method(&mut out, &rhs);
                out
            }
        }

        impl $imp<&$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> $t {
                let mut out = self.clone();
                $assign_imp::$assign_method(&mut out, rhs);
                out
            }
        }

        impl $assign_imp<$t> for $t {
            fn $assign_method(&mut self, rhs: $t) {
                $assign_imp::$assign_method(self, &rhs);
            }
        }
    };
}

pub(crate) use forward_binop;
